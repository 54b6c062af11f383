use num_fermat::{classify64, confidence, Classification};

/// Tally the classifier verdicts over [2, limit)
fn tally(limit: u64, trials: usize) -> (usize, usize, usize) {
    let mut counts = (0, 0, 0);
    for n in 2..limit {
        match classify64(n, trials).unwrap() {
            Classification::Prime => counts.0 += 1,
            Classification::Composite => counts.1 += 1,
            Classification::Carmichael => counts.2 += 1,
        }
    }
    counts
}

fn main() {
    let trials = 10;
    let (primes, composites, carmichaels) = tally(2000, trials);
    println!(
        "Verdicts over [2, 2000) with {} trials each ({}% confidence):",
        trials,
        confidence(trials).unwrap()
    );
    println!("  prime:      {}", primes);
    println!("  composite:  {}", composites);
    println!("  carmichael: {}", carmichaels);
}
