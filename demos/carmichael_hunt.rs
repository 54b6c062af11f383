use num_fermat::is_carmichael;

/// Find all Carmichael numbers under the limit.
/// Reference: <https://oeis.org/A002997>
fn list_carmichaels(limit: u64) -> Vec<u64> {
    (1..limit).filter(|n| is_carmichael(n).unwrap()).collect()
}

fn main() {
    println!(
        "Carmichael numbers under 10000: {:?}",
        list_carmichaels(10000)
    );
}
