use thiserror::Error;

/// Errors surfaced by the classification routines.
///
/// `InvalidArgument` and `ZeroModulus` are detected at entry;
/// `PrecisionLoss` can arise mid-computation on fixed-width integers. No
/// partial result is produced once one is raised.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// An argument lies outside the supported domain, e.g. a non-positive
    /// target or a zero trial count.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// Modular reduction with a zero modulus was requested.
    #[error("modulus must be nonzero")]
    ZeroModulus,

    /// An intermediate product cannot be represented exactly by the integer
    /// type in use, so the computation is refused rather than wrapped around.
    /// Rerun with a wider machine integer or a bigint.
    #[error("intermediate value exceeds the integer type; use a wider or arbitrary-precision type")]
    PrecisionLoss,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        assert_eq!(
            Error::InvalidArgument("target must be positive").to_string(),
            "invalid argument: target must be positive"
        );
        assert_eq!(Error::ZeroModulus.to_string(), "modulus must be nonzero");
        assert!(Error::PrecisionLoss.to_string().contains("arbitrary-precision"));
    }
}
