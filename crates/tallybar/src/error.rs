//! Errors raised while setting up a progress bar

/// Result alias used throughout tallybar
pub type Result<T> = std::result::Result<T, Error>;

/// Errors of a progress bar
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The construction parameters can't describe a usable bar,
    /// e.g. a total of zero.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}

#[cfg(test)]
mod tests {
    use super::Error;

    #[test]
    fn message() {
        let err = Error::InvalidConfiguration("total must be positive, got 0".into());
        assert_eq!(
            err.to_string(),
            "invalid configuration: total must be positive, got 0"
        );
    }
}
