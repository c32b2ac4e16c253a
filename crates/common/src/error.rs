use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// The harness was asked to run zero trials per size, so no mean can be taken.
    ZeroTrials,

    /// Attempted to aggregate an empty set of measurements.
    EmptySample,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::ZeroTrials => write!(f, "Trial count must be at least 1."),

            Error::EmptySample => write!(f, "Cannot compute the mean of an empty sample."),
        }
    }
}

impl std::error::Error for Error {}
