use core::fmt;

/// Failure while building or serializing NDEF records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EncodeError {
    BufferTooSmall,
    ValueOutOfRange,
    InvalidLength,
    TooManyRecords,
    Message(&'static str),
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BufferTooSmall => f.write_str("buffer too small"),
            Self::ValueOutOfRange => f.write_str("value out of range"),
            Self::InvalidLength => f.write_str("invalid length"),
            Self::TooManyRecords => f.write_str("message record capacity exhausted"),
            Self::Message(msg) => f.write_str(msg),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for EncodeError {}

/// Result kinds of launch-app message encoding.
///
/// Callers can retry [`LaunchAppError::BufferTooSmall`] with a larger buffer;
/// the other kinds will fail again with the same input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LaunchAppError {
    /// Neither identifier was supplied, or one exceeded 255 bytes.
    InvalidArgument,
    /// The encoded message does not fit the supplied capacity.
    BufferTooSmall,
    /// The record/message builder rejected the input.
    Internal(EncodeError),
}

impl From<EncodeError> for LaunchAppError {
    fn from(err: EncodeError) -> Self {
        match err {
            EncodeError::BufferTooSmall => Self::BufferTooSmall,
            other => Self::Internal(other),
        }
    }
}

impl fmt::Display for LaunchAppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument => {
                f.write_str("invalid argument: no Android package name or Windows app id")
            }
            Self::BufferTooSmall => f.write_str("buffer too small for launch-app message"),
            Self::Internal(err) => write!(f, "ndef encoding failed: {err}"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for LaunchAppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Internal(err) => Some(err),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{EncodeError, LaunchAppError};

    #[test]
    fn capacity_errors_stay_recoverable() {
        assert_eq!(
            LaunchAppError::from(EncodeError::BufferTooSmall),
            LaunchAppError::BufferTooSmall
        );
    }

    #[test]
    fn builder_errors_are_internal() {
        assert_eq!(
            LaunchAppError::from(EncodeError::TooManyRecords),
            LaunchAppError::Internal(EncodeError::TooManyRecords)
        );
        assert_eq!(
            LaunchAppError::from(EncodeError::InvalidLength),
            LaunchAppError::Internal(EncodeError::InvalidLength)
        );
    }
}
