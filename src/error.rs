// Error taxonomy shared by every space operation.

/// Recoverable errors across space APIs.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SpaceError {
    /// A construction invariant was violated; the space was not built.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
    /// A flat vector could not be decoded back into a value of the space.
    #[error("Malformed encoding: {0}")]
    MalformedEncoding(String),
    /// A value handed to `flatten` is not a member of the space.
    #[error("Domain violation: {0}")]
    DomainViolation(String),
    #[error("Operation not supported: {0}")]
    NotSupported(String),
}

impl SpaceError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        let msg = msg.into();
        log::debug!("rejected space configuration: {msg}");
        SpaceError::InvalidConfiguration(msg)
    }

    pub(crate) fn malformed(msg: impl Into<String>) -> Self {
        let msg = msg.into();
        log::debug!("rejected flat encoding: {msg}");
        SpaceError::MalformedEncoding(msg)
    }

    pub(crate) fn violation(msg: impl Into<String>) -> Self {
        SpaceError::DomainViolation(msg.into())
    }

    /// Width check used by every `unflatten`.
    pub(crate) fn check_width(expected: usize, actual: usize) -> Result<()> {
        if expected != actual {
            return Err(Self::malformed(format!("expected width {expected}, got {actual}")));
        }
        Ok(())
    }

    /// Sum of flattened widths; overflow is a configuration error.
    pub(crate) fn total_width(widths: impl IntoIterator<Item = usize>) -> Result<usize> {
        widths.into_iter().try_fold(0usize, |acc, w| {
            acc.checked_add(w)
                .ok_or_else(|| Self::invalid("flattened width overflows usize"))
        })
    }
}

/// Convenience alias for results using SpaceError.
pub type Result<T> = std::result::Result<T, SpaceError>;
