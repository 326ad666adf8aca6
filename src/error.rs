/// Errors that can occur while creating or deriving a URL
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A required argument was empty or malformed
    BadParameter,
    /// A grammatically required component is missing, or the requested
    /// serialisation would be empty
    BadUrl,
    /// A buffer could not be allocated
    NoMemory,
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            Self::BadParameter => "Bad parameter",
            Self::BadUrl => "Bad URL",
            Self::NoMemory => "Insufficient memory",
        };
        f.write_str(msg)
    }
}

impl std::error::Error for Error {}

/// Result type for URL operations
pub type Result<T> = core::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Error::BadUrl.to_string(), "Bad URL");
        assert_eq!(Error::NoMemory.to_string(), "Insufficient memory");
        assert_eq!(Error::BadParameter.to_string(), "Bad parameter");
    }
}
