use thiserror::Error;

/// Error raised while declaring options, parsing the command line, or retrieving a parsed value.
///
/// The message is the whole of the error; it is stable and safe to show to the user.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{0}")]
pub struct ParseError(pub(crate) String);

impl ParseError {
    /// Create an error with the given message (for custom [`ArgType`](crate::ArgType) conversions).
    pub fn new(message: impl Into<String>) -> Self {
        ParseError(message.into())
    }

    pub(crate) fn out_of_range() -> Self {
        ParseError::new("Value out of range.")
    }

    pub(crate) fn not_set() -> Self {
        ParseError::new("Value not set.")
    }

    /// The human readable message.
    pub fn message(&self) -> &str {
        &self.0
    }
}

/// Error raised when an [`ArgsInitializer`](crate::ArgsInitializer) is configured with an invalid help layout.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{0}")]
pub struct InitializationError(pub(crate) String);

impl InitializationError {
    /// The human readable message.
    pub fn message(&self) -> &str {
        &self.0
    }
}

/// Either error kind, for callers that want to `?` declaration and parsing in one function.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ArgsError {
    /// See [`ParseError`].
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// See [`InitializationError`].
    #[error(transparent)]
    Initialization(#[from] InitializationError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_message() {
        let error = ParseError::new("Please set required param --arg.");
        assert_eq!(error.to_string(), "Please set required param --arg.");
        assert_eq!(error.message(), "Please set required param --arg.");
    }

    #[test]
    fn args_error_transparent() {
        let error = ArgsError::from(InitializationError("bad width".to_string()));
        assert_matches!(error, ArgsError::Initialization(_));
        assert_eq!(error.to_string(), "bad width");

        let error: ArgsError = ParseError::out_of_range().into();
        assert_matches!(error, ArgsError::Parse(ParseError(ref m)) if m == "Value out of range.");
    }
}
