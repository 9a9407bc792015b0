//! Ad-hoc formatted errors.

use std::fmt;

use tonic::Status;

/// An error whose message is built from format arguments.
///
/// Use the [`errorf!`](crate::errorf) macro rather than constructing this
/// directly.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct FormattedError(String);

impl FormattedError {
    /// Return the formatted message.
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl From<String> for FormattedError {
    fn from(message: String) -> Self {
        Self(message)
    }
}

impl From<&str> for FormattedError {
    fn from(message: &str) -> Self {
        Self(message.to_string())
    }
}

/// Plain errors that reach a gRPC boundary unwrapped are reported as `Unknown`.
impl From<FormattedError> for Status {
    fn from(e: FormattedError) -> Self {
        Status::unknown(e.0)
    }
}

/// Build a [`FormattedError`] from pre-captured format arguments.
pub fn format_error(args: fmt::Arguments<'_>) -> FormattedError {
    FormattedError(fmt::format(args))
}

/// Create a [`FormattedError`] with `format!` syntax.
///
/// ```
/// let err = grpc_errors::errorf!("got {}", 5);
/// assert_eq!(err.to_string(), "got 5");
/// ```
#[macro_export]
macro_rules! errorf {
    ($($arg:tt)*) => {
        $crate::format::format_error(::std::format_args!($($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_errorf_formats_arguments() {
        let err = crate::errorf!("got {}", 5);
        assert_eq!(err.message(), "got 5");
        assert_eq!(err.to_string(), "got 5");
    }

    #[test]
    fn test_errorf_without_arguments() {
        let err = crate::errorf!("plain message");
        assert_eq!(err.to_string(), "plain message");
    }

    #[test]
    fn test_errorf_empty_message() {
        let err = crate::errorf!("");
        assert!(err.message().is_empty());
    }

    #[test]
    fn test_format_error_matches_macro() {
        let user = "bob";
        assert_eq!(
            format_error(format_args!("user {user} missing")),
            crate::errorf!("user {} missing", "bob")
        );
    }

    #[test]
    fn test_formatted_error_into_status_is_unknown() {
        let status: Status = crate::errorf!("boom").into();
        assert_eq!(status.code(), tonic::Code::Unknown);
        assert_eq!(status.message(), "boom");
    }
}
