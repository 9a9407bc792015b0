//! gRPC status wrapping.
//!
//! Every helper takes an error by value (anything convertible into a
//! [`BoxError`]) and returns a `tonic::Status` whose message is the error's
//! `Display` output. They fit straight into
//! `map_err`:
//!
//! ```
//! use grpc_errors::{errorf, invalid_argument, FormattedError};
//!
//! fn parse_page(raw: &str) -> Result<u32, FormattedError> {
//!     raw.parse().map_err(|_| errorf!("page must be a number: {raw}"))
//! }
//!
//! let status = parse_page("abc").map_err(invalid_argument).unwrap_err();
//! assert_eq!(status.code(), tonic::Code::InvalidArgument);
//! ```

use std::error::Error;

use tonic::{Code, Status};

/// Any error a helper accepts: concrete error types, `Box<dyn Error + Send + Sync>`,
/// `anyhow::Error`, `String` and `&str`.
pub type BoxError = Box<dyn Error + Send + Sync>;

/// Wrap `err` in a `Status` carrying `code`.
///
/// The message is `err.to_string()`. A `Status` being re-wrapped is rendered
/// as `rpc error: code = <code> desc = <message>` with its message verbatim,
/// so the innermost text survives any depth of nesting.
pub fn grpc<E: Into<BoxError>>(code: Code, err: E) -> Status {
    #[cfg(feature = "trace-codes")]
    tracing::trace!(grpc.code = ?code, "attaching grpc status code");
    Status::new(code, render(err.into()))
}

fn render(err: BoxError) -> String {
    match err.downcast::<Status>() {
        Ok(status) => format!(
            "rpc error: code = {:?} desc = {}",
            status.code(),
            status.message()
        ),
        Err(err) => err.to_string(),
    }
}

/// Wrap `err` with `Code::InvalidArgument`.
pub fn invalid_argument<E: Into<BoxError>>(err: E) -> Status {
    grpc(Code::InvalidArgument, err)
}

/// Wrap `err` with `Code::Internal`.
pub fn internal<E: Into<BoxError>>(err: E) -> Status {
    grpc(Code::Internal, err)
}

/// Wrap `err` with `Code::Unauthenticated`.
pub fn unauthenticated<E: Into<BoxError>>(err: E) -> Status {
    grpc(Code::Unauthenticated, err)
}

/// Wrap `err` with `Code::PermissionDenied`.
pub fn forbidden<E: Into<BoxError>>(err: E) -> Status {
    grpc(Code::PermissionDenied, err)
}

/// Wrap `err` with `Code::NotFound`.
pub fn not_found<E: Into<BoxError>>(err: E) -> Status {
    grpc(Code::NotFound, err)
}

/// Wrap `err` with `Code::Unavailable`.
pub fn unavailable<E: Into<BoxError>>(err: E) -> Status {
    grpc(Code::Unavailable, err)
}

/// Wrap `err` with `Code::FailedPrecondition`.
pub fn failed_precondition<E: Into<BoxError>>(err: E) -> Status {
    grpc(Code::FailedPrecondition, err)
}

/// Wrap `err` with `Code::PermissionDenied`.
///
/// Same as [`forbidden`]; kept so existing callers keep compiling.
pub fn denied<E: Into<BoxError>>(err: E) -> Status {
    grpc(Code::PermissionDenied, err)
}

/// Return the status code carried by `err`.
///
/// Errors that are not a `Status` report `Code::Unknown`.
pub fn code_of(err: &(dyn Error + 'static)) -> Code {
    err.downcast_ref::<Status>()
        .map_or(Code::Unknown, Status::code)
}
