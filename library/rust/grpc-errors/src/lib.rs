//! grpc-errors: Error helpers shared by system tier gRPC services.
//!
//! Provides helpers that attach a `tonic::Code` to an arbitrary error,
//! a `ConstError` type for `const` sentinel errors, and an `errorf!` macro
//! for ad-hoc formatted errors.
//!
//! ```
//! use grpc_errors::{errorf, not_found, ConstError};
//! use tonic::Code;
//!
//! pub const QUEUE_CLOSED: ConstError = ConstError::new("queue closed");
//!
//! let status = not_found(errorf!("user {} missing", "bob"));
//! assert_eq!(status.code(), Code::NotFound);
//! assert_eq!(status.message(), "user bob missing");
//! assert_eq!(QUEUE_CLOSED.as_str(), "queue closed");
//! ```

pub mod constant;
#[cfg(feature = "database")]
pub mod database;
pub mod format;
pub mod status;
pub mod value;

pub use constant::ConstError;
pub use format::{format_error, FormattedError};
pub use status::{
    code_of, denied, failed_precondition, forbidden, grpc, internal, invalid_argument, not_found,
    unauthenticated, unavailable, BoxError,
};
pub use tonic::{Code, Status};
pub use value::{ScalarValue, Valuer};
