//! Constant sentinel errors.
//!
//! `ConstError` plays the role `std::io::ErrorKind`-style sentinels play in
//! other crates, but for string-identified errors: it can be declared as a
//! `pub const`, compared by value, and stored in a text column.
//!
//! ```
//! use grpc_errors::ConstError;
//!
//! pub const QUEUE_CLOSED: ConstError = ConstError::new("queue closed");
//!
//! fn pop() -> Result<u32, ConstError> {
//!     Err(QUEUE_CLOSED)
//! }
//!
//! assert_eq!(pop(), Err(QUEUE_CLOSED));
//! ```

use std::convert::Infallible;
use std::error::Error;

use serde::Serialize;
use tonic::Status;

use crate::value::{ScalarValue, Valuer};

/// An error defined by a string literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, thiserror::Error)]
#[error("{0}")]
pub struct ConstError(&'static str);

impl ConstError {
    /// Create a constant error. Usable in `const` items.
    pub const fn new(message: &'static str) -> Self {
        Self(message)
    }

    /// Return the error message.
    pub const fn as_str(&self) -> &'static str {
        self.0
    }

    /// Report whether `err` is this sentinel.
    ///
    /// Only the error itself is checked, not its `source()` chain.
    pub fn is(&self, err: &(dyn Error + 'static)) -> bool {
        err.downcast_ref::<ConstError>() == Some(self)
    }
}

impl AsRef<str> for ConstError {
    fn as_ref(&self) -> &str {
        self.0
    }
}

impl Valuer for ConstError {
    type Error = Infallible;

    fn value(&self) -> Result<ScalarValue, Infallible> {
        Ok(ScalarValue::Text(self.0.to_string()))
    }
}

impl Serialize for ConstError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.0)
    }
}

/// Plain errors that reach a gRPC boundary unwrapped are reported as `Unknown`.
impl From<ConstError> for Status {
    fn from(e: ConstError) -> Self {
        Status::unknown(e.0)
    }
}
