//! Error taxonomy for Verdict
//!
//! A closed set of HTTP status errors, the structured body they carry on the
//! wire, and the [`Fault`] value the dispatcher consumes at the response
//! boundary.

#![allow(clippy::must_use_candidate)]

mod body;
mod error;
mod fault;
#[cfg(feature = "http")]
mod response;
mod status;

pub use body::ErrorBody;
pub use error::{CoreError, StatusError, StructuredError};
pub use fault::{Fault, get_body, set_message};
pub use status::{Status, StatusClass};
