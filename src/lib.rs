//! Filesystem-like client over a generic remote procedure call transport.
//!
//! Every capability of [`client::Client`] maps to one remote call. Failures
//! are split into [`Error::Fatal`], after which the session must be dropped,
//! and [`Error::Application`], which the caller may recover from.

#[macro_use]
extern crate log;
#[macro_use]
extern crate async_trait;

/// Capability set and its RPC adapter
pub mod client;
mod error;
/// Procedure names, call arguments and reply shapes
pub mod protocol;

pub use error::{BoxError, Error, MalformedReply};
