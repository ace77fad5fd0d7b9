//! Operational errors reported by NSSM.
//!
//! This module provides:
//! - The error kind hierarchy ([`ErrorKind`])
//! - The single error type carrying service, message, captured output, and
//!   return code ([`NssmError`])
//! - Resolution of a `(command, return code)` pair to the most specific kind
//!   ([`resolve`])

mod kind;
mod resolve;


pub use kind::{ErrorKind, NssmError};
pub use resolve::{CommandMatch, CodeMatch, ERROR_TABLE, resolve};
