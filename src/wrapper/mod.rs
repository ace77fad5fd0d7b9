//! Process layer for running NSSM commands.
//!
//! This module provides types and traits for:
//! - Describing a finished invocation ([`Invocation`])
//! - Abstracting the process runner ([`Invoker`])
//! - Production implementation over `std::process` ([`NssmProcess`])

mod invoker;
mod process;


pub use invoker::{Invocation, InvokeError, Invoker};
pub use process::{NssmProcess, collapse_newlines, decode_output};
