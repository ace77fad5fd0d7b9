//! Invocation result type and runner trait.

use std::path::PathBuf;

use thiserror::Error;

/// Error type for invocations that never produced a return code.
///
/// A non-zero return code is not an error at this layer; it is reported in
/// [`Invocation::return_code`] and interpreted by the caller.
#[derive(Debug, Error)]
pub enum InvokeError {
    /// The executable could not be started.
    #[error("Failed to run '{}': {source}", program.display())]
    Spawn {
        /// Executable that was attempted
        program: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

/// Outcome of one NSSM command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Process return code (`-1` if terminated without one)
    pub return_code: i32,
    /// Combined stdout and stderr text
    pub output: String,
}

impl Invocation {
    /// Creates an invocation result.
    #[must_use]
    pub fn new(return_code: i32, output: impl Into<String>) -> Self {
        Self {
            return_code,
            output: output.into(),
        }
    }

    /// Successful invocation with the given output.
    #[must_use]
    pub fn success(output: impl Into<String>) -> Self {
        Self::new(0, output)
    }

    /// Returns true if the return code is zero.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.return_code == 0
    }
}

/// Trait for running NSSM commands.
///
/// # Design
///
/// This trait abstracts process execution, enabling:
/// - Dependency injection for testing with scripted results
/// - Running NSSM through another mechanism (remote shell, elevated helper)
///
/// # Example
///
/// ```
/// use nssm_wrap::wrapper::{Invocation, InvokeError, Invoker};
///
/// struct AlwaysRunning;
///
/// impl Invoker for AlwaysRunning {
///     fn invoke(&self, _command: &str, _service: &str, _args: &[String]) -> Result<Invocation, InvokeError> {
///         Ok(Invocation::success("SERVICE_RUNNING"))
///     }
/// }
/// ```
pub trait Invoker: Send + Sync {
    /// Runs `nssm <command> <service> <args...>` to completion.
    ///
    /// # Errors
    ///
    /// Returns [`InvokeError`] only when the process could not be run at
    /// all. Failures reported by NSSM itself come back as an
    /// [`Invocation`] with a non-zero return code and its captured output.
    fn invoke(
        &self,
        command: &str,
        service: &str,
        args: &[String],
    ) -> Result<Invocation, InvokeError>;
}
