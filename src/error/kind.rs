//! Error kinds and the error type parameterized by them.

use thiserror::Error;

/// Failure kinds, from most generic to most specific.
///
/// [`ErrorKind::Nssm`] is the root; [`ErrorKind::Service`] refines it; every
/// other kind refines [`ErrorKind::Service`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Any NSSM failure.
    Nssm,
    /// Any failure concerning a service.
    Service,
    DoesNotExist,
    InstallFailed,
    AlreadyInstalled,
    RemoveFailed,
    StartFailed,
    NotStarted,
    StopFailed,
    PauseFailed,
    ResumeFailed,
    ConfigurationFailed,
}

impl ErrorKind {
    /// Message used when no explicit one is supplied.
    #[must_use]
    pub const fn default_message(self) -> &'static str {
        match self {
            Self::Nssm => "NSSM error occurred",
            Self::Service => "Service error occurred",
            Self::DoesNotExist => "Service does not exist",
            Self::InstallFailed => "Service installation failed",
            Self::AlreadyInstalled => "Service is already installed",
            Self::RemoveFailed => "Service removal failed",
            Self::StartFailed => "Service start failed",
            Self::NotStarted => "Service is not started",
            Self::StopFailed => "Service stop failed",
            Self::PauseFailed => "Service pause failed",
            Self::ResumeFailed => "Service resume failed",
            Self::ConfigurationFailed => "Service configuration failed",
        }
    }

    /// The next more generic kind, or `None` for the root.
    #[must_use]
    pub const fn parent(self) -> Option<Self> {
        match self {
            Self::Nssm => None,
            Self::Service => Some(Self::Nssm),
            _ => Some(Self::Service),
        }
    }

    /// Returns true if `self` is `ancestor` or a refinement of it.
    #[must_use]
    pub fn is_a(self, ancestor: Self) -> bool {
        let mut current = Some(self);
        while let Some(kind) = current {
            if kind == ancestor {
                return true;
            }
            current = kind.parent();
        }
        false
    }
}

/// A failed NSSM invocation.
///
/// Displays as `[{service}] {message}`. The captured output and return code
/// stay available as fields so callers can branch on them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("[{service}] {message}")]
pub struct NssmError {
    /// Most specific known kind of the failure
    pub kind: ErrorKind,
    /// Service the command targeted
    pub service: String,
    /// Explicit message, or the kind's default
    pub message: String,
    /// Captured stdout/stderr of the failed invocation
    pub output: String,
    /// Return code of the failed invocation
    pub return_code: i32,
}

impl NssmError {
    /// Creates an error, falling back to the kind's default message.
    #[must_use]
    pub fn new(
        kind: ErrorKind,
        service: impl Into<String>,
        message: Option<String>,
        output: impl Into<String>,
        return_code: i32,
    ) -> Self {
        Self {
            kind,
            service: service.into(),
            message: message.unwrap_or_else(|| kind.default_message().to_string()),
            output: output.into(),
            return_code,
        }
    }

    /// Creates the error for a failed invocation of an already resolved kind.
    ///
    /// Specific kinds speak for themselves and keep their default message.
    /// The generic kind embeds the return code and output, since nothing
    /// else would tell the user what went wrong.
    #[must_use]
    pub fn from_failure(kind: ErrorKind, service: &str, output: &str, return_code: i32) -> Self {
        let message = (kind == ErrorKind::Nssm)
            .then(|| format!("{} ({return_code}): {output}", kind.default_message()));
        Self::new(kind, service, message, output, return_code)
    }

    /// Returns true if this error is of `kind` or a refinement of it.
    #[must_use]
    pub fn is(&self, kind: ErrorKind) -> bool {
        self.kind.is_a(kind)
    }
}
