//! Production invoker running the NSSM executable.

use std::path::{Path, PathBuf};
use std::process::Command;
use std::sync::LazyLock;

use regex::Regex;

use super::{Invocation, InvokeError, Invoker};

static NEWLINES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[\r\n]+").unwrap());

/// Runs NSSM as a child process.
///
/// Stdout and stderr are captured and decoded (NSSM writes UTF-16 when its
/// output is redirected). On failure, line breaks in the output are folded
/// into single spaces so the text reads as one message.
#[derive(Debug, Clone)]
pub struct NssmProcess {
    executable: PathBuf,
}

impl NssmProcess {
    /// Creates an invoker for the given executable.
    ///
    /// A bare file name is resolved through `PATH` by the OS.
    #[must_use]
    pub fn new(executable: impl Into<PathBuf>) -> Self {
        Self {
            executable: executable.into(),
        }
    }

    /// Returns the configured executable.
    #[must_use]
    pub fn executable(&self) -> &Path {
        &self.executable
    }

    /// Renders the command line for logging.
    fn command_line(&self, command: &str, service: &str, args: &[String]) -> String {
        let mut line = format!("{} {command} {service}", self.executable.display());
        for arg in args {
            line.push(' ');
            line.push_str(arg);
        }
        line
    }
}

impl Invoker for NssmProcess {
    fn invoke(
        &self,
        command: &str,
        service: &str,
        args: &[String],
    ) -> Result<Invocation, InvokeError> {
        tracing::debug!("{}", self.command_line(command, service, args));

        let output = Command::new(&self.executable)
            .arg(command)
            .arg(service)
            .args(args)
            .output()
            .map_err(|e| InvokeError::Spawn {
                program: self.executable.clone(),
                source: e,
            })?;

        let mut text = decode_output(&output.stdout);
        text.push_str(&decode_output(&output.stderr));

        let return_code = output.status.code().unwrap_or(-1);
        if return_code != 0 {
            text = collapse_newlines(&text);
        }

        Ok(Invocation::new(return_code, text))
    }
}

/// Decodes process output that may be UTF-16LE or UTF-8.
///
/// Output is treated as UTF-16LE when it starts with a byte-order mark or
/// when its odd bytes are mostly zero (ASCII text encoded as UTF-16LE).
#[must_use]
pub fn decode_output(bytes: &[u8]) -> String {
    if looks_like_utf16le(bytes) {
        let units: Vec<u16> = bytes
            .chunks_exact(2)
            .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
            .collect();
        let text = String::from_utf16_lossy(&units);
        text.strip_prefix('\u{feff}').map(str::to_string).unwrap_or(text)
    } else {
        String::from_utf8_lossy(bytes).into_owned()
    }
}

fn looks_like_utf16le(bytes: &[u8]) -> bool {
    if bytes.len() < 2 || bytes.len() % 2 != 0 {
        return false;
    }
    if bytes.starts_with(&[0xFF, 0xFE]) {
        return true;
    }
    let zeros = bytes.iter().skip(1).step_by(2).filter(|b| **b == 0).count();
    zeros * 2 >= bytes.len() / 2
}

/// Replaces every run of line breaks with a single space and trims the ends.
#[must_use]
pub fn collapse_newlines(text: &str) -> String {
    NEWLINES.replace_all(text, " ").trim().to_string()
}
