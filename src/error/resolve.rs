//! Mapping of `(command, return code)` pairs to error kinds.

use super::ErrorKind;

/// Command side of a table entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandMatch<'a> {
    /// Matches only this NSSM command.
    Is(&'a str),
    /// Matches every command.
    Any,
}

/// Return-code side of a table entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeMatch {
    /// Matches only this return code.
    Is(i32),
    /// Matches every return code.
    Any,
}

/// Known failure mappings.
///
/// Lookup order, not table order, decides precedence; see [`resolve`].
pub const ERROR_TABLE: &[(CommandMatch<'static>, CodeMatch, ErrorKind)] = &[
    (CommandMatch::Any, CodeMatch::Is(3), ErrorKind::DoesNotExist),
    (CommandMatch::Is("install"), CodeMatch::Is(5), ErrorKind::AlreadyInstalled),
    (CommandMatch::Is("install"), CodeMatch::Any, ErrorKind::InstallFailed),
    (CommandMatch::Is("remove"), CodeMatch::Any, ErrorKind::RemoveFailed),
    (CommandMatch::Is("start"), CodeMatch::Any, ErrorKind::StartFailed),
    (CommandMatch::Is("restart"), CodeMatch::Any, ErrorKind::StartFailed),
    (CommandMatch::Is("stop"), CodeMatch::Any, ErrorKind::StopFailed),
    (CommandMatch::Is("pause"), CodeMatch::Is(1), ErrorKind::NotStarted),
    (CommandMatch::Is("pause"), CodeMatch::Any, ErrorKind::PauseFailed),
    (CommandMatch::Is("continue"), CodeMatch::Is(1), ErrorKind::NotStarted),
    (CommandMatch::Is("continue"), CodeMatch::Any, ErrorKind::ResumeFailed),
    (CommandMatch::Is("set"), CodeMatch::Any, ErrorKind::ConfigurationFailed),
    (CommandMatch::Is("get"), CodeMatch::Any, ErrorKind::ConfigurationFailed),
];

/// Resolves the most specific error kind for a failed command.
///
/// Tries, in order:
/// 1. the exact `(command, code)` pair
/// 2. `(any command, code)`: some codes mean the same thing for every
///    command (3 is always "service does not exist")
/// 3. `(command, any code)`
///
/// and falls back to [`ErrorKind::Nssm`].
#[must_use]
pub fn resolve(command: &str, return_code: i32) -> ErrorKind {
    let exact = (CommandMatch::Is(command), CodeMatch::Is(return_code));
    let by_code = (CommandMatch::Any, CodeMatch::Is(return_code));
    let by_command = (CommandMatch::Is(command), CodeMatch::Any);

    [exact, by_code, by_command]
        .into_iter()
        .find_map(|key| lookup(key.0, key.1))
        .unwrap_or(ErrorKind::Nssm)
}

fn lookup(command: CommandMatch<'_>, code: CodeMatch) -> Option<ErrorKind> {
    ERROR_TABLE
        .iter()
        .find(|(cmd, rc, _)| *cmd == command && *rc == code)
        .map(|(_, _, kind)| *kind)
}
