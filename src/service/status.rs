//! Service status reported by NSSM.

use std::sync::LazyLock;

use regex::Regex;
use strum::{EnumIter, IntoStaticStr};

use crate::params::{ParamEnum, param_enum_conversions};

static STATUS_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"SERVICE_[A-Z]+(?:_[A-Z]+)*").unwrap());

/// State of a service as printed by `nssm status`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ServiceStatus {
    Stopped,
    StartPending,
    StopPending,
    Running,
    ContinuePending,
    PausePending,
    Paused,
}

impl ParamEnum for ServiceStatus {
    const TYPE_NAME: &'static str = "ServiceStatus";

    fn value(self) -> &'static str {
        match self {
            Self::Stopped => "SERVICE_STOPPED",
            Self::StartPending => "SERVICE_START_PENDING",
            Self::StopPending => "SERVICE_STOP_PENDING",
            Self::Running => "SERVICE_RUNNING",
            Self::ContinuePending => "SERVICE_CONTINUE_PENDING",
            Self::PausePending => "SERVICE_PAUSE_PENDING",
            Self::Paused => "SERVICE_PAUSED",
        }
    }
}

param_enum_conversions!(ServiceStatus);

/// Finds the first `SERVICE_*` token in `output` and resolves it.
///
/// Returns `None` when there is no token or it names no known state.
#[must_use]
pub fn parse_status(output: &str) -> Option<ServiceStatus> {
    let token = STATUS_TOKEN.find(output)?;
    ServiceStatus::coerce(token.as_str()).ok()
}
