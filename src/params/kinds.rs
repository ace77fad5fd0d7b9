//! Enumerated parameter values and their coercion rules.

use strum::{EnumIter, IntoEnumIterator, IntoStaticStr};
use thiserror::Error;

/// Error returned when a string matches neither a name nor a value of an enumeration.
///
/// The message lists every accepted name and value so the user can fix the
/// input without consulting documentation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "\"{value}\" not a valid value or name of {type_name}, possible names are {} and possible values are {}",
    .names.join(", "),
    .values.join(", ")
)]
pub struct EnumValueError {
    /// The rejected input
    pub value: String,
    /// Name of the enumeration that rejected it
    pub type_name: &'static str,
    /// All symbolic names of the enumeration
    pub names: Vec<&'static str>,
    /// All canonical NSSM tokens of the enumeration
    pub values: Vec<&'static str>,
}

/// A closed set of symbolic values, each carrying the token NSSM uses for it.
///
/// Coercion accepts either form: `"AUTOMATIC"` and `"SERVICE_AUTO_START"`
/// both resolve to [`StartupType::Automatic`].
pub trait ParamEnum: Copy + IntoEnumIterator + Into<&'static str> + 'static {
    /// Human-readable name of the enumeration, used in error messages.
    const TYPE_NAME: &'static str;

    /// The canonical token NSSM expects and emits for this variant.
    fn value(self) -> &'static str;

    /// The symbolic name of this variant (e.g. `ABOVE_NORMAL`).
    fn name(self) -> &'static str {
        self.into()
    }

    /// All symbolic names, in declaration order.
    #[must_use]
    fn names() -> Vec<&'static str> {
        Self::iter().map(Self::name).collect()
    }

    /// All canonical tokens, in declaration order.
    #[must_use]
    fn values() -> Vec<&'static str> {
        Self::iter().map(Self::value).collect()
    }

    /// Resolves a variant from its symbolic name or its canonical token.
    ///
    /// Names are tried first, then values.
    ///
    /// # Errors
    ///
    /// Returns [`EnumValueError`] when `input` matches neither.
    fn coerce(input: &str) -> Result<Self, EnumValueError> {
        Self::iter()
            .find(|variant| variant.name() == input)
            .or_else(|| Self::iter().find(|variant| variant.value() == input))
            .ok_or_else(|| EnumValueError {
                value: input.to_string(),
                type_name: Self::TYPE_NAME,
                names: Self::names(),
                values: Self::values(),
            })
    }
}

/// When the service manager starts the service.
///
/// Delayed start is not available before Vista; NSSM falls back to
/// automatic startup there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum StartupType {
    /// Automatic startup at boot.
    Automatic,
    /// Delayed startup at boot.
    Delayed,
    /// Manual startup.
    Manual,
    /// Service is disabled.
    Disabled,
}

impl ParamEnum for StartupType {
    const TYPE_NAME: &'static str = "StartupType";

    fn value(self) -> &'static str {
        match self {
            Self::Automatic => "SERVICE_AUTO_START",
            Self::Delayed => "SERVICE_DELAYED_START",
            Self::Manual => "SERVICE_DEMAND_START",
            Self::Disabled => "SERVICE_DISABLED",
        }
    }
}

/// Priority class of the managed application, as accepted by `SetPriorityClass()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum PriorityLevel {
    Realtime,
    High,
    AboveNormal,
    Normal,
    BelowNormal,
    Idle,
}

impl ParamEnum for PriorityLevel {
    const TYPE_NAME: &'static str = "PriorityLevel";

    fn value(self) -> &'static str {
        match self {
            Self::Realtime => "REALTIME_PRIORITY_CLASS",
            Self::High => "HIGH_PRIORITY_CLASS",
            Self::AboveNormal => "ABOVE_NORMAL_PRIORITY_CLASS",
            Self::Normal => "NORMAL_PRIORITY_CLASS",
            Self::BelowNormal => "BELOW_NORMAL_PRIORITY_CLASS",
            Self::Idle => "IDLE_PRIORITY_CLASS",
        }
    }
}

/// Service type. NSSM recognises every documented type but only sets these two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ServiceType {
    /// A standalone service. This is the default.
    Standalone,
    /// A service which can interact with the desktop.
    Desktop,
}

impl ParamEnum for ServiceType {
    const TYPE_NAME: &'static str = "ServiceType";

    fn value(self) -> &'static str {
        match self {
            Self::Standalone => "SERVICE_WIN32_OWN_PROCESS",
            Self::Desktop => "SERVICE_INTERACTIVE_PROCESS",
        }
    }
}

/// What NSSM does when the managed application exits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ExitAction {
    /// Start the application again.
    Restart,
    /// Leave the service running without the application.
    Ignore,
    /// Stop the service.
    Exit,
    /// Stop the service without reporting a graceful shutdown, so recovery actions run.
    Suicide,
}

impl ParamEnum for ExitAction {
    const TYPE_NAME: &'static str = "ExitAction";

    fn value(self) -> &'static str {
        match self {
            Self::Restart => "Restart",
            Self::Ignore => "Ignore",
            Self::Exit => "Exit",
            Self::Suicide => "Suicide",
        }
    }
}

/// Implements `Display` (canonical token) and `FromStr` (coercion) for parameter enums.
macro_rules! param_enum_conversions {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl ::std::fmt::Display for $ty {
                fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                    f.write_str($crate::params::ParamEnum::value(*self))
                }
            }

            impl ::std::str::FromStr for $ty {
                type Err = $crate::params::EnumValueError;

                fn from_str(s: &str) -> Result<Self, Self::Err> {
                    <Self as $crate::params::ParamEnum>::coerce(s)
                }
            }
        )+
    };
}

pub(crate) use param_enum_conversions;

param_enum_conversions!(StartupType, PriorityLevel, ServiceType, ExitAction);
