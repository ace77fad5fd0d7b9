//! Parameter layer for the NSSM command surface.
//!
//! This module provides:
//! - Closed enumerations of parameter values ([`StartupType`], [`PriorityLevel`],
//!   [`ServiceType`], [`ExitAction`]) with coercion from either a symbolic name
//!   or the token NSSM expects ([`ParamEnum`])
//! - The static table translating option keys into NSSM parameter names
//!   ([`param_name`], [`PARAM_MAP`])

mod kinds;
mod map;


pub use kinds::{EnumValueError, ExitAction, ParamEnum, PriorityLevel, ServiceType, StartupType};
pub use map::{PARAM_MAP, param_name};

pub(crate) use kinds::param_enum_conversions;
