//! nssm-wrap: typed service configuration for NSSM
//!
//! A library for installing, controlling, and configuring Windows services
//! through the Non-Sucking Service Manager. Options are validated and
//! coerced before any NSSM command runs, and NSSM failures are mapped to
//! typed errors.

pub mod config;
pub mod error;
pub mod params;
pub mod service;
pub mod wrapper;
