//! Rule-based screening of job applications.
//!
//! [`screening::ApplicationEvaluator`] applies the ordered rule chain; identity
//! checks are delegated to an [`screening::IdentityValidator`] supplied by the
//! caller.

pub mod config;
pub mod error;
pub mod screening;
pub mod telemetry;
