//! CronApp Application Orchestration Layer
//!
//! Use cases for the session lifecycle, onboarding gating and profile
//! management, wired against the ports declared in `ca-core`.

pub mod deps;
pub mod runtime;
pub mod usecases;

pub use deps::{AppDeps, SessionTimings};
pub use runtime::AppRuntime;
