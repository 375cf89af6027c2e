//! CATLX - NASA Task Load Index workload assessment
//!
//! This crate implements pairwise weight elicitation, weighted workload
//! scoring and per task element statistics for TLX studies.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
