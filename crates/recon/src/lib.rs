//! `candrec-recon` — interview/candidate reconciliation engine.
//!
//! Pure engine crate: receives config and pre-loaded CSV text, returns
//! classified results. No CLI or file IO dependencies.

pub mod classify;
pub mod config;
pub mod derived;
pub mod engine;
pub mod error;
pub mod model;
pub mod report;

pub use config::ReconConfig;
pub use engine::{load_interviews, run};
pub use error::ReconError;
pub use model::{InterviewRecord, ReconResult, UnmatchBucket, UnmatchedRecord};
