//! Flows module - Operations that combine the core pieces
//!
//! Provides:
//! - batch: Count words for every input file with per-file failure isolation
//! - report: Human-readable per-file status and batch summary

pub mod batch;
pub mod report;
