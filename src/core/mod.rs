//! Core module - Contains the fundamental data structures and utilities
//!
//! This module provides:
//! - Frequency tables and batch outcome records
//! - The ASCII word tokenizer
//! - Error types
//! - Input reading, output path naming and output writing
//! - JSON rendering of counts

pub mod error;
pub mod file_reader;
pub mod model;
pub mod output;
pub mod paths;
pub mod render;
pub mod tokenizer;
pub mod util;
