//! # samplrs
//!
//! Survey sampling for Rust: load a population sampling frame as a tabular
//! [`Frame`], then draw a simple random sample without replacement or a
//! proportionally allocated stratified sample, summarize the result, and
//! export sample, allocation table and summary statistics as CSV.
//!
//! ```rust
//! use samplrs::frame::Frame;
//! use samplrs::series::Series;
//! use samplrs::stats;
//!
//! let mut frame = Frame::new();
//! let regions: Vec<String> = ["North", "South", "North", "North", "South", "North"]
//!     .iter()
//!     .map(|s| s.to_string())
//!     .collect();
//! frame.add_column("region".to_string(), Series::new(regions, None).unwrap()).unwrap();
//!
//! let result = stats::stratified_sample(&frame, "region", 3, stats::DEFAULT_SEED).unwrap();
//! let total: usize = result.allocation.iter().map(|a| a.sample_size).sum();
//! assert_eq!(total, 3);
//! ```

// Core module with fundamental types
pub mod core;

// Data structures
pub mod frame;
pub mod series;

// IO and statistics
pub mod io;
pub mod stats;

// Compatibility shim for the error types
pub mod error;

// Re-export core types
pub use crate::core::error::{Error, Result};
pub use crate::frame::Frame;
pub use crate::series::Series;
pub use crate::stats::{
    CategoryComparison, DescriptiveStats, FrequencyDistribution, StratifiedSample,
    StratumAllocation, DEFAULT_SEED,
};
