//! # MRELBP Parallel
//!
//! Thread-pool selection for descriptor pipelines.
//!
//! The algorithms crate parallelizes per pixel through rayon's global pool.
//! [`ProcessingMode`] runs any such computation inside a pool of a chosen
//! size, which is how callers pin the thread count.

mod strategy;

pub use strategy::{num_threads, ProcessingMode};
