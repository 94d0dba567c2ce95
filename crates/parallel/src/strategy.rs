//! Processing modes

use mrelbp_core::{Error, Result};

/// Processing mode for pipeline runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProcessingMode {
    /// Single worker thread
    Sequential,
    /// The global pool, sized to the available cores
    #[default]
    Parallel,
    /// Dedicated pool with the given number of threads
    ParallelWith(usize),
}

impl ProcessingMode {
    /// Mode for an optional thread count, as given on a command line
    pub fn from_threads(threads: Option<usize>) -> Self {
        match threads {
            None => ProcessingMode::Parallel,
            Some(1) => ProcessingMode::Sequential,
            Some(n) => ProcessingMode::ParallelWith(n),
        }
    }

    /// Run `f`, with every parallel iterator inside it scheduled on this
    /// mode's pool.
    #[cfg(feature = "parallel")]
    pub fn install<R, F>(&self, f: F) -> Result<R>
    where
        R: Send,
        F: FnOnce() -> R + Send,
    {
        let threads = match self {
            ProcessingMode::Parallel => return Ok(f()),
            ProcessingMode::Sequential => 1,
            ProcessingMode::ParallelWith(0) => {
                return Err(Error::InvalidParameter {
                    name: "threads",
                    value: "0".to_string(),
                    reason: "thread count must be at least 1".to_string(),
                });
            }
            ProcessingMode::ParallelWith(n) => *n,
        };
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()
            .map_err(|e| Error::Other(format!("Failed to build thread pool: {}", e)))?;
        Ok(pool.install(f))
    }

    /// Run `f` on the calling thread.
    #[cfg(not(feature = "parallel"))]
    pub fn install<R, F>(&self, f: F) -> Result<R>
    where
        R: Send,
        F: FnOnce() -> R + Send,
    {
        if let ProcessingMode::ParallelWith(0) = self {
            return Err(Error::InvalidParameter {
                name: "threads",
                value: "0".to_string(),
                reason: "thread count must be at least 1".to_string(),
            });
        }
        Ok(f())
    }
}

/// Number of threads in the current pool
#[cfg(feature = "parallel")]
pub fn num_threads() -> usize {
    rayon::current_num_threads()
}

#[cfg(not(feature = "parallel"))]
pub fn num_threads() -> usize {
    1
}
