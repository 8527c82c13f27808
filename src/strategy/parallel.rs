use std::any::Any;
use std::collections::HashSet;
use std::panic::{self, AssertUnwindSafe};
use std::time::Instant;

use dashmap::DashSet;
use log::{debug, trace};
use rayon::ThreadPoolBuilder;

use super::ExecutionStrategy;
use crate::error::{MatchErrorKind, Result, ScrabbleError};
use crate::matcher::WordMatcher;
use crate::types::{CandidateSet, ExecutionMode, MatchedWords};

/// Multi-worker strategy with static partitioning.
///
/// Candidates are split into at most `N` contiguous partitions of
/// `ceil(count / N)` words and each partition is handed to one job on a pool of `N`
/// threads. There is no rebalancing: a partition full of expensive words keeps its
/// worker busy while the others sit idle.
#[derive(Debug, Clone, Copy, Default)]
pub struct Parallel {
    workers: Option<usize>,
}

impl Parallel {
    /// `None` uses the available hardware parallelism
    pub fn new(workers: Option<usize>) -> Self {
        Self { workers }
    }

    /// Number of pool threads used for a run
    pub fn worker_count(&self) -> usize {
        self.workers
            .filter(|&n| n > 0)
            .unwrap_or_else(|| {
                std::thread::available_parallelism()
                    .map(|p| p.get())
                    .unwrap_or(1)
            })
    }
}

/// Partition size for `count` words over `workers` workers: `ceil(count / workers)`
pub fn partition_size(count: usize, workers: usize) -> usize {
    count.div_ceil(workers.max(1)).max(1)
}

impl ExecutionStrategy for Parallel {
    fn mode(&self) -> ExecutionMode {
        ExecutionMode::Parallel
    }

    fn run(&self, candidates: &CandidateSet, matcher: &dyn WordMatcher) -> Result<MatchedWords> {
        let start = Instant::now();
        let words: Vec<&str> = candidates.iter().collect();

        if words.is_empty() {
            return Ok(MatchedWords::Unordered(HashSet::new()));
        }

        let workers = self.worker_count();
        let size = partition_size(words.len(), workers);

        let pool = ThreadPoolBuilder::new()
            .num_threads(workers)
            .thread_name(|i| format!("scrabble-worker-{}", i))
            .build()
            .map_err(|e| {
                ScrabbleError::matching(
                    MatchErrorKind::PoolUnavailable,
                    format!("Failed to start {} workers: {}", workers, e),
                )
            })?;

        debug!(
            "matching {} candidates with {} workers, partition size {}",
            words.len(),
            workers,
            size
        );

        let matches: DashSet<String> = DashSet::new();

        // The scope only returns once every job has finished; a panicking job is
        // re-raised here after the others complete.
        let joined = panic::catch_unwind(AssertUnwindSafe(|| {
            pool.scope(|scope| {
                for (index, partition) in words.chunks(size).enumerate() {
                    let matches = &matches;
                    scope.spawn(move |_| {
                        trace!("worker {} started with {} words", index, partition.len());
                        for word in partition {
                            if matcher.matches(word) {
                                trace!("+{}", word);
                                matches.insert(word.to_string());
                            } else {
                                trace!("-{}", word);
                            }
                        }
                    });
                }
            })
        }));

        if let Err(payload) = joined {
            return Err(ScrabbleError::matching(
                MatchErrorKind::WorkerPanicked,
                format!("Worker failed before completion: {}", panic_message(&*payload)),
            ));
        }

        debug!(
            "parallel match of {} candidates took {:?}",
            words.len(),
            start.elapsed()
        );

        Ok(MatchedWords::Unordered(matches.into_iter().collect()))
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
