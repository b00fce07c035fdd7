//! Fixed-size worker pool over an immutable shared snapshot
//!
//! Every parallel stage is the same shape: take a list of items, run one function per item with
//! read access to a big shared collection (the corpus or the sentence pool), and hand the
//! results back to the caller tagged with the item they belong to. The pool lives as long as
//! the stage; dropping it joins its threads.
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};

use crate::errors::*;

/// Available parallelism minus one (for the orchestrating thread), but at least one
pub fn default_workers() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
        .saturating_sub(1)
        .max(1)
}

pub struct WorkerPool<S> {
    pool: ThreadPool,
    shared: Arc<S>,
    progress: bool,
}

impl<S: Send + Sync> WorkerPool<S> {
    /// Start `workers` threads which all read from `shared`
    pub fn new(workers: usize, shared: Arc<S>) -> Result<WorkerPool<S>> {
        if workers == 0 {
            return Err(Error::InvalidConfig("the worker pool needs at least one worker".into()));
        }
        let pool = ThreadPoolBuilder::new()
            .num_threads(workers)
            .thread_name(|i| format!("cooccur-worker-{}", i))
            .build()?;
        debug!("Started a pool of {} workers", workers);
        Ok(WorkerPool { pool, shared, progress: false })
    }

    /// Show a progress bar while mapping
    pub fn with_progress(mut self, progress: bool) -> WorkerPool<S> {
        self.progress = progress;
        self
    }

    /// Run `work` once per item and collect the results in submission order.
    ///
    /// Each result is paired with the item it was computed for. The first failing item fails the
    /// whole map, and so does a panicking worker.
    pub fn map<'i, I, R, F>(&self, label: &str, items: &'i [I], work: F) -> Result<Vec<(&'i I, R)>>
        where I: Sync, R: Send, F: Fn(&S, &I) -> Result<R> + Sync {
        let bar = self.progress_bar(label, items.len());
        let shared: &S = &self.shared;
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
            self.pool.install(|| {
                items.par_iter()
                    .map(|item| {
                        let result = work(shared, item);
                        bar.inc(1);
                        result.map(|r| (item, r))
                    })
                    .collect::<Result<Vec<_>>>()
            })
        }));
        bar.finish_and_clear();
        match outcome {
            Ok(results) => results,
            Err(payload) => Err(Error::WorkerPool(
                format!("a worker crashed during {}: {}", label, panic_message(&*payload)))),
        }
    }

    fn progress_bar(&self, label: &str, len: usize) -> ProgressBar {
        if !self.progress {
            return ProgressBar::hidden();
        }
        let bar = ProgressBar::new(len as u64);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{msg} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len}") {
            bar.set_style(style.progress_chars("#>-"));
        }
        bar.set_message(label.to_string());
        bar
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(text) = payload.downcast_ref::<&str>() {
        text.to_string()
    } else if let Some(text) = payload.downcast_ref::<String>() {
        text.clone()
    } else {
        "unknown panic".to_string()
    }
}
