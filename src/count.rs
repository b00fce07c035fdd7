//! Sentence-level co-occurrence of pair words
use std::sync::Arc;

use crate::corpus::contains_pair;
use crate::errors::*;
use crate::pairs::{Pair, PairSet};
use crate::pool::WorkerPool;

/// A pair together with every sentence containing both of its words
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cooccurrence {
    pub pair: Pair,
    pub sentences: Vec<String>,
}

impl Cooccurrence {
    pub fn count(&self) -> usize {
        self.sentences.len()
    }
}

/// Collect the sentences in which both pair words occur, or `None` if there are none.
///
/// Every sentence of the pool is checked, so a sentence appearing twice counts twice.
pub fn cooccurrence_for_pair(sentences: &[String], pair: &Pair) -> Option<Cooccurrence> {
    let matching: Vec<String> = sentences.iter()
        .filter(|sentence| contains_pair(sentence, pair))
        .cloned()
        .collect();
    if matching.is_empty() {
        None
    } else {
        Some(Cooccurrence { pair: pair.clone(), sentences: matching })
    }
}

/// Check every pair against the sentence pool, spread over `workers` threads.
///
/// Pairs without any co-occurrence are dropped.
pub fn count_cooccurrences(sentences: Arc<Vec<String>>, pairs: &PairSet, workers: usize,
                           progress: bool) -> Result<Vec<Cooccurrence>> {
    if sentences.is_empty() || pairs.is_empty() {
        return Ok(vec![]);
    }
    let pairs: Vec<&Pair> = pairs.iter().collect();
    let pool = WorkerPool::new(workers, sentences)?.with_progress(progress);
    let per_pair = pool.map("cooccurrences", &pairs, |sentences, pair| {
        Ok(cooccurrence_for_pair(sentences, pair))
    })?;

    let records: Vec<Cooccurrence> = per_pair.into_iter()
        .filter_map(|(_pair, record)| record)
        .collect();
    debug!("{} of {} pairs co-occur in at least one sentence", records.len(), pairs.len());
    Ok(records)
}
