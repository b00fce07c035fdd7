//! The whole analysis, from lexicons to report file
//!
//! Stages run strictly one after another. Each parallel stage owns its worker pool and shuts it
//! down before returning, so the next stage always sees complete input.
use std::path::PathBuf;
use std::sync::Arc;

use chrono::Local;

use crate::candidates::{find_candidate_posts, unique_candidates};
use crate::config::RunConfig;
use crate::corpus::Corpus;
use crate::count::{count_cooccurrences, Cooccurrence};
use crate::errors::*;
use crate::lexicon::{Catalog, TestId, WeatTest};
use crate::pairs::{generate_pairs, PairSet};
use crate::report::{by_target, by_test, Report, TestReports};
use crate::segment::{segment_posts, Segmenter};

/// Everything the analysis produced along the way
#[derive(Debug, Clone)]
pub struct Analysis {
    pub pairs: PairSet,
    /// Deduplicated candidate posts
    pub candidates: Vec<String>,
    pub sentences: Arc<Vec<String>>,
    pub cooccurrences: Vec<Cooccurrence>,
    /// Per-test counts, in the order the tests were given
    pub tests: TestReports,
}

/// Run all stages on data that is already in memory
pub fn analyze<G: Segmenter>(tests: &[(TestId, WeatTest)], corpus: Arc<Corpus>, segmenter: Arc<G>,
                             workers: usize, progress: bool) -> Result<Analysis> {
    info!("Generating target-association test pairs...");
    let pairs = generate_pairs(tests.iter().map(|(_, test)| test));
    info!("{} distinct pairs from {} tests", pairs.len(), tests.len());

    info!("Extracting candidate posts...");
    let candidates = unique_candidates(
        find_candidate_posts(corpus, &pairs, workers, progress)?);
    info!("{} distinct candidate posts", candidates.len());

    info!("Splitting candidate posts into sentences...");
    let sentences = Arc::new(segment_posts(segmenter, &candidates, workers, progress)?);
    info!("{} sentences", sentences.len());

    info!("Calculating sentence-based cooccurrences...");
    let cooccurrences = count_cooccurrences(sentences.clone(), &pairs, workers, progress)?;
    info!("{} pairs co-occur", cooccurrences.len());

    info!("Sorting cooccurrences by test...");
    let tests = by_test(tests, &by_target(&cooccurrences));

    Ok(Analysis { pairs, candidates, sentences, cooccurrences, tests })
}

/// Load inputs, analyze and write the report, returning where it went.
///
/// All configuration problems surface before the corpus is read.
pub fn run<G: Segmenter>(config: &RunConfig, segmenter: Arc<G>) -> Result<PathBuf> {
    config.validate()?;
    let catalog = Catalog::load(&config.catalog)?.normalize_roles(&config.reversed_tests);
    let tests = catalog.select(&config.tests)?;
    let corpus = Arc::new(Corpus::load(&config.corpus)?);

    let analysis = analyze(&tests, corpus, segmenter, config.workers, config.progress)?;
    let report = Report::new(config.corpus_name(), analysis.tests);

    let path = report.write_to_dir(&config.output_dir, &Local::now())?;
    info!("Exported results to disk at {}", path.display());
    Ok(path)
}
