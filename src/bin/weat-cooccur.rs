//! Co-occurrence analysis of WEAT test words on a corpus
//!
//! For every target/attribute pair of the selected tests, count the sentences of the corpus in
//! which both words appear. Only posts containing both words of some pair are split into
//! sentences at all. The result is a JSON file per run in the output directory, holding per test
//! the X and Y target words with their attribute co-occurrence counts.
//!

// argument parsing
#[macro_use] extern crate clap;
// logging
#[macro_use] extern crate log;
extern crate env_logger;
// lastly, this library
extern crate weat_cooccur;

use std::sync::Arc;

use weat_cooccur::config::RunConfig;
use weat_cooccur::errors::*;
use weat_cooccur::pipeline;
use weat_cooccur::segment::{SegmenterOptions, UnicodeSentences};

pub fn main() {
    // Main can't return a Result, and the ? operator needs the enclosing function to return Result
    if let Err(err) = inner_main() {
        error!("{}", err);
        eprintln!("Could not recover. Exiting. ({})", err);
        std::process::exit(1);
    }
}

pub fn inner_main() -> Result<()> {
    env_logger::init();
    let args = app_from_crate!()
        .arg_from_usage("-d, --data=<DATA_PATH> 'Path to the corpus. Expects one whitespace separated post per line.'")
        .arg_from_usage("-o, --output=<OUTPUT_DIR> 'Directory the result file is saved to'")
        .arg_from_usage("-c, --processing_cores=[PROCESSING_CORES] 'Number of cores to use (default: all but one)'")
        .arg_from_usage("-t, --tests=<TESTS_TO_INCLUDE>... 'Tests to include, by number (7) or name (test7)'")
        .arg_from_usage("-l, --lexicons=[CATALOG] 'JSON file with the X, Y, A and B word lists of each test'")
        .arg_from_usage("--reversed=[REVERSED_TESTS]... 'Tests whose target and attribute lists are swapped (default: 7 8)'")
        .arg_from_usage("-q, --quiet 'Hide progress bars'")
        .get_matches();

    let config = RunConfig::from_matches(&args)?;
    info!("Please make sure that your input texts are whitespace separated tokens. \
           The analysis might not work correctly otherwise.");
    info!("{} tests, {} workers, catalog {}",
        config.tests.len(), config.workers, config.catalog.display());

    let segmenter = Arc::new(UnicodeSentences::with_options(SegmenterOptions::default()));
    pipeline::run(&config, segmenter)?;
    println!("Done.");
    Ok(())
}
