//! Run parameters
use std::fs;
use std::path::{Path, PathBuf};

use clap::ArgMatches;

use crate::errors::*;
use crate::lexicon::{TestId, REVERSED_ROLE_TESTS};
use crate::pool::default_workers;

/// Where the catalog is looked for unless told otherwise
pub const DEFAULT_CATALOG: &str = "weat_tests.json";

/// Everything a run needs to know before it starts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub corpus: PathBuf,
    pub output_dir: PathBuf,
    pub catalog: PathBuf,
    pub workers: usize,
    pub tests: Vec<TestId>,
    pub reversed_tests: Vec<TestId>,
    pub progress: bool,
}

impl RunConfig {
    pub fn new<C, O>(corpus: C, output_dir: O, tests: Vec<TestId>) -> RunConfig
        where C: Into<PathBuf>, O: Into<PathBuf> {
        RunConfig {
            corpus: corpus.into(),
            output_dir: output_dir.into(),
            catalog: PathBuf::from(DEFAULT_CATALOG),
            workers: default_workers(),
            tests,
            reversed_tests: REVERSED_ROLE_TESTS.iter().map(|&name| TestId::from(name)).collect(),
            progress: false,
        }
    }

    /// Read the run parameters from parsed command line arguments
    pub fn from_matches(args: &ArgMatches) -> Result<RunConfig> {
        let tests = args.values_of("tests")
            .map(|values| values.map(TestId::parse).collect::<Result<Vec<_>>>())
            .unwrap_or_else(|| Ok(vec![]))?;

        let mut config = RunConfig::new(required(args, "data")?, required(args, "output")?, tests);
        if let Some(catalog) = args.value_of("lexicons") {
            config.catalog = PathBuf::from(catalog);
        }
        if let Some(cores) = args.value_of("processing_cores") {
            config.workers = cores.parse()
                .map_err(|_| Error::InvalidConfig(format!("{} is not a number of cores", cores)))?;
        }
        if let Some(reversed) = args.values_of("reversed") {
            config.reversed_tests = reversed.map(TestId::parse).collect::<Result<Vec<_>>>()?;
        }
        config.progress = !args.is_present("quiet");
        Ok(config)
    }

    /// Check everything that can be checked before touching the corpus
    pub fn validate(&self) -> Result<()> {
        require_file(&self.corpus, "corpus file")?;
        require_file(&self.catalog, "test catalog")?;
        match fs::metadata(&self.output_dir) {
            Ok(ref meta) if meta.is_dir() => {},
            Ok(_) => return Err(Error::MissingFile("output directory", None)),
            Err(err) => return Err(Error::MissingFile("output directory", Some(err))),
        }
        if self.workers == 0 {
            return Err(Error::InvalidConfig("at least one processing core is needed".into()));
        }
        if self.tests.is_empty() {
            return Err(Error::InvalidConfig("no tests were selected".into()));
        }
        Ok(())
    }

    /// File name of the corpus, used to label the report
    pub fn corpus_name(&self) -> String {
        self.corpus.file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.corpus.display().to_string())
    }
}

fn required<'m>(args: &'m ArgMatches, name: &str) -> Result<&'m str> {
    args.value_of(name)
        .ok_or_else(|| Error::InvalidConfig(format!("missing argument {}", name)))
}

fn require_file(path: &Path, what: &'static str) -> Result<()> {
    match fs::metadata(path) {
        Ok(ref meta) if meta.is_file() => Ok(()),
        Ok(_) => Err(Error::MissingFile(what, None)),
        Err(err) => Err(Error::MissingFile(what, Some(err))),
    }
}
