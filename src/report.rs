//! Turn pairwise counts into the per-test report
//!
//! Counting happens once per distinct pair, but a report entry has to be read per test: a word
//! can be a target in one test and its attributes must only ever come from that same test. So
//! the counts are first gathered by target word and then filtered once per test.
use std::collections::BTreeMap;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, TimeZone};
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;
use tempfile::NamedTempFile;

use crate::count::Cooccurrence;
use crate::errors::*;
use crate::farm::{new_farm, new_farm_set, FarmMap};
use crate::lexicon::{TestId, WeatTest};

/// Attribute word -> number of sentences shared with the target
pub type AttributeCounts = BTreeMap<String, usize>;

/// Target word -> attribute word -> count, over all pairs
pub type TargetCounts = FarmMap<String, FarmMap<String, usize>>;

/// Co-occurrences of one test, split by target role
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TestReport {
    #[serde(rename = "X")]
    pub x: BTreeMap<String, AttributeCounts>,
    #[serde(rename = "Y")]
    pub y: BTreeMap<String, AttributeCounts>,
}

/// Per-test results, in the order the tests were requested
pub type TestReports = Vec<(TestId, TestReport)>;

/// The final result of a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub corpus: String,
    pub tests: TestReports,
}

/// One JSON object: the corpus name, then one entry per test in request order
impl Serialize for Report {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.tests.len() + 1))?;
        map.serialize_entry("corpus", &self.corpus)?;
        for (id, test) in &self.tests {
            map.serialize_entry(id, test)?;
        }
        map.end()
    }
}

/// Gather counts by target word (the first word of each pair).
///
/// Each pair should appear once; if one repeats, the last record wins.
pub fn by_target(records: &[Cooccurrence]) -> TargetCounts {
    let mut targets: TargetCounts = new_farm();
    for record in records {
        targets.entry(record.pair.target.clone())
            .or_insert_with(new_farm)
            .insert(record.pair.attribute.clone(), record.count());
    }
    targets
}

/// Split the target counts up per test, keeping only each test's own attributes.
///
/// Targets without any remaining attribute are left out. Tests keep their order.
pub fn by_test(tests: &[(TestId, WeatTest)], targets: &TargetCounts) -> TestReports {
    let mut report = Vec::with_capacity(tests.len());
    for (id, test) in tests {
        let mut attributes = new_farm_set();
        attributes.extend(test.attributes());

        let role = |words: Vec<String>| -> BTreeMap<String, AttributeCounts> {
            let mut found = BTreeMap::new();
            for word in words {
                let counts = match targets.get(&word) {
                    Some(counts) => counts,
                    None => continue,
                };
                let relevant: AttributeCounts = counts.iter()
                    .filter(|&(attribute, _)| attributes.contains(attribute))
                    .map(|(attribute, &count)| (attribute.clone(), count))
                    .collect();
                if !relevant.is_empty() {
                    found.insert(word, relevant);
                }
            }
            found
        };

        let test_report = TestReport { x: role(test.x_targets()), y: role(test.y_targets()) };
        debug!("{}: {} X and {} Y targets co-occur with attributes",
            id, test_report.x.len(), test_report.y.len());
        report.push((id.clone(), test_report));
    }
    report
}

/// Name of the result file for a run finished at `timestamp`
pub fn result_file_name<Tz: TimeZone>(timestamp: &DateTime<Tz>) -> String
    where Tz::Offset: std::fmt::Display {
    format!("weat-cooccurrence-analysis_results-{}.json", timestamp.format("%Y%m%d%H%M%S"))
}

impl Report {
    pub fn new<S: Into<String>>(corpus: S, tests: TestReports) -> Report {
        Report { corpus: corpus.into(), tests }
    }

    /// Pretty JSON, indented by four spaces
    pub fn to_json(&self) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut serializer)?;
        Ok(buf)
    }

    /// Write the report into `dir` and return the path of the new file.
    ///
    /// The file only appears once it is complete.
    pub fn write_to_dir<P, Tz>(&self, dir: P, timestamp: &DateTime<Tz>) -> Result<PathBuf>
        where P: AsRef<Path>, Tz: TimeZone, Tz::Offset: std::fmt::Display {
        let json = self.to_json()?;
        let path = dir.as_ref().join(result_file_name(timestamp));
        let mut temp_file = NamedTempFile::new_in(dir.as_ref())
            .map_err(|e| Error::MissingFile("output directory", Some(e)))?;
        temp_file.write_all(&json)?;
        temp_file.write_all(b"\n")?;
        temp_file.persist(&path)?;
        Ok(path)
    }
}
