//! WEAT test lexicons
//!
//! A catalog is a JSON object mapping test names to their four word lists:
//!
//! ```json
//! {"test1": {"X": ["blume"], "Y": ["insekt"], "A": ["liebe"], "B": ["hass"]}}
//! ```
//!
//! X and Y hold target words and A and B attribute words. A couple of the published tests use
//! the opposite layout; `Catalog::normalize_roles` swaps those back so the rest of the analysis
//! can rely on the roles.
use std::collections::BTreeMap;
use std::fmt;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::*;

/// Tests whose published target and attribute lists are swapped relative to the others
pub const REVERSED_ROLE_TESTS: [&str; 2] = ["test7", "test8"];

/// Name of a test in the catalog, e.g. `test7`
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TestId(String);

impl TestId {
    /// Read a test identifier as a caller would give it.
    ///
    /// A bare number `n` refers to `test{n}`, anything else is taken as the name itself.
    pub fn parse(raw: &str) -> Result<TestId> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(Error::InvalidConfig("empty test identifier".into()));
        }
        match raw.parse::<u32>() {
            Ok(number) => Ok(TestId(format!("test{}", number))),
            Err(_) => Ok(TestId(raw.to_string())),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TestId {
    fn from(name: &str) -> Self {
        TestId(name.to_string())
    }
}

impl fmt::Display for TestId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The four word lists of one test
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatTest {
    #[serde(rename = "X")]
    pub x: Vec<String>,
    #[serde(rename = "Y")]
    pub y: Vec<String>,
    #[serde(rename = "A")]
    pub a: Vec<String>,
    #[serde(rename = "B")]
    pub b: Vec<String>,
}

impl WeatTest {
    /// Exchange target and attribute roles: X and Y become the old A and B, and vice versa
    pub fn reversed(self) -> WeatTest {
        WeatTest { x: self.a, y: self.b, a: self.x, b: self.y }
    }

    /// All attribute words (A then B), lowercased
    pub fn attributes(&self) -> Vec<String> {
        self.a.iter().chain(self.b.iter()).map(|w| w.to_lowercase()).collect()
    }

    /// X targets, lowercased
    pub fn x_targets(&self) -> Vec<String> {
        self.x.iter().map(|w| w.to_lowercase()).collect()
    }

    /// Y targets, lowercased
    pub fn y_targets(&self) -> Vec<String> {
        self.y.iter().map(|w| w.to_lowercase()).collect()
    }
}

/// All tests known to a run, keyed by name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    tests: BTreeMap<TestId, WeatTest>,
}

impl Catalog {
    /// Read a catalog from a JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Catalog> {
        let file = File::open(path.as_ref())
            .map_err(|e| Error::MissingFile("test catalog", Some(e)))?;
        let catalog = Catalog::from_json(BufReader::new(file))?;
        info!("Loaded {} tests from {}", catalog.len(), path.as_ref().display());
        Ok(catalog)
    }

    /// Parse a catalog from any JSON source
    pub fn from_json<R: Read>(reader: R) -> Result<Catalog> {
        let tests: BTreeMap<TestId, WeatTest> = serde_json::from_reader(reader)
            .map_err(|e| Error::Catalog(e.to_string()))?;
        Ok(Catalog { tests })
    }

    pub fn from_tests<I: IntoIterator<Item = (TestId, WeatTest)>>(tests: I) -> Catalog {
        Catalog { tests: tests.into_iter().collect() }
    }

    pub fn len(&self) -> usize {
        self.tests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tests.is_empty()
    }

    pub fn get(&self, id: &TestId) -> Option<&WeatTest> {
        self.tests.get(id)
    }

    /// Swap target and attribute roles of the named tests.
    ///
    /// Names missing from the catalog are ignored here; selecting them later still fails.
    pub fn normalize_roles(mut self, reversed: &[TestId]) -> Catalog {
        for id in reversed {
            if let Some(test) = self.tests.remove(id) {
                debug!("Swapping target and attribute roles of {}", id);
                self.tests.insert(id.clone(), test.reversed());
            }
        }
        self
    }

    /// Keep exactly the requested tests, in request order.
    pub fn select(&self, ids: &[TestId]) -> Result<Vec<(TestId, WeatTest)>> {
        let mut selected: Vec<(TestId, WeatTest)> = Vec::with_capacity(ids.len());
        for id in ids {
            if selected.iter().any(|(seen, _)| seen == id) {
                continue;
            }
            let test = self.tests.get(id)
                .ok_or_else(|| Error::UnknownTest(id.to_string()))?;
            selected.push((id.clone(), test.clone()));
        }
        Ok(selected)
    }
}
