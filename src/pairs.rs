//! Target/attribute word pairs to look for in the corpus
use std::collections::BTreeSet;
use std::fmt;

use crate::lexicon::WeatTest;

/// A lowercased (target, attribute) pair. The target always comes first.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pair {
    pub target: String,
    pub attribute: String,
}

impl Pair {
    pub fn new<T: Into<String>, A: Into<String>>(target: T, attribute: A) -> Pair {
        Pair { target: target.into(), attribute: attribute.into() }
    }
}

impl fmt::Display for Pair {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.target, self.attribute)
    }
}

pub type PairSet = BTreeSet<Pair>;

/// Every X and Y target crossed with every A and B attribute, over all given tests.
///
/// Duplicates across tests collapse into one pair.
pub fn generate_pairs<'t, I>(tests: I) -> PairSet
    where I: IntoIterator<Item = &'t WeatTest> {
    let mut pairs = PairSet::new();
    for test in tests {
        let attributes = test.attributes();
        for target in test.x_targets().into_iter().chain(test.y_targets()) {
            for attribute in &attributes {
                pairs.insert(Pair::new(target.as_str(), attribute.as_str()));
            }
        }
    }
    pairs
}
