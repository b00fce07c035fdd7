//! Find the posts worth splitting into sentences
//!
//! Sentence segmentation is by far the slowest step per post, so only posts which contain both
//! words of at least one pair go on to it.
use std::sync::Arc;

use crate::corpus::{contains_pair, Corpus};
use crate::errors::*;
use crate::pairs::{Pair, PairSet};
use crate::pool::WorkerPool;

/// Posts containing both words of the pair, in corpus order, or `None` if there are none
pub fn candidates_for_pair(corpus: &Corpus, pair: &Pair) -> Option<Vec<String>> {
    let candidates: Vec<String> = corpus.posts().iter()
        .filter(|post| contains_pair(post, pair))
        .cloned()
        .collect();
    if candidates.is_empty() { None } else { Some(candidates) }
}

/// Scan the corpus once per pair, spread over `workers` threads.
///
/// The result is every qualifying post of every pair, so posts matching several pairs show up
/// several times. See `unique_candidates`.
pub fn find_candidate_posts(corpus: Arc<Corpus>, pairs: &PairSet, workers: usize, progress: bool)
    -> Result<Vec<String>> {
    if corpus.is_empty() || pairs.is_empty() {
        return Ok(vec![]);
    }
    let pairs: Vec<&Pair> = pairs.iter().collect();
    let pool = WorkerPool::new(workers, corpus)?.with_progress(progress);
    let per_pair = pool.map("candidate posts", &pairs, |corpus, pair| {
        Ok(candidates_for_pair(corpus, pair))
    })?;

    let mut found = 0;
    let candidates: Vec<String> = per_pair.into_iter()
        .filter_map(|(_pair, posts)| posts)
        .inspect(|_| found += 1)
        .flatten()
        .collect();
    debug!("{} of {} pairs have candidate posts", found, pairs.len());
    Ok(candidates)
}

/// Sort and deduplicate candidate posts
pub fn unique_candidates(mut posts: Vec<String>) -> Vec<String> {
    posts.sort_unstable();
    posts.dedup();
    posts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(list: &[(&str, &str)]) -> PairSet {
        list.iter().map(|&(t, a)| Pair::new(t, a)).collect()
    }

    fn corpus() -> Corpus {
        Corpus::from_posts(vec![
            "die katze und der hund",
            "der hund ist da",
            "hund und maus",
        ])
    }

    #[test]
    fn only_posts_with_both_words_qualify() {
        let found = candidates_for_pair(&corpus(), &Pair::new("hund", "katze"));
        assert_eq!(found, Some(vec!["die katze und der hund".to_string()]));
        assert_eq!(candidates_for_pair(&corpus(), &Pair::new("katze", "maus")), None);
    }

    #[test]
    fn union_over_pairs_keeps_duplicates() {
        let wanted = pairs(&[("hund", "katze"), ("der", "hund"), ("katze", "maus")]);
        let mut found = find_candidate_posts(Arc::new(corpus()), &wanted, 2, false).unwrap();
        found.sort();
        assert_eq!(found, vec![
            "der hund ist da",
            "die katze und der hund",
            "die katze und der hund",
        ]);
        assert_eq!(unique_candidates(found), vec!["der hund ist da", "die katze und der hund"]);
    }

    #[test]
    fn empty_inputs_give_no_candidates() {
        let wanted = pairs(&[("hund", "katze")]);
        assert!(find_candidate_posts(Arc::new(Corpus::default()), &wanted, 2, false)
            .unwrap().is_empty());
        assert!(find_candidate_posts(Arc::new(corpus()), &PairSet::new(), 2, false)
            .unwrap().is_empty());
    }

    #[test]
    fn unrelated_posts_change_nothing() {
        let wanted = pairs(&[("hund", "katze"), ("der", "hund")]);
        let before = find_candidate_posts(Arc::new(corpus()), &wanted, 2, false).unwrap();

        let mut posts = corpus().posts().to_vec();
        posts.push("ein vogel singt".to_string());
        posts.insert(0, "".to_string());
        let after = find_candidate_posts(Arc::new(Corpus::from_posts(posts)), &wanted, 2, false)
            .unwrap();
        assert_eq!(before, after);
    }
}
