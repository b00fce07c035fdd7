//! Sentence segmentation of candidate posts
use std::sync::Arc;

use unicode_segmentation::UnicodeSegmentation;

use crate::errors::*;
use crate::pool::WorkerPool;

/// Sub-analyses a linguistic pipeline can skip when all we need are sentence boundaries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SegmenterOptions {
    pub skip_entities: bool,
    pub skip_classification: bool,
}

impl Default for SegmenterOptions {
    fn default() -> Self {
        SegmenterOptions { skip_entities: true, skip_classification: true }
    }
}

/// Anything that splits a text into sentences
pub trait Segmenter: Send + Sync {
    /// Short name for logs
    fn name(&self) -> &str;

    /// Sub-analyses this segmenter was asked to skip
    fn options(&self) -> SegmenterOptions {
        SegmenterOptions::default()
    }

    /// The sentences of `text`, in order. Fails for text it cannot handle.
    fn segment(&self, text: &str) -> Result<Vec<String>>;
}

/// Unicode (UAX #29) sentence boundaries
#[derive(Debug, Clone, Default)]
pub struct UnicodeSentences {
    options: SegmenterOptions,
}

impl UnicodeSentences {
    pub fn new() -> UnicodeSentences {
        UnicodeSentences::default()
    }

    /// There is no entity or classification pass here, so the options are only reported
    pub fn with_options(options: SegmenterOptions) -> UnicodeSentences {
        UnicodeSentences { options }
    }
}

impl Segmenter for UnicodeSentences {
    fn name(&self) -> &str {
        "unicode-sentences"
    }

    fn options(&self) -> SegmenterOptions {
        self.options
    }

    fn segment(&self, text: &str) -> Result<Vec<String>> {
        if text.trim().is_empty() {
            return Err(Error::Segmentation("cannot split an empty post".into()));
        }
        Ok(text.split_sentence_bounds()
            .map(str::trim)
            .filter(|sentence| !sentence.is_empty())
            .map(String::from)
            .collect())
    }
}

/// Split every post into sentences and flatten them, in post order.
///
/// Posts the segmenter rejects are logged and skipped. Duplicate sentences are kept.
pub fn segment_posts<G: Segmenter>(segmenter: Arc<G>, posts: &[String], workers: usize,
                                   progress: bool) -> Result<Vec<String>> {
    debug!("Segmenting {} posts with {} ({:?})",
        posts.len(), segmenter.name(), segmenter.options());
    let pool = WorkerPool::new(workers, segmenter)?.with_progress(progress);
    let per_post = pool.map("sentences", posts, |segmenter, post| {
        match segmenter.segment(post) {
            Ok(sentences) => Ok(Some(sentences)),
            Err(ref err) if err.is_recoverable() => {
                warn!("Skipping post {:?}: {}", preview(post), err);
                Ok(None)
            },
            Err(err) => Err(err),
        }
    })?;

    let mut skipped = 0;
    let mut sentences = vec![];
    for (_post, post_sentences) in per_post {
        match post_sentences {
            Some(post_sentences) => sentences.extend(post_sentences),
            None => skipped += 1,
        }
    }
    if skipped > 0 {
        warn!("{} of {} posts could not be split into sentences", skipped, posts.len());
    }
    Ok(sentences)
}

fn preview(post: &str) -> String {
    post.chars().take(60).collect()
}
