//! Line-based corpus of single-space tokenized posts
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::errors::*;
use crate::pairs::Pair;

/// The posts of a corpus, one per line, in file order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Corpus {
    posts: Vec<String>,
}

impl Corpus {
    /// Read the whole corpus into memory.
    ///
    /// The file is split on newlines, so a trailing newline yields an empty last post. A `\r`
    /// before a newline belongs to the line break, not to the post.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Corpus> {
        let mut file = File::open(path.as_ref())
            .map_err(|e| Error::MissingFile("corpus file", Some(e)))?;
        let mut content = String::new();
        file.read_to_string(&mut content)?;
        let corpus = Corpus::from_text(&content);
        info!("Read {} posts from {}", corpus.len(), path.as_ref().display());
        Ok(corpus)
    }

    pub fn from_text(content: &str) -> Corpus {
        let posts = content.split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line))
            .map(String::from)
            .collect();
        Corpus { posts }
    }

    pub fn from_posts<I, S>(posts: I) -> Corpus
        where I: IntoIterator<Item = S>, S: Into<String> {
        Corpus { posts: posts.into_iter().map(Into::into).collect() }
    }

    pub fn posts(&self) -> &[String] {
        &self.posts
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }
}

/// Split text into tokens on single spaces, the way the corpus was prepared
#[inline]
pub fn tokens(text: &str) -> impl Iterator<Item = &str> {
    text.split(' ')
}

/// Whether both words of the pair are tokens of the text, anywhere and in any order
pub fn contains_pair(text: &str, pair: &Pair) -> bool {
    let mut has_target = false;
    let mut has_attribute = false;
    for token in tokens(text) {
        has_target |= token == pair.target;
        has_attribute |= token == pair.attribute;
        if has_target && has_attribute {
            return true;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_lines_exactly() {
        let corpus = Corpus::from_text("die katze\nder hund\n");
        assert_eq!(corpus.posts(), &["die katze", "der hund", ""]);
    }

    #[test]
    fn crlf_line_ends_are_not_part_of_posts() {
        let corpus = Corpus::from_text("die katze und der hund\r\nder hund ist da\r\n");
        assert_eq!(corpus.posts(), &["die katze und der hund", "der hund ist da", ""]);
        assert!(contains_pair(&corpus.posts()[0], &Pair::new("hund", "katze")));
    }

    #[test]
    fn membership_is_by_token() {
        let pair = Pair::new("hund", "katze");
        assert!(contains_pair("die katze und der hund", &pair));
        assert!(contains_pair("hund katze", &pair));
        assert!(!contains_pair("die katzen und der hund", &pair));
        assert!(!contains_pair("der hund ist da", &pair));
    }

    #[test]
    fn no_normalization_beyond_single_spaces() {
        let pair = Pair::new("hund", "katze");
        assert!(!contains_pair("die\tkatze und der hund", &pair));
        assert!(!contains_pair("die Katze und der hund", &pair));
        assert!(contains_pair("die  katze und der hund", &pair));
    }

    #[test]
    fn same_word_pair_needs_one_token() {
        assert!(contains_pair("hund", &Pair::new("hund", "hund")));
    }

    #[test]
    fn missing_corpus_is_a_missing_file() {
        match Corpus::load("/nonexistent/corpus.txt") {
            Err(Error::MissingFile(what, Some(_))) => assert_eq!(what, "corpus file"),
            other => panic!("expected a missing file error, got {:?}", other),
        }
    }
}
