//! Corpus co-occurrence analysis for WEAT bias tests
//!
//! Word embedding bias tests compare how close target words (say, flowers and insects) sit to
//! attribute words (pleasant and unpleasant) in vector space. This library checks the same
//! target/attribute pairs against raw text: for every pair, in how many sentences of a corpus do
//! both words actually appear?
//!
//! The corpus is expected to hold one post per line, already tokenized and joined by single
//! spaces.

#[macro_use] extern crate log;
extern crate farmhash;
pub mod errors;
pub mod farm;
pub mod config;
pub mod lexicon;
pub mod pairs;
pub mod corpus;
pub mod pool;
pub mod candidates;
pub mod segment;
pub mod count;
pub mod report;
pub mod pipeline;
