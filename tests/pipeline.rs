extern crate serde_json;
extern crate tempfile;
extern crate weat_cooccur;

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde_json::{json, Value};
use tempfile::{tempdir, TempDir};

use weat_cooccur::config::RunConfig;
use weat_cooccur::errors::Error;
use weat_cooccur::lexicon::TestId;
use weat_cooccur::pipeline;
use weat_cooccur::segment::UnicodeSentences;

const CATALOG: &str = r#"{
    "test1": {"X": ["Hund"], "Y": ["Vogel"], "A": ["Katze"], "B": ["Maus"]},
    "test2": {"X": ["Blume"], "Y": ["Insekt"], "A": ["Katze"], "B": ["Liebe"]},
    "test7": {"X": ["garten"], "Y": ["wald"], "A": ["blume"], "B": ["insekt"]}
}"#;

const POSTS: &str = "die katze und der hund\n\
                     der hund ist da\n\
                     eine blume im garten . Ein insekt im wald\n\
                     die blume und die katze\n\
                     der vogel singt\n";

struct Workspace {
    dir: TempDir,
}

impl Workspace {
    fn new() -> Workspace {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("posts.txt"), POSTS).unwrap();
        fs::write(dir.path().join("weat_tests.json"), CATALOG).unwrap();
        fs::create_dir(dir.path().join("out")).unwrap();
        Workspace { dir }
    }

    fn config(&self, tests: &[&str]) -> RunConfig {
        let tests = tests.iter().map(|t| TestId::parse(t).unwrap()).collect();
        let mut config = RunConfig::new(self.path("posts.txt"), self.path("out"), tests);
        config.catalog = self.path("weat_tests.json");
        config.workers = 2;
        config
    }

    fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    fn outputs(&self) -> Vec<PathBuf> {
        fs::read_dir(self.path("out")).unwrap().map(|e| e.unwrap().path()).collect()
    }
}

fn read_report(path: &Path) -> Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

#[test]
fn writes_a_report_per_run() {
    let ws = Workspace::new();
    let path = pipeline::run(&ws.config(&["1"]), Arc::new(UnicodeSentences::new())).unwrap();

    assert_eq!(ws.outputs(), vec![path.clone()]);
    let name = path.file_name().unwrap().to_string_lossy().into_owned();
    assert!(name.starts_with("weat-cooccurrence-analysis_results-"));
    assert!(name.ends_with(".json"));

    let report = read_report(&path);
    assert_eq!(report["corpus"], "posts.txt");
    assert_eq!(report["test1"], json!({"X": {"hund": {"katze": 1}}, "Y": {}}));
    assert!(report.get("test2").is_none());
}

#[test]
fn attributes_stay_with_their_test() {
    let ws = Workspace::new();
    let path = pipeline::run(&ws.config(&["test1", "2"]), Arc::new(UnicodeSentences::new()))
        .unwrap();
    let report = read_report(&path);

    assert_eq!(report["test1"]["X"], json!({"hund": {"katze": 1}}));
    assert_eq!(report["test2"]["X"], json!({"blume": {"katze": 1}}));
    assert_eq!(report["test2"]["Y"], json!({}));
}

#[test]
fn reversed_tests_count_with_swapped_roles() {
    let ws = Workspace::new();
    let path = pipeline::run(&ws.config(&["7"]), Arc::new(UnicodeSentences::new())).unwrap();
    let report = read_report(&path);

    // "blume" and "insekt" become the targets, "garten" and "wald" the attributes
    assert_eq!(report["test7"], json!({
        "X": {"blume": {"garten": 1}},
        "Y": {"insekt": {"wald": 1}}
    }));
}

#[test]
fn unknown_test_fails_without_output() {
    let ws = Workspace::new();
    match pipeline::run(&ws.config(&["1", "11"]), Arc::new(UnicodeSentences::new())) {
        Err(Error::UnknownTest(name)) => assert_eq!(name, "test11"),
        other => panic!("expected an unknown test, got {:?}", other),
    }
    assert!(ws.outputs().is_empty());
}

#[test]
fn missing_corpus_fails_without_output() {
    let ws = Workspace::new();
    let mut config = ws.config(&["1"]);
    config.corpus = ws.path("missing.txt");
    assert!(pipeline::run(&config, Arc::new(UnicodeSentences::new())).is_err());
    assert!(ws.outputs().is_empty());
}

#[test]
fn crlf_corpus_gives_the_same_report() {
    let ws = Workspace::new();
    fs::write(ws.path("posts.txt"), POSTS.replace('\n', "\r\n")).unwrap();
    let path = pipeline::run(&ws.config(&["1", "7"]), Arc::new(UnicodeSentences::new())).unwrap();
    let report = read_report(&path);

    assert_eq!(report["test1"], json!({"X": {"hund": {"katze": 1}}, "Y": {}}));
    assert_eq!(report["test7"], json!({
        "X": {"blume": {"garten": 1}},
        "Y": {"insekt": {"wald": 1}}
    }));
}

#[test]
fn report_lists_tests_in_request_order() {
    let ws = Workspace::new();
    let path = pipeline::run(&ws.config(&["7", "2", "1"]), Arc::new(UnicodeSentences::new()))
        .unwrap();
    let text = fs::read_to_string(&path).unwrap();
    let position = |key: &str| text.find(&format!("\"{}\":", key)).unwrap();
    assert!(position("corpus") < position("test7"));
    assert!(position("test7") < position("test2"));
    assert!(position("test2") < position("test1"));
}
