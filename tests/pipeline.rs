// 该文件是 RipePick 项目的一部分。
// tests/pipeline.rs - 端到端判定测试
//
// 本程序遵循 GNU Affero 通用公共许可证（AGPL）许可协议。
// 本程序的发布旨在提供实用价值，但不作任何形式的担保，
// 包括但不限于对适销性或特定用途适用性的默示担保。
// 更多详情请参阅 GNU 通用公共许可证。
//
// Copyright (C) 2026 Johann Li <me@qinka.pro>, ETVP

use std::io::Write;

use ripepick::{
  Condition, FromUrl, advise,
  advice::LOW_CONFIDENCE_SUFFIX,
  input::InputWrapper,
  interpret,
  labels::LabelSet,
  model::{FreshnessModel, TopKBuilder},
  output::OutputWrapper,
  task::{BackgroundTask, BatchTask, Task},
};
use url::Url;

fn url(scheme: &str, path: &std::path::Path) -> Url {
  let file_url = Url::from_file_path(path).unwrap();
  Url::parse(&format!("{}://{}", scheme, file_url.path())).unwrap()
}

#[test]
fn freshness_follows_fresh_token() {
  let labels = [
    "Fresh Apple",
    "Rotten Apple",
    "Apple Fresh",
    "Overripe Mango",
    "Mango",
    "Spoiled Banana",
    "Very Fresh Green Apple",
    "",
    "   ",
    "  Rotten ",
    "Fresh",
  ];
  for label in labels {
    let result = interpret(label, 75);
    assert_eq!(result.is_fresh, label.contains("Fresh"), "{label}");
    assert_eq!(result.is_fresh, result.condition == Condition::Fresh);
    assert!(!result.fruit.as_str().trim().is_empty(), "{label:?}");
    assert_eq!(result.fruit.as_str(), result.fruit.as_str().trim());
  }
}

#[test]
fn blank_classifier_labels_never_resolve() {
  let labels = LabelSet::default();
  assert!(labels.resolve(labels.len(), Some("")).is_none());
  assert!(labels.resolve(labels.len(), Some("   ")).is_none());
  let entry = labels.resolve(labels.len(), Some("Fresh Kiwi")).unwrap();
  assert_eq!(entry.parsed.fruit.as_str(), "Kiwi");
}

#[test]
fn advice_caution_depends_on_condition_and_confidence() {
  assert!(!advise("apple", &Condition::Fresh, 90).contains(LOW_CONFIDENCE_SUFFIX));
  assert!(advise("apple", &Condition::Rotten, 50).contains(LOW_CONFIDENCE_SUFFIX));
  assert!(!advise("apple", &Condition::Rotten, 90).contains(LOW_CONFIDENCE_SUFFIX));
}

#[test]
fn scores_file_to_json_lines() {
  let dir = tempfile::tempdir().unwrap();

  let labels_path = dir.path().join("labels.txt");
  let mut labels = std::fs::File::create(&labels_path).unwrap();
  writeln!(labels, "0 Fresh Apple").unwrap();
  writeln!(labels, "1 Rotten Apple").unwrap();
  writeln!(labels, "2 Overripe Mango").unwrap();

  let scores_path = dir.path().join("scores.json");
  std::fs::write(
    &scores_path,
    "[[0.95, 0.03, 0.02], [0.2, 0.3, 0.1], [0.05, 0.6, 0.35], [0.0, 0.1, 0.9]]",
  )
  .unwrap();

  let output_path = dir.path().join("out").join("verdicts.jsonl");

  let labels = LabelSet::from_url(&url("labels", &labels_path)).unwrap();
  let input = InputWrapper::from_url(&url("scores", &scores_path)).unwrap();
  let model = FreshnessModel::new(
    TopKBuilder::from_url(&Url::parse("topk:?max_results=1").unwrap())
      .unwrap()
      .build(),
    labels,
  );
  let output = OutputWrapper::from_url(&url("jsonl", &output_path)).unwrap();

  let summary = BatchTask::default().run_task(input, model, output).unwrap();
  assert_eq!(summary.frames, 4);
  assert_eq!(summary.rendered, 3);
  assert_eq!(summary.failed, 1);

  let records: Vec<serde_json::Value> = std::fs::read_to_string(&output_path)
    .unwrap()
    .lines()
    .map(|line| serde_json::from_str(line).unwrap())
    .collect();
  assert_eq!(records.len(), 3);

  assert_eq!(records[0]["frame"], 0);
  assert_eq!(records[0]["fruit"], "Apple");
  assert_eq!(records[0]["is_fresh"], true);
  assert_eq!(records[0]["confidence_percent"], 95);

  assert_eq!(records[1]["frame"], 2);
  assert_eq!(records[1]["condition"], "Rotten");
  assert_eq!(
    records[1]["advice"],
    format!("Rotten apple. Do not consume - may contain mold.{LOW_CONFIDENCE_SUFFIX}")
  );

  assert_eq!(records[2]["frame"], 3);
  assert_eq!(records[2]["condition"], "Overripe");
  assert_eq!(records[2]["fruit"], "Mango");
}

#[test]
fn background_run_matches_batch_run() {
  let dir = tempfile::tempdir().unwrap();
  let scores_path = dir.path().join("scores.json");
  std::fs::write(&scores_path, "[[0.1, 0.1, 0.1, 0.1, 0.1, 0.8]]").unwrap();
  let output_path = dir.path().join("verdicts.jsonl");

  let input = InputWrapper::from_url(&url("scores", &scores_path)).unwrap();
  let model = FreshnessModel::new(TopKBuilder::default().build(), LabelSet::default());
  let output = OutputWrapper::from_url(&url("jsonl", &output_path)).unwrap();
  let summary = BackgroundTask::default()
    .run_task(input, model, output)
    .unwrap();
  assert_eq!(summary.rendered, 1);

  let text = std::fs::read_to_string(&output_path).unwrap();
  let record: serde_json::Value = serde_json::from_str(text.trim()).unwrap();
  assert_eq!(record["label"], "Rotten Orange");
  assert_eq!(record["advice"], "Rotten orange. Discard immediately.");
}

#[test]
fn unknown_schemes_are_rejected() {
  assert!(InputWrapper::from_url(&Url::parse("rtsp://camera/stream").unwrap()).is_err());
  assert!(OutputWrapper::from_url(&Url::parse("folder:///tmp/out").unwrap()).is_err());
}
