// 该文件是 RipePick 项目的一部分。
// src/model/freshness.rs - 新鲜度判定模型
//
// 本程序遵循 GNU Affero 通用公共许可证（AGPL）许可协议。
// 本程序的发布旨在提供实用价值，但不作任何形式的担保，
// 包括但不限于对适销性或特定用途适用性的默示担保。
// 更多详情请参阅 GNU 通用公共许可证。
//
// Copyright (C) 2026 Johann Li <me@qinka.pro>, ETVP

use thiserror::Error;
use tracing::debug;

use crate::{
  label::percent_from_probability,
  labels::LabelSet,
  model::{Classification, Model, Verdict},
};

#[derive(Error, Debug)]
pub enum FreshnessModelError {
  #[error("分类器错误: {0}")]
  Classifier(#[source] Box<dyn std::error::Error + Send + Sync>),
  #[error("模型没有给出结果")]
  NoResult,
  #[error("标签下标 {0} 无对应标签")]
  UnknownLabel(usize),
}

/// 分类器与标签列表的组合，输出新鲜度判定
pub struct FreshnessModel<M> {
  classifier: M,
  labels: LabelSet,
}

impl<M> FreshnessModel<M> {
  pub fn new(classifier: M, labels: LabelSet) -> Self {
    Self { classifier, labels }
  }

  pub fn labels(&self) -> &LabelSet {
    &self.labels
  }

  /// 取最高得分类别，解析出结果与建议
  pub fn judge(&self, classification: &Classification) -> Result<Verdict, FreshnessModelError> {
    let top = classification.top().ok_or(FreshnessModelError::NoResult)?;
    let entry = self
      .labels
      .resolve(top.index, top.label.as_deref())
      .ok_or(FreshnessModelError::UnknownLabel(top.index))?;

    let result = entry
      .parsed
      .with_confidence(percent_from_probability(top.score));
    let advice = result.advice();
    debug!(
      "通道 {} -> {} ({}%)",
      top.index, entry.text, result.confidence_percent
    );

    Ok(Verdict {
      label: entry.text,
      result,
      advice,
    })
  }
}

impl<M> Model for FreshnessModel<M>
where
  M: Model<Output = Classification>,
  M::Error: std::error::Error + Send + Sync + 'static,
{
  type Input = M::Input;
  type Output = Verdict;
  type Error = FreshnessModelError;

  fn infer(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
    let classification = self
      .classifier
      .infer(input)
      .map_err(|e| FreshnessModelError::Classifier(Box::new(e)))?;
    self.judge(&classification)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::{
    frame::ScoreFrame,
    label::Condition,
    model::{Category, TopK},
  };

  fn model() -> FreshnessModel<TopK> {
    FreshnessModel::new(TopK::default(), LabelSet::default())
  }

  #[test]
  fn judges_top_channel() {
    let frame = ScoreFrame::new(0, vec![0.01, 0.02, 0.03, 0.04, 0.929, 0.0]);
    let verdict = model().infer(&frame).unwrap();
    assert_eq!(verdict.label, "Fresh Orange");
    assert_eq!(verdict.result.fruit.as_str(), "Orange");
    assert_eq!(verdict.result.condition, Condition::Fresh);
    assert_eq!(verdict.result.confidence_percent, 92);
    assert_eq!(verdict.advice, "Juicy and fresh! Rich in Vitamin C.");
  }

  #[test]
  fn rotten_low_confidence_carries_caution() {
    let frame = ScoreFrame::new(0, vec![0.1, 0.55, 0.1, 0.1, 0.1, 0.05]);
    let verdict = model().infer(&frame).unwrap();
    assert_eq!(verdict.label, "Rotten Apple");
    assert!(!verdict.result.is_fresh);
    assert!(verdict.advice.ends_with(crate::advice::LOW_CONFIDENCE_SUFFIX));
  }

  #[test]
  fn below_threshold_is_no_result() {
    let frame = ScoreFrame::new(0, vec![0.2; 6]);
    assert!(matches!(
      model().infer(&frame),
      Err(FreshnessModelError::NoResult)
    ));
  }

  #[test]
  fn classifier_errors_propagate() {
    let frame = ScoreFrame::new(0, Vec::new());
    assert!(matches!(
      model().infer(&frame),
      Err(FreshnessModelError::Classifier(_))
    ));
  }

  #[test]
  fn out_of_range_index_uses_classifier_label() {
    let classification = Classification {
      categories: vec![Category {
        index: 9,
        label: Some("Rotten Kiwi".to_string()),
        score: 0.88,
      }]
      .into_boxed_slice(),
    };
    let verdict = model().judge(&classification).unwrap();
    assert_eq!(verdict.result.fruit.as_str(), "Kiwi");
    assert_eq!(verdict.advice, "Not safe for consumption. Please discard.");

    let classification = Classification {
      categories: vec![Category {
        index: 9,
        label: None,
        score: 0.88,
      }]
      .into_boxed_slice(),
    };
    assert!(matches!(
      model().judge(&classification),
      Err(FreshnessModelError::UnknownLabel(9))
    ));
  }

  #[test]
  fn blank_classifier_label_is_unknown_label() {
    for label in ["", "   "] {
      let classification = Classification {
        categories: vec![Category {
          index: 9,
          label: Some(label.to_string()),
          score: 0.88,
        }]
        .into_boxed_slice(),
      };
      assert!(matches!(
        model().judge(&classification),
        Err(FreshnessModelError::UnknownLabel(9))
      ));
    }
  }
}
