// 该文件是 RipePick 项目的一部分。
// src/model/topk.rs - 得分向量后处理
//
// 本程序遵循 GNU Affero 通用公共许可证（AGPL）许可协议。
// 本程序的发布旨在提供实用价值，但不作任何形式的担保，
// 包括但不限于对适销性或特定用途适用性的默示担保。
// 更多详情请参阅 GNU 通用公共许可证。
//
// Copyright (C) 2026 Johann Li <me@qinka.pro>, ETVP

use thiserror::Error;
use tracing::{debug, info};
use url::Url;

use crate::{
  FromUrl, FromUrlWithScheme,
  frame::ScoreFrame,
  model::{Category, Classification, Model},
  utils::query_value,
};

const TOPK_DEFAULT_MAX_RESULTS: usize = 3;
const TOPK_DEFAULT_SCORE_THRESHOLD: f32 = 0.5;

#[derive(Error, Debug)]
pub enum TopKError {
  #[error("URI 方案不匹配")]
  SchemeMismatch,
  #[error("参数 {0} 无效: {1}")]
  InvalidParameter(&'static str, String),
  #[error("输入帧为空")]
  EmptyFrame,
}

/// 从分类器原始得分中选出得分最高且超过阈值的若干类别
#[derive(Debug, Clone)]
pub struct TopK {
  max_results: usize,
  score_threshold: f32,
}

impl Default for TopK {
  fn default() -> Self {
    TopKBuilder::default().build()
  }
}

impl TopK {
  pub fn max_results(&self) -> usize {
    self.max_results
  }

  pub fn score_threshold(&self) -> f32 {
    self.score_threshold
  }
}

impl Model for TopK {
  type Input = ScoreFrame;
  type Output = Classification;
  type Error = TopKError;

  fn infer(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
    let scores = input.as_ref();
    if scores.is_empty() {
      return Err(TopKError::EmptyFrame);
    }

    let mut categories: Vec<Category> = scores
      .iter()
      .enumerate()
      .filter(|(_, score)| score.is_finite() && **score >= self.score_threshold)
      .map(|(index, score)| Category {
        index,
        label: None,
        score: *score,
      })
      .collect();
    // 稳定排序，同分时保留通道顺序
    categories.sort_by(|a, b| b.score.total_cmp(&a.score));
    categories.truncate(self.max_results);

    debug!(
      "帧 {}: {} 个通道，{} 个类别超过阈值",
      input.index(),
      input.channels(),
      categories.len()
    );

    Ok(Classification {
      categories: categories.into_boxed_slice(),
    })
  }
}

#[derive(Debug, Clone)]
pub struct TopKBuilder {
  max_results: usize,
  score_threshold: f32,
}

impl Default for TopKBuilder {
  fn default() -> Self {
    TopKBuilder {
      max_results: TOPK_DEFAULT_MAX_RESULTS,
      score_threshold: TOPK_DEFAULT_SCORE_THRESHOLD,
    }
  }
}

impl TopKBuilder {
  pub fn max_results(mut self, max_results: usize) -> Self {
    self.max_results = max_results;
    self
  }

  pub fn score_threshold(mut self, score_threshold: f32) -> Self {
    self.score_threshold = score_threshold;
    self
  }

  pub fn build(self) -> TopK {
    info!(
      "分类后处理: 最多 {} 个结果, 阈值 {}",
      self.max_results, self.score_threshold
    );
    TopK {
      max_results: self.max_results,
      score_threshold: self.score_threshold,
    }
  }
}

impl FromUrlWithScheme for TopKBuilder {
  const SCHEME: &'static str = "topk";
}

impl FromUrl for TopKBuilder {
  type Error = TopKError;

  fn from_url(url: &Url) -> Result<Self, Self::Error> {
    if url.scheme() != Self::SCHEME {
      return Err(TopKError::SchemeMismatch);
    }

    let mut builder = TopKBuilder::default();
    if let Some(value) = query_value(url, "max_results") {
      let max_results = value
        .parse::<usize>()
        .ok()
        .filter(|n| *n > 0)
        .ok_or(TopKError::InvalidParameter("max_results", value))?;
      builder = builder.max_results(max_results);
    }
    if let Some(value) = query_value(url, "threshold") {
      let threshold = value
        .parse::<f32>()
        .ok()
        .filter(|t| (0.0..=1.0).contains(t))
        .ok_or(TopKError::InvalidParameter("threshold", value))?;
      builder = builder.score_threshold(threshold);
    }
    Ok(builder)
  }
}
