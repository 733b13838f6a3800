// 该文件是 RipePick 项目的一部分。
// src/model.rs - 模型
//
// 本程序遵循 GNU Affero 通用公共许可证（AGPL）许可协议。
// 本程序的发布旨在提供实用价值，但不作任何形式的担保，
// 包括但不限于对适销性或特定用途适用性的默示担保。
// 更多详情请参阅 GNU 通用公共许可证。
//
// Copyright (C) 2026 Johann Li <me@qinka.pro>, ETVP

use crate::label::InterpretedResult;

pub trait Model {
  type Input;
  type Output;
  type Error;

  fn infer(&self, input: &Self::Input) -> Result<Self::Output, Self::Error>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct Category {
  pub index: usize,
  /// 分类器自带的标签文本（若有）
  pub label: Option<String>,
  pub score: f32,
}

/// 按得分降序排列
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Classification {
  pub categories: Box<[Category]>,
}

impl Classification {
  pub fn top(&self) -> Option<&Category> {
    self.categories.first()
  }

  pub fn is_empty(&self) -> bool {
    self.categories.is_empty()
  }
}

/// 单帧的最终判定
#[derive(Debug, Clone, PartialEq)]
pub struct Verdict {
  pub label: String,
  pub result: InterpretedResult,
  pub advice: String,
}

mod freshness;
mod topk;
pub use self::freshness::{FreshnessModel, FreshnessModelError};
pub use self::topk::{TopK, TopKBuilder, TopKError};
