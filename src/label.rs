// 该文件是 RipePick 项目的一部分。
// src/label.rs - 标签解析
//
// 本程序遵循 GNU Affero 通用公共许可证（AGPL）许可协议。
// 本程序的发布旨在提供实用价值，但不作任何形式的担保，
// 包括但不限于对适销性或特定用途适用性的默示担保。
// 更多详情请参阅 GNU 通用公共许可证。
//
// Copyright (C) 2026 Johann Li <me@qinka.pro>, ETVP

use std::fmt;

const FRESH_TOKEN: &str = "Fresh";
const ROTTEN_TOKEN: &str = "Rotten";
const UNKNOWN_TOKEN: &str = "Unknown";

/// 水果新鲜程度
///
/// `Other` 保存空白切分回退分支得到的首个词（例如 `"Overripe"`）。
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Condition {
  Fresh,
  Rotten,
  Unknown,
  Other(String),
}

impl Condition {
  pub fn as_str(&self) -> &str {
    match self {
      Condition::Fresh => FRESH_TOKEN,
      Condition::Rotten => ROTTEN_TOKEN,
      Condition::Unknown => UNKNOWN_TOKEN,
      Condition::Other(token) => token,
    }
  }

  pub fn is_fresh(&self) -> bool {
    matches!(self, Condition::Fresh)
  }
}

impl fmt::Display for Condition {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// 水果名称，保证非空
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Fruit(String);

impl Fruit {
  /// 取裁剪后的名称；为空时回退到裁剪后的完整标签
  fn extract_or(name: &str, label: &str) -> Self {
    let name = name.trim();
    if name.is_empty() {
      Self::whole(label)
    } else {
      Fruit(name.to_string())
    }
  }

  /// 完整标签作为名称，空白标签记为 "Unknown"
  fn whole(label: &str) -> Self {
    if label.trim().is_empty() {
      Fruit(UNKNOWN_TOKEN.to_string())
    } else {
      Fruit(label.trim().to_string())
    }
  }

  pub fn as_str(&self) -> &str {
    &self.0
  }
}

impl fmt::Display for Fruit {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}

impl AsRef<str> for Fruit {
  fn as_ref(&self) -> &str {
    &self.0
  }
}

/// 解析后的标签，在加载标签列表时生成并缓存
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLabel {
  pub fruit: Fruit,
  pub condition: Condition,
}

impl ParsedLabel {
  pub fn parse(label: &str) -> Self {
    if label.contains(FRESH_TOKEN) {
      return ParsedLabel {
        fruit: Fruit::extract_or(&label.replacen(FRESH_TOKEN, "", 1), label),
        condition: Condition::Fresh,
      };
    }
    if label.contains(ROTTEN_TOKEN) {
      return ParsedLabel {
        fruit: Fruit::extract_or(&label.replacen(ROTTEN_TOKEN, "", 1), label),
        condition: Condition::Rotten,
      };
    }

    // 首词为状态，末词为水果，中间的词被忽略
    let tokens: Vec<&str> = label.split_whitespace().collect();
    match (tokens.first(), tokens.last()) {
      (Some(first), Some(last)) if tokens.len() >= 2 => ParsedLabel {
        fruit: Fruit(last.to_string()),
        condition: Condition::Other(first.to_string()),
      },
      _ => ParsedLabel {
        fruit: Fruit::whole(label),
        condition: Condition::Unknown,
      },
    }
  }

  pub fn with_confidence(&self, confidence_percent: u8) -> InterpretedResult {
    InterpretedResult {
      fruit: self.fruit.clone(),
      is_fresh: self.condition.is_fresh(),
      condition: self.condition.clone(),
      confidence_percent: confidence_percent.min(100),
    }
  }
}

/// 单次分类的解释结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterpretedResult {
  pub fruit: Fruit,
  pub condition: Condition,
  pub confidence_percent: u8,
  pub is_fresh: bool,
}

impl InterpretedResult {
  pub fn advice(&self) -> String {
    crate::advice::advise(self.fruit.as_str(), &self.condition, self.confidence_percent)
  }
}

/// 将原始标签与置信度百分比转换为结构化结果，不会失败
pub fn interpret(label: &str, score_percent: u8) -> InterpretedResult {
  ParsedLabel::parse(label).with_confidence(score_percent)
}

/// 概率 `[0, 1]` 转为整数百分比（向零截断）
pub fn percent_from_probability(probability: f32) -> u8 {
  if probability.is_nan() {
    return 0;
  }
  (probability * 100.0).clamp(0.0, 100.0) as u8
}
