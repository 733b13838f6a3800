// 该文件是 RipePick 项目的一部分。
// src/advice.rs - 建议文本与结果展示辅助
//
// 本程序遵循 GNU Affero 通用公共许可证（AGPL）许可协议。
// 本程序的发布旨在提供实用价值，但不作任何形式的担保，
// 包括但不限于对适销性或特定用途适用性的默示担保。
// 更多详情请参阅 GNU 通用公共许可证。
//
// Copyright (C) 2026 Johann Li <me@qinka.pro>, ETVP

use crate::label::{Condition, InterpretedResult};

/// 非新鲜结果低于该置信度时追加提醒
pub const LOW_CONFIDENCE_PERCENT: u8 = 70;
pub const LOW_CONFIDENCE_SUFFIX: &str = "\n\n⚠️ Low confidence - double check visually!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KnownFruit {
  Apple,
  Banana,
  Orange,
}

impl KnownFruit {
  /// 大小写不敏感的子串匹配，"Green Apple" 也算苹果
  pub fn recognize(fruit: &str) -> Option<Self> {
    let fruit = fruit.to_lowercase();
    if fruit.contains("apple") {
      Some(KnownFruit::Apple)
    } else if fruit.contains("banana") {
      Some(KnownFruit::Banana)
    } else if fruit.contains("orange") {
      Some(KnownFruit::Orange)
    } else {
      None
    }
  }

  pub fn emoji(&self) -> &'static str {
    match self {
      KnownFruit::Apple => "🍎",
      KnownFruit::Banana => "🍌",
      KnownFruit::Orange => "🍊",
    }
  }

  fn fresh_message(&self) -> &'static str {
    match self {
      KnownFruit::Apple => "Crisp and fresh! Perfect for eating or salads.",
      KnownFruit::Banana => "Fresh banana! Great for snacks or smoothies.",
      KnownFruit::Orange => "Juicy and fresh! Rich in Vitamin C.",
    }
  }

  fn spoiled_message(&self) -> &'static str {
    match self {
      KnownFruit::Apple => "Rotten apple. Do not consume - may contain mold.",
      KnownFruit::Banana => "Overripe banana. Best for baking banana bread.",
      KnownFruit::Orange => "Rotten orange. Discard immediately.",
    }
  }
}

/// 按水果与状态生成建议文本
pub fn advise(fruit: &str, condition: &Condition, confidence_percent: u8) -> String {
  let known = KnownFruit::recognize(fruit);
  if condition.is_fresh() {
    return known
      .map(|f| f.fresh_message())
      .unwrap_or("Fresh and ready to eat!")
      .to_string();
  }

  let mut message = known
    .map(|f| f.spoiled_message())
    .unwrap_or("Not safe for consumption. Please discard.")
    .to_string();
  if confidence_percent < LOW_CONFIDENCE_PERCENT {
    message.push_str(LOW_CONFIDENCE_SUFFIX);
  }
  message
}

/// 未识别的水果沿用苹果图标
pub fn fruit_emoji(fruit: &str) -> &'static str {
  KnownFruit::recognize(fruit)
    .unwrap_or(KnownFruit::Apple)
    .emoji()
}

pub fn status_line(result: &InterpretedResult) -> &'static str {
  if result.is_fresh {
    "✅ FRESH & DELICIOUS"
  } else {
    "❌ ROTTEN - AVOID"
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfidenceTier {
  High,
  Good,
  Low,
}

impl ConfidenceTier {
  pub fn of(confidence_percent: u8) -> Self {
    if confidence_percent > 80 {
      ConfidenceTier::High
    } else if confidence_percent > 60 {
      ConfidenceTier::Good
    } else {
      ConfidenceTier::Low
    }
  }

  pub fn notice(&self) -> &'static str {
    match self {
      ConfidenceTier::High => "High confidence detection! 🎯",
      ConfidenceTier::Good => "Good detection! 👍",
      ConfidenceTier::Low => "Low confidence - try a clearer photo 📸",
    }
  }
}
