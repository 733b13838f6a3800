// 该文件是 RipePick 项目的一部分。
// src/output/console.rs - 控制台输出
//
// 本程序遵循 GNU Affero 通用公共许可证（AGPL）许可协议。
// 本程序的发布旨在提供实用价值，但不作任何形式的担保，
// 包括但不限于对适销性或特定用途适用性的默示担保。
// 更多详情请参阅 GNU 通用公共许可证。
//
// Copyright (C) 2026 Johann Li <me@qinka.pro>, ETVP

use std::io::Write;

use thiserror::Error;
use tracing::info;
use url::Url;

use crate::{
  FromUrl, FromUrlWithScheme,
  advice::{ConfidenceTier, fruit_emoji, status_line},
  frame::ScoreFrame,
  model::Verdict,
  output::Render,
};

#[derive(Error, Debug)]
pub enum ConsoleOutputError {
  #[error("URI 方案不匹配")]
  SchemeMismatch,
  #[error("I/O 错误: {0}")]
  IoError(#[from] std::io::Error),
}

/// 结果报告文本
pub fn report(verdict: &Verdict) -> String {
  let result = &verdict.result;
  format!(
    "{}\n{} {}\n🎯 {}\n📊 {}% Confidence\n{}",
    status_line(result),
    fruit_emoji(result.fruit.as_str()),
    result.fruit,
    result.condition,
    result.confidence_percent,
    verdict.advice
  )
}

/// 将结果报告打印到标准输出
#[derive(Debug, Default)]
pub struct ConsoleOutput;

impl FromUrlWithScheme for ConsoleOutput {
  const SCHEME: &'static str = "console";
}

impl FromUrl for ConsoleOutput {
  type Error = ConsoleOutputError;

  fn from_url(url: &Url) -> Result<Self, Self::Error> {
    if url.scheme() != Self::SCHEME {
      return Err(ConsoleOutputError::SchemeMismatch);
    }
    Ok(ConsoleOutput)
  }
}

impl Render<ScoreFrame, Verdict> for ConsoleOutput {
  type Error = ConsoleOutputError;

  fn render_result(&self, frame: &ScoreFrame, result: &Verdict) -> Result<(), Self::Error> {
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "帧 {}: {}", frame.index(), result.label)?;
    writeln!(stdout, "{}", report(result))?;
    writeln!(stdout)?;
    stdout.flush()?;

    info!(
      "{}",
      ConfidenceTier::of(result.result.confidence_percent).notice()
    );
    Ok(())
  }
}
