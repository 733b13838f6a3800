// 该文件是 RipePick 项目的一部分。
// src/bin/interpret.rs - 单个标签判定
//
// 本程序遵循 GNU Affero 通用公共许可证（AGPL）许可协议。
// 本程序的发布旨在提供实用价值，但不作任何形式的担保，
// 包括但不限于对适销性或特定用途适用性的默示担保。
// 更多详情请参阅 GNU 通用公共许可证。
//
// Copyright (C) 2026 Johann Li <me@qinka.pro>, ETVP

use anyhow::{Result, bail};
use clap::Parser;
use serde_json::json;
use tracing::info;

use ripepick::{
  advice::ConfidenceTier,
  interpret,
  label::percent_from_probability,
  model::Verdict,
  output::report,
};

/// 将分类器给出的标签与得分转换为判定
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
  /// 标签文本，例如 "Fresh Apple"
  #[arg(long, value_name = "LABEL")]
  pub label: String,
  /// 得分概率 (0.0 - 1.0)
  #[arg(long, value_name = "PROB")]
  pub score: f32,
  /// 以 JSON 输出
  #[arg(long)]
  pub json: bool,
}

fn main() -> Result<()> {
  tracing_subscriber::fmt::init();

  let args = Args::parse();
  if args.label.is_empty() {
    bail!("标签不能为空");
  }

  let percent = percent_from_probability(args.score);
  info!("标签: {}, 置信度: {}%", args.label, percent);

  let result = interpret(&args.label, percent);
  let verdict = Verdict {
    label: args.label,
    advice: result.advice(),
    result,
  };

  if args.json {
    let value = json!({
      "label": verdict.label,
      "fruit": verdict.result.fruit.as_str(),
      "condition": verdict.result.condition.as_str(),
      "confidence_percent": verdict.result.confidence_percent,
      "is_fresh": verdict.result.is_fresh,
      "advice": verdict.advice,
    });
    println!("{}", serde_json::to_string_pretty(&value)?);
  } else {
    println!("{}", report(&verdict));
  }
  info!(
    "{}",
    ConfidenceTier::of(verdict.result.confidence_percent).notice()
  );

  Ok(())
}
