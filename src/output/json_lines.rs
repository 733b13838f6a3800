// 该文件是 RipePick 项目的一部分。
// src/output/json_lines.rs - JSON Lines 记录输出
//
// 本程序遵循 GNU Affero 通用公共许可证（AGPL）许可协议。
// 本程序的发布旨在提供实用价值，但不作任何形式的担保，
// 包括但不限于对适销性或特定用途适用性的默示担保。
// 更多详情请参阅 GNU 通用公共许可证。
//
// Copyright (C) 2026 Johann Li <me@qinka.pro>, ETVP

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Mutex;

use chrono::{DateTime, Utc};
use serde_json::{Value, json};
use thiserror::Error;
use tracing::{debug, info};
use url::Url;

use crate::{
  FromUrl, FromUrlWithScheme, frame::ScoreFrame, model::Verdict, output::Render,
  utils::url_file_path,
};

#[derive(Error, Debug)]
pub enum JsonLinesOutputError {
  #[error("URI 方案不匹配")]
  SchemeMismatch,
  #[error("路径解码失败: {0}")]
  PathDecode(#[from] std::string::FromUtf8Error),
  #[error("I/O 错误: {0}")]
  IoError(#[from] std::io::Error),
  #[error("JSON 错误: {0}")]
  JsonError(#[from] serde_json::Error),
  #[error("输出文件锁已损坏")]
  Poisoned,
}

/// 单条判定记录
pub fn verdict_record(frame: &ScoreFrame, verdict: &Verdict, timestamp: DateTime<Utc>) -> Value {
  let result = &verdict.result;
  json!({
    "frame": frame.index(),
    "label": verdict.label,
    "fruit": result.fruit.as_str(),
    "condition": result.condition.as_str(),
    "confidence_percent": result.confidence_percent,
    "is_fresh": result.is_fresh,
    "advice": verdict.advice,
    "timestamp": timestamp.to_rfc3339(),
  })
}

/// 以追加方式把每帧判定写成一行 JSON
pub struct JsonLinesOutput {
  path: PathBuf,
  file: Mutex<File>,
}

impl FromUrlWithScheme for JsonLinesOutput {
  const SCHEME: &'static str = "jsonl";
}

impl FromUrl for JsonLinesOutput {
  type Error = JsonLinesOutputError;

  fn from_url(url: &Url) -> Result<Self, Self::Error> {
    if url.scheme() != Self::SCHEME {
      return Err(JsonLinesOutputError::SchemeMismatch);
    }

    let path = url_file_path(url)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
      std::fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(&path)?;
    info!("判定记录写入: {}", path.display());

    Ok(JsonLinesOutput {
      path,
      file: Mutex::new(file),
    })
  }
}

impl JsonLinesOutput {
  pub fn path(&self) -> &PathBuf {
    &self.path
  }
}

impl Render<ScoreFrame, Verdict> for JsonLinesOutput {
  type Error = JsonLinesOutputError;

  fn render_result(&self, frame: &ScoreFrame, result: &Verdict) -> Result<(), Self::Error> {
    let record = verdict_record(frame, result, Utc::now());
    let mut line = serde_json::to_string(&record)?;
    line.push('\n');

    let mut file = self.file.lock().map_err(|_| JsonLinesOutputError::Poisoned)?;
    file.write_all(line.as_bytes())?;
    file.flush()?;
    debug!("帧 {} 记录已写入", frame.index());
    Ok(())
  }
}
