// 该文件是 RipePick 项目的一部分。
// src/labels.rs - 标签列表加载
//
// 本程序遵循 GNU Affero 通用公共许可证（AGPL）许可协议。
// 本程序的发布旨在提供实用价值，但不作任何形式的担保，
// 包括但不限于对适销性或特定用途适用性的默示担保。
// 更多详情请参阅 GNU 通用公共许可证。
//
// Copyright (C) 2026 Johann Li <me@qinka.pro>, ETVP

use std::path::Path;

use thiserror::Error;
use tracing::{debug, info, warn};
use url::Url;

use crate::{FromUrl, FromUrlWithScheme, label::ParsedLabel, utils::url_file_path};

pub const DEFAULT_LABELS: [&str; 6] = [
  "Fresh Apple",
  "Rotten Apple",
  "Fresh Banana",
  "Rotten Banana",
  "Fresh Orange",
  "Rotten Orange",
];

#[derive(Error, Debug)]
pub enum LabelSetError {
  #[error("URI 方案不匹配")]
  SchemeMismatch,
  #[error("标签路径解码失败: {0}")]
  PathDecode(#[from] std::string::FromUtf8Error),
  #[error("I/O 错误: {0}")]
  IoError(#[from] std::io::Error),
  #[error("标签列表为空")]
  Empty,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelEntry {
  pub text: String,
  pub parsed: ParsedLabel,
}

impl LabelEntry {
  fn new(text: impl Into<String>) -> Self {
    let text = text.into();
    let parsed = ParsedLabel::parse(&text);
    LabelEntry { text, parsed }
  }
}

/// 有序标签列表，下标对应分类器的输出通道
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelSet {
  entries: Box<[LabelEntry]>,
}

impl Default for LabelSet {
  fn default() -> Self {
    Self::from_labels(DEFAULT_LABELS)
  }
}

impl LabelSet {
  pub fn from_labels<I, S>(labels: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    LabelSet {
      entries: labels.into_iter().map(LabelEntry::new).collect(),
    }
  }

  /// 解析标签文本：每行一个，去掉行首数字序号，跳过空行
  pub fn parse(text: &str) -> Result<Self, LabelSetError> {
    let set = Self::from_labels(text.lines().filter_map(strip_index_prefix));
    if set.is_empty() {
      return Err(LabelSetError::Empty);
    }
    Ok(set)
  }

  pub fn load(path: impl AsRef<Path>) -> Result<Self, LabelSetError> {
    let path = path.as_ref();
    info!("加载标签文件: {}", path.display());
    let text = std::fs::read_to_string(path)?;
    let set = Self::parse(&text)?;
    info!("模型标签: {}", set.joined());
    Ok(set)
  }

  /// 加载失败时回退到默认标签
  pub fn load_or_default(path: impl AsRef<Path>) -> Self {
    match Self::load(path) {
      Ok(set) => set,
      Err(e) => {
        warn!("标签加载失败: {}，使用默认标签", e);
        Self::default()
      }
    }
  }

  /// 同 [`LabelSet::load_or_default`]，标签位置由 URL 给出
  pub fn from_url_or_default(url: &Url) -> Self {
    match Self::from_url(url) {
      Ok(set) => set,
      Err(e) => {
        warn!("标签加载失败: {}，使用默认标签", e);
        Self::default()
      }
    }
  }

  pub fn len(&self) -> usize {
    self.entries.len()
  }

  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }

  pub fn get(&self, index: usize) -> Option<&LabelEntry> {
    self.entries.get(index)
  }

  pub fn iter(&self) -> impl Iterator<Item = &LabelEntry> {
    self.entries.iter()
  }

  /// 下标越界时使用分类器自带的标签文本，空白文本视为没有标签
  pub fn resolve(&self, index: usize, fallback: Option<&str>) -> Option<LabelEntry> {
    match self.get(index) {
      Some(entry) => Some(entry.clone()),
      None => {
        debug!("标签下标 {} 超出范围 ({})", index, self.len());
        fallback
          .map(str::trim)
          .filter(|text| !text.is_empty())
          .map(LabelEntry::new)
      }
    }
  }

  pub fn joined(&self) -> String {
    self
      .entries
      .iter()
      .map(|e| e.text.as_str())
      .collect::<Vec<_>>()
      .join(", ")
  }
}

fn strip_index_prefix(line: &str) -> Option<&str> {
  let line = line.trim();
  if line.is_empty() {
    return None;
  }
  match line.split_once(char::is_whitespace) {
    Some((head, rest)) if head.chars().all(|c| c.is_ascii_digit()) => {
      let rest = rest.trim();
      (!rest.is_empty()).then_some(rest)
    }
    _ => Some(line),
  }
}

impl FromUrlWithScheme for LabelSet {
  const SCHEME: &'static str = "labels";
}

impl FromUrl for LabelSet {
  type Error = LabelSetError;

  fn from_url(url: &Url) -> Result<Self, Self::Error> {
    if url.scheme() != Self::SCHEME {
      return Err(LabelSetError::SchemeMismatch);
    }
    Self::load(url_file_path(url)?)
  }
}
