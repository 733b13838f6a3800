// 该文件是 RipePick 项目的一部分。
// src/input/score_file.rs - 得分文件输入
//
// 本程序遵循 GNU Affero 通用公共许可证（AGPL）许可协议。
// 本程序的发布旨在提供实用价值，但不作任何形式的担保，
// 包括但不限于对适销性或特定用途适用性的默示担保。
// 更多详情请参阅 GNU 通用公共许可证。
//
// Copyright (C) 2026 Johann Li <me@qinka.pro>, ETVP

use std::collections::VecDeque;

use serde_json::Value;
use thiserror::Error;
use tracing::{error, info};
use url::Url;

use crate::{FromUrl, FromUrlWithScheme, frame::ScoreFrame, utils::url_file_path};

#[derive(Error, Debug)]
pub enum ScoreFileInputError {
  #[error("URI schema mismatch")]
  SchemaMismatch,
  #[error("Path decode error: {0}")]
  PathDecode(#[from] std::string::FromUtf8Error),
  #[error("I/O error: {0}")]
  IoError(#[from] std::io::Error),
  #[error("JSON error: {0}")]
  JsonError(#[from] serde_json::Error),
  #[error("Expected an array of scores or an array of score arrays")]
  NotAnArray,
  #[error("Frame {frame}: score at position {position} is not a number")]
  NotANumber { frame: usize, position: usize },
}

/// 分类器输出得分文件
///
/// 文件内容为单个数组 `[0.1, 0.9]`，或数组的数组 `[[0.1, 0.9], [0.8, 0.2]]`，
/// 每个数组对应一帧。
pub struct ScoreFileInput {
  frames: VecDeque<ScoreFrame>,
}

impl FromUrlWithScheme for ScoreFileInput {
  const SCHEME: &'static str = "scores";
}

impl FromUrl for ScoreFileInput {
  type Error = ScoreFileInputError;

  fn from_url(url: &Url) -> Result<Self, Self::Error> {
    if url.scheme() != Self::SCHEME {
      error!(
        "URI scheme mismatch: expected '{}', found '{}'",
        Self::SCHEME,
        url.scheme()
      );
      return Err(ScoreFileInputError::SchemaMismatch);
    }

    let path = url_file_path(url)?;
    let text = std::fs::read_to_string(&path)?;
    let input = Self::parse(&text)?;
    info!("从 {} 读取 {} 帧得分", path.display(), input.len());
    Ok(input)
  }
}

impl ScoreFileInput {
  pub fn parse(text: &str) -> Result<Self, ScoreFileInputError> {
    let value: Value = serde_json::from_str(text)?;
    let Value::Array(items) = value else {
      return Err(ScoreFileInputError::NotAnArray);
    };

    let nested = items.first().is_some_and(Value::is_array);
    let vectors = if nested {
      items
        .into_iter()
        .map(|item| match item {
          Value::Array(scores) => Ok(scores),
          _ => Err(ScoreFileInputError::NotAnArray),
        })
        .collect::<Result<Vec<_>, _>>()?
    } else {
      vec![items]
    };

    let frames = vectors
      .into_iter()
      .enumerate()
      .map(|(frame, scores)| {
        let scores = scores
          .iter()
          .enumerate()
          .map(|(position, v)| {
            v.as_f64()
              .map(|s| s as f32)
              .ok_or(ScoreFileInputError::NotANumber { frame, position })
          })
          .collect::<Result<Vec<f32>, _>>()?;
        Ok(ScoreFrame::new(frame, scores))
      })
      .collect::<Result<VecDeque<_>, ScoreFileInputError>>()?;

    Ok(ScoreFileInput { frames })
  }

  pub fn len(&self) -> usize {
    self.frames.len()
  }

  pub fn is_empty(&self) -> bool {
    self.frames.is_empty()
  }
}

impl Iterator for ScoreFileInput {
  type Item = ScoreFrame;

  fn next(&mut self) -> Option<Self::Item> {
    self.frames.pop_front()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::io::Write;

  #[test]
  fn single_vector_is_one_frame() {
    let mut input = ScoreFileInput::parse("[0.1, 0.9, 0]").unwrap();
    assert_eq!(input.len(), 1);
    let frame = input.next().unwrap();
    assert_eq!(frame.index(), 0);
    assert_eq!(frame.as_ref(), &[0.1, 0.9, 0.0]);
    assert!(input.next().is_none());
  }

  #[test]
  fn nested_vectors_are_frames_in_order() {
    let input = ScoreFileInput::parse("[[0.1, 0.9], [0.8, 0.2], []]").unwrap();
    let frames: Vec<ScoreFrame> = input.collect();
    assert_eq!(frames.len(), 3);
    assert_eq!(frames[1].index(), 1);
    assert_eq!(frames[1].as_ref(), &[0.8, 0.2]);
    assert_eq!(frames[2].channels(), 0);
  }

  #[test]
  fn rejects_malformed_content() {
    assert!(matches!(
      ScoreFileInput::parse("{\"scores\": [1]}"),
      Err(ScoreFileInputError::NotAnArray)
    ));
    assert!(matches!(
      ScoreFileInput::parse("[[0.1], 0.2]"),
      Err(ScoreFileInputError::NotAnArray)
    ));
    assert!(matches!(
      ScoreFileInput::parse("[[0.1, \"x\"]]"),
      Err(ScoreFileInputError::NotANumber {
        frame: 0,
        position: 1
      })
    ));
    assert!(matches!(
      ScoreFileInput::parse("[0.1,"),
      Err(ScoreFileInputError::JsonError(_))
    ));
  }

  #[test]
  fn reads_from_url() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "[[0.3, 0.7]]").unwrap();
    let url = Url::parse(&format!(
      "scores://{}",
      Url::from_file_path(file.path()).unwrap().path()
    ))
    .unwrap();
    let mut input = ScoreFileInput::from_url(&url).unwrap();
    assert_eq!(input.next().unwrap().as_ref(), &[0.3, 0.7]);
  }
}
