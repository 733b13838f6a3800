// 该文件是 RipePick 项目的一部分。
// src/input.rs - 分类得分输入
//
// 本文件根据 Apache 许可证第 2.0 版（以下简称“许可证”）授权使用；
// 除非遵守该许可证条款，否则您不得使用本文件。
// 您可通过以下网址获取许可证副本：
// http://www.apache.org/licenses/LICENSE-2.0
// 除非适用法律要求或书面同意，根据本许可协议分发的软件均按“原样”提供，
// 不附带任何形式的明示或暗示的保证或条件。
// 有关许可权限与限制的具体条款，请参阅本许可协议。
//
// Copyright (C) 2026 Johann Li <me@qinka.pro>, Wareless Group

use thiserror::Error;

use crate::{FromUrl, frame::ScoreFrame};

#[cfg(feature = "score_file_input")]
mod score_file;
#[cfg(feature = "score_file_input")]
pub use self::score_file::{ScoreFileInput, ScoreFileInputError};

#[derive(Error, Debug)]
pub enum InputError {
  #[cfg(feature = "score_file_input")]
  #[error("Score file input error: {0}")]
  ScoreFileInputError(#[from] ScoreFileInputError),
  #[error("URI scheme mismatch")]
  SchemeMismatch,
}

pub enum InputWrapper {
  #[cfg(feature = "score_file_input")]
  ScoreFile(ScoreFileInput),
}

impl FromUrl for InputWrapper {
  type Error = InputError;

  fn from_url(url: &url::Url) -> Result<Self, Self::Error> {
    #[cfg(feature = "score_file_input")]
    {
      use crate::FromUrlWithScheme;

      if url.scheme() == ScoreFileInput::SCHEME {
        let input = ScoreFileInput::from_url(url)?;
        return Ok(InputWrapper::ScoreFile(input));
      }
    }
    Err(InputError::SchemeMismatch)
  }
}

impl Iterator for InputWrapper {
  type Item = ScoreFrame;

  fn next(&mut self) -> Option<Self::Item> {
    match self {
      #[cfg(feature = "score_file_input")]
      InputWrapper::ScoreFile(input) => input.next(),
    }
  }
}
