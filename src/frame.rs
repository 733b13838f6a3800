// 该文件是 RipePick 项目的一部分。
// src/frame.rs - 分类器输出帧定义
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

/// 帧在输入中的序号，从 0 开始
pub trait FrameIndex {
  fn frame_index(&self) -> usize;
}

/// 一次分类请求的原始得分，每个通道一个概率
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreFrame {
  index: usize,
  scores: Box<[f32]>,
}

impl ScoreFrame {
  pub fn new(index: usize, scores: Vec<f32>) -> Self {
    Self {
      index,
      scores: scores.into_boxed_slice(),
    }
  }

  pub fn index(&self) -> usize {
    self.index
  }

  pub fn channels(&self) -> usize {
    self.scores.len()
  }
}

impl AsRef<[f32]> for ScoreFrame {
  fn as_ref(&self) -> &[f32] {
    &self.scores
  }
}

impl FrameIndex for ScoreFrame {
  fn frame_index(&self) -> usize {
    self.index
  }
}
