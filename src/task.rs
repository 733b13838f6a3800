// 该文件是 RipePick 项目的一部分。
// src/task.rs - 判定任务
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

use std::{sync::mpsc, thread};
use tracing::{info, warn};

use crate::{frame::FrameIndex, model::Model, output::Render};

pub trait Task<I, M, O>: Sized {
  type Error;
  fn run_task(self, input: I, model: M, output: O) -> Result<TaskSummary, Self::Error>;
}

/// 任务统计
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskSummary {
  pub frames: usize,
  pub rendered: usize,
  pub failed: usize,
}

pub struct OneShotTask;

impl<
  F,
  D,
  ME: std::error::Error + Sync + Send + 'static,
  RE: std::error::Error + Sync + Send + 'static,
  I: Iterator<Item = F>,
  M: Model<Input = F, Output = D, Error = ME>,
  O: Render<F, D, Error = RE>,
> Task<I, M, O> for OneShotTask
{
  type Error = anyhow::Error;

  fn run_task(self, mut input: I, model: M, output: O) -> Result<TaskSummary, Self::Error> {
    info!("开始任务...");
    let frame = input.next().ok_or_else(|| anyhow::anyhow!("没有输入帧"))?;
    info!("输入帧获取成功，开始判定...");
    let now = std::time::Instant::now();
    let result = model.infer(&frame)?;
    info!("判定完成，耗时: {:.2?}", now.elapsed());
    output.render_result(&frame, &result)?;

    Ok(TaskSummary {
      frames: 1,
      rendered: 1,
      failed: 0,
    })
  }
}

/// 依次处理所有帧，单帧判定失败只记录不中断
#[derive(Default, Debug)]
pub struct BatchTask {
  frame_number: Option<usize>,
}

impl BatchTask {
  pub fn with_frame_number(mut self, frame_number: Option<usize>) -> Self {
    self.frame_number = frame_number;
    self
  }
}

impl<
  F: FrameIndex,
  D,
  ME: std::error::Error + Sync + Send + 'static,
  RE: std::error::Error + Sync + Send + 'static,
  I: Iterator<Item = F>,
  M: Model<Input = F, Output = D, Error = ME>,
  O: Render<F, D, Error = RE>,
> Task<I, M, O> for BatchTask
{
  type Error = anyhow::Error;

  fn run_task(self, input: I, model: M, output: O) -> Result<TaskSummary, Self::Error> {
    info!("开始任务...");
    let mut summary = TaskSummary::default();
    for frame in input.take(self.frame_number.unwrap_or(usize::MAX)) {
      summary.frames += 1;
      match model.infer(&frame) {
        Ok(result) => {
          output.render_result(&frame, &result)?;
          summary.rendered += 1;
        }
        Err(e) => {
          warn!("第 {} 帧判定失败: {}", frame.frame_index(), e);
          summary.failed += 1;
        }
      }
    }

    info!(
      "任务完成: {} 帧, {} 个结果, {} 个失败",
      summary.frames, summary.rendered, summary.failed
    );
    Ok(summary)
  }
}

/// 在后台线程判定，结果经通道送回调用线程渲染
#[derive(Default, Debug)]
pub struct BackgroundTask {
  frame_number: Option<usize>,
}

impl BackgroundTask {
  pub fn with_frame_number(mut self, frame_number: Option<usize>) -> Self {
    self.frame_number = frame_number;
    self
  }
}

impl<
  F: FrameIndex + Send + 'static,
  D: Send + 'static,
  ME: std::error::Error + Sync + Send + 'static,
  RE: std::error::Error + Sync + Send + 'static,
  I: Iterator<Item = F> + Send + 'static,
  M: Model<Input = F, Output = D, Error = ME> + Send + 'static,
  O: Render<F, D, Error = RE>,
> Task<I, M, O> for BackgroundTask
{
  type Error = anyhow::Error;

  fn run_task(self, input: I, model: M, output: O) -> Result<TaskSummary, Self::Error> {
    info!("开始后台任务...");
    let (tx, rx) = mpsc::channel();
    let limit = self.frame_number.unwrap_or(usize::MAX);

    let worker = thread::Builder::new()
      .name("ripepick-infer".to_string())
      .spawn(move || {
        for frame in input.take(limit) {
          let result = model.infer(&frame);
          if tx.send((frame, result)).is_err() {
            warn!("接收端已关闭，停止判定");
            break;
          }
        }
      })?;

    let mut summary = TaskSummary::default();
    let mut render_error = None;
    for (frame, result) in rx.iter() {
      summary.frames += 1;
      match result {
        Ok(result) => {
          if let Err(e) = output.render_result(&frame, &result) {
            render_error = Some(e);
            break;
          }
          summary.rendered += 1;
        }
        Err(e) => {
          warn!("第 {} 帧判定失败: {}", frame.frame_index(), e);
          summary.failed += 1;
        }
      }
    }

    // 关闭接收端，判定线程在下一次发送时退出
    drop(rx);
    let joined = worker.join();
    if let Some(e) = render_error {
      return Err(e.into());
    }
    joined.map_err(|_| anyhow::anyhow!("判定线程异常退出"))?;
    info!(
      "后台任务完成: {} 帧, {} 个结果, {} 个失败",
      summary.frames, summary.rendered, summary.failed
    );
    Ok(summary)
  }
}
