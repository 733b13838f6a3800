// 该文件是 RipePick 项目的一部分。
// src/main.rs - 项目主程序
//
// 本程序遵循 GNU Affero 通用公共许可证（AGPL）许可协议。
// 本程序的发布旨在提供实用价值，但不作任何形式的担保，
// 包括但不限于对适销性或特定用途适用性的默示担保。
// 更多详情请参阅 GNU 通用公共许可证。
//
// Copyright (C) 2026 Johann Li <me@qinka.pro>, ETVP

mod args;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use ripepick::{
  FromUrl,
  input::InputWrapper,
  labels::LabelSet,
  model::{FreshnessModel, TopKBuilder},
  output::OutputWrapper,
  task::{BackgroundTask, BatchTask, OneShotTask, Task},
};

use args::{Args, Mode};

fn main() -> Result<()> {
  tracing_subscriber::fmt::init();

  let args = Args::parse();

  info!("RipePick 水果新鲜度判定");
  info!("输入来源: {}", args.input);
  info!("分类后处理: {}", args.model);
  info!("输出位置: {}", args.output);

  let labels = match &args.labels {
    Some(url) => LabelSet::from_url_or_default(url),
    None => {
      info!("未指定标签文件，使用默认标签");
      LabelSet::default()
    }
  };
  info!("共 {} 个标签: {}", labels.len(), labels.joined());

  let input = InputWrapper::from_url(&args.input)?;
  let model = FreshnessModel::new(TopKBuilder::from_url(&args.model)?.build(), labels);
  let output = OutputWrapper::from_url(&args.output)?;

  let summary = match args.mode {
    Mode::Oneshot => OneShotTask.run_task(input, model, output)?,
    Mode::Batch => BatchTask::default()
      .with_frame_number(args.max_frames)
      .run_task(input, model, output)?,
    Mode::Background => BackgroundTask::default()
      .with_frame_number(args.max_frames)
      .run_task(input, model, output)?,
  };

  info!(
    "处理完成: 总帧数 {}, 判定 {}, 失败 {}",
    summary.frames, summary.rendered, summary.failed
  );

  Ok(())
}
