// 该文件是 RipePick 项目的一部分。
// src/args.rs - 项目参数配置
//
// 本程序遵循 GNU Affero 通用公共许可证（AGPL）许可协议。
// 本程序的发布旨在提供实用价值，但不作任何形式的担保，
// 包括但不限于对适销性或特定用途适用性的默示担保。
// 更多详情请参阅 GNU 通用公共许可证。
//
// Copyright (C) 2026 Johann Li <me@qinka.pro>, ETVP

use clap::{Parser, ValueEnum};
use url::Url;

/// 任务运行方式
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
  /// 只处理第一帧
  Oneshot,
  /// 依次处理所有帧
  Batch,
  /// 后台线程判定，主线程输出
  Background,
}

/// RipePick 项目参数配置
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
  /// 分类器输出得分
  /// 支持格式:
  /// - scores:///path/to/scores.json
  #[arg(long, value_name = "SOURCE")]
  pub input: Url,

  /// 标签文件，缺省或加载失败时使用默认标签
  /// 支持格式:
  /// - labels:///path/to/labels.txt
  #[arg(long, value_name = "LABELS")]
  pub labels: Option<Url>,

  /// 分类后处理
  #[arg(long, default_value = "topk:?max_results=3&threshold=0.5", value_name = "MODEL")]
  pub model: Url,

  /// 输出位置
  /// 支持格式:
  /// - console:
  /// - jsonl:///path/to/verdicts.jsonl
  #[arg(long, default_value = "console:", value_name = "OUTPUT")]
  pub output: Url,

  /// 运行方式
  #[arg(long, value_enum, default_value_t = Mode::Batch)]
  pub mode: Mode,

  /// 最大处理帧数（不指定表示无限制）
  #[arg(long, value_name = "COUNT")]
  pub max_frames: Option<usize>,
}
