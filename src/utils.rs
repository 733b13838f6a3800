// 该文件是 RipePick 项目的一部分。
// src/utils.rs - 通用工具
//
// 本程序遵循 GNU Affero 通用公共许可证（AGPL）许可协议。
// 本程序的发布旨在提供实用价值，但不作任何形式的担保，
// 包括但不限于对适销性或特定用途适用性的默示担保。
// 更多详情请参阅 GNU 通用公共许可证。
//
// Copyright (C) 2026 Johann Li <me@qinka.pro>, ETVP

use std::path::PathBuf;

use url::Url;

/// 从 URL 中取出文件路径，并解码百分号转义
///
/// `labels:///tmp/my%20labels.txt` -> `/tmp/my labels.txt`
pub fn url_file_path(url: &Url) -> Result<PathBuf, std::string::FromUtf8Error> {
  let decoded = urlencoding::decode(url.path())?;
  Ok(PathBuf::from(decoded.into_owned()))
}

/// 读取 URL 查询参数
pub fn query_value(url: &Url, key: &str) -> Option<String> {
  url
    .query_pairs()
    .find(|(k, _)| k == key)
    .map(|(_, v)| v.into_owned())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn decodes_escaped_path() {
    let url = Url::parse("labels:///tmp/my%20labels.txt").unwrap();
    assert_eq!(url_file_path(&url).unwrap(), PathBuf::from("/tmp/my labels.txt"));
  }

  #[test]
  fn reads_query_value() {
    let url = Url::parse("topk:?max_results=2&threshold=0.4").unwrap();
    assert_eq!(query_value(&url, "threshold").as_deref(), Some("0.4"));
    assert_eq!(query_value(&url, "missing"), None);
  }
}
