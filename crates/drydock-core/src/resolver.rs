//! イメージ名の解決
//!
//! Dockerfile のパスと namespace、明示的な名前マップから
//! イメージの正規名と短縮名を導出します。

use crate::discovery::DOCKERFILE_PREFIX;
use crate::error::{DiscoveryError, Result};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Dockerfile のパスから短縮名を導出
///
/// ファイル名は `Dockerfile` で始まっていなければなりません。
/// 親ディレクトリ名に `Dockerfile` 以降のサフィックスを連結した値を
/// 返します: `.../foo/Dockerfile-dev` → `foo-dev`
pub fn short_name(path: &Path) -> Result<String> {
    let suffix = path
        .file_name()
        .and_then(|n| n.to_str())
        .and_then(|n| n.strip_prefix(DOCKERFILE_PREFIX))
        .ok_or_else(|| DiscoveryError::InvalidDockerfileName(path.to_path_buf()))?;

    let dir_name = path
        .parent()
        .and_then(|d| d.file_name())
        .and_then(|n| n.to_str())
        .unwrap_or("");

    Ok(format!("{}{}", dir_name, suffix))
}

/// namespace と名前マップからイメージの (正規名, 短縮名) を解決
///
/// `root` からの相対ディレクトリが `name_map` のキーと完全一致すれば、
/// そのエントリが正規名・短縮名の両方として使われます（明示的な
/// マッピングが常に優先、前方一致はしません）。それ以外は
/// `namespace/短縮名` を正規名とします。
pub fn image_name(
    namespace: &str,
    name_map: &HashMap<PathBuf, String>,
    root: &Path,
    path: &Path,
) -> Result<(String, String)> {
    if let Some(dir) = path.parent()
        && let Ok(relative) = dir.strip_prefix(root)
        && let Some(mapped) = name_map.get(relative)
    {
        debug!(path = %path.display(), name = %mapped, "Image name overridden by name map");
        return Ok((mapped.clone(), mapped.clone()));
    }

    let short = short_name(path)?;
    Ok((format!("{}/{}", namespace, short), short))
}
