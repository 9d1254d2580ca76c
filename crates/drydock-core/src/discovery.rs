//! Dockerfile 自動発見機能
//!
//! ルートディレクトリ以下を再帰的に走査し、ファイル名が `Dockerfile` で
//! 始まるファイルをすべて列挙します。

use crate::error::{DiscoveryError, Result};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// ビルド定義として扱われるファイル名のプレフィックス（大文字小文字を区別）
pub const DOCKERFILE_PREFIX: &str = "Dockerfile";

/// ルート以下のすべての Dockerfile を列挙
///
/// `Dockerfile` と `Dockerfile-dev` のように同一ディレクトリに複数の
/// 定義があれば、それぞれ別エントリとして返します。
///
/// 戻り値の順序はファイルシステムの列挙順で、ソートされず、実行間で
/// 安定することも保証されません。決定的な順序が必要な場合は呼び出し側で
/// ソートしてください。
#[tracing::instrument(skip(root), fields(root = %root.display()))]
pub fn dockerfiles(root: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    let mut visited = HashSet::new();

    visit_dir(root, &mut files, &mut visited)?;

    debug!(count = files.len(), "Dockerfile discovery finished");
    Ok(files)
}

/// ディレクトリを再帰的に走査
fn visit_dir(dir: &Path, files: &mut Vec<PathBuf>, visited: &mut HashSet<PathBuf>) -> Result<()> {
    // 正規化されたパスを取得してループを検出
    let canonical_dir = dir.canonicalize().map_err(|e| DiscoveryError::Walk {
        path: dir.to_path_buf(),
        message: format!("パスの正規化に失敗: {}", e),
    })?;

    // ループ検出: 既に訪問済みなら終了
    if !visited.insert(canonical_dir) {
        warn!(dir = %dir.display(), "Symlink loop detected, skipping");
        return Ok(());
    }

    let entries = std::fs::read_dir(dir).map_err(|e| DiscoveryError::Walk {
        path: dir.to_path_buf(),
        message: format!("ディレクトリの読み込みに失敗: {}", e),
    })?;

    for entry in entries {
        let entry = entry.map_err(|e| DiscoveryError::Walk {
            path: dir.to_path_buf(),
            message: format!("ディレクトリエントリの読み込みに失敗: {}", e),
        })?;
        let path = entry.path();

        if path.is_dir() {
            visit_dir(&path, files, visited)?;
        } else if path
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|n| n.starts_with(DOCKERFILE_PREFIX))
        {
            files.push(path);
        }
    }

    Ok(())
}
