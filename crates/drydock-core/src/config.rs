//! プロジェクト設定 (.drydock.json) の読み込み

use crate::error::{DiscoveryError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::debug;

/// プロジェクトルートに置く設定ファイル名
pub const CONFIG_FILE: &str = ".drydock.json";

/// プロジェクト設定
///
/// `names` はルートからの相対ディレクトリ → 正規イメージ名のマップで、
/// 規約ベースの命名（`namespace/ディレクトリ名`）を上書きします。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DrydockConfig {
    /// 自動導出されるイメージ名に付く namespace
    #[serde(default)]
    pub namespace: Option<String>,

    /// 明示的なイメージ名のマップ
    #[serde(default)]
    pub names: HashMap<PathBuf, String>,
}

impl DrydockConfig {
    /// ルートディレクトリから設定を読み込む
    ///
    /// ファイルが無ければデフォルト値（namespace なし・空のマップ）を
    /// 返します。JSON として不正な場合はエラーです。
    pub fn load(root: &Path) -> Result<Self> {
        let path = root.join(CONFIG_FILE);
        if !path.is_file() {
            debug!(root = %root.display(), "No project config, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path)?;
        serde_json::from_str(&content)
            .map_err(|e| DiscoveryError::InvalidConfig(format!("{}: {}", path.display(), e)))
    }
}
