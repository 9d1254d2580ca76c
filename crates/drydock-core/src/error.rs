use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DiscoveryError {
    #[error("'{0}' は有効な Dockerfile 名ではありません")]
    InvalidDockerfileName(PathBuf),

    #[error("ファイル読み込みエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error("ディレクトリ走査エラー: {path}\n理由: {message}")]
    Walk { path: PathBuf, message: String },

    #[error("無効な設定: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, DiscoveryError>;
