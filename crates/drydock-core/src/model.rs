//! イメージカタログのデータモデル

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::PathBuf;

/// 発見された Dockerfile 1つに対応するイメージレコード
///
/// カタログ構築のたびに全フィールドが再計算されます。
/// キャッシュや差分検出は利用側（ビルド順序の解決、
/// キャッシュ無効化）の責務です。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    /// 完全修飾名（namespace 付き、または名前マップで上書きされた値）
    pub name: String,

    /// 短縮名（ディレクトリ名 + Dockerfile サフィックス）
    pub short_name: String,

    /// Dockerfile を含むディレクトリ
    pub dir_path: PathBuf,

    /// Dockerfile へのフルパス
    pub path: PathBuf,

    /// 親イメージ参照（最初の FROM 行から抽出、無ければ None）
    pub parent: Option<String>,

    /// ビルドコンテキストが依存するローカルパスの集合
    ///
    /// Dockerfile 自身と同じディレクトリの `.dockerignore` を常に含みます。
    pub copy_paths: HashSet<PathBuf>,

    /// TAGS ファイル由来の追加タグ（ファイル順、空行も保持）
    pub extra_tags: Vec<String>,
}
