//! TAGS サイドカーファイルの読み込み

use crate::error::Result;
use std::path::Path;

/// TAGS ファイルから追加タグを読み込む
///
/// Dockerfile と同じディレクトリに `TAGS` ファイルがあれば、1行1タグとして
/// 読み込みます。前後の空白は取り除き、空白だけの行も空文字列として
/// ファイル順のまま残します。ファイルが無ければ空の Vec を返します。
pub fn extra_tags(dir: &Path) -> Result<Vec<String>> {
    let tags_path = dir.join("TAGS");
    if !tags_path.is_file() {
        return Ok(Vec::new());
    }

    let content = std::fs::read_to_string(&tags_path)?;
    Ok(content.lines().map(|line| line.trim().to_string()).collect())
}
