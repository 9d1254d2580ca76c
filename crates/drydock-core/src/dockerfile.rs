//! Dockerfile の行単位ヒューリスティック解析
//!
//! 完全な文法パーサではなく、イメージの命名と依存関係の抽出に必要な
//! FROM / COPY / ADD 命令だけを行単位のパターンマッチで解釈します。
//! それ以外の命令と構文エラーは意図的に無視します。

use crate::error::Result;
use regex::Regex;
use std::path::Path;

/// COPY / ADD / FROM 命令を抽出する行単位パーサ
pub struct DockerfileParser {
    copy_re: Regex,
    add_re: Regex,
    url_re: Regex,
}

impl Default for DockerfileParser {
    fn default() -> Self {
        Self::new()
    }
}

impl DockerfileParser {
    pub fn new() -> Self {
        Self {
            copy_re: Regex::new(r"(?i)^\s*COPY\s").unwrap(),
            add_re: Regex::new(r"(?i)^\s*ADD\s").unwrap(),
            url_re: Regex::new(r"(?i)^(https?|ftp):").unwrap(),
        }
    }

    /// 最初の FROM 行から親イメージ参照を抽出
    ///
    /// マルチステージビルドでは最初の FROM だけが対象で、以降の行は
    /// 走査しません。FROM 行が無い場合は None（エラーではありません）。
    pub fn parent(&self, path: &Path) -> Result<Option<String>> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::parent_of(&content))
    }

    fn parent_of(content: &str) -> Option<String> {
        for line in content.lines() {
            if line.trim().to_lowercase().starts_with("from") {
                return line.split_whitespace().nth(1).map(str::to_string);
            }
        }
        None
    }

    /// COPY / ADD 命令1行からコピー元パスを抽出
    ///
    /// exec 形式（JSON 配列）と shell 形式（空白区切り）の両方を受け付け、
    /// 末尾のコピー先トークンは捨てます。`COPY --from=` によるステージ間
    /// コピーと ADD の URL はローカルファイルへの依存ではないため
    /// 除外します。
    pub fn parse_copy(&self, line: &str) -> Vec<String> {
        let (is_copy, args) = if let Some(m) = self.copy_re.find(line) {
            (true, &line[m.end()..])
        } else if let Some(m) = self.add_re.find(line) {
            (false, &line[m.end()..])
        } else {
            return Vec::new();
        };

        // exec 形式の JSON 配列を試し、失敗したら shell 形式として分割
        let tokens: Vec<String> = match serde_json::from_str(args) {
            Ok(tokens) => tokens,
            Err(_) => args.split_whitespace().map(str::to_string).collect(),
        };

        let Some((_dest, sources)) = tokens.split_last() else {
            return Vec::new();
        };

        // ステージ間コピー (--from=X) は静的に解決できないので行ごと無視
        if is_copy {
            if sources
                .iter()
                .any(|p| p.to_lowercase().starts_with("--from="))
            {
                return Vec::new();
            }
            return sources.to_vec();
        }

        sources
            .iter()
            .filter(|p| !self.url_re.is_match(p))
            .cloned()
            .collect()
    }
}
