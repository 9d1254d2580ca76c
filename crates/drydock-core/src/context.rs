//! ビルドコンテキスト依存パスの解決

use crate::dockerfile::DockerfileParser;
use crate::error::Result;
use std::collections::HashSet;
use std::path::{Component, Path, PathBuf};

/// ビルドコンテキストが依存するローカルパスの集合を計算
///
/// Dockerfile 自身のパスと、同じディレクトリの `.dockerignore`（存在は
/// 確認しません。変更検出に参加させるためパスだけを含めます）、そして
/// COPY / ADD が参照するすべてのコピー元パスを含みます。コピー元は
/// Dockerfile のディレクトリからの相対パスとして解決し、`.` / `..` を
/// 字句的に畳み込みます。
pub fn copy_paths(parser: &DockerfileParser, path: &Path) -> Result<HashSet<PathBuf>> {
    let dir = path.parent().unwrap_or(Path::new(""));

    let mut paths = HashSet::new();
    paths.insert(path.to_path_buf());
    paths.insert(dir.join(".dockerignore"));

    let content = std::fs::read_to_string(path)?;
    for line in content.lines() {
        for source in parser.parse_copy(line) {
            paths.insert(normalize_path(&dir.join(source)));
        }
    }

    Ok(paths)
}

/// `.` / `..` 成分を字句的に畳み込む（ファイルシステムには触れない）
pub(crate) fn normalize_path(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match normalized.components().next_back() {
                Some(Component::Normal(_)) => {
                    normalized.pop();
                }
                // ルートより上には昇れない
                Some(Component::RootDir) => {}
                _ => normalized.push(".."),
            },
            other => normalized.push(other.as_os_str()),
        }
    }
    normalized
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn paths_for(dockerfile: &str) -> (tempfile::TempDir, HashSet<PathBuf>) {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("Dockerfile");
        fs::write(&path, dockerfile).unwrap();

        let parser = DockerfileParser::new();
        let paths = copy_paths(&parser, &path).unwrap();
        (temp_dir, paths)
    }

    #[test]
    fn test_dockerfile_and_dockerignore_always_included() {
        let (temp_dir, paths) = paths_for("FROM ubuntu\nRUN make\n");

        assert_eq!(paths.len(), 2);
        assert!(paths.contains(&temp_dir.path().join("Dockerfile")));
        assert!(paths.contains(&temp_dir.path().join(".dockerignore")));
    }

    #[test]
    fn test_copy_sources_resolved_relative_to_dockerfile() {
        let (temp_dir, paths) = paths_for("FROM ubuntu\nCOPY a b /dest\n");

        assert_eq!(paths.len(), 4);
        assert!(paths.contains(&temp_dir.path().join("a")));
        assert!(paths.contains(&temp_dir.path().join("b")));
    }

    #[test]
    fn test_parent_segments_are_collapsed() {
        let (temp_dir, paths) = paths_for("COPY ../shared/lib.so /lib/\nADD ./conf.d /etc/\n");

        let parent = temp_dir.path().parent().unwrap();
        assert!(paths.contains(&parent.join("shared/lib.so")));
        assert!(paths.contains(&temp_dir.path().join("conf.d")));
    }

    #[test]
    fn test_duplicate_sources_deduplicated() {
        let (temp_dir, paths) = paths_for("COPY a /x\nCOPY a /y\nCOPY ./a /z\n");

        assert_eq!(paths.len(), 3);
        assert!(paths.contains(&temp_dir.path().join("a")));
    }

    #[test]
    fn test_normalize_path() {
        assert_eq!(normalize_path(Path::new("a/./b")), PathBuf::from("a/b"));
        assert_eq!(normalize_path(Path::new("a/b/../c")), PathBuf::from("a/c"));
        assert_eq!(normalize_path(Path::new("a/../../b")), PathBuf::from("../b"));
        assert_eq!(normalize_path(Path::new("/../b")), PathBuf::from("/b"));
    }

    #[test]
    fn test_unreadable_dockerfile_propagates() {
        let temp_dir = tempfile::tempdir().unwrap();
        let parser = DockerfileParser::new();

        let result = copy_paths(&parser, &temp_dir.path().join("Dockerfile"));
        assert!(result.is_err());
    }
}
