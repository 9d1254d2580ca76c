//! イメージカタログの構築

use crate::context::copy_paths;
use crate::discovery::dockerfiles;
use crate::dockerfile::DockerfileParser;
use crate::error::Result;
use crate::model::Image;
use crate::resolver::image_name;
use crate::tags::extra_tags;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// ルート以下のすべての Dockerfile からイメージカタログを構築
///
/// 戻り値の順序は [`dockerfiles`] の列挙順（未規定）です。決定的な順序が
/// 必要な場合は呼び出し側でソートしてください。
///
/// いずれかのファイルの処理に失敗した場合（Dockerfile や TAGS が
/// 読めない等）はカタログ全体が失敗します。部分結果は返しません。
#[tracing::instrument(skip(namespace, name_map, root), fields(root = %root.display()))]
pub fn list_images(
    namespace: &str,
    name_map: &HashMap<PathBuf, String>,
    root: &Path,
) -> Result<Vec<Image>> {
    let parser = DockerfileParser::new();
    let mut images = Vec::new();

    for path in dockerfiles(root)? {
        let (name, short_name) = image_name(namespace, name_map, root, &path)?;
        let dir_path = path.parent().unwrap_or(Path::new("")).to_path_buf();
        debug!(image = %name, path = %path.display(), "Resolved image");

        images.push(Image {
            name,
            short_name,
            extra_tags: extra_tags(&dir_path)?,
            copy_paths: copy_paths(&parser, &path)?,
            parent: parser.parent(&path)?,
            dir_path,
            path,
        });
    }

    info!(image_count = images.len(), "Image catalog built");
    Ok(images)
}
