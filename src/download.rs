use std::path::{Path, PathBuf};

use crate::constants::FILE_NAME_PREFIX;
use crate::error::ExportError;
use crate::fs_utils::{ensure_dir, ensure_unique_file_name, write_file};
use crate::image_data::decode_data_uri;

/// Lowercases `text` and turns every whitespace run into a single `-`.
pub fn slug(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut in_whitespace = false;

    for ch in text.chars() {
        if ch.is_whitespace() {
            if !in_whitespace {
                slug.push('-');
            }
            in_whitespace = true;
        } else {
            slug.extend(ch.to_lowercase());
            in_whitespace = false;
        }
    }

    slug
}

/// `urban-jungle-<slug>.png`, with path separators flattened to `-`.
pub fn download_file_name(text: &str) -> String {
    let slug: String = slug(text)
        .chars()
        .map(|ch| match ch {
            '/' | '\\' | '\0' => '-',
            other => other,
        })
        .collect();
    format!("{FILE_NAME_PREFIX}-{slug}.png")
}

/// Writes the image behind `image` into `dir` and returns the new file.
pub async fn export_image(image: &str, text: &str, dir: &Path) -> Result<PathBuf, ExportError> {
    let decoded = decode_data_uri(image)?;

    ensure_dir(dir).await?;
    let file_name = ensure_unique_file_name(dir, &download_file_name(text)).await?;
    let target = dir.join(file_name);

    write_file(&target, &decoded.bytes).await?;
    tracing::info!(path = %target.display(), bytes = decoded.bytes.len(), "image exported");

    Ok(target)
}
