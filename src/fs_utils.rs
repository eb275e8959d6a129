use std::path::Path;

use tokio::fs;
use tokio::fs::try_exists;

use crate::error::ExportError;

fn io_error(path: &Path, source: std::io::Error) -> ExportError {
    ExportError::Io {
        path: path.display().to_string(),
        source,
    }
}

pub async fn ensure_dir(path: &Path) -> Result<(), ExportError> {
    if !try_exists(path).await.map_err(|err| io_error(path, err))? {
        fs::create_dir_all(path)
            .await
            .map_err(|err| io_error(path, err))?;
    }
    Ok(())
}

/// `original`, or `stem-N.ext` with the first free `N`.
pub async fn ensure_unique_file_name(dir: &Path, original: &str) -> Result<String, ExportError> {
    let first = dir.join(original);
    if !try_exists(&first).await.map_err(|err| io_error(&first, err))? {
        return Ok(original.to_string());
    }

    let original_path = Path::new(original);
    let stem = original_path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("image");
    let extension = original_path.extension().and_then(|ext| ext.to_str());

    let mut counter = 1;
    loop {
        let candidate = match extension {
            Some(ext) => format!("{stem}-{counter}.{ext}"),
            None => format!("{stem}-{counter}"),
        };

        let path = dir.join(&candidate);
        if !try_exists(&path).await.map_err(|err| io_error(&path, err))? {
            return Ok(candidate);
        }

        counter += 1;
    }
}

pub async fn write_file(path: &Path, bytes: &[u8]) -> Result<(), ExportError> {
    fs::write(path, bytes)
        .await
        .map_err(|err| io_error(path, err))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn unique_names_get_numbered() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(
            ensure_unique_file_name(dir.path(), "a.png").await.unwrap(),
            "a.png"
        );

        std::fs::write(dir.path().join("a.png"), b"x").unwrap();
        std::fs::write(dir.path().join("a-1.png"), b"x").unwrap();
        assert_eq!(
            ensure_unique_file_name(dir.path(), "a.png").await.unwrap(),
            "a-2.png"
        );
    }

    #[tokio::test]
    async fn ensure_dir_creates_nested_paths() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("x").join("y");
        ensure_dir(&nested).await.unwrap();
        assert!(nested.is_dir());
        ensure_dir(&nested).await.unwrap();
    }
}
