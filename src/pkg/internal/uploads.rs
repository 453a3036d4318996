use std::path::Path;

use tokio::fs;
use uuid::Uuid;

use crate::prelude::Result;

pub const UPLOADS_PREFIX: &str = "/uploads";

/// Strips any directory part the client sent along with the filename.
pub fn clean_file_name(original: &str) -> String {
    let base = original.rsplit(['/', '\\']).next().unwrap_or("").trim();
    match base {
        "" | "." | ".." => "upload".to_string(),
        name => name.to_string(),
    }
}

/// Writes `data` as `<uuid>_<name>` under `dir` and returns the URL path it is served at.
/// Files are never removed once written.
pub async fn save_upload(dir: &Path, original_name: &str, data: &[u8]) -> Result<String> {
    fs::create_dir_all(dir).await?;
    let filename = format!("{}_{}", Uuid::new_v4(), clean_file_name(original_name));
    fs::write(dir.join(&filename), data).await?;
    tracing::debug!("stored upload {} ({} bytes)", &filename, data.len());
    Ok(format!("{}/{}", UPLOADS_PREFIX, filename))
}

#[cfg(test)]
pub mod tests {
    use super::*;

    #[test]
    fn test_clean_file_name() {
        assert_eq!(clean_file_name("logo.png"), "logo.png");
        assert_eq!(clean_file_name("../../etc/passwd"), "passwd");
        assert_eq!(clean_file_name("C:\\Users\\me\\cv.pdf"), "cv.pdf");
        assert_eq!(clean_file_name(""), "upload");
        assert_eq!(clean_file_name("dir/.."), "upload");
    }

    #[tokio::test]
    async fn test_save_upload_generates_unique_names() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let first = save_upload(dir.path(), "logo.png", b"png").await?;
        let second = save_upload(dir.path(), "logo.png", b"png").await?;
        assert_ne!(first, second);
        assert!(first.starts_with("/uploads/"));
        assert!(first.ends_with("_logo.png"));
        let stored = first.trim_start_matches("/uploads/");
        assert_eq!(fs::read(dir.path().join(stored)).await?, b"png");
        Ok(())
    }
}
