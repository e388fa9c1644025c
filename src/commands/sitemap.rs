//! Write sitemap.xml

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};

use crate::sitemap;
use crate::Site;

/// Write the sitemap to `output`, or to `sitemap.xml` in the base directory
pub fn run(site: &Site, output: Option<&Path>) -> Result<PathBuf> {
    let repo = site.repository()?;
    let entries = sitemap::build(&site.settings, &repo, repo.now());

    let path = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| site.base_dir.join("sitemap.xml"));
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&path, sitemap::render(&entries))?;

    tracing::info!("Wrote {} sitemap entries to {:?}", entries.len(), path);
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_sitemap() {
        let dir = TempDir::new().unwrap();
        let site = Site::new(dir.path()).unwrap();

        let path = run(&site, None).unwrap();
        assert_eq!(path, dir.path().join("sitemap.xml"));
        let xml = fs::read_to_string(&path).unwrap();
        assert_eq!(xml.matches("<url>").count(), 5);

        let custom = dir.path().join("public/sitemap.xml");
        run(&site, Some(&custom)).unwrap();
        assert!(custom.exists());
    }
}
