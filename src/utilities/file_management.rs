use std::fs;
use std::path::Path;

/// Writes `content` to `path`, replacing any previous file and creating parent directories.
pub fn write_to_file(path: &str, content: &str) -> std::io::Result<()> {
    if let Some(parent) = Path::new(path).parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_write_creates_parent_directories_and_overwrites() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("nested/dir/page.html");
        let path = path.to_str().unwrap();

        write_to_file(path, "first").unwrap();
        write_to_file(path, "second").unwrap();

        assert_eq!(fs::read_to_string(path).unwrap(), "second");
    }
}
