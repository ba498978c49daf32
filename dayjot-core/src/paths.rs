use crate::DateKey;
use std::{
    ffi::OsStr,
    fs,
    path::{Path, PathBuf},
};

pub fn day_file_name(key: &DateKey) -> String {
    format!("{key}.md")
}

/// `{root}/YYYY/MM`
pub fn day_dir(root: &Path, key: &DateKey) -> PathBuf {
    let date = key.date();
    root.join(date.format("%Y").to_string())
        .join(date.format("%m").to_string())
}

/// `{root}/YYYY/MM/YYYY-MM-DD.md`
pub fn day_path(root: &Path, key: &DateKey) -> PathBuf {
    day_dir(root, key).join(day_file_name(key))
}

/// Recovers the key from a day file name, ignoring anything that is not one.
pub fn key_from_path(path: &Path) -> Option<DateKey> {
    if !is_markdown(path) {
        return None;
    }
    path.file_stem()
        .and_then(OsStr::to_str)
        .and_then(DateKey::parse)
}

/// Recursively collects every Markdown file under `path`.
pub fn scan_dir_for_md_files(path: &Path) -> anyhow::Result<Vec<PathBuf>> {
    let mut file_paths = Vec::new();

    for entry in fs::read_dir(path)? {
        let entry = entry?;
        let p = entry.path();

        if p.is_dir() {
            file_paths.extend(scan_dir_for_md_files(&p)?);
        } else if p.is_file() && is_markdown(&p) {
            file_paths.push(p);
        }
    }

    Ok(file_paths)
}

fn is_markdown(p: &Path) -> bool {
    p.extension()
        .and_then(OsStr::to_str)
        .map(|ext| ext.eq_ignore_ascii_case("md"))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn day_path_nests_by_year_and_month() {
        let key = DateKey::parse("2024-03-15").unwrap();
        let p = day_path(Path::new("/journal"), &key);
        assert_eq!(p, PathBuf::from("/journal/2024/03/2024-03-15.md"));
    }

    #[test]
    fn key_from_path_reads_the_stem() {
        let p = Path::new("/journal/2024/03/2024-03-15.md");
        assert_eq!(key_from_path(p).unwrap().as_str(), "2024-03-15");
        assert!(key_from_path(Path::new("/journal/notes.md")).is_none());
        assert!(key_from_path(Path::new("/journal/2024-03-15.txt")).is_none());
    }
}
