//! Filesystem helpers for reading site datasets and writing ranking
//! artefacts, built on `cap-std` and `camino`.
#![forbid(unsafe_code)]

use camino::{Utf8Component, Utf8Path, Utf8PathBuf};
use cap_std::{ambient_authority, fs_utf8};
use std::io;

/// Open a UTF-8 file path for reading using ambient authority.
pub fn open_utf8_file(path: &Utf8Path) -> io::Result<fs_utf8::File> {
    fs_utf8::File::open_ambient(path, ambient_authority())
}

/// Create (or truncate) a file for writing, creating missing parent
/// directories first.
pub fn create_utf8_file(path: &Utf8Path) -> io::Result<fs_utf8::File> {
    ensure_parent_dir(path)?;
    let (dir, file_name) = open_dir_and_file(path)?;
    dir.create(file_name.as_str())
}

/// Resolve the ambient parent directory of `path` along with its file name.
pub fn open_dir_and_file(path: &Utf8Path) -> io::Result<(fs_utf8::Dir, String)> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_str().is_empty() => parent,
        _ => Utf8Path::new("."),
    };
    let file_name = path
        .file_name()
        .ok_or_else(|| io::Error::other("target should include a file name"))?
        .to_owned();
    let dir = fs_utf8::Dir::open_ambient_dir(parent, ambient_authority())?;
    Ok((dir, file_name))
}

/// Ensure the parent directory for `path` exists.
pub fn ensure_parent_dir(path: &Utf8Path) -> io::Result<()> {
    let Some(parent) = path.parent().filter(|parent| !parent.as_str().is_empty()) else {
        return Ok(());
    };
    let (anchor, relative) = split_anchor(parent);
    if relative.as_str().is_empty() {
        return Ok(());
    }
    fs_utf8::Dir::open_ambient_dir(&anchor, ambient_authority())?.create_dir_all(&relative)
}

/// Return whether a path exists and is a regular file.
pub fn file_is_file(path: &Utf8Path) -> io::Result<bool> {
    let (dir, name) = open_dir_and_file(path)?;
    dir.metadata(name.as_str()).map(|meta| meta.is_file())
}

/// Split `dir` into an anchor opened with ambient authority and a path
/// below it that contains no root, prefix, or `..` components.
fn split_anchor(dir: &Utf8Path) -> (Utf8PathBuf, Utf8PathBuf) {
    let mut anchor = Utf8PathBuf::new();
    let mut relative = Utf8PathBuf::new();
    for component in dir.components() {
        match component {
            Utf8Component::Prefix(_) | Utf8Component::RootDir => anchor.push(component),
            Utf8Component::ParentDir => {
                if !relative.as_str().is_empty() {
                    anchor.push(&relative);
                    relative = Utf8PathBuf::new();
                }
                anchor.push(component);
            }
            Utf8Component::CurDir | Utf8Component::Normal(_) => relative.push(component),
        }
    }
    if anchor.as_str().is_empty() {
        anchor.push(".");
    }
    (anchor, relative)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::io::{Read, Write};
    use tempfile::TempDir;

    fn workspace() -> (TempDir, Utf8PathBuf) {
        let tmp = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf-8 tempdir");
        (tmp, root)
    }

    #[rstest]
    fn create_utf8_file_builds_missing_parents() {
        let (_tmp, root) = workspace();
        let target = root.join("reports/2024/top.csv");

        let mut file = create_utf8_file(&target).expect("create nested file");
        file.write_all(b"Location\n").expect("write file");
        drop(file);

        let mut contents = String::new();
        open_utf8_file(&target)
            .expect("reopen file")
            .read_to_string(&mut contents)
            .expect("read file");
        assert_eq!(contents, "Location\n");
    }

    #[rstest]
    #[case("reports/2024", ".", "reports/2024")]
    #[case("/srv/chargeplan/out", "/", "srv/chargeplan/out")]
    #[case("../shared/out", "..", "shared/out")]
    #[case("out/../archive", "out/..", "archive")]
    fn split_anchor_separates_escaping_prefixes(
        #[case] dir: &str,
        #[case] anchor: &str,
        #[case] relative: &str,
    ) {
        let (found_anchor, found_relative) = split_anchor(Utf8Path::new(dir));
        assert_eq!(found_anchor, Utf8PathBuf::from(anchor));
        assert_eq!(found_relative, Utf8PathBuf::from(relative));
    }

    #[rstest]
    fn ensure_parent_dir_ignores_bare_file_names() {
        ensure_parent_dir(Utf8Path::new("ranking.csv")).expect("no parent to create");
    }

    #[rstest]
    fn file_is_file_distinguishes_directories() {
        let (_tmp, root) = workspace();
        let file = root.join("sites.csv");
        std::fs::write(&file, b"x").expect("write file");

        assert!(file_is_file(&file).expect("inspect file"));
        assert!(!file_is_file(&root).expect("inspect directory"));
    }

    #[rstest]
    fn file_is_file_reports_missing_paths() {
        let (_tmp, root) = workspace();
        let err = file_is_file(&root.join("absent.csv")).expect_err("missing file");
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
