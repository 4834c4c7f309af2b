//! Keeps `tests/unit/` a file-for-file mirror of `src/`

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::fs;
    use std::path::Path;

    // Crate roots and module declarations carry no logic of their own
    fn needs_mirror(relative: &str) -> bool {
        !matches!(relative, "main.rs" | "lib.rs") && !relative.ends_with("mod.rs")
    }

    // Relative paths of every `.rs` file below `root`, with `/` separators
    fn rust_files(root: &Path) -> BTreeSet<String> {
        let mut found = BTreeSet::new();
        let mut pending = vec![root.to_path_buf()];

        while let Some(dir) = pending.pop() {
            let entries = fs::read_dir(&dir).expect("directory is readable");
            for entry in entries {
                let path = entry.expect("directory entry is readable").path();
                if path.is_dir() {
                    pending.push(path);
                } else if path.extension().is_some_and(|ext| ext == "rs") {
                    let relative = path.strip_prefix(root).expect("path lies below root");
                    let parts: Vec<_> = relative
                        .components()
                        .map(|part| part.as_os_str().to_string_lossy().into_owned())
                        .collect();
                    found.insert(parts.join("/"));
                }
            }
        }

        found
    }

    // Tests each source file has a unit test file at the same relative path
    // Verified by deleting tests/unit/spatial/cell.rs
    #[test]
    fn test_sources_have_unit_tests() {
        let tests = rust_files(Path::new("tests/unit"));

        let missing: Vec<String> = rust_files(Path::new("src"))
            .into_iter()
            .filter(|relative| needs_mirror(relative) && !tests.contains(relative))
            .collect();

        assert!(missing.is_empty(), "no unit tests for src/{missing:?}");
    }

    // Tests no unit test file outlives the source file it covers
    // Verified by adding tests/unit/spatial/grid.rs
    #[test]
    fn test_unit_tests_have_sources() {
        let sources = rust_files(Path::new("src"));

        let orphaned: Vec<String> = rust_files(Path::new("tests/unit"))
            .into_iter()
            .filter(|relative| needs_mirror(relative) && !sources.contains(relative))
            .collect();

        assert!(orphaned.is_empty(), "no source for tests/unit/{orphaned:?}");
    }

    #[test]
    fn test_test_files_declare_tests() {
        let root = Path::new("tests");

        let empty: Vec<String> = rust_files(root)
            .into_iter()
            .filter(|relative| !relative.ends_with("main.rs") && needs_mirror(relative))
            .filter(|relative| {
                fs::read_to_string(root.join(relative))
                    .map(|content| !content.contains("#[test]"))
                    .unwrap_or(true)
            })
            .collect();

        assert!(empty.is_empty(), "test files without #[test]: {empty:?}");
    }
}
