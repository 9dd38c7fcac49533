use std::{
    fs,
    path::{Path, PathBuf},
};

/// Temporary directory tree removed on drop.
#[derive(Debug)]
pub struct TempTree {
    dir: tempfile::TempDir,
}

#[allow(dead_code)]
impl TempTree {
    pub fn new(prefix: &str) -> Self {
        let dir = tempfile::Builder::new().prefix(prefix).tempdir().expect("create temp dir");
        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn write_file(&self, rel: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create parent dirs");
        }
        fs::write(&path, contents).expect("write fixture");
        path
    }

    /// A small mixed project used by most tests.
    pub fn sample_project(prefix: &str) -> Self {
        let tree = Self::new(prefix);
        tree.write_file("src/lib.rs", "pub fn f() {}\n");
        tree.write_file("src/lib_test.rs", "#[test]\nfn t() {}\n");
        tree.write_file("web/app.spec.ts", "it('works', () => {});\n");
        tree.write_file("web/latest.rb", "puts 1\n");
        tree.write_file("Makefile", "all:\n");
        tree
    }
}
