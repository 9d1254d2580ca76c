use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub struct TestTree {
    pub root: TempDir,
}

impl TestTree {
    pub fn new() -> Self {
        let root = tempfile::tempdir().unwrap();
        Self { root }
    }

    pub fn write_dockerfile(&self, dir: &str, file_name: &str, content: &str) {
        let dir_path = self.root.path().join(dir);
        fs::create_dir_all(&dir_path).unwrap();
        fs::write(dir_path.join(file_name), content).unwrap();
    }

    #[allow(dead_code)]
    pub fn write_tags(&self, dir: &str, content: &str) {
        let dir_path = self.root.path().join(dir);
        fs::create_dir_all(&dir_path).unwrap();
        fs::write(dir_path.join("TAGS"), content).unwrap();
    }

    #[allow(dead_code)]
    pub fn write_config(&self, content: &str) {
        fs::write(self.root.path().join(".drydock.json"), content).unwrap();
    }

    pub fn path(&self) -> PathBuf {
        self.root.path().to_path_buf()
    }
}
