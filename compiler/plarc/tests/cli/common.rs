//! Temporary project directories.

use std::path::{Path, PathBuf};

use plar_eval::{buffer_handler, SharedPrintHandler};
use plarc::commands::run_script;
use plarc::{Overrides, Report};
use tempfile::TempDir;

pub struct Project {
    dir: TempDir,
}

impl Project {
    pub fn new() -> Self {
        Project {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write `source` to `name`, creating parent directories.
    pub fn file(&self, name: &str, source: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(&path, source).unwrap();
        path
    }

    /// Run `name` with default limits, returning the outcome and its output.
    pub fn run(&self, name: &str) -> (Result<(), Report>, String) {
        self.run_with(name, &Overrides::default())
    }

    pub fn run_with(&self, name: &str, overrides: &Overrides) -> (Result<(), Report>, String) {
        let handler: SharedPrintHandler = buffer_handler();
        let result = run_script(&self.dir.path().join(name), overrides, handler.clone());
        (result, handler.get_output())
    }
}
