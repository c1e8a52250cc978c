//! Filesystem implementation of [`ModuleLoader`].

use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

use plar_eval::{LoadError, ModuleLoader};
use plar_ir::Program;

/// Loads `importar` literals from disk.
///
/// Relative literals resolve against `base`; absolute ones are used as-is.
/// `.` components are dropped lexically, nothing else is canonicalised, so
/// `a.plar` and `../dir/a.plar` stay distinct imports.
#[derive(Clone, Debug)]
pub struct FsModuleLoader {
    base: PathBuf,
}

impl FsModuleLoader {
    pub fn new(base: impl Into<PathBuf>) -> Self {
        FsModuleLoader { base: base.into() }
    }

    pub fn base(&self) -> &Path {
        &self.base
    }

    pub fn resolve(&self, literal: &str) -> PathBuf {
        let literal = Path::new(literal);
        let joined = if literal.is_absolute() {
            literal.to_path_buf()
        } else {
            self.base.join(literal)
        };
        joined
            .components()
            .filter(|component| !matches!(component, Component::CurDir))
            .collect()
    }
}

impl ModuleLoader for FsModuleLoader {
    fn load(&self, literal: &str) -> Result<Program, LoadError> {
        let path = self.resolve(literal);
        let display = path.display().to_string();
        tracing::debug!(path = %path.display(), "loading module");
        let source = std::fs::read_to_string(&path).map_err(|err| match err.kind() {
            ErrorKind::NotFound => LoadError::NotFound {
                path: display.clone(),
            },
            _ => LoadError::Io {
                path: display.clone(),
                message: err.to_string(),
            },
        })?;
        plar_parse::parse_source(&source).map_err(|err| {
            let at = err.span.line_col(&source);
            LoadError::Parse {
                path: display,
                message: format!("{}:{}: {err}", at.line, at.col),
            }
        })
    }
}
