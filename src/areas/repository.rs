use crate::areas::database::Database;
use anyhow::Context;
use std::cell::{RefCell, RefMut};
use std::path::{Path, PathBuf};

pub struct Repository {
    path: Box<Path>,
    writer: RefCell<Box<dyn std::io::Write>>,
    database: Database,
}

impl Repository {
    /// Open the repository rooted at `path`
    ///
    /// `path` may be a working tree containing `.git` or a bare git directory.
    pub fn new(path: &str, writer: Box<dyn std::io::Write>) -> anyhow::Result<Self> {
        let path = Path::new(path)
            .canonicalize()
            .context(format!("Unable to open repository at {path}"))?;
        let objects_path = Self::objects_path(&path)?;

        tracing::debug!(objects = %objects_path.display(), "opened object database");

        Ok(Repository {
            path: path.into_boxed_path(),
            writer: RefCell::new(writer),
            database: Database::new(objects_path.into_boxed_path()),
        })
    }

    fn objects_path(path: &Path) -> anyhow::Result<PathBuf> {
        let git_dir = path.join(".git");
        if git_dir.join("objects").is_dir() {
            return Ok(git_dir.join("objects"));
        }

        // bare repository
        if path.join("objects").is_dir() && path.join("HEAD").is_file() {
            return Ok(path.join("objects"));
        }

        Err(anyhow::anyhow!(
            "Not a git repository: {}",
            path.display()
        ))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn database(&self) -> &Database {
        &self.database
    }
}
