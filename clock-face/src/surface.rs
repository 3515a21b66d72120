use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

/// Somewhere a finished clock document is shown.
///
/// Each call replaces whatever was shown before.
pub trait Surface: Send {
    fn show(&mut self, document: &str) -> io::Result<()>;
}

/// Shows the document by (re)writing a file that a viewer can watch.
#[derive(Debug)]
pub struct FileSurface {
    path: PathBuf,
    scratch: PathBuf,
    created: bool,
}

impl FileSurface {
    pub fn new<T: AsRef<Path>>(path: T) -> Self {
        let path = path.as_ref().to_path_buf();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "clock.svg".into());
        let scratch = path.with_file_name(format!(".{name}.tmp"));
        Self {
            path,
            scratch,
            created: false,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Surface for FileSurface {
    fn show(&mut self, document: &str) -> io::Result<()> {
        // write then rename, so a watcher never reads half a document
        fs::write(&self.scratch, document)?;
        if let Err(err) = fs::rename(&self.scratch, &self.path) {
            let _ = fs::remove_file(&self.scratch);
            return Err(err);
        }
        if !self.created {
            self.created = true;
            log::info!("clock display at {}", self.path.display());
        }
        Ok(())
    }
}

/// Keeps every document shown. Clones share the same history.
#[derive(Debug, Clone, Default)]
pub struct MemorySurface {
    shown: Arc<Mutex<Vec<String>>>,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn documents(&self) -> Vec<String> {
        self.shown
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn count(&self) -> usize {
        self.shown.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn last(&self) -> Option<String> {
        self.shown
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .last()
            .cloned()
    }
}

impl Surface for MemorySurface {
    fn show(&mut self, document: &str) -> io::Result<()> {
        self.shown
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(document.to_string());
        Ok(())
    }
}
