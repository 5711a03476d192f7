use std::cell::RefCell;
use std::path::Path;
use std::rc::Rc;

use accordion_core::{AccordionError, MessageCatalog};

use crate::errors::{map_catalog_error, map_file_load_error, DisplayError};
use crate::state::AppState;

/// File operations orchestration
/// Handles all file I/O, failures come back as [`DisplayError`]
pub struct FileOperations<'a> {
    state: &'a Rc<RefCell<AppState>>,
}

impl<'a> FileOperations<'a> {
    pub fn new(state: &'a Rc<RefCell<AppState>>) -> Self {
        Self { state }
    }

    /// Load a filter document from the given path
    pub fn load_file(&self, path: &Path) -> anyhow::Result<()> {
        let load_result = self.state.borrow_mut().load_from_file(path.to_path_buf());

        match load_result {
            Ok(()) => {
                log::info!("loaded filter document {}", path.display());
                Ok(())
            }
            Err(e) => {
                log::debug!("loading {} failed: {}", path.display(), e);
                Err(DisplayError::new(map_file_load_error(&e, path)).into())
            }
        }
    }

    /// Load a label catalog, or the built-in one when no path is given
    pub fn load_catalog(&self, path: Option<&Path>) -> anyhow::Result<MessageCatalog> {
        let Some(path) = path else {
            return Ok(MessageCatalog::new());
        };

        MessageCatalog::load(path).map_err(|e: AccordionError| {
            log::debug!("loading {} failed: {}", path.display(), e);
            DisplayError::new(map_catalog_error(&e, path)).into()
        })
    }
}
