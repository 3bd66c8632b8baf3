//! Home screen: the list of saved web apps and the add/edit form over it.
//!
//! Every mutation is followed by a full `list_all()` refresh. When a store call fails the
//! error goes back to the caller and the on-screen list keeps its previous contents.

use tracing::{info, warn};

use crate::managers::record_store::RecordStoreTrait;
use crate::screens::input_form::InputForm;
use crate::services::id_generator::generate_unique_id;
use crate::types::bookmark::Bookmark;
use crate::types::errors::{AppError, NavigationError, StoreError};

#[derive(Debug, Default)]
pub struct HomeScreen {
    items: Vec<Bookmark>,
    form: InputForm,
}

impl HomeScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[Bookmark] {
        &self.items
    }

    pub fn form(&self) -> &InputForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut InputForm {
        &mut self.form
    }

    pub fn on_mount(&mut self, store: &dyn RecordStoreTrait) -> Result<(), StoreError> {
        self.refresh(store)
    }

    /// Replaces the list with the store's contents. Leaves it untouched on error.
    pub fn refresh(&mut self, store: &dyn RecordStoreTrait) -> Result<(), StoreError> {
        match store.list_all() {
            Ok(items) => {
                self.items = items;
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "refresh failed, keeping previous list");
                Err(e)
            }
        }
    }

    pub fn open_create(&mut self) {
        self.form.open_for_create();
    }

    pub fn open_edit(&mut self, index: usize) -> Result<(), NavigationError> {
        let record = self
            .items
            .get(index)
            .ok_or(NavigationError::IndexOutOfRange(index))?;
        self.form.open_for_edit(record);
        Ok(())
    }

    pub fn open_edit_by_id(&mut self, id: &str) -> Result<(), NavigationError> {
        let index = self
            .index_of(id)
            .ok_or_else(|| NavigationError::NotFound(id.to_string()))?;
        self.open_edit(index)
    }

    pub fn close_form(&mut self) {
        self.form.close();
    }

    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.items.iter().position(|b| b.id == id)
    }

    /// The record at `index`, as selected from the list.
    pub fn select(&self, index: usize) -> Result<&Bookmark, NavigationError> {
        self.items
            .get(index)
            .ok_or(NavigationError::IndexOutOfRange(index))
    }

    /// Validates the form, upserts the record and refreshes the list.
    ///
    /// A new id is generated only when the form is not editing an existing record.
    /// The form closes once the write succeeds. A failed refresh after that is logged and
    /// leaves the previous list in place; the saved record is still returned.
    pub fn submit(&mut self, store: &mut dyn RecordStoreTrait) -> Result<Bookmark, AppError> {
        let submission = self.form.submit()?;

        let id = match submission.id {
            Some(id) => id,
            None => generate_unique_id(|candidate| self.items.iter().any(|b| b.id == candidate)),
        };
        let record = Bookmark::new(id, submission.name, submission.url);

        if let Err(e) = store.upsert(&record) {
            warn!(id = %record.id, error = %e, "saving web app failed");
            return Err(e.into());
        }
        info!(id = %record.id, name = %record.name, "web app saved");

        self.form.close();
        // The write is committed; a stale list is corrected by the next refresh.
        let _ = self.refresh(&*store);
        Ok(record)
    }

    /// Deletes the record being edited, then refreshes. Returns the deleted id.
    ///
    /// With no record being edited this only closes the form. As with `submit`, a failed
    /// refresh after the delete keeps the previous list and still reports the deletion.
    pub fn delete(&mut self, store: &mut dyn RecordStoreTrait) -> Result<Option<String>, AppError> {
        let Some(id) = self.form.delete_target() else {
            self.form.close();
            return Ok(None);
        };

        if let Err(e) = store.delete(&id) {
            warn!(%id, error = %e, "deleting web app failed");
            return Err(e.into());
        }
        info!(%id, "web app deleted");

        self.form.close();
        let _ = self.refresh(&*store);
        Ok(Some(id))
    }
}
