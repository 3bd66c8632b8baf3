//! Add/edit form for a web app.
//!
//! Two fields, name and URL. Opened empty for a new entry, or pre-filled from an existing
//! record with its URL normalized for editing.

use serde::Serialize;

use crate::services::url_normalizer::normalize_url;
use crate::types::bookmark::Bookmark;
use crate::types::errors::FormError;

/// What a successful submit hands to the home screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSubmission {
    /// `None` when creating a new entry.
    pub id: Option<String>,
    pub name: String,
    pub url: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct InputForm {
    visible: bool,
    id: Option<String>,
    name: String,
    url: String,
    show_error: bool,
}

fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

impl InputForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open_for_create(&mut self) {
        *self = Self {
            visible: true,
            ..Self::default()
        };
    }

    pub fn open_for_edit(&mut self, record: &Bookmark) {
        *self = Self {
            visible: true,
            id: Some(record.id.clone()),
            name: record.name.clone(),
            url: normalize_url(&record.url),
            show_error: false,
        };
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_url(&mut self, url: impl Into<String>) {
        self.url = url.into();
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn show_error(&self) -> bool {
        self.show_error
    }

    pub fn is_editing(&self) -> bool {
        self.id.is_some()
    }

    /// Validates both fields. On failure sets the error flag and keeps the form open.
    pub fn submit(&mut self) -> Result<FormSubmission, FormError> {
        if !self.visible {
            return Err(FormError::NotOpen);
        }
        if is_blank(&self.name) || is_blank(&self.url) {
            self.show_error = true;
            return Err(FormError::EmptyFields);
        }
        self.show_error = false;
        Ok(FormSubmission {
            id: self.id.clone(),
            name: self.name.clone(),
            url: self.url.clone(),
        })
    }

    /// The id to delete, if the form is editing an existing record.
    pub fn delete_target(&mut self) -> Option<String> {
        self.show_error = false;
        self.id.clone()
    }

    pub fn close(&mut self) {
        *self = Self::default();
    }
}
