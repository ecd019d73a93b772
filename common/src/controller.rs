//! Form controller: owns the form, the in-memory catalog and the status
//! line, and runs the place-then-append sequence for `add_item`.
//!
//! Everything runs synchronously on the caller's thread.

use crate::catalog::{self, CatalogStore};
use crate::error::{Error, Result};
use crate::form::{check_date, MediaForm};
use crate::layout::ProjectLayout;
use crate::placer::{AssetPlacer, PlacedAsset};
use crate::types::CatalogRecord;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormPhase {
    #[default]
    Editing,
    Submitted,
}

/// Result of a successful `add_item`.
#[derive(Debug, Clone)]
pub struct AddOutcome {
    pub record: CatalogRecord,
    pub placed: PlacedAsset,
}

impl AddOutcome {
    pub fn message(&self) -> String {
        format!("Saved and copied to {}", self.placed.dest_path.display())
    }
}

pub struct FormController {
    layout: ProjectLayout,
    store: CatalogStore,
    form: MediaForm,
    records: Vec<CatalogRecord>,
    phase: FormPhase,
    status: String,
}

impl FormController {
    /// Create the directory layout and load the catalog.
    pub fn new(layout: ProjectLayout) -> Result<Self> {
        layout.ensure_dirs()?;
        let store = CatalogStore::new(&layout.data_path);
        let records = store.load();
        Ok(Self {
            layout,
            store,
            form: MediaForm::default(),
            records,
            phase: FormPhase::Editing,
            status: "Ready".to_string(),
        })
    }

    pub fn layout(&self) -> &ProjectLayout {
        &self.layout
    }

    pub fn form(&self) -> &MediaForm {
        &self.form
    }

    /// Mutable access for binding widgets. Call [`mark_edited`](Self::mark_edited)
    /// when a value actually changes.
    pub fn form_mut(&mut self) -> &mut MediaForm {
        &mut self.form
    }

    pub fn mark_edited(&mut self) {
        self.phase = FormPhase::Editing;
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn records(&self) -> &[CatalogRecord] {
        &self.records
    }

    /// Records for the list view, most recent first.
    pub fn listing(&self) -> Vec<&CatalogRecord> {
        catalog::listing(&self.records)
    }

    /// Re-read the catalog from disk.
    pub fn reload(&mut self) {
        self.records = self.store.load();
    }

    pub fn choose_file(&mut self, path: impl AsRef<Path>) {
        self.form.choose_file(path);
        self.phase = FormPhase::Editing;
        self.status = format!("Selected {}", self.form.file_label());
    }

    /// Copy the selected file into place and append its record.
    ///
    /// Without a selected, existing file nothing on disk changes. A copy
    /// failure aborts before the catalog is touched. Field values are kept
    /// after a successful add.
    pub fn add_item(&mut self) -> Result<AddOutcome> {
        match self.try_add_item() {
            Ok(outcome) => {
                self.status = format!("Added: {}", outcome.record.title);
                self.phase = FormPhase::Submitted;
                Ok(outcome)
            }
            Err(err) => {
                self.status = format!("Error: {err}");
                self.phase = FormPhase::Editing;
                Err(err)
            }
        }
    }

    fn try_add_item(&mut self) -> Result<AddOutcome> {
        let source = self
            .form
            .selected_file()
            .ok_or(Error::NoFileSelected)?
            .to_path_buf();
        if !source.is_file() {
            return Err(Error::SourceNotFound(source));
        }

        let mut record = self.form.build_record(&source);
        if let Err(err) = check_date(&record.date) {
            tracing::warn!(error = %err, "keeping date as entered");
        }

        let placed = AssetPlacer::new(&self.layout).place(&source, &record.title, &record.category)?;
        record.set_asset(placed.kind, placed.public_path.clone());

        let (record, records) = match self.store.append(record) {
            Ok(appended) => appended,
            Err(err) => {
                // the catalog never got a reference to this copy
                if let Err(remove_err) = std::fs::remove_file(&placed.dest_path) {
                    tracing::warn!(
                        file = %placed.dest_path.display(),
                        error = %remove_err,
                        "could not remove copied asset after catalog write failed"
                    );
                }
                return Err(err);
            }
        };
        self.records = records;

        Ok(AddOutcome { record, placed })
    }
}
