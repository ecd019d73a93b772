use crate::error::{MediaError, Result};
use crate::integrity::{self, IntegrityReport};
use portfolio_media_common::{
    listing, AddOutcome, CatalogRecord, CatalogStore, Category, Config, FormController,
    ProjectLayout,
};
use std::fmt::Write as _;
use std::path::{Path, PathBuf};

/// Field values for a one-shot `add`. Empty strings mean "use the default".
#[derive(Debug, Clone, Default)]
pub struct AddArgs {
    pub category: Option<Category>,
    pub title: String,
    pub description: String,
    pub client: String,
    pub results: String,
    pub date: String,
    pub tags: String,
}

/// Settings for commands that only read them: an unreadable config file or a
/// missing home directory falls back to defaults.
pub fn config_or_default(loaded: portfolio_media_common::Result<Config>) -> Config {
    loaded.unwrap_or_else(|err| {
        tracing::warn!(error = %err, "config unreadable, using defaults");
        Config::default()
    })
}

/// Controller for `layout` with the configured default category preselected.
pub fn open_controller(layout: ProjectLayout, config: &Config) -> Result<FormController> {
    let mut controller = FormController::new(layout)?;
    if let Some(category) = config.default_category() {
        controller.form_mut().category = category;
    }
    Ok(controller)
}

pub fn init(layout: &ProjectLayout) -> Result<usize> {
    layout.ensure_dirs()?;
    Ok(CatalogStore::new(&layout.data_path).load().len())
}

pub fn add(controller: &mut FormController, file: &Path, args: AddArgs) -> Result<AddOutcome> {
    controller.choose_file(file);
    {
        let form = controller.form_mut();
        if let Some(category) = args.category {
            form.category = category;
        }
        form.title = args.title;
        form.description = args.description;
        form.client = args.client;
        form.results = args.results;
        if !args.date.trim().is_empty() {
            form.date = args.date;
        }
        form.tags = args.tags;
    }
    controller.mark_edited();
    Ok(controller.add_item()?)
}

/// Records most recent first, optionally filtered by category.
pub fn list(layout: &ProjectLayout, category: Option<Category>) -> Vec<CatalogRecord> {
    let records = CatalogStore::new(&layout.data_path).load();
    listing(&records)
        .into_iter()
        .filter(|r| category.map_or(true, |c| r.category == c.key()))
        .cloned()
        .collect()
}

pub fn render_list(records: &[CatalogRecord]) -> String {
    let mut out = String::new();
    for record in records {
        let _ = write!(out, "{}", record.list_line());
        if let Some(path) = record.asset_path() {
            let _ = write!(out, "  {}", path);
        }
        out.push('\n');
    }
    out
}

pub fn check(layout: &ProjectLayout) -> Result<IntegrityReport> {
    let records = CatalogStore::new(&layout.data_path).try_load()?;
    Ok(integrity::check_catalog(layout, &records))
}

pub fn render_report(report: &IntegrityReport) -> String {
    if report.is_clean() {
        return "✔ catalog and media directories agree\n".to_string();
    }

    let mut out = String::new();
    if !report.missing_files.is_empty() {
        let _ = writeln!(out, "Records with missing files: {}", report.missing_files.len());
        for missing in &report.missing_files {
            let _ = writeln!(out, "  #{} {}  {}", missing.id, missing.title, missing.public_path);
        }
    }
    if !report.orphan_files.is_empty() {
        let _ = writeln!(out, "Files not in the catalog: {}", report.orphan_files.len());
        for path in &report.orphan_files {
            let _ = writeln!(out, "  {}", path.display());
        }
    }
    out
}

/// Fail when records point at files that aren't there. Orphans only warn.
pub fn ensure_no_broken_references(report: &IntegrityReport) -> Result<()> {
    if report.missing_files.is_empty() {
        Ok(())
    } else {
        Err(MediaError::BrokenReferences(report.missing_files.len()))
    }
}

/// Apply `config` edits and persist them to `path`.
pub fn update_config(
    config: &mut Config,
    path: &Path,
    set_root: Option<PathBuf>,
    set_default_category: Option<Category>,
) -> Result<bool> {
    let mut changed = false;
    if let Some(root) = set_root {
        let root = std::path::absolute(&root)?;
        config.project_root = Some(root);
        changed = true;
    }
    if let Some(category) = set_default_category {
        config.default_category = Some(category.key().to_string());
        changed = true;
    }
    if changed {
        config.save_to(path)?;
    }
    Ok(changed)
}

pub fn render_config(config: &Config, resolved_root: &Path) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Settings:");
    let _ = writeln!(
        out,
        "  project root: {}",
        config
            .project_root
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(not set)".to_string())
    );
    let _ = writeln!(
        out,
        "  default category: {}",
        config.default_category.as_deref().unwrap_or("(not set)")
    );
    let _ = writeln!(out, "  in effect: {}", resolved_root.display());
    out
}
