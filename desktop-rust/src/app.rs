use eframe::egui::{self, Color32, RichText};
use portfolio_media_common::{
    Category, FormController, FormPhase, MediaKind, MEDIA_FILTER_EXTENSIONS,
};

use crate::preview::load_preview;

pub struct DesktopApp {
    controller: FormController,
    preview: Option<egui::TextureHandle>,
}

impl DesktopApp {
    pub fn new(controller: FormController) -> Self {
        Self {
            controller,
            preview: None,
        }
    }

    fn choose_file(&mut self, ctx: &egui::Context) {
        let Some(path) = rfd::FileDialog::new()
            .set_title("Choose image or video")
            .add_filter("Media", MEDIA_FILTER_EXTENSIONS)
            .add_filter("All files", &["*"])
            .pick_file()
        else {
            return;
        };

        self.controller.choose_file(&path);
        self.preview = match load_preview(&path) {
            Ok(Some(data)) => {
                let color_image = egui::ColorImage::from_rgba_unmultiplied(data.size, &data.pixels);
                Some(ctx.load_texture("selected_preview", color_image, egui::TextureOptions::default()))
            }
            Ok(None) => None,
            Err(err) => {
                tracing::debug!(error = %err, "no preview");
                None
            }
        };
    }

    fn add_item(&mut self) {
        match self.controller.add_item() {
            Ok(outcome) => notify_info("Saved", &outcome.message()),
            Err(err) if err.is_selection_error() => notify_error("Missing file", &err.to_string()),
            Err(err) => notify_error("Could not add", &err.to_string()),
        }
    }

    /// Returns true when any field changed this frame.
    fn render_fields(&mut self, ui: &mut egui::Ui) -> bool {
        let mut changed = false;
        let form = self.controller.form_mut();

        egui::Grid::new("form_grid")
            .num_columns(2)
            .spacing([12.0, 6.0])
            .min_col_width(160.0)
            .show(ui, |ui| {
                ui.label("Category");
                egui::ComboBox::from_id_source("category")
                    .selected_text(form.category.label())
                    .width(280.0)
                    .show_ui(ui, |ui| {
                        for category in Category::ALL {
                            changed |= ui
                                .selectable_value(&mut form.category, category, category.label())
                                .changed();
                        }
                    });
                ui.end_row();

                let text_fields: [(&str, &mut String); 6] = [
                    ("Title", &mut form.title),
                    ("Description", &mut form.description),
                    ("Client", &mut form.client),
                    ("Results", &mut form.results),
                    ("Date (YYYY-MM-DD)", &mut form.date),
                    ("Tags (comma-separated)", &mut form.tags),
                ];
                for (label, value) in text_fields {
                    ui.label(label);
                    changed |= ui
                        .add(egui::TextEdit::singleline(value).desired_width(280.0))
                        .changed();
                    ui.end_row();
                }
            });

        changed
    }

    fn render_records(&self, ui: &mut egui::Ui) {
        let listing = self.controller.listing();
        ui.label(format!("{} records", listing.len()));
        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .max_height((ui.available_height() - 28.0).max(80.0))
            .show(ui, |ui| {
                for record in listing {
                    let kind = match record.kind() {
                        MediaKind::Image => "img",
                        MediaKind::Video => "vid",
                    };
                    ui.horizontal(|ui| {
                        ui.label(RichText::new(kind).monospace().color(Color32::from_gray(140)));
                        ui.label(record.list_line());
                    });
                }
            });
    }
}

impl eframe::App for DesktopApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            let color = match self.controller.phase() {
                FormPhase::Submitted => Color32::from_rgb(120, 200, 120),
                FormPhase::Editing if self.controller.status().starts_with("Error") => {
                    Color32::from_rgb(230, 110, 100)
                }
                FormPhase::Editing => Color32::from_gray(170),
            };
            ui.label(RichText::new(self.controller.status()).color(color));
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Add to portfolio");
            ui.separator();

            if self.render_fields(ui) {
                self.controller.mark_edited();
            }

            ui.add_space(6.0);
            let mut choose_clicked = false;
            ui.horizontal(|ui| {
                choose_clicked = ui.button("Choose file").clicked();
                ui.label(self.controller.form().file_label());
            });
            if choose_clicked {
                self.choose_file(ctx);
            }

            if let Some(texture) = &self.preview {
                ui.add(egui::Image::new(texture).max_size(egui::vec2(240.0, 180.0)));
            }

            ui.add_space(6.0);
            let width = ui.available_width();
            let add_clicked = ui
                .add_sized([width, 32.0], egui::Button::new("Add to portfolio"))
                .clicked();
            if add_clicked {
                self.add_item();
            }

            ui.separator();
            if ui.small_button("Reload list").clicked() {
                self.controller.reload();
            }
            self.render_records(ui);
        });
    }
}

pub fn notify_error(title: &str, message: &str) {
    rfd::MessageDialog::new()
        .set_level(rfd::MessageLevel::Error)
        .set_title(title)
        .set_description(message)
        .set_buttons(rfd::MessageButtons::Ok)
        .show();
}

pub fn notify_info(title: &str, message: &str) {
    rfd::MessageDialog::new()
        .set_level(rfd::MessageLevel::Info)
        .set_title(title)
        .set_description(message)
        .set_buttons(rfd::MessageButtons::Ok)
        .show();
}
