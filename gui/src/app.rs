use crate::form::{Form, Request};
use eframe::egui;
use rfd::{FileDialog, MessageButtons, MessageDialog, MessageLevel};
use std::path::PathBuf;

const HELP: &str = "How to use:

1) Pick an image. Transparent pixels become air/holes in-game.
2) If the app finds your W:A SavedLevels folder, it will suggest an output there.
3) Only choose an output manually if detection failed or you want a different location.
4) Optional: pick a template map to copy settings, adjust max colours, toggle dithering/transparency.
5) Click Convert. The PNG goes into SavedLevels and will appear in the W:A map list.";

const IMAGE_EXTENSIONS: [&str; 6] = ["png", "webp", "jpg", "jpeg", "bmp", "gif"];

pub(crate) struct MapMakerApp {
    form: Form,
    saved_levels: Option<PathBuf>,
}

impl MapMakerApp {
    pub(crate) fn new(saved_levels: Option<PathBuf>) -> Self {
        Self {
            form: Form::default(),
            saved_levels,
        }
    }

    fn browse_input(&mut self) {
        let picked = FileDialog::new()
            .set_title("Select input image")
            .add_filter("Images", &IMAGE_EXTENSIONS)
            .add_filter("All files", &["*"])
            .pick_file();
        if let Some(path) = picked {
            self.form.pick_input(&path, self.saved_levels.as_deref());
        }
    }

    fn browse_template(&mut self) {
        let picked = FileDialog::new()
            .set_title("Select template map (optional)")
            .add_filter("PNG files", &["png"])
            .add_filter("All files", &["*"])
            .pick_file();
        if let Some(path) = picked {
            self.form.template = path.display().to_string();
        }
    }

    fn choose_output(&mut self) {
        let picked = FileDialog::new()
            .set_title("Save output PNG")
            .add_filter("PNG files", &["png"])
            .set_directory(self.form.output_dir(self.saved_levels.as_deref()))
            .set_file_name(self.form.output_file_name())
            .save_file();
        if let Some(mut path) = picked {
            if path.extension().is_none() {
                path.set_extension("png");
            }
            self.form.output = path.display().to_string();
        }
    }

    fn run_conversion(&mut self) {
        let request = match self.form.validate(self.saved_levels.as_deref()) {
            Ok(request) => request,
            Err(e) => {
                show(MessageLevel::Error, e.title(), &e.to_string());
                return;
            }
        };
        let Request {
            input,
            output,
            template,
            options,
        } = request;
        log::debug!("Converting {} with {options:?}", input.display());
        match libwamap::convert(&input, &output, template.as_deref(), &options) {
            Ok(()) => {
                log::info!("Created W:A map: {}", output.display());
                show(
                    MessageLevel::Info,
                    "Success",
                    &format!("Created map:\n{}", output.display()),
                );
            }
            Err(e) => {
                log::error!("{e}");
                show(
                    MessageLevel::Error,
                    "Conversion failed",
                    &format!("Could not create map:\n{e}"),
                );
            }
        }
    }

    fn path_row(ui: &mut egui::Ui, label: &str, value: &mut String, button: &str) -> bool {
        ui.label(label);
        ui.add(egui::TextEdit::singleline(value).desired_width(360.0));
        let clicked = ui.button(button).clicked();
        ui.end_row();
        clicked
    }
}

impl eframe::App for MapMakerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::Grid::new("form")
                .num_columns(4)
                .spacing([8.0, 4.0])
                .show(ui, |ui| {
                    if Self::path_row(ui, "Input image", &mut self.form.input, "Browse") {
                        self.browse_input();
                    }
                    if Self::path_row(
                        ui,
                        "Template map (optional)",
                        &mut self.form.template,
                        "Browse",
                    ) {
                        self.browse_template();
                    }
                    if Self::path_row(ui, "Output PNG", &mut self.form.output, "Save as") {
                        self.choose_output();
                    }

                    ui.label(format!("Max colours (1-{})", libwamap::MaxColours::MAX));
                    ui.add(egui::TextEdit::singleline(&mut self.form.max_colours).desired_width(48.0));
                    ui.end_row();

                    ui.checkbox(&mut self.form.no_transparency, "Disable transparency");
                    ui.end_row();

                    ui.label("Transparent colour (R G B)");
                    ui.add_enabled_ui(!self.form.no_transparency, |ui| {
                        ui.horizontal(|ui| {
                            for channel in &mut self.form.colour {
                                ui.add(egui::TextEdit::singleline(channel).desired_width(32.0));
                            }
                        });
                    });
                    ui.end_row();

                    ui.checkbox(&mut self.form.dither, "Enable dithering");
                    ui.end_row();
                });

            ui.add_space(12.0);
            ui.horizontal(|ui| {
                if ui.add_sized([160.0, 24.0], egui::Button::new("Convert")).clicked() {
                    self.run_conversion();
                }
                if ui.add_sized([80.0, 24.0], egui::Button::new("Help")).clicked() {
                    show(MessageLevel::Info, "Help", HELP);
                }
            });

            ui.add_space(8.0);
            let hint = match &self.saved_levels {
                Some(dir) => format!("Detected SavedLevels: {}", dir.display()),
                None => "SavedLevels folder not detected (you can still choose any output).".into(),
            };
            ui.label(egui::RichText::new(hint).color(egui::Color32::GRAY));
        });
    }
}

/// Shows a modal message box and blocks until it is dismissed.
fn show(level: MessageLevel, title: &str, description: &str) {
    MessageDialog::new()
        .set_level(level)
        .set_title(title)
        .set_description(description)
        .set_buttons(MessageButtons::Ok)
        .show();
}
