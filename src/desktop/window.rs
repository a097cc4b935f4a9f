use crate::herbal_guide::context::HerbalContext;
use crate::herbal_guide::prediction_result::PredictionResult;
use crate::library::error::{HerbalError, HerbalResult};
use eframe::egui;
use std::path::Path;

/// The four read-only outputs of the form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OutputFields {
    pub plant: String,
    pub confidence: String,
    pub benefit: String,
    pub recommended: String,
}

impl From<&PredictionResult> for OutputFields {
    fn from(result: &PredictionResult) -> Self {
        Self {
            plant: result.plant.clone(),
            confidence: result.confidence_display(),
            benefit: result.benefit.clone(),
            recommended: result.recommended_display(),
        }
    }
}

pub struct HerbalWindow {
    context: HerbalContext,
    image_path: String,
    symptoms: String,
    outputs: OutputFields,
    error: Option<String>,
}

impl HerbalWindow {
    pub fn new(context: HerbalContext) -> Self {
        Self {
            context,
            image_path: String::new(),
            symptoms: String::new(),
            outputs: OutputFields::default(),
            error: None,
        }
    }

    /// Runs on the UI thread; the window blocks until inference returns.
    fn analyze(&mut self) {
        match self.predict() {
            Ok(result) => {
                self.outputs = OutputFields::from(&result);
                self.error = None;
            }
            Err(e) => {
                let _ = self.context.logger.warn(&format!("Analysis failed: {}", e));
                self.outputs = OutputFields::default();
                self.error = Some(e.to_string());
            }
        }
    }

    fn predict(&self) -> HerbalResult<PredictionResult> {
        let path = self.image_path.trim();
        if path.is_empty() {
            return Err(HerbalError::InvalidRequest("choose a leaf image first".to_string()));
        }
        let image = image::open(Path::new(path))
            .map_err(|e| HerbalError::InvalidImage(format!("{}: {}", path, e)))?;
        self.context.handle(&image, &self.symptoms)
    }

    fn output_field(ui: &mut egui::Ui, label: &str, value: &str, multiline: bool) {
        ui.label(label);
        let mut value = value;
        if multiline {
            ui.add(egui::TextEdit::multiline(&mut value).desired_width(f32::INFINITY));
        } else {
            ui.add(egui::TextEdit::singleline(&mut value).desired_width(f32::INFINITY));
        }
    }
}

impl eframe::App for HerbalWindow {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let dropped = ctx.input(|i| i.raw.dropped_files.first().and_then(|f| f.path.clone()));
        if let Some(path) = dropped {
            self.image_path = path.display().to_string();
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading(
                    egui::RichText::new("AI Herbal Plant Identification & Recommendation System")
                        .color(egui::Color32::from_rgb(27, 94, 32)),
                );
                ui.label("Upload a leaf image and enter symptoms to get AI-based herbal guidance.");
            });
            ui.add_space(12.0);

            ui.label("Leaf Image (path, or drop a file on the window)");
            ui.add(egui::TextEdit::singleline(&mut self.image_path).desired_width(f32::INFINITY));

            ui.label("Enter Symptoms (e.g. cough, fever)");
            ui.add(egui::TextEdit::singleline(&mut self.symptoms).desired_width(f32::INFINITY));

            ui.add_space(8.0);
            if ui.button("Analyze with AI").clicked() {
                self.analyze();
            }

            if let Some(error) = &self.error {
                ui.colored_label(egui::Color32::from_rgb(183, 28, 28), error);
            }
            ui.add_space(8.0);

            Self::output_field(ui, "Predicted Plant", &self.outputs.plant, false);
            Self::output_field(ui, "Confidence", &self.outputs.confidence, false);
            Self::output_field(ui, "Herbal Benefits", &self.outputs.benefit, true);
            Self::output_field(ui, "Recommended Herbs", &self.outputs.recommended, false);
        });
    }
}

pub fn run(context: HerbalContext) -> HerbalResult<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([640.0, 560.0])
            .with_drag_and_drop(true),
        ..Default::default()
    };

    let window = HerbalWindow::new(context);

    eframe::run_native("Herbal Guide", options, Box::new(|_cc| Box::new(window)))
        .map_err(|e| HerbalError::Io(std::io::Error::other(e.to_string())))
}
