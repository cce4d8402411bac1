use egui::TextureHandle;

use crate::brush::BrushConfig;
use crate::canvas::CanvasBuffer;
use crate::export;
use crate::panels;
use crate::stroke::StrokeInterpreter;

/// Outcome of the most recent save, shown in the controls panel.
#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub is_error: bool,
}

/// We derive Deserialize/Serialize so we can persist the tool settings on
/// shutdown. The canvas itself is session-only and never persisted.
#[derive(serde::Deserialize, serde::Serialize)]
#[serde(default)] // if we add new fields, give them default values when deserializing old state
pub struct PaintApp {
    pub(crate) brush: BrushConfig,
    #[serde(skip)]
    pub(crate) canvas: CanvasBuffer,
    #[serde(skip)]
    pub(crate) interpreter: StrokeInterpreter,
    // GPU copy of the canvas; re-uploaded whenever canvas_dirty is set.
    #[serde(skip)]
    pub(crate) canvas_texture: Option<TextureHandle>,
    #[serde(skip)]
    pub(crate) canvas_dirty: bool,
    #[serde(skip)]
    pub(crate) status: Option<StatusMessage>,
}

impl Default for PaintApp {
    fn default() -> Self {
        Self {
            brush: BrushConfig::default(),
            canvas: CanvasBuffer::new(),
            interpreter: StrokeInterpreter::new(),
            canvas_texture: None,
            canvas_dirty: false,
            status: None,
        }
    }
}

impl PaintApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        // Restore previous tool settings (color, thickness, eraser flag).
        if let Some(storage) = cc.storage {
            return eframe::get_value(storage, eframe::APP_KEY).unwrap_or_default();
        }
        Default::default()
    }

    /// Ask the user for a destination and export the canvas as a PNG.
    pub(crate) fn save_requested(&mut self) {
        let Some(snapshot) = self.canvas.snapshot() else {
            self.status = Some(StatusMessage {
                text: "Nothing to save yet.".to_owned(),
                is_error: true,
            });
            return;
        };

        let Some(path) = rfd::FileDialog::new()
            .set_title("Save Image")
            .add_filter("PNG Images", &["png"])
            .save_file()
        else {
            return; // dialog cancelled
        };

        self.status = Some(match export::export_png(snapshot, &path) {
            Ok(written) => StatusMessage {
                text: format!("Saved {}", written.display()),
                is_error: false,
            },
            Err(err) => {
                log::error!("export to {} failed: {err}", path.display());
                StatusMessage {
                    text: format!("Error saving image: {err}"),
                    is_error: true,
                }
            }
        });
    }
}

impl eframe::App for PaintApp {
    /// Called by the framework to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, self);
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        panels::controls_panel(self, ctx);
        panels::canvas_panel(self, ctx);
    }
}
