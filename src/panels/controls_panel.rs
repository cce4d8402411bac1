use egui::{Color32, Slider};

use crate::app::PaintApp;
use crate::brush::BrushConfig;

/// The strip of tool controls along the bottom edge of the window.
pub fn controls_panel(app: &mut PaintApp, ctx: &egui::Context) {
    egui::TopBottomPanel::bottom("controls_panel").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label("Color:");
            let picked = egui::color_picker::color_edit_button_srgba(
                ui,
                &mut app.brush.color,
                egui::color_picker::Alpha::Opaque,
            );
            // Picking a color switches back to painting.
            if picked.changed() {
                app.brush.eraser_active = false;
            }

            ui.separator();

            if ui
                .selectable_label(app.brush.eraser_active, "⌫ Eraser")
                .clicked()
            {
                app.brush.eraser_active = !app.brush.eraser_active;
            }

            ui.separator();

            ui.label("Thickness:");
            ui.add(Slider::new(
                &mut app.brush.thickness,
                BrushConfig::MIN_THICKNESS..=BrushConfig::MAX_THICKNESS,
            ));

            ui.separator();

            if ui.button("Save").clicked() {
                app.save_requested();
            }

            if let Some(status) = &app.status {
                let color = if status.is_error {
                    Color32::RED
                } else {
                    ui.visuals().text_color()
                };
                ui.colored_label(color, &status.text);
            }
        });
    });
}
