use egui::{Color32, Pos2, Rect, Sense, TextureOptions, pos2, vec2};

use crate::app::PaintApp;

/// The drawing surface: initializes the canvas to the first layout size,
/// feeds pointer samples to the stroke interpreter, and blits the buffer.
pub fn canvas_panel(app: &mut PaintApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let available = ui.available_size();
        let (response, painter) = ui.allocate_painter(available, Sense::drag());
        let rect = response.rect;

        // Allocate the buffer deterministically, before any input handling.
        // Later size changes are ignored; the canvas keeps its first size.
        if app
            .canvas
            .ensure_initialized(rect.width() as usize, rect.height() as usize)
        {
            app.canvas_dirty = true;
        }

        if response.drag_started() {
            if let Some((x, y)) = sample(&response, rect) {
                app.interpreter.on_pointer_press(x, y);
            }
        } else if response.dragged() {
            if let Some((x, y)) = sample(&response, rect) {
                if app
                    .interpreter
                    .on_pointer_drag(&mut app.canvas, &app.brush, x, y)
                {
                    app.canvas_dirty = true;
                    ctx.request_repaint();
                }
            }
        }
        if response.drag_stopped() {
            app.interpreter.on_pointer_release();
        }

        // Blit the buffer, unscaled, anchored at the panel origin.
        if let Some(snapshot) = app.canvas.snapshot() {
            let texture = match app.canvas_texture.as_mut() {
                Some(texture) => {
                    if app.canvas_dirty {
                        texture.set(snapshot.clone(), TextureOptions::NEAREST);
                    }
                    texture
                }
                None => app.canvas_texture.insert(ctx.load_texture(
                    "canvas",
                    snapshot.clone(),
                    TextureOptions::NEAREST,
                )),
            };
            app.canvas_dirty = false;

            let [width, height] = snapshot.size;
            painter.image(
                texture.id(),
                Rect::from_min_size(rect.min, vec2(width as f32, height as f32)),
                Rect::from_min_max(pos2(0.0, 0.0), pos2(1.0, 1.0)),
                Color32::WHITE,
            );
        }
    });
}

/// Pointer position translated into canvas pixel coordinates.
fn sample(response: &egui::Response, rect: Rect) -> Option<(i32, i32)> {
    let pos: Pos2 = response.interact_pointer_pos()?;
    let x = (pos.x - rect.min.x).floor() as i32;
    let y = (pos.y - rect.min.y).floor() as i32;
    Some((x, y))
}
