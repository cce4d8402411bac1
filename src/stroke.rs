use crate::brush::BrushConfig;
use crate::canvas::CanvasBuffer;

/// Turns discrete pointer samples into committed segments on the canvas.
///
/// Press establishes the anchor; every drag sample draws one segment from the
/// anchor to itself and becomes the new anchor. Release deliberately leaves
/// the anchor in place: a drag event arriving without a fresh press continues
/// from wherever the previous gesture ended.
#[derive(Debug, Default)]
pub struct StrokeInterpreter {
    anchor: Option<(i32, i32)>,
}

impl StrokeInterpreter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pointer went down: record the anchor. No pixel is drawn yet.
    pub fn on_pointer_press(&mut self, x: i32, y: i32) {
        self.anchor = Some((x, y));
    }

    /// Pointer moved while down: commit one segment from the anchor to the
    /// new sample, reading the brush settings live at draw time.
    ///
    /// Returns true when a segment was committed, which is the host's cue to
    /// re-blit the canvas. Before the canvas is initialized nothing is drawn
    /// and the anchor does not advance. A drag with no anchor at all (no
    /// press has ever happened) adopts the sample as the anchor instead of
    /// drawing from an arbitrary origin.
    pub fn on_pointer_drag(
        &mut self,
        canvas: &mut CanvasBuffer,
        brush: &BrushConfig,
        x: i32,
        y: i32,
    ) -> bool {
        let Some((ax, ay)) = self.anchor else {
            self.anchor = Some((x, y));
            return false;
        };
        if !canvas.is_initialized() {
            return false;
        }
        canvas.draw_segment(ax, ay, x, y, brush.effective_color(), brush.thickness);
        self.anchor = Some((x, y));
        true
    }

    /// Pointer went up. The anchor is intentionally not cleared.
    pub fn on_pointer_release(&mut self) {}

    pub fn anchor(&self) -> Option<(i32, i32)> {
        self.anchor
    }
}
