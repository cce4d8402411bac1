use egui::Color32;
use serde::{Deserialize, Serialize};

use crate::canvas::BACKGROUND;

/// Tool settings applied to newly drawn segments.
///
/// Owned by the host and passed by reference into every drag event, so a
/// change made mid-stroke takes effect on the very next segment. The eraser
/// paints with the background color rather than removing pixel data, which
/// means erasing only works over the default white background.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BrushConfig {
    pub color: Color32,
    pub thickness: u32,
    pub eraser_active: bool,
}

impl BrushConfig {
    pub const MIN_THICKNESS: u32 = 1;
    pub const MAX_THICKNESS: u32 = crate::canvas::MAX_THICKNESS;

    /// The color a segment drawn right now would use.
    pub fn effective_color(&self) -> Color32 {
        if self.eraser_active {
            BACKGROUND
        } else {
            self.color
        }
    }
}

impl Default for BrushConfig {
    fn default() -> Self {
        Self {
            color: Color32::BLACK,
            thickness: 5,
            eraser_active: false,
        }
    }
}
