use egui::{Color32, ColorImage, Pos2, pos2};

/// Fill color of a fresh canvas, and the color the eraser paints with.
pub const BACKGROUND: Color32 = Color32::WHITE;

/// Largest brush thickness the UI offers; `draw_segment` clamps to this.
pub const MAX_THICKNESS: u32 = 20;

/// The off-screen pixel grid that strokes accumulate into.
///
/// The grid is allocated lazily on the first `ensure_initialized` call with a
/// usable size and keeps those dimensions for the rest of the session; the
/// window resizing later does not reallocate or rescale it.
#[derive(Default)]
pub struct CanvasBuffer {
    image: Option<ColorImage>,
}

impl CanvasBuffer {
    pub fn new() -> Self {
        Self { image: None }
    }

    /// Backs the canvas with a `width` x `height` grid filled with
    /// [`BACKGROUND`], if it is not backed already.
    ///
    /// Returns true when this call performed the allocation, so the caller
    /// can trigger the initial blit. Calls after the first are ignored, even
    /// with different dimensions. A zero-sized region leaves the buffer
    /// unbacked so that the first real layout pass wins.
    pub fn ensure_initialized(&mut self, width: usize, height: usize) -> bool {
        if self.image.is_some() {
            return false;
        }
        if width == 0 || height == 0 {
            log::debug!("ignoring degenerate canvas size {width}x{height}");
            return false;
        }
        log::info!("allocating {width}x{height} canvas");
        self.image = Some(ColorImage::new([width, height], BACKGROUND));
        true
    }

    pub fn is_initialized(&self) -> bool {
        self.image.is_some()
    }

    /// `[width, height]` of the backing grid, if allocated.
    pub fn size(&self) -> Option<[usize; 2]> {
        self.image.as_ref().map(|image| image.size)
    }

    /// Rasterizes a straight line segment from `(x0, y0)` to `(x1, y1)`.
    ///
    /// Round caps and joins: a pixel is painted when its center lies within
    /// `thickness / 2` of the segment. The write is permanent, there is no
    /// staging layer. Before initialization this is a no-op.
    pub fn draw_segment(
        &mut self,
        x0: i32,
        y0: i32,
        x1: i32,
        y1: i32,
        color: Color32,
        thickness: u32,
    ) {
        let Some(image) = self.image.as_mut() else {
            return;
        };
        let [width, height] = image.size;
        let radius = thickness.clamp(1, MAX_THICKNESS) as f32 / 2.0;

        let a = pos2(x0 as f32, y0 as f32);
        let b = pos2(x1 as f32, y1 as f32);

        // Scan only the segment's bounding box, grown by the brush radius.
        let lo_x = ((x0.min(x1) as f32 - radius).floor() as i32).max(0);
        let hi_x = ((x0.max(x1) as f32 + radius).ceil() as i32).min(width as i32 - 1);
        let lo_y = ((y0.min(y1) as f32 - radius).floor() as i32).max(0);
        let hi_y = ((y0.max(y1) as f32 + radius).ceil() as i32).min(height as i32 - 1);
        if hi_x < lo_x || hi_y < lo_y {
            return;
        }

        for py in lo_y..=hi_y {
            for px in lo_x..=hi_x {
                let center = pos2(px as f32 + 0.5, py as f32 + 0.5);
                if distance_sq_to_segment(center, a, b) <= radius * radius {
                    image.pixels[py as usize * width + px as usize] = color;
                }
            }
        }
    }

    /// Read-only view of the pixel grid, reflecting every segment drawn so
    /// far. `None` until the buffer has been initialized.
    pub fn snapshot(&self) -> Option<&ColorImage> {
        self.image.as_ref()
    }

    /// Single-pixel lookup, mainly for assertions in tests.
    pub fn pixel(&self, x: usize, y: usize) -> Option<Color32> {
        let image = self.image.as_ref()?;
        let [width, height] = image.size;
        if x < width && y < height {
            Some(image.pixels[y * width + x])
        } else {
            None
        }
    }
}

/// Squared distance from `p` to the closest point on segment `ab`.
fn distance_sq_to_segment(p: Pos2, a: Pos2, b: Pos2) -> f32 {
    let ab = b - a;
    let len_sq = ab.length_sq();
    let t = if len_sq == 0.0 {
        0.0
    } else {
        ((p - a).dot(ab) / len_sq).clamp(0.0, 1.0)
    };
    let closest = a + ab * t;
    (p - closest).length_sq()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_unbacked() {
        let canvas = CanvasBuffer::new();
        assert!(!canvas.is_initialized());
        assert!(canvas.snapshot().is_none());
    }

    #[test]
    fn initializes_to_background() {
        let mut canvas = CanvasBuffer::new();
        assert!(canvas.ensure_initialized(8, 6));
        assert_eq!(canvas.size(), Some([8, 6]));
        for y in 0..6 {
            for x in 0..8 {
                assert_eq!(canvas.pixel(x, y), Some(BACKGROUND));
            }
        }
    }

    #[test]
    fn reinitialization_is_ignored() {
        let mut canvas = CanvasBuffer::new();
        assert!(canvas.ensure_initialized(10, 10));
        canvas.draw_segment(2, 2, 7, 2, Color32::RED, 1);

        assert!(!canvas.ensure_initialized(10, 10));
        assert!(!canvas.ensure_initialized(300, 200));
        assert_eq!(canvas.size(), Some([10, 10]));
        assert_eq!(canvas.pixel(4, 2), Some(Color32::RED));
    }

    #[test]
    fn degenerate_size_stays_unbacked() {
        let mut canvas = CanvasBuffer::new();
        assert!(!canvas.ensure_initialized(0, 100));
        assert!(!canvas.ensure_initialized(100, 0));
        assert!(!canvas.is_initialized());

        // The first usable size still wins afterwards.
        assert!(canvas.ensure_initialized(4, 4));
        assert_eq!(canvas.size(), Some([4, 4]));
    }

    #[test]
    fn draw_before_init_is_noop() {
        let mut canvas = CanvasBuffer::new();
        canvas.draw_segment(0, 0, 50, 50, Color32::BLACK, 5);
        assert!(canvas.snapshot().is_none());
    }

    #[test]
    fn vertical_segment_paints_expected_band() {
        let mut canvas = CanvasBuffer::new();
        canvas.ensure_initialized(100, 100);
        canvas.draw_segment(10, 10, 10, 50, Color32::BLACK, 5);

        // Pixels on the spine are painted along the whole segment.
        for y in 10..=50 {
            assert_eq!(canvas.pixel(10, y), Some(Color32::BLACK), "y={y}");
        }
        // Width is about the thickness: 2px to either side is covered.
        assert_eq!(canvas.pixel(8, 30), Some(Color32::BLACK));
        assert_eq!(canvas.pixel(12, 30), Some(Color32::BLACK));
        // Pixels clearly outside the band remain background.
        assert_eq!(canvas.pixel(30, 30), Some(BACKGROUND));
        assert_eq!(canvas.pixel(10, 70), Some(BACKGROUND));
        assert_eq!(canvas.pixel(10, 4), Some(BACKGROUND));
    }

    #[test]
    fn zero_length_segment_paints_round_dot() {
        let mut canvas = CanvasBuffer::new();
        canvas.ensure_initialized(40, 40);
        canvas.draw_segment(20, 20, 20, 20, Color32::BLUE, 8);

        assert_eq!(canvas.pixel(20, 20), Some(Color32::BLUE));
        assert_eq!(canvas.pixel(23, 20), Some(Color32::BLUE));
        assert_eq!(canvas.pixel(20, 23), Some(Color32::BLUE));
        // Corner of the bounding box lies outside the round cap.
        assert_eq!(canvas.pixel(24, 24), Some(BACKGROUND));
    }

    #[test]
    fn segment_is_clipped_to_canvas() {
        let mut canvas = CanvasBuffer::new();
        canvas.ensure_initialized(20, 20);
        canvas.draw_segment(-30, 5, 50, 5, Color32::BLACK, 3);
        assert_eq!(canvas.pixel(0, 5), Some(Color32::BLACK));
        assert_eq!(canvas.pixel(19, 5), Some(Color32::BLACK));

        // Entirely off-canvas segment changes nothing.
        canvas.draw_segment(-50, -50, -10, -10, Color32::BLACK, 20);
        assert_eq!(canvas.pixel(0, 0), Some(BACKGROUND));
    }

    #[test]
    fn out_of_range_thickness_is_clamped() {
        let mut canvas = CanvasBuffer::new();
        canvas.ensure_initialized(100, 100);
        canvas.draw_segment(50, 50, 50, 50, Color32::BLACK, 1000);

        // Clamped to MAX_THICKNESS: radius 10, not 500.
        assert_eq!(canvas.pixel(42, 50), Some(Color32::BLACK));
        assert_eq!(canvas.pixel(30, 50), Some(BACKGROUND));
    }
}
