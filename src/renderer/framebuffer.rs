//! In-memory 1-bit framebuffer
//!
//! Shapes are rasterized into pixels. Text is kept as positioned labels so a
//! backend can set it with its own glyphs.

use glam::IVec2;

use super::canvas::{Align, Canvas, Color, Font};

/// A piece of text placed on the canvas
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextLabel {
    /// Top-left of the text box
    pub origin: IVec2,
    /// Text box size from the font metrics
    pub size: IVec2,
    pub font: Font,
    pub color: Color,
    pub text: String,
}

/// Monochrome pixel buffer implementing [`Canvas`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: i32,
    height: i32,
    pixels: Vec<bool>,
    labels: Vec<TextLabel>,
    color: Color,
    font: Font,
}

impl FrameBuffer {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            pixels: vec![false; (width * height).max(0) as usize],
            labels: Vec::new(),
            color: Color::default(),
            font: Font::default(),
        }
    }

    /// True if the pixel is lit; out-of-bounds pixels are never lit
    pub fn pixel(&self, x: i32, y: i32) -> bool {
        self.index(x, y).map(|i| self.pixels[i]).unwrap_or(false)
    }

    /// Text placed since the last clear, in draw order
    pub fn labels(&self) -> &[TextLabel] {
        &self.labels
    }

    /// Number of lit pixels
    pub fn lit_count(&self) -> usize {
        self.pixels.iter().filter(|&&p| p).count()
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            return None;
        }
        Some((y * self.width + x) as usize)
    }

    fn plot(&mut self, x: i32, y: i32) {
        if let Some(i) = self.index(x, y) {
            self.pixels[i] = self.color == Color::Black;
        }
    }

    fn place_text(&mut self, origin: IVec2, text: &str) {
        let size = self.font.text_size(text);
        self.labels.push(TextLabel {
            origin,
            size,
            font: self.font,
            color: self.color,
            text: text.to_string(),
        });
    }
}

impl Canvas for FrameBuffer {
    fn size(&self) -> IVec2 {
        IVec2::new(self.width, self.height)
    }

    fn clear(&mut self) {
        self.pixels.fill(false);
        self.labels.clear();
        self.color = Color::default();
        self.font = Font::default();
    }

    fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    fn set_font(&mut self, font: Font) {
        self.font = font;
    }

    fn draw_frame(&mut self, origin: IVec2, size: IVec2) {
        if size.x <= 0 || size.y <= 0 {
            return;
        }
        let far = origin + size - IVec2::ONE;
        for x in origin.x..=far.x {
            self.plot(x, origin.y);
            self.plot(x, far.y);
        }
        for y in origin.y..=far.y {
            self.plot(origin.x, y);
            self.plot(far.x, y);
        }
    }

    fn draw_box(&mut self, origin: IVec2, size: IVec2) {
        let x0 = origin.x.max(0);
        let y0 = origin.y.max(0);
        let x1 = (origin.x + size.x).min(self.width);
        let y1 = (origin.y + size.y).min(self.height);
        for y in y0..y1 {
            for x in x0..x1 {
                self.plot(x, y);
            }
        }
    }

    fn draw_line(&mut self, from: IVec2, to: IVec2) {
        // Bresenham, all octants
        let dx = (to.x - from.x).abs();
        let dy = -(to.y - from.y).abs();
        let sx = if from.x < to.x { 1 } else { -1 };
        let sy = if from.y < to.y { 1 } else { -1 };
        let mut err = dx + dy;
        let mut p = from;

        loop {
            self.plot(p.x, p.y);
            if p == to {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                p.x += sx;
            }
            if e2 <= dx {
                err += dx;
                p.y += sy;
            }
        }
    }

    fn draw_str(&mut self, pos: IVec2, text: &str) {
        let origin = IVec2::new(pos.x, pos.y - self.font.ascent());
        self.place_text(origin, text);
    }

    fn draw_str_aligned(&mut self, pos: IVec2, horizontal: Align, vertical: Align, text: &str) {
        let size = self.font.text_size(text);
        let x = match horizontal {
            Align::Right => pos.x - size.x,
            Align::Center => pos.x - size.x / 2,
            _ => pos.x,
        };
        let y = match vertical {
            Align::Bottom => pos.y - size.y,
            Align::Center => pos.y - size.y / 2,
            _ => pos.y,
        };
        self.place_text(IVec2::new(x, y), text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_box_is_clipped() {
        let mut fb = FrameBuffer::new(128, 64);
        fb.draw_box(IVec2::new(40, -10), IVec2::new(16, 10));
        assert_eq!(fb.lit_count(), 0);

        fb.draw_box(IVec2::new(120, 60), IVec2::new(16, 10));
        assert_eq!(fb.lit_count(), 8 * 4);
        assert!(fb.pixel(127, 63));
    }

    #[test]
    fn test_white_box_clears() {
        let mut fb = FrameBuffer::new(16, 16);
        fb.draw_box(IVec2::ZERO, IVec2::splat(16));
        fb.set_color(Color::White);
        fb.draw_box(IVec2::splat(4), IVec2::splat(8));
        assert_eq!(fb.lit_count(), 256 - 64);
        assert!(!fb.pixel(8, 8));
    }

    #[test]
    fn test_frame_outline() {
        let mut fb = FrameBuffer::new(128, 64);
        fb.draw_frame(IVec2::ZERO, IVec2::new(128, 64));
        assert!(fb.pixel(0, 0));
        assert!(fb.pixel(127, 63));
        assert!(!fb.pixel(1, 1));
        assert_eq!(fb.lit_count(), 2 * 128 + 2 * 62);
    }

    #[test]
    fn test_line_endpoints_inclusive() {
        let mut fb = FrameBuffer::new(128, 64);
        fb.draw_line(IVec2::new(64, 10), IVec2::new(64, 4));
        assert_eq!(fb.lit_count(), 7);

        fb.clear();
        fb.draw_line(IVec2::new(40, 0), IVec2::new(0, 64));
        assert!(fb.pixel(40, 0));
        // (0, 64) is off-canvas; the pixel above it is not
        assert!(fb.pixel(0, 63) || fb.pixel(1, 63));
    }

    #[test]
    fn test_aligned_text_box() {
        let mut fb = FrameBuffer::new(128, 64);
        fb.draw_str_aligned(IVec2::new(64, 41), Align::Center, Align::Bottom, "Score: 10");
        let label = &fb.labels()[0];
        assert_eq!(label.size, IVec2::new(45, 7));
        assert_eq!(label.origin, IVec2::new(42, 34));
    }

    #[test]
    fn test_clear_resets_pen() {
        let mut fb = FrameBuffer::new(8, 8);
        fb.set_font(Font::Primary);
        fb.set_color(Color::White);
        fb.draw_str(IVec2::new(0, 8), "x");
        fb.clear();
        assert!(fb.labels().is_empty());
        fb.draw_str(IVec2::new(0, 8), "y");
        assert_eq!(fb.labels()[0].font, Font::Secondary);
        assert_eq!(fb.labels()[0].color, Color::Black);
    }
}
