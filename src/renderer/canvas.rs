//! Drawing primitives of a monochrome LCD canvas

use glam::IVec2;

/// Ink colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Color {
    /// Lit pixel
    #[default]
    Black,
    /// Cleared pixel
    White,
}

/// Built-in fonts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Font {
    /// Bold headline font
    Primary,
    /// Small body font
    #[default]
    Secondary,
}

impl Font {
    /// Horizontal advance per glyph
    pub fn advance(&self) -> i32 {
        match self {
            Font::Primary => 6,
            Font::Secondary => 5,
        }
    }

    /// Height above the baseline
    pub fn ascent(&self) -> i32 {
        match self {
            Font::Primary => 8,
            Font::Secondary => 7,
        }
    }

    /// Pixel size of a string set in this font
    pub fn text_size(&self, text: &str) -> IVec2 {
        IVec2::new(text.chars().count() as i32 * self.advance(), self.ascent())
    }
}

/// Text anchor alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
    Top,
    Bottom,
    Center,
}

/// Draw target for the scene
///
/// Coordinates are pixels from the top-left corner; anything outside the
/// canvas is clipped.
pub trait Canvas {
    /// Canvas size in pixels
    fn size(&self) -> IVec2;

    /// Wipe everything and restore the default colour and font
    fn clear(&mut self);

    fn set_color(&mut self, color: Color);

    fn set_font(&mut self, font: Font);

    /// Rectangle outline
    fn draw_frame(&mut self, origin: IVec2, size: IVec2);

    /// Filled rectangle
    fn draw_box(&mut self, origin: IVec2, size: IVec2);

    /// Line including both end points
    fn draw_line(&mut self, from: IVec2, to: IVec2);

    /// Text with its baseline starting at `pos`
    fn draw_str(&mut self, pos: IVec2, text: &str);

    /// Text anchored at `pos` with the given alignment on each axis
    fn draw_str_aligned(&mut self, pos: IVec2, horizontal: Align, vertical: Align, text: &str);
}
