// Measures where each glyph sits on screen.
// Visual: one line of text, centered in the window. Every glyph box is as wide
// as its current width axis asks for, so neighbours shuffle sideways as the
// pointer bulge passes.

use crate::animator::LayoutSource;
use crate::font::{COLS, ROWS};
use crate::types::{AxisValues, Rect};

/// Horizontal advance of a glyph at `font_size` and width axis `wdth` (100 = normal).
/// One bitmap cell of spacing is included.
pub fn glyph_advance(font_size: f64, wdth: i32) -> f64 {
    let cell = font_size / ROWS as f64;
    (COLS + 1) as f64 * cell * (wdth as f64 / 100.0)
}

pub struct TextLayout {
    viewport: (usize, usize),
    container: Option<Rect>,
    boxes: Vec<Option<Rect>>,
}

impl TextLayout {
    /// Nothing is measured until the first [`reflow`](Self::reflow).
    pub fn new(glyph_count: usize, width: usize, height: usize) -> Self {
        Self { viewport: (width, height), container: None, boxes: vec![None; glyph_count] }
    }

    /// New window size. Glyph boxes are stale until the next reflow.
    pub fn set_viewport(&mut self, width: usize, height: usize) {
        self.viewport = (width, height);
        for b in &mut self.boxes { *b = None; }
    }

    pub fn viewport(&self) -> (usize, usize) {
        self.viewport
    }

    /// Lay the line out again from the current font size and per-glyph styles.
    /// The container spans the full viewport width at the line's height.
    pub fn reflow(&mut self, font_size: f32, styles: &[AxisValues]) {
        let font_size = font_size as f64;
        let (vw, vh) = (self.viewport.0 as f64, self.viewport.1 as f64);
        self.boxes.resize(styles.len(), None);

        let line_width: f64 = styles.iter().map(|s| glyph_advance(font_size, s.wdth)).sum();
        let top = (vh - font_size) / 2.0;
        let mut x = (vw - line_width) / 2.0;
        for (slot, style) in self.boxes.iter_mut().zip(styles) {
            let w = glyph_advance(font_size, style.wdth);
            *slot = Some(Rect::new(x, top, w, font_size));
            x += w;
        }
        self.container = Some(Rect::new(0.0, top, vw, font_size));
    }

    /// Left edge and width of the laid-out line (for gradient mapping).
    pub fn line_span(&self) -> Option<(f64, f64)> {
        let first = self.boxes.first().copied().flatten()?;
        let last = self.boxes.last().copied().flatten()?;
        Some((first.x, last.x + last.width - first.x))
    }

    pub fn boxes(&self) -> &[Option<Rect>] {
        &self.boxes
    }
}

impl LayoutSource for TextLayout {
    fn container_box(&self) -> Option<Rect> {
        self.container
    }

    fn glyph_box(&self, index: usize) -> Option<Rect> {
        self.boxes.get(index).copied().flatten()
    }
}
