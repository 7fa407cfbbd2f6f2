// Window + software drawing utilities.
// Visual effects provided here:
// 1) A resizable window that shows the animated title.
// 2) Variable glyphs: width stretches, weight fattens strokes, italic slants.
// 3) A crosshair and a tiny 5x7 HUD for debugging the pointer follower.

use crate::error::Error;
use crate::font::{self, COLS, ROWS};
use crate::gradient::Gradient;
use crate::types::{AxisValues, FrameBuffer, Rect};
use minifb::{Key, KeyRepeat, MouseMode, Window, WindowOptions};
use std::time::Duration;

pub const BACKGROUND: u32 = 0x00_0B_0B_10;

pub struct Drawer {
    window: Window, // the on-screen window you see
}

impl Drawer {
    /// Create a resizable window.
    /// Visual: a new empty window appears with your chosen title.
    pub fn new(title: &str, width: usize, height: usize) -> Result<Self, Error> {
        let options = WindowOptions { resize: true, ..WindowOptions::default() };
        let mut window = Window::new(title, width, height, options)
            .map_err(|e| Error::WindowInit(e.to_string()))?;
        window.set_target_fps(60);
        Ok(Self { window })
    }

    /// Push the pixels for this frame to the screen.
    pub fn present(&mut self, framebuffer: &FrameBuffer) -> Result<(), Error> {
        self.window
            .update_with_buffer(&framebuffer.pixels, framebuffer.width, framebuffer.height)
            .map_err(|e| Error::WindowUpdate(e.to_string()))?;
        Ok(())
    }

    /// Returns false when the user closes the window (so we can stop the loop).
    pub fn is_open(&self) -> bool {
        self.window.is_open()
    }

    /// True while ESC is held down (we’ll exit when this is pressed).
    pub fn esc_pressed(&self) -> bool {
        self.window.is_key_down(Key::Escape)
    }

    /// Current inner size of the window in pixels.
    pub fn size(&self) -> (usize, usize) {
        self.window.get_size()
    }

    /// Mouse position in window pixels, `None` while the pointer is outside.
    pub fn mouse_pos(&self) -> Option<(f64, f64)> {
        self.window
            .get_mouse_pos(MouseMode::Discard)
            .map(|(x, y)| (x as f64, y as f64))
    }

    // Axis toggles: W = width, G = weight, I = italic.
    pub fn w_pressed_once(&self) -> bool { self.window.is_key_pressed(Key::W, KeyRepeat::No) }
    pub fn g_pressed_once(&self) -> bool { self.window.is_key_pressed(Key::G, KeyRepeat::No) }
    pub fn i_pressed_once(&self) -> bool { self.window.is_key_pressed(Key::I, KeyRepeat::No) }

    /// HUD + crosshair toggle.
    pub fn h_pressed_once(&self) -> bool { self.window.is_key_pressed(Key::H, KeyRepeat::No) }
}

/* ---------- Software drawing: pixels, spans, crosshair ---------- */

/// Put a pixel on the framebuffer if (x,y) is inside bounds.
#[inline]
fn put_pixel(fb: &mut FrameBuffer, x: i32, y: i32, color: u32) {
    if x < 0 || y < 0 {
        return;
    }
    let (x, y) = (x as usize, y as usize);
    if x >= fb.width || y >= fb.height {
        return;
    }
    let idx = y * fb.width + x;
    fb.pixels[idx] = color;
}

/// Fill pixels [x0, x1) on row y, asking `paint` for each pixel's color.
fn fill_span(fb: &mut FrameBuffer, x0: i32, x1: i32, y: i32, paint: &impl Fn(i32) -> u32) {
    if y < 0 || y as usize >= fb.height {
        return;
    }
    let x0 = x0.max(0);
    let x1 = x1.min(fb.width as i32);
    let row = y as usize * fb.width;
    for x in x0..x1 {
        fb.pixels[row + x as usize] = paint(x);
    }
}

/// Draw a thin line between (x0,y0) and (x1,y1) using Bresenham.
fn draw_line(fb: &mut FrameBuffer, x0: i32, y0: i32, x1: i32, y1: i32, color: u32) {
    let (mut x0, mut y0, x1, y1) = (x0, y0, x1, y1);
    let dx = (x1 - x0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let dy = -(y1 - y0).abs();
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;
    loop {
        put_pixel(fb, x0, y0, color);
        if x0 == x1 && y0 == y1 { break; }
        let e2 = 2 * err;
        if e2 >= dy { err += dy; x0 += sx; }
        if e2 <= dx { err += dx; y0 += sy; }
    }
}

/// Draw a small crosshair centered at (cx,cy).
/// Visual: a “+” shape (with a tiny gap at the center) marks the smoothed pointer.
pub fn draw_crosshair(fb: &mut FrameBuffer, cx: i32, cy: i32, size: i32, color: u32) {
    draw_line(fb, cx - size, cy, cx - 2, cy, color);
    draw_line(fb, cx + 2, cy, cx + size, cy, color);
    draw_line(fb, cx, cy - size, cx, cy - 2, color);
    draw_line(fb, cx, cy + 2, cx, cy + size, color);
    put_pixel(fb, cx, cy, color);
}

/* ---------- Variable glyphs ---------- */

/// Extra stroke half-thickness as a fraction of a cell. 0 at weight 400.
fn stroke_pad(wght: i32) -> f64 {
    ((wght as f64 - 400.0) / 900.0).clamp(-0.3, 1.0) * 0.35
}

/// Horizontal shear per pixel of height. Italic 1.0 leans about 14 degrees.
fn shear(ital: f64) -> f64 {
    ital.clamp(0.0, 1.0) * 0.25
}

/// Where the gradient sits relative to the glyphs.
pub struct Fill<'a> {
    pub gradient: &'a Gradient,
    pub line_x: f64,     // left edge of the text line
    pub line_width: f64, // width of the text line
    pub elapsed: Duration,
}

impl Fill<'_> {
    fn color(&self, x: i32) -> u32 {
        let w = if self.line_width > 0.0 { self.line_width } else { 1.0 };
        self.gradient.color_at((x as f64 - self.line_x) / w, self.elapsed)
    }
}

/// Rasterize one glyph into `rect` with its axis values applied.
/// Visual: each lit bitmap cell becomes a block that is stretched by `wdth`,
/// padded by `wght`, and slid right toward the top by `ital`.
pub fn draw_variable_glyph(fb: &mut FrameBuffer, rect: Rect, ch: char, style: AxisValues, fill: &Fill<'_>) {
    let rows = font::glyph_or_tofu(ch);
    let cell_h = rect.height / ROWS as f64;
    let cell_w = rect.width / (COLS + 1) as f64; // last column is spacing
    let pad = stroke_pad(style.wght) * cell_w;
    let lean = shear(style.ital);
    let bottom = rect.y + rect.height;
    let paint = |x: i32| fill.color(x);

    for row in 0..ROWS {
        // clip to the framebuffer so huge or off-screen rects stay cheap
        let y0 = ((rect.y + row as f64 * cell_h).round() as i32).max(0);
        let y1 = ((rect.y + (row + 1) as f64 * cell_h).round() as i32).min(fb.height as i32);
        for col in 0..COLS {
            if !font::lit(&rows, col, row) {
                continue;
            }
            let left = rect.x + col as f64 * cell_w - pad;
            let right = rect.x + (col + 1) as f64 * cell_w + pad;
            for y in y0..y1 {
                let dx = lean * (bottom - y as f64);
                fill_span(fb, (left + dx).round() as i32, (right + dx).round() as i32, y, &paint);
            }
        }
    }
}

/* ---------- 5x7 HUD text ---------- */

/// Draw a single 5x7 character at (x,y).
/// Visual: a tiny glyph appears with a 1-pixel black shadow for contrast.
fn draw_char_5x7(fb: &mut FrameBuffer, x: i32, y: i32, ch: char, color: u32) {
    if let Some(rows) = font::glyph5x7(ch) {
        // Shadow pass first, then the glyph itself
        for (offset, c) in [(1, 0x00000000), (0, color)] {
            for row in 0..ROWS {
                for col in 0..COLS {
                    if font::lit(&rows, col, row) {
                        put_pixel(fb, x + col as i32 + offset, y + row as i32 + offset, c);
                    }
                }
            }
        }
    }
}

/// Draw a text string using 5x7 glyphs, 1-pixel spacing.
pub fn draw_text_5x7(fb: &mut FrameBuffer, mut x: i32, y: i32, text: &str, color: u32) {
    for ch in text.chars() {
        draw_char_5x7(fb, x, y, ch, color);
        x += 6; // 5 pixels glyph width + 1 pixel spacing
    }
}
