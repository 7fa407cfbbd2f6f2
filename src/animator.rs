//! Per-frame glyph pressure computation.
//!
//! The animator owns a fixed arena of glyph records (one per Unicode scalar of
//! the configured text) and the pointer state. Every frame it:
//! 1. steps the smoothed pointer toward the raw one,
//! 2. takes half the container width as the normalization radius,
//! 3. maps each glyph's center distance through [`axis_values`] and writes the
//!    result to the glyph record and the style sink.
//!
//! Layout is queried fresh every frame through [`LayoutSource`]; nothing about
//! glyph geometry is cached here.

use crate::config::AnimationConfig;
use crate::falloff::{AxisToggles, axis_values, floor_values};
use crate::pointer::{PointerState, TrackingPhase};
use crate::types::{AxisValues, Rect};

/// Where the animator reads geometry from (live layout, in screen coordinates).
pub trait LayoutSource {
    /// Bounding box of the text container. `None` while it is not laid out.
    fn container_box(&self) -> Option<Rect>;
    /// Bounding box of glyph `index`. `None` while it is not measured (mid-reflow).
    fn glyph_box(&self, index: usize) -> Option<Rect>;
}

/// Where computed styles go. Writes are idempotent per frame.
pub trait StyleSink {
    fn apply(&mut self, index: usize, values: AxisValues);
}

/// One character of the display string.
#[derive(Clone, Debug, PartialEq)]
pub struct Glyph {
    pub index: usize,
    pub ch: char,
    /// Last style written for this glyph.
    pub style: AxisValues,
}

/// Plain per-glyph style storage; the simplest [`StyleSink`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GlyphStyles {
    values: Vec<AxisValues>,
}

impl GlyphStyles {
    pub fn new(count: usize, initial: AxisValues) -> Self {
        Self { values: vec![initial; count] }
    }

    pub fn get(&self, index: usize) -> Option<AxisValues> {
        self.values.get(index).copied()
    }

    pub fn as_slice(&self) -> &[AxisValues] {
        &self.values
    }

    /// Re-seed after the glyph count changed.
    pub fn reset(&mut self, count: usize, initial: AxisValues) {
        self.values.clear();
        self.values.resize(count, initial);
    }
}

impl StyleSink for GlyphStyles {
    fn apply(&mut self, index: usize, values: AxisValues) {
        if let Some(slot) = self.values.get_mut(index) {
            *slot = values;
        }
    }
}

/// Styles for one frame: `None` where the glyph had no box this frame.
///
/// Pure: reads the pointer's smoothed position and the layout, mutates nothing.
/// An unavailable container yields all `None`.
pub fn compute_frame<L: LayoutSource + ?Sized>(
    pointer: &PointerState,
    toggles: AxisToggles,
    layout: &L,
    glyph_count: usize,
) -> Vec<Option<AxisValues>> {
    let Some(container) = layout.container_box() else {
        return vec![None; glyph_count];
    };
    let max_dist = container.width / 2.0;
    let cursor = pointer.smoothed();

    (0..glyph_count)
        .map(|i| {
            layout.glyph_box(i).map(|rect| {
                let d = cursor.distance(rect.center());
                axis_values(d, max_dist, toggles)
            })
        })
        .collect()
}

pub struct GlyphPressureAnimator {
    text: String,
    toggles: AxisToggles,
    glyphs: Vec<Glyph>,
    pointer: PointerState,
    min_font_size: f32,
    font_size: f32,
}

impl GlyphPressureAnimator {
    pub fn new(config: &AnimationConfig) -> Self {
        let toggles = config.toggles();
        Self {
            text: config.text.clone(),
            toggles,
            glyphs: build_glyphs(&config.text, toggles),
            pointer: PointerState::new(),
            min_font_size: config.min_font_size,
            font_size: config.min_font_size,
        }
    }

    /// Pointer moved to absolute screen coordinates.
    pub fn on_pointer_move(&mut self, x: f64, y: f64) {
        if self.pointer.phase() == TrackingPhase::Idle {
            log::debug!("pointer tracking started at ({x:.1}, {y:.1})");
        }
        self.pointer.set_raw(x, y);
    }

    /// Viewport changed size: the display size goes back to the configured minimum.
    /// Styles are recomputed on the next frame, not here.
    pub fn on_resize(&mut self) {
        self.font_size = self.min_font_size;
    }

    /// Run one animation frame.
    pub fn frame<L, S>(&mut self, layout: &L, sink: &mut S)
    where
        L: LayoutSource + ?Sized,
        S: StyleSink + ?Sized,
    {
        self.pointer.step();

        let styles = compute_frame(&self.pointer, self.toggles, layout, self.glyphs.len());
        for (glyph, style) in self.glyphs.iter_mut().zip(styles) {
            match style {
                Some(values) => {
                    glyph.style = values;
                    sink.apply(glyph.index, values);
                }
                // keeps last frame's style
                None => log::trace!("glyph {} ({:?}) has no box this frame", glyph.index, glyph.ch),
            }
        }
    }

    /// Apply a new configuration. Pointer state carries over; the glyph arena is
    /// rebuilt only if the text changed.
    pub fn reconfigure(&mut self, config: &AnimationConfig) {
        self.toggles = config.toggles();
        self.min_font_size = config.min_font_size;
        self.font_size = config.min_font_size;
        if config.text != self.text {
            self.text = config.text.clone();
            self.glyphs = build_glyphs(&self.text, self.toggles);
        }
    }

    pub fn glyphs(&self) -> &[Glyph] { &self.glyphs }
    pub fn pointer(&self) -> &PointerState { &self.pointer }
    pub fn toggles(&self) -> AxisToggles { self.toggles }
    pub fn font_size(&self) -> f32 { self.font_size }
    pub fn phase(&self) -> TrackingPhase { self.pointer.phase() }
}

/// One slot per Unicode scalar, index-stable, all at floor values.
fn build_glyphs(text: &str, toggles: AxisToggles) -> Vec<Glyph> {
    let style = floor_values(toggles);
    text.chars()
        .enumerate()
        .map(|(index, ch)| Glyph { index, ch, style })
        .collect()
}
