// Everything one screen needs, minus the window: input bus, mounted animator,
// live layout, style storage and the framebuffer we paint into.
// Both the windowed loop in main.rs and the headless snapshot drive this.

use crate::animator::GlyphStyles;
use crate::config::AnimationConfig;
use crate::draw::{self, BACKGROUND, Fill};
use crate::error::Error;
use crate::events::{EventBus, InputEvent};
use crate::falloff::{Axis, floor_values};
use crate::gradient::Gradient;
use crate::layout::TextLayout;
use crate::pointer::TrackingPhase;
use crate::scheduler::{FrameOutcome, Mount};
use crate::types::FrameBuffer;
use std::time::Duration;

pub struct App {
    config: AnimationConfig,
    bus: EventBus,
    mount: Mount,
    layout: TextLayout,
    styles: GlyphStyles,
    gradient: Gradient,
    screen: FrameBuffer,
}

impl App {
    pub fn new(config: AnimationConfig, width: usize, height: usize) -> Result<Self, Error> {
        config.validate()?;
        let gradient = config.gradient()?;
        let bus = EventBus::new();
        let mount = Mount::start(&config, &bus);
        let count = mount.animator().glyphs().len();
        let styles = GlyphStyles::new(count, floor_values(config.toggles()));
        let mut layout = TextLayout::new(count, width, height);
        layout.reflow(mount.animator().font_size(), styles.as_slice());

        Ok(Self {
            config,
            bus,
            mount,
            layout,
            styles,
            gradient,
            screen: FrameBuffer::filled(width, height, BACKGROUND),
        })
    }

    /// Pointer is over the window at (x, y).
    pub fn pointer_moved(&self, x: f64, y: f64) {
        self.bus.publish(InputEvent::PointerMove { x, y });
    }

    /// Window size changed; glyph boxes are unknown until the next reflow.
    pub fn resized(&mut self, width: usize, height: usize) {
        // minimized windows report 0x0
        if width == 0 || height == 0 || (width, height) == self.layout.viewport() {
            return;
        }
        self.bus.publish(InputEvent::Resize { width, height });
        self.layout.set_viewport(width, height);
        self.screen.resize(width, height);
    }

    /// One animation frame, then reflow so next frame sees the new boxes.
    pub fn step(&mut self) -> FrameOutcome {
        let outcome = self.mount.tick(&self.layout, &mut self.styles);
        if outcome == FrameOutcome::Ran {
            self.layout.reflow(self.mount.animator().font_size(), self.styles.as_slice());
        }
        outcome
    }

    /// Flip one axis on/off and restart the loop with it.
    pub fn toggle_axis(&mut self, axis: Axis) {
        match axis {
            Axis::Width => self.config.width = !self.config.width,
            Axis::Weight => self.config.weight = !self.config.weight,
            Axis::Italic => self.config.italic = !self.config.italic,
        }
        self.mount.reconfigure(&self.config);
    }

    /// Paint the title (and optionally the debug overlay) into the screen buffer.
    pub fn render(&mut self, elapsed: Duration, hud: Option<&str>) {
        self.screen.clear(BACKGROUND);
        let Some((line_x, line_width)) = self.layout.line_span() else {
            return;
        };
        let fill = Fill { gradient: &self.gradient, line_x, line_width, elapsed };
        for (glyph, rect) in self.mount.animator().glyphs().iter().zip(self.layout.boxes()) {
            if let (Some(rect), Some(style)) = (rect, self.styles.get(glyph.index)) {
                draw::draw_variable_glyph(&mut self.screen, *rect, glyph.ch, style, &fill);
            }
        }

        if let Some(text) = hud {
            let p = self.mount.animator().pointer().smoothed();
            if self.mount.animator().phase() == TrackingPhase::Tracking {
                draw::draw_crosshair(&mut self.screen, p.x as i32, p.y as i32, 12, 0x00_FF_CC_33);
            }
            draw::draw_text_5x7(&mut self.screen, 8, 8, text, 0x00_FF_FF_FF);
        }
    }

    /// One-line status for the HUD.
    pub fn status(&self) -> String {
        let a = self.mount.animator();
        let t = a.toggles();
        let flag = |on: bool| if on { "ON" } else { "OFF" };
        let phase = match a.phase() {
            TrackingPhase::Idle => "IDLE",
            TrackingPhase::Tracking => "TRACKING",
        };
        format!("{phase} | W:{} G:{} I:{}", flag(t.width), flag(t.weight), flag(t.italic))
    }

    /// Unmount: listeners go away and no further frame runs.
    pub fn stop(&mut self) {
        self.mount.stop();
    }

    pub fn screen(&self) -> &FrameBuffer { &self.screen }
    pub fn styles(&self) -> &GlyphStyles { &self.styles }
    pub fn mount(&self) -> &Mount { &self.mount }
    pub fn layout(&self) -> &TextLayout { &self.layout }
}
