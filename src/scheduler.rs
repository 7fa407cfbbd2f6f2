//! Frame scheduling and the mount lifecycle.
//!
//! The host calls [`Mount::tick`] once per display refresh. A tick runs only if
//! a frame is pending; running it drains the input listener, computes one
//! frame, and requests the next. There is never more than one pending frame,
//! and after [`Mount::stop`] (or drop) nothing is pending and no listener is
//! registered.

use crate::animator::{GlyphPressureAnimator, LayoutSource, StyleSink};
use crate::config::AnimationConfig;
use crate::events::{EventBus, InputEvent, Subscription};

/// Identifies one requested frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameToken(u64);

/// Holds at most one pending frame request.
#[derive(Debug, Default)]
pub struct FrameScheduler {
    next_id: u64,
    pending: Option<FrameToken>,
}

impl FrameScheduler {
    /// Request the next frame, replacing any request already pending.
    pub fn request(&mut self) -> FrameToken {
        let token = FrameToken(self.next_id);
        self.next_id += 1;
        self.pending = Some(token);
        token
    }

    /// Cancel the pending request, if any.
    pub fn cancel(&mut self) -> Option<FrameToken> {
        self.pending.take()
    }

    /// Claim the pending frame so it can run. Empties the slot.
    pub fn take(&mut self) -> Option<FrameToken> {
        self.pending.take()
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameOutcome {
    /// One frame ran and the next one is scheduled.
    Ran,
    /// The mount is stopped; nothing ran.
    Stopped,
}

/// A mounted animator: listener registration + frame loop, torn down together.
pub struct Mount {
    animator: GlyphPressureAnimator,
    scheduler: FrameScheduler,
    subscription: Option<Subscription>,
}

impl Mount {
    /// Register input listeners on `bus` and schedule the first frame.
    pub fn start(config: &AnimationConfig, bus: &EventBus) -> Self {
        let mut scheduler = FrameScheduler::default();
        scheduler.request();
        log::info!(
            "mounted {:?}: {} glyphs, axes {:?}",
            config.text,
            config.text.chars().count(),
            config.toggles()
        );
        Self {
            animator: GlyphPressureAnimator::new(config),
            scheduler,
            subscription: Some(bus.subscribe()),
        }
    }

    /// Run the pending frame, if any.
    pub fn tick<L, S>(&mut self, layout: &L, sink: &mut S) -> FrameOutcome
    where
        L: LayoutSource + ?Sized,
        S: StyleSink + ?Sized,
    {
        if self.scheduler.take().is_none() {
            return FrameOutcome::Stopped;
        }
        let events = self.subscription.as_ref().map(Subscription::drain).unwrap_or_default();
        for event in events {
            self.dispatch(event);
        }
        self.animator.frame(layout, sink);
        self.scheduler.request();
        FrameOutcome::Ran
    }

    fn dispatch(&mut self, event: InputEvent) {
        match event {
            InputEvent::PointerMove { x, y } => self.animator.on_pointer_move(x, y),
            InputEvent::Resize { width, height } => {
                self.animator.on_resize();
                log::debug!("resize to {width}x{height}, font size back to {}", self.animator.font_size());
            }
        }
    }

    /// Swap in a new configuration and restart the loop with it.
    pub fn reconfigure(&mut self, config: &AnimationConfig) {
        if !self.is_running() {
            return;
        }
        self.scheduler.cancel();
        self.animator.reconfigure(config);
        self.scheduler.request();
        log::debug!("reconfigured: axes {:?}", config.toggles());
    }

    /// Cancel the pending frame and deregister listeners. Idempotent.
    pub fn stop(&mut self) {
        let cancelled = self.scheduler.cancel();
        if self.subscription.take().is_some() || cancelled.is_some() {
            log::info!("unmounted");
        }
    }

    pub fn is_running(&self) -> bool {
        self.subscription.is_some()
    }

    pub fn animator(&self) -> &GlyphPressureAnimator {
        &self.animator
    }
}

impl Drop for Mount {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animator::GlyphStyles;
    use crate::falloff::floor_values;
    use crate::pointer::TrackingPhase;
    use crate::types::Rect;

    struct OneGlyph;

    impl LayoutSource for OneGlyph {
        fn container_box(&self) -> Option<Rect> { Some(Rect::new(0.0, 0.0, 100.0, 50.0)) }
        fn glyph_box(&self, index: usize) -> Option<Rect> {
            (index == 0).then(|| Rect::new(40.0, 15.0, 20.0, 20.0))
        }
    }

    /// Layout that fails the test if it is read.
    struct Poisoned;

    impl LayoutSource for Poisoned {
        fn container_box(&self) -> Option<Rect> { panic!("layout read after stop") }
        fn glyph_box(&self, _: usize) -> Option<Rect> { panic!("layout read after stop") }
    }

    fn config() -> AnimationConfig {
        AnimationConfig { text: "A".into(), ..AnimationConfig::default() }
    }

    #[test]
    fn scheduler_holds_one_request() {
        let mut s = FrameScheduler::default();
        let a = s.request();
        let b = s.request();
        assert_ne!(a, b);
        assert_eq!(s.take(), Some(b));
        assert_eq!(s.take(), None);
        s.request();
        assert!(s.cancel().is_some());
        assert!(!s.is_pending());
    }

    #[test]
    fn start_schedules_and_subscribes() {
        let bus = EventBus::new();
        let mut m = Mount::start(&config(), &bus);
        assert_eq!(bus.listener_count(), 1);
        let mut sink = GlyphStyles::new(1, floor_values(config().toggles()));
        assert_eq!(m.tick(&OneGlyph, &mut sink), FrameOutcome::Ran);
        assert_eq!(m.tick(&OneGlyph, &mut sink), FrameOutcome::Ran);
    }

    #[test]
    fn events_reach_the_animator_on_next_tick() {
        let bus = EventBus::new();
        let mut m = Mount::start(&config(), &bus);
        let mut sink = GlyphStyles::new(1, floor_values(config().toggles()));

        bus.publish(InputEvent::PointerMove { x: 5.0, y: 5.0 });
        bus.publish(InputEvent::PointerMove { x: 50.0, y: 25.0 });
        assert_eq!(m.animator().phase(), TrackingPhase::Idle);

        m.tick(&OneGlyph, &mut sink);
        assert_eq!(m.animator().phase(), TrackingPhase::Tracking);
        // Last event wins
        assert_eq!(m.animator().pointer().raw().x, 50.0);
    }

    #[test]
    fn stop_cancels_frame_and_listeners() {
        let bus = EventBus::new();
        let mut m = Mount::start(&config(), &bus);
        m.stop();
        assert_eq!(bus.listener_count(), 0);
        assert!(!m.is_running());

        let mut sink = GlyphStyles::new(1, floor_values(config().toggles()));
        assert_eq!(m.tick(&Poisoned, &mut sink), FrameOutcome::Stopped);

        // Reconfigure after stop must not revive the loop
        m.reconfigure(&config());
        assert_eq!(m.tick(&Poisoned, &mut sink), FrameOutcome::Stopped);
        m.stop();
    }

    #[test]
    fn drop_deregisters_on_early_return() {
        fn fails(bus: &EventBus) -> Result<u32, std::num::ParseIntError> {
            let _mount = Mount::start(&config(), bus);
            let n: u32 = "not a number".parse()?;
            Ok(n)
        }
        let bus = EventBus::new();
        assert!(fails(&bus).is_err());
        assert_eq!(bus.listener_count(), 0);
    }

    #[test]
    fn reconfigure_restarts_with_new_toggles() {
        let bus = EventBus::new();
        let mut m = Mount::start(&config(), &bus);
        let mut sink = GlyphStyles::new(1, floor_values(config().toggles()));
        bus.publish(InputEvent::PointerMove { x: 50.0, y: 25.0 });
        for _ in 0..300 {
            m.tick(&OneGlyph, &mut sink);
        }
        assert!(sink.get(0).unwrap().wdth > 150);

        m.reconfigure(&AnimationConfig { width: false, ..config() });
        assert_eq!(m.tick(&OneGlyph, &mut sink), FrameOutcome::Ran);
        assert_eq!(sink.get(0).unwrap().wdth, 100);
    }
}
