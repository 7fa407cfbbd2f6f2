//! Pointer-pressure text: each glyph of a title swells in width, weight and
//! slant as a smoothed pointer comes near it.
//!
//! The math lives in [`falloff`], [`pointer`] and [`animator`] and has no
//! platform dependencies. [`scheduler`] and [`events`] give it a mount
//! lifecycle; [`app`] and [`draw`] put it on screen with minifb.

pub mod animator;
pub mod app;
pub mod cli;
pub mod config;
pub mod draw;
pub mod error;
pub mod events;
pub mod falloff;
pub mod font;
pub mod gradient;
pub mod layout;
pub mod pointer;
pub mod scheduler;
pub mod snapshot;
pub mod types;

pub use animator::{GlyphPressureAnimator, GlyphStyles, LayoutSource, StyleSink, compute_frame};
pub use config::AnimationConfig;
pub use error::Error;
pub use scheduler::{FrameOutcome, Mount};
