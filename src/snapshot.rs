// Headless mode: run the animation for N frames without a window and write
// the last frame to a PNG. Handy for checking a config on a machine with no
// display, and for seeing what the bulge looks like at a fixed pointer.

use crate::app::App;
use crate::config::AnimationConfig;
use crate::error::Error;
use crate::types::FrameBuffer;
use image::{ImageBuffer, Rgb, RgbImage};
use std::path::Path;
use std::time::Duration;

/// Nominal display refresh used to advance the gradient clock.
const FRAME_TIME: Duration = Duration::from_micros(16_667);

pub struct SnapshotRequest {
    pub width: usize,
    pub height: usize,
    /// Pointer position published before the first frame, if any.
    pub pointer: Option<(f64, f64)>,
    pub frames: u32,
}

/// Simulate `frames` frames and return the final picture.
pub fn render(config: AnimationConfig, req: &SnapshotRequest) -> Result<FrameBuffer, Error> {
    let mut app = App::new(config, req.width, req.height)?;
    if let Some((x, y)) = req.pointer {
        app.pointer_moved(x, y);
    }
    for _ in 0..req.frames {
        app.step();
    }
    app.render(FRAME_TIME * req.frames, None);
    app.stop();
    Ok(app.screen().clone())
}

/// Unpack 0x00RRGGBB pixels into an RGB image.
pub fn to_image(fb: &FrameBuffer) -> RgbImage {
    ImageBuffer::from_fn(fb.width as u32, fb.height as u32, |x, y| {
        let px = fb.pixels[y as usize * fb.width + x as usize];
        Rgb([(px >> 16) as u8, (px >> 8) as u8, px as u8])
    })
}

pub fn save_png(fb: &FrameBuffer, path: &Path) -> Result<(), Error> {
    to_image(fb).save(path)?;
    log::info!("wrote {}x{} snapshot to {}", fb.width, fb.height, path.display());
    Ok(())
}
