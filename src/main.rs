// What you SEE:
// • A big gradient title centered in the window.
// • Move the mouse over it: letters near the pointer swell (wider, bolder,
//   optionally slanted), easing after the cursor rather than snapping.
// • W / G / I toggle the width / weight / italic axes. H toggles the HUD.
// • ESC quits.
// With --snapshot out.png nothing opens; a few frames are simulated and saved.

use clap::Parser;
use glyph_pressure::app::App;
use glyph_pressure::cli::Args;
use glyph_pressure::draw::Drawer;
use glyph_pressure::error::Error;
use glyph_pressure::falloff::Axis;
use glyph_pressure::snapshot::{self, SnapshotRequest};
use std::time::{Duration, Instant};

fn main() -> Result<(), Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let config = args.resolve_config()?;
    let (w, h) = args.size;

    if let Some(path) = &args.snapshot {
        let req = SnapshotRequest { width: w, height: h, pointer: args.pointer, frames: args.frames };
        let fb = snapshot::render(config, &req)?;
        return snapshot::save_png(&fb, path);
    }

    let mut drawer = Drawer::new("Glyph Pressure", w, h)?;
    let mut app = App::new(config, w, h)?;

    let started = Instant::now();
    let mut last_fps_time = Instant::now();
    let mut frames_this_second: u32 = 0;
    let mut hud_fps_text = String::from("FPS: 0.0");
    let mut show_hud = false;
    let mut last_mouse = None;

    /* ------------------------------ Main loop ------------------------------ */
    while drawer.is_open() && !drawer.esc_pressed() {
        /* 1) Inputs -> events. Only changes are published; leaving the window
              publishes nothing, so the last position sticks. */
        let (ww, wh) = drawer.size();
        app.resized(ww, wh);

        let mouse = drawer.mouse_pos();
        if let Some((mx, my)) = mouse {
            if last_mouse != mouse {
                app.pointer_moved(mx, my);
            }
        }
        last_mouse = mouse;

        if drawer.w_pressed_once() { app.toggle_axis(Axis::Width); }
        if drawer.g_pressed_once() { app.toggle_axis(Axis::Weight); }
        if drawer.i_pressed_once() { app.toggle_axis(Axis::Italic); }
        if drawer.h_pressed_once() { show_hud = !show_hud; }

        /* 2) One animation frame: smoothing, falloff, reflow. */
        app.step();

        /* 3) Paint and present. */
        let hud = show_hud.then(|| format!("{} | {}", app.status(), hud_fps_text));
        app.render(started.elapsed(), hud.as_deref());
        drawer.present(app.screen())?;

        /* 4) FPS counter, once per second */
        frames_this_second += 1;
        let now = Instant::now();
        if now.duration_since(last_fps_time) >= Duration::from_secs(1) {
            let secs = now.duration_since(last_fps_time).as_secs_f32();
            let fps = frames_this_second as f32 / secs;
            log::debug!("FPS: {fps:.1}");
            hud_fps_text = format!("FPS: {fps:.1}");
            frames_this_second = 0;
            last_fps_time = now;
        }
    }

    app.stop();
    Ok(())
}
