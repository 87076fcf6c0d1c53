#![cfg(target_arch = "wasm32")]
use crate::constants::{CANVAS_ID, QUERY_TZ1, QUERY_TZ2};
use crate::core::config::{DEFAULT_TIME_ZONE_1, DEFAULT_TIME_ZONE_2};
use crate::core::{
    build_clock_pair, parse_time_zone, AppConfig, PerspectiveCamera, Scene, SystemTime,
    TrackballControls,
};
use chrono_tz::Tz;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
pub mod core;
mod dom;
mod events;
mod frame;
mod input;
mod render;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("twin-clocks starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

/// Parse a configured zone, falling back to `fallback` with a warning.
fn resolve_zone(name: &str, fallback: &str) -> anyhow::Result<Tz> {
    match parse_time_zone(name) {
        Ok(tz) => Ok(tz),
        Err(e) => {
            log::warn!("{e}; using {fallback}");
            Ok(parse_time_zone(fallback)?)
        }
    }
}

fn read_config(window: &web::Window) -> AppConfig {
    let tz1 = dom::query_param(window, QUERY_TZ1);
    let tz2 = dom::query_param(window, QUERY_TZ2);
    AppConfig::default().with_time_zones(tz1.as_deref(), tz2.as_deref())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas = dom::canvas_by_id(&document, CANVAS_ID)?;

    let config = read_config(&window);
    config.clock.validate()?;
    let zones = [
        resolve_zone(&config.time_zones[0], DEFAULT_TIME_ZONE_1)?,
        resolve_zone(&config.time_zones[1], DEFAULT_TIME_ZONE_2)?,
    ];
    log::info!("[clocks] zones={} / {}", zones[0], zones[1]);

    let mut scene = Scene::new();
    let clocks = build_clock_pair(&mut scene, &config.clock, zones);

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    let (w, h) = dom::sync_canvas_backing_size(&canvas);
    let mut cam = PerspectiveCamera::new(1.0);
    cam.set_aspect(w, h);
    let controls = Rc::new(RefCell::new(TrackballControls::new(
        &cam,
        dom::canvas_screen_rect(&canvas),
    )));
    let camera = Rc::new(RefCell::new(cam));

    events::wire_resize(canvas.clone(), camera.clone(), controls.clone());
    events::wire_global_keydown(controls.clone());
    events::wire_pointer_handlers(events::pointer::InputWiring {
        canvas: canvas.clone(),
        controls: controls.clone(),
    });

    let gpu = frame::init_gpu(&canvas, &scene, &config).await;

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        config,
        scene,
        clocks,
        time: Box::new(SystemTime),
        camera,
        controls,
        canvas,
        gpu,
        last_instant: Instant::now(),
        stats_elapsed: 0.0,
        stats_frames: 0,
    }));
    // Start RAF loop
    frame::start_loop(frame_ctx);
    Ok(())
}
