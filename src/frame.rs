use crate::constants::FPS_LOG_INTERVAL_SEC;
use crate::core::{
    position_hands, AppConfig, ClockInstance, PerspectiveCamera, Scene, TimeSource,
    TrackballControls,
};
use crate::render;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext<'a> {
    pub config: AppConfig,
    pub scene: Scene,
    pub clocks: [ClockInstance; 2],
    pub time: Box<dyn TimeSource>,

    pub camera: Rc<RefCell<PerspectiveCamera>>,
    pub controls: Rc<RefCell<TrackballControls>>,

    pub canvas: web::HtmlCanvasElement,
    pub gpu: Option<render::GpuState<'a>>,

    pub last_instant: Instant,
    pub stats_elapsed: f32,
    pub stats_frames: u32,
}

impl<'a> FrameContext<'a> {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f32();
        self.last_instant = now;
        self.log_stats(dt_sec);

        // Hands follow wall time; both clocks sample the same instant
        let instant = self.time.now();
        for clock in &self.clocks {
            position_hands(&mut self.scene, &self.config.clock, clock, instant);
        }

        {
            let mut controls = self.controls.borrow_mut();
            controls.update();
            controls.apply_to(&mut self.camera.borrow_mut());
        }

        if let Some(g) = &mut self.gpu {
            g.resize_if_needed(self.canvas.width(), self.canvas.height());
            let camera = self.camera.borrow();
            match g.render(&self.scene, &camera) {
                Ok(()) => {}
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                    log::warn!("surface lost; reconfiguring");
                    g.reconfigure();
                }
                Err(e) => log::error!("render error: {:?}", e),
            }
        }
    }

    fn log_stats(&mut self, dt_sec: f32) {
        self.stats_elapsed += dt_sec.max(0.0);
        self.stats_frames += 1;
        if self.stats_elapsed >= FPS_LOG_INTERVAL_SEC {
            log::debug!(
                "[frame] fps={:.1}",
                self.stats_frames as f32 / self.stats_elapsed
            );
            self.stats_elapsed = 0.0;
            self.stats_frames = 0;
        }
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    scene: &Scene,
    config: &AppConfig,
) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas, scene, config.clear_color).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

/// Drive `frame` from `requestAnimationFrame`, forever.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
