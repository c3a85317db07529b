use std::cell::RefCell;
use std::f64::consts::TAU;
use std::rc::Rc;

use aurora_core::aurora::{band_gradient, bands, sample_band, BandSpec};
use aurora_core::particle::ParticleSet;
use aurora_core::scene::{Scene, BACKGROUND_STOPS, GLOW_STOPS};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent};

struct Inner {
    scene: Scene,
    ctx: CanvasRenderingContext2d,
    running: bool,
}

/// The animated aurora background bound to one canvas. Construct it, call
/// `start()`, and the frame loop keeps itself alive until `stop()`.
#[wasm_bindgen]
pub struct AuroraBackground {
    inner: Rc<RefCell<Inner>>,
}

#[wasm_bindgen]
impl AuroraBackground {
    #[wasm_bindgen(constructor)]
    pub fn new(canvas: HtmlCanvasElement) -> Result<AuroraBackground, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or("2d context unavailable")?
            .dyn_into::<CanvasRenderingContext2d>()?;

        let (width, height) = viewport_size()?;
        canvas.set_width(width as u32);
        canvas.set_height(height as u32);

        let seed = js_sys::Date::now() as u64;
        let scene = Scene::new(width as f32, height as f32, seed);
        web_sys::console::log_1(
            &format!(
                "aurora background: {} particles over {}x{}",
                scene.config.particle_count, width as u32, height as u32,
            )
            .into(),
        );

        let background = AuroraBackground {
            inner: Rc::new(RefCell::new(Inner {
                scene,
                ctx,
                running: false,
            })),
        };
        background.install_listeners(&canvas)?;
        Ok(background)
    }

    /// Arm the requestAnimationFrame loop. Each callback runs one tick,
    /// paints the frame, and re-arms itself unless `stop()` was called.
    pub fn start(&self) -> Result<(), JsValue> {
        {
            let mut inner = self.inner.borrow_mut();
            if inner.running {
                return Ok(());
            }
            inner.running = true;
        }

        // The closure must reference itself to re-arm, hence the
        // Option-in-Rc indirection.
        let hook: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
        let rearm = Rc::clone(&hook);
        let inner = Rc::clone(&self.inner);

        *hook.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            {
                let mut guard = inner.borrow_mut();
                if !guard.running {
                    return;
                }
                guard.scene.tick();
                if let Err(err) = paint(&guard) {
                    web_sys::console::error_1(&err);
                    guard.running = false;
                    return;
                }
            }
            if let Some(cb) = rearm.borrow().as_ref() {
                if let Err(err) = request_frame(cb) {
                    web_sys::console::error_1(&err);
                }
            }
        }) as Box<dyn FnMut()>));

        if let Some(cb) = hook.borrow().as_ref() {
            request_frame(cb)?;
        }
        Ok(())
    }

    /// Stop requesting further frames. The in-flight callback finishes
    /// normally and simply never re-arms.
    pub fn stop(&self) {
        self.inner.borrow_mut().running = false;
    }

    /// One tick plus paint, for hosts that drive the cadence themselves.
    pub fn frame(&self) -> Result<(), JsValue> {
        let mut inner = self.inner.borrow_mut();
        inner.scene.tick();
        paint(&inner)
    }

    /// Forward a raw pointer position (hosts that keep event wiring in JS).
    pub fn set_pointer(&self, x: f64, y: f64) {
        self.inner.borrow_mut().scene.pointer_moved(x as f32, y as f32);
    }

    /// Adopt new surface dimensions and recenter the pointer.
    pub fn resize(&self, width: f64, height: f64) {
        self.inner.borrow_mut().scene.resize(width as f32, height as f32);
    }
}

impl AuroraBackground {
    fn install_listeners(&self, canvas: &HtmlCanvasElement) -> Result<(), JsValue> {
        {
            let inner = Rc::clone(&self.inner);
            let on_move = Closure::wrap(Box::new(move |ev: MouseEvent| {
                inner
                    .borrow_mut()
                    .scene
                    .pointer_moved(ev.client_x() as f32, ev.client_y() as f32);
            }) as Box<dyn FnMut(MouseEvent)>);
            canvas.add_event_listener_with_callback("mousemove", on_move.as_ref().unchecked_ref())?;
            on_move.forget();
        }

        {
            let inner = Rc::clone(&self.inner);
            let canvas = canvas.clone();
            let on_resize = Closure::wrap(Box::new(move || {
                if let Ok((width, height)) = viewport_size() {
                    canvas.set_width(width as u32);
                    canvas.set_height(height as u32);
                    inner.borrow_mut().scene.resize(width as f32, height as f32);
                }
            }) as Box<dyn FnMut()>);
            web_sys::window()
                .ok_or("no window")?
                .add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())?;
            on_resize.forget();
        }

        Ok(())
    }
}

fn viewport_size() -> Result<(f64, f64), JsValue> {
    let window = web_sys::window().ok_or("no window")?;
    let width = window.inner_width()?.as_f64().ok_or("non-numeric width")?;
    let height = window.inner_height()?.as_f64().ok_or("non-numeric height")?;
    Ok((width, height))
}

fn request_frame(cb: &Closure<dyn FnMut()>) -> Result<i32, JsValue> {
    web_sys::window()
        .ok_or("no window")?
        .request_animation_frame(cb.as_ref().unchecked_ref())
}

/// Paint one full frame: background gradient, pointer glow, three aurora
/// bands back-to-front, then the particle field.
fn paint(inner: &Inner) -> Result<(), JsValue> {
    let scene = &inner.scene;
    let ctx = &inner.ctx;
    let width = f64::from(scene.bounds.x);
    let height = f64::from(scene.bounds.y);

    let backdrop = ctx.create_linear_gradient(0.0, 0.0, 0.0, height);
    for (offset, color) in BACKGROUND_STOPS {
        backdrop.add_color_stop(offset, color)?;
    }
    ctx.set_fill_style_canvas_gradient(&backdrop);
    ctx.fill_rect(0.0, 0.0, width, height);

    draw_glow(ctx, scene)?;

    let influence = scene.pointer_influence();
    for spec in bands(scene.time) {
        draw_band(ctx, scene, &spec, influence)?;
    }

    draw_particles(ctx, &scene.field.particles)?;
    Ok(())
}

fn draw_glow(ctx: &CanvasRenderingContext2d, scene: &Scene) -> Result<(), JsValue> {
    let pointer = scene.pointer.position();
    let (x, y) = (f64::from(pointer.x), f64::from(pointer.y));
    let radius = f64::from(scene.config.glow_radius);

    let glow = ctx.create_radial_gradient(x, y, 0.0, x, y, radius)?;
    for (offset, color) in GLOW_STOPS {
        glow.add_color_stop(offset, &color.to_css())?;
    }
    ctx.set_fill_style_canvas_gradient(&glow);
    ctx.begin_path();
    ctx.arc(x, y, radius, 0.0, TAU)?;
    ctx.fill();
    Ok(())
}

fn draw_band(
    ctx: &CanvasRenderingContext2d,
    scene: &Scene,
    spec: &BandSpec,
    influence: f32,
) -> Result<(), JsValue> {
    let width = f64::from(scene.bounds.x);
    let height = f64::from(scene.bounds.y);
    let pointer_x = scene.pointer.position().x;

    let points = sample_band(
        spec,
        scene.time,
        pointer_x,
        influence,
        scene.bounds.x,
        scene.bounds.y,
        scene.config.band_stride,
    );

    ctx.begin_path();
    ctx.move_to(0.0, height * 0.5 + f64::from(spec.offset));
    for p in &points {
        ctx.line_to(f64::from(p.x), f64::from(p.y));
    }
    ctx.line_to(width, height);
    ctx.line_to(0.0, height);
    ctx.close_path();

    let fill = ctx.create_linear_gradient(0.0, height * 0.5, 0.0, height);
    for (offset, color) in band_gradient(spec.hue, spec.base_alpha) {
        fill.add_color_stop(offset, &color.to_css())?;
    }
    ctx.set_fill_style_canvas_gradient(&fill);
    ctx.fill();
    Ok(())
}

fn draw_particles(
    ctx: &CanvasRenderingContext2d,
    particles: &ParticleSet,
) -> Result<(), JsValue> {
    ctx.set_shadow_blur(10.0);
    ctx.set_shadow_color("rgba(255,255,255,0.5)");

    for i in 0..particles.count {
        let pos = particles.position[i];
        ctx.set_fill_style_str(&format!("rgba(255,255,255,{:.3})", particles.alpha(i)));
        ctx.begin_path();
        ctx.arc(
            f64::from(pos.x),
            f64::from(pos.y),
            f64::from(particles.size[i]),
            0.0,
            TAU,
        )?;
        ctx.fill();
    }

    ctx.set_shadow_blur(0.0);
    Ok(())
}
