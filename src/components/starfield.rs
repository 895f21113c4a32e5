use std::cell::RefCell;
use std::f64::consts::TAU;
use std::rc::Rc;

use gloo::console::log;
use gloo::events::EventListener;
use gloo::render::{request_animation_frame, AnimationFrame};
use wasm_bindgen::JsCast;
use web_sys::{window, CanvasRenderingContext2d, HtmlCanvasElement, PointerEvent};
use yew::prelude::*;

use crate::anim::particles::{FieldSettings, ParticleField, Sprite};
use crate::components::use_site_config;
use crate::config::SiteConfig;
use crate::error::{Result, SiteError};

const STAR_RGB: &str = "191, 219, 254";
const TRAIL_RGB: &str = "96, 165, 250";

struct Scene {
    field: ParticleField,
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl Scene {
    fn sync_size(&mut self) {
        let w = self.canvas.client_width().max(0) as u32;
        let h = self.canvas.client_height().max(0) as u32;
        if self.canvas.width() != w || self.canvas.height() != h {
            self.canvas.set_width(w);
            self.canvas.set_height(h);
        }
        self.field.resize(w as f64, h as f64);
    }

    fn frame(&mut self) {
        let sprites = self.field.step(&mut js_sys::Math::random);
        let (w, h) = self.field.size();
        self.ctx.clear_rect(0.0, 0.0, w, h);
        for s in &sprites {
            draw(&self.ctx, s);
        }
    }
}

fn draw(ctx: &CanvasRenderingContext2d, s: &Sprite) {
    if let Some(t) = s.trail {
        ctx.set_stroke_style_str(&format!("rgba({TRAIL_RGB}, {:.3})", t.alpha));
        ctx.set_line_width(s.radius.max(0.5));
        ctx.begin_path();
        ctx.move_to(t.from_x, t.from_y);
        ctx.line_to(s.x, s.y);
        ctx.stroke();
    }
    ctx.set_fill_style_str(&format!("rgba({STAR_RGB}, {:.3})", s.alpha));
    ctx.begin_path();
    if ctx.arc(s.x, s.y, s.radius, 0.0, TAU).is_ok() {
        ctx.fill();
    }
}

fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok())
        .ok_or(SiteError::NoCanvasContext)
}

type FrameSlot = Rc<RefCell<Option<AnimationFrame>>>;

fn schedule(slot: FrameSlot, scene: Rc<RefCell<Scene>>) {
    let next = slot.clone();
    let handle = request_animation_frame(move |_ts| {
        scene.borrow_mut().frame();
        schedule(next, scene);
    });
    *slot.borrow_mut() = Some(handle);
}

/// Everything a mounted starfield owns. Dropping it stops the frame loop and
/// removes the window listeners.
struct Running {
    frame: FrameSlot,
    _resize: EventListener,
    _pointer: EventListener,
    debug: bool,
}

impl Drop for Running {
    fn drop(&mut self) {
        // the pending frame's closure holds a clone of `frame`; taking it
        // cancels the request and breaks that cycle
        self.frame.borrow_mut().take();
        if self.debug {
            log!("starfield: stopped");
        }
    }
}

fn start(canvas: HtmlCanvasElement, cfg: &SiteConfig) -> Result<Running> {
    let win = window().ok_or(SiteError::MissingWindow)?;
    let ctx = context_2d(&canvas)?;

    let settings = FieldSettings {
        count: cfg.particle_count,
        speed: cfg.particle_speed,
        spread: cfg.particle_spread,
        pointer_damping: cfg.pointer_damping,
    };
    let field = ParticleField::new(settings, js_sys::Math::random);
    let scene = Rc::new(RefCell::new(Scene { field, canvas, ctx }));
    scene.borrow_mut().sync_size();

    let resize = {
        let scene = scene.clone();
        EventListener::new(&win, "resize", move |_| scene.borrow_mut().sync_size())
    };

    let pointer = {
        let scene = scene.clone();
        EventListener::new(&win, "pointermove", move |e| {
            let Some(e) = e.dyn_ref::<PointerEvent>() else { return; };
            let mut scene = scene.borrow_mut();
            let rect = scene.canvas.get_bounding_client_rect();
            let x = e.client_x() as f64 - rect.left();
            let y = e.client_y() as f64 - rect.top();
            scene.field.set_pointer(x, y);
        })
    };

    let frame: FrameSlot = Rc::new(RefCell::new(None));
    schedule(frame.clone(), scene);

    if cfg.debug {
        log!(format!("starfield: running with {} particles", cfg.particle_count));
    }
    Ok(Running {
        frame,
        _resize: resize,
        _pointer: pointer,
        debug: cfg.debug,
    })
}

/// Decorative canvas that fills its parent. Purely visual; hidden from
/// assistive tech.
#[function_component(Starfield)]
pub fn starfield() -> Html {
    let cfg = use_site_config();
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();
        use_effect_with(cfg, move |cfg| {
            let running = canvas_ref
                .cast::<HtmlCanvasElement>()
                .map(|canvas| match start(canvas, cfg) {
                    Ok(r) => r,
                    Err(e) => panic!("starfield: {e}"),
                });
            move || drop(running)
        });
    }

    html! {
        <canvas ref={canvas_ref} class="starfield" aria-hidden="true"></canvas>
    }
}
