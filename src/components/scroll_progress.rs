use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::EventListener;
use gloo::render::{request_animation_frame, AnimationFrame};
use web_sys::{window, Window};
use yew::prelude::*;

use crate::anim::spring::{scroll_ratio, Spring};
use crate::components::use_site_config;

pub fn read_scroll_ratio(win: &Window) -> f64 {
    let scroll_y = win.scroll_y().unwrap_or(0.0);
    let viewport = win
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let total = win
        .document()
        .and_then(|d| d.document_element())
        .map(|el| el.scroll_height() as f64)
        .unwrap_or(0.0);
    scroll_ratio(scroll_y, total, viewport)
}

struct Follow {
    spring: Spring,
    target: f64,
    last_ts: Option<f64>,
    frame: Option<AnimationFrame>,
    fill: UseStateHandle<f64>,
}

fn kick(state: &Rc<RefCell<Follow>>) {
    if state.borrow().frame.is_some() {
        return;
    }
    let next = state.clone();
    let handle = request_animation_frame(move |ts| tick(next, ts));
    state.borrow_mut().frame = Some(handle);
}

fn tick(state: Rc<RefCell<Follow>>, ts: f64) {
    let settled = {
        let mut s = state.borrow_mut();
        // the fired handle is done; dropping it lets `kick` schedule again
        s.frame = None;
        let elapsed = s.last_ts.map_or(0.0, |prev| (ts - prev) / 1000.0);
        s.last_ts = Some(ts);
        let target = s.target;
        let pos = s.spring.advance(target, elapsed);
        s.fill.set(pos);
        s.spring.is_settled(target)
    };
    if settled {
        state.borrow_mut().last_ts = None;
    } else {
        kick(&state);
    }
}

struct Tracker {
    state: Rc<RefCell<Follow>>,
    _scroll: EventListener,
}

impl Drop for Tracker {
    fn drop(&mut self) {
        self.state.borrow_mut().frame.take();
    }
}

/// Thin bar pinned to the top of the viewport whose width follows the page
/// scroll through a spring.
#[function_component(ScrollProgress)]
pub fn scroll_progress() -> Html {
    let cfg = use_site_config();
    let fill = use_state(|| 0.0_f64);

    {
        let fill = fill.clone();
        use_effect_with(cfg, move |cfg| {
            let tracker = window().map(|win| {
                let state = Rc::new(RefCell::new(Follow {
                    spring: Spring::new(cfg.spring_stiffness, cfg.spring_damping),
                    target: read_scroll_ratio(&win),
                    last_ts: None,
                    frame: None,
                    fill,
                }));
                kick(&state);

                let scroll = {
                    let state = state.clone();
                    let win_for_read = win.clone();
                    EventListener::new(&win, "scroll", move |_| {
                        state.borrow_mut().target = read_scroll_ratio(&win_for_read);
                        kick(&state);
                    })
                };
                Tracker { state, _scroll: scroll }
            });
            move || drop(tracker)
        });
    }

    html! {
        <div class="scroll-progress" aria-hidden="true">
            <div class="scroll-progress-fill" style={format!("transform: scaleX({:.4});", *fill)}></div>
        </div>
    }
}
