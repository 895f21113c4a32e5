use std::cell::RefCell;
use std::rc::Rc;

use gloo::console::{log, warn};
use gloo::render::{request_animation_frame, AnimationFrame};
use wasm_bindgen::JsValue;
use web_sys::Element;
use yew::prelude::*;

use crate::anim::counter::{CounterAnimation, CounterTarget};
use crate::components::use_site_config;
use crate::components::visibility::{observe_once, VisibilityWatch};
use crate::config::SiteConfig;

type FrameSlot = Rc<RefCell<Option<AnimationFrame>>>;

fn run_frames(slot: FrameSlot, anim: Rc<RefCell<CounterAnimation>>, text: UseStateHandle<String>) {
    let next = slot.clone();
    let handle = request_animation_frame(move |_ts| {
        let now = js_sys::Date::now();
        let (shown, done) = {
            let a = anim.borrow();
            (a.display_at(now), a.is_finished(now))
        };
        text.set(shown);
        if done {
            next.borrow_mut().take();
        } else {
            run_frames(next, anim, text);
        }
    });
    *slot.borrow_mut() = Some(handle);
}

struct Watch {
    frame: FrameSlot,
    _visibility: VisibilityWatch,
}

impl Drop for Watch {
    fn drop(&mut self) {
        self.frame.borrow_mut().take();
    }
}

fn watch(el: &Element, label: &str, cfg: &SiteConfig, text: UseStateHandle<String>) -> Result<Watch, JsValue> {
    let anim = Rc::new(RefCell::new(CounterAnimation::new(label, cfg.counter_duration_ms)));
    let frame: FrameSlot = Rc::new(RefCell::new(None));
    let debug = cfg.debug;

    let on_visible = {
        let frame = frame.clone();
        move || {
            if !anim.borrow_mut().trigger(js_sys::Date::now()) {
                return;
            }
            if debug {
                log!(format!("counter: {} triggered", anim.borrow().target().final_display()));
            }
            run_frames(frame, anim, text);
        }
    };
    let visibility = observe_once(el, cfg.counter_threshold, on_visible)?;

    Ok(Watch {
        frame,
        _visibility: visibility,
    })
}

#[derive(Properties, PartialEq)]
pub struct AnimatedCounterProps {
    /// Display form such as `"15,000+"`.
    pub value: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

/// Counts up from zero the first time it scrolls into view, then stays put.
#[function_component(AnimatedCounter)]
pub fn animated_counter(props: &AnimatedCounterProps) -> Html {
    let cfg = use_site_config();
    let node = use_node_ref();
    let text = use_state(|| CounterTarget::parse(&props.value).display(0));

    {
        let node = node.clone();
        let text = text.clone();
        use_effect_with((props.value.clone(), cfg), move |(value, cfg)| {
            let running = node.cast::<Element>().and_then(|el| {
                match watch(&el, value, cfg, text.clone()) {
                    Ok(w) => Some(w),
                    Err(e) => {
                        warn!(format!("counter: no intersection observer ({e:?}); showing {value}"));
                        text.set(CounterTarget::parse(value).final_display());
                        None
                    }
                }
            });
            move || drop(running)
        });
    }

    html! {
        <span ref={node} class={classes!("counter", props.class.clone())}>{ (*text).clone() }</span>
    }
}
