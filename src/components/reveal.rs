use gloo::console::warn;
use web_sys::Element;
use yew::prelude::*;

use crate::components::use_site_config;
use crate::components::visibility::observe_once;

/// `true` once `node` has scrolled into view. Never goes back to `false`.
#[hook]
pub fn use_reveal(node: NodeRef) -> bool {
    let cfg = use_site_config();
    let visible = use_state(|| false);

    {
        let visible = visible.clone();
        use_effect_with(cfg, move |cfg| {
            let watch = if *visible {
                None
            } else {
                node.cast::<Element>().and_then(|el| {
                    let shown = visible.clone();
                    match observe_once(&el, cfg.reveal_threshold, move || shown.set(true)) {
                        Ok(w) => Some(w),
                        Err(e) => {
                            warn!(format!("reveal: no intersection observer ({e:?})"));
                            visible.set(true);
                            None
                        }
                    }
                })
            };
            move || drop(watch)
        });
    }

    *visible
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub class: Classes,
    /// Seconds to hold the entrance once it starts; staggers list items.
    #[prop_or_default]
    pub delay: f64,
    #[prop_or_default]
    pub children: Html,
}

/// Block that fades up the first time it scrolls into view.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let visible = use_reveal(node.clone());
    let style = (props.delay > 0.0).then(|| format!("animation-delay: {:.2}s;", props.delay));

    html! {
        <div
            ref={node}
            class={classes!(props.class.clone(), "reveal", visible.then_some("is-visible"))}
            style={style}
        >
            { props.children.clone() }
        </div>
    }
}
