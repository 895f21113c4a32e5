use web_sys::HtmlElement;
use yew::prelude::*;

use crate::anim::tilt::{Rect, Tilt};
use crate::components::use_site_config;

#[derive(Properties, PartialEq)]
pub struct TiltCardProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Html,
}

/// Tilts its children toward the pointer and snaps back on leave.
#[function_component(TiltCard)]
pub fn tilt_card(props: &TiltCardProps) -> Html {
    let cfg = use_site_config();
    let node = use_node_ref();
    let tilt = use_state(|| Tilt::NEUTRAL);

    let on_move = {
        let node = node.clone();
        let tilt = tilt.clone();
        let (max_deg, lift) = (cfg.tilt_max_deg, cfg.tilt_lift_px);
        Callback::from(move |e: MouseEvent| {
            let Some(el) = node.cast::<HtmlElement>() else { return; };
            let r = el.get_bounding_client_rect();
            let rect = Rect {
                left: r.left(),
                top: r.top(),
                width: r.width(),
                height: r.height(),
            };
            tilt.set(Tilt::from_pointer(
                e.client_x() as f64,
                e.client_y() as f64,
                rect,
                max_deg,
                lift,
            ));
        })
    };

    let on_leave = {
        let tilt = tilt.clone();
        Callback::from(move |_: MouseEvent| tilt.set(Tilt::NEUTRAL))
    };

    html! {
        <div
            ref={node}
            class={classes!("tilt-card", props.class.clone())}
            style={tilt.to_css()}
            onmousemove={on_move}
            onmouseleave={on_leave}
        >
            { props.children.clone() }
        </div>
    }
}
