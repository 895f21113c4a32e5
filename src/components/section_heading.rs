use yew::prelude::*;

use crate::components::reveal::use_reveal;

#[derive(Properties, PartialEq)]
pub struct SectionHeadingProps {
    pub title: AttrValue,
    #[prop_or_default]
    pub subtitle: Option<AttrValue>,
    #[prop_or_default]
    pub light: bool,
}

#[function_component(SectionHeading)]
pub fn section_heading(props: &SectionHeadingProps) -> Html {
    let node = use_node_ref();
    let visible = use_reveal(node.clone());
    let tone = if props.light { "light" } else { "dark" };
    let shown = visible.then_some("is-visible");
    html! {
        <div ref={node} class={classes!("section-heading", tone)}>
            <h2 class={classes!("reveal", shown)}>{ props.title.clone() }</h2>
            if let Some(sub) = props.subtitle.clone() {
                <p class={classes!("reveal", shown)} style="animation-delay: 0.1s;">{ sub }</p>
            }
            <div class="rule"></div>
        </div>
    }
}
