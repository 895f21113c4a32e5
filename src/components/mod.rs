use yew::prelude::*;

use crate::config::SiteConfig;

pub mod counter;
pub mod navbar;
pub mod reveal;
pub mod scroll_progress;
pub mod section_heading;
pub mod sections;
pub mod starfield;
pub mod tilt_card;
pub mod visibility;

/// Site config from the nearest provider, or the defaults outside one.
#[hook]
pub fn use_site_config() -> SiteConfig {
    use_context::<SiteConfig>().unwrap_or_default()
}

/// Anchor that opens in a new browsing context.
#[derive(Properties, PartialEq)]
pub struct ExternalLinkProps {
    pub href: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Html,
}

#[function_component(ExternalLink)]
pub fn external_link(props: &ExternalLinkProps) -> Html {
    html! {
        <a href={props.href.clone()} class={props.class.clone()} target="_blank" rel="noopener noreferrer">
            { props.children.clone() }
        </a>
    }
}
