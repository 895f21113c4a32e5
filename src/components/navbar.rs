use gloo::events::EventListener;
use web_sys::window;
use yew::prelude::*;

use crate::components::{use_site_config, ExternalLink};
use crate::content::{HUB_CONTENT, NAV_LINKS};

#[function_component(Brand)]
pub fn brand() -> Html {
    html! {
        <div class="brand">
            <div class="brand-mark">{ "Q" }</div>
            <span class="brand-name">{ "Global Shapers " }<span class="accent">{ "Quetta" }</span></span>
        </div>
    }
}

/// Fixed top navigation. Compacts once the page is scrolled past
/// `nav_scrolled_px`; below the `md` breakpoint the links move into an overlay
/// menu.
#[function_component(Navbar)]
pub fn navbar() -> Html {
    let cfg = use_site_config();
    let scrolled = use_state(|| false);
    let menu_open = use_state(|| false);

    {
        let scrolled = scrolled.clone();
        use_effect_with(cfg, move |cfg| {
            let limit = cfg.nav_scrolled_px;
            let listener = window().map(|win| {
                let read = win.clone();
                let update = move || {
                    let y = read.scroll_y().unwrap_or(0.0);
                    scrolled.set(y > limit);
                };
                update();
                EventListener::new(&win, "scroll", move |_| update())
            });
            move || drop(listener)
        });
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };
    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    html! {
        <>
            <div class="nav-shell">
                <nav class={classes!("navbar", scrolled.then_some("scrolled"))}>
                    <Brand />
                    <div class="nav-links">
                        { for NAV_LINKS.iter().map(|l| html! {
                            <a key={l.name} href={l.href}>{ l.name }</a>
                        })}
                    </div>
                    <div class="nav-actions">
                        <ExternalLink href={HUB_CONTENT.hero.secondary_link} class="btn btn-primary btn-small join">
                            { "Join Us" }
                        </ExternalLink>
                        <button
                            class="menu-toggle"
                            aria-label={if *menu_open { "Close menu" } else { "Open menu" }}
                            onclick={toggle_menu}
                        >
                            { if *menu_open { "✕" } else { "☰" } }
                        </button>
                    </div>
                </nav>
            </div>

            if *menu_open {
                <div class="menu-backdrop" onclick={close_menu.clone()}></div>
                <div class="mobile-menu">
                    { for NAV_LINKS.iter().map(|l| html! {
                        <a key={l.name} href={l.href} onclick={close_menu.clone()}>
                            { l.name }<span class="chevron">{ "›" }</span>
                        </a>
                    })}
                    <div class="mobile-menu-footer" onclick={close_menu.clone()}>
                        <ExternalLink href={HUB_CONTENT.hero.secondary_link} class="btn btn-primary btn-block">
                            { "Official Platform ↗" }
                        </ExternalLink>
                    </div>
                </div>
            }
        </>
    }
}
