use quetta_hub_site::{App, AppProps, SiteConfig, HUB_CONTENT};
use yew::ServerRenderer;

async fn render_page() -> String {
    ServerRenderer::<App>::with_props(|| AppProps {
        year: 2026,
        config: SiteConfig::default(),
    })
    .hydratable(false)
    .render()
    .await
}

fn escape_text(s: &str) -> String {
    s.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

/// Byte offsets of `needle` as a complete text node.
fn text_node_positions(html: &str, needle: &str) -> Vec<usize> {
    let pattern = format!(">{}<", escape_text(needle));
    html.match_indices(&pattern).map(|(i, _)| i).collect()
}

fn assert_once_each_in_order(html: &str, items: &[&str]) {
    let mut last = 0;
    for item in items {
        let hits = text_node_positions(html, item);
        assert_eq!(hits.len(), 1, "{item:?} rendered {} times", hits.len());
        assert!(hits[0] > last, "{item:?} rendered out of order");
        last = hits[0];
    }
}

#[tokio::test]
async fn impact_areas_render_once_in_order() {
    let html = render_page().await;
    let titles: Vec<&str> = HUB_CONTENT.impact_areas.iter().map(|a| a.title).collect();
    assert_eq!(titles.len(), 6);
    assert_once_each_in_order(&html, &titles);
}

#[tokio::test]
async fn projects_render_once_in_order() {
    let html = render_page().await;
    let titles: Vec<&str> = HUB_CONTENT.projects.iter().map(|p| p.title).collect();
    assert_eq!(titles.len(), 5);
    assert_once_each_in_order(&html, &titles);
}

#[tokio::test]
async fn leadership_timeline_renders_once_in_order() {
    let html = render_page().await;
    let years: Vec<&str> = HUB_CONTENT.leadership_timeline.iter().map(|l| l.years).collect();
    let roles: Vec<&str> = HUB_CONTENT.leadership_timeline.iter().map(|l| l.role).collect();
    assert_eq!(years.len(), 4);
    assert_once_each_in_order(&html, &years);
    assert_eq!(html.matches("class=\"timeline-card").count(), 4);
    for role in roles.iter().filter(|r| **r != "Curator") {
        assert_eq!(text_node_positions(&html, role).len(), 1, "{role:?}");
    }
}

#[tokio::test]
async fn counters_start_at_zero_with_suffix() {
    let html = render_page().await;
    assert!(html.contains(">0+<"));
    assert!(!html.contains(">15,000+<"));
}

#[tokio::test]
async fn sections_and_effects_are_present() {
    let html = render_page().await;
    for id in ["about", "quetta", "leadership", "impact", "projects", "contact"] {
        assert_eq!(html.matches(&format!("id=\"{id}\"")).count(), 1, "section #{id}");
    }
    assert!(html.contains("class=\"starfield\""));
    assert!(html.contains("class=\"scroll-progress\""));
    assert!(html.contains("rotateX(0.00deg) rotateY(0.00deg)"));
    assert!(html.contains("© 2026"));
}

#[tokio::test]
async fn external_links_open_in_new_context() {
    let html = render_page().await;
    let charter = format!("href=\"{}\"", escape_text(HUB_CONTENT.charter.link));
    let at = html.find(&charter).expect("charter link rendered");
    let tag_end = at + html[at..].find('>').unwrap();
    let tag_start = html[..at].rfind('<').unwrap();
    let tag = &html[tag_start..tag_end];
    assert!(tag.contains("target=\"_blank\""));
    assert!(tag.contains("rel=\"noopener noreferrer\""));
}

#[tokio::test]
async fn scroll_reveals_start_hidden() {
    let html = render_page().await;
    for card in ["timeline-card", "impact-card", "project-card", "engagement"] {
        let hidden = html.matches(&format!("class=\"{card} reveal\"")).count();
        assert!(hidden > 0, "{card} has no hidden reveal wrapper");
    }
    assert!(html.contains("<h2 class=\"reveal\">"));
    assert!(!html.contains("is-visible"));
    // the hero animates on load instead
    assert!(html.contains("class=\"hero-copy intro\""));
}
