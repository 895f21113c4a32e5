//! Page sections, top to bottom. Each one reads straight from `HUB_CONTENT`.

use gloo::console::log;
use yew::prelude::*;

use crate::components::counter::AnimatedCounter;
use crate::components::navbar::Brand;
use crate::components::reveal::Reveal;
use crate::components::section_heading::SectionHeading;
use crate::components::starfield::Starfield;
use crate::components::tilt_card::TiltCard;
use crate::components::{use_site_config, ExternalLink};
use crate::content::{current_leader, initial, HERO_IMAGE, HUB_CONTENT, LOCATION, NAV_LINKS, SPOTLIGHT_IMAGE};

fn stagger(i: usize, step: f64) -> f64 {
    i as f64 * step
}

#[function_component(Hero)]
pub fn hero() -> Html {
    let hero = &HUB_CONTENT.hero;
    let spotlight = current_leader().map(|l| {
        let role = l.role.split(" (").next().unwrap_or(l.role);
        html! {
            <TiltCard class="spotlight">
                <img src={SPOTLIGHT_IMAGE} alt="Curator Spotlight" referrerpolicy="no-referrer" />
                <div class="spotlight-shade"></div>
                <div class="spotlight-caption">
                    <p class="eyebrow">{ "Current Leadership" }</p>
                    <h3>{ l.name }</h3>
                    <p>{ format!("{} ({})", role, l.years) }</p>
                </div>
            </TiltCard>
        }
    });

    html! {
        <section class="hero">
            <div class="hero-bg">
                <img src={HERO_IMAGE} alt="Hero Background" referrerpolicy="no-referrer" />
                <div class="hero-gradient"></div>
                <Starfield />
            </div>

            <div class="container hero-body">
                <div class="hero-grid">
                    <div class="hero-copy intro">
                        <span class="badge">{ "World Economic Forum Initiative" }</span>
                        <h1>{ hero.title }</h1>
                        <p class="hero-sub">{ hero.subheading }</p>
                        <p class="hero-tagline">{ hero.tagline }</p>
                        <div class="hero-actions">
                            <a href="#projects" class="btn btn-primary">{ hero.primary_btn }{ " →" }</a>
                            <ExternalLink href={hero.secondary_link} class="btn btn-glass">
                                { hero.secondary_btn }{ " ↗" }
                            </ExternalLink>
                        </div>
                    </div>
                    <div class="hero-visual intro" style="animation-delay: 0.4s;">
                        { for spotlight }
                    </div>
                </div>

                <div class="partner-strip intro" style="animation-delay: 0.8s;">
                    <p class="eyebrow center">{ "Institutional Partners & Collaborators" }</p>
                    <div class="partner-row">
                        { for HUB_CONTENT.collaborations.iter().map(|p| html! {
                            <div key={*p} class="partner">
                                <div class="partner-mark">{ initial(p) }</div>
                                <span>{ *p }</span>
                            </div>
                        })}
                    </div>
                </div>
            </div>

            <div class="scroll-hint" aria-hidden="true"><div class="scroll-hint-dot"></div></div>
        </section>
    }
}

#[function_component(AboutGlobal)]
pub fn about_global() -> Html {
    let about = &HUB_CONTENT.about_global;
    html! {
        <section id="about" class="section tint">
            <div class="container two-col">
                <div>
                    <SectionHeading title={about.title} subtitle={Some(AttrValue::from(about.description))} />
                    <div class="stats">
                        { for about.stats.iter().map(|s| html! {
                            <div key={s.label} class="stat">
                                <AnimatedCounter value={s.value} class="stat-value" />
                                <div class="stat-label">{ s.label }</div>
                            </div>
                        })}
                    </div>
                    <ul class="checklist">
                        { for about.details.iter().map(|d| html! { <li>{ *d }</li> }) }
                    </ul>
                    <ExternalLink href={about.learn_more_link} class="text-link">
                        { "Learn More About Global Shapers →" }
                    </ExternalLink>
                </div>

                <div class="card">
                    <h3>{ "Governance & Leadership" }</h3>
                    <p class="eyebrow">{ "Leadership Roles" }</p>
                    <div class="chips">
                        { for about.leadership.iter().map(|r| html! { <span key={*r} class="chip">{ *r }</span> }) }
                    </div>
                    <p class="eyebrow">{ "Global Governance" }</p>
                    <p class="governance">{ about.governance }</p>
                    <p class="eyebrow">{ "Global Gatherings" }</p>
                    <ul class="dots">
                        { for about.gatherings.iter().map(|g| html! { <li key={*g}>{ *g }</li> }) }
                    </ul>
                </div>
            </div>
        </section>
    }
}

#[function_component(QuettaHub)]
pub fn quetta_hub() -> Html {
    let q = &HUB_CONTENT.about_quetta;
    let subtitle = format!("Founded in {} by Founding Curator {}.", q.founded, q.founding_curator);
    html! {
        <section id="quetta" class="section">
            <div class="container">
                <SectionHeading title="Global Shapers Quetta Hub" subtitle={Some(AttrValue::from(subtitle))} />
                <div class="quetta-grid">
                    <div class="card dark mission">
                        <h3>{ "Our Mission" }</h3>
                        <p class="muted">{ "To transform Quetta and empower youth through focused impact areas:" }</p>
                        <ul class="dots">
                            { for q.mission.iter().map(|m| html! { <li key={*m}>{ *m }</li> }) }
                        </ul>
                    </div>
                    <div class="tiers">
                        { for q.membership.iter().map(|t| html! {
                            <div key={t.kind} class="tier">
                                <div class="tier-head">
                                    <h4>{ t.kind }</h4>
                                    if let Some(n) = t.count {
                                        <span class="tier-count">{ n.to_string() }</span>
                                    }
                                </div>
                                <p>{ t.desc }</p>
                            </div>
                        })}
                        <div class="elections">
                            <div>
                                <h4>{ "Democratic Election System" }</h4>
                                <p>{ q.elections.desc }</p>
                            </div>
                            <div class="chips">
                                { for q.elections.details.iter().map(|d| html! { <span key={*d} class="chip glass">{ *d }</span> }) }
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[function_component(LeadershipTimeline)]
pub fn leadership_timeline() -> Html {
    let charter = &HUB_CONTENT.charter;
    html! {
        <section id="leadership" class="section tint">
            <div class="container">
                <SectionHeading
                    title="Leadership Timeline"
                    subtitle={Some(AttrValue::from("The visionaries who have led the Quetta Hub since its inception."))}
                />
                <div class="timeline">
                    <div class="timeline-line"></div>
                    { for HUB_CONTENT.leadership_timeline.iter().enumerate().map(|(i, l)| html! {
                        <Reveal key={l.years} class="timeline-card" delay={stagger(i, 0.1)}>
                            <div class="timeline-index">{ (i + 1).to_string() }</div>
                            <div class="timeline-years">{ l.years }</div>
                            <h4>{ l.name }</h4>
                            <p>{ l.role }</p>
                        </Reveal>
                    })}
                </div>
                <div class="charter card">
                    <div class="charter-copy">
                        <div class="charter-icon">{ "⚖" }</div>
                        <div>
                            <h4>{ "Hub Governance Charter" }</h4>
                            <p>{ charter.desc }</p>
                        </div>
                    </div>
                    <ExternalLink href={charter.link} class="btn btn-dark">
                        { "View Governance Charter ↗" }
                    </ExternalLink>
                </div>
            </div>
        </section>
    }
}

#[function_component(ImpactAreas)]
pub fn impact_areas() -> Html {
    html! {
        <section id="impact" class="section">
            <div class="container">
                <SectionHeading
                    title="Key Impact Areas"
                    subtitle={Some(AttrValue::from("Aligned with the United Nations Sustainable Development Goals (SDGs) and World Economic Forum priorities."))}
                />
                <div class="impact-grid">
                    { for HUB_CONTENT.impact_areas.iter().enumerate().map(|(i, a)| html! {
                        <Reveal key={a.title} class="impact-card" delay={stagger(i, 0.05)}>
                            <div class="impact-icon" aria-hidden="true">{ a.icon.glyph() }</div>
                            <h4>{ a.title }</h4>
                            <div class="rule small"></div>
                        </Reveal>
                    })}
                </div>
            </div>
        </section>
    }
}

#[function_component(Projects)]
pub fn projects() -> Html {
    html! {
        <section id="projects" class="section dark">
            <div class="container">
                <SectionHeading
                    title="Major Projects"
                    subtitle={Some(AttrValue::from("Transforming vision into tangible impact across Balochistan."))}
                    light={true}
                />
                <div class="project-grid">
                    { for HUB_CONTENT.projects.iter().enumerate().map(|(i, p)| html! {
                        <Reveal key={p.id} class="project-card" delay={stagger(i, 0.1)}>
                            <div class="project-media">
                                <img src={p.image_url()} alt={p.subtitle} referrerpolicy="no-referrer" />
                                <span class="project-tag">{ p.subtitle }</span>
                            </div>
                            <div class="project-body">
                                <h4>{ p.title }</h4>
                                <p class="muted">{ p.desc }</p>
                                <div class="chips">
                                    { for p.stats.iter().map(|s| html! { <span key={*s} class="chip outline">{ *s }</span> }) }
                                </div>
                                <p class="leads"><strong>{ "Leads:" }</strong>{ " " }{ p.leads }</p>
                            </div>
                        </Reveal>
                    })}
                </div>
            </div>
        </section>
    }
}

#[function_component(International)]
pub fn international() -> Html {
    html! {
        <section class="section">
            <div class="container two-col">
                <div>
                    <SectionHeading
                        title="International Engagement"
                        subtitle={Some(AttrValue::from("Connecting Quetta to the global stage through strategic partnerships and summits."))}
                    />
                    <div class="engagement-list">
                        { for HUB_CONTENT.international.iter().enumerate().map(|(i, e)| html! {
                            <Reveal key={e.title} class="engagement" delay={stagger(i, 0.1)}>
                                <div class="engagement-icon" aria-hidden="true">{ "🌐" }</div>
                                <div>
                                    <h4>{ e.title }</h4>
                                    <p>{ e.desc }</p>
                                </div>
                            </Reveal>
                        })}
                    </div>
                </div>
                <div class="card tint">
                    <h3>{ "Annual & Regional Engagements" }</h3>
                    <div class="engagement-grid">
                        { for HUB_CONTENT.engagements.iter().map(|e| html! {
                            <div key={*e} class="engagement-chip">{ *e }</div>
                        })}
                    </div>
                </div>
            </div>
        </section>
    }
}

#[function_component(Collaborations)]
pub fn collaborations() -> Html {
    html! {
        <section class="section tint">
            <div class="container center">
                <h2>{ "Our Collaborations" }</h2>
                <p class="muted">{ "We work with leading institutions to amplify our impact in Balochistan." }</p>
                <div class="collab-row">
                    { for HUB_CONTENT.collaborations.iter().map(|p| html! {
                        <div key={*p} class="collab">
                            <div class="collab-mark">{ initial(p) }</div>
                            <span>{ *p }</span>
                        </div>
                    })}
                </div>
            </div>
        </section>
    }
}

#[function_component(Vision)]
pub fn vision() -> Html {
    html! {
        <section class="section vision">
            <div class="container narrow center">
                <div class="vision-icon" aria-hidden="true">{ "🌐" }</div>
                <h2>{ format!("\u{201c}{}\u{201d}", HUB_CONTENT.vision) }</h2>
                <div class="rule light"></div>
            </div>
        </section>
    }
}

#[function_component(Contact)]
pub fn contact() -> Html {
    let cfg = use_site_config();
    let socials = &HUB_CONTENT.socials;

    // no backend: keep the browser from navigating and send nothing
    let on_submit = {
        let debug = cfg.debug;
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if debug {
                log!("contact: submission suppressed");
            }
        })
    };

    let profiles = [
        ("LinkedIn", "in", socials.linkedin),
        ("Instagram", "ig", socials.instagram),
        ("Facebook", "f", socials.facebook),
        ("X", "x", socials.x),
    ];

    html! {
        <section id="contact" class="section">
            <div class="container two-col">
                <div>
                    <SectionHeading
                        title="Get in Touch"
                        subtitle={Some(AttrValue::from("Have questions or want to collaborate? Reach out to the Quetta Hub team."))}
                    />
                    <div class="contact-lines">
                        <div class="contact-line">
                            <div class="contact-icon" aria-hidden="true">{ "✉" }</div>
                            <div>
                                <p class="eyebrow">{ "Email Us" }</p>
                                <a href={format!("mailto:{}", socials.email)}>{ socials.email }</a>
                            </div>
                        </div>
                        <div class="contact-line">
                            <div class="contact-icon" aria-hidden="true">{ "📍" }</div>
                            <div>
                                <p class="eyebrow">{ "Location" }</p>
                                <p class="strong">{ LOCATION }</p>
                            </div>
                        </div>
                    </div>
                    <p class="eyebrow">{ "Follow Our Journey" }</p>
                    <div class="social-row">
                        { for profiles.iter().map(|(name, mark, href)| html! {
                            <a key={*name} href={*href} class="social" target="_blank" rel="noopener noreferrer" aria-label={*name}>
                                { *mark }
                            </a>
                        })}
                    </div>
                </div>

                <div class="card tint">
                    <form class="contact-form" onsubmit={on_submit}>
                        <div class="form-row">
                            <label>{ "Full Name" }<input type="text" placeholder="John Doe" /></label>
                            <label>{ "Email Address" }<input type="email" placeholder="john@example.com" /></label>
                        </div>
                        <label>{ "Subject" }<input type="text" placeholder="How can we help?" /></label>
                        <label>{ "Message" }<textarea rows="5" placeholder="Your message here..." /></label>
                        <button type="submit" class="btn btn-primary btn-block">{ "Send Message ➤" }</button>
                    </form>
                </div>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub year: i32,
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    let socials = &HUB_CONTENT.socials;
    let platforms = [
        ("LinkedIn", socials.linkedin),
        ("Instagram", socials.instagram),
        ("Facebook", socials.facebook),
        ("X (Twitter)", socials.x),
        ("TikTok", socials.tiktok),
    ];

    html! {
        <footer class="footer">
            <div class="container footer-grid">
                <div class="footer-about">
                    <Brand />
                    <p class="muted">
                        { "An initiative of the World Economic Forum. Locally rooted, globally connected, youth-led, and impact-driven hub in Balochistan, Pakistan." }
                    </p>
                    <div class="footer-links">
                        <ExternalLink href={socials.linktree} class="text-link">{ "Linktree" }</ExternalLink>
                        <ExternalLink href={socials.forum} class="text-link">{ "Forum Spaces" }</ExternalLink>
                    </div>
                </div>
                <div>
                    <h4>{ "Quick Links" }</h4>
                    <ul>
                        { for NAV_LINKS.iter().map(|l| html! {
                            <li key={l.name}><a href={l.href}>{ "› " }{ l.name }</a></li>
                        })}
                    </ul>
                </div>
                <div>
                    <h4>{ "Official Platforms" }</h4>
                    <ul>
                        { for platforms.iter().map(|(name, href)| html! {
                            <li key={*name}><ExternalLink href={*href}>{ *name }</ExternalLink></li>
                        })}
                    </ul>
                </div>
            </div>
            <div class="container footer-bottom">
                <p>{ format!("© {} {}. All rights reserved.", props.year, HUB_CONTENT.hero.title) }</p>
                <div class="footer-legal">
                    <a href="#">{ "Privacy Policy" }</a>
                    <a href="#">{ "Terms of Service" }</a>
                </div>
            </div>
        </footer>
    }
}
