use yew::prelude::*;

use crate::components::navbar::Navbar;
use crate::components::scroll_progress::ScrollProgress;
use crate::components::sections::{
    AboutGlobal, Collaborations, Contact, Footer, Hero, ImpactAreas, International,
    LeadershipTimeline, Projects, QuettaHub, Vision,
};
use crate::config::SiteConfig;

#[derive(Properties, PartialEq, Clone)]
pub struct AppProps {
    /// Copyright year shown in the footer.
    pub year: i32,
    #[prop_or_default]
    pub config: SiteConfig,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    html! {
        <ContextProvider<SiteConfig> context={props.config.clone()}>
            <div class="page">
                <ScrollProgress />
                <Navbar />
                <main>
                    <Hero />
                    <AboutGlobal />
                    <QuettaHub />
                    <LeadershipTimeline />
                    <ImpactAreas />
                    <Projects />
                    <International />
                    <Collaborations />
                    <Vision />
                    <Contact />
                </main>
                <Footer year={props.year} />
            </div>
        </ContextProvider<SiteConfig>>
    }
}
