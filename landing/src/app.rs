use std::sync::Arc;

use leptos::prelude::*;

use crate::config::SiteConfig;
use crate::navigate::Navigation;
use crate::sections::{
    Blog, Differentiation, Features, Footer, Hero, Layout, Pricing, Testimonials,
};

/// The whole page. Config and navigation come from context when a caller
/// (a test or the prerenderer) provided them, otherwise the embedded config
/// and the browser navigator are installed.
#[component]
pub fn App() -> impl IntoView {
    if use_context::<Arc<SiteConfig>>().is_none() {
        provide_context(Arc::new(SiteConfig::load()));
    }
    if use_context::<Navigation>().is_none() {
        provide_context(Navigation::browser());
    }

    view! {
        <Layout>
            <Hero />
            <Pricing />
            <Features />
            <Differentiation />
            <Testimonials />
            <Blog />
            <Footer />
        </Layout>
    }
}
