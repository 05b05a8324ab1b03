// AIRATH Landing Page — Leptos 0.8 Edition

pub mod dom;
pub mod sections;
pub mod tech;

use leptos::prelude::*;
use sections::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <Loader />
        <Nav />
        <Hero />
        <TechDeepDive />
        <HowItWorks />
        <About />
        <Footer />
    }
}

/// Install the panic hook and logger, then mount the page.
pub fn mount() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    log::info!("airath-landing {} mounting", env!("CARGO_PKG_VERSION"));
    leptos::mount::mount_to_body(App);
}
