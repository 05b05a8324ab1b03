// Landing page sections, one file per region.

/// Brand name used across the page (single source of truth).
pub const BRAND: &str = "AIRATH";

mod about;
mod footer;
mod hero;
mod how_it_works;
mod loader;
mod nav;
mod tech_deep_dive;

pub use about::About;
pub use footer::Footer;
pub use hero::Hero;
pub use how_it_works::HowItWorks;
pub use loader::Loader;
pub use nav::Nav;
pub use tech_deep_dive::TechDeepDive;
