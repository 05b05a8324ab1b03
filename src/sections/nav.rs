//! Fixed glass navbar. Picks up the `scrolled` variant once the page moves
//! past a small offset.

use leptos::prelude::*;

use super::BRAND;
use crate::dom;

/// Offset in pixels beyond which the nav switches to its scrolled variant.
pub const NAV_SCROLL_THRESHOLD: f64 = 50.0;

/// Strictly greater than the threshold: an offset of exactly 50 keeps the
/// transparent nav.
fn scrolled(offset: f64) -> bool {
    offset > NAV_SCROLL_THRESHOLD
}

#[component]
pub fn Nav() -> impl IntoView {
    let (nav_scrolled, set_nav_scrolled) = signal(false);

    // Passive listener, recomputed on every scroll event; the work is O(1)
    // so no debounce is needed.
    Effect::new(move |_| -> Option<dom::ListenerHandle> {
        let window = web_sys::window()?;
        Some(dom::ListenerHandle::listen_passive(
            window.as_ref(),
            "scroll",
            move |_| {
                let offset = web_sys::window()
                    .and_then(|window| window.scroll_y().ok())
                    .unwrap_or(0.0);
                set_nav_scrolled.set(scrolled(offset));
            },
        ))
    });

    view! {
        <nav
            class=move || if nav_scrolled.get() { "glass-nav scrolled" } else { "glass-nav" }
            aria-label="Main Navigation"
        >
            <div class="nav-container">
                <div class="logo">{BRAND}</div>
                <ul class="nav-links">
                    <li><a href="#tech-deep-dive">"Technology"</a></li>
                    <li><a href="#how-it-works">"How it works"</a></li>
                    <li><a href="#about">"About"</a></li>
                </ul>
                <div class="nav-cta">
                    <a href="tel:+919346561315" class="btn-primary">"Inquire Now"</a>
                </div>
            </div>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn offsets_up_to_the_threshold_keep_the_transparent_nav() {
        assert_eq!(scrolled(0.0), false);
        assert_eq!(scrolled(49.9), false);
        assert_eq!(scrolled(50.0), false);
    }

    #[test]
    fn offsets_past_the_threshold_switch_the_variant() {
        assert_eq!(scrolled(50.1), true);
        assert_eq!(scrolled(51.0), true);
        assert_eq!(scrolled(120.0), true);
    }
}
