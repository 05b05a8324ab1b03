//! Timed intro overlay. Covers the page for [`LOADER_DURATION_MS`], then
//! slides away and unlocks body scrolling.

use std::time::Duration;

use leptos::prelude::*;

/// How long the intro overlay stays on screen.
pub const LOADER_DURATION_MS: u64 = 2400;

/// Capability for unlocking page-level scrolling. The stylesheet ships the
/// body with `overflow: hidden`; the loader owns the transition back.
pub struct PageScroll {
    body: Option<web_sys::HtmlElement>,
}

impl PageScroll {
    pub fn from_document() -> Self {
        Self::new(
            web_sys::window()
                .and_then(|window| window.document())
                .and_then(|document| document.body()),
        )
    }

    pub fn new(body: Option<web_sys::HtmlElement>) -> Self {
        Self { body }
    }

    /// Re-enable vertical scrolling, keeping horizontal overflow clipped.
    /// Silently a no-op when the document has no body.
    pub fn unlock(&self) {
        let Some(body) = &self.body else {
            return;
        };
        let style = body.style();
        let _ = style.set_property("overflow", "visible");
        let _ = style.set_property("overflow-x", "hidden");
    }
}

/// Inline transform for the overlay: parked on screen while visible, slid
/// fully above the viewport once hidden.
fn overlay_transform(visible: bool) -> &'static str {
    if visible {
        "translateY(0)"
    } else {
        "translateY(-100%)"
    }
}

#[component]
pub fn Loader() -> impl IntoView {
    let (visible, set_visible) = signal(true);

    // One-shot, irreversible. Cancelling after the timer fired is a no-op;
    // unmounting before it fires leaves the scroll lock untouched.
    let timer = set_timeout_with_handle(
        move || {
            set_visible.set(false);
            PageScroll::from_document().unlock();
            log::debug!("intro loader done, page scroll unlocked");
        },
        Duration::from_millis(LOADER_DURATION_MS),
    )
    .ok();
    on_cleanup(move || {
        if let Some(timer) = timer {
            timer.clear();
        }
    });

    view! {
        <div id="loader" style:transform=move || overlay_transform(visible.get())>
            <div class="loader-content">
                <span class="intro-word">"Integrated."</span>
                <span class="intro-word">"Intelligent."</span>
                <span class="intro-word">"Invisible."</span>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn overlay_parks_then_slides_out() {
        assert_eq!(overlay_transform(true), "translateY(0)");
        assert_eq!(overlay_transform(false), "translateY(-100%)");
    }

    #[test]
    fn unlock_without_a_body_is_a_no_op() {
        PageScroll::new(None).unlock();
    }

    #[test]
    fn loader_runs_for_2400_ms() {
        assert_eq!(LOADER_DURATION_MS, 2400);
    }
}
