//! Hero section with the "magnetic" headline: the heading tilts toward the
//! pointer, coalesced to at most one transform write per animation frame.

use std::cell::Cell;
use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::dom;

/// Pixels of translation per pixel of pointer offset from viewport center.
const TRANSLATE_FACTOR: f64 = 0.02;
/// Degrees of rotation per pixel of pointer offset from viewport center.
const ROTATE_FACTOR: f64 = 0.01;

/// Transform applied to the headline for a given pointer position.
#[derive(Clone, Copy, Debug, PartialEq)]
struct Tilt {
    shift_x: f64,
    shift_y: f64,
    rotate_x: f64,
    rotate_y: f64,
}

impl Tilt {
    /// No translation, no rotation. Applied on pointer leave.
    const IDENTITY: Tilt = Tilt {
        shift_x: 0.0,
        shift_y: 0.0,
        rotate_x: 0.0,
        rotate_y: 0.0,
    };

    /// Offsets from viewport center, scaled down. The rotation axes are
    /// swapped relative to the translation and the X rotation is
    /// sign-inverted so the heading leans toward the pointer.
    fn from_pointer(x: f64, y: f64, viewport_w: f64, viewport_h: f64) -> Self {
        let dx = x - viewport_w / 2.0;
        let dy = y - viewport_h / 2.0;
        Tilt {
            shift_x: dx * TRANSLATE_FACTOR,
            shift_y: dy * TRANSLATE_FACTOR,
            rotate_x: -dy * ROTATE_FACTOR,
            rotate_y: dx * ROTATE_FACTOR,
        }
    }

    fn to_css(self) -> String {
        format!(
            "translate3d({}px, {}px, 0) rotateX({}deg) rotateY({}deg)",
            unsigned_zero(self.shift_x),
            unsigned_zero(self.shift_y),
            unsigned_zero(self.rotate_x),
            unsigned_zero(self.rotate_y),
        )
    }
}

// -0.0 would render as "-0px"; keep the identity transform literal.
fn unsigned_zero(value: f64) -> f64 {
    if value == 0.0 { 0.0 } else { value }
}

fn apply_headline_transform(headline: NodeRef<leptos::html::H1>, css: &str) {
    let Some(el) = headline.get_untracked() else {
        return;
    };
    let _ = web_sys::HtmlElement::style(&el).set_property("transform", css);
}

fn viewport_dimension(value: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>) -> f64 {
    value.ok().and_then(|v| v.as_f64()).unwrap_or(0.0)
}

#[component]
pub fn Hero() -> impl IntoView {
    let headline = NodeRef::<leptos::html::H1>::new();

    Effect::new(move |_| -> Option<(dom::ListenerHandle, dom::ListenerHandle)> {
        let document = web_sys::window()?.document()?;

        // Latest pointer position, single owner; the pending flag makes sure
        // a burst of mousemove events schedules only one frame callback.
        let position = Rc::new(Cell::new((0.0_f64, 0.0_f64)));
        let pending = Rc::new(Cell::new(false));

        let moves = dom::ListenerHandle::listen(document.as_ref(), "mousemove", {
            let position = position.clone();
            let pending = pending.clone();
            move |event| {
                let Some(event) = event.dyn_ref::<web_sys::MouseEvent>() else {
                    return;
                };
                position.set((event.client_x() as f64, event.client_y() as f64));
                if pending.replace(true) {
                    return;
                }
                let position = position.clone();
                let pending = pending.clone();
                request_animation_frame(move || {
                    pending.set(false);
                    let Some(window) = web_sys::window() else {
                        return;
                    };
                    let (x, y) = position.get();
                    let tilt = Tilt::from_pointer(
                        x,
                        y,
                        viewport_dimension(window.inner_width()),
                        viewport_dimension(window.inner_height()),
                    );
                    apply_headline_transform(headline, &tilt.to_css());
                });
            }
        });

        let leave = dom::ListenerHandle::listen(document.as_ref(), "mouseleave", move |_| {
            apply_headline_transform(headline, &Tilt::IDENTITY.to_css());
        });

        Some((moves, leave))
    });

    view! {
        <main class="hero">
            <div class="container magnetic-wrap">
                <p class="badge">"Where Innovation meets inhalation."</p>
                <h1 node_ref=headline class="magnetic-target">
                    "The World's First"<br/>
                    <span class="text-gradient">"Integrated 5-in-1"</span><br/>
                    "Ceiling Hub"
                </h1>
                <p class="description">
                    "AIRATH is the only ceiling device that does it all. It packs a \
                     medical-grade air purifier, high-velocity circulation, and smart \
                     LED lights into one compact unit. Its smart sensors \"breathe\" \
                     with you—automatically cleaning the air and freshening the room \
                     whenever needed."
                </p>
                <div class="air-quality-pill">
                    <span class="status-dot"></span>
                    "Air Quality: 99%"
                </div>
            </div>
        </main>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn pointer_at_center_is_identity() {
        let tilt = Tilt::from_pointer(960.0, 540.0, 1920.0, 1080.0);
        assert_eq!(tilt, Tilt::IDENTITY);
        assert_eq!(
            tilt.to_css(),
            "translate3d(0px, 0px, 0) rotateX(0deg) rotateY(0deg)"
        );
    }

    #[test]
    fn horizontal_offset_shifts_and_rotates_about_y() {
        let tilt = Tilt::from_pointer(1060.0, 540.0, 1920.0, 1080.0);
        assert_eq!(tilt.shift_x, 2.0);
        assert_eq!(tilt.shift_y, 0.0);
        assert_eq!(tilt.rotate_x, 0.0);
        assert_eq!(tilt.rotate_y, 1.0);
    }

    #[test]
    fn vertical_offset_shifts_and_counter_rotates_about_x() {
        let tilt = Tilt::from_pointer(960.0, 640.0, 1920.0, 1080.0);
        assert_eq!(tilt.shift_x, 0.0);
        assert_eq!(tilt.shift_y, 2.0);
        assert_eq!(tilt.rotate_x, -1.0);
        assert_eq!(tilt.rotate_y, 0.0);
    }

    #[test]
    fn css_renders_all_four_channels() {
        let tilt = Tilt::from_pointer(1060.0, 640.0, 1920.0, 1080.0);
        assert_eq!(
            tilt.to_css(),
            "translate3d(2px, 2px, 0) rotateX(-1deg) rotateY(1deg)"
        );
    }

    #[test]
    fn negative_zero_never_reaches_the_style() {
        // Pointer left of center produces -0.0 on the untouched axes.
        let tilt = Tilt {
            shift_x: -0.0,
            shift_y: -0.0,
            rotate_x: -0.0,
            rotate_y: -0.0,
        };
        assert_eq!(
            tilt.to_css(),
            "translate3d(0px, 0px, 0) rotateX(0deg) rotateY(0deg)"
        );
    }
}
