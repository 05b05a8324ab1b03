//! Our-story section. Story nodes start invisible and slide in the first
//! time they reach the viewport; the reveal is one-way by design and must
//! stay that way (scrolling back out does not re-hide a node).

use leptos::prelude::*;
use wasm_bindgen::{JsCast, JsValue};

use crate::dom;

/// Fraction of a node that must be visible before it reveals.
const REVEAL_THRESHOLD: f64 = 0.2;

/// Inline styles priming a story node before it is observed.
const HIDDEN_STYLE: [(&str, &str); 3] = [
    ("opacity", "0"),
    ("transform", "translateX(-20px)"),
    ("transition", "all 0.6s ease-out"),
];

/// Inline styles applied on first intersection. Re-applying them on later
/// notifications is idempotent, which is what makes the missing unobserve
/// harmless.
const REVEALED_STYLE: [(&str, &str); 2] = [("opacity", "1"), ("transform", "translateX(0)")];

fn set_inline(style: &web_sys::CssStyleDeclaration, properties: &[(&str, &str)]) {
    for (name, value) in properties {
        let _ = style.set_property(name, value);
    }
}

#[component]
fn StoryNode(
    meta: &'static str,
    title: &'static str,
    node_ref: NodeRef<leptos::html::Div>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="story-node" node_ref=node_ref>
            <div class="node-meta">{meta}</div>
            <div class="node-content">
                <h3>{title}</h3>
                {children()}
            </div>
        </div>
    }
}

#[component]
pub fn About() -> impl IntoView {
    let nodes: [NodeRef<leptos::html::Div>; 3] = std::array::from_fn(|_| NodeRef::new());

    Effect::new(move |_| -> Option<dom::ObserverHandle> {
        let targets: Vec<web_sys::HtmlDivElement> =
            nodes.iter().filter_map(|node| node.get()).collect();
        if targets.is_empty() {
            return None;
        }

        let init = web_sys::IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
        let observer = dom::ObserverHandle::new(&init, |entries| {
            for entry in entries {
                if !entry.is_intersecting() {
                    continue;
                }
                let Ok(node) = entry.target().dyn_into::<web_sys::HtmlElement>() else {
                    continue;
                };
                set_inline(&node.style(), &REVEALED_STYLE);
            }
        })?;
        for target in &targets {
            set_inline(&web_sys::HtmlElement::style(target), &HIDDEN_STYLE);
            observer.observe(target);
        }
        Some(observer)
    });

    view! {
        <section id="about" class="about-section">
            <div class="about-container">
                <div class="about-header">
                    <p class="badge">"Our Story"</p>
                    <h2 class="about-title">
                        "Breathing New Life into "
                        <span class="text-gradient">"Indian Homes"</span>
                    </h2>
                </div>

                <div class="story-timeline">
                    <StoryNode meta="01 / The Challenge" title="The Problem" node_ref=nodes[0]>
                        <p>
                            "Urban living in India is getting crowded. Between bulky air \
                             purifiers, floor fans, and scattered lighting, our homes are \
                             becoming cluttered, while the air we breathe indoors is often "
                            <strong>"5x more polluted"</strong>
                            " than the air outside."
                        </p>
                    </StoryNode>

                    <StoryNode meta="02 / The Solution" title="The Innovation" node_ref=nodes[1]>
                        <p>
                            "AIRATH was founded to solve this with a single question: "
                            <em>"Why take up floor space for something the ceiling can do better?"</em>
                        </p>
                        <p>
                            "We engineered the world's first integrated ceiling \
                             ecosystem—combining medical-grade purification, high-speed \
                             circulation, and smart lighting into one "
                            <strong>"\"zero-footprint\""</strong>
                            " device. We didn't just build a 5-in-1 appliance; we redefined \
                             the Indian ceiling."
                        </p>
                    </StoryNode>

                    <StoryNode meta="03 / Our Mission" title="Invisible & Effortless" node_ref=nodes[2]>
                        <p>
                            "To make clean air and smart living invisible, effortless, and \
                             accessible. We are part of the "
                            <strong>"Make in India"</strong>
                            " movement, designing intelligent hardware specifically for the \
                             Indian climate—tackling everything from heavy dust to urban \
                             pollutants through seamless IoT technology."
                        </p>
                    </StoryNode>
                </div>

                <div class="promise-grid">
                    <div class="promise-card">
                        <h4>"Integrated"</h4>
                        <p>"5 essential devices. 1 power point."</p>
                    </div>
                    <div class="promise-card">
                        <h4>"Intelligent"</h4>
                        <p>"IoT-enabled sensors that think for you."</p>
                    </div>
                    <div class="promise-card">
                        <h4>"Invisible"</h4>
                        <p>"Zero floor clutter. Maximum impact."</p>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn hidden_nodes_start_transparent_and_offset() {
        assert_eq!(
            HIDDEN_STYLE,
            [
                ("opacity", "0"),
                ("transform", "translateX(-20px)"),
                ("transition", "all 0.6s ease-out"),
            ]
        );
    }

    #[test]
    fn revealed_nodes_end_opaque_and_in_place() {
        assert_eq!(
            REVEALED_STYLE,
            [("opacity", "1"), ("transform", "translateX(0)")]
        );
    }

    #[test]
    fn reveal_requires_a_fifth_of_the_node() {
        assert_eq!(REVEAL_THRESHOLD, 0.2);
    }
}
