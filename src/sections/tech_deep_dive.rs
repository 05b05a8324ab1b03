//! Deep-dive section: five spec blocks on the left, a sticky x-ray visual on
//! the right. An intersection observer watching the vertical middle band of
//! the viewport decides which block drives the visual.

use leptos::prelude::*;
use wasm_bindgen::JsValue;

use crate::dom;
use crate::tech::{Technology, active_from_batch};

/// Insets the observer's root so only the middle 20% of the viewport counts
/// as intersecting.
const SPY_ROOT_MARGIN: &str = "-40% 0px -40% 0px";

#[component]
fn SpecBlock(
    tech: Technology,
    index: &'static str,
    title: &'static str,
    body: &'static str,
    edge: &'static str,
    node_ref: NodeRef<leptos::html::Div>,
    active: ReadSignal<Technology>,
) -> impl IntoView {
    view! {
        <div
            class=move || if active.get() == tech { "spec-block active" } else { "spec-block" }
            data-tech=tech.tag()
            node_ref=node_ref
        >
            <div class="spec-index">{index}</div>
            <h3>{title}</h3>
            <p>{body}</p>
            <div class="edge-box"><strong>"The Edge: "</strong>{edge}</div>
        </div>
    }
}

#[component]
pub fn TechDeepDive() -> impl IntoView {
    let (active, set_active) = signal(Technology::Motor);
    let blocks: [NodeRef<leptos::html::Div>; 5] = std::array::from_fn(|_| NodeRef::new());

    Effect::new(move |_| -> Option<dom::ObserverHandle> {
        let nodes: Vec<web_sys::HtmlDivElement> =
            blocks.iter().filter_map(|block| block.get()).collect();
        if nodes.is_empty() {
            return None;
        }

        let init = web_sys::IntersectionObserverInit::new();
        init.set_root_margin(SPY_ROOT_MARGIN);
        init.set_threshold(&JsValue::from_f64(0.0));
        let observer = dom::ObserverHandle::new(&init, move |entries| {
            let batch: Vec<(bool, Option<String>)> = entries
                .iter()
                .map(|entry| {
                    (
                        entry.is_intersecting(),
                        entry.target().get_attribute("data-tech"),
                    )
                })
                .collect();
            if let Some(tech) =
                active_from_batch(batch.iter().map(|(hit, tag)| (*hit, tag.as_deref())))
            {
                set_active.set(tech);
            }
        })?;
        for node in &nodes {
            observer.observe(node);
        }
        Some(observer)
    });

    view! {
        <section id="tech-deep-dive" class="tech-deep-dive">
            <div class="deep-dive-container">
                <div class="tech-specs-column">
                    <div class="specs-header">
                        <p class="badge">"Internal Engineering"</p>
                        <h2 class="section-title">
                            "A closer look at the 5-in-1 technology within the "
                            <span class="text-gradient">"AIRATH Hub."</span>
                        </h2>
                    </div>

                    <SpecBlock
                        tech=Technology::Motor
                        index="01"
                        title="High-Velocity BLDC Motor"
                        body="Engineered with Brushless DC (BLDC) technology, our motor \
                              delivers powerful, high-velocity air circulation."
                        edge="Consumes up to 50% less energy than induction motors."
                        node_ref=blocks[0]
                        active=active
                    />
                    <SpecBlock
                        tech=Technology::Filter
                        index="02"
                        title="Medical-Grade HEPA H13 Filtration"
                        body="Equipped with an advanced HEPA H13 filter, AIRATH captures \
                              99.9% of airborne particles."
                        edge="Effectively eliminates PM2.5, pollen, and smoke."
                        node_ref=blocks[1]
                        active=active
                    />
                    <SpecBlock
                        tech=Technology::Light
                        index="03"
                        title="Adaptive Smart LED Lighting"
                        body="Fully dimmable and color-tunable via the AIRATH App to \
                              improve your circadian rhythm."
                        edge="Switch from Cool White (6500K) to Warm Amber (2700K)."
                        node_ref=blocks[2]
                        active=active
                    />
                    <SpecBlock
                        tech=Technology::Chip
                        index="04"
                        title="Intelligent Sensory Suite (IoT)"
                        body="High-precision IoT sensors constantly scan your environment \
                              for VOCs and PM2.5 levels."
                        edge="In Auto-Mode, the device thinks for you, adjusting speed instantly."
                        node_ref=blocks[3]
                        active=active
                    />
                    <SpecBlock
                        tech=Technology::Fragrance
                        index="05"
                        title="Integrated Fragrance Diffusion"
                        body="A refillable fragrance module that neutralizes odors and \
                              releases subtle aromas."
                        edge="Subtle, consistent aroma without any chemical residue."
                        node_ref=blocks[4]
                        active=active
                    />
                </div>

                <div class="tech-visual-column">
                    <div class="sticky-xray-wrap">
                        <div class="xray-hub">
                            <img
                                src=move || active.get().image()
                                id="main-hub-image"
                                alt="AIRATH Internal Component View"
                            />
                        </div>
                        <div class="tech-label-display">
                            <span id="active-label">{move || active.get().label()}</span>
                            <div class="scanning-line"></div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
