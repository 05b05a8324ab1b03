//! Bento grid explaining the five integrated systems, plus the hardware
//! convergence banner. Hover state is purely ephemeral.

use leptos::prelude::*;

/// One tile in the bento grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Card {
    Purification,
    Circulation,
    Brain,
    Led,
    Diffusion,
}

#[component]
pub fn HowItWorks() -> impl IntoView {
    // Which card the pointer is over, if any. Read only by the class
    // bindings below, never persisted.
    let (active_card, set_active_card) = signal(None::<Card>);
    let hot = move |card: Card| active_card.get() == Some(card);

    view! {
        <section id="how-it-works" class="hiw-bento-section">
            <div class="bento-container">
                <div class="bento-header">
                    <p class="badge">"Internal Engineering"</p>
                    <h2 class="section-title">
                        "The 5-in-1 Integration: "
                        <span class="text-gradient">"How it Works"</span>
                    </h2>
                </div>

                <div class="bento-grid">
                    <div
                        class="bento-card large purification"
                        class:is-hot=move || hot(Card::Purification)
                        on:mouseenter=move |_| set_active_card.set(Some(Card::Purification))
                        on:mouseleave=move |_| set_active_card.set(None)
                    >
                        <div class="card-content">
                            <span class="card-num">"01"</span>
                            <h3>"Advanced Air Purification"</h3>
                            <p>
                                "Our high-density H13 HEPA Filtration system sits at the top \
                                 of the unit. By pulling air from the ceiling's natural \
                                 convection currents, it captures 99.9% of dust, allergens, \
                                 and VOCs before they settle."
                            </p>
                        </div>
                        <div class="card-visual">
                            <div class="filter-mesh"></div>
                        </div>
                    </div>

                    <div
                        class="bento-card medium circulation"
                        class:is-hot=move || hot(Card::Circulation)
                        on:mouseenter=move |_| set_active_card.set(Some(Card::Circulation))
                        on:mouseleave=move |_| set_active_card.set(None)
                    >
                        <div class="card-content">
                            <span class="card-num">"02"</span>
                            <h3>"Aero-Dynamic Circulation"</h3>
                            <p>
                                "Custom-engineered fan blades are designed for silent, \
                                 high-velocity output. The motor is decoupled from the frame \
                                 to eliminate vibration, providing a consistent 360° breeze \
                                 that reaches every corner of the room."
                            </p>
                        </div>
                    </div>

                    <div
                        class="bento-card tall brain"
                        class:is-hot=move || hot(Card::Brain)
                        on:mouseenter=move |_| set_active_card.set(Some(Card::Brain))
                        on:mouseleave=move |_| set_active_card.set(None)
                    >
                        <div class="card-content">
                            <div class="brain-glow"></div>
                            <span class="card-num">"05"</span>
                            <h3>"AQI Sensor + Auto-Mode"</h3>
                            <p>
                                "The \"Brain\" of the unit. High-precision PM2.5 sensors \
                                 monitor your air quality 24/7. In Auto-Mode, AIRATH thinks \
                                 for you—adjusting fan speeds and purification levels the \
                                 moment pollutants are detected."
                            </p>
                        </div>
                    </div>

                    <div
                        class="bento-card small led"
                        class:is-hot=move || hot(Card::Led)
                        on:mouseenter=move |_| set_active_card.set(Some(Card::Led))
                        on:mouseleave=move |_| set_active_card.set(None)
                    >
                        <div class="card-content">
                            <span class="card-num">"03"</span>
                            <h3>"Intelligent LED Matrix"</h3>
                            <p>
                                "We replaced bulky bulbs with a flush-mounted Smart LED \
                                 Array. Fully dimmable and color-tunable, it provides \
                                 high-CRI lighting that mimics natural sunlight during the \
                                 day and warm ambient tones at night."
                            </p>
                        </div>
                    </div>

                    <div
                        class="bento-card small diffusion"
                        class:is-hot=move || hot(Card::Diffusion)
                        on:mouseenter=move |_| set_active_card.set(Some(Card::Diffusion))
                        on:mouseleave=move |_| set_active_card.set(None)
                    >
                        <div class="card-content">
                            <span class="card-num">"04"</span>
                            <h3>"Micro-Droplet Diffusion"</h3>
                            <p>
                                "The integrated Air Freshener uses the unit's natural \
                                 airflow to disperse scents evenly. Unlike traditional \
                                 sprays, our cold-mist tech ensures a consistent, \
                                 long-lasting fragrance without the chemical \"wet\" residue."
                            </p>
                        </div>
                    </div>
                </div>

                <div class="convergence-banner">
                    <div class="conv-intro">
                        <h3>"Why Hardware Convergence Matters"</h3>
                    </div>
                    <div class="conv-details">
                        <div class="conv-box">
                            <strong>"Energy Efficiency:"</strong>
                            <p>
                                "One power source drives five functions, reducing energy \
                                 consumption by up to 40% compared to five separate devices."
                            </p>
                        </div>
                        <div class="conv-box">
                            <strong>"IoT Synchronization:"</strong>
                            <p>
                                "A single app controls your entire environment. Set \
                                 schedules, monitor air health, and customize lighting from \
                                 anywhere in the world."
                            </p>
                        </div>
                        <div class="conv-box">
                            <strong>"Seamless Installation:"</strong>
                            <p>
                                "Designed to fit standard ceiling mounts, AIRATH transforms \
                                 your existing electrical point into a total climate command \
                                 center."
                            </p>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
