use leptos::prelude::*;

use super::BRAND;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="main-footer">
            <div class="footer-container">
                <div class="footer-brand">
                    <div class="logo">{BRAND}</div>
                    <p class="brand-statement">
                        "Redefining the Indian ceiling with integrated 5-in-1 technology. \
                         We make clean air and smart living invisible, effortless, and \
                         accessible."
                    </p>
                    <div class="make-in-india-tag">
                        <span class="flag-icon">"🇮🇳"</span>
                        " Proudly Make in India"
                    </div>
                </div>

                <div class="footer-links">
                    <h4>"Explore"</h4>
                    <ul>
                        <li><a href="#tech-deep-dive">"Technology"</a></li>
                        <li><a href="#how-it-works">"How it Works"</a></li>
                        <li><a href="#about">"Our Story"</a></li>
                    </ul>
                </div>

                <div class="footer-contact">
                    <h4>"Inquiries"</h4>
                    <div class="contact-block">
                        <p>"Experience AIRATH first-hand"</p>
                        <a href="mailto:support@airath.in" class="footer-email">
                            "support@airath.in"
                        </a>
                    </div>

                    <div class="office-block">
                        <p class="office-label">"Head Office"</p>
                        <address>
                            "48/5, Someswara layout, Indiranagar, Bengaluru, 560008"
                        </address>
                        <p class="office-label">"Contact us"</p>
                        <p class="phone-no">"+91 9346561315"</p>
                    </div>
                </div>
            </div>

            <div class="footer-bottom">
                <div class="bottom-container">
                    <p>"© 2026 AIRATH Innovations. All rights reserved."</p>
                </div>
            </div>
        </footer>
    }
}
