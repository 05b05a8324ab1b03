//! Browser smoke tests, run with `wasm-pack test --headless --chrome`.

#![cfg(target_arch = "wasm32")]

use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn page_mounts_with_all_regions() {
    leptos::mount::mount_to_body(airath_landing::App);

    let document = web_sys::window().unwrap().document().unwrap();

    // Every region is present.
    for selector in [
        "#loader",
        "nav.glass-nav",
        "main.hero h1.magnetic-target",
        "#tech-deep-dive",
        "#how-it-works",
        "#about",
        "footer.main-footer",
    ] {
        assert!(
            document.query_selector(selector).unwrap().is_some(),
            "missing {selector}"
        );
    }

    // Spec blocks carry their data-tech tags in page order.
    let blocks = document
        .query_selector_all("#tech-deep-dive .spec-block")
        .unwrap();
    assert_eq!(blocks.length(), 5);
    let tags: Vec<String> = (0..blocks.length())
        .filter_map(|i| blocks.item(i))
        .filter_map(|node| node.dyn_into::<web_sys::Element>().ok())
        .filter_map(|el| el.get_attribute("data-tech"))
        .collect();
    assert_eq!(tags, ["motor", "filter", "light", "chip", "fragrance"]);

    // Before any intersection the visual column shows the motor system.
    let label = document
        .query_selector("#active-label")
        .unwrap()
        .expect("active label");
    assert_eq!(label.text_content().unwrap(), "SYSTEM: BLDC MOTOR");
    let image = document
        .query_selector("#main-hub-image")
        .unwrap()
        .expect("hub image");
    assert!(
        image.get_attribute("src").unwrap().ends_with("motor.svg"),
        "default hub image should be the motor view"
    );
}
