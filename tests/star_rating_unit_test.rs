// Browser-only test; run with `wasm-pack test --headless --chrome --features wasm-test --no-default-features`.
#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;
use leptos::*;
use wasm_bindgen::JsCast;

use kuchikomi::components::star_rating::{StarRating, MAX_STARS};

wasm_bindgen_test_configure!(run_in_browser);

fn star_buttons(document: &web_sys::Document) -> Vec<web_sys::HtmlElement> {
    let nodes = document.query_selector_all(".star-button").unwrap();
    (0..nodes.length())
        .map(|i| {
            nodes
                .item(i)
                .unwrap()
                .dyn_into::<web_sys::HtmlElement>()
                .unwrap()
        })
        .collect()
}

fn clear_body(document: &web_sys::Document) {
    document.body().unwrap().set_inner_html("");
}

#[wasm_bindgen_test]
fn renders_five_unfilled_stars_for_an_unset_rating() {
    let document = web_sys::window().unwrap().document().unwrap();
    clear_body(&document);

    let (value, _set_value) = create_signal(0u8);
    mount_to_body(move || {
        view! { <StarRating value=value on_change=Callback::new(|_| {}) /> }
    });

    let buttons = star_buttons(&document);
    assert_eq!(buttons.len(), MAX_STARS as usize);
    for button in &buttons {
        assert_eq!(button.text_content().unwrap(), "☆");
        assert!(!button.class_list().contains("filled"));
    }
}

#[wasm_bindgen_test]
fn clicking_a_star_reports_its_value() {
    let document = web_sys::window().unwrap().document().unwrap();
    clear_body(&document);

    let (value, set_value) = create_signal(0u8);
    mount_to_body(move || {
        view! {
            <StarRating
                value=value
                on_change=Callback::new(move |v| set_value.set(v))
            />
        }
    });

    let buttons = star_buttons(&document);
    buttons[2].click();
    assert_eq!(value.get_untracked(), 3);

    // Stars up to the picked one fill, the rest stay hollow.
    let buttons = star_buttons(&document);
    for (i, button) in buttons.iter().enumerate() {
        let expected = if i < 3 { "★" } else { "☆" };
        assert_eq!(button.text_content().unwrap(), expected, "star {}", i + 1);
    }
}

#[wasm_bindgen_test]
fn picking_a_lower_star_moves_the_rating_down_but_never_to_zero() {
    let document = web_sys::window().unwrap().document().unwrap();
    clear_body(&document);

    let (value, set_value) = create_signal(0u8);
    mount_to_body(move || {
        view! {
            <StarRating
                value=value
                on_change=Callback::new(move |v| set_value.set(v))
            />
        }
    });

    let buttons = star_buttons(&document);
    buttons[4].click();
    assert_eq!(value.get_untracked(), 5);
    buttons[0].click();
    // Clicking an already-filled star lowers the rating; there is no
    // click path back to the unset state.
    assert_eq!(value.get_untracked(), 1);
}
