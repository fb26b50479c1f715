use leptos::*;

/// Number of stars in every rating picker.
pub const MAX_STARS: u8 = 5;

/// Click-to-set star picker: 5 buttons, no half stars, and no way back to
/// zero once a value is picked (only the form-level reset clears it).
#[component]
pub fn StarRating(#[prop(into)] value: Signal<u8>, on_change: Callback<u8>) -> impl IntoView {
    view! {
        <div class="star-rating">
            {(1..=MAX_STARS).map(|star| {
                view! {
                    <button
                        type="button"
                        class="star-button"
                        class:filled=move || star <= value.get()
                        aria-label=format!("Rate {} stars", star)
                        on:click=move |_| on_change.call(star)
                    >
                        {move || if star <= value.get() { "★" } else { "☆" }}
                    </button>
                }
            }).collect::<Vec<_>>()}
        </div>
    }
}
