/// Application root: a single page hosting the review generator form.
use leptos::*;
use leptos_meta::*;
use leptos_router::*;

use crate::components::review_generator::ReviewGenerator;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/kuchikomi.css"/>
        <Title text="AIでつくるサロン口コミ"/>
        <Router>
            <main class="page">
                <Routes>
                    <Route path="" view=HomePage/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn HomePage() -> impl IntoView {
    view! { <ReviewGenerator/> }
}
