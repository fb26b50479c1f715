use leptos::*;
use gloo_net::http::Request;
use wasm_bindgen_futures::{spawn_local, JsFuture};

use crate::components::star_rating::StarRating;
use crate::components::toast::{show_toast, Toast, ToastMessage};
use crate::models::review::{GeneratedReview, ReviewDraft};

/// The review form and its result view. All state is component-local:
/// the draft, the generated text, the in-flight flag and the view toggle
/// live and die with one form session.
#[component]
pub fn ReviewGenerator() -> impl IntoView {
    let draft = create_rw_signal(ReviewDraft::default());
    let (generated_review, set_generated_review) = create_signal(String::new());
    let (is_generating, set_is_generating) = create_signal(false);
    let (show_result, set_show_result) = create_signal(false);
    let toast = create_rw_signal(None::<ToastMessage>);

    // Bumped on submit and on reset so a response from a superseded
    // request is dropped instead of overwriting fresh state.
    let generation = create_rw_signal(0u32);

    let can_generate = create_memo(move |_| draft.with(|d| d.is_submittable()));

    let handle_generate = move |_| {
        if !can_generate.get() || is_generating.get() {
            return;
        }
        let request_body = draft.with(|d| d.to_request());
        let this_generation = generation.get() + 1;
        generation.set(this_generation);
        set_is_generating.set(true);

        spawn_local(async move {
            let result = async {
                let response = Request::post("/api/generate-review")
                    .json(&request_body)?
                    .send()
                    .await?;
                if !response.ok() {
                    return Err(gloo_net::Error::GlooError(format!(
                        "generate-review returned status {}",
                        response.status()
                    )));
                }
                response.json::<GeneratedReview>().await
            }
            .await;

            // A reset (or a newer submission) may have superseded this call.
            if generation.get_untracked() != this_generation {
                leptos::logging::log!("[FORM] Dropping stale generation response");
                return;
            }

            match result {
                Ok(body) => {
                    set_generated_review.set(body.review.trim().to_string());
                    set_show_result.set(true);
                }
                Err(err) => {
                    leptos::logging::error!("[FORM] Review generation request failed: {:?}", err);
                    show_toast(
                        toast,
                        ToastMessage::destructive(
                            "エラーが発生しました",
                            "時間をおいてもう一度お試しください。",
                        ),
                    );
                }
            }
            set_is_generating.set(false);
        });
    };

    let handle_copy = move |_| {
        let text = generated_review.get();
        spawn_local(async move {
            let clipboard = window().navigator().clipboard();
            match JsFuture::from(clipboard.write_text(&text)).await {
                Ok(_) => show_toast(
                    toast,
                    ToastMessage::info(
                        "コピーしました！",
                        "レビューがクリップボードにコピーされました。",
                    ),
                ),
                Err(err) => {
                    leptos::logging::error!("[FORM] Clipboard write failed: {:?}", err);
                    show_toast(
                        toast,
                        ToastMessage::destructive(
                            "コピーに失敗しました",
                            "もう一度お試しください。",
                        ),
                    );
                }
            }
        });
    };

    let handle_reset = move |_| {
        generation.update(|g| *g += 1);
        draft.set(ReviewDraft::default());
        set_generated_review.set(String::new());
        set_show_result.set(false);
        set_is_generating.set(false);
    };

    let service = Signal::derive(move || draft.with(|d| d.service));
    let skill = Signal::derive(move || draft.with(|d| d.skill));
    let atmosphere = Signal::derive(move || draft.with(|d| d.atmosphere));

    view! {
        <div class="review-generator">
            <header class="intro">
                <h1>{ "AIでつくるサロン口コミ" }</h1>
                <p>{ "かんたん入力で、きれいな日本語の口コミ文を自動生成します。" }</p>
            </header>

            <div class="card">
                <Show
                    when=move || show_result.get()
                    fallback=move || view! {
                        <section class="input-view">
                            <h2>{ "評価とコメントを入力" }</h2>
                            <p class="hint">{ "3つのカテゴリーで星評価を選び、コメントを入力してください" }</p>

                            <label>{ "ホットペッパーの口コミURL（任意）" }</label>
                            <input
                                type="url"
                                placeholder="https://beauty.hotpepper.jp/..."
                                prop:value=move || draft.with(|d| d.hotpepper_url.clone())
                                on:input=move |e| draft.update(|d| d.hotpepper_url = event_target_value(&e))
                            />

                            <label>{ "接客" }</label>
                            <StarRating
                                value=service
                                on_change=Callback::new(move |v| draft.update(|d| d.service = v))
                            />

                            <label>{ "技術" }</label>
                            <StarRating
                                value=skill
                                on_change=Callback::new(move |v| draft.update(|d| d.skill = v))
                            />

                            <label>{ "お店の雰囲気" }</label>
                            <StarRating
                                value=atmosphere
                                on_change=Callback::new(move |v| draft.update(|d| d.atmosphere = v))
                            />

                            <label>{ "特に良かったところ" }</label>
                            <textarea
                                placeholder="例）仕上がりがとても綺麗で、説明も分かりやすかったです。"
                                prop:value=move || draft.with(|d| d.comment.clone())
                                on:input=move |e| draft.update(|d| d.comment = event_target_value(&e))
                            />

                            <button
                                class="generate-button"
                                disabled=move || !can_generate.get() || is_generating.get()
                                on:click=handle_generate
                            >
                                {move || if is_generating.get() { "生成中..." } else { "口コミを作成する" }}
                            </button>
                        </section>
                    }
                >
                    <section class="result-view">
                        <h2>{ "AIが作成した口コミ文" }</h2>
                        <p class="hint">{ "レビューをコピーしてホットペッパービューティーに投稿しましょう" }</p>

                        <div class="generated-review">
                            <p>{move || generated_review.get()}</p>
                            <div class="char-count">
                                {move || format!("{}文字", generated_review.get().chars().count())}
                            </div>
                        </div>

                        <div class="result-actions">
                            <button class="reset-button" on:click=handle_reset>{ "もう一度作る" }</button>
                            <button class="copy-button" on:click=handle_copy>{ "コピー" }</button>
                        </div>
                    </section>
                </Show>
            </div>

            <footer class="outro">
                <p>{ "ホットペッパービューティー用の口コミを簡単作成" }</p>
            </footer>

            <Toast toast=toast />
        </div>
    }
}
