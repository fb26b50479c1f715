use wasm_bindgen::JsValue;

/// Replaces window.fetch with a stub that answers every request with a
/// 200 JSON body carrying the given review text.
pub fn setup_fetch_success_mock(review: &str) -> bool {
    let js_code = format!(
        r#"
        window.fetch = function(request) {{
            return Promise.resolve(new Response(
                JSON.stringify({{ review: "{review}" }}),
                {{ status: 200, headers: {{ "Content-Type": "application/json" }} }}
            ));
        }};
        true
        "#
    );
    js_sys::eval(&js_code)
        .unwrap_or(JsValue::FALSE)
        .as_bool()
        .unwrap_or(false)
}

/// Replaces window.fetch with a stub that answers every request with a
/// 500 JSON error body.
pub fn setup_fetch_failure_mock() -> bool {
    let js_code = r#"
        window.fetch = function(request) {
            return Promise.resolve(new Response(
                JSON.stringify({ error: "口コミの生成に失敗しました。時間をおいてもう一度お試しください。" }),
                { status: 500, headers: { "Content-Type": "application/json" } }
            ));
        };
        true
    "#;
    js_sys::eval(js_code)
        .unwrap_or(JsValue::FALSE)
        .as_bool()
        .unwrap_or(false)
}
