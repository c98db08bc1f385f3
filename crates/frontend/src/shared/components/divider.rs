use leptos::prelude::*;

#[component]
pub fn Divider(#[prop(optional, into)] text: Option<String>) -> impl IntoView {
    let text = text.unwrap_or_else(|| "OR".to_string());

    view! {
        <div class="divider">
            <div class="divider__line"></div>
            <span class="divider__text">{text}</span>
            <div class="divider__line"></div>
        </div>
    }
}
