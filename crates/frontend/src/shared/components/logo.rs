use leptos::prelude::*;

/// Decorative logo: two concentric circles with a dot and the caption
#[component]
pub fn Logo() -> impl IntoView {
    view! {
        <div class="logo" aria-hidden="true">
            <div class="logo__circle">
                <div class="logo__inner-circle">
                    <div class="logo__dot"></div>
                </div>
            </div>
            <span class="logo__text">"Auth"</span>
        </div>
    }
}
