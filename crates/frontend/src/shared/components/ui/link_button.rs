use contracts::system::auth::{AuthLink, LinkPlacement};
use leptos::prelude::*;

/// Text-only button that switches the auth tab
#[component]
pub fn LinkButton(link: AuthLink, on_click: Callback<AuthLink>) -> impl IntoView {
    let class = match link.placement() {
        LinkPlacement::Inline => "link-button link-button--inline",
        LinkPlacement::Footer => "link-button link-button--footer",
        LinkPlacement::Back => "link-button link-button--back",
    };

    view! {
        <button type="button" class=class on:click=move |_| on_click.run(link)>
            {link.label()}
        </button>
    }
}
