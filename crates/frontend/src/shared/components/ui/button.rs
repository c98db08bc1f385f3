use contracts::system::auth::ActionVariant;
use leptos::prelude::*;

/// Full-width form button, primary (filled) or social (outlined)
#[component]
pub fn Button(
    /// Visual variant
    #[prop(optional)]
    variant: ActionVariant,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
    /// Click event handler
    #[prop(optional)]
    on_click: Option<Callback<leptos::ev::MouseEvent>>,
    /// Button children (content)
    children: Children,
) -> impl IntoView {
    let variant_class = match variant {
        ActionVariant::Primary => "button--primary",
        ActionVariant::Social => "button--social",
    };

    let additional_class = move || class.get().unwrap_or_default();

    view! {
        <button
            type="button"
            class=move || format!("button {} {}", variant_class, additional_class())
            on:click=move |ev| {
                if let Some(handler) = on_click {
                    handler.run(ev);
                }
            }
        >
            {children()}
        </button>
    }
}
