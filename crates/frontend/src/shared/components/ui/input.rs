use contracts::system::auth::AuthField;
use leptos::prelude::*;

/// Text input bound to one auth form buffer.
///
/// Placeholder, input type and keyboard hints come from the field;
/// password fields are rendered with `type="password"` and stay masked.
#[component]
pub fn Input(
    /// Field this input edits
    field: AuthField,
    /// Current buffer contents
    #[prop(into)]
    value: Signal<String>,
    /// Input event handler
    #[prop(optional)]
    on_input: Option<Callback<String>>,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let additional_class = move || class.get().unwrap_or_default();

    view! {
        <input
            id=field.id()
            name=field.id()
            class=move || format!("form__input {}", additional_class())
            type=field.input_type()
            placeholder=field.placeholder()
            autocomplete=field.autocomplete()
            autocapitalize=field.autocapitalize()
            prop:value=move || value.get()
            on:input=move |ev| {
                if let Some(handler) = on_input {
                    handler.run(event_target_value(&ev));
                }
            }
        />
    }
}
