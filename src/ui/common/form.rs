use leptos::prelude::*;

/// Labelled input bound to a string signal
#[component]
pub fn FormField(
    /// Field label text
    label: &'static str,
    /// Input name and id
    name: &'static str,
    /// Input type (text, email, number, ...)
    #[prop(default = "text")]
    input_type: &'static str,
    #[prop(default = "")] placeholder: &'static str,
    /// Value the input reads and writes
    value: RwSignal<String>,
    /// Disables the input, e.g. while a request is in flight
    #[prop(into)]
    disabled: Signal<bool>,
) -> impl IntoView {
    view! {
        <div class="space-y-1.5">
            <label class="label" for=name>{label}</label>
            <input
                id=name
                name=name
                type=input_type
                class="input-base"
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
                disabled=move || disabled.get()
            />
        </div>
    }
}
