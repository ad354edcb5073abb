use leptos::prelude::*;

/// Circular loading spinner
#[component]
pub fn Spinner(
    /// Optional label under the spinner
    #[prop(default = String::new())]
    label: String,
) -> impl IntoView {
    view! {
        <div class="spinner-container spinner-centered">
            <div class="spinner spinner-circle spinner-lg" role="status" aria-live="polite">
                <div class="spinner-circle-inner"></div>
                <span class="sr-only">"Loading..."</span>
            </div>
            {(!label.is_empty()).then(|| view! {
                <div class="spinner-label">{label.clone()}</div>
            })}
        </div>
    }
}

/// Full-page loading overlay, shown while `visible` is true
#[component]
pub fn LoadingOverlay(
    #[prop(into)] visible: Signal<bool>,
    #[prop(default = "Loading...".to_string())] message: String,
) -> impl IntoView {
    view! {
        <Show when=move || visible.get()>
            <div class="loading-overlay" style="background-color: rgba(0, 0, 0, 0.6)">
                <div class="loading-overlay-content">
                    <Spinner label=message.clone() />
                </div>
            </div>
        </Show>
    }
}
