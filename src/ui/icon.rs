use leptos::prelude::*;

#[component]
pub fn Icon(
    /// Icon file name without the .svg extension
    name: &'static str,
    /// CSS classes for sizing and color
    #[prop(default = "w-5 h-5")]
    class: &'static str,
) -> impl IntoView {
    let icon_path = format!("/icons/{}.svg", name);

    view! {
        <img
            src=icon_path
            class=class
            alt=name
            draggable=false
        />
    }
}

/// Icons shipped under public/icons
pub mod icons {
    pub const USER_CIRCLE: &str = "user-circle";
    pub const EDIT: &str = "edit";
    pub const PLUS: &str = "plus";
    pub const DOCUMENT_TEXT: &str = "document-text";
}
