//! Student page component
//!
//! Serves both `/aluno` (create) and `/aluno/:id/edit` (edit). A new editor
//! is mounted whenever the route key changes, so creating a record and being
//! sent to its edit route loads it fresh.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::core::EditorMode;
use crate::ui::student_editor::StudentEditor;

#[component]
pub fn StudentPage() -> impl IntoView {
    let params = use_params_map();
    let mode = Memo::new(move |_| EditorMode::from_route_param(params.get().get("id")));

    view! {
        <div class="min-h-screen bg-theme-primary">
            {move || view! { <StudentEditor mode=mode.get() /> }}
        </div>
    }
}
