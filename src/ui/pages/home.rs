//! Home page component
//!
//! Landing spot for redirects from the editor; links to the create form.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::core::NEW_STUDENT_ROUTE;
use crate::ui::icon::{Icon, icons};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-theme-primary flex flex-col items-center justify-center p-4">
            <h1 class="text-3xl font-bold text-theme-primary mb-2">"Students"</h1>
            <p class="text-theme-secondary mb-8">"Register a new student or open one to edit."</p>
            <A
                href=NEW_STUDENT_ROUTE
                attr:class="inline-flex items-center gap-2 px-6 py-3 bg-accent-primary hover:bg-accent-primary-hover text-white font-medium rounded-lg transition-colors"
            >
                <Icon name=icons::PLUS class="w-5 h-5" />
                "New student"
            </A>
        </div>
    }
}
