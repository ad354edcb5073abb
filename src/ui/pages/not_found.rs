//! Not found page component

use leptos::prelude::*;
use leptos_router::components::A;

use crate::core::HOME_ROUTE;
use crate::ui::icon::{Icon, icons};

/// Not found (404) page component
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-theme-primary flex flex-col items-center justify-center p-4">
            <div class="text-center">
                <div class="w-24 h-24 mx-auto mb-6 bg-theme-secondary rounded-full flex items-center justify-center">
                    <Icon name=icons::DOCUMENT_TEXT class="w-12 h-12 text-theme-tertiary" />
                </div>

                <h1 class="text-6xl font-bold text-theme-primary mb-4">"404"</h1>
                <p class="text-theme-secondary mb-8 max-w-md mx-auto">
                    "The page you're looking for doesn't exist."
                </p>

                <A
                    href=HOME_ROUTE
                    attr:class="px-6 py-3 bg-accent-primary hover:bg-accent-primary-hover text-white font-medium rounded-lg transition-colors"
                >
                    "Go Home"
                </A>
            </div>
        </div>
    }
}
