//! Student create/edit form
//!
//! Holds the editable fields in signals and hands the load and submit flow
//! to the controller in `core`, with the page's notifications, router and
//! auth context as its effects.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::core::{
    EditorEffects, EditorMode, HttpStudentApi, Notification, StudentForm, load_student,
    photos_route, submit_student,
};
use crate::ui::auth::{AuthContext, use_auth_context};
use crate::ui::common::{FormField, LoadingOverlay};
use crate::ui::icon::{Icon, icons};
use crate::ui::notifications::{NotificationManager, use_notifications};

/// Requests go to the serving origin, which proxies `/alunos`
const API_BASE_URL: &str = "";

/// Editable fields, one signal per input
#[derive(Clone, Copy)]
struct StudentFields {
    name: RwSignal<String>,
    surname: RwSignal<String>,
    email: RwSignal<String>,
    age: RwSignal<String>,
    weight: RwSignal<String>,
    height: RwSignal<String>,
    photo_url: RwSignal<Option<String>>,
}

impl StudentFields {
    fn new() -> Self {
        Self {
            name: RwSignal::new(String::new()),
            surname: RwSignal::new(String::new()),
            email: RwSignal::new(String::new()),
            age: RwSignal::new(String::new()),
            weight: RwSignal::new(String::new()),
            height: RwSignal::new(String::new()),
            photo_url: RwSignal::new(None),
        }
    }

    fn snapshot(&self) -> StudentForm {
        StudentForm {
            name: self.name.get_untracked(),
            surname: self.surname.get_untracked(),
            email: self.email.get_untracked(),
            age: self.age.get_untracked(),
            weight: self.weight.get_untracked(),
            height: self.height.get_untracked(),
            photo_url: self.photo_url.get_untracked(),
        }
    }

    fn fill(&self, form: StudentForm) {
        self.name.set(form.name);
        self.surname.set(form.surname);
        self.email.set(form.email);
        self.age.set(form.age);
        self.weight.set(form.weight);
        self.height.set(form.height);
        self.photo_url.set(form.photo_url);
    }
}

/// Page-side effects for the editor controller
#[derive(Clone)]
struct PageEffects<N> {
    notifications: NotificationManager,
    auth: AuthContext,
    is_loading: RwSignal<bool>,
    navigate: N,
}

impl<N> PageEffects<N> {
    fn api(&self) -> HttpStudentApi {
        HttpStudentApi::new(API_BASE_URL).with_token(self.auth.token())
    }
}

impl<N> EditorEffects for PageEffects<N>
where
    N: Fn(&str, NavigateOptions),
{
    fn notify(&self, notification: Notification) {
        self.notifications.notify(notification);
    }

    fn navigate(&self, path: &str) {
        (self.navigate)(path, NavigateOptions::default());
    }

    fn login_failure(&self) {
        self.auth.login_failure();
    }

    fn set_loading(&self, loading: bool) {
        self.is_loading.set(loading);
    }

    fn is_loading(&self) -> bool {
        self.is_loading.get_untracked()
    }
}

#[component]
pub fn StudentEditor(mode: EditorMode) -> impl IntoView {
    let fields = StudentFields::new();
    let is_loading = RwSignal::new(false);
    let effects = PageEffects {
        notifications: use_notifications(),
        auth: use_auth_context(),
        is_loading,
        navigate: use_navigate(),
    };

    // Load the record once on mount in edit mode
    if let EditorMode::Edit(id) = mode.clone() {
        let effects = effects.clone();
        Effect::new(move |_| {
            let id = id.clone();
            let effects = effects.clone();
            spawn_local(async move {
                if let Some(form) = load_student(&effects.api(), &effects, &id).await {
                    fields.fill(form);
                }
            });
        });
    }

    let submit_mode = mode.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let form = fields.snapshot();
        let mode = submit_mode.clone();
        let effects = effects.clone();
        spawn_local(async move {
            submit_student(&effects.api(), &effects, &mode, &form).await;
        });
    };

    let photo_link = mode.id().map(photos_route);

    view! {
        <div class="max-w-xl mx-auto px-4 py-8">
            <LoadingOverlay visible=is_loading />

            <h1 class="text-2xl font-bold text-theme-primary mb-6">{mode.title()}</h1>

            {photo_link.map(|href| view! {
                <div class="relative flex flex-col items-center mb-6">
                    {move || match fields.photo_url.get() {
                        Some(url) => view! {
                            <img
                                src=url
                                alt=move || fields.name.get()
                                class="w-44 h-44 rounded-full object-cover"
                            />
                        }.into_any(),
                        None => view! {
                            <Icon name=icons::USER_CIRCLE class="w-44 h-44 text-theme-tertiary" />
                        }.into_any(),
                    }}
                    <A
                        href=href
                        attr:class="absolute bottom-0 p-2 rounded-full bg-accent-primary text-white"
                        attr:title="Manage photos"
                    >
                        <Icon name=icons::EDIT class="w-6 h-6" />
                    </A>
                </div>
            })}

            <form on:submit=on_submit class="space-y-4">
                <FormField label="Name" name="nome" placeholder="Name" value=fields.name disabled=is_loading />
                <FormField label="Surname" name="sobrenome" placeholder="Surname" value=fields.surname disabled=is_loading />
                <FormField label="Email" name="email" input_type="email" placeholder="Email" value=fields.email disabled=is_loading />
                <FormField label="Age" name="idade" input_type="number" placeholder="Age" value=fields.age disabled=is_loading />
                <FormField label="Weight" name="peso" placeholder="Weight" value=fields.weight disabled=is_loading />
                <FormField label="Height" name="altura" placeholder="Height" value=fields.height disabled=is_loading />

                <button
                    type="submit"
                    class="btn-base btn-primary w-full"
                    disabled=move || is_loading.get()
                >
                    "Submit"
                </button>
            </form>
        </div>
    }
}
