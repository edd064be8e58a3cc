//! Reactive bindings between the submission handler and the rendered form:
//! field messages and the loading flag live in signals, inputs read their
//! own message back, and navigation goes through the router.

use crate::{
    features::{navigation::Navigator, submission::FormHandle},
    forms::FieldErrors,
};
use leptos::prelude::*;
use leptos_router::{NavigateOptions, hooks::use_navigate};

#[derive(Clone, Copy)]
pub struct FormState {
    errors: RwSignal<FieldErrors>,
    loading: RwSignal<bool>,
}

impl FormState {
    pub fn new() -> Self {
        Self {
            errors: RwSignal::new(FieldErrors::new()),
            loading: RwSignal::new(false),
        }
    }

    pub fn error(&self, field: &str) -> Option<String> {
        self.errors.with(|errors| errors.get(field).cloned())
    }

    pub fn loading(&self) -> Signal<bool> {
        self.loading.into()
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}

impl FormHandle for FormState {
    fn set_field_errors(&self, errors: FieldErrors) {
        let _ = self.errors.try_set(errors);
    }

    fn reset_field_errors(&self) {
        let _ = self.errors.try_set(FieldErrors::new());
    }

    fn set_loading(&self, loading: bool) {
        let _ = self.loading.try_set(loading);
    }
}

/// [`Navigator`] backed by the router; build it while the component is set up.
#[derive(Clone, Copy)]
pub struct RouterNavigator {
    navigate: StoredValue<Box<dyn Fn(&str)>, LocalStorage>,
}

impl RouterNavigator {
    pub fn from_router() -> Self {
        let navigate = use_navigate();
        let navigate: Box<dyn Fn(&str)> = Box::new(move |path: &str| {
            navigate(path, NavigateOptions::default());
        });
        Self {
            navigate: StoredValue::new_local(navigate),
        }
    }
}

impl Navigator for RouterNavigator {
    fn navigate(&self, path: &str) {
        self.navigate.with_value(|navigate| navigate(path));
    }
}

/// Text input bound to `value` that shows its field message underneath.
#[component]
pub fn Input(
    name: &'static str,
    placeholder: &'static str,
    value: RwSignal<String>,
    form: FormState,
    #[prop(optional)] input_type: Option<&'static str>,
    #[prop(optional)] autocomplete: Option<&'static str>,
) -> impl IntoView {
    let error = move || form.error(name);
    let invalid = move || error().is_some();

    view! {
        <div class="mt-2">
            <input
                id=name
                name=name
                type=input_type.unwrap_or("text")
                autocomplete=autocomplete.unwrap_or("off")
                placeholder=placeholder
                class="h-14 w-full rounded-lg border-2 border-slate-800 bg-slate-800 px-4 text-sm text-slate-100 placeholder-slate-500 focus:border-orange-500 focus:outline-none"
                class:border-red-500=invalid
                aria-invalid=move || invalid().to_string()
                prop:value=move || value.get()
                on:input=move |event| value.set(event_target_value(&event))
            />
            {move || {
                error()
                    .map(|message| {
                        view! {
                            <p class="mt-1 text-xs text-red-400" role="alert">
                                {message}
                            </p>
                        }
                    })
            }}
        </div>
    }
}
