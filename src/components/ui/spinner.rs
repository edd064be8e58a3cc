use leptos::prelude::*;

#[component]
pub fn Spinner() -> impl IntoView {
    view! {
        <div
            class="inline-block h-5 w-5 animate-spin rounded-full border-2 border-orange-200 border-t-orange-600"
            role="status"
            aria-live="polite"
            aria-label="Carregando"
        ></div>
    }
}
