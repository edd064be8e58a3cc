use super::Spinner;
use leptos::prelude::*;

/// Submit-style button. While `loading` is set the label is replaced by a
/// spinner and the button is disabled.
#[component]
pub fn Button(
    #[prop(optional)] button_type: Option<&'static str>,
    #[prop(optional, into, default = Signal::from(false))] disabled: Signal<bool>,
    #[prop(optional, into, default = Signal::from(false))] loading: Signal<bool>,
    children: ChildrenFn,
) -> impl IntoView {
    let button_type = button_type.unwrap_or("button");
    let inactive = move || disabled.get() || loading.get();

    view! {
        <button
            type=button_type
            class="mt-4 flex h-14 w-full items-center justify-center rounded-lg bg-orange-500 px-5 font-medium text-slate-900 transition-colors hover:bg-orange-600 focus:outline-none focus:ring-4 focus:ring-orange-300"
            class:cursor-not-allowed=inactive
            class:opacity-70=inactive
            disabled=inactive
            aria-busy=move || loading.get().to_string()
        >
            {move || {
                if loading.get() {
                    view! { <Spinner /> }.into_any()
                } else {
                    children().into_any()
                }
            }}
        </button>
    }
}
