//! Fallback for unknown routes.

use crate::components::AuthLayout;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <AuthLayout>
            <div class="flex flex-col items-center text-center">
                <h1 class="select-none text-8xl font-black text-slate-800">"404"</h1>
                <p class="mt-4 text-slate-400">"Página não encontrada"</p>
                <A
                    href="/"
                    {..}
                    class="mt-6 inline-flex items-center rounded-lg bg-orange-500 px-5 py-2.5 text-sm font-medium text-slate-900 hover:bg-orange-600"
                >
                    "Voltar ao início"
                </A>
            </div>
        </AuthLayout>
    }
}
