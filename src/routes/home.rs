use crate::components::AuthLayout;
use leptos::prelude::*;
use leptos_router::components::A;

/// Landing page the account screens return to.
#[component]
pub fn HomePage() -> impl IntoView {
    let link_class = "block rounded-lg bg-slate-800 px-4 py-3 text-center text-sm hover:bg-slate-700";

    view! {
        <AuthLayout>
            <nav class="space-y-3">
                <A href="/signup" {..} class=link_class>"Criar conta"</A>
                <A href="/forgot-password" {..} class=link_class>"Esqueci minha senha"</A>
            </nav>
        </AuthLayout>
    }
}
