use crate::app_lib::GIT_COMMIT_HASH;
use leptos::prelude::*;

/// Centered card shared by the account screens, with the build hash in the
/// footer for support requests.
#[component]
pub fn AuthLayout(children: Children) -> impl IntoView {
    view! {
        <div class="flex min-h-screen items-center justify-center bg-slate-900 px-6 py-10 text-slate-100">
            <div class="w-full max-w-md">
                <p class="mb-8 text-center text-3xl font-bold tracking-tight text-orange-500">
                    "GoBarber"
                </p>
                {children()}
                <p class="mt-10 text-center text-[11px] text-slate-500">
                    "build " {GIT_COMMIT_HASH}
                </p>
            </div>
        </div>
    }
}
