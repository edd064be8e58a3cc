mod forgot_password;
mod home;
mod not_found;
mod reset_password;
mod signup;

pub(crate) use forgot_password::ForgotPasswordPage;
pub(crate) use home::HomePage;
pub(crate) use not_found::NotFoundPage;
pub(crate) use reset_password::ResetPasswordPage;
pub(crate) use signup::SignUpPage;

use leptos::prelude::*;
use leptos_router::components::{Route, Routes};
use leptos_router::path;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Routes fallback=|| view! { <NotFoundPage /> }>
            <Route path=path!("/") view=HomePage />
            <Route path=path!("/forgot-password") view=ForgotPasswordPage />
            <Route path=path!("/reset-password") view=ResetPasswordPage />
            <Route path=path!("/signup") view=SignUpPage />
        </Routes>
    }
}
