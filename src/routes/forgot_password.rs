//! Forgot-password route. Validates the e-mail locally, asks the API to mail a
//! reset link, and confirms with a toast. The submit button shows a loading
//! state for the whole cycle.

use crate::{
    app_lib::{api::BrowserTransport, config::AppConfig},
    components::{AuthLayout, Button, FormState, Input, RouterNavigator},
    features::{
        auth::{ForgotPassword, schemas},
        navigation::NavigationContext,
        notifications::toast::use_toast,
        submission::SubmissionHandler,
    },
    forms::FormPayload,
};
use leptos::{ev::SubmitEvent, prelude::*};
use leptos_router::components::A;

#[component]
pub fn ForgotPasswordPage() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let form = FormState::new();
    let toasts = use_toast();
    let navigator = RouterNavigator::from_router();

    let submit_action = Action::new_local(move |payload: &FormPayload| {
        let payload = payload.clone();
        async move {
            let api = BrowserTransport::new(AppConfig::load());
            let mut handler =
                SubmissionHandler::<ForgotPassword, _, _, _, _>::new(api, toasts, form, navigator);
            handler.submit(&payload, &NavigationContext::default()).await
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        let payload = FormPayload::new().with(schemas::EMAIL, email.get_untracked());
        submit_action.dispatch(payload);
    };

    view! {
        <AuthLayout>
            <form class="text-center" on:submit=on_submit novalidate>
                <h1 class="mb-6 text-2xl font-semibold">"Recuperar senha"</h1>

                <Input
                    name=schemas::EMAIL
                    placeholder="E-mail"
                    autocomplete="email"
                    value=email
                    form=form
                />

                <Button button_type="submit" loading=form.loading()>
                    "Recuperar"
                </Button>
            </form>

            <A href="/" {..} class="mt-6 block text-center text-sm text-slate-300 hover:text-orange-400">
                "Voltar ao login"
            </A>
        </AuthLayout>
    }
}
