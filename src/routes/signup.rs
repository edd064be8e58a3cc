//! Sign-up route. Validates name, e-mail, and password length locally, creates
//! the user, and returns to the sign-in page with a confirmation toast.

use crate::{
    app_lib::{api::BrowserTransport, config::AppConfig},
    components::{AuthLayout, Button, FormState, Input, RouterNavigator},
    features::{
        auth::{SignUp, schemas},
        navigation::NavigationContext,
        notifications::toast::use_toast,
        submission::SubmissionHandler,
    },
    forms::FormPayload,
};
use leptos::{ev::SubmitEvent, prelude::*};
use leptos_router::components::A;

#[component]
pub fn SignUpPage() -> impl IntoView {
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let form = FormState::new();
    let toasts = use_toast();
    let navigator = RouterNavigator::from_router();

    let signup_action = Action::new_local(move |payload: &FormPayload| {
        let payload = payload.clone();
        async move {
            let api = BrowserTransport::new(AppConfig::load());
            let mut handler =
                SubmissionHandler::<SignUp, _, _, _, _>::new(api, toasts, form, navigator);
            handler.submit(&payload, &NavigationContext::default()).await
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        let payload = FormPayload::new()
            .with(schemas::NAME, name.get_untracked())
            .with(schemas::EMAIL, email.get_untracked())
            .with(schemas::PASSWORD, password.get_untracked());
        signup_action.dispatch(payload);
    };

    view! {
        <AuthLayout>
            <form class="text-center" on:submit=on_submit novalidate>
                <h1 class="mb-6 text-2xl font-semibold">"Faça seu cadastro"</h1>

                <Input name=schemas::NAME placeholder="Nome" autocomplete="name" value=name form=form />
                <Input
                    name=schemas::EMAIL
                    placeholder="E-mail"
                    autocomplete="email"
                    value=email
                    form=form
                />
                <Input
                    name=schemas::PASSWORD
                    input_type="password"
                    placeholder="Senha"
                    autocomplete="new-password"
                    value=password
                    form=form
                />

                <Button button_type="submit" disabled=signup_action.pending()>
                    "Cadastrar"
                </Button>
            </form>

            <A href="/" {..} class="mt-6 block text-center text-sm text-slate-300 hover:text-orange-400">
                "Voltar para logon"
            </A>
        </AuthLayout>
    }
}
