//! Reset-password route reached from the mailed link. The `token` query
//! parameter is read when the form is submitted; without it the request is
//! never sent. Success returns to the sign-in page.

use crate::{
    app_lib::{api::BrowserTransport, config::AppConfig},
    components::{AuthLayout, Button, FormState, Input, RouterNavigator},
    features::{
        auth::{ResetPassword, schemas},
        navigation::NavigationContext,
        notifications::toast::use_toast,
        submission::SubmissionHandler,
    },
    forms::FormPayload,
};
use leptos::{ev::SubmitEvent, prelude::*};
use leptos_router::hooks::use_location;

#[derive(Clone)]
/// Captures the form and the query string for the async action.
struct ResetInput {
    payload: FormPayload,
    navigation: NavigationContext,
}

#[component]
pub fn ResetPasswordPage() -> impl IntoView {
    let password = RwSignal::new(String::new());
    let password_confirmation = RwSignal::new(String::new());
    let form = FormState::new();
    let toasts = use_toast();
    let navigator = RouterNavigator::from_router();
    let location = use_location();

    let submit_action = Action::new_local(move |input: &ResetInput| {
        let input = input.clone();
        async move {
            let api = BrowserTransport::new(AppConfig::load());
            let mut handler =
                SubmissionHandler::<ResetPassword, _, _, _, _>::new(api, toasts, form, navigator);
            handler.submit(&input.payload, &input.navigation).await
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        let payload = FormPayload::new()
            .with(schemas::PASSWORD, password.get_untracked())
            .with(
                schemas::PASSWORD_CONFIRMATION,
                password_confirmation.get_untracked(),
            );
        let navigation = NavigationContext::from_search(location.search.get_untracked());
        submit_action.dispatch(ResetInput {
            payload,
            navigation,
        });
    };

    view! {
        <AuthLayout>
            <form class="text-center" on:submit=on_submit novalidate>
                <h1 class="mb-6 text-2xl font-semibold">"Redefinir senha"</h1>

                <Input
                    name=schemas::PASSWORD
                    input_type="password"
                    placeholder="Senha"
                    autocomplete="new-password"
                    value=password
                    form=form
                />
                <Input
                    name=schemas::PASSWORD_CONFIRMATION
                    input_type="password"
                    placeholder="Confirme sua senha"
                    autocomplete="new-password"
                    value=password_confirmation
                    form=form
                />

                <Button button_type="submit" disabled=submit_action.pending()>
                    "Redefinir senha"
                </Button>
            </form>
        </AuthLayout>
    }
}
