//! End-to-end submission cycles against a stand-in API.

use anyhow::Result;
use gobarber_web::{
    app_lib::{AppError, ApiTransport, api::NativeTransport, config::AppConfig},
    features::{
        auth::{ForgotPassword, ResetPassword, SignUp},
        navigation::NavigationContext,
        notifications::NotificationKind,
        submission::{Outcome, SubmissionHandler},
    },
    forms::FormPayload,
    test_support::{RecordingForm, RecordingNavigator, RecordingNotifier},
};
use serde_json::json;
use std::net::TcpListener;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn can_bind_localhost() -> bool {
    TcpListener::bind("127.0.0.1:0").is_ok()
}

fn transport(server: &MockServer) -> Result<NativeTransport> {
    let config = AppConfig {
        api_base_url: server.uri(),
        ..AppConfig::default()
    };
    Ok(NativeTransport::new(config)?)
}

#[tokio::test]
async fn sign_up_posts_exact_body_and_returns_home() -> Result<()> {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return Ok(());
    }
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/users"))
        .and(body_json(json!({
            "name": "A",
            "email": "a@b.com",
            "password": "123456"
        })))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    let notifier = RecordingNotifier::default();
    let navigator = RecordingNavigator::default();
    let mut handler = SubmissionHandler::<SignUp, _, _, _, _>::new(
        transport(&server)?,
        notifier.clone(),
        RecordingForm::default(),
        navigator.clone(),
    );
    let payload = FormPayload::new()
        .with("name", "A")
        .with("email", "a@b.com")
        .with("password", "123456");

    let outcome = handler.submit(&payload, &NavigationContext::default()).await;

    assert_eq!(outcome, Outcome::Success);
    assert_eq!(notifier.sent().len(), 1);
    assert_eq!(notifier.sent()[0].kind, NotificationKind::Success);
    assert_eq!(navigator.visited(), vec!["/".to_string()]);
    Ok(())
}

#[tokio::test]
async fn forgot_password_server_error_notifies_without_field_errors() -> Result<()> {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return Ok(());
    }
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/password/forgot"))
        .respond_with(ResponseTemplate::new(400).set_body_string("  user not found  "))
        .expect(1)
        .mount(&server)
        .await;

    let notifier = RecordingNotifier::default();
    let form = RecordingForm::default();
    let mut handler = SubmissionHandler::<ForgotPassword, _, _, _, _>::new(
        transport(&server)?,
        notifier.clone(),
        form.clone(),
        RecordingNavigator::default(),
    );

    let outcome = handler
        .submit(
            &FormPayload::new().with("email", "a@b.com"),
            &NavigationContext::default(),
        )
        .await;

    assert_eq!(
        outcome,
        Outcome::Failed(AppError::Http {
            status: 400,
            message: "user not found".to_string(),
        })
    );
    assert!(form.errors().is_empty());
    assert_eq!(form.loading_history(), vec![true, false]);
    let sent = notifier.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].kind, NotificationKind::Error);
    assert_eq!(
        sent[0].description,
        "Ocorreu um erro ao tentar realizar a recuperação de senha, cheque as credênciais"
    );
    Ok(())
}

#[tokio::test]
async fn reset_password_sends_token_from_query() -> Result<()> {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return Ok(());
    }
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/password/reset"))
        .and(body_json(json!({
            "password": "abc",
            "password_confirmation": "abc",
            "token": "mail-token"
        })))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let navigator = RecordingNavigator::default();
    let mut handler = SubmissionHandler::<ResetPassword, _, _, _, _>::new(
        transport(&server)?,
        RecordingNotifier::default(),
        RecordingForm::default(),
        navigator.clone(),
    );
    let payload = FormPayload::new()
        .with("password", "abc")
        .with("passwordConfirmation", "abc");

    let outcome = handler
        .submit(&payload, &NavigationContext::from_search("?token=mail-token"))
        .await;

    assert_eq!(outcome, Outcome::Success);
    assert_eq!(navigator.visited(), vec!["/".to_string()]);
    Ok(())
}

#[tokio::test]
async fn unreachable_api_is_a_network_error() -> Result<()> {
    let config = AppConfig {
        api_base_url: "http://127.0.0.1:9".to_string(),
        ..AppConfig::default()
    };
    let api = NativeTransport::new(config)?;

    let result = api.post_json("/users", &json!({})).await;

    assert!(matches!(
        result,
        Err(AppError::Network(_) | AppError::Timeout(_))
    ));
    Ok(())
}
