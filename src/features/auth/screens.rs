use super::{
    schemas,
    types::{CreateUserRequest, ForgotPasswordRequest, ResetPasswordRequest},
};
use crate::{
    app_lib::AppError,
    features::{
        navigation::NavigationContext,
        notifications::Notification,
        submission::{Screen, SuccessEffect},
    },
    forms::{FormPayload, Schema},
};

/// Where every auth screen sends the user once it is done.
pub const SIGN_IN_PATH: &str = "/";

/// Query parameter the mailed reset link carries.
pub const RESET_TOKEN_PARAM: &str = "token";

/// Value of a field the request body needs. Rules skip absent fields, so a
/// payload missing one can pass validation and is rejected here instead.
fn field(payload: &FormPayload, name: &str) -> Result<String, AppError> {
    payload
        .get(name)
        .map(str::to_string)
        .ok_or_else(|| AppError::MissingParameter(name.to_string()))
}

pub struct ForgotPassword;

impl Screen for ForgotPassword {
    type Request = ForgotPasswordRequest;

    const NAME: &'static str = "forgot_password";
    const ENDPOINT: &'static str = "/password/forgot";
    const TRACKS_LOADING: bool = true;

    fn schema() -> Schema {
        schemas::forgot_password()
    }

    fn build_request(
        payload: &FormPayload,
        _navigation: &NavigationContext,
    ) -> Result<Self::Request, AppError> {
        Ok(ForgotPasswordRequest {
            email: field(payload, schemas::EMAIL)?,
        })
    }

    fn on_success() -> SuccessEffect {
        SuccessEffect {
            notification: Some(Notification::success(
                "E-mail de recuperação enviado",
                "Enviamos um e-mail para recuperação de senha",
            )),
            redirect: None,
        }
    }

    fn failure_notification() -> Notification {
        Notification::error(
            "Erro na recuperação de senha",
            "Ocorreu um erro ao tentar realizar a recuperação de senha, cheque as credênciais",
        )
    }
}

pub struct ResetPassword;

impl Screen for ResetPassword {
    type Request = ResetPasswordRequest;

    const NAME: &'static str = "reset_password";
    const ENDPOINT: &'static str = "/password/reset";

    fn schema() -> Schema {
        schemas::reset_password()
    }

    /// Fails without a reset token so the request never reaches the API.
    fn build_request(
        payload: &FormPayload,
        navigation: &NavigationContext,
    ) -> Result<Self::Request, AppError> {
        let token = navigation
            .query_param(RESET_TOKEN_PARAM)
            .ok_or_else(|| AppError::MissingParameter(RESET_TOKEN_PARAM.to_string()))?;

        Ok(ResetPasswordRequest {
            password: field(payload, schemas::PASSWORD)?,
            password_confirmation: field(payload, schemas::PASSWORD_CONFIRMATION)?,
            token,
        })
    }

    fn on_success() -> SuccessEffect {
        SuccessEffect {
            notification: None,
            redirect: Some(SIGN_IN_PATH),
        }
    }

    fn failure_notification() -> Notification {
        Notification::error(
            "Erro ao redefinir senha",
            "Ocorreu um erro ao redefinir sua senha, tente novamente",
        )
    }
}

pub struct SignUp;

impl Screen for SignUp {
    type Request = CreateUserRequest;

    const NAME: &'static str = "sign_up";
    const ENDPOINT: &'static str = "/users";

    fn schema() -> Schema {
        schemas::sign_up()
    }

    fn build_request(
        payload: &FormPayload,
        _navigation: &NavigationContext,
    ) -> Result<Self::Request, AppError> {
        Ok(CreateUserRequest {
            name: field(payload, schemas::NAME)?,
            email: field(payload, schemas::EMAIL)?,
            password: field(payload, schemas::PASSWORD)?,
        })
    }

    fn on_success() -> SuccessEffect {
        SuccessEffect {
            notification: Some(Notification::success(
                "Cadastro realizado!",
                "Você já pode fazer seu logon no GoBarber!",
            )),
            redirect: Some(SIGN_IN_PATH),
        }
    }

    fn failure_notification() -> Notification {
        Notification::error(
            "Erro no cadastro",
            "Ocorreu um erro ao fazer cadastro, tente novamente",
        )
    }
}

#[cfg(test)]
mod tests {
    use super::{ForgotPassword, ResetPassword, SignUp};
    use crate::{
        app_lib::AppError,
        features::{navigation::NavigationContext, submission::Screen},
        forms::FormPayload,
    };
    use serde_json::json;

    #[test]
    fn reset_request_uses_snake_case_confirmation() -> anyhow::Result<()> {
        let payload = FormPayload::new()
            .with("password", "secret")
            .with("passwordConfirmation", "secret");
        let navigation = NavigationContext::from_search("?token=abc123");

        let request = ResetPassword::build_request(&payload, &navigation)?;

        assert_eq!(
            serde_json::to_value(request)?,
            json!({
                "password": "secret",
                "password_confirmation": "secret",
                "token": "abc123",
            })
        );
        Ok(())
    }

    #[test]
    fn reset_request_without_token_fails() {
        let payload = FormPayload::new()
            .with("password", "abc")
            .with("passwordConfirmation", "abc");

        let result = ResetPassword::build_request(&payload, &NavigationContext::default());

        assert_eq!(
            result,
            Err(AppError::MissingParameter("token".to_string()))
        );
    }

    #[test]
    fn sign_up_request_ignores_unknown_fields() -> anyhow::Result<()> {
        let payload = FormPayload::new()
            .with("name", "A")
            .with("email", "a@b.com")
            .with("password", "123456")
            .with("nickname", "ignored");

        let request = SignUp::build_request(&payload, &NavigationContext::default())?;

        assert_eq!(
            serde_json::to_value(request)?,
            json!({ "name": "A", "email": "a@b.com", "password": "123456" })
        );
        Ok(())
    }

    #[test]
    fn sign_up_request_without_password_fails() {
        let payload = FormPayload::new().with("name", "A").with("email", "a@b.com");

        let result = SignUp::build_request(&payload, &NavigationContext::default());

        assert_eq!(
            result,
            Err(AppError::MissingParameter("password".to_string()))
        );
    }

    #[test]
    fn only_forgot_password_tracks_loading() {
        let flags = [
            ForgotPassword::TRACKS_LOADING,
            ResetPassword::TRACKS_LOADING,
            SignUp::TRACKS_LOADING,
        ];
        assert_eq!(flags, [true, false, false]);
    }
}
