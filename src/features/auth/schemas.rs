//! Field names and validation rules for the auth forms. Messages are shown to
//! the user verbatim.

use crate::forms::{FieldSchema, Schema};

pub const NAME: &str = "name";
pub const EMAIL: &str = "email";
pub const PASSWORD: &str = "password";
pub const PASSWORD_CONFIRMATION: &str = "passwordConfirmation";

/// Minimum password length accepted at sign-up.
pub const MIN_PASSWORD_LENGTH: usize = 6;

fn email_field() -> FieldSchema {
    FieldSchema::string(EMAIL)
        .required("E-mail obrigatório")
        .email("Digite um e-mail válido")
}

pub fn forgot_password() -> Schema {
    Schema::new().field(email_field())
}

/// Length is not checked here; the API enforces its own policy on reset.
pub fn reset_password() -> Schema {
    Schema::new()
        .field(FieldSchema::string(PASSWORD).required("Senha obrigatória"))
        .field(
            FieldSchema::string(PASSWORD_CONFIRMATION)
                .equals_field(PASSWORD, "Senhas devem ser iguais"),
        )
}

pub fn sign_up() -> Schema {
    Schema::new()
        .field(FieldSchema::string(NAME).required("Nome obrigatório"))
        .field(email_field())
        .field(FieldSchema::string(PASSWORD).min(
            MIN_PASSWORD_LENGTH,
            format!("Senha deve ter no mínimo {MIN_PASSWORD_LENGTH} caracteres"),
        ))
}
