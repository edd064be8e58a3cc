//! Account recovery and registration screens. Each screen validates locally
//! before talking to the API and reports failures either as field messages or
//! as one generic notification. Request bodies carry passwords and reset
//! tokens, so they must never be logged.
//!
//! Flow Overview: forgot-password posts the e-mail and confirms with a toast.
//! Reset-password needs the `token` query parameter from the mailed link and
//! returns to sign-in. Sign-up creates the user, confirms, and returns to
//! sign-in.

pub mod schemas;
pub mod screens;
pub mod types;

pub use screens::{ForgotPassword, ResetPassword, SignUp};
