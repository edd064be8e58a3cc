//! Shared UI components exported for routes.

pub(crate) mod form;
pub(crate) mod layout;
pub(crate) mod ui;

pub(crate) use form::{FormState, Input, RouterNavigator};
pub(crate) use layout::AuthLayout;
pub(crate) use ui::Button;
