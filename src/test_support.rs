//! Recording fakes for the submission collaborators. Each fake is a cheap
//! handle over shared state, so a test can keep a clone and inspect what the
//! handler did with the clone it was given.

use crate::{
    app_lib::{AppError, ApiTransport},
    features::{
        navigation::Navigator,
        notifications::{Notification, Notifier},
        submission::FormHandle,
    },
    forms::FieldErrors,
};
use async_trait::async_trait;
use serde_json::Value;
use std::{cell::RefCell, rc::Rc};

#[derive(Clone, Default)]
pub struct RecordingNotifier {
    sent: Rc<RefCell<Vec<Notification>>>,
}

impl RecordingNotifier {
    pub fn sent(&self) -> Vec<Notification> {
        self.sent.borrow().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        self.sent.borrow_mut().push(notification);
    }
}

#[derive(Default)]
struct FormState {
    errors: FieldErrors,
    resets: usize,
    loading: Vec<bool>,
}

#[derive(Clone, Default)]
pub struct RecordingForm {
    state: Rc<RefCell<FormState>>,
}

impl RecordingForm {
    /// Field messages currently shown.
    pub fn errors(&self) -> FieldErrors {
        self.state.borrow().errors.clone()
    }

    pub fn resets(&self) -> usize {
        self.state.borrow().resets
    }

    /// Every loading toggle, in order.
    pub fn loading_history(&self) -> Vec<bool> {
        self.state.borrow().loading.clone()
    }
}

impl FormHandle for RecordingForm {
    fn set_field_errors(&self, errors: FieldErrors) {
        self.state.borrow_mut().errors = errors;
    }

    fn reset_field_errors(&self) {
        let mut state = self.state.borrow_mut();
        state.errors.clear();
        state.resets += 1;
    }

    fn set_loading(&self, loading: bool) {
        self.state.borrow_mut().loading.push(loading);
    }
}

#[derive(Clone, Default)]
pub struct RecordingNavigator {
    visited: Rc<RefCell<Vec<String>>>,
}

impl RecordingNavigator {
    pub fn visited(&self) -> Vec<String> {
        self.visited.borrow().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, path: &str) {
        self.visited.borrow_mut().push(path.to_string());
    }
}

/// Transport that records requests and answers with a canned result.
#[derive(Clone)]
pub struct RecordingTransport {
    requests: Rc<RefCell<Vec<(String, Value)>>>,
    response: Result<(), AppError>,
}

impl Default for RecordingTransport {
    fn default() -> Self {
        Self::succeeding()
    }
}

impl RecordingTransport {
    pub fn succeeding() -> Self {
        Self {
            requests: Rc::default(),
            response: Ok(()),
        }
    }

    pub fn failing(err: AppError) -> Self {
        Self {
            requests: Rc::default(),
            response: Err(err),
        }
    }

    pub fn requests(&self) -> Vec<(String, Value)> {
        self.requests.borrow().clone()
    }
}

#[async_trait(?Send)]
impl ApiTransport for RecordingTransport {
    async fn post_json(&self, path: &str, body: &Value) -> Result<(), AppError> {
        self.requests
            .borrow_mut()
            .push((path.to_string(), body.clone()));
        self.response.clone()
    }
}
