// ============================================================================
// USE SUBMISSION - loading / error / success lifecycle of a form submit
// ============================================================================

use std::future::Future;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config::CONFIG;
use crate::error::AuthError;
use crate::routes::Route;
use crate::viewmodels::{AfterSuccess, FormKind};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SubmissionState {
    pub loading: bool,
    pub error: Option<String>,
    pub success: Option<&'static str>,
}

#[derive(Clone)]
pub struct UseSubmissionHandle {
    pub state: UseStateHandle<SubmissionState>,
    kind: FormKind,
    navigate: Callback<Route>,
}

impl UseSubmissionHandle {
    pub fn loading(&self) -> bool {
        self.state.loading
    }

    /// Runs `job` unless `precheck` already failed or a submit is in flight.
    /// A failed precheck shows its message without ever entering loading.
    pub fn submit<F>(&self, precheck: Result<(), AuthError>, job: F)
    where
        F: Future<Output = Result<(), AuthError>> + 'static,
    {
        if self.state.loading {
            return;
        }
        if let Err(error) = precheck {
            self.state.set(SubmissionState {
                error: error.user_message(),
                ..SubmissionState::default()
            });
            return;
        }

        self.state.set(SubmissionState {
            loading: true,
            ..SubmissionState::default()
        });

        let state = self.state.clone();
        let kind = self.kind;
        let navigate = self.navigate.clone();
        wasm_bindgen_futures::spawn_local(async move {
            match job.await {
                Ok(()) => finish_success(kind, state, navigate),
                Err(error) => finish_error(kind, error, state, navigate),
            }
        });
    }
}

fn finish_success(kind: FormKind, state: UseStateHandle<SubmissionState>, navigate: Callback<Route>) {
    match kind.after_success() {
        AfterSuccess::Navigate(route) => {
            state.set(SubmissionState::default());
            navigate.emit(route);
        }
        after => {
            state.set(SubmissionState {
                success: kind.success_message(),
                ..SubmissionState::default()
            });
            Timeout::new(CONFIG.success_dismiss_ms, move || {
                state.set(SubmissionState::default());
                if let AfterSuccess::NavigateAfterDismiss(route) = after {
                    navigate.emit(route);
                }
            })
            .forget();
        }
    }
}

fn finish_error(
    kind: FormKind,
    error: AuthError,
    state: UseStateHandle<SubmissionState>,
    navigate: Callback<Route>,
) {
    state.set(SubmissionState {
        error: error.user_message(),
        ..SubmissionState::default()
    });
    if let Some(route) = kind.redirect_on_error(&error) {
        navigate.emit(route);
    }
}

#[hook]
pub fn use_submission(kind: FormKind, navigate: Callback<Route>) -> UseSubmissionHandle {
    let state = use_state(SubmissionState::default);
    UseSubmissionHandle {
        state,
        kind,
        navigate,
    }
}
