use super::utils::{self, LoginFormState};
use crate::api::{ApiError, LoginRequest, LoginResponse};
use crate::state::auth::{self, use_api};
use leptos::*;

#[derive(Clone, Copy)]
pub struct LoginViewModel {
    pub form: LoginFormState,
    pub error: RwSignal<Option<ApiError>>,
    pub message: RwSignal<Option<String>>,
    pub login_action: Action<LoginRequest, Result<LoginResponse, ApiError>>,
}

impl LoginViewModel {
    pub fn submit(&self) {
        if self.login_action.pending().get_untracked() {
            return;
        }
        let email = self.form.email.get_untracked();
        let password = self.form.password.get_untracked();
        if let Err(err) = utils::validate_credentials(&email, &password) {
            self.error.set(Some(err));
            return;
        }
        self.error.set(None);
        self.message.set(None);
        self.login_action.dispatch(LoginRequest {
            email: email.trim().to_string(),
            password,
        });
    }
}

pub fn use_login_view_model() -> LoginViewModel {
    let form = LoginFormState::default();
    let error = create_rw_signal(None::<ApiError>);
    let message = create_rw_signal(None::<String>);
    let login_action = auth::use_login_action();
    let api = use_api();

    create_effect(move |_| {
        if let Some(result) = login_action.value().get() {
            match result {
                Ok(response) => {
                    error.set(None);
                    message.set(Some(utils::success_message(&response)));
                    form.password.set(String::new());
                    api.navigator().go_to_dashboard();
                }
                Err(err) => error.set(Some(err)),
            }
        }
    });

    LoginViewModel {
        form,
        error,
        message,
        login_action,
    }
}
