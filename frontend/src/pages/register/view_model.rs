use super::utils::{self, RegisterFormState};
use crate::api::{ApiError, RegisterRequest, RegisterResponse};
use crate::state::auth;
use leptos::*;

#[derive(Clone, Copy)]
pub struct RegisterViewModel {
    pub form: RegisterFormState,
    pub error: RwSignal<Option<ApiError>>,
    pub message: RwSignal<Option<String>>,
    pub register_action: Action<RegisterRequest, Result<RegisterResponse, ApiError>>,
}

impl RegisterViewModel {
    pub fn submit(&self) {
        if self.register_action.pending().get_untracked() {
            return;
        }
        let name = self.form.name.get_untracked();
        let email = self.form.email.get_untracked();
        let password = self.form.password.get_untracked();
        if let Err(err) = utils::validate_registration(&name, &email, &password) {
            self.error.set(Some(err));
            return;
        }
        self.error.set(None);
        self.message.set(None);
        self.register_action.dispatch(RegisterRequest {
            name: name.trim().to_string(),
            email: email.trim().to_string(),
            password,
            role: self.form.role.get_untracked(),
        });
    }
}

pub fn use_register_view_model() -> RegisterViewModel {
    let form = RegisterFormState::default();
    let error = create_rw_signal(None::<ApiError>);
    let message = create_rw_signal(None::<String>);
    let register_action = auth::use_register_action();

    create_effect(move |_| {
        if let Some(result) = register_action.value().get() {
            match result {
                Ok(response) => {
                    error.set(None);
                    message.set(Some(utils::success_message(&response)));
                    form.reset();
                }
                Err(err) => error.set(Some(err)),
            }
        }
    });

    RegisterViewModel {
        form,
        error,
        message,
        register_action,
    }
}
