use crate::{
    api::{ApiClient, ApiError, LoginRequest, LoginResponse, RegisterRequest, RegisterResponse},
    state::session::Session,
};
use leptos::*;

type AuthContext = (ReadSignal<AuthState>, WriteSignal<AuthState>);

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthState {
    pub session: Option<Session>,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.session
            .as_ref()
            .map(|s| s.role.is_admin())
            .unwrap_or(false)
    }
}

pub fn use_api() -> ApiClient {
    use_context::<ApiClient>().unwrap_or_else(ApiClient::new)
}

fn create_auth_context() -> AuthContext {
    let api_client = use_api();
    create_signal(AuthState {
        session: api_client.current_session(),
    })
}

/// Client whose session-ending responses also sign the reactive state out.
pub fn session_bound_client(api: ApiClient, set_auth_state: WriteSignal<AuthState>) -> ApiClient {
    api.on_session_ended(move || {
        let _ = set_auth_state.try_set(AuthState::default());
    })
}

#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let ctx = create_auth_context();
    provide_context(session_bound_client(use_api(), ctx.1));
    provide_context::<AuthContext>(ctx);
    view! { <>{children()}</> }
}

pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().unwrap_or_else(|| create_signal(AuthState::default()))
}

pub async fn login_request(
    request: LoginRequest,
    api: &ApiClient,
    set_auth_state: WriteSignal<AuthState>,
) -> Result<LoginResponse, ApiError> {
    let response = api.login(&request).await?;
    set_auth_state.update(|state| state.session = api.current_session());
    Ok(response)
}

pub async fn register_request(
    request: RegisterRequest,
    api: &ApiClient,
) -> Result<RegisterResponse, ApiError> {
    api.register(&request).await
}

pub fn logout(api: &ApiClient, set_auth_state: WriteSignal<AuthState>) {
    set_auth_state.update(|state| state.session = None);
    api.logout();
}

pub fn use_login_action() -> Action<LoginRequest, Result<LoginResponse, ApiError>> {
    let (_auth, set_auth) = use_auth();
    let api = use_api();

    create_action(move |request: &LoginRequest| {
        let payload = request.clone();
        let api = api.clone();
        async move { login_request(payload, &api, set_auth).await }
    })
}

pub fn use_register_action() -> Action<RegisterRequest, Result<RegisterResponse, ApiError>> {
    let api = use_api();

    create_action(move |request: &RegisterRequest| {
        let payload = request.clone();
        let api = api.clone();
        async move { register_request(payload, &api).await }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::session::Role;
    use leptos::create_runtime;

    fn with_runtime<T>(test: impl FnOnce() -> T) -> T {
        let runtime = create_runtime();
        let result = test();
        runtime.dispose();
        result
    }

    #[test]
    fn use_auth_returns_default_without_context() {
        with_runtime(|| {
            let (state, _set_state) = use_auth();
            let snapshot = state.get();
            assert!(!snapshot.is_authenticated());
            assert!(!snapshot.is_admin());
        });
    }

    #[test]
    fn admin_flag_follows_session_role() {
        let state = AuthState {
            session: Some(Session::new("t", Role::Admin)),
        };
        assert!(state.is_authenticated());
        assert!(state.is_admin());

        let state = AuthState {
            session: Some(Session::new("t", Role::User)),
        };
        assert!(!state.is_admin());
    }
}
