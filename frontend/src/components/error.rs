use crate::api::ApiError;
use leptos::*;

#[component]
pub fn InlineErrorMessage(error: Signal<Option<ApiError>>) -> impl IntoView {
    view! {
        <Show when=move || error.get().is_some() fallback=|| ()>
            <div class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded space-y-1 my-2">
                <div class="font-bold">{move || error.get().map(|e| e.error).unwrap_or_default()}</div>
                {move || error.get().map(|e| {
                    let detail = error_detail(&e);
                    match detail {
                        Some(detail) => view! { <div class="text-xs opacity-75">{detail}</div> }.into_view(),
                        None => ().into_view(),
                    }
                }).unwrap_or_else(|| ().into_view())}
            </div>
        </Show>
    }
}

/// "Code: HTTP_ERROR (500)". Validation and unknown errors carry no detail line.
fn error_detail(err: &ApiError) -> Option<String> {
    match err.code.as_str() {
        "" | "UNKNOWN" | "VALIDATION_ERROR" => None,
        code => Some(match err.status {
            Some(status) => format!("Code: {} ({})", code, status),
            None => format!("Code: {}", code),
        }),
    }
}
