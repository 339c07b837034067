use reqwest::Method;

use super::{
    client::ApiClient,
    types::{ApiError, Summary},
};

impl ApiClient {
    /// Always fetched fresh; the summary is never cached client-side.
    pub async fn get_dashboard_summary(&self) -> Result<Summary, ApiError> {
        self.send_json::<(), _>(Method::GET, "/dashboard", None, true)
            .await
    }
}
