//! Platform analytics operations.

use crate::api::dto::AnalyticsResponse;
use crate::errors::ClientError;
use crate::http::ApiClient;

impl ApiClient {
    /// Fetches the platform-wide analytics payload
    ///
    /// Authenticated; an expired access token is refreshed transparently by
    /// the transport. The payload shape is owned by the dashboards, so it is
    /// returned as raw JSON.
    pub async fn platform_analytics(&self) -> Result<serde_json::Value, ClientError> {
        let response: AnalyticsResponse = self.get("/analytics/platform").await?;

        if !response.success {
            return Err(ClientError::malformed(
                "analytics envelope flagged failure despite a success status",
            ));
        }

        Ok(response.data)
    }
}
