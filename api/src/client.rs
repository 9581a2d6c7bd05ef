//! HTTP client for the clinic REST service.
//!
//! Stateless: every call attaches the caller's bearer credential and hands
//! the typed result back; no shared state is mutated here. Calls are made
//! once — retrying is the user's decision, not the client's.

use reqwest::StatusCode;

use crate::error::{DeleteError, FetchError};
use crate::models::EmailRecord;
use crate::session::AccessToken;

/// Base URL of the remote service, fixed at compile time.
/// Override with the `CLINIC_API_URL` environment variable when building.
pub const DEFAULT_BASE_URL: &str = match option_env!("CLINIC_API_URL") {
    Some(url) => url,
    None => "https://onedv613-restful-api.onrender.com/api/v1",
};

/// Outcome of a delete request that produced a response.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The service answered 204 No Content; the record is gone.
    Deleted,
    /// The service answered some other success status. Soft failure: the
    /// record's fate is unknown, so the caller shows a generic message.
    Unexpected(StatusCode),
}

/// Client for the `/emails` resource.
#[derive(Clone, Debug)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            http: reqwest::Client::new(),
        }
    }

    fn emails_url(&self) -> String {
        format!("{}/emails", self.base_url)
    }

    fn email_url(&self, id: i64) -> String {
        format!("{}/emails/{}", self.base_url, id)
    }

    /// Fetch all email records.
    pub async fn list_emails(&self, token: &AccessToken) -> Result<Vec<EmailRecord>, FetchError> {
        let response = self
            .http
            .get(self.emails_url())
            .bearer_auth(token.as_str())
            .send()
            .await?;
        ensure_success(response.status())?;
        Ok(response.json().await?)
    }

    /// Fetch a single email record by identifier.
    pub async fn get_email(
        &self,
        id: i64,
        token: &AccessToken,
    ) -> Result<EmailRecord, FetchError> {
        let response = self
            .http
            .get(self.email_url(id))
            .bearer_auth(token.as_str())
            .send()
            .await?;
        ensure_success(response.status())?;
        Ok(response.json().await?)
    }

    /// Delete an email record by identifier.
    ///
    /// Deleting an already-deleted identifier surfaces as the service's
    /// not-found status, i.e. a [`DeleteError::Status`].
    pub async fn delete_email(
        &self,
        id: i64,
        token: &AccessToken,
    ) -> Result<DeleteOutcome, DeleteError> {
        let response = self
            .http
            .delete(self.email_url(id))
            .bearer_auth(token.as_str())
            .send()
            .await?;
        delete_outcome(response.status())
    }
}

fn ensure_success(status: StatusCode) -> Result<(), FetchError> {
    if status.is_success() {
        Ok(())
    } else {
        Err(FetchError::Status(status))
    }
}

fn delete_outcome(status: StatusCode) -> Result<DeleteOutcome, DeleteError> {
    if status == StatusCode::NO_CONTENT {
        Ok(DeleteOutcome::Deleted)
    } else if status.is_success() {
        Ok(DeleteOutcome::Unexpected(status))
    } else {
        Err(DeleteError::Status(status))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_content_is_the_canonical_deletion_success() {
        assert_eq!(
            delete_outcome(StatusCode::NO_CONTENT).unwrap(),
            DeleteOutcome::Deleted
        );
    }

    #[test]
    fn other_success_statuses_are_soft_failures() {
        assert_eq!(
            delete_outcome(StatusCode::OK).unwrap(),
            DeleteOutcome::Unexpected(StatusCode::OK)
        );
        assert_eq!(
            delete_outcome(StatusCode::ACCEPTED).unwrap(),
            DeleteOutcome::Unexpected(StatusCode::ACCEPTED)
        );
    }

    #[test]
    fn non_success_statuses_are_errors() {
        assert!(matches!(
            delete_outcome(StatusCode::NOT_FOUND),
            Err(DeleteError::Status(StatusCode::NOT_FOUND))
        ));
        assert!(matches!(
            delete_outcome(StatusCode::INTERNAL_SERVER_ERROR),
            Err(DeleteError::Status(_))
        ));
    }

    #[test]
    fn fetch_rejects_non_success_statuses() {
        assert!(ensure_success(StatusCode::OK).is_ok());
        assert!(matches!(
            ensure_success(StatusCode::UNAUTHORIZED),
            Err(FetchError::Status(StatusCode::UNAUTHORIZED))
        ));
    }

    #[test]
    fn record_urls_are_parameterized_by_id() {
        let client = ApiClient::with_base_url("http://localhost:3000/api/v1");
        assert_eq!(
            client.email_url(42),
            "http://localhost:3000/api/v1/emails/42"
        );
        assert_eq!(client.emails_url(), "http://localhost:3000/api/v1/emails");
    }
}
