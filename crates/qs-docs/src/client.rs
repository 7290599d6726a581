//! Thin HTTP client over the three document API operations.

use qs_auth::BearerToken;

use crate::error::ApiError;
use crate::http::check_response;
use crate::model::{BatchUpdateRequest, CreateDocumentRequest, Document, EditRequest};

/// Client for the document API. Every call takes the bearer token for that
/// call; the client itself holds no credentials.
#[derive(Debug, Clone)]
pub struct DocsClient {
    http: reqwest::Client,
    base_url: String,
}

impl DocsClient {
    /// Create a client rooted at `base_url` (e.g. `https://docs.googleapis.com/v1`).
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// `POST /documents`
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure, non-success status, or an
    /// unparseable response.
    pub async fn create_document(
        &self,
        token: &BearerToken,
        title: &str,
    ) -> Result<Document, ApiError> {
        let url = format!("{}/documents", self.base_url);
        let resp = self
            .http
            .post(&url)
            .bearer_auth(token.secret())
            .json(&CreateDocumentRequest {
                title: title.to_string(),
            })
            .send()
            .await?;
        parse_document(check_response(resp).await?).await
    }

    /// `GET /documents/{id}`
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure, non-success status, or an
    /// unparseable response.
    pub async fn get_document(&self, token: &BearerToken, id: &str) -> Result<Document, ApiError> {
        let url = format!("{}/documents/{}", self.base_url, urlencoding::encode(id));
        let resp = self.http.get(&url).bearer_auth(token.secret()).send().await?;
        parse_document(check_response(resp).await?).await
    }

    /// `POST /documents/{id}:batchUpdate`
    ///
    /// The response body is not inspected; a success status means applied.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or non-success status.
    pub async fn batch_update(
        &self,
        token: &BearerToken,
        id: &str,
        requests: Vec<EditRequest>,
    ) -> Result<(), ApiError> {
        let url = format!(
            "{}/documents/{}:batchUpdate",
            self.base_url,
            urlencoding::encode(id)
        );
        let resp = self
            .http
            .post(&url)
            .bearer_auth(token.secret())
            .json(&BatchUpdateRequest { requests })
            .send()
            .await?;
        check_response(resp).await?;
        Ok(())
    }
}

async fn parse_document(resp: reqwest::Response) -> Result<Document, ApiError> {
    let text = resp.text().await?;
    serde_json::from_str(&text).map_err(|e| ApiError::Parse(format!("document: {e}")))
}
