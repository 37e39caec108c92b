//! Users API client.
//!
//! Performs the network IO for `GET {base}/api/`. Callers map the result into state
//! updates; nothing here touches `StateCtx`.

use log::debug;
use thiserror::Error;

use super::model::{RandomUsersResponse, UserRow};
use super::query::UsersQuery;
use crate::http::{GetRequest, HttpError};

#[derive(Debug, Error)]
pub enum UsersApiError {
    #[error("invalid users endpoint: {0}")]
    Url(#[from] url::ParseError),
    #[error(transparent)]
    Transport(#[from] HttpError),
    #[error("API returned status: {0}")]
    Status(u16),
    #[error("failed to decode users response: {0}")]
    Decode(#[from] serde_json::Error),
}

pub type ApiResult<T> = Result<T, UsersApiError>;

/// Fetches one batch and maps it into at most `BATCH_SIZE` rows.
pub async fn list_users(endpoint: &str, query: &UsersQuery) -> ApiResult<Vec<UserRow>> {
    let url = query.to_url(endpoint)?;
    debug!("GET {url}");

    let response = GetRequest::new(url)
        .header("accept", "application/json")
        .send()
        .await?;

    if !response.is_success() {
        return Err(UsersApiError::Status(response.status));
    }

    let body: RandomUsersResponse = response.json()?;
    Ok(body.into_rows())
}
