use std::any::Any;

use log::info;
use peoplegrid_states::{DispatchPolicy, State, state_assign_impl};
use serde::Deserialize;
use thiserror::Error;
use ustr::Ustr;

pub const DEFAULT_API_BASE_URL: &str = "https://randomuser.me";

/// What happens to a fetch result that arrives after a newer fetch was issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StaleResponsePolicy {
    /// Apply every result in completion order; the last one to resolve wins.
    #[default]
    Apply,
    /// Cancel superseded fetches and drop their results.
    Discard,
}

impl StaleResponsePolicy {
    pub fn dispatch_policy(self) -> DispatchPolicy {
        match self {
            Self::Apply => DispatchPolicy::Concurrent,
            Self::Discard => DispatchPolicy::LatestOnly,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read environment: {0}")]
    Env(#[from] serde_env::Error),
    #[error("PEOPLEGRID_API_BASE_URL must not be empty")]
    EmptyBaseUrl,
}

#[derive(Debug, Default, Deserialize)]
struct RawConfig {
    peoplegrid_api_base_url: Option<String>,
    peoplegrid_stale_responses: Option<StaleResponsePolicy>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusinessConfig {
    pub api_base_url: String,
    pub stale_responses: StaleResponsePolicy,
}

impl BusinessConfig {
    /// Config pointing at `base_url`, e.g. a mock server in tests.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: normalize_base_url(&base_url.into()),
            stale_responses: StaleResponsePolicy::default(),
        }
    }

    pub fn with_stale_responses(mut self, policy: StaleResponsePolicy) -> Self {
        self.stale_responses = policy;
        self
    }

    /// Reads `PEOPLEGRID_API_BASE_URL` and `PEOPLEGRID_STALE_RESPONSES`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(std::env::vars())
    }

    pub fn from_vars<I, S>(vars: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (S, S)>,
        S: AsRef<str>,
    {
        let raw: RawConfig = serde_env::from_iter(vars)?;
        Self::from_raw(raw)
    }

    fn from_raw(raw: RawConfig) -> Result<Self, ConfigError> {
        let RawConfig {
            peoplegrid_api_base_url,
            peoplegrid_stale_responses,
        } = raw;

        let api_base_url = match peoplegrid_api_base_url {
            Some(url) if url.trim().is_empty() => return Err(ConfigError::EmptyBaseUrl),
            Some(url) => {
                info!("Using PEOPLEGRID_API_BASE_URL: {url}");
                normalize_base_url(&url)
            }
            None => DEFAULT_API_BASE_URL.to_string(),
        };

        let stale_responses = peoplegrid_stale_responses.unwrap_or_default();
        info!("Stale fetch responses: {stale_responses:?}");

        Ok(Self {
            api_base_url,
            stale_responses,
        })
    }

    /// `{api_base_url}/api/`
    pub fn users_endpoint(&self) -> Ustr {
        Ustr::from(&format!("{}/api/", self.api_base_url))
    }
}

fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

impl Default for BusinessConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE_URL)
    }
}

impl State for BusinessConfig {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn snapshot(&self) -> Option<Box<dyn Any + Send>> {
        Some(Box::new(self.clone()))
    }

    fn assign_box(&mut self, new_self: Box<dyn Any + Send>) {
        state_assign_impl(self, new_self);
    }
}
