//! Client configuration

use crate::{ClientError, ClientResult};

/// Environment variable names for the collaborator base URLs
const AUTH_URL_VAR: &str = "AUTH_SERVICE_URL";
const SALES_URL_VAR: &str = "SALES_SERVICE_URL";
const INVENTORY_URL_VAR: &str = "INVENTORY_SERVICE_URL";

/// Client configuration for connecting to the dashboard collaborators
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Auth service base URL (e.g., "http://localhost:4001")
    pub auth_url: String,

    /// Sales service base URL
    pub sales_url: String,

    /// Inventory service base URL
    pub inventory_url: String,

    /// Request timeout in seconds
    pub timeout: u64,
}

impl ClientConfig {
    /// Create a new client configuration
    pub fn new(
        auth_url: impl Into<String>,
        sales_url: impl Into<String>,
        inventory_url: impl Into<String>,
    ) -> Self {
        Self {
            auth_url: auth_url.into(),
            sales_url: sales_url.into(),
            inventory_url: inventory_url.into(),
            timeout: 30,
        }
    }

    /// Load configuration from the environment
    ///
    /// Honors a `.env` file when present. Requires `AUTH_SERVICE_URL`,
    /// `SALES_SERVICE_URL` and `INVENTORY_SERVICE_URL`.
    pub fn from_env() -> ClientResult<Self> {
        dotenv::dotenv().ok();

        let var = |name: &str| {
            std::env::var(name)
                .map_err(|_| ClientError::Internal(format!("{} is not set", name)))
        };

        Ok(Self {
            auth_url: var(AUTH_URL_VAR)?,
            sales_url: var(SALES_URL_VAR)?,
            inventory_url: var(INVENTORY_URL_VAR)?,
            timeout: 30,
        })
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(
            "http://localhost:4001",
            "http://localhost:4002",
            "http://localhost:4003",
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let config = ClientConfig::new("http://a", "http://s", "http://i");
        assert_eq!(config.timeout, 30);
        assert_eq!(config.auth_url, "http://a");
    }

    #[test]
    fn test_with_timeout() {
        let config = ClientConfig::default().with_timeout(5);
        assert_eq!(config.timeout, 5);
    }
}
