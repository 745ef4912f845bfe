//! Connection-string glue.
//!
//! The dialect itself never retains a connection; this builder assembles
//! the semicolon-separated `key=value` string the underlying driver parses.
//! Empty keys are omitted.

/// Connection options for the underlying driver.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConnectionConfig {
    pub region: String,
    pub access_key_id: String,
    pub secret_key: String,
    pub endpoint: String,
    pub timeout_ms: Option<u64>,
}

impl ConnectionConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.region = region.into();
        self
    }

    pub fn access_key_id(mut self, id: impl Into<String>) -> Self {
        self.access_key_id = id.into();
        self
    }

    pub fn secret_key(mut self, key: impl Into<String>) -> Self {
        self.secret_key = key.into();
        self
    }

    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn timeout_ms(mut self, timeout: u64) -> Self {
        self.timeout_ms = Some(timeout);
        self
    }

    /// Render the driver connection string, e.g.
    /// `region=ap-northeast-1;akId=...;secretKey=...;endpoint=http://localhost:8000;timeout=30000`.
    pub fn connection_string(&self) -> String {
        let mut parts = Vec::new();
        if !self.region.is_empty() {
            parts.push(format!("region={}", self.region));
        }
        if !self.access_key_id.is_empty() {
            parts.push(format!("akId={}", self.access_key_id));
        }
        if !self.secret_key.is_empty() {
            parts.push(format!("secretKey={}", self.secret_key));
        }
        if !self.endpoint.is_empty() {
            parts.push(format!("endpoint={}", self.endpoint));
        }
        if let Some(timeout) = self.timeout_ms {
            parts.push(format!("timeout={}", timeout));
        }
        parts.join(";")
    }
}
