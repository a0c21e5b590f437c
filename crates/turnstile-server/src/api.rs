//! Wire types for the queue API.
//!
//! These types define the JSON surface of the service; field names are
//! camelCase on the wire. Input-shape validation lives here, at the
//! boundary - the core store never receives an invalid name.

use serde::{Deserialize, Serialize};

use turnstile_core::ServiceType;

/// Maximum client name length, in characters, after trimming.
pub const MAX_NAME_LEN: usize = 20;

/// Body of `POST /queue`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnqueueRequest {
    /// Client name (1-20 characters after trimming).
    pub name: String,
    /// Requested service type.
    pub service_type: ServiceType,
}

impl EnqueueRequest {
    /// Validates the request and returns the trimmed name.
    ///
    /// Service-type membership is already enforced by deserialization;
    /// only the name needs checking here.
    ///
    /// # Errors
    ///
    /// Returns a human-readable message if the trimmed name is empty or
    /// longer than [`MAX_NAME_LEN`] characters.
    pub fn validate(&self) -> Result<String, String> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err("name must not be empty".to_string());
        }
        if name.chars().count() > MAX_NAME_LEN {
            return Err(format!("name must be at most {MAX_NAME_LEN} characters"));
        }
        Ok(name.to_string())
    }
}

/// Static status payload served at the root path.
#[derive(Debug, Clone, Serialize)]
pub struct ServiceInfo {
    /// Service name.
    pub service: String,
    /// Path to the API documentation.
    pub docs: String,
    /// Endpoint paths exposed by the service.
    pub endpoints: Vec<String>,
}

impl ServiceInfo {
    /// Returns the status payload for this service.
    #[must_use]
    pub fn current() -> Self {
        Self {
            service: "Turnstile queue service".to_string(),
            docs: "/docs".to_string(),
            endpoints: vec!["/queue".to_string(), "/queue/{id}".to_string()],
        }
    }
}

/// Runtime status payload served at `/api/status`.
#[derive(Debug, Clone, Serialize)]
pub struct ServerStatus {
    /// Always `"running"`.
    pub status: String,
    /// Seconds since the server started.
    pub uptime_seconds: u64,
    /// Number of clients currently waiting.
    pub waiting: usize,
    /// Number of clients served since startup.
    pub served: usize,
}
