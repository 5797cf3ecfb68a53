//! Types shared by every resource: paging, identifiers, plain responses

use bson::oid::ObjectId;
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::error::{AppError, AppResult};

/// skip/limit paging for list endpoints
#[derive(Debug, Default, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListQuery {
    /// Number of documents to skip (default 0)
    // the store encodes skip as a signed 64-bit integer
    #[validate(range(max = 9223372036854775807u64, message = "skip is too large"))]
    pub skip: Option<u64>,
    /// Maximum number of documents returned (default 100)
    pub limit: Option<u64>,
}

impl ListQuery {
    pub const DEFAULT_LIMIT: u64 = 100;

    pub fn skip(&self) -> u64 {
        self.skip.unwrap_or(0).min(i64::MAX as u64)
    }

    pub fn limit(&self) -> u64 {
        self.limit.unwrap_or(Self::DEFAULT_LIMIT)
    }
}

/// Simple confirmation body
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Parse an identifier taken from a request path
pub fn parse_object_id(raw: &str, kind: &str) -> AppResult<ObjectId> {
    ObjectId::parse_str(raw)
        .map_err(|_| AppError::BadRequest(format!("Invalid {} id '{}'", kind, raw)))
}

/// serde helper reading an ObjectId from its hex string form
pub fn deserialize_object_id<'de, D>(deserializer: D) -> Result<ObjectId, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    ObjectId::parse_str(&raw).map_err(serde::de::Error::custom)
}
