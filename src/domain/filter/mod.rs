pub mod error;
pub mod service;

pub use error::FilterServiceError;
pub use service::{FilterService, FilterSuccess};

use serde::{Deserialize, Serialize};

/// Body for POST /filter.
///
/// `action` is the legacy routing discriminator some clients still send; the
/// endpoint ignores it. `request_id` is an optional correlation token echoed
/// back verbatim so clients can discard responses to superseded selections.
#[derive(Debug, Serialize, Deserialize)]
pub struct FilterRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    #[serde(default)]
    pub category: i64,
    #[serde(default)]
    pub token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
}

/// Envelope for every filter response. Always delivered with HTTP 200; the
/// `success` flag carries the outcome.
#[derive(Debug, Serialize, Deserialize)]
pub struct FilterResponse {
    pub success: bool,
    pub data: FilterData,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterData {
    Items {
        html: String,
        count: usize,
        category_name: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        request_id: Option<String>,
    },
    Failure {
        message: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        request_id: Option<String>,
    },
}

impl FilterResponse {
    pub fn success(outcome: FilterSuccess, request_id: Option<String>) -> Self {
        Self {
            success: true,
            data: FilterData::Items {
                html: outcome.html,
                count: outcome.count,
                category_name: outcome.category_name,
                request_id,
            },
        }
    }

    pub fn failure(message: String, request_id: Option<String>) -> Self {
        Self {
            success: false,
            data: FilterData::Failure {
                message,
                request_id,
            },
        }
    }
}
