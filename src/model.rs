//! Request and response shapes for the gateway.
//!
//! Each endpoint gets a typed parameter struct: `Deserialize` for the inbound
//! body, `Serialize` for the outbound query string (absent fields are omitted).
//! Required fields are checked by `validate`, which names every missing field
//! so the caller gets the full list in one round trip.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::AppError;

/// Uniform result of one upstream call, success or error status alike.
/// Downstream code branches on `status_code` only.
#[derive(Debug, Clone)]
pub struct UpstreamReply {
    pub status_code: u16,
    pub body: Value,
}

impl UpstreamReply {
    /// Provider-supplied error message, when the body carries one.
    pub fn message(&self) -> Option<&str> {
        self.body.get("message").and_then(Value::as_str)
    }
}

/// The `{status, message, data}` wrapper every response goes out in.
#[derive(Debug, Clone, Serialize)]
pub struct ApiEnvelope {
    pub status: u16,
    pub message: String,
    pub data: Value,
}

impl ApiEnvelope {
    pub fn success(data: Value) -> Self {
        Self {
            status: 200,
            message: "Success".to_string(),
            data,
        }
    }

    pub fn error<T: Into<String>>(status: u16, message: T, data: Value) -> Self {
        Self {
            status,
            message: message.into(),
            data,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CityParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city_ids: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CollectionParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lon: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CuisineParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lon: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EstablishmentParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lon: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GeocodeParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lon: Option<f64>,
}

impl GeocodeParams {
    pub fn validate(&self) -> Result<(), AppError> {
        let mut missing = Vec::new();
        if self.city_id.is_none() {
            missing.push("city_id");
        }
        if self.lat.is_none() {
            missing.push("lat");
        }
        if self.lon.is_none() {
            missing.push("lon");
        }
        require(missing)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LocationParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lon: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
}

impl LocationParams {
    pub fn validate(&self) -> Result<(), AppError> {
        let mut missing = Vec::new();
        if self.query.is_none() {
            missing.push("query");
        }
        require(missing)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LocationDetailParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity_type: Option<String>,
}

impl LocationDetailParams {
    pub fn validate(&self) -> Result<(), AppError> {
        let mut missing = Vec::new();
        if self.entity_id.is_none() {
            missing.push("entity_id");
        }
        if self.entity_type.is_none() {
            missing.push("entity_type");
        }
        require(missing)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RestaurantParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub res_id: Option<u64>,
}

impl RestaurantParams {
    pub fn validate(&self) -> Result<(), AppError> {
        let mut missing = Vec::new();
        if self.res_id.is_none() {
            missing.push("res_id");
        }
        require(missing)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DailyMenuParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub res_id: Option<u64>,
}

impl DailyMenuParams {
    pub fn validate(&self) -> Result<(), AppError> {
        let mut missing = Vec::new();
        if self.res_id.is_none() {
            missing.push("res_id");
        }
        require(missing)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReviewParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub res_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
}

impl ReviewParams {
    pub fn validate(&self) -> Result<(), AppError> {
        let mut missing = Vec::new();
        if self.res_id.is_none() {
            missing.push("res_id");
        }
        require(missing)
    }
}

/// Everything the provider's search endpoint accepts. All optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lon: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radius: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cuisines: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub establishment_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collection_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<String>,
}

fn require(missing: Vec<&'static str>) -> Result<(), AppError> {
    if missing.is_empty() {
        Ok(())
    } else {
        Err(AppError::Validation(missing))
    }
}
