//! JSON-level request surface for the marina service.
//!
//! [`MarinaApi`] is the boundary an HTTP layer would call into: raw
//! identifier strings and `serde_json` bodies come in, validated requests go
//! to the actors, and normalized responses come back with HTTP-style status
//! codes. Binding an actual server is out of scope; every route in the
//! service's surface maps 1:1 onto a method here.

use crate::boat_actor::BoatError;
use crate::clients::{ActorClient, BoatClient, SlipClient};
use crate::framework::ActorError;
use crate::model::{BoatCreate, BoatUpdate, SlipCreate, SlipUpdate};
use crate::slip_actor::SlipError;
use crate::validation::{self, FieldSpec, FieldType, ResourceKind, ValidationError};
use serde::Serialize;
use serde_json::{json, Map, Value};
use tracing::instrument;

const BOAT_CREATE_FIELDS: [FieldSpec; 3] = [
    FieldSpec::required("name", FieldType::String),
    FieldSpec::optional("type", FieldType::String),
    FieldSpec::optional("length", FieldType::Integer),
];

const BOAT_UPDATE_FIELDS: [FieldSpec; 3] = [
    FieldSpec::optional("name", FieldType::String),
    FieldSpec::optional("type", FieldType::String),
    FieldSpec::optional("length", FieldType::Integer),
];

const SLIP_CREATE_FIELDS: [FieldSpec; 1] = [FieldSpec::required("number", FieldType::Integer)];

const SLIP_UPDATE_FIELDS: [FieldSpec; 1] = [FieldSpec::optional("number", FieldType::Integer)];

const ARRIVAL_FIELDS: [FieldSpec; 1] = [FieldSpec::required("boat_id", FieldType::String)];

/// A normalized success response: status code plus JSON body.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Value,
}

impl ApiResponse {
    fn ok(body: Value) -> Self {
        Self { status: 200, body }
    }

    fn no_content() -> Self {
        Self { status: 204, body: Value::Null }
    }
}

/// A request-scoped failure: status code plus message.
///
/// Serializes as the error payload the surface promises: `{"message": ...}`.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{message}")]
pub struct ApiError {
    pub status: u16,
    pub message: String,
}

impl ApiError {
    fn new(status: u16, message: impl Into<String>) -> Self {
        Self { status, message: message.into() }
    }

    /// The JSON error body.
    pub fn body(&self) -> Value {
        json!({ "message": self.message })
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        ApiError::new(400, e.to_string())
    }
}

impl From<ActorError<BoatError>> for ApiError {
    fn from(e: ActorError<BoatError>) -> Self {
        match e {
            ActorError::NotFound(_) => ApiError::new(404, "not found"),
            ActorError::Entity(err @ BoatError::Docked(_)) => ApiError::new(403, err.to_string()),
            ActorError::Entity(err @ BoatError::AlreadyDocked(_)) => {
                ApiError::new(403, err.to_string())
            }
            other => ApiError::new(500, other.to_string()),
        }
    }
}

impl From<ActorError<SlipError>> for ApiError {
    fn from(e: ActorError<SlipError>) -> Self {
        match e {
            ActorError::NotFound(_) => ApiError::new(404, "not found"),
            ActorError::Entity(err) => match err {
                SlipError::DuplicateNumber(_)
                | SlipError::Occupied(_)
                | SlipError::BoatAlreadyDocked(_) => ApiError::new(403, err.to_string()),
                SlipError::Empty(_) | SlipError::BoatNotFound(_) => {
                    ApiError::new(404, err.to_string())
                }
                SlipError::BoatUnavailable(_) => ApiError::new(500, err.to_string()),
            },
            other => ApiError::new(500, other.to_string()),
        }
    }
}

fn to_body<T: Serialize>(entity: &T) -> Result<Value, ApiError> {
    serde_json::to_value(entity).map_err(|e| ApiError::new(500, e.to_string()))
}

fn str_field(checked: &Map<String, Value>, name: &str) -> Option<String> {
    checked.get(name).and_then(Value::as_str).map(str::to_string)
}

fn int_field(checked: &Map<String, Value>, name: &str) -> Option<i64> {
    checked.get(name).and_then(Value::as_i64)
}

/// The full request surface, one method per route.
#[derive(Clone)]
pub struct MarinaApi {
    boats: BoatClient,
    slips: SlipClient,
}

impl MarinaApi {
    pub fn new(boats: BoatClient, slips: SlipClient) -> Self {
        Self { boats, slips }
    }

    // --- Boat routes ---

    /// `GET /boat`
    #[instrument(skip(self))]
    pub async fn list_boats(&self) -> Result<ApiResponse, ApiError> {
        let boats = self.boats.list().await?;
        Ok(ApiResponse::ok(to_body(&boats)?))
    }

    /// `POST /boat`
    #[instrument(skip(self, body))]
    pub async fn create_boat(&self, body: &Value) -> Result<ApiResponse, ApiError> {
        let checked = validation::validate_payload(body, &BOAT_CREATE_FIELDS)?;
        let params = BoatCreate {
            name: str_field(&checked, "name").unwrap_or_default(),
            boat_type: str_field(&checked, "type"),
            length: int_field(&checked, "length"),
        };
        let boat = self.boats.create_boat(params).await?;
        Ok(ApiResponse::ok(to_body(&boat)?))
    }

    /// `GET /boat/{id}`
    #[instrument(skip(self))]
    pub async fn get_boat(&self, raw_id: &str) -> Result<ApiResponse, ApiError> {
        let id = validation::parse_key(raw_id, ResourceKind::Boat)?;
        let boat = self
            .boats
            .get(id)
            .await?
            .ok_or_else(|| ApiError::new(404, "not found"))?;
        Ok(ApiResponse::ok(to_body(&boat)?))
    }

    /// `PATCH /boat/{id}`
    #[instrument(skip(self, body))]
    pub async fn update_boat(&self, raw_id: &str, body: &Value) -> Result<ApiResponse, ApiError> {
        let id = validation::parse_key(raw_id, ResourceKind::Boat)?;
        let checked = validation::validate_payload(body, &BOAT_UPDATE_FIELDS)?;
        let update = BoatUpdate {
            name: str_field(&checked, "name"),
            boat_type: str_field(&checked, "type"),
            length: int_field(&checked, "length"),
        };
        let boat = self.boats.update_boat(id, update).await?;
        Ok(ApiResponse::ok(to_body(&boat)?))
    }

    /// `DELETE /boat/{id}`
    #[instrument(skip(self))]
    pub async fn delete_boat(&self, raw_id: &str) -> Result<ApiResponse, ApiError> {
        let id = validation::parse_key(raw_id, ResourceKind::Boat)?;
        self.boats.delete(id).await?;
        Ok(ApiResponse::no_content())
    }

    // --- Slip routes ---

    /// `GET /slip` — slips come back ordered by `number` ascending.
    #[instrument(skip(self))]
    pub async fn list_slips(&self) -> Result<ApiResponse, ApiError> {
        let slips = self.slips.list().await?;
        Ok(ApiResponse::ok(to_body(&slips)?))
    }

    /// `POST /slip` — occupancy fields in the payload are ignored; a new slip
    /// always starts empty.
    #[instrument(skip(self, body))]
    pub async fn create_slip(&self, body: &Value) -> Result<ApiResponse, ApiError> {
        let checked = validation::validate_payload(body, &SLIP_CREATE_FIELDS)?;
        let params = SlipCreate {
            number: int_field(&checked, "number").unwrap_or_default(),
        };
        let slip = self.slips.create_slip(params).await?;
        Ok(ApiResponse::ok(to_body(&slip)?))
    }

    /// `GET /slip/{id}`
    #[instrument(skip(self))]
    pub async fn get_slip(&self, raw_id: &str) -> Result<ApiResponse, ApiError> {
        let id = validation::parse_key(raw_id, ResourceKind::Slip)?;
        let slip = self
            .slips
            .get(id)
            .await?
            .ok_or_else(|| ApiError::new(404, "not found"))?;
        Ok(ApiResponse::ok(to_body(&slip)?))
    }

    /// `PATCH /slip/{id}`
    #[instrument(skip(self, body))]
    pub async fn update_slip(&self, raw_id: &str, body: &Value) -> Result<ApiResponse, ApiError> {
        let id = validation::parse_key(raw_id, ResourceKind::Slip)?;
        let checked = validation::validate_payload(body, &SLIP_UPDATE_FIELDS)?;
        let update = SlipUpdate {
            number: int_field(&checked, "number"),
        };
        let slip = self.slips.update_slip(id, update).await?;
        Ok(ApiResponse::ok(to_body(&slip)?))
    }

    /// `DELETE /slip/{id}`
    #[instrument(skip(self))]
    pub async fn delete_slip(&self, raw_id: &str) -> Result<ApiResponse, ApiError> {
        let id = validation::parse_key(raw_id, ResourceKind::Slip)?;
        self.slips.delete(id).await?;
        Ok(ApiResponse::no_content())
    }

    // --- Occupancy routes ---

    /// `POST /slip/{id}/boat` — boat arrival.
    #[instrument(skip(self, body))]
    pub async fn arrive(&self, raw_slip_id: &str, body: &Value) -> Result<ApiResponse, ApiError> {
        let slip_id = validation::parse_key(raw_slip_id, ResourceKind::Slip)?;
        let checked = validation::validate_payload(body, &ARRIVAL_FIELDS)?;
        let raw_boat_id = str_field(&checked, "boat_id").unwrap_or_default();
        let boat_id = validation::parse_key(&raw_boat_id, ResourceKind::Boat)?;

        let slip = self.slips.arrive(slip_id, boat_id).await?;
        Ok(ApiResponse::ok(to_body(&slip)?))
    }

    /// `DELETE /slip/{id}/boat` — boat departure.
    #[instrument(skip(self))]
    pub async fn depart(&self, raw_slip_id: &str) -> Result<ApiResponse, ApiError> {
        let slip_id = validation::parse_key(raw_slip_id, ResourceKind::Slip)?;
        self.slips.depart(slip_id).await?;
        Ok(ApiResponse::no_content())
    }
}
