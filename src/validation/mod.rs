//! Boundary validation for identifiers and request payloads.
//!
//! Everything that arrives from outside the system passes through here before
//! it reaches an actor: raw identifier strings become typed [`ResourceKey`]s,
//! and raw JSON bodies become checked field maps. The functions are pure —
//! no store access, no side effects.

use serde::Serialize;
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The kinds of resource the system manages.
///
/// Every identifier carries its kind as a prefix (`boat_7`, `slip_3`), so a
/// key for one resource can never be used to address another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ResourceKind {
    Boat,
    Slip,
}

impl ResourceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceKind::Boat => "boat",
            ResourceKind::Slip => "slip",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A typed, kind-tagged entity identifier.
///
/// Keys are assigned by the owning actor from a monotonic counter and are
/// immutable afterwards. The display form (`boat_7`) is the wire encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ResourceKey {
    kind: ResourceKind,
    serial: u64,
}

impl ResourceKey {
    pub fn new(kind: ResourceKind, serial: u64) -> Self {
        Self { kind, serial }
    }

    pub fn kind(&self) -> ResourceKind {
        self.kind
    }
}

impl fmt::Display for ResourceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.kind, self.serial)
    }
}

impl Serialize for ResourceKey {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl FromStr for ResourceKey {
    type Err = ValidationError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let (kind, serial) = raw
            .rsplit_once('_')
            .ok_or_else(|| ValidationError::InvalidIdentifier(raw.to_string()))?;
        let kind = match kind {
            "boat" => ResourceKind::Boat,
            "slip" => ResourceKind::Slip,
            _ => return Err(ValidationError::InvalidIdentifier(raw.to_string())),
        };
        let serial = serial
            .parse::<u64>()
            .map_err(|_| ValidationError::InvalidIdentifier(raw.to_string()))?;
        Ok(ResourceKey::new(kind, serial))
    }
}

/// The declared type of a payload field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    String,
    Integer,
    Boolean,
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FieldType::String => "string",
            FieldType::Integer => "integer",
            FieldType::Boolean => "boolean",
        };
        f.write_str(name)
    }
}

/// Declaration of one recognized payload field.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    pub ty: FieldType,
    pub required: bool,
}

impl FieldSpec {
    pub const fn required(name: &'static str, ty: FieldType) -> Self {
        Self { name, ty, required: true }
    }

    pub const fn optional(name: &'static str, ty: FieldType) -> Self {
        Self { name, ty, required: false }
    }
}

/// Errors produced at the validation boundary. All map to HTTP 400.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// The raw value is not a recognizable resource identifier.
    #[error("'{0}' is not a valid resource identifier")]
    InvalidIdentifier(String),

    /// The identifier decodes, but names an entity of a different kind.
    #[error("expected a {expected} identifier, got a {actual} identifier")]
    WrongResourceKind {
        expected: ResourceKind,
        actual: ResourceKind,
    },

    /// The request body is not a JSON object.
    #[error("request body must be a JSON object")]
    NotAnObject,

    /// A required field is absent (or null) in the payload.
    #[error("missing required field: {0}")]
    MissingField(String),

    /// A present field cannot be coerced to its declared type.
    #[error("field '{field}' must be a {expected}")]
    InvalidFieldType {
        field: String,
        expected: FieldType,
    },
}

/// Parses a raw identifier and checks it names the expected resource kind.
pub fn parse_key(raw: &str, expected: ResourceKind) -> Result<ResourceKey, ValidationError> {
    let key = raw.parse::<ResourceKey>()?;
    if key.kind() != expected {
        return Err(ValidationError::WrongResourceKind {
            expected,
            actual: key.kind(),
        });
    }
    Ok(key)
}

fn matches_type(value: &Value, ty: FieldType) -> bool {
    match ty {
        FieldType::String => value.is_string(),
        FieldType::Integer => value.is_i64(),
        FieldType::Boolean => value.is_boolean(),
    }
}

/// Checks a JSON body against the recognized fields of a resource.
///
/// Returns a map containing only the recognized, present fields. Unrecognized
/// keys are dropped silently (permissive-patch policy; see DESIGN.md), and a
/// JSON `null` counts as absent. Required fields are checked in declaration
/// order so the first missing one is the one reported.
pub fn validate_payload(
    body: &Value,
    fields: &[FieldSpec],
) -> Result<Map<String, Value>, ValidationError> {
    let object = body.as_object().ok_or(ValidationError::NotAnObject)?;

    for spec in fields.iter().filter(|s| s.required) {
        match object.get(spec.name) {
            None | Some(Value::Null) => {
                return Err(ValidationError::MissingField(spec.name.to_string()))
            }
            Some(_) => {}
        }
    }

    let mut checked = Map::new();
    for spec in fields {
        match object.get(spec.name) {
            None | Some(Value::Null) => {}
            Some(value) => {
                if !matches_type(value, spec.ty) {
                    return Err(ValidationError::InvalidFieldType {
                        field: spec.name.to_string(),
                        expected: spec.ty,
                    });
                }
                checked.insert(spec.name.to_string(), value.clone());
            }
        }
    }
    Ok(checked)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parse_key_roundtrip() {
        let key = parse_key("slip_17", ResourceKind::Slip).unwrap();
        assert_eq!(key.kind(), ResourceKind::Slip);
        assert_eq!(key.to_string(), "slip_17");
    }

    #[test]
    fn parse_key_rejects_garbage() {
        for raw in ["", "slip", "slip_", "slip_x", "17", "yacht_4", "_4"] {
            assert_eq!(
                parse_key(raw, ResourceKind::Slip),
                Err(ValidationError::InvalidIdentifier(raw.to_string())),
                "raw = {raw:?}"
            );
        }
    }

    #[test]
    fn parse_key_checks_kind() {
        assert_eq!(
            parse_key("boat_3", ResourceKind::Slip),
            Err(ValidationError::WrongResourceKind {
                expected: ResourceKind::Slip,
                actual: ResourceKind::Boat,
            })
        );
    }

    #[test]
    fn payload_reports_first_missing_required_field() {
        let fields = [
            FieldSpec::required("number", FieldType::Integer),
            FieldSpec::optional("note", FieldType::String),
        ];
        let err = validate_payload(&json!({"note": "n"}), &fields).unwrap_err();
        assert_eq!(err, ValidationError::MissingField("number".to_string()));

        // null counts as absent
        let err = validate_payload(&json!({"number": null}), &fields).unwrap_err();
        assert_eq!(err, ValidationError::MissingField("number".to_string()));
    }

    #[test]
    fn payload_checks_types_and_drops_unknown_keys() {
        let fields = [
            FieldSpec::required("name", FieldType::String),
            FieldSpec::optional("length", FieldType::Integer),
        ];

        let err =
            validate_payload(&json!({"name": "Gem", "length": "long"}), &fields).unwrap_err();
        assert_eq!(
            err,
            ValidationError::InvalidFieldType {
                field: "length".to_string(),
                expected: FieldType::Integer,
            }
        );

        let checked =
            validate_payload(&json!({"name": "Gem", "color": "red"}), &fields).unwrap();
        assert_eq!(checked.len(), 1);
        assert!(checked.contains_key("name"));
    }

    #[test]
    fn payload_rejects_non_object_bodies() {
        let err = validate_payload(&json!([1, 2]), &[]).unwrap_err();
        assert_eq!(err, ValidationError::NotAnObject);
    }
}
