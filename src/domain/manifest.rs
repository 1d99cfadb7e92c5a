use serde::Serialize;
use serde_json::{Map, Value};

use crate::domain::AppError;

/// Published metadata of one template directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Manifest {
    pub id: String,
    pub name: String,
    pub version: String,
    pub description: String,
    /// Object-name prefix of the template directory, always ending in `/`.
    pub prefix: String,
}

/// On-the-wire shape of `manifest.json`. Field order is the serialized key order.
#[derive(Debug, Serialize)]
struct ManifestDocument<'a> {
    id: &'a str,
    name: &'a str,
    version: &'a str,
    description: &'a str,
}

impl Manifest {
    /// Decode a stored `manifest.json` object.
    ///
    /// Absent (or `null`) fields become empty strings; present fields must be strings.
    pub fn from_bytes(object_name: &str, prefix: &str, bytes: Vec<u8>) -> Result<Self, AppError> {
        let text = String::from_utf8(bytes)
            .map_err(|source| AppError::Decode { name: object_name.to_string(), source })?;

        let value: Value = serde_json::from_str(&text).map_err(|e| AppError::Parse {
            name: object_name.to_string(),
            details: e.to_string(),
        })?;

        let Value::Object(fields) = value else {
            return Err(AppError::Parse {
                name: object_name.to_string(),
                details: "expected a JSON object".to_string(),
            });
        };

        Ok(Self {
            id: string_field(&fields, object_name, "id")?,
            name: string_field(&fields, object_name, "name")?,
            version: string_field(&fields, object_name, "version")?,
            description: string_field(&fields, object_name, "description")?,
            prefix: prefix.to_string(),
        })
    }

    /// Serialize the published fields as pretty-printed JSON (two-space indent).
    pub fn to_json_pretty(&self) -> String {
        let document = ManifestDocument {
            id: &self.id,
            name: &self.name,
            version: &self.version,
            description: &self.description,
        };
        // A struct of string fields always serializes.
        serde_json::to_string_pretty(&document).unwrap_or_default()
    }
}

fn string_field(fields: &Map<String, Value>, object_name: &str, field: &str) -> Result<String, AppError> {
    match fields.get(field) {
        None | Some(Value::Null) => Ok(String::new()),
        Some(Value::String(value)) => Ok(value.clone()),
        Some(_) => Err(AppError::InvalidManifestField {
            name: object_name.to_string(),
            field: field.to_string(),
        }),
    }
}
