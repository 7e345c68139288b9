//! Item shapes: the JSON exchanged with clients and the document stored in MongoDB

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::codec;
use crate::error::{ItemError, ItemResult};

/// Item as exchanged with clients (JSON)
///
/// Unset fields are omitted from the output, never written as `null`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Item {
    /// Store-assigned identifier (24 hex digits)
    #[serde(default, skip_serializing_if = "is_blank")]
    #[schema(example = "65a1f0c2b3d4e5f601234567")]
    pub id: Option<String>,
    /// Display label
    #[serde(default, skip_serializing_if = "is_blank")]
    #[schema(example = "Widget")]
    pub name: Option<String>,
    /// Integer price
    #[serde(default, skip_serializing_if = "is_zero")]
    #[schema(example = 10)]
    pub price: Option<i64>,
}

/// Request body for create and replace
///
/// Any `id` in the body is ignored: ids come from the store on create and
/// from the path on replace.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, ToSchema)]
pub struct ItemPayload {
    #[schema(example = "Widget")]
    pub name: Option<String>,
    #[schema(example = 10)]
    pub price: Option<i64>,
}

impl ItemPayload {
    /// Parse a request body, whatever its declared content type
    ///
    /// The body must be a JSON object. Derived struct deserialization would
    /// also accept a positional array like `["Widget", 10]`.
    pub fn from_json(body: &[u8]) -> ItemResult<Self> {
        let value: Value =
            serde_json::from_slice(body).map_err(|e| ItemError::MalformedPayload(e.to_string()))?;

        if !value.is_object() {
            return Err(ItemError::MalformedPayload("expected a JSON object".to_string()));
        }

        serde_json::from_value(value).map_err(|e| ItemError::MalformedPayload(e.to_string()))
    }
}

/// Item as stored in MongoDB
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemDocument {
    /// Omitted on insert so the store assigns it
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    #[serde(default, skip_serializing_if = "is_blank")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub price: Option<i64>,
}

fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().is_none_or(str::is_empty)
}

fn is_zero(value: &Option<i64>) -> bool {
    value.is_none_or(|v| v == 0)
}

impl ItemDocument {
    /// Same fields, stamped with the given identifier
    pub fn with_id(self, id: ObjectId) -> Self {
        Self {
            id: Some(id),
            ..self
        }
    }
}

impl From<ItemPayload> for ItemDocument {
    fn from(payload: ItemPayload) -> Self {
        Self {
            id: None,
            name: payload.name.filter(|n| !n.is_empty()),
            price: payload.price.filter(|p| *p != 0),
        }
    }
}

impl From<ItemDocument> for Item {
    fn from(doc: ItemDocument) -> Self {
        Self {
            id: doc.id.as_ref().map(codec::encode),
            name: doc.name.filter(|n| !n.is_empty()),
            price: doc.price.filter(|p| *p != 0),
        }
    }
}
