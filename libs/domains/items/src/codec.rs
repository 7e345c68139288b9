//! Identifier codec: external hex ids <-> MongoDB `ObjectId`

use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use mongodb::bson::oid::ObjectId;

use crate::error::{ItemError, ItemResult};

/// Decode an external identifier into the store's `ObjectId`.
///
/// The input must be exactly 24 hex digits. Nothing is trimmed or otherwise
/// normalized before parsing.
pub fn decode(raw: &str) -> ItemResult<ObjectId> {
    ObjectId::parse_str(raw).map_err(|_| ItemError::InvalidIdentifier(raw.to_string()))
}

/// Encode an `ObjectId` as the lowercase hex string used on the wire.
pub fn encode(id: &ObjectId) -> String {
    id.to_hex()
}

/// Extractor for the `{id}` path segment of item routes.
///
/// Rejects with `InvalidIdentifier` (400) before the handler runs, so a
/// malformed id never reaches the repository.
pub struct ItemIdPath(pub ObjectId);

impl<S> FromRequestParts<S> for ItemIdPath
where
    S: Send + Sync,
{
    type Rejection = ItemError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| ItemError::InvalidIdentifier(e.body_text()))?;

        decode(&raw).map(ItemIdPath)
    }
}
