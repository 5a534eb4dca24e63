use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::Json;
use serde::Deserialize;
use serde_json::{json, Value};
use shelf_api::Shelf;
use shelf_patch::{Patch, PatchKind};
use shelf_registry::builtin_definitions;
use shelf_types::{Resource, ResourceList};

use crate::error::{ServerError, ServerResult};

/// `/apis/:package/:version/:plural`
#[derive(Debug, Deserialize)]
pub struct CollectionPath {
    pub package: String,
    pub version: String,
    pub plural: String,
}

/// `/apis/:package/:version/:plural/:name`
#[derive(Debug, Deserialize)]
pub struct ItemPath {
    pub package: String,
    pub version: String,
    pub plural: String,
    pub name: String,
}

/// Health check handler.
pub async fn health_handler() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// Info handler.
pub async fn info_handler() -> Json<Value> {
    let builtin: Vec<String> = builtin_definitions()
        .iter()
        .map(|d| d.storage_name())
        .collect();
    Json(json!({
        "name": "shelf-server",
        "version": env!("CARGO_PKG_VERSION"),
        "builtinTypes": builtin,
        "patchContentTypes": [
            PatchKind::JsonPatch.content_type(),
            PatchKind::MergePatch.content_type(),
        ],
    }))
}

pub async fn list_handler(
    State(shelf): State<Arc<Shelf>>,
    Path(p): Path<CollectionPath>,
) -> ServerResult<Json<ResourceList>> {
    let list = shelf.list_resources(&p.package, &p.version, &p.plural)?;
    Ok(Json(list))
}

pub async fn create_handler(
    State(shelf): State<Arc<Shelf>>,
    Path(p): Path<CollectionPath>,
    body: Bytes,
) -> ServerResult<(StatusCode, Json<Resource>)> {
    let body = parse_body(&body)?;
    let created = shelf.create_resource(&p.package, &p.version, &p.plural, body)?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn get_handler(
    State(shelf): State<Arc<Shelf>>,
    Path(p): Path<ItemPath>,
) -> ServerResult<Json<Resource>> {
    Ok(Json(shelf.get_resource(&p.package, &p.plural, &p.name)?))
}

pub async fn replace_handler(
    State(shelf): State<Arc<Shelf>>,
    Path(p): Path<ItemPath>,
    body: Bytes,
) -> ServerResult<Json<Resource>> {
    let body = parse_body(&body)?;
    let replaced = shelf.replace_resource(&p.package, &p.version, &p.plural, &p.name, body)?;
    Ok(Json(replaced))
}

/// The patch format is chosen by `Content-Type`. An unknown type is
/// reported before the content type or body is looked at.
pub async fn patch_handler(
    State(shelf): State<Arc<Shelf>>,
    Path(p): Path<ItemPath>,
    headers: HeaderMap,
    body: Bytes,
) -> ServerResult<Json<Resource>> {
    shelf.resolve_type(&p.package, &p.plural)?;

    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    let kind = PatchKind::from_content_type(content_type)?;
    let patch = Patch::decode(kind, &body)?;

    let patched = shelf.patch_resource(&p.package, &p.version, &p.plural, &p.name, &patch)?;
    Ok(Json(patched))
}

pub async fn delete_handler(
    State(shelf): State<Arc<Shelf>>,
    Path(p): Path<ItemPath>,
) -> ServerResult<StatusCode> {
    shelf.delete_resource(&p.package, &p.plural, &p.name)?;
    Ok(StatusCode::NO_CONTENT)
}

fn parse_body(body: &[u8]) -> ServerResult<Value> {
    serde_json::from_slice(body).map_err(|e| ServerError::BadRequest(e.to_string()))
}
