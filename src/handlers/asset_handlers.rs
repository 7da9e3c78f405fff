//! HTTP handlers for the root asset.
//! Streams the file body to avoid buffering it in memory and delegates
//! filesystem concerns to `AssetService`.

use crate::{errors::AppError, models::asset::Asset, services::asset_service::AssetService};
use axum::{
    body::Body,
    extract::State,
    http::{HeaderMap, HeaderValue, StatusCode, header},
    response::Response,
};
use tokio_util::io::ReaderStream;

/// `GET /` — stream the asset bytes unchanged.
pub async fn get_asset(State(service): State<AssetService>) -> Result<Response, AppError> {
    let (asset, file) = service.open().await?;
    let body = Body::from_stream(ReaderStream::new(file));

    let mut response = Response::new(body);
    *response.status_mut() = StatusCode::OK;
    set_asset_headers(response.headers_mut(), &asset);

    Ok(response)
}

/// `HEAD /` — same status and headers as GET but no body.
///
/// The file is opened and immediately dropped so an unreadable asset fails
/// here exactly as it would for GET.
pub async fn head_asset(State(service): State<AssetService>) -> Result<Response, AppError> {
    let (asset, _file) = service.open().await?;

    let mut response = Response::new(Body::empty());
    *response.status_mut() = StatusCode::OK;
    set_asset_headers(response.headers_mut(), &asset);

    Ok(response)
}

fn set_asset_headers(headers: &mut HeaderMap, asset: &Asset) {
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_str(&asset.content_type)
            .unwrap_or_else(|_| HeaderValue::from_static("application/octet-stream")),
    );
    headers.insert(header::CONTENT_LENGTH, HeaderValue::from(asset.size_bytes));

    if let Some(value) = asset
        .http_last_modified()
        .and_then(|ts| HeaderValue::from_str(&ts).ok())
    {
        headers.insert(header::LAST_MODIFIED, value);
    }
}
