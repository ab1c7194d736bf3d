//! Success envelopes and the JSON body extractor.

use std::convert::Infallible;

use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Request},
    http::{request::Parts, Extensions, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::{de::DeserializeOwned, Serialize};
use tower_http::request_id::RequestId;

use super::error::ApiError;

/// Page size reported on every list. Lists are never actually paged.
pub const PER_PAGE: usize = 50;

/// Request id assigned by the request-id layer, or empty if none ran.
pub fn request_id_of(extensions: &Extensions) -> String {
    extensions
        .get::<RequestId>()
        .and_then(|id| id.header_value().to_str().ok())
        .unwrap_or_default()
        .to_string()
}

/// Per-request metadata echoed in every envelope.
#[derive(Debug, Clone, Default)]
pub struct RequestMeta {
    pub request_id: String,
}

#[async_trait]
impl<S> FromRequestParts<S> for RequestMeta
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self {
            request_id: request_id_of(&parts.extensions),
        })
    }
}

#[derive(Serialize)]
struct Meta<'a> {
    request_id: &'a str,
}

#[derive(Serialize)]
struct Pagination {
    per_page: usize,
    has_more: bool,
    estimated_total: usize,
}

#[derive(Serialize)]
struct DataEnvelope<'a, T> {
    data: T,
    meta: Meta<'a>,
}

#[derive(Serialize)]
struct ListEnvelope<'a, T> {
    data: Vec<T>,
    meta: Meta<'a>,
    pagination: Pagination,
}

impl RequestMeta {
    /// `{"data": ..., "meta": {...}}` with the given status.
    pub fn respond<T: Serialize>(&self, status: StatusCode, data: T) -> Response {
        let body = DataEnvelope {
            data,
            meta: Meta {
                request_id: &self.request_id,
            },
        };
        (status, Json(body)).into_response()
    }

    pub fn ok<T: Serialize>(&self, data: T) -> Response {
        self.respond(StatusCode::OK, data)
    }

    pub fn created<T: Serialize>(&self, data: T) -> Response {
        self.respond(StatusCode::CREATED, data)
    }

    /// List envelope with a single, complete page.
    pub fn list<T: Serialize>(&self, items: Vec<T>) -> Response {
        let body = ListEnvelope {
            pagination: Pagination {
                per_page: PER_PAGE,
                has_more: false,
                estimated_total: items.len(),
            },
            data: items,
            meta: Meta {
                request_id: &self.request_id,
            },
        };
        (StatusCode::OK, Json(body)).into_response()
    }
}

/// JSON body extractor that answers malformed input with the API's
/// `bad_request` envelope. The `Content-Type` header is not checked.
#[derive(Debug, Clone)]
pub struct ApiJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|_| ApiError::bad_request("Invalid JSON body"))?;
        serde_json::from_slice(&bytes)
            .map(ApiJson)
            .map_err(|_| ApiError::bad_request("Invalid JSON body"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use serde::Deserialize;

    fn meta() -> RequestMeta {
        RequestMeta {
            request_id: "req_00000001".to_string(),
        }
    }

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn single_resource_envelope() {
        let response = meta().created(serde_json::json!({"id": "ctm_1"}));
        assert_eq!(response.status(), StatusCode::CREATED);

        let json = body_json(response).await;
        assert_eq!(json["data"]["id"], "ctm_1");
        assert_eq!(json["meta"]["request_id"], "req_00000001");
        assert!(json.get("pagination").is_none());
    }

    #[tokio::test]
    async fn list_envelope_reports_single_page() {
        let json = body_json(meta().list(vec![1, 2, 3])).await;

        assert_eq!(json["data"], serde_json::json!([1, 2, 3]));
        assert_eq!(json["pagination"]["per_page"], 50);
        assert_eq!(json["pagination"]["has_more"], false);
        assert_eq!(json["pagination"]["estimated_total"], 3);
        assert_eq!(json["meta"]["request_id"], "req_00000001");
    }

    #[derive(Debug, Deserialize)]
    struct NamedBody {
        name: String,
    }

    #[tokio::test]
    async fn api_json_parses_without_content_type() {
        let req = axum::http::Request::builder()
            .method("POST")
            .uri("/")
            .body(Body::from(r#"{"name":"x"}"#))
            .unwrap();
        let ApiJson(body) = ApiJson::<NamedBody>::from_request(req, &()).await.unwrap();
        assert_eq!(body.name, "x");
    }

    #[tokio::test]
    async fn api_json_rejects_empty_body() {
        let req = axum::http::Request::builder()
            .method("POST")
            .uri("/")
            .body(Body::empty())
            .unwrap();
        let err = ApiJson::<NamedBody>::from_request(req, &()).await.unwrap_err();
        assert_eq!(err.code(), "bad_request");
        assert_eq!(err.detail(), "Invalid JSON body");
    }
}
