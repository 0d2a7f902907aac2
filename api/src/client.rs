//! HTTP client for the activities service.
//!
//! `GET /activities` returns the whole catalog; signup and unregister answer
//! with `{"message": ...}` on success and `{"detail": ...}` otherwise.

use serde::Deserialize;

use crate::activity::Catalog;
use crate::endpoint;
use crate::error::ApiError;

const DEFAULT_API_BASE: &str = "http://127.0.0.1:8000";

#[cfg(target_arch = "wasm32")]
fn base_url() -> String {
    // In the browser the service is whatever origin served the page.
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_else(|| DEFAULT_API_BASE.to_string())
}

#[cfg(not(target_arch = "wasm32"))]
fn base_url() -> String {
    std::env::var("ACTIVITIES_API_BASE").unwrap_or_else(|_| DEFAULT_API_BASE.to_string())
}

// no connection caching for now. a client is cheap to construct and this
// way there is nothing to invalidate when a request fails.
fn http_client() -> reqwest::Client {
    reqwest::Client::new()
}

/// Fetches the full catalog.
pub async fn activities() -> Result<Catalog, ApiError> {
    let url = endpoint::activities_url(&base_url());
    let response = http_client().get(&url).send().await?;

    let status = response.status();
    if !status.is_success() {
        dioxus_logger::tracing::warn!("GET {url} answered {status}");
        return Err(ApiError::Http {
            status: status.as_u16(),
            detail: None,
        });
    }

    Ok(response.json::<Catalog>().await?)
}

/// Signs `email` up for `activity`. Returns the service's success message.
pub async fn signup(activity: &str, email: &str) -> Result<String, ApiError> {
    let url = endpoint::signup_url(&base_url(), activity, email);
    let response = http_client().post(&url).send().await?;

    let status = response.status();
    let body = response.text().await?;
    interpret_mutation_response(status, &body)
}

/// Removes `email` from `activity`. Returns the service's success message.
pub async fn unregister(activity: &str, email: &str) -> Result<String, ApiError> {
    let url = endpoint::unregister_url(&base_url(), activity, email);
    let response = http_client().delete(&url).send().await?;

    let status = response.status();
    let body = response.text().await?;
    interpret_mutation_response(status, &body)
}

#[derive(Deserialize)]
struct MessageBody {
    message: String,
}

#[derive(Deserialize)]
struct DetailBody {
    #[serde(default)]
    detail: Option<String>,
}

/// Splits a mutation response into the contract's two shapes.
///
/// A success status with an unparseable body is a `Decode` error; an error
/// status with an unparseable body still yields `Http`, just without detail
/// text, so the caller can fall back to its generic message.
fn interpret_mutation_response(
    status: reqwest::StatusCode,
    body: &str,
) -> Result<String, ApiError> {
    if status.is_success() {
        let parsed: MessageBody =
            serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(parsed.message)
    } else {
        let detail = serde_json::from_str::<DetailBody>(body)
            .ok()
            .and_then(|b| b.detail);
        Err(ApiError::Http {
            status: status.as_u16(),
            detail,
        })
    }
}

#[cfg(test)]
mod tests {
    use reqwest::StatusCode;

    use super::*;

    #[test]
    fn success_yields_server_message() {
        let result = interpret_mutation_response(
            StatusCode::OK,
            r#"{"message": "Signed up a@x.com for Chess Club"}"#,
        );
        assert_eq!(result.unwrap(), "Signed up a@x.com for Chess Club");
    }

    #[test]
    fn error_carries_detail_text() {
        let result =
            interpret_mutation_response(StatusCode::BAD_REQUEST, r#"{"detail": "Not registered"}"#);
        match result {
            Err(ApiError::Http { status, detail }) => {
                assert_eq!(status, 400);
                assert_eq!(detail.as_deref(), Some("Not registered"));
            }
            other => panic!("expected Http error, got {other:?}"),
        }
    }

    #[test]
    fn error_without_detail_still_maps_to_http() {
        let result = interpret_mutation_response(StatusCode::BAD_GATEWAY, "upstream blew up");
        match result {
            Err(ApiError::Http { status, detail }) => {
                assert_eq!(status, 502);
                assert_eq!(detail, None);
            }
            other => panic!("expected Http error, got {other:?}"),
        }
    }

    #[test]
    fn garbled_success_body_is_a_decode_error() {
        let result = interpret_mutation_response(StatusCode::OK, "not json");
        assert!(matches!(result, Err(ApiError::Decode(_))));
    }
}
