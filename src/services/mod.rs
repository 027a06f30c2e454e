//! Movie Service Bindings
//!
//! Frontend bindings to the movie backend, organized by domain. The
//! backend is a REST-like service reached through the browser fetch API;
//! every binding returns a typed [`ServiceError`] whose display text is
//! what the user gets to see, so callers never branch on error internals.

mod favourites;
mod movies;

use serde::de::DeserializeOwned;
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

// Re-export all public items
pub use favourites::*;
pub use movies::*;

/// Base path of the movie service, overridable at compile time
const API_BASE: &str = match option_env!("MOVIES_API_BASE") {
    Some(base) => base,
    None => "/api",
};

// ========================
// Errors
// ========================

/// Service failure, normalized at the boundary. The `Display` text is the
/// user-facing message; transport details only go to the console.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    #[error("Already added to favourites")]
    AlreadyInFavourites,
    #[error("Movie is not in your favourites")]
    NotInFavourites,
    #[error("Could not reach the movie service")]
    Unreachable,
    #[error("Movie service request failed (HTTP {status})")]
    Backend { status: u16 },
    #[error("Movie service sent an unreadable response")]
    Decode,
    #[error("Movie data could not be encoded")]
    Encode,
}

/// Map a non-2xx HTTP status to its service error
fn error_for_status(status: u16) -> ServiceError {
    match status {
        409 => ServiceError::AlreadyInFavourites,
        404 => ServiceError::NotInFavourites,
        status => ServiceError::Backend { status },
    }
}

fn unreachable_err(err: JsValue) -> ServiceError {
    web_sys::console::error_1(&format!("[Services] request failed: {:?}", err).into());
    ServiceError::Unreachable
}

fn decode_err(err: JsValue) -> ServiceError {
    web_sys::console::error_1(&format!("[Services] bad response body: {:?}", err).into());
    ServiceError::Decode
}

// ========================
// URLs
// ========================

/// Characters escaped inside a path segment, on top of controls
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}')
    .add(b'/')
    .add(b'%');

fn encode_segment(raw: &str) -> String {
    utf8_percent_encode(raw, PATH_SEGMENT).to_string()
}

fn movies_url(category: &str) -> String {
    format!("{}/movies/{}", API_BASE, encode_segment(category))
}

fn favourites_url() -> String {
    format!("{}/favourites", API_BASE)
}

fn favourite_url(id: &str) -> String {
    format!("{}/favourites/{}", API_BASE, encode_segment(id))
}

// ========================
// Fetch Plumbing
// ========================

/// Issue one request and surface non-2xx statuses as service errors
async fn request(method: &str, url: &str, body: Option<&str>) -> Result<Response, ServiceError> {
    let opts = RequestInit::new();
    opts.set_method(method);
    if let Some(body) = body {
        opts.set_body(&JsValue::from_str(body));
    }

    let request = Request::new_with_str_and_init(url, &opts).map_err(unreachable_err)?;
    let headers = request.headers();
    headers.set("Accept", "application/json").map_err(unreachable_err)?;
    if body.is_some() {
        headers
            .set("Content-Type", "application/json")
            .map_err(unreachable_err)?;
    }

    let window = web_sys::window().ok_or(ServiceError::Unreachable)?;
    let resp = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(unreachable_err)?;
    let resp: Response = resp.dyn_into().map_err(unreachable_err)?;

    if resp.ok() {
        Ok(resp)
    } else {
        Err(error_for_status(resp.status()))
    }
}

/// Request plus JSON body decoding
async fn fetch_json<T: DeserializeOwned>(
    method: &str,
    url: &str,
    body: Option<&str>,
) -> Result<T, ServiceError> {
    let resp = request(method, url, body).await?;
    let json = JsFuture::from(resp.json().map_err(decode_err)?)
        .await
        .map_err(decode_err)?;
    serde_wasm_bindgen::from_value(json).map_err(|err| {
        web_sys::console::error_1(&format!("[Services] decode failed: {}", err).into());
        ServiceError::Decode
    })
}

/// Request where only the status matters (writes)
async fn fetch_ok(method: &str, url: &str, body: Option<&str>) -> Result<(), ServiceError> {
    request(method, url, body).await.map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(error_for_status(409), ServiceError::AlreadyInFavourites);
        assert_eq!(error_for_status(404), ServiceError::NotInFavourites);
        assert_eq!(error_for_status(500), ServiceError::Backend { status: 500 });
    }

    #[test]
    fn test_user_facing_messages() {
        assert_eq!(
            ServiceError::AlreadyInFavourites.to_string(),
            "Already added to favourites"
        );
        assert_eq!(
            ServiceError::NotInFavourites.to_string(),
            "Movie is not in your favourites"
        );
        assert_eq!(
            ServiceError::Unreachable.to_string(),
            "Could not reach the movie service"
        );
        assert_eq!(
            ServiceError::Backend { status: 502 }.to_string(),
            "Movie service request failed (HTTP 502)"
        );
    }

    #[test]
    fn test_url_building_encodes_path_segments() {
        assert_eq!(movies_url("top_rated"), "/api/movies/top_rated");
        assert_eq!(movies_url("sci fi"), "/api/movies/sci%20fi");
        assert_eq!(favourites_url(), "/api/favourites");
        assert_eq!(favourite_url("42"), "/api/favourites/42");
        assert_eq!(favourite_url("a/b"), "/api/favourites/a%2Fb");
    }
}
