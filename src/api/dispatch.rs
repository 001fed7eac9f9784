//! Request classification and dispatch.
//!
//! Every request is turned into one [`Route`] by [`Route::classify`], a pure
//! function of method and raw path, then handled by exactly one handler.
//! Precedence, highest first:
//!
//! 1. `/api/...` - management API, behind the shared-secret check
//! 2. `/` - informational page, any method
//! 3. `GET /{short_id}` - public redirect
//! 4. anything else - `405 Method Not Allowed`
//!
//! Keeping the API under `/api/` means a short id like `create` is still
//! reachable as a redirect at `/create`.

use axum::{
    body::Bytes,
    extract::State,
    http::{HeaderMap, Method, Uri},
    response::{IntoResponse, Response},
};

use crate::api::handlers::{
    create_link_handler, delete_link_handler, index_handler, list_links_handler,
    redirect_handler,
};
use crate::error::AppError;
use crate::state::AppState;

const API_PREFIX: &str = "/api/";
const DELETE_PREFIX: &str = "delete/";

/// Management operations under `/api/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiRoute<'a> {
    /// `POST /api/create`
    Create,
    /// `GET /api/list`
    List,
    /// `DELETE /api/delete/{id}`, id still percent-encoded.
    Delete { encoded_id: &'a str },
    /// Any other path or method under `/api/`.
    Unknown,
}

/// What a request asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route<'a> {
    Api(ApiRoute<'a>),
    Index,
    /// `GET /{short_id}` with the raw, undecoded remainder of the path.
    Redirect { short_id: &'a str },
    MethodNotAllowed,
}

impl<'a> Route<'a> {
    pub fn classify(method: &Method, path: &'a str) -> Self {
        if let Some(rest) = path.strip_prefix(API_PREFIX) {
            return Route::Api(ApiRoute::classify(method, rest));
        }

        if path == "/" {
            return Route::Index;
        }

        if method == Method::GET {
            let short_id = path.strip_prefix('/').unwrap_or(path);
            return Route::Redirect { short_id };
        }

        Route::MethodNotAllowed
    }

    /// Whether the shared secret must be checked before handling.
    pub fn requires_auth(&self) -> bool {
        matches!(self, Route::Api(_))
    }
}

impl<'a> ApiRoute<'a> {
    fn classify(method: &Method, rest: &'a str) -> Self {
        match (method, rest) {
            (&Method::POST, "create") => ApiRoute::Create,
            (&Method::GET, "list") => ApiRoute::List,
            (&Method::DELETE, _) => match rest.strip_prefix(DELETE_PREFIX) {
                Some(encoded_id) => ApiRoute::Delete { encoded_id },
                None => ApiRoute::Unknown,
            },
            _ => ApiRoute::Unknown,
        }
    }
}

/// Single entry point for every request, installed as the router fallback.
pub async fn dispatch(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, AppError> {
    let route = Route::classify(&method, uri.path());
    tracing::debug!(?route, "Classified request");

    if route.requires_auth() {
        state.auth_service.authorize(&headers)?;
    }

    match route {
        Route::Api(ApiRoute::Create) => create_link_handler(&state, body).await,
        Route::Api(ApiRoute::List) => list_links_handler(&state).await,
        Route::Api(ApiRoute::Delete { encoded_id }) => {
            delete_link_handler(&state, encoded_id).await
        }
        Route::Api(ApiRoute::Unknown) => {
            Err(AppError::not_found("Not Found or method not allowed"))
        }
        Route::Index => Ok(index_handler(&state.site_name).await.into_response()),
        Route::Redirect { short_id } => redirect_handler(&state, short_id).await,
        Route::MethodNotAllowed => Err(AppError::method_not_allowed("Method Not Allowed")),
    }
}
