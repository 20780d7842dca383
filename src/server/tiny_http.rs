//! tiny_http server adapter
//!
//! Handles routing, body parsing, and response conversion for tiny_http.

use std::io::{Cursor, Read as _};

use serde::{Serialize, de::DeserializeOwned};
use tiny_http::{Header, Method, Request, Response, Server, StatusCode};

use taskdist::api::{self, ApiError, ApiErrorData, ApiResponse, AutoDistributeRequest};
use taskdist::core::services::CancelToken;

use crate::cli::Workspace;

/// Start the server and handle requests until the process exits
pub fn serve(workspace: &Workspace, bind: &str, port: u16) -> anyhow::Result<()> {
    let addr = format!("{bind}:{port}");
    let server = Server::http(&addr).map_err(|e| anyhow::anyhow!("Failed to start server: {e}"))?;

    log::info!("Listening on http://{addr}");
    println!("taskdist listening on http://{addr}");
    println!("  POST /api/v1/tasks/auto-distribute");
    println!("  GET  /api/v1/health");
    println!();
    println!("Press Ctrl+C to stop");

    for mut request in server.incoming_requests() {
        let response = handle_api_request(&mut request, workspace);
        log::debug!("{} {} -> {}", request.method(), request.url(), response.status_code().0);
        if let Err(e) = request.respond(response) {
            log::warn!("Failed to send response: {e}");
        }
    }

    Ok(())
}

// =============================================================================
// REQUEST HANDLING
// =============================================================================

/// Handle an API request and return a response
///
/// This is the main routing function that maps URL paths to handlers.
pub fn handle_api_request(request: &mut Request, workspace: &Workspace) -> Response<Cursor<Vec<u8>>> {
    let url = request.url().to_string();
    let method = request.method().clone();
    let api_path = route_path(&url);

    match (&method, api_path) {
        (&Method::Get, "/health") => handle_result(Ok::<_, ApiError>(api::health())),

        (&Method::Post, "/tasks/auto-distribute") => {
            match read_json_body::<AutoDistributeRequest>(request) {
                Ok(req) => {
                    let distributor = workspace.distributor();
                    handle_result(api::auto_distribute(&distributor, &req, &CancelToken::new()))
                },
                Err(e) => error_response(&e),
            }
        },

        // 404 for unknown API routes
        _ => error_response(&ApiError::not_found(format!(
            "API endpoint not found: {method} {api_path}"
        ))),
    }
}

/// Route part of a request URL
///
/// Drops the query string, then one leading `/api/v1` or `/api` segment.
/// `/apifoo` is left alone.
fn route_path(url: &str) -> &str {
    let path = url.split_once('?').map_or(url, |(path, _)| path);
    for prefix in ["/api/v1", "/api"] {
        if let Some(rest) = path.strip_prefix(prefix)
            && (rest.is_empty() || rest.starts_with('/'))
        {
            return if rest.is_empty() { "/" } else { rest };
        }
    }
    path
}

// =============================================================================
// BODY PARSING
// =============================================================================

/// Read and parse JSON body from request
///
/// An empty body is treated as `{}`.
fn read_json_body<T: DeserializeOwned>(request: &mut Request) -> Result<T, ApiError> {
    let mut body = String::new();
    request
        .as_reader()
        .read_to_string(&mut body)
        .map_err(|e| ApiError::bad_request(format!("Failed to read request body: {e}")))?;

    let body = if body.trim().is_empty() { "{}" } else { body.as_str() };
    serde_json::from_str(body).map_err(|e| ApiError::bad_request(format!("Invalid JSON: {e}")))
}

// =============================================================================
// RESPONSE CONVERSION
// =============================================================================

/// Convert a handler result to an HTTP response
fn handle_result<T: Serialize>(result: Result<T, ApiError>) -> Response<Cursor<Vec<u8>>> {
    match result {
        Ok(data) => json_response(&ApiResponse::success(data), 200),
        Err(e) => error_response(&e),
    }
}

/// Create an error JSON response with appropriate status code
fn error_response(error: &ApiError) -> Response<Cursor<Vec<u8>>> {
    if error.status_code() >= 500 {
        log::error!("{error}");
    }
    let response = ApiResponse::<()>::error(ApiErrorData::from(error));
    json_response(&response, error.status_code())
}

/// Serialize data to JSON response with status code
fn json_response<T: Serialize>(data: &T, status: u16) -> Response<Cursor<Vec<u8>>> {
    let json = serde_json::to_string(data).unwrap_or_else(|_| r#"{"success":false}"#.to_string());
    let mut response = Response::from_data(json.into_bytes()).with_status_code(StatusCode(status));
    if let Ok(header) = Header::from_bytes("Content-Type", "application/json") {
        response.add_header(header);
    }
    response
}
