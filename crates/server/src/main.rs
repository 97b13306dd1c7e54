// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

use animals_api::{
    AnimalRequest, AnimalResponse, ApiError, SeedFixturesResponse, create_animal, get_animal,
    item_path, list_animals, parse_animal_id, parse_resource_suffix, seed_fixtures, update_animal,
};
use animals_domain::{AnimalId, AnimalKind};
use animals_persistence::Persistence;
use axum::{
    Json, Router,
    body::Bytes,
    extract::{Path, State as AxumState, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{error, info};

#[cfg(test)]
mod tests;

/// Animals Server - HTTP server for the Animals registry
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the `SQLite` database file. If not provided, uses in-memory database.
    #[arg(short, long)]
    database: Option<String>,

    /// Address to bind the server to
    #[arg(short, long, default_value_t = IpAddr::V4(Ipv4Addr::LOCALHOST))]
    bind: IpAddr,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 8080)]
    port: u16,

    /// Do not seed empty collections with fixture records
    #[arg(long)]
    no_seed: bool,
}

/// Application state shared across handlers.
///
/// This contains the persistence layer wrapped in a Mutex to allow
/// safe concurrent access.
#[derive(Clone)]
struct AppState {
    persistence: Arc<Mutex<Persistence>>,
}

impl AppState {
    fn new(persistence: Persistence) -> Self {
        Self {
            persistence: Arc::new(Mutex::new(persistence)),
        }
    }
}

/// Error response type.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    /// Error indicator.
    error: bool,
    /// Error message.
    message: String,
}

/// HTTP error wrapper that implements `IntoResponse`.
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: true,
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::DomainRuleViolation { .. } => Self {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                message: err.to_string(),
            },
            ApiError::InvalidInput { .. } => Self {
                status: StatusCode::BAD_REQUEST,
                message: err.to_string(),
            },
            ApiError::ResourceNotFound { .. } => Self {
                status: StatusCode::NOT_FOUND,
                message: err.to_string(),
            },
            ApiError::Internal { .. } => {
                error!(error = %err, "Internal error");
                Self {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    message: err.to_string(),
                }
            }
        }
    }
}

impl From<JsonRejection> for HttpError {
    fn from(rejection: JsonRejection) -> Self {
        Self {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

/// Resolves the `{resource}` path segment.
fn resolve_kind(resource: &str) -> Result<AnimalKind, HttpError> {
    parse_resource_suffix(resource).map_err(|e| HttpError::from(ApiError::from(e)))
}

/// Resolves the `{resource}/{id}` path segments.
fn resolve_item(resource: &str, id: &str) -> Result<(AnimalKind, AnimalId), HttpError> {
    let kind: AnimalKind = resolve_kind(resource)?;
    let id: AnimalId = parse_animal_id(id).map_err(|e| HttpError::from(ApiError::from(e)))?;
    Ok((kind, id))
}

/// Decodes a request body once its path has resolved, so an unknown
/// collection is a 404 whatever the body holds.
fn decode_request(body: &Bytes) -> Result<AnimalRequest, HttpError> {
    let Json(req) = Json::<AnimalRequest>::from_bytes(body)?;
    Ok(req)
}

/// Handler for POST `/api/1/{resource}` endpoint.
///
/// Creates an animal and returns it with its assigned id.
async fn handle_create_animal(
    AxumState(app_state): AxumState<AppState>,
    Path(resource): Path<String>,
    body: Bytes,
) -> Result<impl IntoResponse, HttpError> {
    info!(resource = %resource, "Handling create_animal request");
    let kind: AnimalKind = resolve_kind(&resource)?;
    let req: AnimalRequest = decode_request(&body)?;

    let mut persistence = app_state.persistence.lock().await;
    let response: AnimalResponse = create_animal(&mut persistence, kind, req)?;
    drop(persistence);

    info!(id = %response.id, name = %response.name, "Created animal");
    let headers = [(header::LOCATION, item_path(kind, &response.id))];
    Ok((StatusCode::CREATED, headers, Json(response)))
}

/// Handler for GET `/api/1/{resource}` endpoint.
///
/// Lists every animal in the collection.
async fn handle_list_animals(
    AxumState(app_state): AxumState<AppState>,
    Path(resource): Path<String>,
) -> Result<Json<Vec<AnimalResponse>>, HttpError> {
    info!(resource = %resource, "Handling list_animals request");
    let kind: AnimalKind = resolve_kind(&resource)?;

    let mut persistence = app_state.persistence.lock().await;
    let animals: Vec<AnimalResponse> = list_animals(&mut persistence, kind)?;
    drop(persistence);

    Ok(Json(animals))
}

/// Handler for GET `/api/1/{resource}/{id}` endpoint.
async fn handle_get_animal(
    AxumState(app_state): AxumState<AppState>,
    Path((resource, id)): Path<(String, String)>,
) -> Result<Json<AnimalResponse>, HttpError> {
    info!(resource = %resource, id = %id, "Handling get_animal request");
    let (kind, id) = resolve_item(&resource, &id)?;

    let mut persistence = app_state.persistence.lock().await;
    let animal: AnimalResponse = get_animal(&mut persistence, kind, &id)?;
    drop(persistence);

    Ok(Json(animal))
}

/// Handler for PUT `/api/1/{resource}/{id}` endpoint.
///
/// Replaces the name, description and group of an existing animal.
async fn handle_update_animal(
    AxumState(app_state): AxumState<AppState>,
    Path((resource, id)): Path<(String, String)>,
    body: Bytes,
) -> Result<Json<AnimalResponse>, HttpError> {
    info!(resource = %resource, id = %id, "Handling update_animal request");
    let (kind, id) = resolve_item(&resource, &id)?;
    let req: AnimalRequest = decode_request(&body)?;

    let mut persistence = app_state.persistence.lock().await;
    let animal: AnimalResponse = update_animal(&mut persistence, kind, id, req)?;
    drop(persistence);

    Ok(Json(animal))
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route(
            "/api/1/{resource}",
            get(handle_list_animals).post(handle_create_animal),
        )
        .route(
            "/api/1/{resource}/{id}",
            get(handle_get_animal).put(handle_update_animal),
        )
        .with_state(app_state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing Animals Server");

    // Initialize persistence (in-memory or file-based based on CLI argument)
    let mut persistence: Persistence = if let Some(db_path) = &args.database {
        info!("Using file-based database at: {}", db_path);
        Persistence::new_with_file(db_path)?
    } else {
        info!("Using in-memory database");
        Persistence::new_in_memory()?
    };

    if args.no_seed {
        info!("Fixture seeding disabled");
    } else {
        let seeded: SeedFixturesResponse = seed_fixtures(&mut persistence)?;
        info!(inserted = seeded.total_inserted(), "Fixture seeding complete");
    }

    let app: Router = build_router(AppState::new(persistence));

    // Bind to address
    let addr: SocketAddr = SocketAddr::new(args.bind, args.port);
    info!("Server listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
