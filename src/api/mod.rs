//! HTTP relay endpoint for consultation requests.
//!
//! The brochure posts an inquiry to [`CONSULTATION_PATH`]; the handler checks
//! the required fields, composes the studio notification and hands it to the
//! configured [`EmailRelay`]. Every response carries permissive CORS headers.

// Allow clippy lint triggered by utoipa's OpenApi derive macro
#![allow(clippy::needless_for_each)]

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Request, State, rejection::JsonRejection},
    http::{HeaderName, HeaderValue, Method, StatusCode, header},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::Utc;
use inquiry_core::{InquiryPayload, RelayFailure, RelaySuccess};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

use crate::build_info;
use crate::config::{Config, Environment};
use crate::core::{EmailRelay, ResendRelay, compose};

/// Path the booking form posts to.
pub const CONSULTATION_PATH: &str = "/api/send-consultation";

const CORS_HEADERS: [(HeaderName, &str); 4] = [
    (header::ACCESS_CONTROL_ALLOW_CREDENTIALS, "true"),
    (header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
    (
        header::ACCESS_CONTROL_ALLOW_METHODS,
        "GET,OPTIONS,PATCH,DELETE,POST,PUT",
    ),
    (
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        "X-CSRF-Token, X-Requested-With, Accept, Accept-Version, Content-Length, Content-MD5, \
         Content-Type, Date, X-Api-Version",
    ),
];

/// Shared application state.
pub struct AppState {
    /// Email relay, absent when no API key is configured.
    pub relay: Option<Arc<dyn EmailRelay>>,

    /// Sender address of notifications.
    pub sender: String,

    /// Studio inbox.
    pub recipient: String,

    pub environment: Environment,
}

impl AppState {
    /// Build state from configuration, wiring the Resend relay if a key is set.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        let relay = config.relay.api_key().and_then(|key| {
            match ResendRelay::new(key, config.relay.api_url.clone()) {
                Ok(relay) => Some(Arc::new(relay) as Arc<dyn EmailRelay>),
                Err(e) => {
                    tracing::warn!(error = %e, "email relay unavailable");
                    None
                }
            }
        });

        Self {
            relay,
            sender: config.relay.from.clone(),
            recipient: config.relay.to.clone(),
            environment: config.server.environment(),
        }
    }

    fn is_development(&self) -> bool {
        self.environment == Environment::Development
    }
}

pub type SharedState = Arc<AppState>;

/// `OpenAPI` documentation.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Nirvana Interiors Consultation API",
        description = "Relays booking-form inquiries to the studio inbox",
        version = "0.3.0",
        license(name = "MIT")
    ),
    paths(health, send_consultation),
    components(schemas(InquiryPayload, RelaySuccess, RelayFailure))
)]
struct ApiDoc;

/// CORS middleware.
///
/// Answers `OPTIONS` directly and stamps the same headers on every response.
async fn cors_middleware(request: Request, next: Next) -> Response {
    let mut response = if request.method() == Method::OPTIONS {
        StatusCode::OK.into_response()
    } else {
        next.run(request).await
    };

    let headers = response.headers_mut();
    for (name, value) in CORS_HEADERS {
        headers.insert(name, HeaderValue::from_static(value));
    }

    response
}

/// Build the endpoint router around `state`.
#[must_use]
pub fn router(state: SharedState) -> Router {
    Router::new()
        .route(
            CONSULTATION_PATH,
            post(send_consultation).fallback(method_not_allowed),
        )
        .route("/health", get(health))
        .route("/api/openapi.json", get(openapi))
        .with_state(state)
        .layer(middleware::from_fn(cors_middleware))
        .layer(TraceLayer::new_for_http())
}

/// Start the relay endpoint.
///
/// # Errors
///
/// Returns an error if the server fails to bind or start.
pub async fn serve(config: &Config, host: &str, port: u16) -> anyhow::Result<()> {
    let state: SharedState = Arc::new(AppState::from_config(config));
    let relay_configured = state.relay.is_some();
    let app = router(state);

    let addr = format!("{host}:{port}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    let version = build_info::version_string();
    if relay_configured {
        tracing::info!(addr = %addr, version = %version, "starting consultation relay");
    } else {
        tracing::warn!(
            addr = %addr,
            version = %version,
            "starting consultation relay (NO EMAIL API KEY - submissions will fail)"
        );
    }

    axum::serve(listener, app).await?;

    Ok(())
}

fn failure(status: StatusCode, body: RelayFailure) -> Response {
    (status, Json(body)).into_response()
}

/// Health check endpoint.
#[utoipa::path(
    get,
    path = "/health",
    responses((status = 200, description = "Service healthy", body = String))
)]
async fn health() -> &'static str {
    "ok"
}

async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

async fn method_not_allowed() -> Response {
    failure(
        StatusCode::METHOD_NOT_ALLOWED,
        RelayFailure::new("Method not allowed"),
    )
}

/// Relay a consultation request to the studio inbox.
#[utoipa::path(
    post,
    path = "/api/send-consultation",
    request_body = InquiryPayload,
    responses(
        (status = 200, description = "Inquiry relayed", body = RelaySuccess),
        (status = 400, description = "Missing required fields", body = RelayFailure),
        (status = 500, description = "Relay not configured or delivery failed", body = RelayFailure)
    )
)]
async fn send_consultation(
    State(state): State<SharedState>,
    body: Result<Json<InquiryPayload>, JsonRejection>,
) -> Response {
    let Ok(Json(inquiry)) = body else {
        return failure(
            StatusCode::BAD_REQUEST,
            RelayFailure::new("Invalid request body"),
        );
    };

    if inquiry.is_missing_required() {
        return failure(
            StatusCode::BAD_REQUEST,
            RelayFailure::new("Missing required fields"),
        );
    }

    let Some(relay) = state.relay.as_ref() else {
        if state.is_development() {
            tracing::error!("email API key not found in environment");
        }
        return failure(
            StatusCode::INTERNAL_SERVER_ERROR,
            RelayFailure::new("Email service not configured"),
        );
    };

    let email = compose(&inquiry, &state.sender, &state.recipient, Utc::now());

    match relay.send(&email).await {
        Ok(sent) => {
            if state.is_development() {
                tracing::info!(id = ?sent.id, relay = relay.name(), "email sent");
            }
            (StatusCode::OK, Json(RelaySuccess::sent(sent.id))).into_response()
        }
        Err(e) => {
            if state.is_development() {
                tracing::error!(error = %e, relay = relay.name(), "error sending email");
            }
            failure(
                StatusCode::INTERNAL_SERVER_ERROR,
                RelayFailure::new("Failed to send email").with_details(e.to_string()),
            )
        }
    }
}
