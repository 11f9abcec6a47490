//! qrgen HTTP microservice.
//!
//! Renders QR codes as PNG images on demand.
//!
//! # Endpoints
//!
//! - `GET /` - Greeting, doubles as a liveness probe
//! - `GET /qrcode?data=<text>&size=<px>` - Render `data` as a PNG QR code
//!
//! Every response carries `Access-Control-Allow-Origin: *` and is compressed
//! when the client sends a matching `Accept-Encoding`.
//!
//! # Configuration
//!
//! - `SERVICE_PORT` - HTTP port (default: 8080)
//! - `RUST_LOG` - Log level (default: info)
//! - `LOG_FORMAT` - Log format: json (default) or text
//! - `SERVICE_NAME` - Service label for the startup log entry

use std::net::SocketAddr;

use axum::{
    Router,
    extract::Query,
    http::{Method, StatusCode, header},
    response::IntoResponse,
    routing::get,
};
use tower_http::compression::{CompressionLayer, predicate::SizeAbove};
use tower_http::cors::{Any, CorsLayer};
use tracing::{error, info};

use qrgen_lib::{ErrorCorrection, encode_png};
use qrgen_service_shared::{
    AccessLogLayer, ApiError, LoggingConfig, QrCodeQuery, ServiceConfig, Validate, greeting,
    init_logging,
};

/// Error-correction level for every generated code.
const ERROR_CORRECTION: ErrorCorrection = ErrorCorrection::Medium;

/// HTTP response - either a PNG image or a JSON error.
#[derive(Debug)]
enum Response {
    Image(Vec<u8>),
    Error(ApiError),
}

impl IntoResponse for Response {
    fn into_response(self) -> axum::response::Response {
        match self {
            Response::Image(png) => {
                (StatusCode::OK, [(header::CONTENT_TYPE, "image/png")], png).into_response()
            }
            Response::Error(err) => err.into_response(),
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging (reads LOG_FORMAT from environment)
    let logging_config = LoggingConfig::from_env().with_service("qrgen");
    init_logging(&logging_config);

    let config = ServiceConfig::from_env();
    let addr = config.bind_addr();
    info!(port = config.port, "starting qrgen service");

    let listener = tokio::net::TcpListener::bind(addr).await.map_err(|e| {
        error!(error = %e, addr = %addr, "failed to bind listener");
        e
    })?;
    info!(addr = %addr, "listening on");

    axum::serve(
        listener,
        app().into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}

/// Build the router with CORS and compression applied to every route.
fn app() -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS]);

    // Compress any body the client accepts, whatever its size or type.
    let compression = CompressionLayer::new().compress_when(SizeAbove::new(0));

    Router::new()
        .route("/", get(greeting))
        .route("/qrcode", get(qrcode_handler).layer(AccessLogLayer))
        .layer(cors)
        .layer(compression)
}

/// Handle GET /qrcode requests.
async fn qrcode_handler(Query(pairs): Query<Vec<(String, String)>>) -> Response {
    let request = match QrCodeQuery::from_pairs(pairs).validate() {
        Ok(request) => request,
        Err(err) => return Response::Error(err),
    };

    match encode_png(&request.data, ERROR_CORRECTION, request.size) {
        Ok(png) => {
            info!(
                data_len = request.data.len(),
                size = request.size,
                png_bytes = png.len(),
                "QR code rendered"
            );
            Response::Image(png)
        }
        Err(e) => Response::Error(e.into()),
    }
}
