mod bookings;
mod cancellations;
mod error;
mod flights;
mod passengers;
mod predict;
mod stats;
mod validation;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, HeaderValue, Method, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use falcon_common::types::ServiceInfo;
use falcon_config::{init_tracing, AppConfig, StoreKind};
use falcon_db::bookings::pg_repository::PgBookingRepository;
use falcon_db::bookings::repositories::BookingRepository;
use falcon_db::cancellations::pg_repository::PgCancellationRepository;
use falcon_db::cancellations::repositories::CancellationRepository;
use falcon_db::flights::pg_repository::PgFlightRepository;
use falcon_db::flights::repositories::FlightRepository;
use falcon_db::memory::MemoryStore;
use falcon_db::passengers::pg_repository::PgPassengerRepository;
use falcon_db::passengers::repositories::PassengerRepository;
use falcon_db::stats::pg_repository::PgStatsRepository;
use falcon_db::stats::repositories::StatsRepository;
use falcon_risk::{RiskConfig, RiskEngine};
use sqlx::PgPool;
use tower_http::cors::CorsLayer;

const SERVICE_NAME: &str = "falcon-api";

#[derive(Clone)]
pub struct AppState {
    pub flights: Arc<dyn FlightRepository>,
    pub passengers: Arc<dyn PassengerRepository>,
    pub bookings: Arc<dyn BookingRepository>,
    pub cancellations: Arc<dyn CancellationRepository>,
    pub stats: Arc<dyn StatsRepository>,
    pub risk: Arc<RiskEngine>,
    pub store: StoreKind,
}

impl AppState {
    pub fn postgres(pool: PgPool, risk: RiskEngine) -> Self {
        Self {
            flights: Arc::new(PgFlightRepository::new(pool.clone())),
            passengers: Arc::new(PgPassengerRepository::new(pool.clone())),
            bookings: Arc::new(PgBookingRepository::new(pool.clone())),
            cancellations: Arc::new(PgCancellationRepository::new(pool.clone())),
            stats: Arc::new(PgStatsRepository::new(pool)),
            risk: Arc::new(risk),
            store: StoreKind::Postgres,
        }
    }

    pub fn memory(store: MemoryStore, risk: RiskEngine) -> Self {
        Self {
            flights: Arc::new(store.clone()),
            passengers: Arc::new(store.clone()),
            bookings: Arc::new(store.clone()),
            cancellations: Arc::new(store.clone()),
            stats: Arc::new(store),
            risk: Arc::new(risk),
            store: StoreKind::Memory,
        }
    }
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

async fn info(State(state): State<AppState>) -> Json<ServiceInfo> {
    Json(ServiceInfo::new(
        SERVICE_NAME,
        state.store.as_str(),
        state.risk.seed().is_some(),
    ))
}

async fn metrics() -> impl IntoResponse {
    let body = format!(
        "# HELP falcon_up Service up indicator\n\
         # TYPE falcon_up gauge\n\
         falcon_up 1\n\
         # HELP falcon_info Service info\n\
         # TYPE falcon_info gauge\n\
         falcon_info{{service=\"{SERVICE_NAME}\",version=\"{}\"}} 1\n",
        env!("CARGO_PKG_VERSION")
    );

    (
        StatusCode::OK,
        [(
            header::CONTENT_TYPE,
            "text/plain; version=0.0.4; charset=utf-8",
        )],
        body,
    )
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|o| match o.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %o, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
}

fn build_router(state: AppState, cors_origins: &[String]) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/info", get(info))
        .route("/metrics", get(metrics))
        .merge(flights::router())
        .merge(passengers::router())
        .merge(bookings::router())
        .merge(cancellations::router())
        .merge(stats::router())
        .merge(predict::router())
        .layer(cors_layer(cors_origins))
        .with_state(state)
}

#[tokio::main]
async fn main() {
    init_tracing("info");

    let config = AppConfig::from_env().expect("failed to load config");
    tracing::info!(service = SERVICE_NAME, store = ?config.store, "starting");

    let risk = RiskEngine::from_seed(RiskConfig::default(), config.risk_seed);
    let state = match config.store {
        StoreKind::Postgres => {
            let url = config
                .database_url
                .as_deref()
                .expect("DATABASE_URL is required when STORE=postgres");
            let pool = falcon_db::create_pool(url)
                .await
                .expect("failed to create database pool");
            falcon_db::run_migrations(&pool)
                .await
                .expect("failed to run migrations");
            AppState::postgres(pool, risk)
        }
        StoreKind::Memory => {
            tracing::warn!("using in-memory store; records are lost on restart");
            AppState::memory(MemoryStore::new(), risk)
        }
    };

    let app = build_router(state, &config.cors_origins);
    let addr: SocketAddr = config.bind_addr().parse().expect("invalid bind address");

    tracing::info!(%addr, "listening");
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("failed to bind");
    axum::serve(listener, app).await.expect("server error");
}
