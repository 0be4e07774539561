use crate::cli::ServeArgs;
use crate::infra::{load_bookings, AppState, ExtranetState};
use crate::routes::with_partner_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use extranet::config::AppConfig;
use extranet::error::AppError;
use extranet::telemetry;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let bookings = load_bookings(args.bookings_csv.as_deref())?;
    info!(count = bookings.len(), "bookings loaded");
    let extranet_state = ExtranetState::from_catalog(&config.partner.hotel_id, bookings)?;

    let app = with_partner_routes(extranet_state)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        hotel_id = %config.partner.hotel_id,
        "partner extranet ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
