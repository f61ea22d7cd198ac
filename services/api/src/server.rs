use crate::cli::ServeArgs;
use crate::infra::{sample_directory, AppState};
use crate::routes::with_synergy_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use team_synergy::config::AppConfig;
use team_synergy::error::AppError;
use team_synergy::synergy::{TeamSynergyService, TABLE_VERSION};
use team_synergy::telemetry;
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
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let directory = Arc::new(sample_directory());
    let service = Arc::new(TeamSynergyService::new(directory, config.engine));

    let app = with_synergy_routes(service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        tables = TABLE_VERSION,
        default_project = config.engine.default_project.label(),
        "team synergy service ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
