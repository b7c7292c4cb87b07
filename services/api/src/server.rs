use crate::cli::ServeArgs;
use crate::infra::{AppState, InMemoryDocumentStore};
use crate::routes::with_workforce_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use talent_ops::config::AppConfig;
use talent_ops::error::AppError;
use talent_ops::store::DocumentStore;
use talent_ops::telemetry;
use talent_ops::workforce::WorkforceService;
use tracing::{info, warn};

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
        database: config.database.clone(),
    };

    let store = Arc::new(InMemoryDocumentStore::default());
    let service = Arc::new(WorkforceService::new(store));

    seed_if_empty(service.as_ref());

    let app = with_workforce_routes(service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "talent ops backend ready");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Populate the demo organization when the user collection is empty. Startup
/// must never fail because of seeding, so every error is logged and dropped.
fn seed_if_empty<S: DocumentStore + 'static>(service: &WorkforceService<S>) {
    match service.has_users() {
        Ok(true) => {}
        Ok(false) => match service.seed_demo() {
            Ok(summary) => info!(
                users = summary.executives.len() + summary.team_leads.len() + summary.employees.len(),
                teams = summary.teams.len(),
                "seeded demo organization into empty store"
            ),
            Err(err) => warn!(%err, "startup demo seeding failed"),
        },
        Err(err) => warn!(%err, "could not check for existing users; skipping demo seed"),
    }
}
