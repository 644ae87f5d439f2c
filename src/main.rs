use mall::configuration::get_configuration;
use mall::db::{MemoryProductStore, PgProductStore, ProductStore};
use mall::startup::run;
use mall::telemetry::{get_subscriber, init_subscriber};
use sqlx::postgres::PgPoolOptions;
use std::net::TcpListener;
use std::sync::Arc;
use std::time::Duration;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let subscriber = get_subscriber("mall".into(), "info".into());
    init_subscriber(subscriber);

    let settings = get_configuration().expect("Failed to read configuration.");

    let store: Arc<dyn ProductStore> = if settings.database.in_memory {
        tracing::warn!("Using the in-memory product store, data is lost on shutdown");
        Arc::new(MemoryProductStore::new())
    } else {
        tracing::info!(
            db_host = %settings.database.host,
            db_port = settings.database.port,
            db_name = %settings.database.database_name,
            "Connecting to PostgreSQL"
        );

        let pg_pool = PgPoolOptions::new()
            .max_connections(settings.database.max_connections)
            .acquire_timeout(Duration::from_secs(30))
            .connect(&settings.database.connection_string())
            .await
            .expect("Failed to connect to database.");

        sqlx::migrate!("./migrations")
            .run(&pg_pool)
            .await
            .expect("Failed to migrate database.");

        Arc::new(PgProductStore::new(pg_pool))
    };

    let address = format!("{}:{}", settings.app_host, settings.app_port);
    tracing::info!("Start server at {:?}", &address);
    let listener =
        TcpListener::bind(&address).expect(&format!("failed to bind to {}", address));

    run(listener, store, settings).await?.await
}
