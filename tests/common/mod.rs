use mall::configuration::{get_configuration, DatabaseSettings, Settings};
use mall::db::{MemoryProductStore, PgProductStore, ProductStore};
use serde_json::{json, Value};
use sqlx::{Connection, Executor, PgConnection, PgPool};
use std::sync::Arc;

pub struct TestApp {
    pub address: String,
    pub client: reqwest::Client,
}

pub async fn spawn_app_with_store(store: Arc<dyn ProductStore>, configuration: Settings) -> TestApp {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind random port");
    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);

    let server = mall::startup::run(listener, store, configuration)
        .await
        .expect("Failed to bind address.");

    let _ = tokio::spawn(server);
    println!("Used Port: {}", port);

    TestApp {
        address,
        client: reqwest::Client::new(),
    }
}

pub async fn spawn_app() -> TestApp {
    spawn_app_with_store(Arc::new(MemoryProductStore::new()), Settings::default()).await
}

/// Server backed by a fresh PostgreSQL database, `None` when no database is reachable.
pub async fn spawn_pg_app() -> Option<TestApp> {
    let mut configuration = match get_configuration() {
        Ok(configuration) => configuration,
        Err(err) => {
            eprintln!("Skipping tests: failed to read configuration: {}", err);
            return None;
        }
    };
    configuration.database.database_name = uuid::Uuid::new_v4().to_string();

    let connection_pool = match configure_database(&configuration.database).await {
        Ok(pool) => pool,
        Err(err) => {
            eprintln!("Skipping tests: failed to connect to postgres: {}", err);
            return None;
        }
    };

    let store = Arc::new(PgProductStore::new(connection_pool));
    Some(spawn_app_with_store(store, configuration).await)
}

pub async fn configure_database(config: &DatabaseSettings) -> Result<PgPool, sqlx::Error> {
    let mut connection = PgConnection::connect(&config.connection_string_without_db()).await?;

    connection
        .execute(format!(r#"CREATE DATABASE "{}""#, config.database_name).as_str())
        .await?;

    let connection_pool = PgPool::connect(&config.connection_string()).await?;

    sqlx::migrate!("./migrations").run(&connection_pool).await?;

    Ok(connection_pool)
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.address, path)
    }

    pub async fn create_product(&self, name: &str, password: &str) -> reqwest::Response {
        self.client
            .post(self.url("/products"))
            .json(&json!({
                "name": name,
                "description": "description",
                "manager": "Alice",
                "password": password,
            }))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    /// Creates a product and returns the `data` object of the response.
    pub async fn created_product(&self, name: &str, password: &str) -> Value {
        let response = self.create_product(name, password).await;
        assert_eq!(201, response.status().as_u16());
        let body: Value = response.json().await.unwrap();
        body["data"].clone()
    }
}
