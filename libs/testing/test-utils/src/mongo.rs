use std::sync::atomic::{AtomicU64, Ordering};

use mongodb::{Client, Database};
use testcontainers::runners::AsyncRunner;
use testcontainers::ContainerAsync;
use testcontainers_modules::mongo::Mongo;
use tracing::debug;

static DB_COUNTER: AtomicU64 = AtomicU64::new(0);

/// MongoDB container for integration tests.
///
/// Each instance starts its own container and hands out an isolated
/// database, so tests can run concurrently without interfering. The
/// container is stopped when the instance is dropped.
///
/// Requires a running Docker daemon.
pub struct TestMongo {
    // Held to keep the container alive for the lifetime of the test
    _container: ContainerAsync<Mongo>,
    client: Client,
    db_name: String,
}

impl TestMongo {
    /// Start a MongoDB container and connect to it.
    ///
    /// # Panics
    /// Panics if Docker is unavailable or the container fails to start;
    /// in a test that is the correct failure mode.
    pub async fn new() -> Self {
        let container = Mongo::default()
            .start()
            .await
            .expect("failed to start MongoDB container (is Docker running?)");

        let host = container.get_host().await.expect("container host");
        let port = container
            .get_host_port_ipv4(27017)
            .await
            .expect("mapped MongoDB port");

        let url = format!("mongodb://{}:{}/", host, port);
        let client = Client::with_uri_str(&url)
            .await
            .expect("failed to connect to MongoDB container");

        let db_name = format!("test_{}", DB_COUNTER.fetch_add(1, Ordering::SeqCst));
        debug!("TestMongo ready at {} using database {}", url, db_name);

        Self {
            _container: container,
            client,
            db_name,
        }
    }

    /// The connected client.
    pub fn client(&self) -> &Client {
        &self.client
    }

    /// The isolated database for this test.
    pub fn database(&self) -> Database {
        self.client.database(&self.db_name)
    }
}
