use sharedoc::config::EnvConfig;
use sharedoc::db::postgres_service::PostgresService;
use std::sync::Arc;
use tempfile::TempDir;

pub mod client;

pub struct TestContext {
    pub db: Arc<PostgresService>,
    // Keeps the SQLite file alive for the duration of the test.
    _dir: TempDir,
}

impl TestContext {
    pub async fn new() -> TestContext {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let db_url = format!(
            "sqlite://{}?mode=rwc",
            dir.path().join("test.db").display()
        );

        let db = Arc::new(
            PostgresService::new(&db_url)
                .await
                .expect("Failed to initialize PostgresService"),
        );

        TestContext { db, _dir: dir }
    }
}

pub fn get_test_config() -> EnvConfig {
    EnvConfig {
        port: 8000,
        db_url: "test".to_string(), // Not used in tests
        secret_key: "test-secret".to_string(),
    }
}

// Test data helpers
pub mod test_data {
    use sharedoc::types::user::RUserRegister;

    #[allow(dead_code)]
    pub fn sample_user() -> RUserRegister {
        RUserRegister {
            username: "alice".to_string(),
            password: "wonderland".to_string(),
        }
    }

    #[allow(dead_code)]
    pub fn sample_user_with_name(username: &str) -> RUserRegister {
        RUserRegister {
            username: username.to_string(),
            password: "wonderland".to_string(),
        }
    }
}
