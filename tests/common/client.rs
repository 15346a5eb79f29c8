use actix_web::{web, App};
use std::sync::Arc;

use sharedoc::{
    db::postgres_service::PostgresService, routes::configure_routes, utils::password::hash_password,
    utils::token::TokenIssuer,
};

pub struct TestClient {
    pub db: Arc<PostgresService>,
    pub issuer: TokenIssuer,
}

impl TestClient {
    pub fn new(db: Arc<PostgresService>) -> Self {
        TestClient {
            db,
            issuer: TokenIssuer::new(&super::get_test_config().secret_key),
        }
    }

    #[allow(dead_code)]
    pub fn create_app(
        &self,
    ) -> actix_web::App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(web::Data::new(Arc::clone(&self.db)))
            .app_data(web::Data::new(self.issuer.clone()))
            .configure(configure_routes)
    }

    /// Registers a user straight through the service layer and returns
    /// (user_id, bearer token).
    #[allow(dead_code)]
    pub async fn create_test_user(&self, username: &str, password: &str) -> (i32, String) {
        let hash = hash_password(password).expect("Failed to hash password");
        let user = self
            .db
            .create_user(username, &hash)
            .await
            .expect("Failed to create user");
        let token = self.issuer.issue(&user.username).expect("Failed to issue token");
        (user.id, token)
    }
}
