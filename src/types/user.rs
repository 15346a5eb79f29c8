use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize)]
pub struct RUserRegister {
    pub username: String,
    pub password: String,
}

#[derive(Serialize, Deserialize)]
pub struct RLogin {
    pub username: String,
    pub password: String,
}

#[derive(Serialize, Deserialize)]
pub struct UserOut {
    pub id: i32,
    pub username: String,
}

#[derive(Serialize, Deserialize)]
pub struct TokenOut {
    pub access_token: String,
    pub token_type: String,
}
