pub mod document;
pub mod error;
pub mod response;
pub mod user;
