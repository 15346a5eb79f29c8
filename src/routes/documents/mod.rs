pub mod create;
pub mod delete;
pub mod get;
pub mod legacy;
pub mod list;
pub mod update;
