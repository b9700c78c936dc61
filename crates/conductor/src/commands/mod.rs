pub mod classify;
pub mod history;
pub mod init;
pub mod models;
pub mod plan;
pub mod quick;
pub mod route;
pub mod version;
