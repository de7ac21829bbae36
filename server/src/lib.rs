pub mod config;
pub mod redirect;
pub mod routes;
