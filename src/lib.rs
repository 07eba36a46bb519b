pub mod config;
pub mod error;
pub mod i18n;
pub mod routes;
pub mod session;
pub mod telemetry;
pub mod translator;
