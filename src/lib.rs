//! Library exports for the startup risk dashboard, shared by the binary, benches and tests.
/// Per-user application directories.
pub mod app_dirs;
/// TOML-backed dashboard settings.
pub mod config;
/// Filtering, aggregation and view assembly over the loaded portfolio.
pub mod dashboard;
/// CSV loading and the shared in-process dataset.
pub mod dataset;
/// egui front end.
pub mod egui_app;
/// Tracing setup with per-launch log files.
pub mod logging;
