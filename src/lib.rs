pub mod api;
pub mod config;
pub mod error;
pub mod fitness;
pub mod genome;
pub mod optimizer;
pub mod trace;
// cmd and reports are binary modules (see main.rs).
