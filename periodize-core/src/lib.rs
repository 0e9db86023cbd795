//! Domain core for the periodize planning API: users own plans, plans hold
//! ordered phases, phases hold weeks, weeks hold sessions.

pub mod auth;
pub mod database;
pub mod errors;
pub mod repositories;

pub mod app_context;
pub use app_context::AppContext;
