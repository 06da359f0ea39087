//! Around API server library
//!
//! Users, cards and bearer-token authentication over a pluggable store.

pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
pub mod store;
pub mod validation;
