//! Verdant Market API - catalog, settings, and storage URL endpoints.
//!
//! # Architecture
//!
//! - Axum web framework serving a JSON API under `/api`
//! - `PostgreSQL` via sqlx for catalog entities and the settings store
//! - HMAC-signed, time-limited URLs for private storage objects
//!
//! Authentication and session refresh are handled at the deployment
//! boundary (reverse proxy / platform middleware), not in this binary.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod db;
pub mod error;
pub mod extract;
pub mod models;
pub mod response;
pub mod routes;
pub mod services;
pub mod state;
