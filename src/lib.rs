//! HTTP front for the pastime determining service.
//!
//! Two POST routes take an arbitrary JSON body and hand it, unchanged, to a
//! [`service::DeterminingService`]; whatever the service produces goes back
//! to the client as the response body.

pub mod api;
pub mod config;
pub mod error;
pub mod routes;
pub mod service;
