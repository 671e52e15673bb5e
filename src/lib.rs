//! Beacon - Minimal Static HTTP Responder
//!
//! Core library for serving files and canned routes over HTTP/1.1.

pub mod config;
pub mod http;
pub mod server;
pub mod site;
