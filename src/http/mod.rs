//! HTTP protocol implementation.
//!
//! This module implements the single-shot HTTP/1.1 request/response cycle:
//! each accepted connection carries exactly one GET request and receives
//! exactly one response before the socket is closed.
//!
//! # Architecture
//!
//! The HTTP layer is organized into several submodules:
//!
//! - **`connection`**: The main connection handler implementing the request-response state machine
//! - **`reader`**: Drains one raw request from the socket under a read timeout
//! - **`parser`**: Splits and validates the request line
//! - **`request`**: Parsed request representation and target normalization
//! - **`response`**: HTTP response representation with builder pattern
//! - **`writer`**: Serializes and writes HTTP responses to the client
//! - **`mime`**: MIME type detection based on file extensions
//!
//! # Connection State Machine
//!
//! Each client connection goes through a state machine:
//!
//! ```text
//!        ┌─────────────┐
//!        │   Reading   │ ← Drain raw request bytes (timeout armed)
//!        └──────┬──────┘
//!               │
//!        ┌──────┴───────────┐
//!        ▼                  ▼
//!  ┌───────────┐      ┌───────────┐
//!  │  Routing  │      │ Rejected  │ ← Malformed request line
//!  └─────┬─────┘      └─────┬─────┘
//!        │ Canned or file   │ Canonical 400
//!        ▼                  ▼
//!        ┌──────────────────┐
//!        │     Writing      │ ← Send response to client
//!        └──────┬───────────┘
//!               ▼
//!        ┌──────────────────┐
//!        │     Closed       │ ← Socket released unconditionally
//!        └──────────────────┘
//! ```
//!
//! A read timeout or socket error anywhere in the cycle abandons the
//! connection without a response; the accept loop is never affected.

pub mod connection;
pub mod mime;
pub mod parser;
pub mod reader;
pub mod request;
pub mod response;
pub mod writer;
