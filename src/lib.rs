//! # ragie-qa
//!
//! A single-page Q&A form backed by a hosted retrieval API. The page sends
//! the question and its settings here; the server forwards them in one
//! authenticated request and shows the top-ranked snippet that comes back.
//!
//! ## Request flow
//!
//! ```text
//!     ┌──────────────────────────────┐
//!     │  Page: question + settings   │
//!     │  (top_k, max chunks/doc,     │
//!     │   rerank, recency bias)      │
//!     └──────────────┬───────────────┘
//!                    │ POST /api/ask
//!                    ▼
//!     ┌──────────────────────────────┐
//!     │  Local validation            │──── blank / out of range ──▶ Warning
//!     └──────────────┬───────────────┘
//!                    │
//!                    ▼
//!     ┌──────────────────────────────┐
//!     │  POST {base_url}/retrievals  │──── non-200 / transport ───▶ Failed
//!     │  Bearer <api key>            │
//!     └──────────────┬───────────────┘
//!                    │ 200
//!                    ▼
//!     ┌──────────────────────────────┐
//!     │  scored_chunks[0].text       │──── empty ─────────────────▶ NoAnswer
//!     └──────────────┬───────────────┘
//!                    ▼
//!                 Answer
//! ```
//!
//! ## Module Overview
//!
//! - [`config`] - Environment / secrets-file configuration, validated at startup
//! - [`models`] - Submission type, field bounds, and the displayable `Outcome`
//! - [`retrieval`] - The `/retrievals` HTTP exchange and its wire types
//! - [`gateway`] - Validation + retrieval + outcome mapping for one submission
//! - [`api`] - Axum router, page, and JSON handlers
//! - [`error`] - Typed errors for config, validation, and retrieval
//! - [`state`] - Shared application state

pub mod api;
pub mod config;
pub mod error;
pub mod gateway;
pub mod models;
pub mod retrieval;
pub mod state;
