//! # Crossroads
//!
//! A self-hosted start page: a dashboard of configured links plus a
//! `!bang`-style address bar. Point the browser's search engine at
//! `http://host/?q=%s` and typed queries become redirects.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐   ┌──────────────────┐   ┌───────────────────┐
//! │ catalog.yaml │──▶│  CatalogStore    │──▶│ crossroads-core   │
//! │ (user text)  │   │ load / save      │   │ resolve(doc, q)   │
//! └──────────────┘   └────────┬─────────┘   └─────────┬─────────┘
//!                             │                       │
//!                      ┌──────┴───────┐        ┌──────┴──────┐
//!                      │  HTTP (axum) │        │     CLI     │
//!                      │  307 / page  │        │ (crossroads)│
//!                      └──────────────┘        └─────────────┘
//! ```
//!
//! ## Resolution
//!
//! 1. The first word is looked up as a keyword alias. A unique hit
//!    redirects to the item's search template filled with the rest of the
//!    query, or to its plain url when there is no rest.
//! 2. Otherwise every word must occur in an item's title, url, description
//!    or aliases. Exactly one such item redirects to its url.
//! 3. Anything else shows the dashboard.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | TOML settings parsing and validation |
//! | [`store`] | Catalog document persistence |
//! | [`server`] | HTTP server |
//! | [`resolve`] | `crossroads resolve` |
//! | [`check`] | `crossroads check` |
//! | [`items`] | `crossroads items` |
//! | [`logging`] | Tracing subscriber setup |

pub mod check;
pub mod config;
pub mod items;
pub mod logging;
pub mod resolve;
pub mod server;
pub mod store;
