//! # Crossroads Core
//!
//! The query resolution engine behind the Crossroads start page: given a
//! parsed catalog document and a typed query, decide whether to redirect
//! to a keyword search, to a single unambiguous bookmark, or to fall
//! through to the dashboard.
//!
//! This crate contains no tokio, filesystem I/O, or HTTP code. Every
//! function is pure and total; callers hand in an already-parsed document
//! and get a [`resolve::Resolution`] back.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`normalize`] | Case-folding and tokenization |
//! | [`catalog`] | Flattening the nested document into [`catalog::Item`]s |
//! | [`keyword`] | Unique alias lookup |
//! | [`template`] | Search-URL building from `%s` templates |
//! | [`matcher`] | Conjunctive substring matching over item text |
//! | [`resolve`] | The resolution state machine |

pub mod catalog;
pub mod keyword;
pub mod matcher;
pub mod normalize;
pub mod resolve;
pub mod template;

pub use catalog::{flatten, Item};
pub use resolve::{resolve, resolve_document, Resolution, Strategy};
