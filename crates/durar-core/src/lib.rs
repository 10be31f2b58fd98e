//! Core types and trait definitions for the durar hadith explorer.
//!
//! This crate is deliberately free of HTTP dependencies. It defines the
//! upstream data model, the [`source::HadithSource`] abstraction over the
//! remote repository, and the two algorithms built on top of it: detail-view
//! materialisation ([`view`]) and best-effort search paging ([`search`]).

pub mod error;
pub mod grade;
pub mod model;
pub mod search;
pub mod source;
pub mod view;

pub use error::{SearchError, ViewError};
