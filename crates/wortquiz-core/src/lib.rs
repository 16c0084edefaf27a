//! wortquiz-core — Vocabulary store, identity resolution, and the quiz
//! session engine.
//!
//! This crate defines the data model, the durable word repository, and the
//! session logic that the whole wortquiz system builds on.

pub mod error;
pub mod identity;
pub mod lists;
pub mod model;
pub mod parser;
pub mod progression;
pub mod quiz;
pub mod repository;
pub mod statistics;
pub mod storage;
