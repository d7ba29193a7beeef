//! Transit performance dashboard server.
//!
//! Turns dashboard URLs into typed view state (line, sub-page, dates),
//! resolves station pairs to the stop ids the metrics API understands,
//! and renders line pages with their widgets.

pub mod cache;
pub mod config;
pub mod data;
pub mod domain;
pub mod router;
pub mod stations;
pub mod web;
pub mod widget;
