//! Logistics back-office toolkit.
//!
//! This crate provides the tiered financial calculator used by order and
//! invoice services, together with unique code generation, field validation,
//! an HTTP client for peer services and a small HTTP API.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod codes;
pub mod config;
pub mod error;
pub mod integration;
pub mod models;
pub mod validation;
