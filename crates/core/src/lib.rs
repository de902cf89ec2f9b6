//! Wish Purr Core - Shared catalog types.
//!
//! This crate provides the domain types used by the storefront:
//! - [`Product`] - a read-only product record from the catalog service
//! - [`Price`] - decimal amount with currency and display formatting
//! - [`Category`] / [`CategoryFilter`] - label buckets and the listing filter
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no HTTP
//! clients. This keeps it lightweight and allows it to be used anywhere.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
