//! Core library components.
//!
//! This module contains the reusable logic for resolving a secret's scope,
//! sealing its value, and upserting it into the remote store.

pub mod api;
pub mod cipher;
pub mod config;
pub mod constants;
pub mod domain;
pub mod observer;
pub mod scope;
pub mod secrets;
pub mod types;
pub mod validation;
