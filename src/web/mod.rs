//! Web layer: HTTP request handlers

pub mod handlers;
