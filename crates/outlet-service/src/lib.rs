//! # Outlet Service Library
//!
//! Menu catalog and order ledger for a food outlet, built on `actor_framework`.
//! This library exposes the core modules of the application for the binary and for
//! integration testing.

pub mod api;
pub mod catalog_actor;
pub mod clients;
pub mod config;
pub mod ledger_actor;
pub mod lifecycle;
pub mod model;
