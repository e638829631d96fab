//! Shift Roster Engine
//!
//! This crate models a weekly staff roster on a fixed half-hour time grid
//! (8:30 to 21:00, Monday to Sunday). It aggregates worked hours and pay per
//! staff member, computes who is on duty in each grid cell, expands
//! recurring shift definitions into concrete dates, and tracks the pointer
//! interaction state used to select cells and resize shifts on the grid.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod grid;
pub mod interaction;
pub mod models;
pub mod store;
