//! # Domain Models
//!
//! This crate contains pure domain types with a single dependency (`serde`).
//! Keep it lean: no I/O, networking, or heavy logic, just data and simple helpers.
//!
//! * [`shipping`]: the nested shipping configuration tree and the relational rows it is
//!   stored as.
//! * [`config`]: back-office configuration shared by the apps and feature slices.
//! * [`registry`]: type-erased container for initialized feature slices.

pub mod config;
pub mod registry;
pub mod shipping;
