//! # Domain Models
//!
//! This crate contains pure data types shared by the folio crates, with minimal dependencies
//! (`serde`, `bitflags`). Keep it lean: no rendering, no I/O, no reducers, just data and
//! simple helpers.

pub mod config;
pub mod constants;
pub mod input;
pub mod reveal;
pub mod validator;
