//! Plumb Core Types and Definitions
//!
//! This crate provides the foundational types for the Plumb form layout
//! engine. It includes:
//!
//! - **Geometry**: Integer points and sizes ([`geometry`] module)
//! - **Canvas**: The scene graph of diagrams, containers, and shapes
//!   ([`canvas`] module)
//! - **Form**: Form property records and the ordered form definition
//!   ([`form`] module)

pub mod canvas;
pub mod form;
pub mod geometry;
