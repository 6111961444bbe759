//! Plumb - A single column layout engine for form designer canvases.
//!
//! Hosting editors model a form as shapes on a [`canvas::Canvas`] and bind
//! shapes to form properties in a per-diagram [`model::FormMemoryModel`]. The
//! [`SingleColumnLayout`] engine stacks each container's children in one
//! left-aligned column and republishes the form property order after every
//! structural change, so the model always matches what the user sees.

pub mod config;

mod error;

pub mod layout;
pub mod model;

pub use plumb_core::{canvas, form, geometry};

pub use error::PlumbError;
pub use layout::{FormLayout, SingleColumnLayout};
