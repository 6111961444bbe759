//! Error types for Plumb operations.
//!
//! This module provides the main error type [`PlumbError`] which wraps
//! the error conditions that can occur while editing and laying out forms.

use std::io;

use thiserror::Error;

use plumb_core::canvas::{ContainerId, DiagramId};

/// The main error type for Plumb operations.
///
/// Structural errors carry the handle of the offending node so hosts can
/// point at the element that triggered the failure.
#[derive(Debug, Error)]
pub enum PlumbError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] toml::de::Error),

    /// The container is not attached to any diagram root, so there is no
    /// form definition to keep in sync.
    #[error("{container} is not part of a diagram")]
    InvalidContainer { container: ContainerId },

    /// The diagram has no registered form model.
    #[error("no form model is registered for {diagram}")]
    MissingModel { diagram: DiagramId },
}
