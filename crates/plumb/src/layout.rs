//! Layout engines for form canvases
//!
//! This module provides the machinery that keeps a form diagram's visual
//! arrangement and its published property order in sync. Engines implement
//! the [`FormLayout`] trait; [`single_column`] contains the default engine,
//! which stacks components in one left-aligned column.

pub mod single_column;

pub use single_column::SingleColumnLayout;

use plumb_core::{
    canvas::{Canvas, ContainerId, ShapeId},
    geometry::Point,
};

use crate::{error::PlumbError, model::ModelRegistry};

/// Trait defining the interface for form layout engines
pub trait FormLayout {
    /// Re-position every child of `container` and republish the property order
    ///
    /// - `canvas`: The canvas holding the container
    /// - `registry`: The registry holding the form model of the container's
    ///   diagram
    /// - `container`: The container whose children are re-arranged
    fn relayout(
        &self,
        canvas: &mut Canvas,
        registry: &mut ModelRegistry,
        container: ContainerId,
    ) -> Result<(), PlumbError>;

    /// Place a dropped or dragged shape in `target` based on the drop point
    ///
    /// - `canvas`: The canvas holding both containers
    /// - `registry`: The registry holding the form model of the target's
    ///   diagram
    /// - `target`: The container receiving the shape
    /// - `source`: The container the shape is dragged out of
    /// - `shape`: The shape being placed
    /// - `drop_point`: The requested drop location, relative to `target`
    fn move_shape(
        &self,
        canvas: &mut Canvas,
        registry: &mut ModelRegistry,
        target: ContainerId,
        source: ContainerId,
        shape: ShapeId,
        drop_point: Point,
    ) -> Result<(), PlumbError>;
}
