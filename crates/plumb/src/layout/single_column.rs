//! Single column form layout engine
//!
//! This module provides the default layout for form diagrams: every
//! component of a container is stacked in one left-aligned column, and the
//! container's form definition is rebuilt so the published property order
//! always matches the visual order.

use log::{debug, trace};

use plumb_core::{
    canvas::{Canvas, ContainerId, ShapeId},
    form::FormPropertyDefinition,
    geometry::Point,
};

use crate::{
    config::LayoutConfig,
    error::PlumbError,
    layout::FormLayout,
    model::{ModelRegistry, PropertyResolver},
};

/// Default padding between the left container edge and every component.
pub const DEFAULT_LEFT_PADDING: i32 = 20;

/// Default vertical spacing between neighbouring components.
pub const DEFAULT_VERTICAL_SPACING: i32 = 10;

/// Single column layout engine implementation that implements the FormLayout trait
///
/// # Examples
///
/// ```rust
/// use plumb::canvas::{Canvas, ContainerId};
/// use plumb::form::{FormPropertyDefinition, PropertyKind};
/// use plumb::geometry::{Point, Size};
/// use plumb::model::ModelRegistry;
/// use plumb::SingleColumnLayout;
///
/// let mut canvas = Canvas::new();
/// let mut registry = ModelRegistry::new();
///
/// let diagram = canvas.add_diagram();
/// let root = ContainerId::from(diagram);
/// let name = canvas.add_shape(root, Size::new(200, 30));
/// let birthday = canvas.add_shape(root, Size::new(200, 50));
///
/// let model = registry.register(diagram);
/// model.bind(name, FormPropertyDefinition::new("name", PropertyKind::Text));
/// model.bind(birthday, FormPropertyDefinition::new("birthday", PropertyKind::Date));
///
/// let layout = SingleColumnLayout::new();
/// layout.relayout(&mut canvas, &mut registry, root)
///     .expect("Failed to relayout");
///
/// assert_eq!(canvas.position(name), Point::new(20, 10));
/// assert_eq!(canvas.position(birthday), Point::new(20, 50));
/// ```
#[derive(Debug, Clone)]
pub struct SingleColumnLayout {
    left_padding: i32,     // Padding on the left side of all components
    vertical_spacing: i32, // Vertical spacing between components
}

impl Default for SingleColumnLayout {
    fn default() -> Self {
        Self::new()
    }
}

impl SingleColumnLayout {
    /// Create a new single column layout engine with default spacing
    pub fn new() -> Self {
        Self {
            left_padding: DEFAULT_LEFT_PADDING,
            vertical_spacing: DEFAULT_VERTICAL_SPACING,
        }
    }

    /// Create an engine with the spacing values from the given configuration
    pub fn from_config(config: &LayoutConfig) -> Self {
        Self {
            left_padding: config.left_padding(),
            vertical_spacing: config.vertical_spacing(),
        }
    }

    /// Set the padding on the left side of all components. All components
    /// are aligned to the left.
    pub fn set_left_padding(&mut self, padding: i32) -> &mut Self {
        self.left_padding = padding;
        self
    }

    /// Set the vertical spacing between components
    pub fn set_vertical_spacing(&mut self, spacing: i32) -> &mut Self {
        self.vertical_spacing = spacing;
        self
    }

    /// Get the padding on the left side of all components
    pub fn left_padding(&self) -> i32 {
        self.left_padding
    }

    /// Get the vertical spacing between components
    pub fn vertical_spacing(&self) -> i32 {
        self.vertical_spacing
    }

    /// Re-position all children of `container` in a single column and
    /// republish the form definition in the resulting order.
    ///
    /// Children are stacked top to bottom in child-list order, regardless
    /// of where they currently sit. Shapes that resolve to a form property
    /// contribute that property to the rebuilt definition; unresolved
    /// shapes are positioned but contribute nothing.
    ///
    /// # Errors
    ///
    /// Returns [`PlumbError::InvalidContainer`] when `container` is not
    /// attached to a diagram and [`PlumbError::MissingModel`] when its
    /// diagram has no registered form model. Both are detected before any
    /// position changes.
    pub fn relayout(
        &self,
        canvas: &mut Canvas,
        registry: &mut ModelRegistry,
        container: ContainerId,
    ) -> Result<(), PlumbError> {
        let diagram = canvas
            .diagram_root(container)
            .ok_or(PlumbError::InvalidContainer { container })?;
        let model = registry
            .model_mut(diagram)
            .ok_or(PlumbError::MissingModel { diagram })?;

        debug!(container:% = container, diagram:% = diagram; "Re-layouting container");

        let properties_in_new_order = self.arrange_column(canvas, &*model, container);
        model.definition_mut().set_properties(properties_in_new_order);
        Ok(())
    }

    /// Place `shape` in `target` based on the requested drop point.
    ///
    /// A drop into an empty container and a drag of a container's only
    /// child both short-circuit to resetting the shape's position; every
    /// other drop inserts the shape before the first child whose top edge
    /// lies below the drop point and then runs [`SingleColumnLayout::relayout`]
    /// on the target, so sibling shapes move as well.
    ///
    /// Ordering in a single column depends on the vertical axis alone, so
    /// the drop point's x coordinate is not consulted.
    ///
    /// # Errors
    ///
    /// The short-circuit paths never fail. The inserting path surfaces the
    /// relayout errors after the shape has already been re-attached.
    pub fn move_shape(
        &self,
        canvas: &mut Canvas,
        registry: &mut ModelRegistry,
        target: ContainerId,
        source: ContainerId,
        shape: ShapeId,
        drop_point: Point,
    ) -> Result<(), PlumbError> {
        let in_same_container = target == source;
        let y = drop_point.y();

        debug!(
            container:% = target,
            shape:% = shape,
            y,
            in_same_container;
            "Moving shape"
        );

        if canvas.children(target).is_empty() {
            // First shape in this container: pin it to the column origin.
            canvas.set_position(shape, Point::new(self.left_padding, self.vertical_spacing));
            canvas.append_child(target, shape);
        } else if in_same_container && canvas.children(target).len() == 1 {
            // Dragging the only child around: snap it back to the origin.
            canvas.set_position(shape, Point::new(self.left_padding, self.vertical_spacing));
        } else {
            // The index is measured against the list before the detach;
            // insert_child clamps it afterwards. Comparing with the current
            // positions means a shape dragged within its own container is
            // ranked by its stale location, like every other sibling.
            let children = canvas.children(target);
            let index = children
                .iter()
                .position(|&child| y < canvas.position(child).y())
                .unwrap_or(children.len());
            trace!(shape:% = shape, index; "Inserting shape by drop point");
            canvas.insert_child(target, index, shape);

            self.relayout(canvas, registry, target)?;
        }
        Ok(())
    }

    /// Stack the children of `container` and collect their resolved
    /// properties in visual order.
    fn arrange_column<R: PropertyResolver>(
        &self,
        canvas: &mut Canvas,
        resolver: &R,
        container: ContainerId,
    ) -> Vec<FormPropertyDefinition> {
        let children = canvas.children(container).to_vec();
        let mut properties_in_new_order = Vec::with_capacity(children.len());
        let mut y_position = self.vertical_spacing;

        for child in children {
            canvas.set_position(child, Point::new(self.left_padding, y_position));
            y_position += canvas.size(child).height() + self.vertical_spacing;

            if let Some(property) = resolver.resolve(child) {
                trace!(shape:% = child, property = property.name(); "Resolved shape to form property");
                properties_in_new_order.push(property);
            }
        }

        properties_in_new_order
    }
}

impl FormLayout for SingleColumnLayout {
    fn relayout(
        &self,
        canvas: &mut Canvas,
        registry: &mut ModelRegistry,
        container: ContainerId,
    ) -> Result<(), PlumbError> {
        SingleColumnLayout::relayout(self, canvas, registry, container)
    }

    fn move_shape(
        &self,
        canvas: &mut Canvas,
        registry: &mut ModelRegistry,
        target: ContainerId,
        source: ContainerId,
        shape: ShapeId,
        drop_point: Point,
    ) -> Result<(), PlumbError> {
        SingleColumnLayout::move_shape(self, canvas, registry, target, source, shape, drop_point)
    }
}
