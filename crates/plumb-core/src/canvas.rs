//! The canvas scene graph: diagrams, containers, and shapes.
//!
//! This module provides the containment structure a form editor renders and
//! mutates. It is a lightweight arena of nodes connected by parent and child
//! links, optimized for the small trees form diagrams produce.
//!
//! # Architecture
//!
//! The module provides:
//! - [`DiagramId`], [`ContainerId`], [`ShapeId`]: Type-safe node handles
//! - [`Canvas`]: The arena holding every node and its containment links
//!
//! Handles widen along the containment hierarchy: a [`DiagramId`] converts
//! into a [`ContainerId`] (a diagram can hold children) and a [`ContainerId`]
//! converts into a [`ShapeId`] (a container can itself be placed inside
//! another container). The narrowing direction does not exist, so operations
//! that need a container cannot receive a leaf shape.
//!
//! Containment is exclusive: attaching a shape to a container detaches it
//! from its previous parent first. The arena never re-uses handles, and nodes
//! are not deleted; removal from a diagram is modeled by [`Canvas::detach`],
//! which leaves the subtree unrooted.

use std::fmt;

use indexmap::IndexMap;
use log::trace;

use crate::geometry::{Point, Size};

// =============================================================================
// Node handles
// =============================================================================

type NodeIndex = u32;

/// Handle to any shape on the canvas, leaf or container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShapeId(NodeIndex);

/// Handle to a node that can hold children: a container or a diagram root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContainerId(NodeIndex);

/// Handle to a diagram root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DiagramId(NodeIndex);

impl From<ContainerId> for ShapeId {
    fn from(container: ContainerId) -> Self {
        ShapeId(container.0)
    }
}

impl From<DiagramId> for ContainerId {
    fn from(diagram: DiagramId) -> Self {
        ContainerId(diagram.0)
    }
}

impl fmt::Display for ShapeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "shape {}", self.0)
    }
}

impl fmt::Display for ContainerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "container {}", self.0)
    }
}

impl fmt::Display for DiagramId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "diagram {}", self.0)
    }
}

// =============================================================================
// Arena internals
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NodeKind {
    Diagram,
    Container,
    Shape,
}

#[derive(Debug)]
struct Node {
    kind: NodeKind,
    parent: Option<ContainerId>,
    children: Vec<ShapeId>,
    position: Point,
    size: Size,
}

impl Node {
    fn new(kind: NodeKind, size: Size) -> Self {
        Node {
            kind,
            parent: None,
            children: Vec::new(),
            position: Point::default(),
            size,
        }
    }
}

// =============================================================================
// Canvas
// =============================================================================

/// Arena of diagram nodes with containment links.
///
/// All accessors take handles previously returned by this canvas. Handles
/// from another canvas are a caller bug and are reported by panicking.
#[derive(Debug, Default)]
pub struct Canvas {
    nodes: IndexMap<NodeIndex, Node>,
    next_index: NodeIndex,
}

impl Canvas {
    /// Creates a new empty canvas.
    pub fn new() -> Self {
        Canvas::default()
    }

    /// Returns the total number of nodes on the canvas.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Returns an iterator over all diagram roots, in creation order.
    pub fn diagrams(&self) -> impl Iterator<Item = DiagramId> {
        self.nodes.iter().filter_map(|(index, node)| {
            if node.kind == NodeKind::Diagram {
                Some(DiagramId(*index))
            } else {
                None
            }
        })
    }

    /// Adds a new diagram root to the canvas.
    pub fn add_diagram(&mut self) -> DiagramId {
        let diagram = DiagramId(self.allocate(NodeKind::Diagram, Size::default()));
        trace!(diagram:% = diagram; "Added diagram root");
        diagram
    }

    /// Adds a new container as the last child of `parent`.
    ///
    /// # Panics
    /// Panics if `parent` is not part of this canvas.
    pub fn add_container(&mut self, parent: ContainerId, size: Size) -> ContainerId {
        let container = ContainerId(self.allocate(NodeKind::Container, size));
        self.append_child(parent, container.into());
        container
    }

    /// Adds a new leaf shape as the last child of `parent`.
    ///
    /// # Panics
    /// Panics if `parent` is not part of this canvas.
    pub fn add_shape(&mut self, parent: ContainerId, size: Size) -> ShapeId {
        let shape = ShapeId(self.allocate(NodeKind::Shape, size));
        self.append_child(parent, shape);
        shape
    }

    /// Returns the children of `container` in visual order.
    ///
    /// # Panics
    /// Panics if `container` is not part of this canvas.
    pub fn children(&self, container: ContainerId) -> &[ShapeId] {
        &self.node(container.0).children
    }

    /// Returns the parent container of the given shape, if it is attached.
    ///
    /// # Panics
    /// Panics if the handle is not part of this canvas.
    pub fn parent(&self, shape: impl Into<ShapeId>) -> Option<ContainerId> {
        self.node(shape.into().0).parent
    }

    /// Returns the position of the given shape, relative to its parent.
    ///
    /// # Panics
    /// Panics if the handle is not part of this canvas.
    pub fn position(&self, shape: impl Into<ShapeId>) -> Point {
        self.node(shape.into().0).position
    }

    /// Sets the position of the given shape, relative to its parent.
    ///
    /// # Panics
    /// Panics if the handle is not part of this canvas.
    pub fn set_position(&mut self, shape: impl Into<ShapeId>, position: Point) {
        self.node_mut(shape.into().0).position = position;
    }

    /// Returns the size of the given shape.
    ///
    /// # Panics
    /// Panics if the handle is not part of this canvas.
    pub fn size(&self, shape: impl Into<ShapeId>) -> Size {
        self.node(shape.into().0).size
    }

    /// Sets the size of the given shape.
    ///
    /// # Panics
    /// Panics if the handle is not part of this canvas.
    pub fn set_size(&mut self, shape: impl Into<ShapeId>, size: Size) {
        self.node_mut(shape.into().0).size = size;
    }

    /// Walks the parent chain of `container` up to its diagram root.
    ///
    /// Returns `None` when the chain ends without reaching a diagram, which
    /// happens for containers inside a detached subtree.
    ///
    /// # Panics
    /// Panics if `container` is not part of this canvas.
    pub fn diagram_root(&self, container: ContainerId) -> Option<DiagramId> {
        let mut current = container;
        // The chain cannot be longer than the arena unless the links are
        // corrupted, so the walk is bounded instead of trusting them.
        for _ in 0..self.nodes.len() {
            let node = self.node(current.0);
            if node.kind == NodeKind::Diagram {
                return Some(DiagramId(current.0));
            }
            current = node.parent?;
        }
        None
    }

    /// Inserts `shape` into `container` at `index`, detaching it from its
    /// current parent first.
    ///
    /// The index addresses the child list as it is after the detach, so in a
    /// reorder within the same container the removal shifts later siblings
    /// one slot to the left before the insert happens. Indices past the end
    /// of the list are clamped, making it valid to pass an index measured
    /// before the detach.
    ///
    /// # Panics
    /// Panics if either handle is not part of this canvas. Panics in debug
    /// mode when `shape` is a diagram root or an ancestor of `container`;
    /// release builds skip the check.
    pub fn insert_child(&mut self, container: ContainerId, index: usize, shape: ShapeId) {
        #[cfg(debug_assertions)]
        {
            assert!(
                self.node(shape.0).kind != NodeKind::Diagram,
                "Inserting child: {shape} is a diagram root and cannot be nested",
            );
            let mut current = Some(container);
            while let Some(ancestor) = current {
                assert!(
                    ancestor.0 != shape.0,
                    "Inserting child: {shape} is an ancestor of {container}",
                );
                current = self.node(ancestor.0).parent;
            }
        }

        self.detach(shape);

        let node = self.node_mut(container.0);
        let index = index.min(node.children.len());
        node.children.insert(index, shape);
        self.node_mut(shape.0).parent = Some(container);
        trace!(container:% = container, shape:% = shape, index; "Attached shape");
    }

    /// Inserts `shape` as the last child of `container`, detaching it from
    /// its current parent first.
    ///
    /// # Panics
    /// Same contract as [`Canvas::insert_child`].
    pub fn append_child(&mut self, container: ContainerId, shape: ShapeId) {
        let end = self.node(container.0).children.len();
        self.insert_child(container, end, shape);
    }

    /// Removes `shape` from its parent, leaving it (and any children it has)
    /// unrooted. Does nothing when the shape has no parent.
    ///
    /// # Panics
    /// Panics if `shape` is not part of this canvas.
    pub fn detach(&mut self, shape: ShapeId) {
        if let Some(parent) = self.node(shape.0).parent {
            self.node_mut(parent.0).children.retain(|child| *child != shape);
            self.node_mut(shape.0).parent = None;
            trace!(container:% = parent, shape:% = shape; "Detached shape");
        }
    }

    fn allocate(&mut self, kind: NodeKind, size: Size) -> NodeIndex {
        let index = self.next_index;
        self.next_index += 1;
        self.nodes.insert(index, Node::new(kind, size));
        index
    }

    fn node(&self, index: NodeIndex) -> &Node {
        self.nodes
            .get(&index)
            .expect("handle is not part of this canvas")
    }

    fn node_mut(&mut self, index: NodeIndex) -> &mut Node {
        self.nodes
            .get_mut(&index)
            .expect("handle is not part of this canvas")
    }
}
