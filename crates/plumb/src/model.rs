//! Per-diagram form models and the registry that owns them.
//!
//! Every open diagram has one [`FormMemoryModel`]: the bindings from canvas
//! shapes to the form properties they represent, plus the published
//! [`FormDefinition`]. The [`ModelRegistry`] keys the models by diagram, so
//! layout code can find the model behind any container by walking up to its
//! diagram root.

use indexmap::IndexMap;
use log::debug;

use plumb_core::{
    canvas::{DiagramId, ShapeId},
    form::{FormDefinition, FormPropertyDefinition},
};

/// Maps canvas shapes to the form properties they represent.
///
/// Layout code resolves shapes through this trait instead of reaching into
/// an editor model, so it can be driven by any property source.
pub trait PropertyResolver {
    /// Resolves the form property behind the given shape, if any.
    ///
    /// Shapes without a property (decorations, labels) resolve to `None`
    /// and are skipped when the form definition is rebuilt.
    fn resolve(&self, shape: ShapeId) -> Option<FormPropertyDefinition>;
}

/// The in-memory model behind one open form diagram.
#[derive(Debug, Default)]
pub struct FormMemoryModel {
    definition: FormDefinition,
    bindings: IndexMap<ShapeId, FormPropertyDefinition>,
}

impl FormMemoryModel {
    /// Create a new empty model.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `shape` to the given form property, replacing any previous
    /// binding for that shape.
    pub fn bind(&mut self, shape: ShapeId, property: FormPropertyDefinition) {
        debug!(shape:% = shape, property = property.name(); "Bound shape to form property");
        self.bindings.insert(shape, property);
    }

    /// Remove the binding for `shape`, returning the property it carried.
    pub fn unbind(&mut self, shape: ShapeId) -> Option<FormPropertyDefinition> {
        self.bindings.shift_remove(&shape)
    }

    /// Get the published form definition
    pub fn definition(&self) -> &FormDefinition {
        &self.definition
    }

    /// Get mutable access to the published form definition
    pub fn definition_mut(&mut self) -> &mut FormDefinition {
        &mut self.definition
    }
}

impl PropertyResolver for FormMemoryModel {
    fn resolve(&self, shape: ShapeId) -> Option<FormPropertyDefinition> {
        self.bindings.get(&shape).cloned()
    }
}

/// Registry of form models, one per open diagram.
#[derive(Debug, Default)]
pub struct ModelRegistry {
    models: IndexMap<DiagramId, FormMemoryModel>,
}

impl ModelRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the model for `diagram`, creating an empty one on first use.
    pub fn register(&mut self, diagram: DiagramId) -> &mut FormMemoryModel {
        if !self.models.contains_key(&diagram) {
            debug!(diagram:% = diagram; "Registered form model");
        }
        self.models.entry(diagram).or_default()
    }

    /// Get the model for `diagram`, if one is registered
    pub fn model(&self, diagram: DiagramId) -> Option<&FormMemoryModel> {
        self.models.get(&diagram)
    }

    /// Get mutable access to the model for `diagram`, if one is registered
    pub fn model_mut(&mut self, diagram: DiagramId) -> Option<&mut FormMemoryModel> {
        self.models.get_mut(&diagram)
    }

    /// Drop the model for `diagram`, returning it when one was registered.
    pub fn remove(&mut self, diagram: DiagramId) -> Option<FormMemoryModel> {
        let removed = self.models.shift_remove(&diagram);
        if removed.is_some() {
            debug!(diagram:% = diagram; "Removed form model");
        }
        removed
    }

    /// Get the number of registered models
    pub fn len(&self) -> usize {
        self.models.len()
    }

    /// Whether the registry has no models
    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }
}
