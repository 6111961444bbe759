//! Form property records and the ordered form definition.
//!
//! A form diagram is backed by a [`FormDefinition`]: the ordered list of
//! [`FormPropertyDefinition`] records the runtime will eventually render as
//! input fields. The canvas holds the visual order; the definition mirrors
//! it record for record.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use serde::{Deserialize, Serialize};

/// The kind of value a form property captures.
///
/// The names match external configuration strings (snake_case).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyKind {
    /// Free-form text input (default)
    #[default]
    Text,
    /// Numeric input
    Number,
    /// Date input
    Date,
    /// Yes/no input
    Boolean,
}

impl FromStr for PropertyKind {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(Self::Text),
            "number" => Ok(Self::Number),
            "date" => Ok(Self::Date),
            "boolean" => Ok(Self::Boolean),
            _ => Err("Unsupported property kind"),
        }
    }
}

impl From<PropertyKind> for &'static str {
    fn from(val: PropertyKind) -> Self {
        match val {
            PropertyKind::Text => "text",
            PropertyKind::Number => "number",
            PropertyKind::Date => "date",
            PropertyKind::Boolean => "boolean",
        }
    }
}

impl Display for PropertyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s: &'static str = (*self).into();
        write!(f, "{s}")
    }
}

/// A single form property: one input field of the finished form.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct FormPropertyDefinition {
    name: String,
    kind: PropertyKind,
    #[serde(default)]
    mandatory: bool,
}

impl FormPropertyDefinition {
    /// Create a new optional property with the given name and kind.
    pub fn new(name: impl Into<String>, kind: PropertyKind) -> Self {
        Self {
            name: name.into(),
            kind,
            mandatory: false,
        }
    }

    /// Mark the property as mandatory or optional (builder style).
    pub fn with_mandatory(mut self, mandatory: bool) -> Self {
        self.mandatory = mandatory;
        self
    }

    /// Get the property name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the kind of value this property captures
    pub fn kind(&self) -> PropertyKind {
        self.kind
    }

    /// Whether the property must be filled in before the form can be submitted
    pub fn is_mandatory(&self) -> bool {
        self.mandatory
    }
}

/// The ordered list of properties a form presents, top to bottom.
///
/// The sequence is replaced wholesale by [`FormDefinition::set_properties`]
/// whenever the visual order changes; there is no per-record editing here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct FormDefinition {
    properties: Vec<FormPropertyDefinition>,
}

impl FormDefinition {
    /// Create a new empty form definition.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the properties in presentation order
    pub fn properties(&self) -> &[FormPropertyDefinition] {
        &self.properties
    }

    /// Replace the whole property sequence with `properties`.
    pub fn set_properties(&mut self, properties: Vec<FormPropertyDefinition>) {
        self.properties = properties;
    }

    /// Get the number of properties in the form
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// Whether the form has no properties
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Iterate over the property names in presentation order.
    pub fn property_names(&self) -> impl Iterator<Item = &str> {
        self.properties.iter().map(|property| property.name())
    }
}
