//! Example: Driving the layout engine like a form designer
//!
//! This example builds a small registration form programmatically, stacks it
//! with the single column layout, and then drags one field to a new spot the
//! way a canvas editor would.

use plumb::canvas::{Canvas, ContainerId};
use plumb::form::{FormPropertyDefinition, PropertyKind};
use plumb::geometry::{Point, Size};
use plumb::model::ModelRegistry;
use plumb::{PlumbError, SingleColumnLayout};

fn main() -> Result<(), PlumbError> {
    println!("Building a registration form...\n");

    let mut canvas = Canvas::new();
    let mut registry = ModelRegistry::new();

    // One diagram per open form
    let diagram = canvas.add_diagram();
    let root = ContainerId::from(diagram);

    // Drop three fields onto the canvas
    let name = canvas.add_shape(root, Size::new(200, 30));
    let birthday = canvas.add_shape(root, Size::new(200, 50));
    let newsletter = canvas.add_shape(root, Size::new(200, 25));

    // Bind each shape to the form property it edits
    let model = registry.register(diagram);
    model.bind(
        name,
        FormPropertyDefinition::new("name", PropertyKind::Text).with_mandatory(true),
    );
    model.bind(
        birthday,
        FormPropertyDefinition::new("birthday", PropertyKind::Date),
    );
    model.bind(
        newsletter,
        FormPropertyDefinition::new("newsletter", PropertyKind::Boolean),
    );

    // Stack everything in one column
    let layout = SingleColumnLayout::new();
    layout.relayout(&mut canvas, &mut registry, root)?;
    print_form(&canvas, &registry, root);

    // Drag the newsletter checkbox to the top of the form
    println!("Dragging the newsletter checkbox to the top...\n");
    layout.move_shape(&mut canvas, &mut registry, root, root, newsletter, Point::new(40, 5))?;
    print_form(&canvas, &registry, root);

    Ok(())
}

/// Print the visual column next to the published property order.
fn print_form(canvas: &Canvas, registry: &ModelRegistry, root: ContainerId) {
    let diagram = canvas
        .diagram_root(root)
        .expect("form root should be a diagram");
    let model = registry.model(diagram).expect("form should be registered");

    println!("Canvas:");
    for &child in canvas.children(root) {
        let position = canvas.position(child);
        let size = canvas.size(child);
        println!(
            "  {child} at ({}, {}) sized {}x{}",
            position.x(),
            position.y(),
            size.width(),
            size.height()
        );
    }

    println!("Published properties:");
    for property in model.definition().properties() {
        let marker = if property.is_mandatory() { " (mandatory)" } else { "" };
        println!("  {} [{}]{marker}", property.name(), property.kind());
    }
    println!();
}
