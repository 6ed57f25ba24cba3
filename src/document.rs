use crate::shape::{Shape, ShapeId};

/// The ordered collection of committed shapes.
///
/// Insertion order is paint order. Shapes can only be appended or removed
/// from the tail.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Document {
    shapes: Vec<Shape>,
    version: u64,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, shape: Shape) {
        self.shapes.push(shape);
        self.version += 1;
    }

    pub fn pop(&mut self) -> Option<Shape> {
        let shape = self.shapes.pop()?;
        self.version += 1;
        Some(shape)
    }

    pub fn clear(&mut self) {
        self.shapes.clear();
        self.version += 1;
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn contains(&self, id: ShapeId) -> bool {
        self.shapes.iter().any(|shape| shape.id() == id)
    }

    pub fn last(&self) -> Option<&Shape> {
        self.shapes.last()
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Bumped on every mutation.
    pub fn version(&self) -> u64 {
        self.version
    }
}
