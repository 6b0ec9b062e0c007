//! Annotation store
//!
//! An ordered collection of annotations scoped to a document session.
//! Insertion order is the z-order: later entries render on top of earlier
//! ones. Mutations addressing an id that is not present are silent no-ops,
//! since ids are generated internally and never user-supplied.

use crate::annotation::{Annotation, AnnotationId, DocPoint};

/// Ordered annotation collection for the active document
///
/// Owned exclusively by the viewer; all mutation is synchronous and
/// immediately visible to the next render pass.
#[derive(Debug, Default)]
pub struct AnnotationStore {
    entries: Vec<Annotation>,
}

impl AnnotationStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Append an annotation
    ///
    /// Never overwrites an existing id: if the id is already present the
    /// store is left unchanged and `false` is returned.
    pub fn add(&mut self, annotation: Annotation) -> bool {
        if self.contains(annotation.id()) {
            return false;
        }
        self.entries.push(annotation);
        true
    }

    /// Replace the position of the matching annotation
    ///
    /// Returns `true` if the annotation was found; no-op otherwise.
    pub fn update_position(&mut self, id: AnnotationId, position: DocPoint) -> bool {
        match self.entries.iter_mut().find(|a| a.id() == id) {
            Some(annotation) => {
                annotation.position = position;
                true
            }
            None => false,
        }
    }

    /// Replace the content of the matching annotation
    ///
    /// Returns `true` if the annotation was found; no-op otherwise.
    pub fn update_content(&mut self, id: AnnotationId, content: impl Into<String>) -> bool {
        match self.entries.iter_mut().find(|a| a.id() == id) {
            Some(annotation) => {
                annotation.content = Some(content.into());
                true
            }
            None => false,
        }
    }

    /// Remove the matching annotation
    ///
    /// Returns the removed annotation, or `None` if the id was absent.
    pub fn remove(&mut self, id: AnnotationId) -> Option<Annotation> {
        let index = self.entries.iter().position(|a| a.id() == id)?;
        Some(self.entries.remove(index))
    }

    /// Get an annotation by id
    pub fn get(&self, id: AnnotationId) -> Option<&Annotation> {
        self.entries.iter().find(|a| a.id() == id)
    }

    /// Check whether an id is present
    pub fn contains(&self, id: AnnotationId) -> bool {
        self.entries.iter().any(|a| a.id() == id)
    }

    /// Annotations attached to the given page, in insertion (z) order
    pub fn by_page(&self, page_number: u16) -> impl Iterator<Item = &Annotation> {
        self.entries
            .iter()
            .filter(move |a| a.page_number == page_number)
    }

    /// All annotations in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Annotation> {
        self.entries.iter()
    }

    /// Number of annotations in the store
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the store is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Discard all annotations
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
