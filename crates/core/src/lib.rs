//! Malaf Core Library
//!
//! Document and annotation state model for the Malaf PDF workspace.

pub mod annotation;
pub mod document;
pub mod organize;
pub mod store;

pub use annotation::{
    Annotation, AnnotationId, AnnotationKind, AnnotationStyle, Color, Dimensions, DocPoint,
    DEFAULT_HIGHLIGHT_SIZE, DEFAULT_SIGNATURE_CONTENT, DEFAULT_TEXT_CONTENT,
};
pub use document::{
    clamp_page, Document, DocumentError, DocumentId, DocumentShelf, DocumentSpec, MOCK_PAGE_LIMIT,
};
pub use organize::{PageOrganizer, Sheet, SheetId};
pub use store::AnnotationStore;
