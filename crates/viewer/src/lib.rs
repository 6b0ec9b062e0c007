//! Malaf Viewer Library
//!
//! Interactive annotation overlay for the Malaf PDF workspace: coordinate
//! mapping, the interaction mode machine, the viewer controller, and the
//! render surface composition.

pub mod geometry;
pub mod mode;
pub mod surface;
pub mod viewer;

pub use geometry::{
    to_document, to_document_with_grab, to_surface, zoom_in, zoom_out, GrabOffset, SurfacePoint,
    MAX_ZOOM, MIN_ZOOM, ZOOM_STEP,
};
pub use mode::{Tool, ViewMode};
pub use surface::{compose, Overlay, PageContent, Surface, PAGE_HEIGHT, PAGE_WIDTH};
pub use viewer::{DownloadRequest, EditorKey, Viewer};
