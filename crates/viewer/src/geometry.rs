//! Pointer-to-document coordinate mapping and zoom stepping
//!
//! All mapping is pure and stateless: the surface bounding box can change
//! with scroll or resize, so callers re-derive it on every pointer event.
//! Out-of-bounds results are permitted and never clamped; annotations may
//! be placed outside the visible page.

use malaf_core::DocPoint;

/// Minimum zoom scale (50%)
pub const MIN_ZOOM: f32 = 0.5;

/// Maximum zoom scale (300%)
pub const MAX_ZOOM: f32 = 3.0;

/// Zoom increment per step
pub const ZOOM_STEP: f32 = 0.25;

/// A point in surface (viewport pixel) space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfacePoint {
    pub x: f32,
    pub y: f32,
}

impl SurfacePoint {
    /// Create a new surface-space point
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Offset between a pointer and a grabbed overlay's top-left corner
///
/// Recorded at drag start so the overlay does not jump to the pointer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GrabOffset {
    pub dx: f32,
    pub dy: f32,
}

impl GrabOffset {
    /// Offset of `pointer` from the overlay origin `origin`
    pub fn between(pointer: SurfacePoint, origin: SurfacePoint) -> Self {
        Self {
            dx: pointer.x - origin.x,
            dy: pointer.y - origin.y,
        }
    }
}

/// Map a pointer position to document space
///
/// Subtracts the surface origin and divides by the zoom scale.
pub fn to_document(pointer: SurfacePoint, surface_origin: SurfacePoint, scale: f32) -> DocPoint {
    DocPoint::new(
        (pointer.x - surface_origin.x) / scale,
        (pointer.y - surface_origin.y) / scale,
    )
}

/// Map a dragged pointer position to the overlay's new document position
///
/// `(pointer − origin − grab) / scale`: the grab offset keeps the overlay
/// anchored under the point where it was picked up.
pub fn to_document_with_grab(
    pointer: SurfacePoint,
    surface_origin: SurfacePoint,
    grab: GrabOffset,
    scale: f32,
) -> DocPoint {
    DocPoint::new(
        (pointer.x - surface_origin.x - grab.dx) / scale,
        (pointer.y - surface_origin.y - grab.dy) / scale,
    )
}

/// Map a document-space point to surface space (relative to the surface)
pub fn to_surface(point: DocPoint, scale: f32) -> SurfacePoint {
    SurfacePoint::new(point.x * scale, point.y * scale)
}

/// One zoom step in, clamped to [`MAX_ZOOM`]
pub fn zoom_in(scale: f32) -> f32 {
    (scale + ZOOM_STEP).min(MAX_ZOOM)
}

/// One zoom step out, clamped to [`MIN_ZOOM`]
pub fn zoom_out(scale: f32) -> f32 {
    (scale - ZOOM_STEP).max(MIN_ZOOM)
}
