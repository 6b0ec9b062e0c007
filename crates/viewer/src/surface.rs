//! Render surface composition
//!
//! Derives a flat, drawable description of the current page from the
//! viewer: the page content layer plus one overlay per annotation on the
//! page. Composition is a pure projection of viewer state; it never
//! mutates the store or the interaction mode.

use malaf_core::{AnnotationId, AnnotationKind, AnnotationStyle, Dimensions};

use crate::geometry::{to_surface, SurfacePoint};
use crate::viewer::Viewer;

/// Unscaled page width in surface units
pub const PAGE_WIDTH: f32 = 850.0;

/// Unscaled page height in surface units
pub const PAGE_HEIGHT: f32 = 1100.0;

/// What fills the page area beneath the annotation overlays
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageContent {
    /// The document's own bytes, rendered by the host's embed frame
    Embedded { url: String },

    /// Placeholder page for documents without a source URL
    Mock { page_number: u16, page_count: u16 },

    /// The embed frame reported a load failure; shown as an inline error
    LoadError,
}

/// One annotation projected into surface space
#[derive(Debug, Clone, PartialEq)]
pub struct Overlay {
    pub id: AnnotationId,
    pub kind: AnnotationKind,
    /// Top-left corner, scaled
    pub origin: SurfacePoint,
    /// Fixed extent, scaled; `None` for content-sized overlays
    pub size: Option<Dimensions>,
    /// Text to draw, with an open editor's draft taking precedence
    pub content: Option<String>,
    pub style: AnnotationStyle,
    /// The inline editor is open on this overlay
    pub editing: bool,
    /// This overlay is mid-drag and should suppress hover affordances
    pub dragging: bool,
}

/// A fully composed frame for the current page
#[derive(Debug, Clone, PartialEq)]
pub struct Surface {
    pub content: PageContent,
    /// Page extent at the current zoom
    pub page_width: f32,
    pub page_height: f32,
    pub scale: f32,
    pub page_number: u16,
    pub page_count: u16,
    /// Back-to-front draw order; a dragged overlay is always last
    pub overlays: Vec<Overlay>,
}

/// Compose the drawable frame for the viewer's current page
///
/// Returns `None` when no document is open. Overlays appear in insertion
/// order except that a dragged overlay is lifted to the end so it draws
/// above its siblings while it moves.
pub fn compose(viewer: &Viewer) -> Option<Surface> {
    let document = viewer.document()?;
    let scale = viewer.scale();

    let content = match &document.source_url {
        Some(_) if viewer.load_failed() => PageContent::LoadError,
        Some(url) => PageContent::Embedded { url: url.clone() },
        None => PageContent::Mock {
            page_number: viewer.current_page(),
            page_count: viewer.page_count(),
        },
    };

    let dragging_id = viewer.mode().dragging_id();
    let editing_id = viewer.mode().editing_id();

    let mut overlays = Vec::new();
    let mut lifted = None;
    for annotation in viewer.annotations().by_page(viewer.current_page()) {
        let id = annotation.id();
        let editing = editing_id == Some(id);
        let content = if editing {
            viewer.mode().draft().map(str::to_string)
        } else {
            annotation.content.clone()
        };

        let overlay = Overlay {
            id,
            kind: annotation.kind(),
            origin: to_surface(annotation.position, scale),
            size: annotation.dimensions.map(|d| Dimensions {
                width: d.width * scale,
                height: d.height * scale,
            }),
            content,
            style: annotation.style,
            editing,
            dragging: dragging_id == Some(id),
        };

        if overlay.dragging {
            lifted = Some(overlay);
        } else {
            overlays.push(overlay);
        }
    }
    overlays.extend(lifted);

    Some(Surface {
        content,
        page_width: PAGE_WIDTH * scale,
        page_height: PAGE_HEIGHT * scale,
        scale,
        page_number: viewer.current_page(),
        page_count: viewer.page_count(),
        overlays,
    })
}
