//! Viewer interaction controller
//!
//! Owns the active document, page, zoom, annotation store, and interaction
//! mode, and interprets pointer and keyboard events against them. All
//! mutation is synchronous inside the event handlers; the host re-renders
//! after each handler returns.
//!
//! The placement, drag, and inline-edit behaviors follow the contracts in
//! the surface composition: clicks place annotations only while a tool is
//! armed, drags update positions live from pointer motion, and edits commit
//! or discard a draft without touching the store until commit.

use malaf_core::{clamp_page, Annotation, AnnotationId, AnnotationStore, Document};

use crate::geometry::{
    self, to_document, to_document_with_grab, GrabOffset, SurfacePoint,
};
use crate::mode::{Tool, ViewMode};

/// Keyboard input the inline editor responds to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorKey {
    /// Commit the draft
    Enter,
    /// Discard the draft
    Escape,
}

/// A browser-level file save request for the active document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadRequest {
    pub url: String,
    pub file_name: String,
}

/// Interactive document viewer state
///
/// The annotation store is owned exclusively by this instance; there is no
/// multi-writer scenario and no locking.
#[derive(Debug)]
pub struct Viewer {
    document: Option<Document>,
    current_page: u16,
    scale: f32,
    annotations: AnnotationStore,
    mode: ViewMode,
    load_failed: bool,
}

impl Default for Viewer {
    fn default() -> Self {
        Self::new()
    }
}

impl Viewer {
    /// Create a viewer with no document
    pub fn new() -> Self {
        Self {
            document: None,
            current_page: 1,
            scale: 1.0,
            annotations: AnnotationStore::new(),
            mode: ViewMode::Viewing,
            load_failed: false,
        }
    }

    // --- document lifecycle ---

    /// Show a document, discarding all state from the previous one
    ///
    /// Annotations, interaction mode, page, zoom, and the load-error flag
    /// reset together as a single transition so no stale references into
    /// the previous document survive.
    pub fn open_document(&mut self, document: Document) {
        self.document = Some(document);
        self.reset_session();
    }

    /// Close the active document
    pub fn close_document(&mut self) {
        self.document = None;
        self.reset_session();
    }

    fn reset_session(&mut self) {
        self.annotations.clear();
        self.current_page = 1;
        self.scale = 1.0;
        self.mode = ViewMode::Viewing;
        self.load_failed = false;
    }

    /// The active document, if any
    pub fn document(&self) -> Option<&Document> {
        self.document.as_ref()
    }

    /// Mark the embedded document frame as failed to load
    ///
    /// Surfaced as an inline error by the render surface; there is no
    /// retry, and the overlay stays interactive.
    pub fn set_load_failed(&mut self) {
        self.load_failed = true;
    }

    /// Whether the embedded frame failed to load
    pub fn load_failed(&self) -> bool {
        self.load_failed
    }

    /// Build a file-save request for the active document
    ///
    /// Only documents with a source URL can be downloaded.
    pub fn download(&self) -> Option<DownloadRequest> {
        let document = self.document.as_ref()?;
        let url = document.source_url.clone()?;
        Some(DownloadRequest {
            url,
            file_name: document.name.clone(),
        })
    }

    // --- page navigation and zoom ---

    /// Number of navigable pages for the active document
    pub fn page_count(&self) -> u16 {
        self.document.as_ref().map_or(0, |d| d.view_page_count())
    }

    /// Currently displayed page (1-based)
    pub fn current_page(&self) -> u16 {
        self.current_page
    }

    /// Jump to a page, clamped to the navigable range
    pub fn set_page(&mut self, page: u16) {
        if self.document.is_some() {
            self.current_page = clamp_page(page, self.page_count());
        }
    }

    /// Advance one page
    pub fn next_page(&mut self) {
        self.set_page(self.current_page.saturating_add(1));
    }

    /// Go back one page
    pub fn prev_page(&mut self) {
        self.set_page(self.current_page.saturating_sub(1));
    }

    /// Jump to the first page
    pub fn first_page(&mut self) {
        self.set_page(1);
    }

    /// Jump to the last page
    pub fn last_page(&mut self) {
        self.set_page(self.page_count());
    }

    /// Current zoom scale (1.0 = 100%)
    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Zoom in one step
    pub fn zoom_in(&mut self) {
        self.scale = geometry::zoom_in(self.scale);
    }

    /// Zoom out one step
    pub fn zoom_out(&mut self) {
        self.scale = geometry::zoom_out(self.scale);
    }

    /// Reset zoom to 100%
    pub fn zoom_reset(&mut self) {
        self.scale = 1.0;
    }

    // --- annotation store access ---

    /// The annotation store (read-only)
    pub fn annotations(&self) -> &AnnotationStore {
        &self.annotations
    }

    /// Current interaction mode
    pub fn mode(&self) -> &ViewMode {
        &self.mode
    }

    // --- tool selection ---

    /// Arm a placement tool, or disarm with `None`
    ///
    /// An open inline edit is cancelled first (the draft is discarded;
    /// commit stays an explicit action). An in-progress drag is ended at
    /// its current position.
    pub fn select_tool(&mut self, tool: Option<Tool>) {
        self.mode = match tool {
            Some(tool) => ViewMode::Placing(tool),
            None => ViewMode::Viewing,
        };
    }

    // --- placement ---

    /// Handle a click on the render surface
    ///
    /// Creates an annotation only while a tool is armed; in every other
    /// mode the click is inert, which allows plain viewing and panning
    /// without accidental placement. Returns the new annotation's id.
    pub fn click_surface(
        &mut self,
        pointer: SurfacePoint,
        surface_origin: SurfacePoint,
    ) -> Option<AnnotationId> {
        let tool = match &self.mode {
            ViewMode::Placing(tool) => *tool,
            _ => return None,
        };
        self.document.as_ref()?;

        let position = to_document(pointer, surface_origin, self.scale);
        let annotation = Annotation::new(tool.annotation_kind(), position, self.current_page);
        let id = annotation.id();
        self.annotations.add(annotation);
        Some(id)
    }

    // --- drag ---

    /// Handle pointer-down on an existing annotation's overlay
    ///
    /// Records the grab offset from the overlay's top-left corner and
    /// enters the dragging state. Ignored while another drag or an inline
    /// edit is in progress, and for unknown ids. Returns `true` if a drag
    /// started.
    pub fn press_annotation(
        &mut self,
        id: AnnotationId,
        pointer: SurfacePoint,
        overlay_origin: SurfacePoint,
    ) -> bool {
        match self.mode {
            ViewMode::Viewing | ViewMode::Placing(_) => {}
            ViewMode::Dragging { .. } | ViewMode::Editing { .. } => return false,
        }
        if !self.annotations.contains(id) {
            return false;
        }

        self.mode = ViewMode::Dragging {
            id,
            grab: GrabOffset::between(pointer, overlay_origin),
            resume: self.mode.active_tool(),
        };
        true
    }

    /// Handle pointer motion over the render surface
    ///
    /// While dragging, the annotation's document position is recomputed
    /// from the latest pointer position; the final position depends only on
    /// the last event, not on the intermediate ones.
    pub fn move_pointer(&mut self, pointer: SurfacePoint, surface_origin: SurfacePoint) {
        if let ViewMode::Dragging { id, grab, .. } = self.mode {
            let position = to_document_with_grab(pointer, surface_origin, grab, self.scale);
            self.annotations.update_position(id, position);
        }
    }

    /// Handle pointer release: ends an in-progress drag
    pub fn release_pointer(&mut self) {
        self.end_drag();
    }

    /// Handle the pointer leaving the surface
    ///
    /// Treated identically to a release so a drag can never get stuck when
    /// the pointer exits the tracking area.
    pub fn leave_surface(&mut self) {
        self.end_drag();
    }

    fn end_drag(&mut self) {
        if let ViewMode::Dragging { resume, .. } = self.mode {
            self.mode = ViewMode::resumed(resume);
        }
    }

    // --- inline edit ---

    /// Open the inline editor for a text or signature annotation
    ///
    /// The annotation's current content seeds the draft. If another edit is
    /// already open its draft is discarded. Ignored mid-drag, for unknown
    /// ids, and for annotation kinds without content. Returns `true` if the
    /// editor opened.
    pub fn begin_edit(&mut self, id: AnnotationId) -> bool {
        if matches!(self.mode, ViewMode::Dragging { .. }) {
            return false;
        }
        let draft = match self.annotations.get(id) {
            Some(annotation) if annotation.is_editable() => {
                annotation.content.clone().unwrap_or_default()
            }
            _ => return false,
        };

        self.mode = ViewMode::Editing {
            id,
            draft,
            resume: self.mode.active_tool(),
        };
        true
    }

    /// Replace the inline editor's draft text
    pub fn set_draft(&mut self, text: impl Into<String>) {
        if let ViewMode::Editing { draft, .. } = &mut self.mode {
            *draft = text.into();
        }
    }

    /// Commit the draft to the annotation and close the editor
    pub fn commit_edit(&mut self) -> bool {
        if let ViewMode::Editing { id, draft, resume } = std::mem::take(&mut self.mode) {
            self.annotations.update_content(id, draft);
            self.mode = ViewMode::resumed(resume);
            true
        } else {
            false
        }
    }

    /// Discard the draft and close the editor; the store is untouched
    pub fn cancel_edit(&mut self) -> bool {
        if let ViewMode::Editing { resume, .. } = self.mode {
            self.mode = ViewMode::resumed(resume);
            true
        } else {
            false
        }
    }

    /// Handle a keyboard shortcut while the inline editor is open
    pub fn key(&mut self, key: EditorKey) {
        match key {
            EditorKey::Enter => {
                self.commit_edit();
            }
            EditorKey::Escape => {
                self.cancel_edit();
            }
        }
    }

    // --- deletion ---

    /// Delete an annotation
    ///
    /// If the annotation is mid-drag or mid-edit that interaction is exited
    /// cleanly first, so the mode never references a removed id. Unknown
    /// ids are a no-op.
    pub fn delete_annotation(&mut self, id: AnnotationId) -> bool {
        match &self.mode {
            ViewMode::Dragging { id: dragged, .. } if *dragged == id => self.end_drag(),
            ViewMode::Editing { id: editing, .. } if *editing == id => {
                self.cancel_edit();
            }
            _ => {}
        }
        self.annotations.remove(id).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use malaf_core::AnnotationKind;

    fn demo_document(pages: u16) -> Document {
        Document {
            id: 1,
            name: "Annual_Report_2024.pdf".to_string(),
            total_pages: pages,
            source_url: None,
            size_bytes: 2 * 1024 * 1024,
        }
    }

    fn uploaded_document(pages: u16) -> Document {
        Document {
            id: 2,
            name: "Contract_Draft.pdf".to_string(),
            total_pages: pages,
            source_url: Some("blob:contract".to_string()),
            size_bytes: 1024 * 1024,
        }
    }

    fn viewer_with_document() -> Viewer {
        let mut viewer = Viewer::new();
        viewer.open_document(uploaded_document(10));
        viewer
    }

    const ORIGIN: SurfacePoint = SurfacePoint { x: 0.0, y: 0.0 };

    #[test]
    fn test_click_without_tool_is_inert() {
        let mut viewer = viewer_with_document();
        assert!(viewer
            .click_surface(SurfacePoint::new(50.0, 50.0), ORIGIN)
            .is_none());
        assert!(viewer.annotations().is_empty());
    }

    #[test]
    fn test_click_without_document_is_inert() {
        let mut viewer = Viewer::new();
        viewer.select_tool(Some(Tool::Text));
        assert!(viewer
            .click_surface(SurfacePoint::new(50.0, 50.0), ORIGIN)
            .is_none());
    }

    #[test]
    fn test_placement_maps_coordinates() {
        // Highlight tool, click at viewport (120, 340), surface origin
        // (100, 200), scale 1.0 -> document (20, 140)
        let mut viewer = viewer_with_document();
        viewer.select_tool(Some(Tool::Highlight));

        let id = viewer
            .click_surface(
                SurfacePoint::new(120.0, 340.0),
                SurfacePoint::new(100.0, 200.0),
            )
            .unwrap();

        let annotation = viewer.annotations().get(id).unwrap();
        assert_eq!(annotation.kind(), AnnotationKind::Highlight);
        assert_eq!(annotation.position.x, 20.0);
        assert_eq!(annotation.position.y, 140.0);
        assert_eq!(annotation.dimensions.unwrap().width, 150.0);
        assert_eq!(annotation.dimensions.unwrap().height, 20.0);
    }

    #[test]
    fn test_placement_binds_current_page() {
        let mut viewer = viewer_with_document();
        viewer.set_page(4);
        viewer.select_tool(Some(Tool::Text));

        let id = viewer
            .click_surface(SurfacePoint::new(10.0, 10.0), ORIGIN)
            .unwrap();

        let annotation = viewer.annotations().get(id).unwrap();
        assert_eq!(annotation.page_number, 4);
        for page in 1..=10u16 {
            let on_page = viewer.annotations().by_page(page).any(|a| a.id() == id);
            assert_eq!(on_page, page == 4);
        }
    }

    #[test]
    fn test_placement_respects_scale() {
        let mut viewer = viewer_with_document();
        viewer.zoom_in(); // 1.25
        viewer.zoom_in(); // 1.5
        viewer.select_tool(Some(Tool::Signature));

        let id = viewer
            .click_surface(SurfacePoint::new(150.0, 300.0), ORIGIN)
            .unwrap();
        let annotation = viewer.annotations().get(id).unwrap();
        assert_eq!(annotation.position.x, 100.0);
        assert_eq!(annotation.position.y, 200.0);
    }

    #[test]
    fn test_drag_moves_annotation() {
        let mut viewer = viewer_with_document();
        viewer.select_tool(Some(Tool::Text));
        let id = viewer
            .click_surface(SurfacePoint::new(50.0, 50.0), ORIGIN)
            .unwrap();
        viewer.select_tool(None);

        // Grab the overlay at its corner and drag to (80, 90)
        let overlay_origin = SurfacePoint::new(50.0, 50.0);
        assert!(viewer.press_annotation(id, overlay_origin, overlay_origin));
        viewer.move_pointer(SurfacePoint::new(60.0, 75.0), ORIGIN);
        viewer.move_pointer(SurfacePoint::new(80.0, 90.0), ORIGIN);
        viewer.release_pointer();

        let annotation = viewer.annotations().get(id).unwrap();
        assert_eq!(annotation.position.x, 80.0);
        assert_eq!(annotation.position.y, 90.0);
        assert_eq!(viewer.annotations().len(), 1);
        assert_eq!(*viewer.mode(), ViewMode::Viewing);
    }

    #[test]
    fn test_drag_final_position_ignores_intermediate_moves() {
        let mut viewer = viewer_with_document();
        viewer.select_tool(Some(Tool::Text));
        let id = viewer
            .click_surface(SurfacePoint::new(10.0, 10.0), ORIGIN)
            .unwrap();
        viewer.select_tool(None);

        let grab_at = SurfacePoint::new(14.0, 12.0);
        viewer.press_annotation(id, grab_at, SurfacePoint::new(10.0, 10.0));
        for step in 0..25 {
            viewer.move_pointer(SurfacePoint::new(step as f32 * 7.0, step as f32 * 3.0), ORIGIN);
        }
        viewer.move_pointer(SurfacePoint::new(204.0, 112.0), ORIGIN);
        viewer.release_pointer();

        // (204 - 0 - 4) / 1.0 = 200, (112 - 0 - 2) / 1.0 = 110
        let annotation = viewer.annotations().get(id).unwrap();
        assert_eq!(annotation.position.x, 200.0);
        assert_eq!(annotation.position.y, 110.0);
    }

    #[test]
    fn test_pointer_leave_ends_drag_like_release() {
        let mut viewer = viewer_with_document();
        viewer.select_tool(Some(Tool::Highlight));
        let id = viewer
            .click_surface(SurfacePoint::new(30.0, 30.0), ORIGIN)
            .unwrap();

        let origin = SurfacePoint::new(30.0, 30.0);
        viewer.press_annotation(id, origin, origin);
        assert!(viewer.mode().dragging_id().is_some());

        viewer.leave_surface();
        assert!(viewer.mode().dragging_id().is_none());
        // The armed tool is restored after the drag
        assert_eq!(*viewer.mode(), ViewMode::Placing(Tool::Highlight));
    }

    #[test]
    fn test_second_press_ignored_while_dragging() {
        let mut viewer = viewer_with_document();
        viewer.select_tool(Some(Tool::Text));
        let first = viewer
            .click_surface(SurfacePoint::new(10.0, 10.0), ORIGIN)
            .unwrap();
        let second = viewer
            .click_surface(SurfacePoint::new(90.0, 90.0), ORIGIN)
            .unwrap();

        let origin = SurfacePoint::new(10.0, 10.0);
        assert!(viewer.press_annotation(first, origin, origin));
        assert!(!viewer.press_annotation(second, origin, origin));
        assert_eq!(viewer.mode().dragging_id(), Some(first));
    }

    #[test]
    fn test_edit_commit_and_cancel() {
        let mut viewer = viewer_with_document();
        viewer.select_tool(Some(Tool::Signature));
        let id = viewer
            .click_surface(SurfacePoint::new(10.0, 10.0), ORIGIN)
            .unwrap();

        // Enter commits the draft
        assert!(viewer.begin_edit(id));
        viewer.set_draft("John Doe");
        viewer.key(EditorKey::Enter);
        assert_eq!(
            viewer.annotations().get(id).unwrap().content.as_deref(),
            Some("John Doe")
        );

        // Escape leaves the content unchanged
        viewer.begin_edit(id);
        viewer.set_draft("Jane Roe");
        viewer.key(EditorKey::Escape);
        assert_eq!(
            viewer.annotations().get(id).unwrap().content.as_deref(),
            Some("John Doe")
        );
    }

    #[test]
    fn test_edit_rejected_for_highlight() {
        let mut viewer = viewer_with_document();
        viewer.select_tool(Some(Tool::Highlight));
        let id = viewer
            .click_surface(SurfacePoint::new(10.0, 10.0), ORIGIN)
            .unwrap();

        assert!(!viewer.begin_edit(id));
        assert!(viewer.mode().editing_id().is_none());
    }

    #[test]
    fn test_second_edit_discards_first_draft() {
        let mut viewer = viewer_with_document();
        viewer.select_tool(Some(Tool::Text));
        let first = viewer
            .click_surface(SurfacePoint::new(10.0, 10.0), ORIGIN)
            .unwrap();
        let second = viewer
            .click_surface(SurfacePoint::new(90.0, 90.0), ORIGIN)
            .unwrap();

        viewer.begin_edit(first);
        viewer.set_draft("abandoned");
        viewer.begin_edit(second);

        // Only one edit open, and the abandoned draft was not committed
        assert_eq!(viewer.mode().editing_id(), Some(second));
        assert_eq!(
            viewer.annotations().get(first).unwrap().content.as_deref(),
            Some("New Text")
        );
    }

    #[test]
    fn test_clicks_inert_while_editing() {
        let mut viewer = viewer_with_document();
        viewer.select_tool(Some(Tool::Text));
        let id = viewer
            .click_surface(SurfacePoint::new(10.0, 10.0), ORIGIN)
            .unwrap();
        viewer.begin_edit(id);

        assert!(viewer
            .click_surface(SurfacePoint::new(50.0, 50.0), ORIGIN)
            .is_none());
        assert_eq!(viewer.annotations().len(), 1);
    }

    #[test]
    fn test_delete_mid_drag_exits_cleanly() {
        let mut viewer = viewer_with_document();
        viewer.select_tool(Some(Tool::Text));
        let id = viewer
            .click_surface(SurfacePoint::new(10.0, 10.0), ORIGIN)
            .unwrap();

        let origin = SurfacePoint::new(10.0, 10.0);
        viewer.press_annotation(id, origin, origin);
        assert!(viewer.delete_annotation(id));

        assert!(viewer.mode().dragging_id().is_none());
        assert!(viewer.annotations().is_empty());
        // A stray move after deletion must not panic or resurrect the id
        viewer.move_pointer(SurfacePoint::new(99.0, 99.0), ORIGIN);
        assert!(viewer.annotations().is_empty());
    }

    #[test]
    fn test_delete_mid_edit_discards_draft() {
        let mut viewer = viewer_with_document();
        viewer.select_tool(Some(Tool::Text));
        let id = viewer
            .click_surface(SurfacePoint::new(10.0, 10.0), ORIGIN)
            .unwrap();

        viewer.begin_edit(id);
        viewer.set_draft("never committed");
        assert!(viewer.delete_annotation(id));

        assert!(viewer.mode().editing_id().is_none());
        assert!(viewer.annotations().is_empty());
    }

    #[test]
    fn test_page_navigation_clamps() {
        let mut viewer = Viewer::new();
        viewer.open_document(uploaded_document(10));

        viewer.set_page(0);
        assert_eq!(viewer.current_page(), 1);
        viewer.set_page(25);
        assert_eq!(viewer.current_page(), 10);

        viewer.first_page();
        viewer.prev_page();
        assert_eq!(viewer.current_page(), 1);
        viewer.last_page();
        viewer.next_page();
        assert_eq!(viewer.current_page(), 10);
    }

    #[test]
    fn test_mock_document_page_cap() {
        let mut viewer = Viewer::new();
        viewer.open_document(demo_document(24));
        assert_eq!(viewer.page_count(), 5);
        viewer.last_page();
        assert_eq!(viewer.current_page(), 5);
    }

    #[test]
    fn test_document_switch_resets_everything() {
        let mut viewer = viewer_with_document();
        viewer.select_tool(Some(Tool::Text));
        viewer.click_surface(SurfacePoint::new(10.0, 10.0), ORIGIN);
        viewer.click_surface(SurfacePoint::new(20.0, 20.0), ORIGIN);
        viewer.click_surface(SurfacePoint::new(30.0, 30.0), ORIGIN);
        viewer.set_page(2);
        viewer.zoom_in();
        viewer.set_load_failed();

        viewer.open_document(demo_document(3));

        assert!(viewer.annotations().is_empty());
        assert_eq!(viewer.current_page(), 1);
        assert_eq!(viewer.scale(), 1.0);
        assert_eq!(*viewer.mode(), ViewMode::Viewing);
        assert!(!viewer.load_failed());
    }

    #[test]
    fn test_download_requires_source_url() {
        let mut viewer = Viewer::new();
        viewer.open_document(demo_document(3));
        assert!(viewer.download().is_none());

        viewer.open_document(uploaded_document(10));
        let request = viewer.download().unwrap();
        assert_eq!(request.url, "blob:contract");
        assert_eq!(request.file_name, "Contract_Draft.pdf");
    }
}
