//! Viewer interaction mode
//!
//! A single tagged union replaces the sibling boolean flags of a typical
//! overlay UI (is-dragging, dragged-id, editing-id, editing-value, selected
//! tool). Transitions are explicit, and the exclusivity invariants (at most
//! one annotation dragging, at most one editing, never both) hold by
//! construction.

use malaf_core::{AnnotationId, AnnotationKind};

use crate::geometry::GrabOffset;

/// The active placement tool
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    Text,
    Signature,
    Highlight,
}

impl Tool {
    /// The annotation kind a click with this tool produces (fixed lookup)
    pub fn annotation_kind(&self) -> AnnotationKind {
        match self {
            Tool::Text => AnnotationKind::Text,
            Tool::Signature => AnnotationKind::Signature,
            Tool::Highlight => AnnotationKind::Highlight,
        }
    }

    /// Resolve a toolbar feature id to a tool
    ///
    /// Unknown ids map to `None`, leaving the viewer in plain viewing mode.
    pub fn from_feature(feature: &str) -> Option<Tool> {
        match feature {
            "edit-text" | "edit-pdf" => Some(Tool::Text),
            "fill-sign" => Some(Tool::Signature),
            "highlight" => Some(Tool::Highlight),
            _ => None,
        }
    }
}

/// Current interaction mode of the viewer
#[derive(Debug, Clone, PartialEq)]
pub enum ViewMode {
    /// Plain viewing; surface clicks are inert
    Viewing,

    /// A tool is armed; the next surface click places an annotation
    Placing(Tool),

    /// An annotation is being moved; `resume` restores the armed tool on
    /// release
    Dragging {
        id: AnnotationId,
        grab: GrabOffset,
        resume: Option<Tool>,
    },

    /// An annotation's content is open in the inline editor
    Editing {
        id: AnnotationId,
        draft: String,
        resume: Option<Tool>,
    },
}

impl ViewMode {
    /// The tool that should be restored when the current interaction ends
    pub fn active_tool(&self) -> Option<Tool> {
        match self {
            ViewMode::Viewing => None,
            ViewMode::Placing(tool) => Some(*tool),
            ViewMode::Dragging { resume, .. } | ViewMode::Editing { resume, .. } => *resume,
        }
    }

    /// The annotation currently being dragged, if any
    pub fn dragging_id(&self) -> Option<AnnotationId> {
        match self {
            ViewMode::Dragging { id, .. } => Some(*id),
            _ => None,
        }
    }

    /// The annotation currently open in the inline editor, if any
    pub fn editing_id(&self) -> Option<AnnotationId> {
        match self {
            ViewMode::Editing { id, .. } => Some(*id),
            _ => None,
        }
    }

    /// The inline editor's draft text, if an edit is open
    pub fn draft(&self) -> Option<&str> {
        match self {
            ViewMode::Editing { draft, .. } => Some(draft),
            _ => None,
        }
    }

    /// Rebuild the mode an interaction should return to
    pub fn resumed(resume: Option<Tool>) -> ViewMode {
        match resume {
            Some(tool) => ViewMode::Placing(tool),
            None => ViewMode::Viewing,
        }
    }
}

impl Default for ViewMode {
    fn default() -> Self {
        ViewMode::Viewing
    }
}
