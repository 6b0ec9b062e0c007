//! Annotation data model
//!
//! User-placed overlay elements (signatures, text, highlights, drawings)
//! attached to a page. Positions are stored in document space: relative to
//! the top-left of the unscaled page, independent of the current zoom.

/// Unique identifier for an annotation
///
/// Generated at creation time and never reused within a document session.
pub type AnnotationId = uuid::Uuid;

/// Document-space coordinate
///
/// Origin (0, 0) at the top-left of the page, x increasing to the right and
/// y increasing downward. Unscaled: zoom is applied only when composing the
/// render surface.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DocPoint {
    pub x: f32,
    pub y: f32,
}

impl DocPoint {
    /// Create a new document-space point
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// RGBA color for annotation rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Create a new color
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque color
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Convert to normalized RGBA values (0.0 to 1.0)
    pub fn to_normalized(&self) -> (f32, f32, f32, f32) {
        (
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            self.a as f32 / 255.0,
        )
    }

    /// Format as a `#rrggbb` hex string (alpha ignored)
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Default annotation palette
impl Color {
    /// Default text color
    pub const TEXT_BLACK: Color = Color { r: 0, g: 0, b: 0, a: 255 };

    /// Default signature color (#1e40af)
    pub const SIGNATURE_BLUE: Color = Color { r: 30, g: 64, b: 175, a: 255 };

    /// Default highlight color (#fef08a)
    pub const HIGHLIGHT_YELLOW: Color = Color { r: 254, g: 240, b: 138, a: 255 };

    /// Default drawing stroke color
    pub const DRAWING_INK: Color = Color { r: 37, g: 99, b: 235, a: 255 };
}

/// Annotation kind — a closed tag set
///
/// Each kind implies a distinct rendering and interaction mode: text and
/// signature annotations carry editable content, highlights carry a sized
/// region, drawings carry neither.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnnotationKind {
    Signature,
    Text,
    Highlight,
    Drawing,
}

impl AnnotationKind {
    /// Whether annotations of this kind carry a text payload
    pub fn has_content(&self) -> bool {
        matches!(self, AnnotationKind::Signature | AnnotationKind::Text)
    }

    /// Whether annotations of this kind carry explicit width/height
    pub fn has_dimensions(&self) -> bool {
        matches!(self, AnnotationKind::Highlight)
    }
}

/// Width and height of a sized annotation, in document space
#[derive(Debug, Clone, Copy, PartialEq, Default, serde::Serialize, serde::Deserialize)]
pub struct Dimensions {
    pub width: f32,
    pub height: f32,
}

impl Dimensions {
    /// Create new dimensions
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Visual styling for an annotation
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AnnotationStyle {
    pub color: Color,
    pub font_size: f32,
}

impl AnnotationStyle {
    /// Default style for a given annotation kind
    pub fn for_kind(kind: AnnotationKind) -> Self {
        match kind {
            AnnotationKind::Text => Self {
                color: Color::TEXT_BLACK,
                font_size: 16.0,
            },
            AnnotationKind::Signature => Self {
                color: Color::SIGNATURE_BLUE,
                font_size: 18.0,
            },
            AnnotationKind::Highlight => Self {
                color: Color::HIGHLIGHT_YELLOW,
                font_size: 0.0,
            },
            AnnotationKind::Drawing => Self {
                color: Color::DRAWING_INK,
                font_size: 0.0,
            },
        }
    }
}

/// Default highlight region size in document space
pub const DEFAULT_HIGHLIGHT_SIZE: Dimensions = Dimensions {
    width: 150.0,
    height: 20.0,
};

/// Placeholder content for freshly placed text annotations
pub const DEFAULT_TEXT_CONTENT: &str = "New Text";

/// Placeholder content for freshly placed signature annotations
pub const DEFAULT_SIGNATURE_CONTENT: &str = "Your Signature";

/// A user-placed overlay element bound to a single page
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Annotation {
    /// Stable unique identifier
    id: AnnotationId,

    /// Annotation kind (fixed at creation)
    kind: AnnotationKind,

    /// Top-left position in document space
    pub position: DocPoint,

    /// Page this annotation is attached to (1-based)
    pub page_number: u16,

    /// Text payload, meaningful for text and signature annotations
    pub content: Option<String>,

    /// Region size, meaningful for highlight annotations
    pub dimensions: Option<Dimensions>,

    /// Visual style with kind-specific defaults
    pub style: AnnotationStyle,
}

impl Annotation {
    /// Create an annotation of the given kind with its default payload
    pub fn new(kind: AnnotationKind, position: DocPoint, page_number: u16) -> Self {
        let content = match kind {
            AnnotationKind::Text => Some(DEFAULT_TEXT_CONTENT.to_string()),
            AnnotationKind::Signature => Some(DEFAULT_SIGNATURE_CONTENT.to_string()),
            AnnotationKind::Highlight | AnnotationKind::Drawing => None,
        };
        let dimensions = match kind {
            AnnotationKind::Highlight => Some(DEFAULT_HIGHLIGHT_SIZE),
            _ => None,
        };

        Self {
            id: AnnotationId::new_v4(),
            kind,
            position,
            page_number,
            content,
            dimensions,
            style: AnnotationStyle::for_kind(kind),
        }
    }

    /// Create a text annotation
    pub fn text(position: DocPoint, page_number: u16) -> Self {
        Self::new(AnnotationKind::Text, position, page_number)
    }

    /// Create a signature annotation
    pub fn signature(position: DocPoint, page_number: u16) -> Self {
        Self::new(AnnotationKind::Signature, position, page_number)
    }

    /// Create a highlight annotation with the default region size
    pub fn highlight(position: DocPoint, page_number: u16) -> Self {
        Self::new(AnnotationKind::Highlight, position, page_number)
    }

    /// Create a drawing annotation
    pub fn drawing(position: DocPoint, page_number: u16) -> Self {
        Self::new(AnnotationKind::Drawing, position, page_number)
    }

    /// Get the annotation ID
    pub fn id(&self) -> AnnotationId {
        self.id
    }

    /// Get the annotation kind
    pub fn kind(&self) -> AnnotationKind {
        self.kind
    }

    /// Whether this annotation's content can be edited inline
    pub fn is_editable(&self) -> bool {
        self.kind.has_content()
    }
}
