//! Document model and open-document shelf
//!
//! A document is a handle provided by the file-management collaborator:
//! name, page count, and an optional source URL. When a source URL is
//! present the viewer embeds the external document frame; otherwise it
//! falls back to synthetic mock paging capped at a few pages.

/// Unique identifier for a document
pub type DocumentId = u64;

/// Page cap for the synthetic mock viewer (documents without a source URL)
pub const MOCK_PAGE_LIMIT: u16 = 5;

/// Clamp a 1-based page number to `[1, total]`
///
/// Out-of-range navigation never raises an error; the request is clamped.
pub fn clamp_page(page: u16, total: u16) -> u16 {
    page.max(1).min(total.max(1))
}

/// Handle for a document supplied by the file-management collaborator
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Document {
    /// Unique document identifier
    pub id: DocumentId,

    /// File name, used as the save name for downloads
    pub name: String,

    /// Total page count (1-based pages)
    pub total_pages: u16,

    /// Source URL for uploaded documents; absent for demo documents
    pub source_url: Option<String>,

    /// File size in bytes, shown in the file list
    pub size_bytes: u64,
}

impl Document {
    /// Whether the render surface should embed an external document frame
    pub fn is_embedded(&self) -> bool {
        self.source_url.is_some()
    }

    /// Number of pages the viewer can navigate
    ///
    /// Embedded documents expose their full page count; the synthetic mock
    /// viewer is capped at [`MOCK_PAGE_LIMIT`] pages.
    pub fn view_page_count(&self) -> u16 {
        if self.is_embedded() {
            self.total_pages
        } else {
            self.total_pages.min(MOCK_PAGE_LIMIT)
        }
    }
}

/// Errors from shelf operations
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    /// Document not found on the shelf
    #[error("document not found: {0}")]
    NotFound(DocumentId),
}

/// Specification for opening a document on the shelf
#[derive(Debug, Clone)]
pub struct DocumentSpec {
    pub name: String,
    pub total_pages: u16,
    pub source_url: Option<String>,
    pub size_bytes: u64,
}

/// Ordered shelf of open documents with one active tab
///
/// Mirrors the tab bar: documents keep their opening order, the first open
/// becomes active, and closing the active tab activates its neighbor.
/// Single-threaded by design; the shelf has exactly one owner.
#[derive(Debug)]
pub struct DocumentShelf {
    documents: Vec<Document>,
    active: Option<DocumentId>,
    next_id: DocumentId,
}

impl Default for DocumentShelf {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentShelf {
    /// Create an empty shelf
    pub fn new() -> Self {
        Self {
            documents: Vec::new(),
            active: None,
            next_id: 1,
        }
    }

    /// Open a document, assigning it a fresh id
    ///
    /// The first opened document becomes active.
    pub fn open(&mut self, spec: DocumentSpec) -> DocumentId {
        let id = self.next_id;
        self.next_id += 1;

        self.documents.push(Document {
            id,
            name: spec.name,
            total_pages: spec.total_pages,
            source_url: spec.source_url,
            size_bytes: spec.size_bytes,
        });

        if self.active.is_none() {
            self.active = Some(id);
        }
        id
    }

    /// Close a document
    ///
    /// If the closed document was active, the tab that took its place (or
    /// the new last tab) becomes active; an empty shelf has no active tab.
    pub fn close(&mut self, id: DocumentId) -> Result<(), DocumentError> {
        let index = self
            .documents
            .iter()
            .position(|d| d.id == id)
            .ok_or(DocumentError::NotFound(id))?;
        self.documents.remove(index);

        if self.active == Some(id) {
            self.active = if self.documents.is_empty() {
                None
            } else {
                let neighbor = index.min(self.documents.len() - 1);
                Some(self.documents[neighbor].id)
            };
        }
        Ok(())
    }

    /// Make a document the active tab
    pub fn activate(&mut self, id: DocumentId) -> Result<(), DocumentError> {
        if !self.documents.iter().any(|d| d.id == id) {
            return Err(DocumentError::NotFound(id));
        }
        self.active = Some(id);
        Ok(())
    }

    /// The currently active document, if any
    pub fn active(&self) -> Option<&Document> {
        self.active
            .and_then(|id| self.documents.iter().find(|d| d.id == id))
    }

    /// Get a document by id
    pub fn get(&self, id: DocumentId) -> Option<&Document> {
        self.documents.iter().find(|d| d.id == id)
    }

    /// Open documents in tab order
    pub fn iter(&self) -> impl Iterator<Item = &Document> {
        self.documents.iter()
    }

    /// Number of open documents
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Check if the shelf is empty
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}
