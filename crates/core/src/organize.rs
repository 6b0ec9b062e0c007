//! Page organizer model
//!
//! In-memory sheet list for the organize workflow: select, rotate, delete,
//! and reorder pages of a document. Sheets carry page numbers and rotation
//! only; no page bytes are touched.

use std::collections::HashSet;

/// Unique identifier for a sheet in the organizer
pub type SheetId = uuid::Uuid;

/// A single page entry in the organizer grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sheet {
    id: SheetId,

    /// Position in the document, 1-based; renumbered after reordering
    pub page_number: u16,

    /// Clockwise rotation in degrees, always one of 0/90/180/270
    pub rotation: u16,
}

impl Sheet {
    fn new(page_number: u16) -> Self {
        Self {
            id: SheetId::new_v4(),
            page_number,
            rotation: 0,
        }
    }

    /// Get the sheet id
    pub fn id(&self) -> SheetId {
        self.id
    }
}

/// Ordered sheet list with a selection set
#[derive(Debug, Default)]
pub struct PageOrganizer {
    sheets: Vec<Sheet>,
    selected: HashSet<SheetId>,
}

impl PageOrganizer {
    /// Create an organizer for a document with the given page count
    pub fn new(page_count: u16) -> Self {
        Self {
            sheets: (1..=page_count).map(Sheet::new).collect(),
            selected: HashSet::new(),
        }
    }

    /// Sheets in document order
    pub fn sheets(&self) -> &[Sheet] {
        &self.sheets
    }

    /// Number of sheets
    pub fn len(&self) -> usize {
        self.sheets.len()
    }

    /// Check if the organizer holds no sheets
    pub fn is_empty(&self) -> bool {
        self.sheets.is_empty()
    }

    /// Check whether a sheet is selected
    pub fn is_selected(&self, id: SheetId) -> bool {
        self.selected.contains(&id)
    }

    /// Number of selected sheets
    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }

    /// Toggle a sheet in or out of the selection
    pub fn toggle_select(&mut self, id: SheetId) {
        if !self.sheets.iter().any(|s| s.id == id) {
            return;
        }
        if !self.selected.insert(id) {
            self.selected.remove(&id);
        }
    }

    /// Select every sheet
    pub fn select_all(&mut self) {
        self.selected = self.sheets.iter().map(|s| s.id).collect();
    }

    /// Clear the selection
    pub fn deselect_all(&mut self) {
        self.selected.clear();
    }

    /// Delete the selected sheets and renumber the remainder
    pub fn delete_selected(&mut self) {
        self.sheets.retain(|s| !self.selected.contains(&s.id));
        self.selected.clear();
        self.renumber();
    }

    /// Rotate the selected sheets by a multiple of 90 degrees
    ///
    /// Negative angles rotate counter-clockwise; the result wraps into
    /// `[0, 360)`.
    pub fn rotate_selected(&mut self, degrees: i16) {
        for sheet in &mut self.sheets {
            if self.selected.contains(&sheet.id) {
                let rotated = (sheet.rotation as i16 + degrees).rem_euclid(360);
                sheet.rotation = rotated as u16;
            }
        }
    }

    /// Move a sheet from one position to another, then renumber
    ///
    /// Returns `false` if either index is out of bounds.
    pub fn move_sheet(&mut self, from: usize, to: usize) -> bool {
        if from >= self.sheets.len() || to >= self.sheets.len() {
            return false;
        }
        let sheet = self.sheets.remove(from);
        self.sheets.insert(to, sheet);
        self.renumber();
        true
    }

    /// Selected sheets in document order (for extraction)
    pub fn extract_selected(&self) -> Vec<Sheet> {
        self.sheets
            .iter()
            .filter(|s| self.selected.contains(&s.id))
            .cloned()
            .collect()
    }

    fn renumber(&mut self) {
        for (index, sheet) in self.sheets.iter_mut().enumerate() {
            sheet.page_number = index as u16 + 1;
        }
    }
}
