use crate::geometry::centroid::polygon_centroid;
use crate::model::{Block, GeoPoint, LayerKey};
use crate::sketch::MIN_POLYGON_VERTICES;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CommitError {
    /// The boundary had fewer than the minimum vertices for a closed ring.
    TooFewVertices { got: usize },
    /// The block number must be a positive integer.
    InvalidNumber,
}

impl CommitError {
    pub fn code(&self) -> &'static str {
        "validation"
    }
}

impl fmt::Display for CommitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommitError::TooFewVertices { got } => write!(
                f,
                "a block needs at least {} vertices, got {}",
                MIN_POLYGON_VERTICES, got
            ),
            CommitError::InvalidNumber => write!(f, "block number must be positive"),
        }
    }
}

impl std::error::Error for CommitError {}

/// Append-only log of committed blocks, in commit order. Blocks are never
/// removed and boundaries never edited; selection is the only state that
/// changes after commit. Block numbers are operator-supplied and not
/// checked for uniqueness, and boundaries may overlap previously committed
/// ones.
#[derive(Clone, Debug, Default)]
pub struct BlockRegistry {
    blocks: Vec<Block>,
    selected: Option<usize>,
}

impl BlockRegistry {
    pub fn new() -> Self {
        BlockRegistry::default()
    }

    /// Validates and appends a block. The boundary is the committed
    /// snapshot; the label anchor is its geometric center. On failure the
    /// registry is unchanged.
    pub fn commit(
        &mut self,
        boundary: Vec<GeoPoint>,
        number: u32,
        polygon_key: LayerKey,
        label_key: LayerKey,
    ) -> Result<usize, CommitError> {
        if boundary.len() < MIN_POLYGON_VERTICES {
            return Err(CommitError::TooFewVertices {
                got: boundary.len(),
            });
        }
        if number == 0 {
            return Err(CommitError::InvalidNumber);
        }
        let label_anchor = polygon_centroid(&boundary);
        self.blocks.push(Block {
            number,
            boundary,
            label_anchor,
            selected: false,
            polygon_key,
            label_key,
        });
        Ok(self.blocks.len() - 1)
    }

    /// Identity lookup by label-marker layer key, for reporting which block
    /// a clicked label belongs to.
    pub fn find_by_label(&self, label_key: LayerKey) -> Option<&Block> {
        self.blocks.iter().find(|b| b.label_key == label_key)
    }

    /// Marks the block at `index` selected, clearing any previous
    /// selection. Returns the previously selected index. Selection is
    /// visual state only; boundaries are untouched.
    pub fn select(&mut self, index: usize) -> Option<Option<usize>> {
        if index >= self.blocks.len() {
            return None;
        }
        let previous = self.selected;
        if let Some(prev) = previous {
            self.blocks[prev].selected = false;
        }
        self.blocks[index].selected = true;
        self.selected = Some(index);
        Some(previous)
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn get(&self, index: usize) -> Option<&Block> {
        self.blocks.get(index)
    }

    pub fn all(&self) -> &[Block] {
        &self.blocks
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> Vec<GeoPoint> {
        vec![
            GeoPoint::new(0.0, 0.0),
            GeoPoint::new(0.0, 3.0),
            GeoPoint::new(3.0, 0.0),
        ]
    }

    #[test]
    fn test_commit_appends_block() {
        let mut reg = BlockRegistry::new();
        let idx = reg.commit(triangle(), 7, 100, 101).unwrap();
        assert_eq!(idx, 0);
        assert_eq!(reg.len(), 1);
        let b = reg.get(0).unwrap();
        assert_eq!(b.number, 7);
        assert_eq!(b.boundary(), triangle().as_slice());
        assert!(!b.is_selected());
    }

    #[test]
    fn test_commit_rejects_short_boundary() {
        let mut reg = BlockRegistry::new();
        let two = vec![GeoPoint::new(0.0, 0.0), GeoPoint::new(1.0, 1.0)];
        let err = reg.commit(two, 7, 100, 101).unwrap_err();
        assert_eq!(err, CommitError::TooFewVertices { got: 2 });
        assert_eq!(err.code(), "validation");
        assert!(reg.is_empty());
    }

    #[test]
    fn test_commit_rejects_zero_number() {
        let mut reg = BlockRegistry::new();
        let err = reg.commit(triangle(), 0, 100, 101).unwrap_err();
        assert_eq!(err, CommitError::InvalidNumber);
        assert!(reg.is_empty());
    }

    #[test]
    fn test_duplicate_numbers_are_accepted() {
        let mut reg = BlockRegistry::new();
        reg.commit(triangle(), 7, 100, 101).unwrap();
        reg.commit(triangle(), 7, 102, 103).unwrap();
        assert_eq!(reg.len(), 2);
    }

    #[test]
    fn test_select_is_exclusive() {
        let mut reg = BlockRegistry::new();
        reg.commit(triangle(), 1, 100, 101).unwrap();
        reg.commit(triangle(), 2, 102, 103).unwrap();
        assert_eq!(reg.select(0), Some(None));
        assert!(reg.get(0).unwrap().is_selected());
        assert_eq!(reg.select(1), Some(Some(0)));
        assert!(!reg.get(0).unwrap().is_selected());
        assert!(reg.get(1).unwrap().is_selected());
        assert_eq!(reg.selected(), Some(1));
    }

    #[test]
    fn test_select_out_of_range() {
        let mut reg = BlockRegistry::new();
        assert_eq!(reg.select(0), None);
        assert_eq!(reg.selected(), None);
    }

    #[test]
    fn test_find_by_label() {
        let mut reg = BlockRegistry::new();
        reg.commit(triangle(), 4, 100, 101).unwrap();
        reg.commit(triangle(), 9, 102, 103).unwrap();
        assert_eq!(reg.find_by_label(103).map(|b| b.number), Some(9));
        assert!(reg.find_by_label(999).is_none());
    }

    #[test]
    fn test_label_anchor_is_centroid() {
        let mut reg = BlockRegistry::new();
        let square = vec![
            GeoPoint::new(0.0, 0.0),
            GeoPoint::new(0.0, 2.0),
            GeoPoint::new(2.0, 2.0),
            GeoPoint::new(2.0, 0.0),
        ];
        reg.commit(square, 3, 100, 101).unwrap();
        let anchor = reg.get(0).unwrap().label_anchor;
        assert!((anchor.lat - 1.0).abs() < 1e-9);
        assert!((anchor.lng - 1.0).abs() < 1e-9);
    }
}
