//! Shape catalog - immutable piece templates
//!
//! A template is a 4x4 occupancy mask plus the cell value a piece of that shape
//! writes into the grid when it settles. Templates are plain data selected by
//! index; there is no per-shape behavior.

use crate::error::{CoreError, Result};
use crate::rng::SimpleRng;
use crate::types::{CellValue, Mask, PieceKind, MASK_SIZE};

/// An immutable piece definition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PieceTemplate {
    pub kind: PieceKind,
    pub tag: CellValue,
    pub mask: Mask,
}

impl PieceTemplate {
    /// Build a template from a literal mask, tagged with the kind's color
    pub const fn new(kind: PieceKind, tag: CellValue, mask: Mask) -> Self {
        Self { kind, tag, mask }
    }

    /// Build a template from row data of unknown shape
    ///
    /// Fails with `InvalidTemplate` unless `rows` is exactly 4x4 and the result
    /// passes [`PieceTemplate::validate`].
    pub fn from_rows(kind: PieceKind, tag: CellValue, rows: &[Vec<bool>]) -> Result<Self> {
        if rows.len() != MASK_SIZE {
            return Err(CoreError::invalid_template(format!(
                "{} has {} rows, expected {}",
                kind.as_str(),
                rows.len(),
                MASK_SIZE
            )));
        }

        let mut mask = [[false; MASK_SIZE]; MASK_SIZE];
        for (r, row) in rows.iter().enumerate() {
            if row.len() != MASK_SIZE {
                return Err(CoreError::invalid_template(format!(
                    "{} row {} has {} cells, expected {}",
                    kind.as_str(),
                    r,
                    row.len(),
                    MASK_SIZE
                )));
            }
            mask[r].copy_from_slice(row);
        }

        let template = Self { kind, tag, mask };
        template.validate()?;
        Ok(template)
    }

    /// Check that pieces built from this template can settle
    ///
    /// The tag must not be `Empty` and the mask needs at least one filled cell;
    /// a blank piece never collides and would fall forever.
    pub fn validate(&self) -> Result<()> {
        if self.tag.is_empty() {
            return Err(CoreError::invalid_template(format!(
                "{} is tagged Empty",
                self.kind.as_str()
            )));
        }
        if self.cell_count() == 0 {
            return Err(CoreError::invalid_template(format!(
                "{} has no filled cells",
                self.kind.as_str()
            )));
        }
        Ok(())
    }

    /// Number of filled cells in the mask
    pub fn cell_count(&self) -> usize {
        self.mask.iter().flatten().filter(|&&filled| filled).count()
    }
}

const X: bool = true;
const O: bool = false;

/// The canonical five-piece set
pub const STANDARD_TEMPLATES: [PieceTemplate; 5] = [
    PieceTemplate::new(
        PieceKind::Square,
        CellValue::Green,
        [[O, O, O, O], [O, O, O, O], [O, X, X, O], [O, X, X, O]],
    ),
    PieceTemplate::new(
        PieceKind::Line,
        CellValue::Blue,
        [[O, X, O, O], [O, X, O, O], [O, X, O, O], [O, X, O, O]],
    ),
    PieceTemplate::new(
        PieceKind::T,
        CellValue::Purple,
        [[O, O, O, O], [O, X, O, O], [X, X, X, O], [O, O, O, O]],
    ),
    PieceTemplate::new(
        PieceKind::L,
        CellValue::Red,
        [[O, O, O, O], [O, X, O, O], [O, X, O, O], [O, X, X, O]],
    ),
    PieceTemplate::new(
        PieceKind::Skew,
        CellValue::Yellow,
        [[O, O, O, O], [X, X, O, O], [O, X, X, O], [O, O, O, O]],
    ),
];

/// Library of templates new pieces are drawn from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShapeCatalog {
    templates: Vec<PieceTemplate>,
}

impl ShapeCatalog {
    /// Build a catalog from arbitrary templates
    ///
    /// An empty catalog cannot spawn anything and is rejected, as is any template
    /// failing [`PieceTemplate::validate`].
    pub fn new(templates: Vec<PieceTemplate>) -> Result<Self> {
        if templates.is_empty() {
            return Err(CoreError::invalid_template("catalog has no templates"));
        }
        for template in &templates {
            template.validate()?;
        }
        Ok(Self { templates })
    }

    /// The canonical five-piece catalog
    pub fn standard() -> Self {
        Self {
            templates: STANDARD_TEMPLATES.to_vec(),
        }
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&PieceTemplate> {
        self.templates.get(index)
    }

    pub fn templates(&self) -> &[PieceTemplate] {
        &self.templates
    }

    /// Pick a template uniformly at random
    pub fn random(&self, rng: &mut SimpleRng) -> &PieceTemplate {
        let index = rng.next_range(self.templates.len() as u32) as usize;
        &self.templates[index]
    }

    /// Find the template whose mask is exactly `mask`
    pub fn find_by_mask(&self, mask: &Mask) -> Option<&PieceTemplate> {
        self.templates.iter().find(|t| &t.mask == mask)
    }
}

impl Default for ShapeCatalog {
    fn default() -> Self {
        Self::standard()
    }
}
