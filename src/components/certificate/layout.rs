use super::models::Signatory;

/// The layout table is defined for at most five signatories; extras are
/// dropped rather than guessed into additional rows.
pub const MAX_SIGNATORIES: usize = 5;

/// How the main signature row distributes its items
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowArrangement {
    /// Single item centered in the row
    Centered,
    /// Items evenly spaced across the full row width
    SpaceBetween,
}

/// Resolved signatory positions for one certificate.
///
/// The first three signatories occupy the main row. A fourth sits absolutely
/// below the leftmost row item, a fifth below the rightmost.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignatoryLayout {
    pub arrangement: RowArrangement,
    pub row: Vec<Signatory>,
    pub below_left: Option<Signatory>,
    pub below_right: Option<Signatory>,
}

/// Place signatories according to the fixed layout table:
///
/// | count | behaviour                                         |
/// |-------|---------------------------------------------------|
/// | 1     | single item, centered                             |
/// | 2-3   | one space-between row                             |
/// | 4     | row of 3, 4th below the leftmost                  |
/// | 5     | row of 3, 4th below leftmost, 5th below rightmost |
pub fn lay_out(signatories: &[Signatory]) -> SignatoryLayout {
    let signatories = &signatories[..signatories.len().min(MAX_SIGNATORIES)];

    let arrangement = if signatories.len() <= 1 {
        RowArrangement::Centered
    } else {
        RowArrangement::SpaceBetween
    };

    let row = signatories.iter().take(3).cloned().collect();
    let below_left = signatories.get(3).cloned();
    let below_right = signatories.get(4).cloned();

    SignatoryLayout {
        arrangement,
        row,
        below_left,
        below_right,
    }
}
