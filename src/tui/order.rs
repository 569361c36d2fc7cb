//! Display order for the move list.
//!
//! Ordering is a presentation choice only. Arranging entries never touches
//! the history they came from.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Order in which the move list is shown.
///
/// Defaults to [`DisplayOrder::Ascending`] so the game start comes first.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    clap::ValueEnum,
    derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum DisplayOrder {
    /// Oldest move first.
    #[default]
    #[display("Ascending")]
    Ascending,
    /// Newest move first.
    #[display("Descending")]
    Descending,
}

impl DisplayOrder {
    /// Toggles between `Ascending` and `Descending`.
    #[instrument]
    pub fn toggle(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// Returns `items`, given in chronological order, in this display order.
    pub fn arrange<T>(self, mut items: Vec<T>) -> Vec<T> {
        if self == Self::Descending {
            items.reverse();
        }
        items
    }

    /// Screen row of chronological index `index` in a list of `len` items.
    pub fn row_of(self, index: usize, len: usize) -> usize {
        match self {
            Self::Ascending => index,
            Self::Descending => len.saturating_sub(1).saturating_sub(index),
        }
    }

    /// Chronological index shown at screen row `row`; the mapping is its
    /// own inverse.
    pub fn index_at(self, row: usize, len: usize) -> usize {
        self.row_of(row, len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_round_trips() {
        assert_eq!(DisplayOrder::Ascending.toggle(), DisplayOrder::Descending);
        assert_eq!(DisplayOrder::Descending.toggle().toggle(), DisplayOrder::Descending);
    }

    #[test]
    fn test_arrange() {
        let items = vec![0, 1, 2, 3];
        assert_eq!(DisplayOrder::Ascending.arrange(items.clone()), vec![0, 1, 2, 3]);
        assert_eq!(DisplayOrder::Descending.arrange(items), vec![3, 2, 1, 0]);
    }

    #[test]
    fn test_row_mapping_agrees_with_arrange() {
        let len = 5;
        for order in [DisplayOrder::Ascending, DisplayOrder::Descending] {
            let arranged = order.arrange((0..len).collect::<Vec<_>>());
            for index in 0..len {
                assert_eq!(arranged[order.row_of(index, len)], index);
                assert_eq!(order.index_at(order.row_of(index, len), len), index);
            }
        }
    }

    #[test]
    fn test_deserializes_lowercase() {
        #[derive(Deserialize)]
        struct Wrapper {
            order: DisplayOrder,
        }
        let parsed: Wrapper = toml::from_str("order = \"descending\"").unwrap();
        assert_eq!(parsed.order, DisplayOrder::Descending);
    }
}
