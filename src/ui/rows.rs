//! Row kinds and row handles exposed to the rendering host.

/// The kind of row at a flat position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewKind {
    Header,
    Footer,
    Data,
}

impl ViewKind {
    /// Numeric code handed to hosts that key their row pools by integer.
    pub fn code(self) -> i32 {
        match self {
            ViewKind::Header => 0,
            ViewKind::Footer => 1,
            ViewKind::Data => 2,
        }
    }

    /// Inverse of [`ViewKind::code`].
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(ViewKind::Header),
            1 => Some(ViewKind::Footer),
            2 => Some(ViewKind::Data),
            _ => None,
        }
    }
}

/// A data row produced by an item builder plus its selection state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemRow<R> {
    pub view: R,
    /// Whether this row is the queue's current item
    pub selected: bool,
}

/// A row created by the adapter.
///
/// `H` is the opaque header/footer handle, `R` the builder's row type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Row<H, R> {
    Header(Option<H>),
    Footer(Option<H>),
    Item(ItemRow<R>),
    /// Placeholder for a row type the adapter does not know. Renders nothing.
    Inert,
}

impl<H, R> Row<H, R> {
    pub fn is_selected(&self) -> bool {
        matches!(self, Row::Item(ItemRow { selected: true, .. }))
    }

    /// The builder's row, for data rows.
    pub fn item_view(&self) -> Option<&R> {
        match self {
            Row::Item(row) => Some(&row.view),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_round_trip() {
        for kind in [ViewKind::Header, ViewKind::Footer, ViewKind::Data] {
            assert_eq!(ViewKind::from_code(kind.code()), Some(kind));
        }
        assert_eq!(ViewKind::from_code(7), None);
        assert_eq!(ViewKind::from_code(-1), None);
    }

    #[test]
    fn test_inert_row_is_empty() {
        let row: Row<(), ()> = Row::Inert;
        assert!(!row.is_selected());
        assert!(row.item_view().is_none());
    }
}
