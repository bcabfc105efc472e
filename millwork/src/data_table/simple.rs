//! A simple data table that renders whole matrices.

use std::fmt;

use webdom::Element;

use super::{
    CellAlign, DataTable, DataTableBody, DataTableCell, DataTableContent, DataTableHead,
    DataTableHeadCell, DataTableRow, Sort,
};
use crate::factory::Passthrough;

/// Extra props derived for one row of a [`SimpleDataTable`].
#[derive(Debug, Clone, Default)]
pub struct RowProps {
    pub selected: bool,
    pub activated: bool,
    pub passthrough: Passthrough,
}

impl RowProps {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    pub fn activated(mut self, activated: bool) -> Self {
        self.activated = activated;
        self
    }

    pub fn passthrough(mut self, passthrough: Passthrough) -> Self {
        self.passthrough = passthrough;
        self
    }
}

/// Extra props derived for one cell of a [`SimpleDataTable`].
///
/// `sort` applies to header cells only and controls the rendered sort
/// affordance (indicator and sorted classes). Interactive sort cycling is
/// wired by building [`DataTableHeadCell`]s directly; body cells ignore
/// the field.
#[derive(Debug, Clone, Default)]
pub struct CellProps {
    pub align: Option<CellAlign>,
    pub sort: Option<Sort>,
    pub passthrough: Passthrough,
}

impl CellProps {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn align(mut self, align: CellAlign) -> Self {
        self.align = Some(align);
        self
    }

    pub fn sort(mut self, sort: Sort) -> Self {
        self.sort = Some(sort);
        self
    }

    pub fn passthrough(mut self, passthrough: Passthrough) -> Self {
        self.passthrough = passthrough;
        self
    }
}

type RowPropsFn<T> = Box<dyn Fn(&[T], usize, bool) -> RowProps>;
type CellPropsFn<T> = Box<dyn Fn(&T, usize, bool) -> CellProps>;

/// Render a data matrix (and optional header matrix) as a complete table.
///
/// Header rows, when present, always precede body rows. Row and cell
/// counts mirror the input matrices exactly, jagged or not; the prop
/// derivation callbacks add props to rows and cells but never change how
/// many there are.
///
/// # Example
///
/// ```
/// use millwork::data_table::SimpleDataTable;
///
/// let element = SimpleDataTable::new(vec![vec![1, 2], vec![3, 4]])
///     .headers(vec![vec![0, 0]])
///     .build();
/// ```
pub struct SimpleDataTable<T> {
    data: Vec<Vec<T>>,
    headers: Option<Vec<Vec<T>>>,
    sticky_rows: u32,
    sticky_columns: u32,
    row_props: Option<RowPropsFn<T>>,
    cell_props: Option<CellPropsFn<T>>,
    passthrough: Passthrough,
}

impl<T> fmt::Debug for SimpleDataTable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SimpleDataTable")
            .field("rows", &self.data.len())
            .field("header_rows", &self.headers.as_ref().map(Vec::len))
            .field("sticky_rows", &self.sticky_rows)
            .field("sticky_columns", &self.sticky_columns)
            .finish()
    }
}

impl<T: fmt::Display> SimpleDataTable<T> {
    pub fn new(data: Vec<Vec<T>>) -> Self {
        Self {
            data,
            headers: None,
            sticky_rows: 0,
            sticky_columns: 0,
            row_props: None,
            cell_props: None,
            passthrough: Passthrough::new(),
        }
    }

    /// Header matrix rendered before the body with head-cell semantics.
    pub fn headers(mut self, headers: Vec<Vec<T>>) -> Self {
        self.headers = Some(headers);
        self
    }

    pub fn sticky_rows(mut self, rows: u32) -> Self {
        self.sticky_rows = rows;
        self
    }

    pub fn sticky_columns(mut self, columns: u32) -> Self {
        self.sticky_columns = columns;
        self
    }

    /// Derive extra props for a row from `(row, index, is_head)`.
    pub fn row_props(mut self, f: impl Fn(&[T], usize, bool) -> RowProps + 'static) -> Self {
        self.row_props = Some(Box::new(f));
        self
    }

    /// Derive extra props for a cell from `(cell, index, is_head)`.
    pub fn cell_props(mut self, f: impl Fn(&T, usize, bool) -> CellProps + 'static) -> Self {
        self.cell_props = Some(Box::new(f));
        self
    }

    pub fn passthrough(mut self, passthrough: Passthrough) -> Self {
        self.passthrough = passthrough;
        self
    }

    fn row_element(
        row: &[T],
        index: usize,
        is_head: bool,
        row_props: Option<&RowPropsFn<T>>,
        cell_props: Option<&CellPropsFn<T>>,
    ) -> Element {
        let props = row_props.map(|f| f(row, index, is_head)).unwrap_or_default();
        let mut tr = DataTableRow::new()
            .selected(props.selected)
            .activated(props.activated)
            .passthrough(props.passthrough);

        for (j, value) in row.iter().enumerate() {
            let props = cell_props.map(|f| f(value, j, is_head)).unwrap_or_default();
            let cell = if is_head {
                let mut th = DataTableHeadCell::new().passthrough(props.passthrough);
                if let Some(sort) = props.sort {
                    th = th.sort(sort);
                }
                if let Some(align) = props.align {
                    th = th.align(align);
                }
                th.child(Element::text(value.to_string())).build()
            } else {
                let mut td = DataTableCell::new().passthrough(props.passthrough);
                if let Some(align) = props.align {
                    td = td.align(align);
                }
                td.child(Element::text(value.to_string())).build()
            };
            tr = tr.child(cell);
        }

        tr.build()
    }

    pub fn build(self) -> Element {
        log::debug!(
            "simple table: {} header rows, {} body rows",
            self.headers.as_ref().map_or(0, Vec::len),
            self.data.len()
        );

        let row_props = self.row_props.as_ref();
        let cell_props = self.cell_props.as_ref();

        let mut content = DataTableContent::new();

        if let Some(headers) = &self.headers {
            let mut head = DataTableHead::new();
            for (i, row) in headers.iter().enumerate() {
                head = head.child(Self::row_element(row, i, true, row_props, cell_props));
            }
            content = content.child(head.build());
        }

        let mut body = DataTableBody::new();
        for (i, row) in self.data.iter().enumerate() {
            body = body.child(Self::row_element(row, i, false, row_props, cell_props));
        }
        content = content.child(body.build());

        DataTable::new()
            .sticky_rows(self.sticky_rows)
            .sticky_columns(self.sticky_columns)
            .passthrough(self.passthrough.clone())
            .child(content.build())
            .build()
    }
}
