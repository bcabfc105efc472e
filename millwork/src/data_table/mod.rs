//! Data table components: table container, head/body structure, rows,
//! cells, and sortable header cells.
//!
//! Sorting is app-controlled: a header cell renders whatever [`Sort`]
//! state it is given and reports the *next* state through its
//! `on_sort_change` callback when clicked. The components never sort data
//! and never store state between builds.

mod simple;

pub use simple::{CellProps, RowProps, SimpleDataTable};

use std::fmt;

use serde::{Deserialize, Serialize};
use webdom::{ClassList, Element};

use crate::event::ClickEvent;
use crate::factory::{ComponentSpec, Passthrough};
use crate::icon::Icon;

/// Sort-cycle state of a sortable column.
///
/// A column that is not sortable has no `Sort` at all (the prop is
/// absent); a sortable column cycles Unsorted → Ascending → Descending →
/// Unsorted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sort {
    #[default]
    Unsorted,
    Ascending,
    Descending,
}

impl Sort {
    /// The state a click moves to. Total and cyclic with period 3.
    pub fn next(self) -> Sort {
        match self {
            Sort::Unsorted => Sort::Ascending,
            Sort::Ascending => Sort::Descending,
            Sort::Descending => Sort::Unsorted,
        }
    }

    /// Whether a direction is applied.
    pub fn is_sorted(self) -> bool {
        self != Sort::Unsorted
    }
}

/// Horizontal alignment of cell content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CellAlign {
    Start,
    Middle,
    End,
}

/// Alignment modifiers shared by plain cells and header cells.
fn cell_align_classes(classes: ClassList, align: Option<CellAlign>) -> ClassList {
    classes
        .toggle(
            "mlw-data-table__cell--align-start",
            align == Some(CellAlign::Start),
        )
        .toggle(
            "mlw-data-table__cell--align-middle",
            align == Some(CellAlign::Middle),
        )
        .toggle(
            "mlw-data-table__cell--align-end",
            align == Some(CellAlign::End),
        )
}

/// Callback invoked with the next sort state after a header-cell click.
pub type SortChangeHandler = Box<dyn Fn(Sort)>;

/// Callback invoked with the raw click event.
pub type ClickHandler = Box<dyn Fn(&ClickEvent)>;

/// The data table container.
///
/// `sticky_rows` / `sticky_columns` affix leading rows/columns while
/// scrolling. The stylesheet ships the one-row/one-column variants, so
/// values above 1 clamp to 1.
#[derive(Debug, Clone, Default)]
pub struct DataTable {
    sticky_rows: u32,
    sticky_columns: u32,
    children: Vec<Element>,
    passthrough: Passthrough,
}

impl DataTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sticky_rows(mut self, rows: u32) -> Self {
        self.sticky_rows = rows;
        self
    }

    pub fn sticky_columns(mut self, columns: u32) -> Self {
        self.sticky_columns = columns;
        self
    }

    pub fn child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Element>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn passthrough(mut self, passthrough: Passthrough) -> Self {
        self.passthrough = passthrough;
        self
    }

    pub fn build(self) -> Element {
        if self.sticky_rows > 1 || self.sticky_columns > 1 {
            log::debug!(
                "data table: clamping sticky rows/columns ({}, {}) to 1",
                self.sticky_rows,
                self.sticky_columns
            );
        }
        let sticky_columns = self.sticky_columns > 0;
        let sticky_rows = self.sticky_rows > 0;

        let classes = ClassList::new()
            .base("mlw-data-table")
            .toggle("mlw-data-table--sticky-columns", sticky_columns)
            .toggle("mlw-data-table--sticky-columns-1", sticky_columns)
            .toggle("mlw-data-table--sticky-rows", sticky_rows)
            .toggle("mlw-data-table--sticky-rows-1", sticky_rows);

        ComponentSpec::primitive("div")
            .classes(classes)
            .build(self.passthrough)
            .children(self.children)
    }
}

/// The `table` element inside the container.
#[derive(Debug, Clone, Default)]
pub struct DataTableContent {
    children: Vec<Element>,
    passthrough: Passthrough,
}

impl DataTableContent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Element>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn passthrough(mut self, passthrough: Passthrough) -> Self {
        self.passthrough = passthrough;
        self
    }

    pub fn build(self) -> Element {
        ComponentSpec::primitive("table")
            .classes(ClassList::new().base("mlw-data-table__content"))
            .build(self.passthrough)
            .children(self.children)
    }
}

/// The header section (`thead`).
#[derive(Debug, Clone, Default)]
pub struct DataTableHead {
    children: Vec<Element>,
    passthrough: Passthrough,
}

impl DataTableHead {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Element>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn passthrough(mut self, passthrough: Passthrough) -> Self {
        self.passthrough = passthrough;
        self
    }

    pub fn build(self) -> Element {
        ComponentSpec::primitive("thead")
            .classes(ClassList::new().base("mlw-data-table__head"))
            .build(self.passthrough)
            .children(self.children)
    }
}

/// The body section (`tbody`).
#[derive(Debug, Clone, Default)]
pub struct DataTableBody {
    children: Vec<Element>,
    passthrough: Passthrough,
}

impl DataTableBody {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Element>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn passthrough(mut self, passthrough: Passthrough) -> Self {
        self.passthrough = passthrough;
        self
    }

    pub fn build(self) -> Element {
        ComponentSpec::primitive("tbody")
            .classes(ClassList::new().base("mlw-data-table__body"))
            .build(self.passthrough)
            .children(self.children)
    }
}

/// A table row (`tr`).
#[derive(Debug, Clone, Default)]
pub struct DataTableRow {
    selected: bool,
    activated: bool,
    children: Vec<Element>,
    passthrough: Passthrough,
}

impl DataTableRow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Style the row in a selected state.
    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    /// Style the row in an activated state.
    pub fn activated(mut self, activated: bool) -> Self {
        self.activated = activated;
        self
    }

    pub fn child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Element>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn passthrough(mut self, passthrough: Passthrough) -> Self {
        self.passthrough = passthrough;
        self
    }

    pub fn build(self) -> Element {
        let classes = ClassList::new()
            .base("mlw-data-table__row")
            .toggle("mlw-data-table__row--selected", self.selected)
            .toggle("mlw-data-table__row--activated", self.activated);

        ComponentSpec::primitive("tr")
            .classes(classes)
            .build(self.passthrough)
            .children(self.children)
    }
}

/// The sort indicator rendered inside sortable header cells.
fn sort_icon() -> Element {
    let arrow = Element::new("svg")
        .attr("width", "18")
        .attr("height", "18")
        .attr("viewBox", "0 0 24 24")
        .child(
            Element::new("path")
                .attr("fill", "currentColor")
                .attr("d", "M20 12l-1.41-1.41L13 16.17V4h-2v12.17l-5.58-5.59L4 12l8 8 8-8z"),
        );
    Icon::custom(arrow)
        .passthrough(Passthrough::new().class("mlw-data-table__sort-icon"))
        .build()
}

/// A header cell (`th`), optionally sortable.
///
/// Sortability is opted into by giving the cell a [`Sort`] state; a cell
/// without one renders no sort affordances and [`click`](Self::click)
/// performs no sort notification. The cell itself never mutates the sort
/// state: it reports the next state and expects the caller to rebuild with
/// the new prop.
#[derive(Default)]
pub struct DataTableHeadCell {
    sort: Option<Sort>,
    align: Option<CellAlign>,
    on_sort_change: Option<SortChangeHandler>,
    on_click: Option<ClickHandler>,
    children: Vec<Element>,
    passthrough: Passthrough,
}

impl fmt::Debug for DataTableHeadCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DataTableHeadCell")
            .field("sort", &self.sort)
            .field("align", &self.align)
            .field("on_sort_change", &self.on_sort_change.is_some())
            .field("on_click", &self.on_click.is_some())
            .field("children", &self.children.len())
            .finish()
    }
}

impl DataTableHeadCell {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the column sortable with the given current state.
    pub fn sort(mut self, sort: Sort) -> Self {
        self.sort = Some(sort);
        self
    }

    pub fn align(mut self, align: CellAlign) -> Self {
        self.align = Some(align);
        self
    }

    /// Called with the next sort state when a sortable cell is clicked.
    pub fn on_sort_change(mut self, handler: impl Fn(Sort) + 'static) -> Self {
        self.on_sort_change = Some(Box::new(handler));
        self
    }

    /// Called with the raw click event on every click, sortable or not.
    pub fn on_click(mut self, handler: impl Fn(&ClickEvent) + 'static) -> Self {
        self.on_click = Some(Box::new(handler));
        self
    }

    pub fn child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Element>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn passthrough(mut self, passthrough: Passthrough) -> Self {
        self.passthrough = passthrough;
        self
    }

    /// Deliver a click to this cell.
    ///
    /// The sort-change notification fires only when the cell is sortable
    /// AND a handler is present; the raw event is then forwarded to
    /// `on_click` unconditionally.
    pub fn click(&self, event: &ClickEvent) {
        if let (Some(sort), Some(handler)) = (self.sort, self.on_sort_change.as_ref()) {
            let next = sort.next();
            log::debug!("head cell sort cycle: {sort:?} -> {next:?}");
            handler(next);
        }
        if let Some(handler) = self.on_click.as_ref() {
            handler(event);
        }
    }

    pub fn build(self) -> Element {
        let sorted = self.sort.is_some_and(Sort::is_sorted);
        let classes = ClassList::new()
            .base("mlw-data-table__cell")
            .base("mlw-data-table__head-cell")
            .toggle("mlw-data-table__head-cell--sortable", self.sort.is_some())
            .toggle("mlw-data-table__head-cell--sorted", sorted)
            .toggle(
                "mlw-data-table__head-cell--sorted-ascending",
                self.sort == Some(Sort::Ascending),
            )
            .toggle(
                "mlw-data-table__head-cell--sorted-descending",
                self.sort == Some(Sort::Descending),
            );
        let classes = cell_align_classes(classes, self.align);

        let mut cell = ComponentSpec::primitive("th")
            .classes(classes)
            .build(self.passthrough);
        // The indicator is present for any sortable cell, even unsorted.
        if self.sort.is_some() {
            cell = cell.child(sort_icon());
        }
        cell.children(self.children)
    }
}

/// A plain body cell (`td`).
#[derive(Debug, Clone, Default)]
pub struct DataTableCell {
    align: Option<CellAlign>,
    children: Vec<Element>,
    passthrough: Passthrough,
}

impl DataTableCell {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn align(mut self, align: CellAlign) -> Self {
        self.align = Some(align);
        self
    }

    pub fn child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Element>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn passthrough(mut self, passthrough: Passthrough) -> Self {
        self.passthrough = passthrough;
        self
    }

    pub fn build(self) -> Element {
        let classes = cell_align_classes(
            ClassList::new().base("mlw-data-table__cell"),
            self.align,
        );

        ComponentSpec::primitive("td")
            .classes(classes)
            .build(self.passthrough)
            .children(self.children)
    }
}
