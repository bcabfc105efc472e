use millwork::data_table::{
    CellAlign, DataTable, DataTableBody, DataTableCell, DataTableContent, DataTableHead,
    DataTableRow,
};
use webdom::render_html;

#[test]
fn test_container_base_class() {
    let element = DataTable::new().build();
    assert_eq!(element.tag, "div");
    assert_eq!(element.classes.to_string(), "mlw-data-table");
}

#[test]
fn test_sticky_rows_and_columns() {
    let element = DataTable::new().sticky_rows(1).sticky_columns(1).build();
    assert_eq!(
        element.classes.to_string(),
        "mlw-data-table mlw-data-table--sticky-columns mlw-data-table--sticky-columns-1 \
         mlw-data-table--sticky-rows mlw-data-table--sticky-rows-1"
    );
}

#[test]
fn test_sticky_counts_above_one_clamp() {
    // Only single-row/column affixing is supported by the stylesheet.
    let element = DataTable::new().sticky_rows(5).build();
    let tokens = element.classes.tokens();
    assert!(tokens.contains(&"mlw-data-table--sticky-rows-1"));
    assert!(!tokens.iter().any(|t| t.ends_with("-5")));
}

#[test]
fn test_structure_tags() {
    assert_eq!(DataTableContent::new().build().tag, "table");
    assert_eq!(DataTableHead::new().build().tag, "thead");
    assert_eq!(DataTableBody::new().build().tag, "tbody");
    assert_eq!(DataTableRow::new().build().tag, "tr");
    assert_eq!(DataTableCell::new().build().tag, "td");
}

#[test]
fn test_row_state_modifiers() {
    let selected = DataTableRow::new().selected(true).build();
    assert!(selected
        .classes
        .tokens()
        .contains(&"mlw-data-table__row--selected"));

    let activated = DataTableRow::new().activated(true).build();
    assert!(activated
        .classes
        .tokens()
        .contains(&"mlw-data-table__row--activated"));

    let plain = DataTableRow::new().build();
    assert_eq!(plain.classes.to_string(), "mlw-data-table__row");
}

#[test]
fn test_cell_alignment_classes_are_exclusive() {
    let element = DataTableCell::new().align(CellAlign::Middle).build();
    let tokens = element.classes.tokens();
    assert!(tokens.contains(&"mlw-data-table__cell--align-middle"));
    assert!(!tokens.contains(&"mlw-data-table__cell--align-start"));
    assert!(!tokens.contains(&"mlw-data-table__cell--align-end"));
}

#[test]
fn test_nested_table_markup() {
    let table = DataTable::new()
        .child(
            DataTableContent::new()
                .child(
                    DataTableBody::new()
                        .child(
                            DataTableRow::new()
                                .child(DataTableCell::new().child(webdom::Element::text("v")).build())
                                .build(),
                        )
                        .build(),
                )
                .build(),
        )
        .build();

    let html = render_html(&table);
    assert!(html.starts_with("<div class=\"mlw-data-table\">"));
    assert!(html.contains("<table class=\"mlw-data-table__content\">"));
    assert!(html.contains("<tbody class=\"mlw-data-table__body\">"));
    assert!(html.contains("<td class=\"mlw-data-table__cell\">v</td>"));
}
