use millwork::data_table::{CellAlign, CellProps, RowProps, SimpleDataTable, Sort};
use proptest::prelude::*;
use webdom::{render_html, Content, Element};

fn find_all<'a>(element: &'a Element, tag: &str, out: &mut Vec<&'a Element>) {
    if element.tag == tag {
        out.push(element);
    }
    if let Content::Children(children) = &element.content {
        for child in children {
            find_all(child, tag, out);
        }
    }
}

fn tags<'a>(element: &'a Element, tag: &str) -> Vec<&'a Element> {
    let mut out = Vec::new();
    find_all(element, tag, &mut out);
    out
}

#[test]
fn test_two_by_two_without_headers() {
    let table = SimpleDataTable::new(vec![vec![1, 2], vec![3, 4]]).build();

    assert!(tags(&table, "thead").is_empty());
    assert_eq!(tags(&table, "tbody").len(), 1);

    let rows = tags(&table, "tr");
    assert_eq!(rows.len(), 2);
    for row in &rows {
        assert_eq!(tags(row, "td").len(), 2);
    }

    // Cell order matches the input matrix.
    let html = render_html(&table);
    let positions: Vec<usize> = ["1", "2", "3", "4"]
        .iter()
        .map(|needle| html.find(needle).expect("cell rendered"))
        .collect();
    assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn test_headers_prepend_one_head_row() {
    let table = SimpleDataTable::new(vec![vec![1, 2], vec![3, 4]])
        .headers(vec![vec![0, 0]])
        .build();

    let heads = tags(&table, "thead");
    assert_eq!(heads.len(), 1);
    assert_eq!(tags(heads[0], "tr").len(), 1);
    assert_eq!(tags(heads[0], "th").len(), 2);

    let bodies = tags(&table, "tbody");
    assert_eq!(bodies.len(), 1);
    assert_eq!(tags(bodies[0], "tr").len(), 2);

    // The header section precedes the body section.
    let html = render_html(&table);
    let head_at = html.find("<thead").expect("head rendered");
    let body_at = html.find("<tbody").expect("body rendered");
    assert!(head_at < body_at);
}

#[test]
fn test_jagged_matrix_preserves_cell_counts() {
    let table = SimpleDataTable::new(vec![vec![1], vec![2, 3, 4], vec![]]).build();

    let body = tags(&table, "tbody");
    let rows = tags(body[0], "tr");
    assert_eq!(rows.len(), 3);
    assert_eq!(tags(rows[0], "td").len(), 1);
    assert_eq!(tags(rows[1], "td").len(), 3);
    assert_eq!(tags(rows[2], "td").len(), 0);
}

#[test]
fn test_empty_matrix() {
    let table = SimpleDataTable::<u32>::new(vec![]).build();
    assert_eq!(tags(&table, "tbody").len(), 1);
    assert!(tags(&table, "tr").is_empty());
}

#[test]
fn test_row_props_are_applied_without_changing_counts() {
    let table = SimpleDataTable::new(vec![vec![1, 2], vec![3, 4]])
        .row_props(|_, index, _| RowProps::new().selected(index == 1))
        .build();

    let rows = tags(&table, "tr");
    assert_eq!(rows.len(), 2);
    assert!(!rows[0]
        .classes
        .tokens()
        .contains(&"mlw-data-table__row--selected"));
    assert!(rows[1]
        .classes
        .tokens()
        .contains(&"mlw-data-table__row--selected"));
}

#[test]
fn test_cell_props_receive_head_flag() {
    let table = SimpleDataTable::new(vec![vec![10]])
        .headers(vec![vec![99]])
        .cell_props(|_, _, is_head| {
            if is_head {
                CellProps::new().sort(Sort::Ascending)
            } else {
                CellProps::new().align(CellAlign::End)
            }
        })
        .build();

    let th = tags(&table, "th");
    assert_eq!(th.len(), 1);
    assert!(th[0]
        .classes
        .tokens()
        .contains(&"mlw-data-table__head-cell--sorted-ascending"));

    let td = tags(&table, "td");
    assert_eq!(td.len(), 1);
    assert!(td[0]
        .classes
        .tokens()
        .contains(&"mlw-data-table__cell--align-end"));
}

#[test]
fn test_header_cells_render_sort_indicator_only_when_wired() {
    let plain = SimpleDataTable::new(vec![vec![1]])
        .headers(vec![vec![0]])
        .build();
    assert!(!render_html(&plain).contains("mlw-data-table__sort-icon"));

    let wired = SimpleDataTable::new(vec![vec![1]])
        .headers(vec![vec![0]])
        .cell_props(|_, _, is_head| {
            if is_head {
                CellProps::new().sort(Sort::Unsorted)
            } else {
                CellProps::new()
            }
        })
        .build();
    assert!(render_html(&wired).contains("mlw-data-table__sort-icon"));
}

#[test]
fn test_sticky_props_reach_the_container() {
    let table = SimpleDataTable::new(vec![vec![1]]).sticky_rows(1).build();
    assert!(table.classes.tokens().contains(&"mlw-data-table--sticky-rows-1"));
}

proptest! {
    #[test]
    fn prop_row_and_cell_counts_match_input(
        data in prop::collection::vec(prop::collection::vec(0u8..100, 0..6), 0..6),
        headers in prop::option::of(prop::collection::vec(prop::collection::vec(0u8..100, 0..6), 0..3)),
    ) {
        let headers_present = headers.is_some();
        let expected_body_rows = data.len();
        let expected_body_cells: Vec<usize> = data.iter().map(Vec::len).collect();
        let expected_head_rows = headers.as_ref().map_or(0, Vec::len);
        let expected_head_cells: Vec<usize> =
            headers.iter().flatten().map(Vec::len).collect();

        let mut table = SimpleDataTable::new(data);
        if let Some(headers) = headers {
            table = table.headers(headers);
        }
        let built = table.build();

        let bodies = tags(&built, "tbody");
        prop_assert_eq!(bodies.len(), 1);
        let body_rows = tags(bodies[0], "tr");
        prop_assert_eq!(body_rows.len(), expected_body_rows);
        for (row, expected) in body_rows.iter().zip(&expected_body_cells) {
            prop_assert_eq!(tags(row, "td").len(), *expected);
        }

        let heads = tags(&built, "thead");
        prop_assert_eq!(heads.len(), usize::from(headers_present));
        let head_rows: Vec<_> = heads.first().map(|h| tags(h, "tr")).unwrap_or_default();
        prop_assert_eq!(head_rows.len(), expected_head_rows);
        for (row, expected) in head_rows.iter().zip(&expected_head_cells) {
            prop_assert_eq!(tags(row, "th").len(), *expected);
        }
    }
}
