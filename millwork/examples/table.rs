//! Data Table Example
//!
//! Renders a matrix table and demonstrates the controlled sort cycle on a
//! sortable header column.

use std::cell::Cell;
use std::fs::File;
use std::rc::Rc;

use millwork::prelude::*;
use simplelog::{Config, LevelFilter, WriteLogger};
use webdom::render_html_pretty;

fn build_table(sort: Sort) -> Element {
    let data = vec![
        vec!["Casablanca", "1942", "102"],
        vec!["Alien", "1979", "117"],
        vec!["Arrival", "2016", "116"],
    ];
    let headers = vec![vec!["Film", "Year", "Runtime"]];

    SimpleDataTable::new(data)
        .headers(headers)
        .sticky_rows(1)
        .cell_props(move |_, index, is_head| {
            // Only the Year column is sortable.
            if is_head && index == 1 {
                CellProps::new().sort(sort)
            } else if index == 2 {
                CellProps::new().align(CellAlign::End)
            } else {
                CellProps::new()
            }
        })
        .build()
}

fn main() {
    let log_file = File::create("table.log").expect("failed to create log file");
    let _ = WriteLogger::init(LevelFilter::Debug, Config::default(), log_file);

    // The app owns the sort state; the header cell reports the next state
    // on each click and the table is rebuilt from the new value.
    let sort = Rc::new(Cell::new(Sort::Unsorted));
    for _ in 0..4 {
        let sink = Rc::clone(&sort);
        let year_header = DataTableHeadCell::new()
            .sort(sort.get())
            .on_sort_change(move |next| sink.set(next))
            .child(Element::text("Year"));
        year_header.click(&ClickEvent::default());
        println!("sort is now {:?}", sort.get());
    }

    println!("{}", render_html_pretty(&build_table(sort.get())));
}
