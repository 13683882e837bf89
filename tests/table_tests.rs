use itlogbook::core::demo::{DemoBook, sample_entries};
use itlogbook::core::table::{ActionKind, CellOptions, RowAction, SortDirection, TablePresenter};
use itlogbook::errors::AppError;
use itlogbook::models::LogbookEntry;

fn plain() -> CellOptions {
    CellOptions {
        color: false,
        ..CellOptions::default()
    }
}

fn works(rows: Vec<&LogbookEntry>) -> Vec<&str> {
    rows.into_iter().map(|e| e.jenis_pekerjaan.as_str()).collect()
}

#[test]
fn click_toggles_then_resets_on_new_column() {
    let mut p = TablePresenter::<LogbookEntry>::new(plain());
    assert_eq!(p.sort_state().column, None);

    p.click("pic").unwrap();
    assert_eq!(p.sort_state().direction, SortDirection::Asc);
    p.click("pic").unwrap();
    assert_eq!(p.sort_state().direction, SortDirection::Desc);

    p.click("tanggal_mulai").unwrap();
    assert_eq!(p.sort_state().column.as_deref(), Some("tanggal_mulai"));
    assert_eq!(p.sort_state().direction, SortDirection::Asc);
}

#[test]
fn toggling_reverses_the_order() {
    let entries = sample_entries();
    let mut p = TablePresenter::<LogbookEntry>::new(plain());

    p.click("tanggal_mulai").unwrap();
    let asc = works(p.sorted(&entries));
    assert_eq!(
        asc,
        vec!["Network Maintenance", "Software Installation", "Hardware Replacement"]
    );

    p.click("tanggal_mulai").unwrap();
    let mut desc = works(p.sorted(&entries));
    desc.reverse();
    assert_eq!(desc, asc);
}

#[test]
fn missing_values_sort_first() {
    let entries = sample_entries();
    let mut p = TablePresenter::<LogbookEntry>::new(plain());
    p.click("tanggal_selesai").unwrap();

    let sorted = p.sorted(&entries);
    assert_eq!(sorted.last().unwrap().id, "demo-1");
}

#[test]
fn unknown_column_is_rejected() {
    let mut p = TablePresenter::<LogbookEntry>::new(plain());
    assert!(matches!(p.click("colour"), Err(AppError::InvalidColumn(_))));
    assert_eq!(p.sort_state().column, None);
}

#[test]
fn render_shows_rows_and_total() {
    let p = TablePresenter::<LogbookEntry>::new(plain());
    let out = p.render(&sample_entries());

    assert!(out.contains("Jenis Pekerjaan"));
    assert!(out.contains("10/05/2023"));
    assert!(out.contains("In Progress"));
    assert!(out.contains("Total Entries: 3"));
    assert!(!out.contains('\x1b'));
}

#[test]
fn render_empty_table() {
    let p = TablePresenter::<LogbookEntry>::new(plain());
    let out = p.render(&[]);
    assert!(out.contains("No entries found"));
    assert!(out.contains("Total Entries: 0"));
}

#[test]
fn row_actions_follow_the_sorted_view() {
    let entries = sample_entries();
    let mut p = TablePresenter::<LogbookEntry>::new(plain());
    p.click("pic").unwrap();

    // Jane Smith, John Doe, Mike Johnson
    assert_eq!(
        p.row_action(&entries, 1, ActionKind::Edit),
        Some(RowAction::Edit("demo-2".to_string()))
    );
    assert_eq!(p.row_action(&entries, 0, ActionKind::View), None);
    assert_eq!(p.row_action(&entries, 4, ActionKind::View), None);
}

#[test]
fn demo_book_delete_is_in_memory_only() {
    let mut book = DemoBook::default();
    assert!(book.apply(&RowAction::Delete("demo-2".to_string())));
    assert!(!book.apply(&RowAction::Delete("demo-2".to_string())));
    assert!(!book.apply(&RowAction::View("demo-1".to_string())));
    assert_eq!(book.entries().len(), 2);

    assert_eq!(DemoBook::default().entries().len(), 3);
}
