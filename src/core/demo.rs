//! Landing-page sample logbook, kept entirely in memory.

use crate::core::filter::Criteria;
use crate::core::table::RowAction;
use crate::models::logbook_entry::{LogbookEntry, Status};
use chrono::NaiveDate;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

#[allow(clippy::too_many_arguments)]
fn entry(
    n: u32,
    start: NaiveDate,
    work: &str,
    department: &str,
    end: Option<NaiveDate>,
    pic: &str,
    status: Status,
    notes: &str,
) -> LogbookEntry {
    let created = format!("{}T08:00:00.000000Z", start);
    LogbookEntry {
        id: format!("demo-{n}"),
        tanggal_mulai: start,
        jenis_pekerjaan: work.to_string(),
        department: department.to_string(),
        tanggal_selesai: end,
        pic: pic.to_string(),
        status,
        keterangan: Some(notes.to_string()),
        nomor_pr: Some(format!("PR-2023-{n:03}")),
        created_at: created.clone(),
        updated_at: created,
    }
}

pub fn sample_entries() -> Vec<LogbookEntry> {
    vec![
        entry(
            1,
            date(2023, 5, 10),
            "Network Maintenance",
            "IT Infrastructure",
            Some(date(2023, 5, 12)),
            "John Doe",
            Status::Completed,
            "Replaced faulty router in server room",
        ),
        entry(
            2,
            date(2023, 5, 15),
            "Software Installation",
            "Finance",
            None,
            "Jane Smith",
            Status::InProgress,
            "Installing accounting software on 5 workstations",
        ),
        entry(
            3,
            date(2023, 5, 18),
            "Hardware Replacement",
            "HR",
            None,
            "Mike Johnson",
            Status::Pending,
            "Replace 3 monitors with new LED displays",
        ),
    ]
}

/// In-memory collection behind the landing view.
pub struct DemoBook {
    entries: Vec<LogbookEntry>,
}

impl Default for DemoBook {
    fn default() -> Self {
        Self {
            entries: sample_entries(),
        }
    }
}

impl DemoBook {
    pub fn entries(&self) -> &[LogbookEntry] {
        &self.entries
    }

    pub fn filtered(&self, criteria: &Criteria) -> Vec<LogbookEntry> {
        criteria.apply(&self.entries)
    }

    pub fn find(&self, id: &str) -> Option<&LogbookEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Apply a delete row action; other actions leave the book unchanged.
    /// Returns whether an entry was removed.
    pub fn apply(&mut self, action: &RowAction) -> bool {
        match action {
            RowAction::Delete(id) => {
                let before = self.entries.len();
                self.entries.retain(|e| &e.id != id);
                self.entries.len() != before
            }
            RowAction::View(_) | RowAction::Edit(_) => false,
        }
    }
}
