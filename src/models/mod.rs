pub mod backup_log;
pub mod logbook_entry;
pub mod record;

pub use backup_log::{BackupLog, BackupLogPatch, NewBackupLog, Shift};
pub use logbook_entry::{LogbookEntry, LogbookPatch, NewLogbookEntry, Status};
pub use record::{FieldValue, Record};
