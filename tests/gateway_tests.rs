mod common;

use chrono::NaiveDate;
use common::memory_pool;
use itlogbook::core::filter::Criteria;
use itlogbook::core::gateway::{Gateway, Outcome};
use itlogbook::errors::GatewayError;
use itlogbook::models::{
    BackupLog, LogbookEntry, LogbookPatch, NewBackupLog, NewLogbookEntry, Shift, Status,
};

fn draft(work: &str) -> NewLogbookEntry {
    NewLogbookEntry {
        tanggal_mulai: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
        jenis_pekerjaan: work.to_string(),
        department: "it".to_string(),
        tanggal_selesai: None,
        pic: "Ana".to_string(),
        status: Status::Pending,
        keterangan: Some("rack B".to_string()),
        nomor_pr: None,
    }
}

#[test]
fn create_assigns_id_and_timestamps() {
    let pool = memory_pool();
    let gw = Gateway::<LogbookEntry>::new(&pool);

    let stored = gw.create(&draft("Cabling")).unwrap();
    assert!(!stored.id.is_empty());
    assert!(!stored.created_at.is_empty());
    assert_eq!(stored.created_at, stored.updated_at);
    assert_eq!(stored.jenis_pekerjaan, "Cabling");
    assert_eq!(stored.tanggal_mulai, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
}

#[test]
fn list_is_newest_first() {
    let pool = memory_pool();
    let gw = Gateway::<LogbookEntry>::new(&pool);

    let a = gw.create(&draft("First")).unwrap();
    let b = gw.create(&draft("Second")).unwrap();
    let c = gw.create(&draft("Third")).unwrap();

    let ids: Vec<String> = gw
        .list(&Criteria::new())
        .unwrap()
        .into_iter()
        .map(|e| e.id)
        .collect();
    assert_eq!(ids, vec![c.id, b.id, a.id]);
}

#[test]
fn status_only_update_keeps_other_fields() {
    let pool = memory_pool();
    let gw = Gateway::<LogbookEntry>::new(&pool);
    let created = gw.create(&draft("Patch server")).unwrap();

    let patch = LogbookPatch {
        status: Some(Status::Completed),
        ..LogbookPatch::default()
    };
    let updated = gw.update(&created.id, &patch).unwrap();

    assert_eq!(updated.status, Status::Completed);
    assert_eq!(updated.jenis_pekerjaan, created.jenis_pekerjaan);
    assert_eq!(updated.keterangan, created.keterangan);
    assert_eq!(updated.tanggal_mulai, created.tanggal_mulai);
    assert_eq!(updated.created_at, created.created_at);
    assert!(updated.updated_at >= created.updated_at);
}

#[test]
fn update_can_clear_optional_fields() {
    let pool = memory_pool();
    let gw = Gateway::<LogbookEntry>::new(&pool);
    let created = gw.create(&draft("Swap UPS")).unwrap();

    let patch = LogbookPatch {
        keterangan: Some(None),
        ..LogbookPatch::default()
    };
    let updated = gw.update(&created.id, &patch).unwrap();
    assert_eq!(updated.keterangan, None);
}

#[test]
fn update_unknown_id_is_not_found() {
    let pool = memory_pool();
    let gw = Gateway::<LogbookEntry>::new(&pool);

    let patch = LogbookPatch {
        pic: Some("Budi".to_string()),
        ..LogbookPatch::default()
    };
    let err = gw.update("no-such-id", &patch).unwrap_err();
    assert_eq!(err, GatewayError::NotFound("no-such-id".to_string()));

    let outcome: Outcome<LogbookEntry> = gw.update("no-such-id", &patch).into();
    assert!(!outcome.success);
    assert!(outcome.not_found);
    assert!(outcome.data.is_none());
}

#[test]
fn delete_removes_and_missing_id_is_ok() {
    let pool = memory_pool();
    let gw = Gateway::<LogbookEntry>::new(&pool);
    let keep = gw.create(&draft("Keep")).unwrap();
    let gone = gw.create(&draft("Gone")).unwrap();

    gw.delete(&gone.id).unwrap();
    let left: Vec<String> = gw
        .list(&Criteria::new())
        .unwrap()
        .into_iter()
        .map(|e| e.id)
        .collect();
    assert_eq!(left, vec![keep.id]);

    assert!(gw.delete("never-existed").is_ok());
    assert!(matches!(gw.get(&gone.id), Err(GatewayError::NotFound(_))));
}

#[test]
fn unknown_filter_column_is_persistence_error() {
    let pool = memory_pool();
    let gw = Gateway::<LogbookEntry>::new(&pool);

    let outcome: Outcome<Vec<LogbookEntry>> =
        gw.list(&Criteria::new().equals("colour", "red")).into();
    assert!(!outcome.success);
    assert!(!outcome.not_found);
    assert!(outcome.error.unwrap().contains("colour"));
}

#[test]
fn backup_logs_filter_by_shift() {
    let pool = memory_pool();
    let gw = Gateway::<BackupLog>::new(&pool);
    let day = NaiveDate::from_ymd_opt(2024, 6, 3).unwrap();

    for (shift, pic) in [(Shift::Pagi, "Rina"), (Shift::Sore, "Dedi")] {
        gw.create(&NewBackupLog {
            tanggal: day,
            shift,
            pic: pic.to_string(),
            timestamp: "08:15:00".to_string(),
        })
        .unwrap();
    }

    let sore = gw.list(&Criteria::new().equals("shift", "sore")).unwrap();
    assert_eq!(sore.len(), 1);
    assert_eq!(sore[0].pic, "Dedi");
}

#[test]
fn writes_are_audited() {
    let pool = memory_pool();
    let gw = Gateway::<LogbookEntry>::new(&pool);
    let e = gw.create(&draft("Audit me")).unwrap();
    gw.delete(&e.id).unwrap();

    let ops: Vec<String> = pool
        .conn
        .prepare("SELECT operation FROM log WHERE target = ?1 ORDER BY id")
        .unwrap()
        .query_map([&e.id], |r| r.get(0))
        .unwrap()
        .map(|r| r.unwrap())
        .collect();
    assert_eq!(ops, vec!["add", "del"]);
}

#[test]
fn backup_date_is_stored_as_given() {
    let pool = memory_pool();
    let gw = Gateway::<BackupLog>::new(&pool);

    let stored = gw
        .create(&NewBackupLog {
            tanggal: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            shift: Shift::Pagi,
            pic: "Alice".to_string(),
            timestamp: "09:00:00".to_string(),
        })
        .unwrap();

    let raw: String = pool
        .conn
        .query_row(
            "SELECT tanggal FROM backup_logs WHERE id = ?1",
            [&stored.id],
            |r| r.get(0),
        )
        .unwrap();
    assert_eq!(raw, "2024-03-01");
    assert_eq!(stored.shift, Shift::Pagi);
}
