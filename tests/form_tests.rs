use itlogbook::core::form::{
    BackupLogForm, LogbookEditForm, LogbookForm, submit, validate_backup_log, validate_logbook,
    validate_logbook_edit,
};
use itlogbook::errors::AppError;
use itlogbook::models::{Shift, Status};
use std::cell::Cell;

fn valid_form() -> LogbookForm {
    LogbookForm {
        jenis_pekerjaan: "Network Maintenance".to_string(),
        department: Some("it".to_string()),
        tanggal_mulai: Some("2024-03-01".to_string()),
        tanggal_selesai: Some(String::new()),
        pic: "John Doe".to_string(),
        status: Some("pending".to_string()),
        keterangan: Some("  ".to_string()),
        nomor_pr: Some("PR-1".to_string()),
    }
}

#[test]
fn valid_logbook_form_produces_draft() {
    let draft = validate_logbook(&valid_form()).unwrap();
    assert_eq!(draft.status, Status::Pending);
    assert_eq!(draft.tanggal_selesai, None);
    assert_eq!(draft.keterangan, None);
    assert_eq!(draft.nomor_pr.as_deref(), Some("PR-1"));
}

#[test]
fn one_char_work_type_never_reaches_handler() {
    let form = LogbookForm {
        jenis_pekerjaan: "X".to_string(),
        ..valid_form()
    };
    let called = Cell::new(false);

    let result = submit(&form, validate_logbook, |_draft| {
        called.set(true);
        Ok(())
    });

    assert!(!called.get());
    match result {
        Err(AppError::Validation(errors)) => {
            assert_eq!(errors.len(), 1);
            assert_eq!(errors[0].field, "jenis_pekerjaan");
        }
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
fn every_invalid_field_is_reported() {
    let form = LogbookForm {
        jenis_pekerjaan: String::new(),
        department: Some("legal".to_string()),
        tanggal_mulai: None,
        tanggal_selesai: Some("31/12/2024".to_string()),
        pic: "J".to_string(),
        status: Some("done".to_string()),
        keterangan: None,
        nomor_pr: None,
    };
    let fields: Vec<&str> = validate_logbook(&form)
        .unwrap_err()
        .iter()
        .map(|e| e.field)
        .collect();

    for f in [
        "jenis_pekerjaan",
        "department",
        "tanggal_mulai",
        "tanggal_selesai",
        "pic",
        "status",
    ] {
        assert!(fields.contains(&f), "missing {f} in {fields:?}");
    }
}

#[test]
fn end_date_before_start_is_accepted() {
    let form = LogbookForm {
        tanggal_selesai: Some("2024-02-01".to_string()),
        ..valid_form()
    };
    assert!(validate_logbook(&form).is_ok());
}

#[test]
fn backup_form_requires_shift_and_pic() {
    let form = BackupLogForm {
        tanggal: Some("2024-06-03".to_string()),
        shift: None,
        pic: "A".to_string(),
        timestamp: "10:00:00".to_string(),
    };
    let errors = validate_backup_log(&form).unwrap_err();
    assert_eq!(errors.len(), 2);

    let ok = BackupLogForm {
        shift: Some("Siang".to_string()),
        pic: "Andi".to_string(),
        ..form
    };
    assert_eq!(validate_backup_log(&ok).unwrap().shift, Shift::Siang);
}

#[test]
fn edit_form_only_patches_present_fields() {
    let form = LogbookEditForm {
        status: Some("completed".to_string()),
        nomor_pr: Some(String::new()),
        ..LogbookEditForm::default()
    };
    let patch = validate_logbook_edit(&form).unwrap();

    assert_eq!(patch.status, Some(Status::Completed));
    assert_eq!(patch.nomor_pr, Some(None));
    assert_eq!(patch.jenis_pekerjaan, None);
    assert_eq!(patch.keterangan, None);

    assert!(validate_logbook_edit(&LogbookEditForm::default()).unwrap().is_empty());
}
