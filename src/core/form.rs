//! Form validation for both record kinds.
//!
//! Validation is pure: raw text input in, either a typed payload or the list
//! of failing fields out. Nothing here touches storage.

use crate::core::date_norm::parse_wire_date;
use crate::errors::{AppError, AppResult, FieldError};
use crate::models::backup_log::{NewBackupLog, Shift};
use crate::models::logbook_entry::{LogbookPatch, NewLogbookEntry, Status};
use chrono::NaiveDate;

pub const MIN_IDENTITY_LEN: usize = 2;

pub const DEPARTMENTS: &[&str] = &["it", "hr", "finance", "marketing", "operations"];

/// Raw input of the backup-log form.
#[derive(Debug, Clone, Default)]
pub struct BackupLogForm {
    pub tanggal: Option<String>,
    pub shift: Option<String>,
    pub pic: String,
    /// Time of day recorded with the entry, filled in at submit.
    pub timestamp: String,
}

/// Raw input of the logbook entry form.
#[derive(Debug, Clone, Default)]
pub struct LogbookForm {
    pub jenis_pekerjaan: String,
    pub department: Option<String>,
    pub tanggal_mulai: Option<String>,
    pub tanggal_selesai: Option<String>,
    pub pic: String,
    pub status: Option<String>,
    pub keterangan: Option<String>,
    pub nomor_pr: Option<String>,
}

/// Raw input of the edit form: absent fields are left unchanged.
/// An empty string clears an optional field.
#[derive(Debug, Clone, Default)]
pub struct LogbookEditForm {
    pub jenis_pekerjaan: Option<String>,
    pub department: Option<String>,
    pub tanggal_mulai: Option<String>,
    pub tanggal_selesai: Option<String>,
    pub pic: Option<String>,
    pub status: Option<String>,
    pub keterangan: Option<String>,
    pub nomor_pr: Option<String>,
}

fn non_blank(v: &Option<String>) -> Option<&str> {
    v.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

fn check_identity(
    errors: &mut Vec<FieldError>,
    field: &'static str,
    label: &str,
    value: &str,
) -> String {
    let v = value.trim();
    if v.chars().count() < MIN_IDENTITY_LEN {
        errors.push(FieldError::new(
            field,
            format!("{label} must be at least {MIN_IDENTITY_LEN} characters."),
        ));
    }
    v.to_string()
}

fn check_required_date(
    errors: &mut Vec<FieldError>,
    field: &'static str,
    label: &str,
    value: &Option<String>,
) -> Option<NaiveDate> {
    match non_blank(value) {
        None => {
            errors.push(FieldError::new(field, format!("{label} is required.")));
            None
        }
        Some(s) => check_date(errors, field, label, s),
    }
}

fn check_date(
    errors: &mut Vec<FieldError>,
    field: &'static str,
    label: &str,
    s: &str,
) -> Option<NaiveDate> {
    match parse_wire_date(s) {
        Ok(d) => Some(d),
        Err(_) => {
            errors.push(FieldError::new(
                field,
                format!("{label} must be a date in YYYY-MM-DD form."),
            ));
            None
        }
    }
}

fn check_department(errors: &mut Vec<FieldError>, value: Option<&str>) -> Option<String> {
    match value.map(|v| v.to_lowercase()) {
        Some(d) if DEPARTMENTS.contains(&d.as_str()) => Some(d),
        Some(d) => {
            errors.push(FieldError::new(
                "department",
                format!("Unknown department '{d}'. Use one of: {}.", DEPARTMENTS.join(", ")),
            ));
            None
        }
        None => {
            errors.push(FieldError::new("department", "Please select a department."));
            None
        }
    }
}

fn check_status(errors: &mut Vec<FieldError>, value: Option<&str>) -> Option<Status> {
    match value {
        Some(s) => match Status::from_input(s) {
            Some(st) => Some(st),
            None => {
                let allowed = Status::ALL.map(|s| s.to_db_str()).join(", ");
                errors.push(FieldError::new(
                    "status",
                    format!("Unknown status '{s}'. Use one of: {allowed}."),
                ));
                None
            }
        },
        None => {
            errors.push(FieldError::new("status", "Please select a status."));
            None
        }
    }
}

fn optional_text(v: &Option<String>) -> Option<String> {
    non_blank(v).map(str::to_string)
}

pub fn validate_backup_log(form: &BackupLogForm) -> Result<NewBackupLog, Vec<FieldError>> {
    let mut errors = Vec::new();

    let tanggal = check_required_date(&mut errors, "tanggal", "Tanggal", &form.tanggal);

    let shift = match non_blank(&form.shift) {
        None => {
            errors.push(FieldError::new("shift", "Please select a shift."));
            None
        }
        Some(s) => {
            let parsed = Shift::from_input(s);
            if parsed.is_none() {
                errors.push(FieldError::new(
                    "shift",
                    format!("Unknown shift '{s}'. Use one of: pagi, siang, sore."),
                ));
            }
            parsed
        }
    };

    let pic = check_identity(&mut errors, "pic", "PIC", &form.pic);

    match (tanggal, shift) {
        (Some(tanggal), Some(shift)) if errors.is_empty() => Ok(NewBackupLog {
            tanggal,
            shift,
            pic,
            timestamp: form.timestamp.trim().to_string(),
        }),
        _ => Err(errors),
    }
}

pub fn validate_logbook(form: &LogbookForm) -> Result<NewLogbookEntry, Vec<FieldError>> {
    let mut errors = Vec::new();

    let jenis_pekerjaan = check_identity(
        &mut errors,
        "jenis_pekerjaan",
        "Jenis Pekerjaan",
        &form.jenis_pekerjaan,
    );
    let department = check_department(&mut errors, non_blank(&form.department));
    let tanggal_mulai =
        check_required_date(&mut errors, "tanggal_mulai", "Tanggal Mulai", &form.tanggal_mulai);
    let tanggal_selesai = non_blank(&form.tanggal_selesai)
        .and_then(|s| check_date(&mut errors, "tanggal_selesai", "Tanggal Selesai", s));
    let pic = check_identity(&mut errors, "pic", "PIC", &form.pic);
    let status = check_status(&mut errors, non_blank(&form.status));

    match (department, tanggal_mulai, status) {
        (Some(department), Some(tanggal_mulai), Some(status)) if errors.is_empty() => {
            Ok(NewLogbookEntry {
                tanggal_mulai,
                jenis_pekerjaan,
                department,
                tanggal_selesai,
                pic,
                status,
                keterangan: optional_text(&form.keterangan),
                nomor_pr: optional_text(&form.nomor_pr),
            })
        }
        _ => Err(errors),
    }
}

/// Validate only the fields present in the edit form, with the same rules
/// as creation.
pub fn validate_logbook_edit(form: &LogbookEditForm) -> Result<LogbookPatch, Vec<FieldError>> {
    let mut errors = Vec::new();
    let mut patch = LogbookPatch::default();

    if let Some(v) = &form.jenis_pekerjaan {
        patch.jenis_pekerjaan = Some(check_identity(
            &mut errors,
            "jenis_pekerjaan",
            "Jenis Pekerjaan",
            v,
        ));
    }
    if let Some(v) = &form.department {
        patch.department = check_department(&mut errors, Some(v.trim()).filter(|s| !s.is_empty()));
    }
    if form.tanggal_mulai.is_some() {
        patch.tanggal_mulai =
            check_required_date(&mut errors, "tanggal_mulai", "Tanggal Mulai", &form.tanggal_mulai);
    }
    if let Some(v) = &form.tanggal_selesai {
        let v = v.trim();
        patch.tanggal_selesai = if v.is_empty() {
            Some(None)
        } else {
            check_date(&mut errors, "tanggal_selesai", "Tanggal Selesai", v).map(Some)
        };
    }
    if let Some(v) = &form.pic {
        patch.pic = Some(check_identity(&mut errors, "pic", "PIC", v));
    }
    if let Some(v) = &form.status {
        patch.status = check_status(&mut errors, Some(v.trim()).filter(|s| !s.is_empty()));
    }
    if form.keterangan.is_some() {
        patch.keterangan = Some(optional_text(&form.keterangan));
    }
    if form.nomor_pr.is_some() {
        patch.nomor_pr = Some(optional_text(&form.nomor_pr));
    }

    if errors.is_empty() {
        Ok(patch)
    } else {
        Err(errors)
    }
}

/// Validate `form` and hand the typed payload to `handler`.
///
/// On validation failure the handler is not called and the field errors are
/// returned as [`AppError::Validation`].
pub fn submit<F, P, T>(
    form: &F,
    validate: fn(&F) -> Result<P, Vec<FieldError>>,
    handler: impl FnOnce(P) -> AppResult<T>,
) -> AppResult<T> {
    let payload = validate(form).map_err(AppError::Validation)?;
    handler(payload)
}
