//! Single-record detail view ("view" row action).

use crate::core::date_norm::{to_short_date, to_short_date_or_dash};
use crate::core::table::CellOptions;
use crate::models::backup_log::BackupLog;
use crate::models::logbook_entry::LogbookEntry;
use crate::utils::colors::{color_for_status, paint};
use crate::utils::formatting::{bold, dash_if_empty, wrap_block};

const LABEL_WIDTH: usize = 16;

fn line(out: &mut String, label: &str, value: &str) {
    out.push_str(&format!("  {:<LABEL_WIDTH$}{}\n", label, value));
}

pub fn logbook_details(e: &LogbookEntry, opts: &CellOptions) -> String {
    let mut out = String::new();

    let title = if opts.color {
        bold(&e.jenis_pekerjaan)
    } else {
        e.jenis_pekerjaan.clone()
    };
    let status = if opts.color {
        paint(e.status.label(), color_for_status(e.status))
    } else {
        e.status.label().to_string()
    };

    out.push_str(&format!("{title}  [{status}]\n\n"));
    line(&mut out, "Department", &e.department);
    line(&mut out, "PIC", &e.pic);
    line(
        &mut out,
        "Tanggal Mulai",
        &to_short_date(e.tanggal_mulai, &opts.date_format),
    );
    line(
        &mut out,
        "Tanggal Selesai",
        &to_short_date_or_dash(e.tanggal_selesai, &opts.date_format),
    );
    line(&mut out, "No. PR", &dash_if_empty(e.nomor_pr.as_deref()));
    line(&mut out, "ID", &format!("#{}", e.id));
    line(&mut out, "Created", &e.created_at);
    line(&mut out, "Updated", &e.updated_at);

    out.push_str("\n  Keterangan\n");
    let indent = " ".repeat(4);
    let notes = dash_if_empty(e.keterangan.as_deref());
    out.push_str(&indent);
    out.push_str(&wrap_block(&notes, 72, &indent));
    out.push('\n');

    out
}

pub fn backup_details(b: &BackupLog, opts: &CellOptions) -> String {
    let mut out = String::new();

    out.push_str(&format!("Backup {}\n\n", b.shift.label()));
    line(&mut out, "Tanggal", &to_short_date(b.tanggal, &opts.date_format));
    line(&mut out, "Waktu", &dash_if_empty(Some(&b.timestamp)));
    line(&mut out, "PIC", &b.pic);
    line(&mut out, "ID", &format!("#{}", b.id));
    line(&mut out, "Created", &b.created_at);

    out
}
