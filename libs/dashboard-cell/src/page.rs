use appointment_cell::render::{appointment_form, appointment_table};
use doctor_cell::render::{doctor_form, doctor_table};
use patient_cell::render::{patient_form, patient_table};
use shared_models::ResourceKind;
use shared_store::Snapshot;
use shared_utils::html::escape_html;

use crate::models::DeleteTarget;

const STYLE: &str = r#"body{font-family:system-ui,sans-serif;margin:0 auto;max-width:1100px;padding:1rem}
.tabs{display:flex;gap:.5rem;margin:1rem 0}.tab{padding:.5rem 1rem;border:1px solid #ccc;border-radius:6px;text-decoration:none;color:inherit}
.tab.active{background:#1f6feb;color:#fff;border-color:#1f6feb}.card{display:grid;gap:.5rem;max-width:420px;margin-bottom:1rem}
.table{width:100%;border-collapse:collapse}.table td,.table th{border-bottom:1px solid #eee;padding:.4rem;text-align:left}
.notice{padding:.75rem;border:1px solid #d29922;background:#fff8c5;border-radius:6px}.danger{color:#cf222e}
.actionsCol{width:1%;white-space:nowrap}"#;

fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!doctype html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{}</title>
<style>{}</style>
</head>
<body>
{}
</body>
</html>"#,
        escape_html(title),
        STYLE,
        body
    )
}

/// The whole admin panel, rendered from one store snapshot.
pub fn render_panel(snapshot: &Snapshot, active: ResourceKind, notice: Option<&str>) -> String {
    let notice_html = notice
        .map(|message| format!(r#"<div class="notice" role="alert">{}</div>"#, escape_html(message)))
        .unwrap_or_default();

    let tabs: String = ResourceKind::ALL
        .iter()
        .map(|kind| {
            format!(
                r#"<a class="tab{}" data-tab="{}" href="/?tab={}">{}</a>"#,
                if *kind == active { " active" } else { "" },
                kind.plural(),
                kind.plural(),
                kind.title()
            )
        })
        .collect();

    let panels: String = ResourceKind::ALL
        .iter()
        .map(|kind| {
            let content = match kind {
                ResourceKind::Patient => format!(
                    "{}\n{}",
                    patient_form(),
                    patient_table(&snapshot.patients)
                ),
                ResourceKind::Doctor => format!(
                    "{}\n{}",
                    doctor_form(),
                    doctor_table(&snapshot.doctors)
                ),
                ResourceKind::Appointment => format!(
                    "{}\n{}",
                    appointment_form(&snapshot.patients, &snapshot.doctors),
                    appointment_table(&snapshot.appointments, &snapshot.patients, &snapshot.doctors)
                ),
            };
            format!(
                r#"<section id="{}" class="panel"{}>
{}
</section>"#,
                kind.plural(),
                if *kind == active { "" } else { " hidden" },
                content
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    let body = format!(
        r#"<header>
<h1>Clinic Admin</h1>
<form method="post" action="/refresh?tab={}"><button type="submit">Refresh</button></form>
</header>
{}
<nav class="tabs">{}</nav>
{}"#,
        active.plural(),
        notice_html,
        tabs,
        panels
    );

    layout("Clinic Admin", &body)
}

/// Asks the operator to confirm a delete before anything is sent.
pub fn render_delete_confirmation(target: &DeleteTarget) -> String {
    let body = format!(
        r#"<h1>Delete this {}?</h1>
<form method="post" action="{}">
<button type="submit" class="danger">Delete</button>
<a href="/?tab={}">Cancel</a>
</form>"#,
        target.kind.label(),
        escape_html(&target.action_path()),
        target.kind.plural()
    );
    layout(&format!("Delete {}", target.kind.label()), &body)
}
