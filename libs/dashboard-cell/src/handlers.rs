use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::HeaderMap,
    response::{Html, Redirect},
};
use tracing::{error, warn};

use shared_models::ResourceKind;
use shared_store::AdminState;
use shared_utils::notice::redirect_to_tab;

use crate::models::{DeleteTarget, PanelQuery};
use crate::origin::{is_same_origin, CROSS_SITE_NOTICE};
use crate::page::{render_delete_confirmation, render_panel};
use crate::services::{DeleteService, RefreshService};

/// Reloads every collection, then renders the panel.
///
/// A failed load keeps whatever the store last held and surfaces the error
/// as a notice.
#[axum::debug_handler]
pub async fn index(
    State(state): State<Arc<AdminState>>,
    Query(query): Query<PanelQuery>,
) -> Html<String> {
    let mut load_notice = None;

    if let Err(err) = RefreshService::new(&state).reload_all().await {
        error!("Page load failed: {}", err);
        load_notice = Some(err.notice());
    }

    let snapshot = state.store.snapshot().await;
    let notice = query.notice().or(load_notice.as_deref());

    Html(render_panel(&snapshot, query.active_tab(), notice))
}

#[axum::debug_handler]
pub async fn refresh(
    State(state): State<Arc<AdminState>>,
    Query(query): Query<PanelQuery>,
) -> Redirect {
    let tab = query.active_tab();
    match RefreshService::new(&state).reload_all().await {
        Ok(()) => redirect_to_tab(tab, None),
        Err(err) => {
            error!("Refresh failed: {}", err);
            redirect_to_tab(tab, Some(&err.notice()))
        }
    }
}

pub async fn confirm_delete_patient(Path(id): Path<String>) -> Html<String> {
    confirm(DeleteTarget::new(ResourceKind::Patient, id))
}

pub async fn confirm_delete_doctor(Path(id): Path<String>) -> Html<String> {
    confirm(DeleteTarget::new(ResourceKind::Doctor, id))
}

pub async fn confirm_delete_appointment(Path(id): Path<String>) -> Html<String> {
    confirm(DeleteTarget::new(ResourceKind::Appointment, id))
}

pub async fn delete_patient(
    State(state): State<Arc<AdminState>>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Redirect {
    perform_delete(&state, &headers, DeleteTarget::new(ResourceKind::Patient, id)).await
}

pub async fn delete_doctor(
    State(state): State<Arc<AdminState>>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Redirect {
    perform_delete(&state, &headers, DeleteTarget::new(ResourceKind::Doctor, id)).await
}

pub async fn delete_appointment(
    State(state): State<Arc<AdminState>>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Redirect {
    perform_delete(&state, &headers, DeleteTarget::new(ResourceKind::Appointment, id)).await
}

fn confirm(target: DeleteTarget) -> Html<String> {
    Html(render_delete_confirmation(&target))
}

async fn perform_delete(state: &AdminState, headers: &HeaderMap, target: DeleteTarget) -> Redirect {
    if !is_same_origin(headers) {
        warn!("Refused cross-site delete of {} {}", target.kind, target.id);
        return redirect_to_tab(target.kind, Some(CROSS_SITE_NOTICE));
    }

    match DeleteService::new(state).delete(&target).await {
        Ok(()) => redirect_to_tab(target.kind, None),
        Err(err) => {
            warn!("Delete of {} {} failed: {}", target.kind, target.id, err);
            redirect_to_tab(target.kind, Some(&err.notice()))
        }
    }
}
