use axum::response::Redirect;

use shared_models::ResourceKind;

/// Location of the panel with `kind`'s tab open and an optional notice banner.
pub fn tab_location(kind: ResourceKind, notice: Option<&str>) -> String {
    match notice {
        Some(message) => format!(
            "/?tab={}&notice={}",
            kind.plural(),
            urlencoding::encode(message)
        ),
        None => format!("/?tab={}", kind.plural()),
    }
}

pub fn in_progress_notice(kind: ResourceKind) -> String {
    format!("A {} submission is already in progress.", kind.label())
}

pub fn redirect_to_tab(kind: ResourceKind, notice: Option<&str>) -> Redirect {
    Redirect::to(&tab_location(kind, notice))
}
