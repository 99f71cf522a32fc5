use serde::Deserialize;

use shared_models::ResourceKind;

/// Query string of the panel: which tab is open and an optional notice.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PanelQuery {
    pub tab: Option<String>,
    pub notice: Option<String>,
}

impl PanelQuery {
    /// Unknown or missing tabs open the patients tab.
    pub fn active_tab(&self) -> ResourceKind {
        self.tab
            .as_deref()
            .and_then(|tab| tab.parse().ok())
            .unwrap_or(ResourceKind::Patient)
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref().filter(|notice| !notice.trim().is_empty())
    }
}

/// The resource a delete control points at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteTarget {
    pub kind: ResourceKind,
    pub id: String,
}

impl DeleteTarget {
    pub fn new(kind: ResourceKind, id: impl Into<String>) -> Self {
        Self { kind, id: id.into() }
    }

    /// Panel route that confirms and performs the delete.
    pub fn action_path(&self) -> String {
        format!("{}/delete", self.kind.item_path(&self.id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_tab_falls_back_to_patients() {
        let query = PanelQuery { tab: Some("billing".into()), notice: None };
        assert_eq!(query.active_tab(), ResourceKind::Patient);
        let query = PanelQuery { tab: Some("appointments".into()), notice: Some("  ".into()) };
        assert_eq!(query.active_tab(), ResourceKind::Appointment);
        assert_eq!(query.notice(), None);
    }

    #[test]
    fn action_path_encodes_id() {
        assert_eq!(
            DeleteTarget::new(ResourceKind::Doctor, "d 1").action_path(),
            "/doctors/d%201/delete"
        );
    }
}
