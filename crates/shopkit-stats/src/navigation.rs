//! Stats section navigation model.

use serde::Serialize;

use crate::params::StatsType;

/// One tab in the stats navigation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub label: &'static str,
    pub path: String,
    pub selected: bool,
}

/// One option in the site/store segmented control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ControlOption {
    pub value: &'static str,
    pub label: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

/// Navigation shown above a stats report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatsNavigation {
    /// Label of the current report type.
    pub selected_text: &'static str,
    /// Report tabs.
    pub tabs: Vec<NavItem>,
    /// Site/store switcher.
    pub control: Vec<ControlOption>,
    /// Value of the initially selected control option.
    pub initial_control: &'static str,
}

impl StatsNavigation {
    /// Build the navigation for `stats_type` on the site with `slug`.
    pub fn new(stats_type: StatsType, slug: &str) -> Self {
        let tab_path = format!("/store/stats/{}", slug);

        let tabs = StatsType::ROUTABLE
            .iter()
            .map(|ty| NavItem {
                label: ty.label(),
                path: tab_path.clone(),
                selected: *ty == stats_type,
            })
            .collect();

        let control = vec![
            ControlOption {
                value: "site",
                label: "Site",
                path: Some(format!("/stats/day/{}", slug)),
            },
            ControlOption {
                value: "store",
                label: "Store",
                path: None,
            },
        ];

        Self {
            selected_text: stats_type.label(),
            tabs,
            control,
            initial_control: "store",
        }
    }

    /// The selected tab, if the current type has one.
    pub fn selected_tab(&self) -> Option<&NavItem> {
        self.tabs.iter().find(|tab| tab.selected)
    }
}
