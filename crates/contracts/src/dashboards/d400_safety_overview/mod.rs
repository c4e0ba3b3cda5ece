//! Safety overview dashboard: presentation mode, summary counters,
//! quick actions and the recent activity feed.

use crate::domain::a001_site::SiteStore;
use crate::shared::config::DashboardConfig;
use chrono::NaiveDate;

/// What the main area shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DashboardMode {
    #[default]
    Overview,
    Chat,
}

impl DashboardMode {
    pub fn toggle(self) -> Self {
        match self {
            DashboardMode::Overview => DashboardMode::Chat,
            DashboardMode::Chat => DashboardMode::Overview,
        }
    }

    /// Caption of the header button that switches away from this mode
    pub fn switch_label(&self) -> &'static str {
        match self {
            DashboardMode::Overview => "Talk to AI Assistant",
            DashboardMode::Chat => "Back to Overview",
        }
    }
}

/// The four summary tiles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SummaryCounters {
    pub total_incidents: u32,
    pub pending_audits: u32,
    pub active_crews: u32,
    pub equipment: u32,
}

impl SummaryCounters {
    /// Incidents and pending audits come from the store; crews and equipment
    /// have no store and are read from config.
    pub fn derive(store: &SiteStore, config: &DashboardConfig, today: NaiveDate) -> Self {
        let pending_audits = store
            .sites()
            .iter()
            .filter(|s| (today - s.last_audit).num_days() > config.audit_interval_days)
            .count() as u32;

        Self {
            total_incidents: store.total_incidents(),
            pending_audits,
            active_crews: config.active_crews,
            equipment: config.equipment_units,
        }
    }
}

/// Shortcut into the assistant with a prepared question
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuickAction {
    ReportIncident,
    StartAudit,
    CompliancePlanning,
    ViewAnalytics,
}

impl QuickAction {
    pub const ALL: [QuickAction; 4] = [
        QuickAction::ReportIncident,
        QuickAction::StartAudit,
        QuickAction::CompliancePlanning,
        QuickAction::ViewAnalytics,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            QuickAction::ReportIncident => "Report Incident",
            QuickAction::StartAudit => "Start Audit",
            QuickAction::CompliancePlanning => "Compliance Planning",
            QuickAction::ViewAnalytics => "View Analytics",
        }
    }

    pub fn prompt(&self) -> &'static str {
        match self {
            QuickAction::ReportIncident => "I need to report an incident",
            QuickAction::StartAudit => "I want to start a safety audit",
            QuickAction::CompliancePlanning => "Help me with compliance planning",
            QuickAction::ViewAnalytics => "Analyze my safety data",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            QuickAction::ReportIncident => "alert",
            QuickAction::StartAudit => "clipboard",
            QuickAction::CompliancePlanning => "file",
            QuickAction::ViewAnalytics => "trending",
        }
    }
}

/// Chat prompt for the "Start Audit" action on a single site card
pub fn site_audit_prompt(site_name: &str) -> String {
    format!("I want to start a safety audit for {}", site_name.trim())
}

/// Suggestion chips under the chat panel; each fills the input
pub const CHAT_SUGGESTIONS: [&str; 4] = [
    "Report an incident",
    "Schedule audit",
    "Check compliance status",
    "What are Iowa ag safety requirements?",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityKind {
    Incident,
    Audit,
    Compliance,
}

impl ActivityKind {
    pub fn icon(&self) -> &'static str {
        match self {
            ActivityKind::Incident => "alert",
            ActivityKind::Audit => "clipboard",
            ActivityKind::Compliance => "file",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityEntry {
    pub kind: ActivityKind,
    pub title: &'static str,
    pub detail: &'static str,
    pub when: &'static str,
}

pub fn recent_activity() -> Vec<ActivityEntry> {
    vec![
        ActivityEntry {
            kind: ActivityKind::Incident,
            title: "Incident Reported",
            detail: "South Livestock Facility - Minor equipment malfunction",
            when: "2 hours ago",
        },
        ActivityEntry {
            kind: ActivityKind::Audit,
            title: "Audit Completed",
            detail: "North Field Operations - Passed with minor notes",
            when: "1 day ago",
        },
        ActivityEntry {
            kind: ActivityKind::Compliance,
            title: "Compliance Plan Updated",
            detail: "Q4 2025 safety protocols reviewed",
            when: "3 days ago",
        },
    ]
}
