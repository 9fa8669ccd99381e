use std::collections::HashMap;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InstanceStatus {
    Active,
    Locked,
    Offline,

    // The status set is owned by the backend; tolerate values this client
    // does not know yet.
    #[serde(other)]
    Unknown,
}

impl InstanceStatus {
    pub fn label(self) -> &'static str {
        match self {
            InstanceStatus::Active => "active",
            InstanceStatus::Locked => "locked",
            InstanceStatus::Offline => "offline",
            InstanceStatus::Unknown => "unknown",
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Instance {
    pub id: String,
    pub name: String,
    pub base_url: String,
    pub status: InstanceStatus,

    #[serde(default)]
    pub version: String,

    #[serde(default)]
    pub latest_version: String,

    #[serde(default)]
    pub last_seen_at: Option<String>,

    #[serde(default)]
    pub created_at: String,
}

/// Outcome of comparing an instance's reported version against the latest
/// known release. `None` means no badge at all (either side unknown).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VersionBadge {
    UpToDate,
    UpdateAvailable(String),
}

impl Instance {
    pub fn version_badge(&self) -> Option<VersionBadge> {
        fn known(v: &str) -> bool {
            !v.is_empty() && v != "unknown"
        }

        if !known(&self.version) || !known(&self.latest_version) {
            return None;
        }
        if self.version == self.latest_version {
            Some(VersionBadge::UpToDate)
        } else {
            Some(VersionBadge::UpdateAvailable(self.latest_version.clone()))
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workflow {
    pub id: String,
    pub name: String,
    pub active: bool,

    #[serde(default)]
    pub last_run_at: Option<String>,

    #[serde(default)]
    pub last_error_at: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Error,
    Critical,

    #[serde(other)]
    Unknown,
}

impl Severity {
    pub fn label(self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Error => "error",
            Severity::Critical => "critical",
            Severity::Unknown => "unknown",
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventRecord {
    pub id: String,
    pub severity: Severity,
    pub occurred_at: String,

    #[serde(default)]
    pub payload: EventPayload,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventPayload {
    #[serde(default)]
    pub workflow_id: Option<String>,

    #[serde(default)]
    pub workflow_name: Option<String>,

    #[serde(default)]
    pub error_message: Option<String>,

    #[serde(default)]
    pub node: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorPattern {
    pub error_message: String,
    pub count: u64,
    pub last_occurred: String,

    #[serde(default)]
    pub affected_workflows: Vec<String>,
}

/// Aggregation window for the error-patterns query. The wire codes are part
/// of the backend contract.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PatternRange {
    OneDay,
    #[default]
    TwoWeeks,
    OneMonth,
    SixMonths,
    TwelveMonths,
}

impl PatternRange {
    pub const ALL: [PatternRange; 5] = [
        PatternRange::OneDay,
        PatternRange::TwoWeeks,
        PatternRange::OneMonth,
        PatternRange::SixMonths,
        PatternRange::TwelveMonths,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PatternRange::OneDay => "1d",
            PatternRange::TwoWeeks => "14d",
            PatternRange::OneMonth => "1m",
            PatternRange::SixMonths => "6m",
            PatternRange::TwelveMonths => "12m",
        }
    }

    pub fn parse(s: &str) -> Option<PatternRange> {
        Self::ALL.into_iter().find(|r| r.as_str() == s)
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LicenseInfo {
    pub edition: String,

    #[serde(default)]
    pub features: HashMap<String, bool>,

    #[serde(default = "default_max_instances")]
    pub max_instances: i64,
}

fn default_max_instances() -> i64 {
    crate::license::DEFAULT_MAX_INSTANCES
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct VersionInfo {
    pub version: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inst(version: &str, latest: &str) -> Instance {
        Instance {
            id: "i1".to_string(),
            name: "prod".to_string(),
            base_url: "https://flows.example.com".to_string(),
            status: InstanceStatus::Active,
            version: version.to_string(),
            latest_version: latest.to_string(),
            last_seen_at: None,
            created_at: "2026-01-01T00:00:00Z".to_string(),
        }
    }

    #[test]
    fn version_badge_up_to_date_when_versions_match() {
        assert_eq!(
            inst("1.64.0", "1.64.0").version_badge(),
            Some(VersionBadge::UpToDate)
        );
    }

    #[test]
    fn version_badge_update_available_carries_latest() {
        assert_eq!(
            inst("1.63.2", "1.64.0").version_badge(),
            Some(VersionBadge::UpdateAvailable("1.64.0".to_string()))
        );
    }

    #[test]
    fn version_badge_suppressed_on_unknown_or_empty() {
        assert_eq!(inst("unknown", "1.64.0").version_badge(), None);
        assert_eq!(inst("", "1.64.0").version_badge(), None);
        assert_eq!(inst("1.64.0", "").version_badge(), None);
        assert_eq!(inst("1.64.0", "unknown").version_badge(), None);
    }

    #[test]
    fn unknown_status_values_deserialize_to_unknown() {
        let v: InstanceStatus = serde_json::from_str("\"degraded\"").unwrap();
        assert_eq!(v, InstanceStatus::Unknown);
    }

    #[test]
    fn pattern_range_wire_codes_round_trip() {
        for r in PatternRange::ALL {
            assert_eq!(PatternRange::parse(r.as_str()), Some(r));
        }
        assert_eq!(PatternRange::parse("2w"), None);
        assert_eq!(PatternRange::default(), PatternRange::TwoWeeks);
    }
}
