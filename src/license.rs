use crate::model::LicenseInfo;

/// Quota applied when no license descriptor could be fetched.
pub const DEFAULT_MAX_INSTANCES: i64 = 3;

/// Sentinel for "no instance limit".
pub const UNLIMITED_INSTANCES: i64 = -1;

const PREMIUM_EDITIONS: &[&str] = &["Hosted Ops", "Premium Edition"];

/// Holder for the license descriptor fetched once per session. Every
/// feature-visibility decision in the UI goes through this; an unresolved
/// descriptor means no premium features and the default quota.
#[derive(Clone, Debug, Default)]
pub struct LicenseState {
    info: Option<LicenseInfo>,
}

impl LicenseState {
    pub fn unresolved() -> Self {
        Self { info: None }
    }

    pub fn resolved(info: LicenseInfo) -> Self {
        Self { info: Some(info) }
    }

    pub fn set(&mut self, info: LicenseInfo) {
        self.info = Some(info);
    }

    pub fn info(&self) -> Option<&LicenseInfo> {
        self.info.as_ref()
    }

    pub fn edition(&self) -> Option<&str> {
        self.info.as_ref().map(|i| i.edition.as_str())
    }

    pub fn is_premium(&self) -> bool {
        self.edition()
            .is_some_and(|e| PREMIUM_EDITIONS.contains(&e))
    }

    pub fn max_instances(&self) -> i64 {
        self.info
            .as_ref()
            .map(|i| i.max_instances)
            .unwrap_or(DEFAULT_MAX_INSTANCES)
    }

    pub fn is_feature_enabled(&self, key: &str) -> bool {
        let Some(info) = self.info.as_ref() else {
            return false;
        };
        info.features.get(key).copied().unwrap_or(false)
    }

    pub fn can_add_instance(&self, count: usize) -> bool {
        let max = self.max_instances();
        max == UNLIMITED_INSTANCES || (count as i64) < max
    }

    /// How many more instances fit under the quota; `None` when unlimited.
    pub fn remaining_quota(&self, count: usize) -> Option<i64> {
        let max = self.max_instances();
        if max == UNLIMITED_INSTANCES {
            return None;
        }
        Some((max - count as i64).max(0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn license(edition: &str, max: i64) -> LicenseState {
        LicenseState::resolved(LicenseInfo {
            edition: edition.to_string(),
            features: HashMap::new(),
            max_instances: max,
        })
    }

    #[test]
    fn premium_editions_and_only_those_are_premium() {
        assert!(license("Hosted Ops", 10).is_premium());
        assert!(license("Premium Edition", 10).is_premium());
        assert!(!license("Community Edition", 3).is_premium());
        assert!(!license("premium edition", 3).is_premium());
        assert!(!LicenseState::unresolved().is_premium());
    }

    #[test]
    fn unresolved_license_falls_back_to_defaults() {
        let state = LicenseState::unresolved();
        assert_eq!(state.max_instances(), DEFAULT_MAX_INSTANCES);
        assert!(!state.is_feature_enabled("alert.workflow_error"));
        assert!(state.edition().is_none());
    }

    #[test]
    fn feature_flags_default_to_false_when_absent() {
        let mut features = HashMap::new();
        features.insert("alert.workflow_error".to_string(), true);
        features.insert("alert.invalid_api_key".to_string(), false);
        let state = LicenseState::resolved(LicenseInfo {
            edition: "Hosted Ops".to_string(),
            features,
            max_instances: 10,
        });

        assert!(state.is_feature_enabled("alert.workflow_error"));
        assert!(!state.is_feature_enabled("alert.invalid_api_key"));
        assert!(!state.is_feature_enabled("alert.some_future_flag"));
    }

    #[test]
    fn quota_gate_closes_exactly_at_the_limit() {
        let state = license("Community Edition", 3);
        assert!(state.can_add_instance(2));
        assert!(!state.can_add_instance(3));
        assert!(!state.can_add_instance(4));
        assert_eq!(state.remaining_quota(2), Some(1));
        assert_eq!(state.remaining_quota(3), Some(0));
        assert_eq!(state.remaining_quota(5), Some(0));
    }

    #[test]
    fn unlimited_sentinel_disables_the_quota() {
        let state = license("Hosted Ops", UNLIMITED_INSTANCES);
        assert!(state.can_add_instance(0));
        assert!(state.can_add_instance(10_000));
        assert_eq!(state.remaining_quota(10_000), None);
    }
}
