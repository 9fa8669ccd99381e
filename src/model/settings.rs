use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertSettings {
    #[serde(default)]
    pub events: AlertEvents,

    #[serde(default)]
    pub channels: AlertChannels,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertEvents {
    #[serde(default)]
    pub instance_offline: bool,

    #[serde(default)]
    pub workflow_error: bool,

    #[serde(default)]
    pub invalid_api_key: bool,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct AlertChannels {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<EmailChannel>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EmailChannel {
    pub address: String,
}

/// Flat editing state for the alert-settings form. The backend shape nests
/// the email address under an optional channel; "enabled" in the form means
/// the email channel is present.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AlertForm {
    pub email: String,
    pub enabled: bool,
    pub notify_on_instance_offline: bool,
    pub notify_on_workflow_error: bool,
    pub notify_on_invalid_api_key: bool,
}

impl AlertForm {
    pub fn from_settings(settings: &AlertSettings) -> Self {
        Self {
            email: settings
                .channels
                .email
                .as_ref()
                .map(|c| c.address.clone())
                .unwrap_or_default(),
            enabled: settings.channels.email.is_some(),
            notify_on_instance_offline: settings.events.instance_offline,
            notify_on_workflow_error: settings.events.workflow_error,
            notify_on_invalid_api_key: settings.events.invalid_api_key,
        }
    }

    pub fn to_settings(&self) -> AlertSettings {
        AlertSettings {
            events: AlertEvents {
                instance_offline: self.notify_on_instance_offline,
                workflow_error: self.notify_on_workflow_error,
                invalid_api_key: self.notify_on_invalid_api_key,
            },
            channels: AlertChannels {
                email: if self.enabled {
                    Some(EmailChannel {
                        address: self.email.clone(),
                    })
                } else {
                    None
                },
            },
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackupSettings {
    #[serde(default)]
    pub enabled: bool,

    #[serde(default)]
    pub google_drive_folder_id: String,

    #[serde(default = "default_interval_hours")]
    pub interval_hours: u32,

    /// Read-only on this side; the backend stamps it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_backup_at: Option<String>,
}

fn default_interval_hours() -> u32 {
    BackupInterval::Daily.hours()
}

impl Default for BackupSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            google_drive_folder_id: String::new(),
            interval_hours: default_interval_hours(),
            last_backup_at: None,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BackupInterval {
    Hourly,
    #[default]
    Daily,
    Weekly,
    Monthly,
}

impl BackupInterval {
    pub const ALL: [BackupInterval; 4] = [
        BackupInterval::Hourly,
        BackupInterval::Daily,
        BackupInterval::Weekly,
        BackupInterval::Monthly,
    ];

    pub fn hours(self) -> u32 {
        match self {
            BackupInterval::Hourly => 1,
            BackupInterval::Daily => 24,
            BackupInterval::Weekly => 168,
            BackupInterval::Monthly => 720,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            BackupInterval::Hourly => "every hour",
            BackupInterval::Daily => "daily",
            BackupInterval::Weekly => "weekly",
            BackupInterval::Monthly => "monthly",
        }
    }

    pub fn from_hours(hours: u32) -> Option<BackupInterval> {
        Self::ALL.into_iter().find(|i| i.hours() == hours)
    }

    pub fn next(self) -> BackupInterval {
        match self {
            BackupInterval::Hourly => BackupInterval::Daily,
            BackupInterval::Daily => BackupInterval::Weekly,
            BackupInterval::Weekly => BackupInterval::Monthly,
            BackupInterval::Monthly => BackupInterval::Hourly,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackupStatus {
    pub instance_id: String,
    pub instance_name: String,

    #[serde(default)]
    pub last_backup_at: Option<String>,
}
