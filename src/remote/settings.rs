use crate::model::{AlertSettings, BackupSettings, BackupStatus, LicenseInfo, VersionInfo};

use super::*;

impl RemoteClient {
    pub fn license(&self) -> Result<LicenseInfo> {
        with_retries("fetch license", || {
            let resp = self.send(self.get("/license"), "fetch license")?;
            let out: LicenseInfo = self
                .ensure_ok(resp, "fetch license")?
                .json()
                .context("parse license")?;
            Ok(out)
        })
    }

    pub fn server_version(&self) -> Result<VersionInfo> {
        let resp = self.send(self.get("/version"), "fetch version")?;
        let out: VersionInfo = self
            .ensure_ok(resp, "fetch version")?
            .json()
            .context("parse version")?;
        Ok(out)
    }

    pub fn alert_settings(&self) -> Result<AlertSettings> {
        let resp = self.send(self.get("/settings/alerts"), "fetch alert settings")?;
        let out: AlertSettings = self
            .ensure_ok(resp, "fetch alert settings")?
            .json()
            .context("parse alert settings")?;
        Ok(out)
    }

    pub fn update_alert_settings(&self, settings: &AlertSettings) -> Result<AlertSettings> {
        let resp = self.send(
            self.put("/settings/alerts").json(settings),
            "update alert settings",
        )?;
        let out: AlertSettings = self
            .ensure_ok(resp, "update alert settings")?
            .json()
            .context("parse alert settings")?;
        Ok(out)
    }

    pub fn backup_settings(&self) -> Result<BackupSettings> {
        let resp = self.send(self.get("/settings/backups"), "fetch backup settings")?;
        let out: BackupSettings = self
            .ensure_ok(resp, "fetch backup settings")?
            .json()
            .context("parse backup settings")?;
        Ok(out)
    }

    pub fn update_backup_settings(&self, settings: &BackupSettings) -> Result<BackupSettings> {
        let resp = self.send(
            self.put("/settings/backups").json(settings),
            "update backup settings",
        )?;
        let out: BackupSettings = self
            .ensure_ok(resp, "update backup settings")?
            .json()
            .context("parse backup settings")?;
        Ok(out)
    }

    pub fn backups_last_all(&self) -> Result<Vec<BackupStatus>> {
        with_retries("backup statuses", || {
            let resp = self.send(self.get("/backups/last-all"), "backup statuses")?;
            let out: Vec<BackupStatus> = self
                .ensure_ok(resp, "backup statuses")?
                .json()
                .context("parse backup statuses")?;
            Ok(out)
        })
    }
}
