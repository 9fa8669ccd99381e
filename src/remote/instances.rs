use crate::model::Instance;

use super::*;

impl RemoteClient {
    pub fn list_instances(&self) -> Result<Vec<Instance>> {
        with_retries("list instances", || {
            let resp = self.send(self.get("/instances"), "list instances")?;
            let out: Vec<Instance> = self
                .ensure_ok(resp, "list instances")?
                .json()
                .context("parse instances")?;
            Ok(out)
        })
    }

    pub fn get_instance(&self, id: &str) -> Result<Instance> {
        let resp = self.send(self.get(&format!("/instances/{}", id)), "get instance")?;
        if resp.status() == reqwest::StatusCode::NOT_FOUND {
            anyhow::bail!("instance not found");
        }
        let out: Instance = self
            .ensure_ok(resp, "get instance")?
            .json()
            .context("parse instance")?;
        Ok(out)
    }

    pub fn create_instance(&self, req: &CreateInstanceRequest) -> Result<Instance> {
        let resp = self.send(self.post("/instances").json(req), "create instance")?;
        let out: Instance = self
            .ensure_ok(resp, "create instance")?
            .json()
            .context("parse created instance")?;
        Ok(out)
    }

    pub fn update_instance(&self, id: &str, req: &UpdateInstanceRequest) -> Result<Instance> {
        let resp = self.send(
            self.put(&format!("/instances/{}", id)).json(req),
            "update instance",
        )?;
        let out: Instance = self
            .ensure_ok(resp, "update instance")?
            .json()
            .context("parse updated instance")?;
        Ok(out)
    }

    pub fn instance_last_backup(&self, id: &str) -> Result<LastBackup> {
        let resp = self.send(
            self.get(&format!("/instances/{}/last-backup", id)),
            "last backup",
        )?;
        let out: LastBackup = self
            .ensure_ok(resp, "last backup")?
            .json()
            .context("parse last backup")?;
        Ok(out)
    }
}
