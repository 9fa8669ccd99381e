use crate::model::Workflow;

use super::*;

impl RemoteClient {
    pub fn list_workflows(&self, instance_id: &str) -> Result<Vec<Workflow>> {
        with_retries("list workflows", || {
            let resp = self.send(
                self.get(&format!("/instances/{}/workflows", instance_id)),
                "list workflows",
            )?;
            let out: Vec<Workflow> = self
                .ensure_ok(resp, "list workflows")?
                .json()
                .context("parse workflows")?;
            Ok(out)
        })
    }

    /// Archive of workflow definitions as served by the backend (zip bytes).
    /// `ids` scopes the archive to a selection; `None` exports everything.
    pub fn export_workflows(&self, instance_id: &str, ids: Option<&[String]>) -> Result<Vec<u8>> {
        let mut req = self.get(&format!("/instances/{}/workflows/export", instance_id));
        if let Some(ids) = ids {
            req = req.query(&[("ids", ids.join(","))]);
        }
        let resp = self.send(req, "export workflows")?;
        let bytes = self
            .ensure_ok(resp, "export workflows")?
            .bytes()
            .context("read export archive")?;
        Ok(bytes.to_vec())
    }

    /// Upload one workflow definition. The payload is the parsed JSON of the
    /// definition file; parsing happens on the caller's side so malformed
    /// files never leave the machine.
    pub fn import_workflow(&self, instance_id: &str, definition: &serde_json::Value) -> Result<()> {
        let resp = self.send(
            self.post(&format!("/instances/{}/workflows/import", instance_id))
                .json(definition),
            "import workflow",
        )?;
        self.ensure_ok(resp, "import workflow")?;
        Ok(())
    }
}
