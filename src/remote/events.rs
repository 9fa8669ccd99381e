use crate::model::{ErrorPattern, EventRecord, PatternRange};

use super::*;

/// The errors tab shows at most this many recent events; the limit is applied
/// server-side.
pub const EVENT_FETCH_LIMIT: u32 = 50;

impl RemoteClient {
    pub fn list_error_events(&self, instance_id: &str) -> Result<Vec<EventRecord>> {
        with_retries("list error events", || {
            let resp = self.send(
                self.get(&format!("/instances/{}/events", instance_id))
                    .query(&[
                        ("type", "WORKFLOW_ERROR".to_string()),
                        ("limit", EVENT_FETCH_LIMIT.to_string()),
                    ]),
                "list error events",
            )?;
            let out: Vec<EventRecord> = self
                .ensure_ok(resp, "list error events")?
                .json()
                .context("parse events")?;
            Ok(out)
        })
    }

    pub fn error_patterns(
        &self,
        instance_id: &str,
        range: PatternRange,
    ) -> Result<Vec<ErrorPattern>> {
        with_retries("error patterns", || {
            let resp = self.send(
                self.get(&format!("/instances/{}/error-patterns", instance_id))
                    .query(&[("range", range.as_str())]),
                "error patterns",
            )?;
            let out: Vec<ErrorPattern> = self
                .ensure_ok(resp, "error patterns")?
                .json()
                .context("parse error patterns")?;
            Ok(out)
        })
    }
}
