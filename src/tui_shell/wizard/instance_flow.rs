use crate::remote::{CreateInstanceRequest, UpdateInstanceRequest};

use super::super::{InstancesView, TextInputAction};
use super::types::{AddInstanceWizard, EditInstanceWizard};
use super::validate::validate_instance_inputs;

impl super::super::App {
    pub(in crate::tui_shell) fn start_add_instance_wizard(&mut self) {
        let count = self
            .current_view::<InstancesView>()
            .map(|v| v.items.len())
            .unwrap_or(0);
        if !self.license.can_add_instance(count) {
            self.push_error(format!(
                "instance limit reached ({}); upgrade the license to add more",
                self.license.max_instances()
            ));
            return;
        }

        self.add_wizard = Some(AddInstanceWizard::default());
        self.open_add_name_step();
    }

    fn open_add_name_step(&mut self) {
        let (initial, error) = match self.add_wizard.as_ref() {
            Some(w) => (w.name.clone(), w.error.clone()),
            None => (None, None),
        };

        let mut lines = Vec::new();
        if let Some(err) = error {
            lines.push(format!("error: {}", err));
            lines.push("".to_string());
        }
        lines.push("Display name for the new instance.".to_string());

        self.open_text_input_modal(
            "Add Instance",
            "name> ",
            TextInputAction::AddInstanceName,
            initial,
            lines,
        );
    }

    pub(in crate::tui_shell) fn continue_add_instance_wizard(
        &mut self,
        action: TextInputAction,
        value: String,
    ) {
        if self.add_wizard.is_none() {
            self.push_error("add-instance wizard not active".to_string());
            return;
        }

        match action {
            TextInputAction::AddInstanceName => {
                let v = value.trim().to_string();
                if v.is_empty() {
                    self.push_error("add instance: name is required".to_string());
                    self.add_wizard = None;
                    return;
                }
                if let Some(w) = self.add_wizard.as_mut() {
                    w.name = Some(v);
                }
                let initial = self.add_wizard.as_ref().and_then(|w| w.base_url.clone());
                self.open_text_input_modal(
                    "Add Instance",
                    "base url> ",
                    TextInputAction::AddInstanceUrl,
                    initial,
                    vec!["Base URL of the instance (example: https://flows.example.com)".to_string()],
                );
            }

            TextInputAction::AddInstanceUrl => {
                let v = value.trim().to_string();
                if v.is_empty() {
                    self.push_error("add instance: base url is required".to_string());
                    self.add_wizard = None;
                    return;
                }
                if let Some(w) = self.add_wizard.as_mut() {
                    w.base_url = Some(v);
                }
                self.open_secret_input_modal(
                    "Add Instance",
                    "api key> ",
                    TextInputAction::AddInstanceApiKey,
                    vec![
                        "API key for the instance (input is hidden).".to_string(),
                        "The key is stored encrypted server-side and never echoed back.".to_string(),
                    ],
                );
            }

            TextInputAction::AddInstanceApiKey => {
                let (name, base_url) = match self.add_wizard.as_ref() {
                    Some(w) => (
                        w.name.clone().unwrap_or_default(),
                        w.base_url.clone().unwrap_or_default(),
                    ),
                    None => {
                        self.push_error("add-instance wizard not active".to_string());
                        return;
                    }
                };

                if let Err(err) = validate_instance_inputs(&name, &base_url, Some(&value)) {
                    self.push_error(format!("add instance: {}", err));
                    self.add_wizard = None;
                    return;
                }
                self.finish_add_instance(name, base_url, value);
            }

            _ => {
                self.push_error("unexpected add-instance wizard input".to_string());
            }
        }
    }

    fn finish_add_instance(&mut self, name: String, base_url: String, api_key: String) {
        let Some(client) = self.remote_client() else {
            self.add_wizard = None;
            return;
        };

        let req = CreateInstanceRequest {
            name,
            base_url,
            api_key,
        };
        match client.create_instance(&req) {
            Ok(created) => {
                self.add_wizard = None;
                self.cache.invalidate_resource("instances");
                self.refresh_instances_view();
                self.push_output(vec![format!("registered instance {}", created.name)]);
            }
            Err(err) => {
                // Keep the form open with the backend's message inline.
                if let Some(w) = self.add_wizard.as_mut() {
                    w.error = Some(format!("{:#}", err));
                }
                self.open_add_name_step();
            }
        }
    }

    pub(in crate::tui_shell) fn start_edit_instance_wizard(&mut self) {
        let Some(inst) = self
            .current_view::<InstancesView>()
            .and_then(|v| v.selected_instance())
            .cloned()
        else {
            self.push_error("no instance selected".to_string());
            return;
        };

        self.edit_wizard = Some(EditInstanceWizard {
            id: inst.id,
            name: inst.name,
            base_url: inst.base_url,
            error: None,
        });
        self.open_edit_name_step();
    }

    fn open_edit_name_step(&mut self) {
        let (initial, error) = match self.edit_wizard.as_ref() {
            Some(w) => (Some(w.name.clone()), w.error.clone()),
            None => (None, None),
        };

        let mut lines = Vec::new();
        if let Some(err) = error {
            lines.push(format!("error: {}", err));
            lines.push("".to_string());
        }
        lines.push("Display name.".to_string());

        self.open_text_input_modal(
            "Edit Instance",
            "name> ",
            TextInputAction::EditInstanceName,
            initial,
            lines,
        );
    }

    pub(in crate::tui_shell) fn continue_edit_instance_wizard(
        &mut self,
        action: TextInputAction,
        value: String,
    ) {
        if self.edit_wizard.is_none() {
            self.push_error("edit-instance wizard not active".to_string());
            return;
        }

        match action {
            TextInputAction::EditInstanceName => {
                let v = value.trim().to_string();
                if v.is_empty() {
                    self.push_error("edit instance: name is required".to_string());
                    self.edit_wizard = None;
                    return;
                }
                if let Some(w) = self.edit_wizard.as_mut() {
                    w.name = v;
                }
                let initial = self.edit_wizard.as_ref().map(|w| w.base_url.clone());
                self.open_text_input_modal(
                    "Edit Instance",
                    "base url> ",
                    TextInputAction::EditInstanceUrl,
                    initial,
                    vec!["Base URL of the instance.".to_string()],
                );
            }

            TextInputAction::EditInstanceUrl => {
                let v = value.trim().to_string();
                if v.is_empty() {
                    self.push_error("edit instance: base url is required".to_string());
                    self.edit_wizard = None;
                    return;
                }
                if let Some(w) = self.edit_wizard.as_mut() {
                    w.base_url = v;
                }
                self.open_secret_input_modal(
                    "Edit Instance",
                    "api key> ",
                    TextInputAction::EditInstanceApiKey,
                    vec![
                        "New API key, or leave blank to keep the stored one.".to_string(),
                        "The stored key is never shown here.".to_string(),
                    ],
                );
            }

            TextInputAction::EditInstanceApiKey => {
                let (id, name, base_url) = match self.edit_wizard.as_ref() {
                    Some(w) => (w.id.clone(), w.name.clone(), w.base_url.clone()),
                    None => {
                        self.push_error("edit-instance wizard not active".to_string());
                        return;
                    }
                };

                // Blank means "keep existing"; only validate a typed key.
                let api_key = if value.is_empty() { None } else { Some(value) };
                if let Err(err) = validate_instance_inputs(&name, &base_url, api_key.as_deref()) {
                    self.push_error(format!("edit instance: {}", err));
                    self.edit_wizard = None;
                    return;
                }
                self.finish_edit_instance(id, name, base_url, api_key);
            }

            _ => {
                self.push_error("unexpected edit-instance wizard input".to_string());
            }
        }
    }

    fn finish_edit_instance(
        &mut self,
        id: String,
        name: String,
        base_url: String,
        api_key: Option<String>,
    ) {
        let Some(client) = self.remote_client() else {
            self.edit_wizard = None;
            return;
        };

        let req = UpdateInstanceRequest {
            name,
            base_url,
            api_key,
        };
        match client.update_instance(&id, &req) {
            Ok(updated) => {
                self.edit_wizard = None;
                self.cache.invalidate_resource("instances");
                self.refresh_instances_view();
                self.push_output(vec![format!("updated instance {}", updated.name)]);
            }
            Err(err) => {
                if let Some(w) = self.edit_wizard.as_mut() {
                    w.error = Some(format!("{:#}", err));
                }
                self.open_edit_name_step();
            }
        }
    }
}
