mod common;

use anyhow::Result;

use flowdeck::license::LicenseState;
use flowdeck::model::{AlertForm, InstanceStatus, PatternRange, Severity};
use flowdeck::remote::{CreateInstanceRequest, RemoteClient, UpdateInstanceRequest};

fn authed_client(backend: &common::StubBackend) -> Result<RemoteClient> {
    RemoteClient::new(backend.base_url.clone(), Some(common::TOKEN.to_string()))
}

#[test]
fn login_issues_a_token_and_rejects_bad_credentials() -> Result<()> {
    let backend = common::spawn_backend(common::seeded_state());
    let client = RemoteClient::new(backend.base_url.clone(), None)?;

    let resp = client.login(common::USERNAME, common::PASSWORD)?;
    assert_eq!(resp.token, common::TOKEN);
    assert_eq!(resp.username, common::USERNAME);

    let err = client.login(common::USERNAME, "wrong").unwrap_err();
    assert_eq!(err.to_string(), "invalid credentials");
    Ok(())
}

#[test]
fn instance_listing_requires_a_session() -> Result<()> {
    let backend = common::spawn_backend(common::seeded_state());

    let unauthed = RemoteClient::new(backend.base_url.clone(), None)?;
    let err = unauthed.list_instances().unwrap_err();
    assert!(format!("{:#}", err).contains("unauthorized"), "{:#}", err);

    let client = authed_client(&backend)?;
    let instances = client.list_instances()?;
    assert_eq!(instances.len(), 2);
    assert_eq!(instances[0].name, "production");
    assert_eq!(instances[1].status, InstanceStatus::Locked);
    Ok(())
}

#[test]
fn instance_creation_enforces_the_backend_quota() -> Result<()> {
    let backend = common::spawn_backend(common::seeded_state());
    let client = authed_client(&backend)?;

    // Seeded fleet has 2 of 3 allowed.
    let created = client.create_instance(&CreateInstanceRequest {
        name: "edge".to_string(),
        base_url: "https://edge.example.com".to_string(),
        api_key: "n8n_api_edge".to_string(),
    })?;
    assert_eq!(created.status, InstanceStatus::Active);

    let err = client
        .create_instance(&CreateInstanceRequest {
            name: "overflow".to_string(),
            base_url: "https://overflow.example.com".to_string(),
            api_key: "n8n_api_overflow".to_string(),
        })
        .unwrap_err();
    // The backend's message is surfaced verbatim.
    assert_eq!(err.to_string(), "instance limit reached");
    Ok(())
}

#[test]
fn updates_omit_the_api_key_unless_replaced() -> Result<()> {
    let backend = common::spawn_backend(common::seeded_state());
    let client = authed_client(&backend)?;

    client.update_instance(
        "i1",
        &UpdateInstanceRequest {
            name: "production eu".to_string(),
            base_url: "https://flows.example.com".to_string(),
            api_key: None,
        },
    )?;
    client.update_instance(
        "i1",
        &UpdateInstanceRequest {
            name: "production eu".to_string(),
            base_url: "https://flows.example.com".to_string(),
            api_key: Some("n8n_api_new".to_string()),
        },
    )?;

    let state = backend.state.lock().unwrap();
    assert_eq!(state.updates.len(), 2);
    assert!(state.updates[0].1.get("apiKey").is_none());
    assert_eq!(state.updates[1].1["apiKey"], "n8n_api_new");

    drop(state);
    let err = client
        .update_instance(
            "missing",
            &UpdateInstanceRequest {
                name: "x".to_string(),
                base_url: "https://x.example.com".to_string(),
                api_key: None,
            },
        )
        .unwrap_err();
    assert_eq!(err.to_string(), "instance not found");
    Ok(())
}

#[test]
fn workflow_export_scopes_to_the_requested_ids() -> Result<()> {
    let backend = common::spawn_backend(common::seeded_state());
    let client = authed_client(&backend)?;

    let workflows = client.list_workflows("i1")?;
    assert_eq!(workflows.len(), 3);

    let bytes = client.export_workflows("i1", None)?;
    assert_eq!(bytes, b"PK\x03\x04stub-archive".to_vec());

    let selected = vec!["w1".to_string(), "w3".to_string()];
    client.export_workflows("i1", Some(&selected))?;

    let state = backend.state.lock().unwrap();
    assert_eq!(state.export_requests.len(), 2);
    assert_eq!(state.export_requests[0], ("i1".to_string(), None));
    assert_eq!(
        state.export_requests[1],
        ("i1".to_string(), Some("w1,w3".to_string()))
    );
    Ok(())
}

#[test]
fn workflow_import_uploads_the_parsed_definition() -> Result<()> {
    let backend = common::spawn_backend(common::seeded_state());
    let client = authed_client(&backend)?;

    let definition = serde_json::json!({
        "name": "imported flow",
        "nodes": [],
        "connections": {}
    });
    client.import_workflow("i1", &definition)?;

    let state = backend.state.lock().unwrap();
    assert_eq!(state.imports.len(), 1);
    assert_eq!(state.imports[0].0, "i1");
    assert_eq!(state.imports[0].1["name"], "imported flow");
    Ok(())
}

#[test]
fn error_events_and_patterns_come_back_typed() -> Result<()> {
    let backend = common::spawn_backend(common::seeded_state());
    let client = authed_client(&backend)?;

    let events = client.list_error_events("i1")?;
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].severity, Severity::Error);
    assert_eq!(events[0].payload.workflow_name.as_deref(), Some("apple sync"));
    assert_eq!(events[0].payload.node.as_deref(), Some("HTTP Request"));

    let patterns = client.error_patterns("i1", PatternRange::TwoWeeks)?;
    assert_eq!(patterns.len(), 1);
    assert_eq!(patterns[0].count, 7);
    assert_eq!(patterns[0].affected_workflows.len(), 2);

    // Each range is its own result set.
    let day = client.error_patterns("i1", PatternRange::OneDay)?;
    assert!(day.is_empty());
    Ok(())
}

#[test]
fn license_descriptor_drives_gating() -> Result<()> {
    let backend = common::spawn_backend(common::seeded_state());
    let client = authed_client(&backend)?;

    let license = LicenseState::resolved(client.license()?);
    assert!(license.is_premium());
    assert_eq!(license.max_instances(), 3);
    assert!(license.is_feature_enabled("alert.workflow_error"));
    assert!(!license.is_feature_enabled("alert.invalid_api_key"));

    let version = client.server_version()?;
    assert_eq!(version.version, "1.4.2");
    Ok(())
}

#[test]
fn alert_settings_round_trip_through_the_flat_form() -> Result<()> {
    let backend = common::spawn_backend(common::seeded_state());
    let client = authed_client(&backend)?;

    let settings = client.alert_settings()?;
    let mut form = AlertForm::from_settings(&settings);
    assert!(form.enabled);
    assert_eq!(form.email, "ops@example.com");
    assert!(form.notify_on_instance_offline);

    form.notify_on_workflow_error = true;
    form.email = "alerts@example.com".to_string();
    client.update_alert_settings(&form.to_settings())?;

    let persisted = client.alert_settings()?;
    assert_eq!(persisted.channels.email.unwrap().address, "alerts@example.com");
    assert!(persisted.events.workflow_error);
    Ok(())
}

#[test]
fn backup_settings_and_statuses_are_readable() -> Result<()> {
    let backend = common::spawn_backend(common::seeded_state());
    let client = authed_client(&backend)?;

    let settings = client.backup_settings()?;
    assert!(settings.enabled);
    assert_eq!(settings.google_drive_folder_id, "folder-1");
    assert_eq!(settings.interval_hours, 24);

    let statuses = client.backups_last_all()?;
    assert_eq!(statuses.len(), 2);
    assert_eq!(statuses[0].instance_name, "production");
    assert!(statuses[1].last_backup_at.is_none());

    let last = client.instance_last_backup("i1")?;
    assert_eq!(last.last_backup_at.as_deref(), Some("2026-02-01T03:00:00Z"));
    Ok(())
}

#[test]
fn password_reset_flow_validates_tokens_server_side() -> Result<()> {
    let backend = common::spawn_backend(common::seeded_state());
    let client = RemoteClient::new(backend.base_url.clone(), None)?;

    client.request_password_reset("admin@example.com")?;

    assert!(client.validate_reset_token("good-token")?);
    assert!(!client.validate_reset_token("stale-token")?);

    client.reset_password("good-token", "brand-new-pass")?;
    let err = client.reset_password("stale-token", "whatever").unwrap_err();
    assert_eq!(err.to_string(), "invalid or expired token");

    let state = backend.state.lock().unwrap();
    assert_eq!(
        state.resets,
        vec![("good-token".to_string(), "brand-new-pass".to_string())]
    );
    Ok(())
}
