#![allow(dead_code)]

use std::process::{Command, Output};
use tempfile::TempDir;

/// Runs the `credo` binary against an isolated config directory.
pub struct CredoTest {
    pub config_dir: TempDir,
    api_url: Option<String>,
    token: Option<String>,
}

impl CredoTest {
    pub fn new() -> Self {
        let config_dir = TempDir::new().expect("Failed to create temp directory");
        CredoTest {
            config_dir,
            api_url: None,
            token: None,
        }
    }

    /// Point every invocation at `url` through `CREDO_API_URL`.
    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = Some(url.into());
        self
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn run(&self, args: &[&str]) -> Output {
        let mut command = Command::new(env!("CARGO_BIN_EXE_credo"));
        command
            .args(args)
            .env("CREDO_CONFIG_DIR", self.config_dir.path())
            .env_remove("CREDO_API_URL")
            .env_remove("CREDO_TOKEN")
            .env("NO_COLOR", "1");
        if let Some(url) = &self.api_url {
            command.env("CREDO_API_URL", url);
        }
        if let Some(token) = &self.token {
            command.env("CREDO_TOKEN", token);
        }
        command.output().expect("Failed to execute credo command")
    }

    pub fn run_success(&self, args: &[&str]) -> String {
        let output = self.run(args);
        if !output.status.success() {
            panic!(
                "Command {:?} failed with status {:?}\nstdout: {}\nstderr: {}",
                args,
                output.status,
                String::from_utf8_lossy(&output.stdout),
                String::from_utf8_lossy(&output.stderr)
            );
        }
        String::from_utf8_lossy(&output.stdout).to_string()
    }

    pub fn run_failure(&self, args: &[&str]) -> String {
        let output = self.run(args);
        assert!(
            !output.status.success(),
            "Expected command {:?} to fail, but it succeeded",
            args
        );
        String::from_utf8_lossy(&output.stderr).to_string()
    }

    pub fn read_config(&self) -> String {
        std::fs::read_to_string(self.config_dir.path().join("config.yaml"))
            .expect("Failed to read config file")
    }
}

/// A subscription record as the admin API returns it.
pub fn subscription_json(id: i64, tier: &str) -> serde_json::Value {
    serde_json::json!({
        "user_id": id,
        "user_email": format!("user{id}@example.com"),
        "user_name": format!("User {id}"),
        "role": "DEVELOPER",
        "tier": tier,
        "tier_name": "Package",
        "valid_until": null,
        "created_at": "2024-01-01T00:00:00",
    })
}

/// A registry review record.
pub fn review_json(id: i64, status: &str, project: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "project_id": id + 100,
        "registry_user_id": 7,
        "status": status,
        "assigned_at": "2024-02-01T10:00:00",
        "started_at": null,
        "completed_at": null,
        "review_notes": null,
        "decision": null,
        "project_name": project,
        "project_type": "REDD+",
        "developer_name": "Acme Developer",
    })
}

/// A VVB verification record.
pub fn verification_json(id: i64, status: &str, credits: Option<f64>) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "project_id": id + 200,
        "vvb_user_id": 3,
        "status": status,
        "assigned_at": "2024-02-01T10:00:00",
        "monitoring_period_start": "2023-01-01",
        "monitoring_period_end": "2023-12-31",
        "credits_verified": credits,
        "project_name": format!("Project {id}"),
        "developer_name": "Green Roots",
    })
}
