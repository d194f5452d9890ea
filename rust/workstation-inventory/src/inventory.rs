/// The inventory document handed to Ansible. There is exactly one group, `workstations`, and all
/// connection settings live in its group vars. The hosts themselves carry no variables.
use crate::config::InventoryConfig;
use crate::error::InventoryError;
use log::debug;
use serde_derive::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Name of the only host group in the inventory.
pub const GROUP_NAME: &str = "workstations";
/// HTTPS listener of WinRM.
pub const WINRM_PORT: u16 = 5986;
pub const CONNECTION: &str = "winrm";
pub const WINRM_TRANSPORT: &str = "ntlm";
/// Workstations use self-signed listener certificates, so validation is switched off.
pub const SERVER_CERT_VALIDATION: &str = "ignore";

/// Top-level inventory, serialized as `{"workstations": {...}}`.
///
/// ```rust
/// use workstation_inventory::{InventoryConfig, InventoryDocument};
///
/// let config = InventoryConfig {
///     admin_username: Some("admin".to_string()),
///     admin_password: Some("secret".to_string()),
///     workstations_ips: "10.0.0.1 10.0.0.2".to_string(),
/// };
/// let inv = InventoryDocument::from_config(&config);
///
/// assert_eq!(inv.workstations.hosts, vec!["10.0.0.1", "10.0.0.2"]);
/// ```
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub struct InventoryDocument {
    pub workstations: HostGroup,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub struct HostGroup {
    /// Host addresses in the order they were given.
    pub hosts: Vec<String>,
    pub vars: ConnectionVars,
}

/// Group vars telling Ansible how to reach the hosts over WinRM. Field names are the Ansible
/// variable names, so they serialize as-is.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub struct ConnectionVars {
    pub ansible_user: Option<String>,
    pub ansible_password: Option<String>,
    pub ansible_port: u16,
    pub ansible_connection: String,
    pub ansible_winrm_transport: String,
    pub ansible_winrm_server_cert_validation: String,
}

impl ConnectionVars {
    pub fn new(user: Option<String>, password: Option<String>) -> Self {
        ConnectionVars {
            ansible_user: user,
            ansible_password: password,
            ansible_port: WINRM_PORT,
            ansible_connection: CONNECTION.to_string(),
            ansible_winrm_transport: WINRM_TRANSPORT.to_string(),
            ansible_winrm_server_cert_validation: SERVER_CERT_VALIDATION.to_string(),
        }
    }
}

impl InventoryDocument {
    pub fn from_config(config: &InventoryConfig) -> Self {
        let hosts = split_hosts(&config.workstations_ips);
        debug!("{} host(s) in group {}", hosts.len(), GROUP_NAME);

        InventoryDocument {
            workstations: HostGroup {
                hosts,
                vars: ConnectionVars::new(
                    config.admin_username.clone(),
                    config.admin_password.clone(),
                ),
            },
        }
    }

    /// Compact, single-line JSON. Field order is fixed by the struct definitions, so the same
    /// configuration always renders to the same bytes.
    pub fn to_json(&self) -> Result<String, InventoryError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Answer to `--host <host>`. Everything is a group var, so there is nothing host specific to
    /// report, whether or not the host is part of the group.
    pub fn host_vars(&self, host: &str) -> Map<String, Value> {
        if !self.workstations.hosts.iter().any(|h| h == host) {
            debug!("{} is not in group {}", host, GROUP_NAME);
        }
        Map::new()
    }
}

/// Splits a whitespace-separated host list. Runs of whitespace and leading/trailing whitespace
/// never produce empty entries.
pub fn split_hosts(raw: &str) -> Vec<String> {
    raw.split_whitespace().map(str::to_string).collect()
}
