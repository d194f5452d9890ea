/// Configuration for the inventory, read once from the environment at startup and then passed
/// around explicitly.
use crate::error::InventoryError;
use log::warn;
use std::env::{self, VarError};
use std::fmt;

pub const ADMIN_USERNAME_VAR: &str = "admin_username";
pub const ADMIN_PASSWORD_VAR: &str = "admin_password";
pub const WORKSTATIONS_IPS_VAR: &str = "workstations_ips";

#[derive(Clone, PartialEq, Eq, Default)]
pub struct InventoryConfig {
    /// Account used for WinRM logins. Not validated; `None` ends up as `null` in the inventory.
    pub admin_username: Option<String>,
    /// Password for `admin_username`. Same treatment as the username.
    pub admin_password: Option<String>,
    /// Whitespace-separated list of workstation addresses, exactly as found in the environment.
    pub workstations_ips: String,
}

impl InventoryConfig {
    pub fn from_env() -> Result<Self, InventoryError> {
        Self::from_lookup(|name| env::var(name))
    }

    /// Builds the configuration from an arbitrary variable source. `from_env` is this with
    /// `std::env::var` plugged in.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, InventoryError>
    where
        F: Fn(&str) -> Result<String, VarError>,
    {
        let workstations_ips = optional(&lookup, WORKSTATIONS_IPS_VAR).ok_or(
            InventoryError::MissingRequiredInput {
                name: WORKSTATIONS_IPS_VAR,
            },
        )?;
        let admin_username = optional(&lookup, ADMIN_USERNAME_VAR);
        let admin_password = optional(&lookup, ADMIN_PASSWORD_VAR);

        // Absent credentials are passed through untouched, Ansible decides what to make of them.
        if admin_username.is_none() {
            warn!("{} is not set, ansible_user will be null", ADMIN_USERNAME_VAR);
        }
        if admin_password.is_none() {
            warn!(
                "{} is not set, ansible_password will be null",
                ADMIN_PASSWORD_VAR
            );
        }

        Ok(InventoryConfig {
            admin_username,
            admin_password,
            workstations_ips,
        })
    }
}

// Values that aren't valid unicode are still used, with the bad bytes replaced.
fn optional<F>(lookup: &F, name: &str) -> Option<String>
where
    F: Fn(&str) -> Result<String, VarError>,
{
    match lookup(name) {
        Ok(v) => Some(v),
        Err(VarError::NotPresent) => None,
        Err(VarError::NotUnicode(raw)) => {
            warn!("{} is not valid unicode, using a lossy conversion", name);
            Some(raw.to_string_lossy().into_owned())
        }
    }
}

impl fmt::Debug for InventoryConfig {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("InventoryConfig")
            .field("admin_username", &self.admin_username)
            .field(
                "admin_password",
                &self.admin_password.as_ref().map(|_| "<redacted>"),
            )
            .field("workstations_ips", &self.workstations_ips)
            .finish()
    }
}
