//! Library behind the `workstation-inventory` binary. Builds an Ansible dynamic inventory
//! describing a single group of WinRM-managed workstations, with the host list and credentials
//! taken from the environment of the calling process.
pub mod cli;
pub mod config;
pub mod error;
pub mod inventory;


pub use config::InventoryConfig;
pub use error::InventoryError;
pub use inventory::InventoryDocument;
