/// Ansible dynamic inventory for the Windows workstations. Reads the host list and WinRM
/// credentials from the environment and writes the inventory as JSON to stdout, e.g.:
///
///   workstations_ips="10.0.0.1 10.0.0.2" admin_username=admin admin_password=... \
///     ansible-playbook -i workstation-inventory site.yml
use anyhow::Result;
use clap::Parser;
use log::debug;
use workstation_inventory::cli::{Args, Command};
use workstation_inventory::{InventoryConfig, InventoryDocument};

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let config = InventoryConfig::from_env()?;
    debug!("Loaded {:?}", config);

    let inv = InventoryDocument::from_config(&config);
    let out = match args.command() {
        Command::List => inv.to_json()?,
        Command::Host(host) => serde_json::to_string(&inv.host_vars(&host))?,
    };
    println!("{}", out);

    Ok(())
}
