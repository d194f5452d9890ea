use clap::Parser;

/// Command line in the shape Ansible expects from a dynamic inventory script. Running with no
/// arguments is the same as `--list`.
#[derive(Parser, Debug)]
#[command(
    version,
    about,
    long_about = "Prints an Ansible dynamic inventory for the workstations listed in the \
                  `workstations_ips` environment variable. Credentials are taken from \
                  `admin_username` and `admin_password`."
)]
pub struct Args {
    /// Print the whole inventory (default).
    #[arg(long, conflicts_with = "host")]
    pub list: bool,

    /// Print the variables of a single host.
    #[arg(long, value_name = "HOST")]
    pub host: Option<String>,
}

#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    List,
    Host(String),
}

impl Args {
    pub fn command(&self) -> Command {
        match &self.host {
            Some(host) => Command::Host(host.clone()),
            None => Command::List,
        }
    }
}
