use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use console::style;
use fingercap_core::service::ServiceClient;

#[derive(Args)]
pub struct RegisterArgs {
    /// Fingerprint image to enroll
    pub file: PathBuf,

    /// Identifier for the new user
    #[arg(long)]
    pub user_id: String,

    /// Display name for the new user
    #[arg(long)]
    pub username: String,

    /// Phone number for the new user
    #[arg(long)]
    pub phone: String,

    /// Base URL of the matching service
    #[arg(long, default_value = "http://127.0.0.1:5000")]
    pub server: String,
}

pub fn run(args: &RegisterArgs) -> Result<()> {
    let client = ServiceClient::new(&args.server)?;
    let reply = client.register(&args.file, &args.user_id, &args.username, &args.phone)?;
    println!("{} {}", style("Registered:").green(), reply.message);
    Ok(())
}
