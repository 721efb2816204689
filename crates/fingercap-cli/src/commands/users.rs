use anyhow::Result;
use clap::Args;
use fingercap_core::service::ServiceClient;

#[derive(Args)]
pub struct UsersArgs {
    /// Base URL of the matching service
    #[arg(long, default_value = "http://127.0.0.1:5000")]
    pub server: String,
}

pub fn run_list(args: &UsersArgs) -> Result<()> {
    let client = ServiceClient::new(&args.server)?;
    let users = client.users()?;

    if users.is_empty() {
        println!("No users enrolled.");
        return Ok(());
    }

    println!("{:<20}  {}", "User ID", "Username");
    println!("{}", "-".repeat(40));
    for user in &users {
        println!("{:<20}  {}", user.user_id, user.username);
    }
    println!("\n{} user(s)", users.len());
    Ok(())
}

#[derive(Args)]
pub struct UserArgs {
    /// Identifier of the user to show
    pub user_id: String,

    /// Base URL of the matching service
    #[arg(long, default_value = "http://127.0.0.1:5000")]
    pub server: String,
}

pub fn run_show(args: &UserArgs) -> Result<()> {
    let client = ServiceClient::new(&args.server)?;
    let user = client.user(&args.user_id)?;

    println!("User ID:  {}", user.user_id);
    println!("Username: {}", user.username);
    println!("Phone:    {}", user.phone);
    Ok(())
}

#[derive(Args)]
pub struct UpdateArgs {
    /// Identifier of the user to update
    pub user_id: String,

    /// New display name
    #[arg(long)]
    pub username: String,

    /// New phone number
    #[arg(long)]
    pub phone: String,

    /// Base URL of the matching service
    #[arg(long, default_value = "http://127.0.0.1:5000")]
    pub server: String,
}

pub fn run_update(args: &UpdateArgs) -> Result<()> {
    let client = ServiceClient::new(&args.server)?;
    let reply = client.update(&args.user_id, &args.username, &args.phone)?;
    println!("{}", reply.message);
    Ok(())
}

#[derive(Args)]
pub struct DeleteArgs {
    /// Identifier of the user to delete
    pub user_id: String,

    /// Base URL of the matching service
    #[arg(long, default_value = "http://127.0.0.1:5000")]
    pub server: String,
}

pub fn run_delete(args: &DeleteArgs) -> Result<()> {
    let client = ServiceClient::new(&args.server)?;
    let reply = client.delete(&args.user_id)?;
    println!("{}", reply.message);
    Ok(())
}
