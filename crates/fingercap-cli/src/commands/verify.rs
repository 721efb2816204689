use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::Args;
use console::style;
use fingercap_core::service::{ServiceClient, VerifyStatus};
use indicatif::{ProgressBar, ProgressStyle};

#[derive(Args)]
pub struct VerifyArgs {
    /// Fingerprint image to verify
    pub file: PathBuf,

    /// Identifier of the enrolled user to verify against
    #[arg(long)]
    pub user_id: String,

    /// Base URL of the matching service
    #[arg(long, default_value = "http://127.0.0.1:5000")]
    pub server: String,
}

pub fn run(args: &VerifyArgs) -> Result<()> {
    let client = ServiceClient::new(&args.server)?;

    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner} {msg}")?);
    pb.set_message("Verifying fingerprint");
    pb.enable_steady_tick(Duration::from_millis(100));

    let outcome = client.verify(&args.file, &args.user_id);
    pb.finish_and_clear();

    let outcome = outcome?;
    if outcome.matched {
        println!("{}", style("Match found").green().bold());
        if let Some(ref name) = outcome.username {
            println!("User:           {}", name);
        }
        if let Some(acc) = outcome.accuracy {
            println!("Accuracy:       {:.1}%", acc);
        }
        if let Some(orb) = outcome.orb_score {
            println!("ORB score:      {:.3}", orb);
        }
        if let Some(minutiae) = outcome.minutiae_score {
            println!("Minutiae score: {:.3}", minutiae);
        }
    } else {
        let reason = match outcome.status {
            VerifyStatus::NoUser => "No match found",
            VerifyStatus::Blurry => "Image is too blurry",
            VerifyStatus::NoFingerprint => "No fingerprint pattern detected",
            VerifyStatus::LowQuality => "Image quality is too low",
            VerifyStatus::Spoof => "Presentation attack suspected",
            VerifyStatus::Anomaly => "Anomalous capture rejected",
            VerifyStatus::Ok | VerifyStatus::Unknown => "Verification failed",
        };
        println!("{}", style(reason).red().bold());
        if !outcome.message.is_empty() {
            println!("{}", outcome.message);
        }
    }

    Ok(())
}
