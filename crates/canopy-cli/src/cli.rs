use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "canopy",
    about = "canopy — content-addressed Merkle tree synchronization",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the two-store pull demo: populate, sync, verify
    Demo(DemoArgs),
    /// Print the content hash of a leaf payload
    Hash(HashArgs),
}

#[derive(Args)]
pub struct DemoArgs {
    /// Skip the integrity check after syncing
    #[arg(long)]
    pub no_fsck: bool,
}

#[derive(Args)]
pub struct HashArgs {
    /// Payload to hash; read from stdin when omitted
    pub payload: Option<String>,
}
