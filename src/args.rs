use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "convosite")]
#[command(about = "Builder core that renders a seeded site and simulates its chat assistant")]
#[command(version)]
pub struct Args {
    /// Site ID to load
    #[arg(short, long, default_value_t = 1)]
    pub site: u64,

    /// Seed JSON file (the built-in demo seed is used when omitted)
    #[arg(long)]
    pub seed: Option<PathBuf>,

    /// Chat messages to send to the simulated assistant, in order
    #[arg(short, long)]
    pub chat: Vec<String>,

    /// Disable the artificial store and chat delays
    #[arg(long)]
    pub no_delay: bool,
}
