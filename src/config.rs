use clap::Parser;

// CLI argument structure
#[derive(Parser, Debug, Clone)]
#[command(name = "interview-gateway")]
#[command(about = "Rate-limited forwarding gateway for the interview backend")]
pub struct Args {
    // Port to run the server on
    #[arg(short, long, default_value_t = 8080)]
    pub port: u16,

    // Backend base URL the gateway forwards to
    // Example: "http://localhost:9000"
    #[arg(short, long)]
    pub backend_url: String,

    // Rate limit max requests per window
    #[arg(long, default_value_t = 5)]
    pub rate_limit: u32,

    // Rate limit window in seconds
    #[arg(long, default_value_t = 60)]
    pub rate_window: u64,

    // Deadline for a single upstream call, in seconds
    #[arg(long, default_value_t = 30)]
    pub upstream_timeout: u64,

    // How often expired rate-limit entries are swept, in seconds
    #[arg(long, default_value_t = 300)]
    pub sweep_interval: u64,
}
