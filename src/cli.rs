use clap::Parser;

#[derive(Parser)]
#[command(name = "schema-names", about = "Generate human-readable schema names")]
pub struct Cli {
    /// Number of names to generate
    #[arg(long, default_value_t = 1)]
    pub count: u32,

    /// Maximum random draws per name before falling back to a numeric suffix
    #[arg(long, default_value_t = 16)]
    pub attempts: u32,

    /// Seed the random source for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,

    /// Name to avoid (may be repeated)
    #[arg(long = "used", value_name = "NAME")]
    pub used: Vec<String>,
}
