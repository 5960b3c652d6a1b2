mod cli;

use clap::Parser;
use cli::Cli;
use rand::rngs::StdRng;
use rand::SeedableRng;
use schema_names::{generate_name_with, IndexSource, Result, RngIndexSource};
use std::collections::HashSet;
use std::process;

fn main() {
    let cli = Cli::parse();
    let used: HashSet<String> = cli.used.into_iter().collect();

    let result = match cli.seed {
        Some(seed) => {
            let mut source = RngIndexSource(StdRng::seed_from_u64(seed));
            emit(&mut source, used, cli.count, cli.attempts)
        }
        None => {
            let mut source = RngIndexSource(rand::thread_rng());
            emit(&mut source, used, cli.count, cli.attempts)
        }
    };

    if let Err(e) = result {
        eprintln!("{}", e);
        process::exit(1);
    }
}

fn emit<S: IndexSource>(
    source: &mut S,
    mut used: HashSet<String>,
    count: u32,
    attempts: u32,
) -> Result<()> {
    for _ in 0..count {
        let name = generate_name_with(&used, attempts, source)?;
        println!("{}", name);
        used.insert(name);
    }
    Ok(())
}
