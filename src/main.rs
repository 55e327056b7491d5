use clap::Parser;
use memovault::cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Seal(ref args) => memovault::cli::commands::seal::execute(&cli, args),
        Commands::Open {
            ref id,
            ref output,
            quiet,
        } => memovault::cli::commands::open::execute(&cli, id, output.as_deref(), quiet),
        Commands::List => memovault::cli::commands::list::execute(&cli),
        Commands::Completions { ref shell } => memovault::cli::commands::completions::execute(shell),
    };

    if let Err(e) = result {
        memovault::cli::output::error(&e.to_string());
        std::process::exit(e.exit_code());
    }
}
