use std::path::PathBuf;

use clap::Parser;

mod app;
mod countdown;

#[derive(Parser)]
#[command(name = "tomate", version, about = "Command-line Pomodoro timer")]
struct Cli {
    /// Override the data directory (default: ~/.config/tomate)
    #[arg(long, value_name = "DIR")]
    data_dir: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = app::run(cli.data_dir) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
