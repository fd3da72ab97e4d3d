mod app;
mod hiker;
mod mountain;
mod stop_loader;
mod tree;

use clap::Parser;

fn main() {
    let cli = app::Cli::parse();
    if let Err(e) = app::run_app(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
