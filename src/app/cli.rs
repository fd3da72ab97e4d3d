use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Finds the trails a hiker can complete down a rest-stop mountain.", long_about = None)]
pub struct Cli {
    /// Trail file describing the mountain's rest stops
    pub trail_file: PathBuf,

    /// Suppress the verbose log file, printing only the surviving trails.
    #[clap(short, long)]
    pub quiet: bool,
}
