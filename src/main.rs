//! doclinks CLI
//!
//! Checks every link in an `id,url,page_num` list concurrently and writes
//! `report.csv` sorted by id.

use clap::Parser;
use doclinks::logging::init_logger;
use doclinks::{run_check_links, CheckLinksArgs};

#[derive(Parser)]
#[command(name = "doclinks")]
#[command(author = "RoyalBit Inc.")]
#[command(version)]
#[command(about = "Check document links concurrently and write a CSV report")]
#[command(long_about = "Reads `id,url,page_num` lines from FILE or stdin, sends one GET per link \
    (all at once), and writes `id,url,page_num,status[,'error']` lines sorted by id.")]
struct Cli {
    #[command(flatten)]
    args: CheckLinksArgs,

    /// Log progress and per-link results to stderr
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    if let Err(e) = run_check_links(cli.args).await {
        eprintln!("{:#}", e);
        std::process::exit(1);
    }
}
