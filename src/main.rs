//! CLI entry point for stree

use std::io;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use log::debug;
use stree::{
    JsonFormatter, OutputConfig, StreamingFormatter, StreamingWalker, WalkSummary, WalkerConfig,
};

#[derive(Parser, Debug)]
#[command(name = "stree")]
#[command(about = "A tree command that shows permissions, owner, group and size")]
#[command(version)]
struct Args {
    /// Directory to display
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Follow symbolic links (link loops are reported and skipped)
    #[arg(short = 'l', long = "follow-links")]
    follow_links: bool,

    /// List a directory's contents before the directory itself
    #[arg(long = "post-order")]
    post_order: bool,

    /// Show numeric user and group ids instead of names
    #[arg(short = 'n', long = "numeric-uid-gid")]
    numeric_ids: bool,

    /// Output one JSON object per line instead of a tree
    #[arg(long = "json")]
    json: bool,
}

fn run(args: &Args) -> stree::Result<WalkSummary> {
    let walker = StreamingWalker::new(WalkerConfig {
        follow_links: args.follow_links,
        contents_first: args.post_order,
    });
    let output_config = OutputConfig {
        numeric_ids: args.numeric_ids,
    };

    // Stdout is line buffered, so each entry appears as soon as it is walked.
    let stdout = io::stdout().lock();
    if args.json {
        let mut formatter = JsonFormatter::new(stdout, &output_config);
        walker.walk_streaming(&args.path, &mut formatter)
    } else {
        let mut formatter = StreamingFormatter::new(stdout, &output_config);
        walker.walk_streaming(&args.path, &mut formatter)
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();

    let args = Args::try_parse().unwrap_or_else(|e| {
        // --help and --version come through here too, on stdout
        let code = if e.use_stderr() { 1 } else { 0 };
        let _ = e.print();
        process::exit(code);
    });
    debug!("{:?}", args);

    match run(&args) {
        Ok(_) => {}
        Err(e) if e.is_broken_pipe() => {}
        Err(e) => {
            eprintln!("stree: {}", e);
            process::exit(1);
        }
    }
}
