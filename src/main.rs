//! Param Packer - wordlist to query-string payloads
//!
//! Main entry point for the command-line application.

use anyhow::Context;
use std::io::{self, Write};
use std::process;

use param_packer::cli::Args;
use param_packer::console::{print_error_chain, print_warning};
use param_packer::input::{read_raw_lines, resolve_channel, stdin_is_piped, Channel};
use param_packer::normalize::normalize;
use param_packer::paginate::Paginator;

fn main() {
    // Parse command-line arguments
    let args = Args::parse_with_legacy_flags();

    // Logs go to stderr; stdout is reserved for payloads
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Stderr)
        .init();

    if let Err(e) = run(args) {
        print_error_chain(&e);
        process::exit(1);
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    let piped = stdin_is_piped()?;
    let channel = resolve_channel(args.file_path(), args.interactive, piped)?;

    let paginator = Paginator::new(args.chunk_size(), args.interactive_output);
    warn_about_output_mode(&args, &paginator, &channel);

    let stdin = io::stdin();
    let mut stderr = io::stderr();

    let lines = read_raw_lines(&channel, stdin.lock(), &mut stderr)?;
    let words = normalize(lines);
    log::debug!("Normalized {} words", words.len());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let summary = paginator
        .run(words.as_slice(), &mut out, &mut stderr, &mut stdin.lock())
        .context("failed to write payload")?;
    out.flush().context("failed to write payload")?;

    log::debug!(
        "Emitted {} words in {} chunk(s)",
        summary.words,
        summary.chunks
    );

    Ok(())
}

/// Flag combinations that work but probably don't do what was meant
fn warn_about_output_mode(args: &Args, paginator: &Paginator, channel: &Channel) {
    if !paginator.is_interactive() {
        return;
    }

    if !paginator.is_chunked() {
        print_warning("-oi has no effect without -n <size>; printing a single payload");
    } else if *channel == Channel::Piped {
        print_warning("-oi reads confirmations from stdin, which is the piped wordlist; chunks will not pause");
    }

    log::debug!("Interactive output, chunk size {}", args.chunk_size);
}
