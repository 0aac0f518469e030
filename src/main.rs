//! # chatlens CLI
//!
//! Command-line front end for the chatlens library.

use std::fmt::Write as _;
use std::fs;
use std::io::{self, Write};
use std::process;

use tracing_subscriber::EnvFilter;

use chatlens::cli::{Args, OutputFormat};
use chatlens::export::to_export_text;
use chatlens::format::to_format_string;
use chatlens::{ChatData, ChatParser, ChatlensError};

fn main() {
    let args = Args::try_parse_checked_from(std::env::args_os()).unwrap_or_else(|e| e.exit());
    init_logging(args.verbose);

    if let Err(e) = run(&args) {
        if e.is_unparseable() {
            eprintln!("{e}");
        } else {
            eprintln!("Error: {e}");
        }
        process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .init();
}

fn run(args: &Args) -> Result<(), ChatlensError> {
    tracing::debug!(input = %args.input.display(), format = %args.format, "parsing chat log");

    let parser = ChatParser::with_config(args.parser_config());
    let chat = parser.parse(&args.input)?;

    let rendered = if args.summary {
        render_summary(&chat)
    } else {
        render(&chat, args.format)?
    };

    match &args.output {
        Some(path) => {
            fs::write(path, rendered)?;
            tracing::debug!(output = %path.display(), "output written");
        }
        None => io::stdout().lock().write_all(rendered.as_bytes())?,
    }
    Ok(())
}

fn render(chat: &ChatData, format: OutputFormat) -> Result<String, ChatlensError> {
    match format.to_library() {
        Some(format) => to_format_string(chat, format),
        None => Ok(to_export_text(&chat.messages)),
    }
}

fn render_summary(chat: &ChatData) -> String {
    let participants: Vec<&str> = chat.participants.iter().map(String::as_str).collect();
    let mut out = String::new();
    let _ = writeln!(out, "Participants:  {}", participants.join(", "));
    let _ = writeln!(
        out,
        "Date range:    {} .. {}",
        chat.date_range.start, chat.date_range.end
    );
    let _ = writeln!(out, "Messages:      {}", chat.total_messages);
    let _ = writeln!(out, "Text messages: {}", chat.text_messages);
    let _ = writeln!(out, "Media:         {}", chat.media_messages);
    out
}
