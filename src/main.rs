//! flowchart-ascii CLI entry point.

use std::fs;
use std::io::{self, Read, Write};
use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use flowchart_ascii::{CharSet, RenderConfig, render_script};

/// Render a flowchart script as box-drawing text.
#[derive(Parser, Debug)]
#[command(
    name = "flowchart-ascii",
    version = env!("FLOWCHART_ASCII_VERSION"),
    about = "Render a flowchart script as box-drawing text"
)]
struct Cli {
    /// Script file (reads from stdin if not provided)
    input: Option<String>,

    /// Use plain ASCII instead of Unicode box-drawing characters
    #[arg(short = 'a', long = "ascii")]
    use_ascii: bool,

    /// Write output to this file instead of stdout
    #[arg(short = 'o', long = "output")]
    output: Option<String>,

    /// Width of every node box (3-200)
    #[arg(
        long = "node-width",
        default_value = "25",
        value_parser = clap::value_parser!(u16).range(3..=200)
    )]
    node_width: u16,

    /// Height of every node box (3-200)
    #[arg(
        long = "node-height",
        default_value = "5",
        value_parser = clap::value_parser!(u16).range(3..=200)
    )]
    node_height: u16,

    /// Rows between vertically adjacent boxes (0-100)
    #[arg(
        long = "v-spacing",
        default_value = "3",
        value_parser = clap::value_parser!(u16).range(0..=100)
    )]
    v_spacing: u16,

    /// Columns between horizontally adjacent boxes (0-100)
    #[arg(
        long = "h-spacing",
        default_value = "7",
        value_parser = clap::value_parser!(u16).range(0..=100)
    )]
    h_spacing: u16,

    /// Log layout and builder decisions to stderr
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("flowchart_ascii=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .without_time()
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Read input from file or stdin
    let text = if let Some(ref path) = cli.input {
        match fs::read_to_string(path) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("error: cannot read '{}': {}", path, e);
                process::exit(1);
            }
        }
    } else {
        let mut buf = String::new();
        if let Err(e) = io::stdin().read_to_string(&mut buf) {
            eprintln!("error: cannot read stdin: {}", e);
            process::exit(1);
        }
        buf
    };

    let config = RenderConfig {
        node_width: cli.node_width.into(),
        node_height: cli.node_height.into(),
        v_spacing: cli.v_spacing.into(),
        h_spacing: cli.h_spacing.into(),
        charset: if cli.use_ascii {
            CharSet::Ascii
        } else {
            CharSet::Unicode
        },
    };

    let mut rendered = match render_script(&text, &config) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("error: {}", e);
            process::exit(1);
        }
    };
    rendered.push('\n');

    // Write output to file or stdout
    if let Some(ref path) = cli.output {
        if let Err(e) = fs::write(path, rendered) {
            eprintln!("error: cannot write '{}': {}", path, e);
            process::exit(1);
        }
    } else {
        print!("{}", rendered);
        if let Err(e) = io::stdout().flush() {
            eprintln!("error: cannot flush stdout: {}", e);
            process::exit(1);
        }
    }
}
