use std::env;
use std::io::IsTerminal;
use std::process;

use crate::converter::Target;
use crate::error::RtError;
use crate::input::Source;

/// Built-in sample document for `--sample`.
pub const SAMPLE_INPUT: &str = concat!(
    "{char:H}{char:e}{char:l}{char:l}{char:o} ",
    "{font:bold}{char:W}{char:o}{char:r}{char:l}{char:d}{font:bold} ",
    "{font:italic}{char:!}{font:italic}{par}",
    "{char:A}{font:bold}{font:italic}{char:B}{char:C}{font:bold}{font:italic}",
);

/// Which formats to print.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetChoice {
    One(Target),
    All,
}

impl TargetChoice {
    pub fn targets(self) -> Vec<Target> {
        match self {
            TargetChoice::One(t) => vec![t],
            TargetChoice::All => Target::ALL.to_vec(),
        }
    }
}

#[derive(Debug)]
pub struct Args {
    pub target: TargetChoice,
    pub sources: Vec<Source>,
    pub tokens: bool,
    pub quiet: bool,
    pub stats: bool,
    pub color: bool,
    pub sample: bool,
}

/// Outcome of argument parsing that isn't a conversion run.
#[derive(Debug)]
pub enum Command {
    Run(Args),
    Help,
    Version,
}

/// Parse the process arguments, exiting on `--help`, `--version` or a usage
/// error.
pub fn parse_args() -> Args {
    let args: Vec<String> = env::args().skip(1).collect();
    match parse(&args, std::io::stdout().is_terminal()) {
        Ok(Command::Run(a)) => a,
        Ok(Command::Help) => {
            print_usage();
            process::exit(0);
        }
        Ok(Command::Version) => {
            println!("rtconv {}", env!("CARGO_PKG_VERSION"));
            process::exit(0);
        }
        Err(e) => {
            eprintln!("rtconv: {}", e);
            eprintln!("Try 'rtconv --help' for usage.");
            process::exit(1);
        }
    }
}

/// Parse `args` (without the program name). `tty` is the default for
/// coloured headings.
pub fn parse(args: &[String], tty: bool) -> Result<Command, RtError> {
    let mut target = TargetChoice::All;
    let mut sources: Vec<Source> = Vec::new();
    let mut tokens = false;
    let mut quiet = false;
    let mut stats = false;
    let mut color = tty;
    let mut sample = false;

    let mut i = 0;
    while i < args.len() {
        let arg = &args[i];

        if arg == "--" {
            // Everything after -- is a file operand
            sources.extend(args[i + 1..].iter().map(|a| Source::from_operand(a)));
            break;
        }

        if arg == "-t" || arg == "--to" {
            i += 1;
            let value = args
                .get(i)
                .ok_or_else(|| RtError::new(format!("{} requires an argument", arg)))?;
            target = parse_target(value)?;
        } else if let Some(value) = arg.strip_prefix("--to=") {
            target = parse_target(value)?;
        } else if let Some(value) = arg.strip_prefix("-t") {
            target = parse_target(value)?;
        } else if arg == "-e" {
            i += 1;
            let text = args
                .get(i)
                .ok_or_else(|| RtError::new("-e requires an argument"))?;
            sources.push(Source::Inline(text.clone()));
        } else if arg == "--tokens" {
            tokens = true;
        } else if arg == "-q" || arg == "--quiet" {
            quiet = true;
        } else if arg == "--stats" {
            stats = true;
        } else if arg == "--color" {
            color = true;
        } else if arg == "--no-color" {
            color = false;
        } else if arg == "--sample" {
            sample = true;
        } else if arg == "-h" || arg == "--help" {
            return Ok(Command::Help);
        } else if arg == "--version" {
            return Ok(Command::Version);
        } else if arg.starts_with('-') && arg.len() > 1 {
            return Err(RtError::new(format!("unknown option: {}", arg)));
        } else {
            sources.push(Source::from_operand(arg));
        }

        i += 1;
    }

    if sample {
        sources.insert(0, Source::Inline(SAMPLE_INPUT.to_string()));
    }
    if sources.is_empty() {
        sources.push(Source::Stdin);
    }

    Ok(Command::Run(Args { target, sources, tokens, quiet, stats, color, sample }))
}

fn parse_target(s: &str) -> Result<TargetChoice, RtError> {
    if s == "all" {
        return Ok(TargetChoice::All);
    }
    s.parse().map(TargetChoice::One)
}

fn print_usage() {
    eprintln!(
        "rtconv {} - convert {{char}}/{{font}}/{{par}} token streams",
        env!("CARGO_PKG_VERSION")
    );
    eprintln!();
    eprintln!("Usage: rtconv [options] [file ...]");
    eprintln!("       rtconv [options] -e 'text'");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -t, --to target  ascii, tex, widget or all (default: all)");
    eprintln!("  -e text          Convert text instead of reading files (repeatable)");
    eprintln!("  --sample         Convert the built-in sample document");
    eprintln!("  --tokens         Print the token scan instead of converting");
    eprintln!("  --stats          Print a token summary per document to stderr");
    eprintln!("  -q, --quiet      Don't warn about unparsed trailing input");
    eprintln!("  --color          Colour headings even when not on a terminal");
    eprintln!("  --no-color       Never colour headings");
    eprintln!("  -h, --help       Show this help");
    eprintln!();
    eprintln!("  With no file and no -e, reads stdin. '-' also means stdin.");
    eprintln!();
    eprintln!("Tokens:");
    eprintln!("  {{char:X}}  one character    {{font:bold|italic|underline}}  toggle style");
    eprintln!("  {{par}}     paragraph break  anything else is skipped");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  rtconv -t tex -e '{{font:bold}}{{char:A}}{{font:bold}}'");
    eprintln!("  rtconv --to widget doc.txt");
    eprintln!("  rtconv --tokens --sample");
}
