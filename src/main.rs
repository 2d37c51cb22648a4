use std::io::{self, Write};
use std::process;

use rtconv::cli::{self, Args, TargetChoice};
use rtconv::format::{self, AnsiTheme, Role};
use rtconv::input::Source;
use rtconv::reader::Reader;

/// Convert one document. `Ok(false)` means the source couldn't be read.
fn convert_source(
    args: &Args,
    source: &Source,
    theme: &AnsiTheme,
    out: &mut impl Write,
) -> io::Result<bool> {
    let text = match source.read() {
        Ok(t) => t,
        Err(e) => {
            eprintln!("rtconv: {}", e);
            return Ok(false);
        }
    };

    if args.tokens {
        write!(out, "{}", format::token_dump(theme, Reader::silent().tokens(&text)))?;
        return Ok(true);
    }

    let reader = if args.quiet { Reader::silent() } else { Reader::new() };

    match args.target {
        TargetChoice::One(target) => {
            let mut conv = target.converter();
            let report = reader.parse(&text, conv.as_mut());
            writeln!(out, "{}", conv.result())?;
            if args.stats {
                eprintln!("rtconv: {}: {}", source.name(), report.summary());
            }
        }
        TargetChoice::All => {
            let is_sample = matches!(source, Source::Inline(t) if t == cli::SAMPLE_INPUT);
            let title = if args.sample && is_sample {
                "Sample Input".to_string()
            } else {
                format!("Input ({})", source.name())
            };
            writeln!(out, "{}", format::heading(theme, Role::Section, &title))?;
            writeln!(out, "{}", text)?;
            writeln!(out)?;
            for (i, target) in args.target.targets().into_iter().enumerate() {
                let mut conv = target.converter();
                // Every target scans the same text; warn on the first pass only.
                let reader = if i == 0 { reader } else { Reader::silent() };
                let report = reader.parse(&text, conv.as_mut());
                writeln!(out, "{}", format::heading(theme, Role::Target, target.title()))?;
                writeln!(out, "{}", conv.result())?;
                writeln!(out)?;
                writeln!(out, "{}", format::rule(theme))?;
                writeln!(out)?;
                if args.stats && i == 0 {
                    eprintln!("rtconv: {}: {}", source.name(), report.summary());
                }
            }
        }
    }
    Ok(true)
}

fn main() {
    let args = cli::parse_args();
    let theme = if args.color { AnsiTheme::dark() } else { AnsiTheme::none() };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut failed = false;

    for source in &args.sources {
        match convert_source(&args, source, &theme, &mut out) {
            Ok(true) => {}
            Ok(false) => failed = true,
            Err(e) if e.kind() == io::ErrorKind::BrokenPipe => return,
            Err(e) => {
                eprintln!("rtconv: write error: {}", e);
                process::exit(1);
            }
        }
    }

    if let Err(e) = out.flush()
        && e.kind() != io::ErrorKind::BrokenPipe
    {
        eprintln!("rtconv: write error: {}", e);
        process::exit(1);
    }

    if failed {
        process::exit(2);
    }
}
