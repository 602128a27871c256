use std::io::{self, stdin, stdout, BufRead, Write};
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::builder::{PossibleValuesParser, TypedValueParser};
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use tallybar::{Style, TallyBar};
use version::version;

fn cli() -> Command {
    Command::new("tly")
        .version(version!())
        .about("Draw a progress bar, ticking once per record read from stdin")
        .arg(
            Arg::new("total")
                .long("total")
                .required(true)
                .value_parser(value_parser!(i64))
                .help("int\nThe number of expected records."),
        )
        .arg(
            Arg::new("width")
                .long("width")
                .default_value("40")
                .value_parser(value_parser!(usize))
                .help("int, optional\nNumber of cells in the bar."),
        )
        .arg(
            Arg::new("fill")
                .long("fill")
                .default_value("#")
                .value_parser(value_parser!(char))
                .help("chr, optional\nSymbol of completed cells."),
        )
        .arg(
            Arg::new("style")
                .long("style")
                .value_parser(
                    PossibleValuesParser::new(["ascii", "block", "balloon"])
                        .try_map(|s| s.parse::<Style>()),
                )
                .help("str, optional\nPreset fill symbol, overrides --fill."),
        )
        .arg(
            Arg::new("caps")
                .long("caps")
                .value_parser(parse_caps)
                .help("str, optional\nTwo characters bracketing the bar [default: '[]']."),
        )
        .arg(
            Arg::new("percent")
                .long("percent")
                .action(ArgAction::SetTrue)
                .help("Show the percentage."),
        )
        .arg(
            Arg::new("count")
                .long("count")
                .action(ArgAction::SetTrue)
                .help("Show the counter."),
        )
        .arg(
            Arg::new("template")
                .long("template")
                .help("str, optional\nLine layout using {bar}, {percent} and {count}."),
        )
        .arg(
            Arg::new("delim")
                .long("delim")
                .default_value("\n")
                .hide_default_value(true)
                .value_parser(value_parser!(char))
                .help("chr, optional\nDelimiting character [default: '\\n']."),
        )
        .arg(
            Arg::new("debug")
                .long("debug")
                .action(ArgAction::SetTrue)
                .help("Enable debug logging on stderr."),
        )
}

fn parse_caps(s: &str) -> std::result::Result<(char, char), String> {
    let mut chars = s.chars();
    match (chars.next(), chars.next(), chars.next()) {
        (Some(start), Some(end), None) => Ok((start, end)),
        _ => Err(format!("expected exactly two characters, got {:?}", s)),
    }
}

fn init_logging(debug: bool) {
    if debug {
        env_logger::Builder::from_env(env_logger::Env::default())
            .filter_level(log::LevelFilter::Debug)
            .format_timestamp_millis()
            .init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }
}

/// Build the progress bar described by the command line
fn build_bar(matches: &ArgMatches) -> Result<TallyBar> {
    let total = *matches.get_one::<i64>("total").context("missing --total")?;
    let width = *matches.get_one::<usize>("width").context("missing --width")?;
    let fill = *matches.get_one::<char>("fill").context("missing --fill")?;

    let mut bar = TallyBar::new(fill, width, total)?;
    bar.set_show_percentage(matches.get_flag("percent"))
        .set_show_counter(matches.get_flag("count"));

    if let Some(style) = matches.get_one::<Style>("style") {
        bar.set_style(*style);
    }
    if let Some((start, end)) = matches.get_one::<(char, char)>("caps") {
        bar.set_caps(*start, *end);
    }
    if let Some(template) = matches.get_one::<String>("template") {
        bar.set_template(template);
    }

    Ok(bar)
}

fn run(matches: &ArgMatches) -> Result<()> {
    let delim = *matches.get_one::<char>("delim").context("missing --delim")?;
    if !delim.is_ascii() {
        bail!("delimiter must be an ascii character, got {:?}", delim);
    }

    let mut bar = build_bar(matches)?;
    bar.display()?;

    for record in stdin().lock().split(delim as u8) {
        record.context("failed to read stdin")?;
        bar.tick().display()?;
    }
    log::debug!("read {} records", bar.current());

    // Leave the cursor below an unfinished bar
    if !bar.is_complete() {
        writeln!(stdout())?;
    }
    Ok(())
}

fn main() -> ExitCode {
    let matches = cli().get_matches();
    init_logging(matches.get_flag("debug"));

    match run(&matches) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) if is_broken_pipe(&err) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("tly: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn is_broken_pipe(err: &anyhow::Error) -> bool {
    err.downcast_ref::<io::Error>()
        .map_or(false, |err| err.kind() == io::ErrorKind::BrokenPipe)
}
