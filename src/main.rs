use std::io::{self, Write};
use std::process;

use clap::{App, Arg, ArgMatches};
use tracing::warn;
use tracing_subscriber::EnvFilter;

use pileshuffle::mixing::{self, Reference};
use pileshuffle::{parse_deck_size, sweep, Error, Method, Result, RoundCount, Simulation};

fn app<'a, 'b>() -> App<'a, 'b> {
    App::new("pileshuffle")
        .about("Count the pile shuffle rounds needed to put a deck back in order")
        .arg(
            Arg::with_name("DECK_SIZE")
                .help("Number of cards in the deck")
                .required_unless("sweep")
                .index(1),
        )
        .arg(
            Arg::with_name("method")
                .help("How the round count is computed")
                .short("m")
                .long("method")
                .takes_value(true)
                .possible_values(&Method::NAMES)
                .default_value("simulate"),
        )
        .arg(
            Arg::with_name("show-deck")
                .long("show-deck")
                .help("Print the deck after every round"),
        )
        .arg(
            Arg::with_name("mixing")
                .long("mixing")
                .value_name("ROUNDS")
                .takes_value(true)
                .conflicts_with("show-deck")
                .help("Print how mixed the deck is for the first ROUNDS rounds"),
        )
        .arg(
            Arg::with_name("sweep")
                .long("sweep")
                .value_name("RANGE")
                .takes_value(true)
                .conflicts_with_all(&["DECK_SIZE", "show-deck", "mixing"])
                .help("Count rounds for every deck size in RANGE, e.g. 1..=52"),
        )
}

fn run<W: Write>(matches: &ArgMatches, out: &mut W) -> Result<()> {
    let method = matches
        .value_of("method")
        .and_then(|m| m.parse::<Method>().ok())
        .unwrap_or_default();

    if let Some(range) = matches.value_of("sweep") {
        let sizes = sweep::parse_range(range)?;
        for (cards, rounds) in sweep::sweep(sizes, method)? {
            writeln!(out, "{} {}", cards, rounds)?;
        }
        return Ok(());
    }

    let cards = parse_deck_size(matches.value_of("DECK_SIZE").unwrap_or(""))?;

    if let Some(limit) = matches.value_of("mixing") {
        let limit: RoundCount = limit
            .trim()
            .parse()
            .map_err(|_| Error::InvalidRoundLimit(limit.to_owned()))?;
        let reference = Reference::for_deck(cards);
        writeln!(
            out,
            "{:>6} {:>6} {:>8} {:>8} {:>8}",
            "round", "piles", "rising", "fixed", "adjacent"
        )?;
        writeln!(
            out,
            "{:>6} {:>6} {:>8.1} {:>8.1} {:>8.1}",
            "random",
            "",
            reference.rising_sequences,
            reference.fixed_points,
            reference.adjacencies
        )?;
        for row in mixing::report(cards, limit)? {
            writeln!(out, "{}", row)?;
        }
        return Ok(());
    }

    let rounds = if matches.is_present("show-deck") {
        if method != Method::Simulate {
            warn!(%method, "--show-deck always simulates");
        }
        let mut sim = Simulation::new(cards)?;
        writeln!(out, "{}", sim.deck())?;
        let mut result = Ok(());
        let rounds = sim.run_with(|_, _, deck| {
            if result.is_ok() {
                result = writeln!(out, "{}", deck);
            }
        });
        result?;
        rounds
    } else {
        method.rounds(cards)?
    };
    writeln!(out, "Number of shuffles: {}", rounds)?;
    Ok(())
}

/// Report a failed run on `err` and return the exit status
fn fail<W: Write>(e: &Error, usage: &str, err: &mut W) -> i32 {
    let _ = writeln!(err, "{}", e);
    if e.is_usage() {
        let _ = writeln!(err, "{}", usage);
    }
    1
}

pub fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let matches = app().get_matches();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = run(&matches, &mut out) {
        process::exit(fail(&e, matches.usage(), &mut io::stderr()));
    }
}
