//! Command-line interface for txt2latex
//!
//! Usage:
//!   txt2latex translate `<expression>`  - Print the LaTeX for an expression
//!   txt2latex operators                - List the operators and how they render
use clap::{Arg, Command};
use log::LevelFilter;
use txt2latex::{operators, translate, Operator};

const LOG_LEVELS: [&str; 6] = ["off", "error", "warn", "info", "debug", "trace"];

fn main() {
    let matches = Command::new("txt2latex")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Translate text expressions to LaTeX expressions")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("log-level")
                .long("log-level")
                .short('l')
                .global(true)
                .help("The level used for filtering log messages")
                .value_parser(LOG_LEVELS)
                .default_value("warn"),
        )
        .subcommand(
            Command::new("translate")
                .about("Translate an expression")
                .arg(
                    Arg::new("expression")
                        .help("The expression to translate")
                        .required(true)
                        .index(1),
                ),
        )
        .subcommand(Command::new("operators").about("List the available operators"))
        .get_matches();

    let level = matches
        .get_one::<String>("log-level")
        .and_then(|level| level.parse().ok())
        .unwrap_or(LevelFilter::Warn);
    env_logger::Builder::new().filter_level(level).init();

    match matches.subcommand() {
        Some(("translate", translate_matches)) => {
            let expression = translate_matches
                .get_one::<String>("expression")
                .map(String::as_str)
                .unwrap_or_default();
            handle_translate_command(expression);
        }
        Some(("operators", _)) => handle_operators_command(),
        _ => unreachable!(),
    }
}

/// Handle the translate command
fn handle_translate_command(expression: &str) {
    log::info!("starting translation");
    match translate(expression) {
        Ok(latex) => println!("{latex}"),
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    }
}

/// Handle the operators command
fn handle_operators_command() {
    println!("{:<8}{:<12}renders as", "symbol", "precedence");
    for op in std::iter::once(Operator::NULL).chain(operators().sorted()) {
        println!("{:<8}{:<12}{}", symbol(&op), op.precedence, pattern(&op));
    }
}

fn symbol(op: &Operator) -> String {
    if op.is_null() {
        "(none)".into()
    } else {
        op.symbol.map(String::from).unwrap_or_default()
    }
}

fn pattern(op: &Operator) -> String {
    op.format(Some("a"), "b")
}
