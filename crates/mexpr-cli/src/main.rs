use clap::{Parser, Subcommand, ValueEnum};
use mexpr_parser::{diagnostic, LogTrace, NoTrace, ParseOutcome, SymbolTable, Trace};
use std::io::Read;

#[derive(Parser)]
#[command(name = "mexpr")]
#[command(about = "mexpr: parse arithmetic expressions over symbols")]
#[command(version)]
struct Cli {
    /// Log every grammar level the parser enters
    #[arg(long, global = true)]
    trace: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Parse an expression and print its tree
    Parse {
        /// Expression text, or `-` to read from stdin
        expr: String,

        /// Output form
        #[arg(long, value_enum, default_value_t = Format::Canonical)]
        format: Format,
    },

    /// Check an expression for errors without printing the tree
    Check {
        /// Expression text, or `-` to read from stdin
        expr: String,
    },

    /// List each distinct symbol with the offsets it occurs at
    Symbols {
        /// Expression text, or `-` to read from stdin
        expr: String,
    },
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Fully parenthesised source, e.g. `(a + (b * c))`
    Canonical,
    /// Prefix form, e.g. `(+ a (* b c))`
    Sexpr,
}

fn main() {
    let cli = Cli::parse();
    init_logger(cli.trace);

    let trace: &dyn Trace = if cli.trace { &LogTrace } else { &NoTrace };
    let parser = mexpr_parser::Parser::with_trace(trace);

    match cli.command {
        Command::Parse { expr, format } => cmd_parse(&parser, &expr, format),
        Command::Check { expr } => cmd_check(&parser, &expr),
        Command::Symbols { expr } => cmd_symbols(&parser, &expr),
    }
}

/// `RUST_LOG` wins; `--trace` only raises the default.
fn init_logger(trace: bool) {
    let default = if trace { "trace" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default))
        .format_timestamp(None)
        .init();
}

fn read_source(expr: &str) -> String {
    if expr != "-" {
        return expr.to_string();
    }
    let mut source = String::new();
    if let Err(e) = std::io::stdin().read_to_string(&mut source) {
        eprintln!("Error reading stdin: {e}");
        std::process::exit(1);
    }
    source
}

/// Parse or exit with the rendered diagnostic.
fn parse_or_exit(parser: &mexpr_parser::Parser<'_>, source: &str) -> ParseOutcome {
    match parser.parse_str(source) {
        Ok(outcome) => outcome,
        Err(e) => {
            log::debug!("{e}");
            eprint!("{}", diagnostic::render(source, &e));
            std::process::exit(1);
        }
    }
}

fn cmd_parse(parser: &mexpr_parser::Parser<'_>, expr: &str, format: Format) {
    let source = read_source(expr);
    let outcome = parse_or_exit(parser, &source);

    let printed = match format {
        Format::Canonical => mexpr_printer::canonical(&outcome.expression),
        Format::Sexpr => mexpr_printer::sexpr(&outcome.expression),
    };
    println!("{printed}");
}

fn cmd_check(parser: &mexpr_parser::Parser<'_>, expr: &str) {
    let source = read_source(expr);
    parse_or_exit(parser, &source);
    println!("OK");
}

fn cmd_symbols(parser: &mexpr_parser::Parser<'_>, expr: &str) {
    let source = read_source(expr);
    let outcome = parse_or_exit(parser, &source);

    for (name, positions) in SymbolTable::from_outcome(&outcome).iter() {
        let positions: Vec<String> = positions.iter().map(usize::to_string).collect();
        println!("{name}\t{}", positions.join(","));
    }
}
