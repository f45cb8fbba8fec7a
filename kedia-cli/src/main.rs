use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use kedia_core::{category_totals, Category, DateRange, Flow, ParsedTransaction};
use kedia_parser::TransactionParser;
use serde::Serialize;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

mod config;

#[derive(Parser, Debug)]
#[command(
    name = "kedia",
    version,
    about = "Turn quick expense notes like \"500 pizza parso\" into transactions"
)]
struct Cli {
    /// Log parser decisions to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse a single phrase
    Parse {
        /// Phrase words, e.g. `kedia parse 200 uber 2 days back`
        #[arg(required = true, num_args = 1..)]
        words: Vec<String>,

        /// Reference date for "kal", "parso", "N days back" (default: today)
        #[arg(long)]
        today: Option<NaiveDate>,

        /// Use this date instead of the one found in the phrase
        #[arg(long)]
        date: Option<NaiveDate>,

        /// Money came in (amount stays positive); default is a debit
        #[arg(long)]
        credit: bool,

        /// Print the record as JSON
        #[arg(long)]
        json: bool,

        /// Show which keyword picked the category
        #[arg(long)]
        explain: bool,
    },

    /// Parse one phrase per line from a file (or `-` for stdin) and write CSV
    Batch {
        file: PathBuf,

        /// Reference date for relative dates (default: today)
        #[arg(long)]
        today: Option<NaiveDate>,

        /// Print per-category totals instead of CSV rows
        #[arg(long)]
        summary: bool,

        /// First day counted in the summary (inclusive)
        #[arg(long, requires_all = ["summary", "to"])]
        from: Option<NaiveDate>,

        /// Last day counted in the summary (inclusive)
        #[arg(long, requires_all = ["summary", "from"])]
        to: Option<NaiveDate>,
    },

    /// Print the category keyword table in match order
    Categories,

    /// Manage ~/.kedia/config.toml
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Write the default config if none exists
    Init,
    /// Print the config file location
    Path,
}

#[derive(Serialize)]
struct ParseOutput<'a> {
    #[serde(flatten)]
    txn: &'a ParsedTransaction,
    flow: Flow,
    signed_amount: f64,
}

#[derive(Serialize)]
struct BatchRow<'a> {
    date: NaiveDate,
    amount: f64,
    category: Category,
    description: &'a str,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Command::Parse {
            words,
            today,
            date,
            credit,
            json,
            explain,
        } => {
            let cfg = config::load_config()?;
            let today = match today {
                Some(d) => d,
                None => cfg.today()?,
            };
            let parser = TransactionParser::new(cfg.keywords);
            let text = words.join(" ");

            let mut txn = parser
                .parse(&text, today)
                .with_context(|| format!("parsing {text:?}"))?;
            if let Some(d) = date {
                txn = txn.with_date(d);
            }
            let flow = if credit { Flow::Credit } else { Flow::Debit };

            if json {
                let out = ParseOutput {
                    txn: &txn,
                    flow,
                    signed_amount: txn.signed_amount(flow),
                };
                println!("{}", serde_json::to_string_pretty(&out)?);
            } else {
                print_transaction(&txn, flow);
            }

            if explain {
                match parser.keywords().matching_keyword(&txn.description) {
                    Some((category, keyword)) => {
                        println!("matched keyword \"{keyword}\" -> {category}")
                    }
                    None => println!("no keyword matched -> {}", Category::Other),
                }
            }
        }

        Command::Batch {
            file,
            today,
            summary,
            from,
            to,
        } => {
            let cfg = config::load_config()?;
            let today = match today {
                Some(d) => d,
                None => cfg.today()?,
            };
            let parser = TransactionParser::new(cfg.keywords);
            let txns = parse_lines(&parser, &file, today)?;

            if summary {
                let range = from.zip(to);
                if let Some((start, end)) = range {
                    if start > end {
                        bail!("--from {start} is after --to {end}");
                    }
                }
                print_summary(&txns, range);
            } else {
                write_csv(&txns)?;
            }
        }

        Command::Categories => {
            let cfg = config::load_config()?;
            for (category, keywords) in cfg.keywords.iter() {
                println!("{:<14} {}", category, keywords.join(", "));
            }
            println!("{:<14} (fallback)", Category::Other);
        }

        Command::Config { command } => match command {
            ConfigCommand::Init => config::init_config()?,
            ConfigCommand::Path => println!("{}", config::config_path()?.display()),
        },
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = if verbose {
        EnvFilter::new("kedia_cli=debug,kedia_parser=debug,kedia_core=debug")
    } else if std::env::var_os("RUST_LOG").is_some() {
        EnvFilter::from_default_env()
    } else {
        return;
    };

    fmt().with_env_filter(filter).with_writer(io::stderr).init();
}

fn print_transaction(txn: &ParsedTransaction, flow: Flow) {
    let description = if txn.has_description() {
        txn.description.as_str()
    } else {
        "(none)"
    };
    println!("date:        {}", txn.date);
    println!("amount:      {:.2} ({:?})", txn.signed_amount(flow), flow);
    println!("category:    {}", txn.category);
    println!("description: {}", description);
}

fn parse_lines(
    parser: &TransactionParser,
    file: &Path,
    today: NaiveDate,
) -> Result<Vec<ParsedTransaction>> {
    let reader: Box<dyn BufRead> = if file.as_os_str() == "-" {
        Box::new(BufReader::new(io::stdin()))
    } else {
        let f = std::fs::File::open(file).with_context(|| format!("opening {}", file.display()))?;
        Box::new(BufReader::new(f))
    };

    let mut txns = Vec::new();
    let mut skipped = 0usize;

    for (i, line) in reader.lines().enumerate() {
        let line = line.with_context(|| format!("reading line {}", i + 1))?;
        let text = line.trim();
        if text.is_empty() {
            continue;
        }

        match parser.parse(text, today) {
            Ok(txn) => txns.push(txn),
            Err(e) => {
                warn!(line = i + 1, text, "skipping: {e}");
                skipped += 1;
            }
        }
    }

    info!(parsed = txns.len(), skipped, "batch done");
    eprintln!("parsed {}, skipped {skipped}", txns.len());
    Ok(txns)
}

fn write_csv(txns: &[ParsedTransaction]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(io::stdout());
    for txn in txns {
        wtr.serialize(BatchRow {
            date: txn.date,
            amount: txn.amount,
            category: txn.category,
            description: &txn.description,
        })?;
    }
    wtr.flush()?;
    Ok(())
}

fn print_summary(txns: &[ParsedTransaction], range: Option<DateRange>) {
    let totals = category_totals(txns, range);
    if totals.is_empty() {
        println!("no transactions to total");
        return;
    }
    for (category, total) in &totals {
        println!("{:<14} {:>10.2}", category, total);
    }
    println!("{:<14} {:>10.2}", "Total", totals.values().sum::<f64>());
}
