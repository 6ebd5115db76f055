//! `hasse-calc`: command-line calculator over a +1 rule structure.
//!
//! **Usage:**
//! ```text
//! hasse-calc --rule bhgecea{d,f} eval hg + g
//! hasse-calc --rule bhgecea{d,f} single a / e
//! hasse-calc --rule bhgecea{d,f} single c gcd a
//! hasse-calc --config structure.toml tables --op add
//! hasse-calc --rule abcd diagram --json
//! hasse-calc --rule abcd --bounded --width 2 range
//! ```
//!
//! Flags override values from `--config`. Logs go to stderr; set `RUST_LOG`
//! or pass `-v` to see them.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use hasse::{AlgebraError, Op, Operation, OperationTable, Structure, StructureConfig, UNDEFINED};

/// Positional arithmetic over a user-defined successor cycle.
#[derive(Parser, Debug)]
#[command(name = "hasse-calc", version, about = "Positional arithmetic over a +1 rule")]
struct Cli {
    /// TOML file with `bits`, `rule`, `bounded` and `width`.
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Alphabet size (1-26).
    #[arg(long)]
    bits: Option<usize>,

    /// +1 rule, e.g. `bhgecea{d,f}` or `b-h-g-e`.
    #[arg(long)]
    rule: Option<String>,

    /// Saturate results to the bounded range.
    #[arg(long)]
    bounded: bool,

    /// Digit width of the bounded range (default: bits).
    #[arg(long)]
    width: Option<usize>,

    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Multi-digit operation: + - * / ^ % gcd lcm.
    Eval {
        /// Left operand.
        #[arg(allow_hyphen_values = true)]
        a: String,
        /// Operator.
        #[arg(allow_hyphen_values = true)]
        op: String,
        /// Right operand.
        #[arg(allow_hyphen_values = true)]
        b: String,
    },
    /// Single-element operation: + - * / ^ gcd lcm.
    Single {
        /// Left symbol.
        a: char,
        /// Operator.
        #[arg(allow_hyphen_values = true)]
        op: String,
        /// Right symbol.
        b: char,
    },
    /// Print operation tables.
    Tables {
        /// One of add, sub, mul, div, add-carry, mul-carry (default: all).
        #[arg(long)]
        op: Option<String>,
    },
    /// Print the +1 cycle.
    Diagram {
        /// Emit JSON instead of the arrow listing.
        #[arg(long)]
        json: bool,
    },
    /// Print the bounded range.
    Range,
}

impl Cli {
    fn init_logging(&self) {
        use tracing_subscriber::{fmt, EnvFilter};

        let level = match self.verbose {
            0 => "warn",
            1 => "debug",
            _ => "trace",
        };
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
        fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
    }

    /// File values first, then flags on top.
    fn structure_config(&self) -> Result<StructureConfig> {
        let mut config = match &self.config {
            Some(path) => {
                let text = std::fs::read_to_string(path)
                    .with_context(|| format!("reading {}", path.display()))?;
                StructureConfig::from_toml_str(&text)
                    .with_context(|| format!("parsing {}", path.display()))?
            }
            None => StructureConfig::default(),
        };
        if let Some(bits) = self.bits {
            config.bits = bits;
        }
        if let Some(rule) = &self.rule {
            config.rule = Some(rule.clone());
        }
        if self.bounded {
            config.bounded = true;
        }
        if self.width.is_some() {
            config.width = self.width;
        }
        Ok(config)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.init_logging();

    let config = cli.structure_config()?;
    tracing::debug!(?config, "resolved configuration");
    let structure = Structure::from_config(&config).context("configuring structure")?;
    if !structure.is_initialized() {
        anyhow::bail!("no +1 rule configured; pass --rule or set `rule` in --config");
    }

    match &cli.command {
        Command::Eval { a, op, b } => eval(&structure, a, op, b)?,
        Command::Single { a, op, b } => single(&structure, *a, op, *b)?,
        Command::Tables { op } => tables(&structure, op.as_deref())?,
        Command::Diagram { json } => {
            let diagram = structure.diagram()?;
            if *json {
                println!("{}", serde_json::to_string_pretty(&diagram)?);
            } else {
                println!("{diagram}");
            }
        }
        Command::Range => {
            println!("max: {}", structure.max_value()?);
            println!("min: {}", structure.min_value()?);
            if !structure.is_bounded() {
                println!("(bounded mode is off; pass --bounded to saturate results)");
            }
        }
    }
    Ok(())
}

fn eval(structure: &Structure, a: &str, op: &str, b: &str) -> Result<()> {
    let op: Op = op.parse().with_context(|| format!("operator {op:?}"))?;
    let result = match op {
        Op::Divide => {
            let (q, r) = structure.divide(a, b)?;
            format!("{q} remainder {r}")
        }
        Op::Add => structure.add(a, b)?,
        Op::Subtract => structure.subtract(a, b)?,
        Op::Multiply => structure.multiply(a, b)?,
        Op::Power => structure.power(a, b)?,
        Op::Modulo => structure.modulo(a, b)?,
        Op::Gcd => structure.gcd(a, b)?,
        Op::Lcm => structure.lcm(a, b)?,
    };
    println!("{a} {op} {b} = {result}");
    Ok(())
}

fn single(structure: &Structure, a: char, op: &str, b: char) -> Result<()> {
    match op {
        "+" => {
            let sum = structure.add_single(a, b)?;
            let carry = structure.addition_carry(a, b)?;
            println!("{a} + {b} = {sum} (carry {carry})");
        }
        "-" => {
            let diff = structure.subtract_single(a, b)?;
            let borrow = structure.snapshot()?.subtraction_borrow(a, b)?;
            let note = if borrow { " (borrow)" } else { "" };
            println!("{a} - {b} = {diff}{note}");
        }
        "*" => {
            let product = structure.multiply_single(a, b)?;
            let carry = structure.multiplication_carry(a, b)?;
            println!("{a} * {b} = {product} (carry {carry})");
        }
        "/" => match structure.divide_single(a, b) {
            Ok(q) => println!("{a} / {b} = {q}"),
            Err(AlgebraError::NotInvertible { .. }) => println!("{a} / {b} = {UNDEFINED}"),
            Err(e) => return Err(e.into()),
        },
        "^" => println!("{a} ^ {b} = {}", structure.power_single(a, b)?),
        "gcd" => println!("gcd({a}, {b}) = {}", structure.gcd_single(a, b)?),
        "lcm" => println!("lcm({a}, {b}) = {}", structure.lcm_single(a, b)?),
        other => {
            anyhow::bail!("unknown single-element operator {other:?}; expected + - * / ^ gcd lcm")
        }
    }
    Ok(())
}

fn tables(structure: &Structure, op: Option<&str>) -> Result<()> {
    let tables = match op {
        Some(name) => {
            let operation: Operation = name.parse().with_context(|| format!("table {name:?}"))?;
            vec![structure.table(operation)?]
        }
        None => OperationTable::all(&structure.snapshot()?),
    };
    for table in tables {
        println!("{table}");
    }
    Ok(())
}
