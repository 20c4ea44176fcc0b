use anyhow::Context;
use arkhamcalc::print::{chance_report, percent};
use arkhamcalc::{exact_chance, success_chance, Approx, Status, MAX_DICE};
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum StatusArg {
    Normal,
    Blessed,
    Cursed,
}

impl From<StatusArg> for Status {
    fn from(value: StatusArg) -> Self {
        match value {
            StatusArg::Normal => Status::Normal,
            StatusArg::Blessed => Status::Blessed,
            StatusArg::Cursed => Status::Cursed,
        }
    }
}

/// Chance of rolling at least some number of successes on a pool of d6.
#[derive(Debug, Parser)]
#[command(name = "arkhamcalc", version)]
struct Cli {
    /// Number of dice rolled
    #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..=i64::from(MAX_DICE)))]
    dice: u32,

    /// Number of successes needed
    #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..=i64::from(MAX_DICE)))]
    successes: u32,

    /// Status of the roller
    #[arg(long, value_enum, default_value_t = StatusArg::Normal)]
    status: StatusArg,

    /// Decimal places shown for percentages
    #[arg(short, long)]
    precision: Option<usize>,

    /// Print the chance of every success threshold for the pool
    #[arg(long)]
    table: bool,

    /// Also print the exact fraction
    #[arg(long)]
    exact: bool,

    /// Also estimate the chance by rolling this many pools
    #[arg(long, value_name = "SAMPLES")]
    simulate: Option<u32>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "arkhamcalc=warn".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    print!("{}", render(&cli)?);
    Ok(())
}

fn render(cli: &Cli) -> anyhow::Result<String> {
    let status = Status::from(cli.status);
    info!(dice = cli.dice, successes = cli.successes, %status, "calculating");

    if cli.table {
        return chance_report(cli.dice, status, cli.precision)
            .context("failed to build chance table");
    }

    let chance = success_chance(cli.dice, cli.successes, status)
        .context("failed to compute success chance")?;
    let mut out = format!("Chance of Success: {}\n", percent(chance, cli.precision));

    if cli.exact {
        let exact = exact_chance(cli.dice, cli.successes, status)
            .context("failed to compute exact chance")?;
        out += &format!("Exact: {exact}\n");
    }

    if let Some(samples) = cli.simulate {
        let mut approx = Approx::builder()
            .sample_size(samples)
            .build(rand::thread_rng());
        let estimate = approx.success_chance(cli.dice, cli.successes, status);
        out += &format!(
            "Simulated ({samples} rolls): {}\n",
            percent(estimate, cli.precision)
        );
    }

    Ok(out)
}
