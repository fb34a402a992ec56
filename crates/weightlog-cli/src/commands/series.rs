use clap::Args;
use weightlog_core::{current as latest, most_recent, sort_by_date, Config};

use super::{print_json, read_measurements};

#[derive(Args)]
pub struct InputArgs {
    /// JSON file with an array of measurements ("-" for stdin)
    #[arg(short, long, default_value = "-")]
    input: String,
}

#[derive(Args)]
pub struct InterpolateArgs {
    #[command(flatten)]
    source: InputArgs,
    /// Print the whole daily series instead of only the synthesized days
    #[arg(long)]
    fill: bool,
}

#[derive(Args)]
pub struct RecentArgs {
    #[command(flatten)]
    source: InputArgs,
    /// How many weigh-ins to show
    #[arg(short = 'n', long, default_value_t = 7)]
    count: usize,
}

pub fn interpolate(args: InterpolateArgs, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let mut records = read_measurements(&args.source.input)?;
    sort_by_date(&mut records);

    let interpolator = config.interpolator();
    let output = if args.fill {
        interpolator.fill_gaps(&records)
    } else {
        interpolator.interpolate(&records)
    };
    print_json(&output)
}

pub fn current(args: InputArgs) -> Result<(), Box<dyn std::error::Error>> {
    let records = read_measurements(&args.input)?;
    match latest(&records) {
        Some(record) => print_json(record),
        None => Err("no measurements".into()),
    }
}

pub fn recent(args: RecentArgs) -> Result<(), Box<dyn std::error::Error>> {
    let records = read_measurements(&args.source.input)?;
    print_json(&most_recent(&records, args.count))
}
