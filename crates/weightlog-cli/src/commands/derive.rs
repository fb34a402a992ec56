use clap::Args;
use weightlog_core::{derive_all, refresh_bmi, Config, Length, LengthUnit};

use super::{print_json, read_measurements};

#[derive(Args)]
pub struct DeriveArgs {
    /// JSON file with an array of measurements ("-" for stdin)
    #[arg(short, long, default_value = "-")]
    input: String,
    /// Height to use for BMI (defaults to the profile height)
    #[arg(long)]
    height: Option<f64>,
    /// Unit of --height (mm, cm, m, in, ft; default cm)
    #[arg(long, requires = "height")]
    unit: Option<String>,
}

#[derive(Args)]
pub struct RefreshBmiArgs {
    /// JSON file with an array of measurements ("-" for stdin)
    #[arg(short, long, default_value = "-")]
    input: String,
    /// New height
    #[arg(long)]
    height: f64,
    /// Unit of --height (mm, cm, m, in, ft)
    #[arg(long, default_value = "cm")]
    unit: String,
}

fn parse_height(value: f64, unit: &str) -> Result<Length, Box<dyn std::error::Error>> {
    let unit: LengthUnit = unit.parse()?;
    Ok(Length::new(value, unit))
}

pub fn run(args: DeriveArgs, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let mut records = read_measurements(&args.input)?;

    match args.height {
        Some(value) => {
            let height = parse_height(value, args.unit.as_deref().unwrap_or("cm"))?;
            for record in records.iter_mut() {
                derive_all(record, &height);
            }
        }
        None => {
            for record in records.iter_mut() {
                derive_all(record, config);
            }
        }
    }

    print_json(&records)
}

pub fn refresh(args: RefreshBmiArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut records = read_measurements(&args.input)?;
    let height = parse_height(args.height, &args.unit)?;
    refresh_bmi(&mut records, &height);
    print_json(&records)
}
