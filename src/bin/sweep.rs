use serde::Serialize;
use std::env;

use aerofoil::{
    utils::deg_to_rad, AeroState, AerodynamicModel, AerofoilCoefficients, AerofoilConfig,
    AirDataCalculation, FlatPlateModel, IdentityFrame, ThinAerofoilModel,
};

const MAX_SWEEP_STEPS: usize = 1_000_000;

const USAGE: &str = "usage: aerofoil_sweep <config.yaml> \
    [--from DEG] [--to DEG] [--step DEG] [--model thin|flat-plate]";

#[derive(Debug, Clone, PartialEq)]
struct SweepArgs {
    config_path: String,
    from_deg: f64,
    to_deg: f64,
    step_deg: f64,
    steps: usize,
    flat_plate: bool,
}

#[derive(Serialize)]
struct SweepRow {
    alpha_deg: f64,
    #[serde(flatten)]
    coefficients: AerofoilCoefficients,
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<SweepArgs, String> {
    let mut parsed = SweepArgs {
        config_path: String::new(),
        from_deg: -90.0,
        to_deg: 90.0,
        step_deg: 1.0,
        steps: 0,
        flat_plate: false,
    };

    while let Some(arg) = args.next() {
        let mut value = |name: &str| {
            args.next()
                .ok_or_else(|| format!("missing value for {}", name))
        };
        match arg.as_str() {
            "--from" => parsed.from_deg = parse_deg(&value("--from")?)?,
            "--to" => parsed.to_deg = parse_deg(&value("--to")?)?,
            "--step" => parsed.step_deg = parse_deg(&value("--step")?)?,
            "--model" => {
                parsed.flat_plate = match value("--model")?.as_str() {
                    "thin" => false,
                    "flat-plate" => true,
                    other => return Err(format!("unknown model '{}'", other)),
                }
            }
            flag if flag.starts_with("--") => return Err(format!("unknown option {}", flag)),
            path if parsed.config_path.is_empty() => parsed.config_path = path.to_string(),
            extra => return Err(format!("unexpected argument '{}'", extra)),
        }
    }

    if parsed.config_path.is_empty() {
        return Err("missing config path".to_string());
    }
    parsed.steps = sweep_steps(parsed.from_deg, parsed.to_deg, parsed.step_deg)?;

    Ok(parsed)
}

/// Number of intervals in `[from, to]`; an end point within rounding of a
/// whole step is included.
fn sweep_steps(from_deg: f64, to_deg: f64, step_deg: f64) -> Result<usize, String> {
    if step_deg <= 0.0 || to_deg < from_deg {
        return Err("sweep needs --step > 0 and --to >= --from".to_string());
    }

    let steps = ((to_deg - from_deg) / step_deg + 1e-9).floor();
    if steps >= MAX_SWEEP_STEPS as f64 {
        return Err(format!(
            "sweep of {} steps exceeds the limit of {}",
            steps, MAX_SWEEP_STEPS
        ));
    }

    Ok(steps as usize)
}

fn parse_deg(value: &str) -> Result<f64, String> {
    value
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| format!("'{}' is not a finite angle", value))
}

// Unit dynamic pressure and unit reference areas, so loads equal coefficients
fn unit_state(alpha: f64) -> AeroState {
    let wind = nalgebra::Vector3::new(0.0, alpha.sin(), -alpha.cos());
    AirDataCalculation::from_relative_wind(&wind, 2.0).to_aero_state(1.0, 1.0)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = match parse_args(env::args().skip(1)) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("{}\n{}", e, USAGE);
            std::process::exit(2);
        }
    };

    let config = AerofoilConfig::from_file(&args.config_path)?;
    let model: Box<dyn AerodynamicModel> = if args.flat_plate {
        Box::new(FlatPlateModel::new(config.model))
    } else {
        Box::new(ThinAerofoilModel::new(config.model))
    };
    eprintln!("Sweeping '{}' with the {} model", config.name, model.name());

    for i in 0..=args.steps {
        let alpha_deg = args.from_deg + i as f64 * args.step_deg;
        let state = unit_state(deg_to_rad(alpha_deg));
        let result = model.evaluate(&config.geometry, &state, &IdentityFrame);
        let row = SweepRow {
            alpha_deg,
            coefficients: result.coefficients,
        };
        println!("{}", serde_json::to_string(&row)?);
    }

    Ok(())
}
