//! # Vessel Foundation Load CLI
//!
//! Terminal front end for `vessel_core`.
//!
//! ## Usage
//!
//! ```text
//! vessel_cli study.json          # calculate a study saved as JSON
//! vessel_cli study.json --json   # also print the result as JSON
//! vessel_cli                     # enter a study at the prompt
//! ```
//!
//! Log output goes to stderr and is controlled with `RUST_LOG`
//! (default `vessel_core=info,vessel_cli=info`).

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use vessel_core::attachments::{Attachment, Location, DEFAULT_ASPECT_RATIO};
use vessel_core::report::render_table;
use vessel_core::study::LoadStudy;
use vessel_core::vessel::VesselGeometry;
use vessel_core::CalcError;

fn prompt_line(prompt: &str) -> Option<String> {
    print!("{}", prompt);
    io::stdout().flush().ok()?;

    let mut input = String::new();
    match io::stdin().lock().read_line(&mut input) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(input.trim().to_string()),
    }
}

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    prompt_line(prompt)
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

fn prompt_study() -> LoadStudy {
    println!("Vessel geometry (m)");
    let vessel = VesselGeometry::new(
        prompt_f64("  Support height [1.0]: ", 1.0),
        prompt_f64("  Vessel radius [1.0]: ", 1.0),
        prompt_f64("  Cylinder length [10.0]: ", 10.0),
    );
    let mut study = LoadStudy::new("Interactive study", vessel);

    println!();
    println!("Locations: {}", Location::ALL.map(|l| l.display_name()).join(", "));
    loop {
        let n = study.nozzles.len() + 1;
        let Some(answer) = prompt_line(&format!("Nozzle {} location (blank to finish): ", n)) else {
            break;
        };
        if answer.is_empty() {
            break;
        }
        let location: Location = match answer.parse() {
            Ok(loc) => loc,
            Err(e) => {
                eprintln!("  {}", e);
                continue;
            }
        };
        let tag = prompt_line(&format!("  Tag No. [N-{}]: ", n)).unwrap_or_default();
        let theta = prompt_f64("  Orientation (deg) [0]: ", 0.0);

        let nozzle = if location.is_shell() {
            let elevation = prompt_f64("  Elevation (m) [0.0]: ", 0.0);
            let p = prompt_f64("  P (Axial) (N) [0]: ", 0.0);
            let vc = prompt_f64("  Vc (Circumferential) (N) [0]: ", 0.0);
            let vl = prompt_f64("  VL (Longitudinal) (N) [0]: ", 0.0);
            Attachment::shell_nozzle(tag, elevation, theta, p, vc, vl)
        } else {
            let offset = prompt_f64("  Offset (m) [0.0]: ", 0.0);
            let aspect_ratio = match location.head() {
                Some((_, vessel_core::HeadShape::Ellipsoidal)) => {
                    prompt_f64("  Aspect ratio [2.0]: ", DEFAULT_ASPECT_RATIO)
                }
                _ => DEFAULT_ASPECT_RATIO,
            };
            let p = prompt_f64("  P (Axial) (N) [0]: ", 0.0);
            let v1 = prompt_f64("  V1 (Radial) (N) [0]: ", 0.0);
            let v2 = prompt_f64("  V2 (Circumferential) (N) [0]: ", 0.0);
            Attachment::head_nozzle(tag, location, offset, theta, p, v1, v2).with_aspect_ratio(aspect_ratio)
        };
        study.nozzles.push(nozzle);
    }

    loop {
        let n = study.pipe_supports.len() + 1;
        let Some(answer) = prompt_line(&format!("Add pipe support {}? [y/N]: ", n)) else {
            break;
        };
        if !answer.eq_ignore_ascii_case("y") {
            break;
        }
        let tag = prompt_line(&format!("  Tag No. [PS-{}]: ", n)).unwrap_or_default();
        let elevation = prompt_f64("  Elevation (m) [0.0]: ", 0.0);
        let theta = prompt_f64("  Orientation (deg) [0]: ", 0.0);
        let offset = prompt_f64("  Offset (m) [0.0]: ", 0.0);
        let fv = prompt_f64("  Vertical load (N) [0]: ", 0.0);
        let fh1 = prompt_f64("  Radial load (N) [0]: ", 0.0);
        let fh2 = prompt_f64("  Circumferential load (N) [0]: ", 0.0);
        study
            .pipe_supports
            .push(Attachment::pipe_support(tag, elevation, offset, theta, fv, fh1, fh2));
    }

    study
}

fn load_study(path: &str) -> Result<LoadStudy, CalcError> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| CalcError::invalid_input("study_path", path, format!("Cannot read study file: {}", e)))?;
    LoadStudy::from_json(&text)
}

fn report_error(e: &CalcError) {
    eprintln!("Error: {}", e);
    if let Ok(json) = serde_json::to_string_pretty(e) {
        eprintln!();
        eprintln!("Error JSON:");
        eprintln!("{}", json);
    }
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "vessel_core=info,vessel_cli=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let emit_json = args.iter().any(|a| a == "--json");
    let path = args.iter().find(|a| !a.starts_with("--"));

    println!("Vertical Vessel/Column Load Transfer at Base - Local to Global");
    println!("==============================================================");
    println!();

    let study = match path {
        Some(path) => {
            tracing::info!(path = %path, "Loading study");
            match load_study(path) {
                Ok(study) => study,
                Err(e) => {
                    report_error(&e);
                    return ExitCode::FAILURE;
                }
            }
        }
        None => prompt_study(),
    };

    if let Err(e) = study.validate_categories() {
        report_error(&e);
        return ExitCode::FAILURE;
    }

    let result = match study.calculate() {
        Ok(result) => result,
        Err(e) => {
            report_error(&e);
            return ExitCode::FAILURE;
        }
    };

    if !study.title.is_empty() {
        println!("{}", study.title);
        println!();
    }
    print!("{}", render_table(&result, study.settings.decimals, study.settings.error_policy));

    if emit_json {
        println!();
        println!("JSON Output:");
        if let Ok(json) = serde_json::to_string_pretty(&result) {
            println!("{}", json);
        }
    }

    match result.checked_total(study.settings.error_policy) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            report_error(&e);
            ExitCode::FAILURE
        }
    }
}
