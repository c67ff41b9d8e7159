//! StaffForm CLI - Host shell for the form engine
//!
//! Commands: show, validate, edit
//! Outputs JSON (or the rendered form) to stdout
//! Returns non-zero on validation failure

use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use staffform_core::{
    age::derive_age,
    render::render_form,
    validate_record, EmployeeRecord, FormController, MockGateway, RecordPatch, ValidationContext,
    ENGINE_VERSION,
};

#[derive(Parser)]
#[command(name = "staffform-cli")]
#[command(about = "StaffForm CLI - Employee Profile Form Engine")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Artificial gateway latency in milliseconds
    #[arg(short, long, default_value_t = 0)]
    latency_ms: u64,
}

#[derive(Subcommand)]
enum Commands {
    /// Load the record through the mock gateway and render the form
    Show,

    /// Validate a full record
    Validate {
        /// JSON payload (EmployeeRecord)
        #[arg(short, long)]
        payload: String,
    },

    /// Load, apply edits, and save through the mock gateway
    Edit {
        /// JSON payload (partial record; absent keys stay unchanged)
        #[arg(short, long)]
        payload: String,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let gateway = Arc::new(MockGateway::new().with_latency(Duration::from_millis(cli.latency_ms)));

    match cli.command {
        Commands::Show => {
            let mut ctrl = FormController::new(gateway);
            if ctrl.load().await.is_err() {
                eprintln!("{}", render_form(&ctrl));
                return ExitCode::FAILURE;
            }
            println!("{}", render_form(&ctrl));
            ExitCode::SUCCESS
        }

        Commands::Validate { payload } => {
            let record: EmployeeRecord = match serde_json::from_str(&payload) {
                Ok(r) => r,
                Err(e) => {
                    println!(r#"{{"valid": false, "error": "Invalid payload: {}"}}"#, e);
                    return ExitCode::FAILURE;
                }
            };

            let today = chrono::Local::now().date_naive();
            let ctx = ValidationContext { age: derive_age(record.birth_date, today), today };
            let report = validate_record(&record, &ctx);

            let output = serde_json::json!({
                "engine": ENGINE_VERSION,
                "valid": report.valid,
                "errors": report.errors,
            });
            println!("{}", serde_json::to_string_pretty(&output).unwrap());
            if report.valid {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(2) // Validation failure
            }
        }

        Commands::Edit { payload } => {
            let patch: RecordPatch = match serde_json::from_str(&payload) {
                Ok(p) => p,
                Err(e) => {
                    println!(r#"{{"saved": false, "error": "Invalid payload: {}"}}"#, e);
                    return ExitCode::FAILURE;
                }
            };

            let mut ctrl = FormController::new(gateway);
            if let Err(e) = ctrl.load().await {
                println!(r#"{{"saved": false, "error": "{}"}}"#, e);
                return ExitCode::FAILURE;
            }
            ctrl.enter_edit().expect("just loaded");
            for field_patch in patch.into_patches() {
                ctrl.apply(field_patch).expect("editing");
            }

            let saved = ctrl.submit().await.is_ok();
            let output = serde_json::json!({
                "engine": ENGINE_VERSION,
                "saved": saved,
                "dirty": ctrl.is_dirty(),
                "errors": ctrl.report().errors,
                "record": ctrl.current(),
            });
            println!("{}", serde_json::to_string_pretty(&output).unwrap());
            if saved {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(2) // Blocked or save failure
            }
        }
    }
}
