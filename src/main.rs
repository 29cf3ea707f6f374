// Client Onboarding - CLI
// Validate candidate records from JSON and optionally submit them

use anyhow::{Context, Result};
use std::env;
use std::fs;
use std::io::Read;

use client_onboarding::{
    parse_query, parse_service_prefills, success_summary, OnboardingCandidate, OnboardingRecord,
    OnboardingValidator,
};

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    match args.get(1).map(String::as_str) {
        Some("check") => run_check(&args[2..]),
        Some("prefill") => run_prefill(&args[2..]),
        _ => {
            print_usage();
            std::process::exit(2);
        }
    }
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  client-onboarding check <file|-> [--submit]");
    eprintln!("  client-onboarding prefill <query-string>");
}

fn run_check(args: &[String]) -> Result<()> {
    let mut submit = false;
    let mut input = None;

    for arg in args {
        if arg == "--submit" {
            submit = true;
        } else {
            input = Some(arg.clone());
        }
    }

    let Some(input) = input else {
        print_usage();
        std::process::exit(2);
    };

    let raw = if input == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read candidate from stdin")?;
        buffer
    } else {
        fs::read_to_string(&input).with_context(|| format!("Failed to read {}", input))?
    };

    let candidate: OnboardingCandidate =
        serde_json::from_str(&raw).context("Candidate is not valid JSON")?;

    let validator = OnboardingValidator::new();
    match validator.validate_now(&candidate) {
        Ok(record) => {
            println!("✅ Record is valid");
            println!("{}", success_summary(&record));

            if submit {
                submit_record(&record)?;
            }
            Ok(())
        }
        Err(errors) => {
            eprintln!("❌ Validation failed:");
            for error in errors.iter() {
                eprintln!("  ✗ {}: {}", error.field, error.message);
            }
            std::process::exit(1);
        }
    }
}

fn run_prefill(args: &[String]) -> Result<()> {
    let Some(query) = args.first() else {
        print_usage();
        std::process::exit(2);
    };

    let params = parse_query(query);
    let prefills = parse_service_prefills(&params);

    if prefills.is_empty() {
        println!("(no prefills)");
    } else {
        for service in prefills {
            println!("{}", service);
        }
    }
    Ok(())
}

#[cfg(feature = "client")]
fn submit_record(record: &OnboardingRecord) -> Result<()> {
    use client_onboarding::Submitter;

    let runtime = tokio::runtime::Runtime::new().context("Failed to start runtime")?;

    let outcome = runtime.block_on(async {
        let submitter = Submitter::from_env()?;
        println!("📤 Submitting to {}...", submitter.endpoint());
        submitter.submit(record).await
    });

    match outcome {
        Ok(()) => {
            println!("✅ Submitted successfully");
            Ok(())
        }
        Err(err) => {
            eprintln!("❌ {}", err);
            eprintln!("   ({})", err.detail());
            std::process::exit(1);
        }
    }
}

#[cfg(not(feature = "client"))]
fn submit_record(_record: &OnboardingRecord) -> Result<()> {
    anyhow::bail!("Submission not available. Rebuild with: cargo build --features client");
}
