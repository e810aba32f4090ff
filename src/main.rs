use anyhow::Result;
use clap::Parser;
use colored::*;
use tracing_subscriber::EnvFilter;

use talent_scout::{Recruiter, RecruitmentResult, DEFAULT_MODEL};

#[derive(Parser, Debug)]
#[command(author, version, about = "Shortlist candidates for a job opening", long_about = None)]
struct Args {
    /// Job requirements handed to the recruiter
    prompt: String,

    /// Model identifier, `provider:model`
    #[arg(short, long, default_value = DEFAULT_MODEL)]
    model: String,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let result = Recruiter::from_env().run(&args.prompt, &args.model).await;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_result(&result);
    }

    Ok(())
}

fn print_result(result: &RecruitmentResult) {
    if result.is_error() {
        println!("{}", result.summary.red().bold());
        return;
    }

    println!("{}", "🔎 Shortlist".bold().green());
    for (i, candidate) in result.candidates.iter().enumerate() {
        println!(
            "\n{}. {} ({})",
            i + 1,
            candidate.name.bold(),
            candidate.current_role
        );
        println!("   {}", candidate.experience);
        println!("   Skills: {}", candidate.skills.join(", ").cyan());
    }
    println!("\n{}", result.summary);
}
