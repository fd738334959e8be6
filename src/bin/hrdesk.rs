//! Hrdesk - HR help-desk assistant
//!
//! A small conversational front-end over an FAQ table and an employee
//! record table, combining keyword rules, one-turn follow-up memory, and
//! TF-IDF + fuzzy FAQ retrieval.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use hrdesk::{Config, HrAssistant};
use std::path::PathBuf;

/// Hrdesk - HR help-desk assistant with FAQ retrieval and rule-based answers
#[derive(Parser)]
#[command(
    name = "hrdesk",
    author,
    version,
    about = "HR help-desk assistant with FAQ retrieval and rule-based answers",
    long_about = r#"
Hrdesk answers HR and payroll questions from two CSV tables.

Features:
  - Leave balance and employee detail lookups by employee id
  - One-turn follow-up memory when the id is missing
  - FAQ retrieval (TF-IDF similarity with a fuzzy gate)
  - Static guidance for payslip and bank-detail queries

Examples:
  hrdesk                                Start the interactive console
  hrdesk ask "What is HRA?"             Answer one query and exit
  hrdesk ask --json "leaves EMP10234"   Answer as a JSON object
  hrdesk info                           Show corpus and directory stats
"#
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// FAQ table (CSV with question,answer,category)
    #[arg(long, global = true, default_value = "data/faqs.csv")]
    faq: PathBuf,

    /// Employee table (CSV with employee_id,name,department,role,location,paid_leaves,sick_leaves)
    #[arg(long, global = true, default_value = "data/employees.csv")]
    employees: PathBuf,

    /// Minimum TF-IDF similarity for accepting a FAQ match
    #[arg(short, long, global = true, default_value_t = hrdesk::DEFAULT_THRESHOLD)]
    threshold: f32,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the interactive console (default)
    #[command(alias = "console")]
    Repl,

    /// Answer a single query and exit
    #[command(alias = "query")]
    Ask(AskArgs),

    /// Display corpus and directory statistics
    Info,
}

#[derive(Args)]
struct AskArgs {
    /// The query text; multiple words are joined with spaces
    #[arg(required = true)]
    query: Vec<String>,

    /// Print the query and answer as a JSON object
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    // Initialize logging only when RUST_LOG is set
    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::fmt::init();
    }

    let cli = Cli::parse();

    let config = Config {
        faq_path: cli.faq.clone(),
        employee_path: cli.employees.clone(),
        threshold: cli.threshold,
    };

    let assistant = match HrAssistant::open(config) {
        Ok(assistant) => assistant,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    match cli.command {
        None | Some(Commands::Repl) => {
            let mut session = assistant.session();
            hrdesk::cli::console::run(&mut session)?;
        }

        Some(Commands::Ask(args)) => {
            let query = args.query.join(" ");
            let mut session = assistant.session();
            let answer = session.retrieve(&query);
            if args.json {
                println!(
                    "{}",
                    serde_json::json!({ "query": query, "answer": answer })
                );
            } else {
                println!("{}", answer);
            }
        }

        Some(Commands::Info) => {
            println!("Hrdesk - HR help-desk assistant");
            println!("Version: {}", env!("CARGO_PKG_VERSION"));
            println!();
            println!("FAQ entries: {}", assistant.corpus().len());
            println!("Employees:   {}", assistant.directory().len());
            println!("Threshold:   {}", assistant.threshold());
        }
    }

    Ok(())
}
