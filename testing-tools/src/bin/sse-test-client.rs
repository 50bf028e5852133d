use anyhow::Result;
use clap::Parser;
use colored::*;
use std::time::Duration;

use testing_tools::api_client::ApiClient;
use testing_tools::output::print_test_summary;
use testing_tools::scenarios;
use testing_tools::sse_client::Connection;

#[derive(Parser)]
#[command(name = "sse-test-client")]
#[command(about = "MCP Server Integration Testing Tool")]
struct Cli {
    /// Base URL of the server (e.g., http://localhost:3000)
    #[arg(long, default_value = "http://localhost:3000")]
    base_url: String,

    /// Test scenario to run
    #[arg(long, value_enum, default_value = "all")]
    scenario: ScenarioChoice,

    /// Heartbeat period the server was started with, in seconds
    #[arg(long, default_value_t = 10)]
    heartbeat_secs: u64,

    /// Enable verbose output
    #[arg(long, short)]
    verbose: bool,
}

#[derive(clap::ValueEnum, Clone)]
enum ScenarioChoice {
    /// Welcome event on a fresh stream
    ConnectionTest,
    /// Welcome event followed by one heartbeat
    Heartbeat,
    /// get_user_data answers 200 with an array (needs a connected store)
    UserData,
    /// An unrecognized query answers 400
    UnknownQuery,
    /// Run every scenario
    All,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Debug)
            .init();
    }

    println!("{}", "=== SETUP PHASE ===".bright_white().bold());

    let api_client = ApiClient::new(reqwest::Client::new(), cli.base_url.clone());
    api_client.health().await?;
    println!("{} Server is up at {}", "✓".green(), cli.base_url);

    let heartbeat_period = Duration::from_secs(cli.heartbeat_secs);
    let mut results = Vec::new();

    println!("\n{}", "=== TEST PHASE ===".bright_white().bold());

    match cli.scenario {
        ScenarioChoice::ConnectionTest => {
            let mut sse = Connection::establish(&cli.base_url, "Stream".to_string()).await?;
            results.push(scenarios::test_connection(&mut sse).await?);
        }
        ScenarioChoice::Heartbeat => {
            let mut sse = Connection::establish(&cli.base_url, "Stream".to_string()).await?;
            results.push(scenarios::test_connection(&mut sse).await?);
            results.push(scenarios::test_heartbeat(&mut sse, heartbeat_period).await?);
        }
        ScenarioChoice::UserData => {
            results.push(scenarios::test_user_data_query(&api_client).await?);
        }
        ScenarioChoice::UnknownQuery => {
            results.push(scenarios::test_unknown_query(&api_client).await?);
        }
        ScenarioChoice::All => {
            let mut sse = Connection::establish(&cli.base_url, "Stream".to_string()).await?;
            results.push(scenarios::test_connection(&mut sse).await?);
            results.push(scenarios::test_user_data_query(&api_client).await?);
            results.push(scenarios::test_unknown_query(&api_client).await?);
            results.push(scenarios::test_heartbeat(&mut sse, heartbeat_period).await?);
        }
    }

    // Print summary
    println!("\n{}", "=== RESULTS ===".bright_white().bold());
    print_test_summary(&results);

    let all_passed = results.iter().all(|r| r.passed);

    if all_passed {
        println!("\n{}", "All tests passed! ✓".bright_green().bold());
    } else {
        println!("\n{}", "Some tests failed! ✗".bright_red().bold());
    }

    std::process::exit(if all_passed { 0 } else { 1 });
}
