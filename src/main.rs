//! Replays a sequence of operations against a fresh state machine.

use clap::Parser;
use runstate::{Operation, State, StateMachine, ALL_STATES, DEMO_SEQUENCE};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "runstate")]
#[command(about = "Drive an Idle/Running/Paused/Stopped state machine", long_about = None)]
struct Cli {
    /// Operations to apply in order (start, pause, stop, process).
    /// Replays a built-in demo when omitted.
    operations: Vec<Operation>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Print the final state, value and history as JSON
    #[arg(long)]
    json: bool,
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    // stdout is reserved for the --json summary
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<(), serde_json::Error> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    info!("possible states:");
    for state in ALL_STATES {
        info!(id = state.id(), "{}", state.label());
    }

    let operations = if cli.operations.is_empty() {
        DEMO_SEQUENCE.to_vec()
    } else {
        cli.operations
    };

    let mut machine = StateMachine::new();
    for op in operations {
        machine.apply(op);
    }

    let history = machine.history();
    info!(
        state = %machine.state(),
        value = machine.value(),
        transitions = history.len(),
        last_trigger = history.last().map(|t| t.trigger.as_str()).unwrap_or("none"),
        elapsed_us = history.duration().map_or(0, |d| d.as_micros() as u64),
        "run complete"
    );

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&machine)?);
    }

    Ok(())
}
