//! Scan subcommand implementation.
//!
//! Handles `ferret scan <target>`: launches a scan session and renders its
//! event stream. Ctrl-C requests a cooperative stop; the command exits after
//! the terminal event.

use crate::cli::OutputFormat;
use crate::engine::{PortStatus, SessionEvent};
use crate::error::CliResult;
use crate::session::{SessionController, Workflow};
use clap::Parser;
use console::style;

/// Scan a target host's well-known TCP ports.
#[derive(Parser, Debug)]
pub struct ScanCommand {
    /// Target to scan (IP literal or hostname)
    #[arg(value_name = "TARGET")]
    pub target: String,

    /// Output format for results
    #[arg(short, long, value_enum, default_value = "plain")]
    pub output: OutputFormat,

    /// Show closed and filtered ports as well as open ones
    #[arg(long)]
    pub show_closed: bool,
}

impl ScanCommand {
    /// Execute the scan command.
    pub async fn execute(&self) -> CliResult<()> {
        let (mut controller, mut rx) = SessionController::new(Workflow::Scan);
        controller.start(&self.target).await?;

        if self.output == OutputFormat::Plain {
            println!("Scanning {} ...", self.target);
        }

        loop {
            tokio::select! {
                _ = tokio::signal::ctrl_c() => {
                    eprintln!("Stopping current scan...");
                    controller.stop();
                }
                event = rx.recv() => {
                    let Some(event) = event else { break };
                    let terminal = event.is_terminal();
                    self.render(&event)?;
                    if terminal {
                        break;
                    }
                }
            }
        }

        Ok(())
    }

    fn render(&self, event: &SessionEvent) -> CliResult<()> {
        if self.output == OutputFormat::Json {
            println!("{}", serde_json::to_string(event)?);
            return Ok(());
        }

        match event {
            SessionEvent::Port(result) => {
                let shown = match result.status {
                    // In-flight transitions are noise on a line printer.
                    PortStatus::Pending | PortStatus::Scanning => false,
                    _ => result.is_open() || self.show_closed,
                };
                if shown {
                    let status = match result.status {
                        PortStatus::Open => style(result.status).green(),
                        PortStatus::Filtered => style(result.status).yellow(),
                        _ => style(result.status).dim(),
                    };
                    println!("{:<5}/tcp {:<16} {}", result.port, result.service, status);
                }
            }
            SessionEvent::Host(_) => {}
            SessionEvent::Done(summary) => {
                println!("{}", summary.message);
            }
        }

        Ok(())
    }
}
