//! Sweep subcommand implementation.
//!
//! Handles `ferret sweep <subnet>`: launches a discovery sweep and renders
//! hosts as they respond. A spinner keeps the terminal alive through long
//! quiet stretches of unresponsive address space.

use crate::cli::OutputFormat;
use crate::engine::SessionEvent;
use crate::error::CliResult;
use crate::session::{SessionController, Workflow};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Discover responsive hosts on an IPv4 subnet.
#[derive(Parser, Debug)]
pub struct SweepCommand {
    /// Subnet in CIDR notation (a bare IP sweeps its /24)
    #[arg(value_name = "SUBNET")]
    pub subnet: String,

    /// Output format for results
    #[arg(short, long, value_enum, default_value = "plain")]
    pub output: OutputFormat,
}

impl SweepCommand {
    /// Execute the sweep command.
    pub async fn execute(&self) -> CliResult<()> {
        let (mut controller, mut rx) = SessionController::new(Workflow::Sweep);
        controller.start(&self.subnet).await?;

        let spinner = if self.output == OutputFormat::Plain {
            let pb = ProgressBar::new_spinner();
            pb.set_style(
                ProgressStyle::default_spinner()
                    .template("{spinner:.green} {msg}")
                    .unwrap_or_else(|_| ProgressStyle::default_spinner()),
            );
            pb.set_message(format!("Mapping {} ...", self.subnet));
            pb.enable_steady_tick(Duration::from_millis(120));
            pb.println(format!(
                "{:<15} {:<18} {:<20} {}",
                "IP", "MAC", "VENDOR", "OS"
            ));
            Some(pb)
        } else {
            None
        };

        loop {
            tokio::select! {
                _ = tokio::signal::ctrl_c() => {
                    eprintln!("Stopping mapper ...");
                    controller.stop();
                }
                event = rx.recv() => {
                    let Some(event) = event else { break };
                    let terminal = event.is_terminal();
                    self.render(&event, spinner.as_ref())?;
                    if terminal {
                        break;
                    }
                }
            }
        }

        Ok(())
    }

    fn render(&self, event: &SessionEvent, spinner: Option<&ProgressBar>) -> CliResult<()> {
        if self.output == OutputFormat::Json {
            println!("{}", serde_json::to_string(event)?);
            return Ok(());
        }

        match event {
            SessionEvent::Host(host) => {
                let row = format!(
                    "{:<15} {:<18} {:<20} {}",
                    host.ip, host.pseudo_mac, host.vendor, host.os_guess
                );
                match spinner {
                    Some(pb) => pb.println(row),
                    None => println!("{}", row),
                }
            }
            SessionEvent::Port(_) => {}
            SessionEvent::Done(summary) => {
                if let Some(pb) = spinner {
                    pb.finish_and_clear();
                }
                println!("{}", summary.message);
            }
        }

        Ok(())
    }
}
