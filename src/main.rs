mod commands;
mod core;

use clap::{Parser, Subcommand};
use crate::core::error::{StepError, print_error};

/// Upload debug symbols to Sentry and record release metadata
#[derive(Parser)]
#[command(name = "sentry-symbols")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
#[command(styles = get_styles())]
struct Cli {
  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// Execute the step: upload symbols, then track the release
  Run {
    #[command(flatten)]
    config: core::config::StepConfig,
  },

  /// Show the planned sentry-cli invocations without executing anything
  Plan {
    #[command(flatten)]
    config: core::config::StepConfig,

    /// Output the plan in JSON format (useful for CI/automation)
    #[arg(long)]
    json: bool,
  },
}

fn get_styles() -> clap::builder::Styles {
  clap::builder::Styles::styled()
    .usage(
      anstyle::Style::new()
        .bold()
        .underline()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Yellow))),
    )
    .header(
      anstyle::Style::new()
        .bold()
        .underline()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Yellow))),
    )
    .literal(anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Green))))
    .invalid(
      anstyle::Style::new()
        .bold()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Red))),
    )
    .error(
      anstyle::Style::new()
        .bold()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Red))),
    )
    .valid(
      anstyle::Style::new()
        .bold()
        .underline()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Green))),
    )
    .placeholder(anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::White))))
}

fn main() {
  let cli = Cli::parse();

  let result = match cli.command {
    Commands::Run { config } => commands::run_step(&config),
    Commands::Plan { config, json } => commands::run_plan(&config, json),
  };

  if let Err(err) = result {
    handle_error(err);
  }
}

fn handle_error(err: StepError) -> ! {
  print_error(&err);
  std::process::exit(err.exit_code().as_i32());
}
