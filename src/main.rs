//! unirec - unified content recommendations
//!
//! Command-line front end: run the batch pipeline, rank a single user or
//! inspect the shared vocabulary of a JSON dataset.

use anyhow::Result;
use clap::{CommandFactory, Parser};

use unirec::cli::{Cli, Command};
use unirec::{commands, config, ui};

fn main() {
	if let Err(e) = dispatch() {
		ui::error(&format!("{:#}", e));
		std::process::exit(1);
	}
}

fn dispatch() -> Result<()> {
	let cli = Cli::parse();

	ui::Log::set_verbose(cli.verbose);

	match cli.command {
		Command::Run {
			dataset,
			top_n,
			seed,
			positive_ratio,
			negative_ratio,
			json,
		} => {
			ui::Log::set_quiet(json);
			if let Some(seed) = seed {
				config::set_seed(seed);
			}
			ui::banner();
			commands::run::run(&dataset, top_n, positive_ratio, negative_ratio, json)
		}
		Command::Rank {
			dataset,
			user,
			asset_type,
			top_n,
			json,
		} => {
			ui::Log::set_quiet(json);
			ui::banner();
			commands::rank::run(&dataset, &user, asset_type, top_n, json)
		}
		Command::Vocab { dataset, limit } => {
			ui::banner();
			commands::vocab::run(&dataset, limit)
		}
		Command::Help { subcommand } => {
			let mut cmd = Cli::command();
			if let Some(sub) = subcommand {
				if let Some(sub_cmd) = cmd.find_subcommand_mut(&sub) {
					sub_cmd.print_help()?;
				} else {
					ui::error(&format!("Unknown subcommand: {}", sub));
					cmd.print_help()?;
				}
			} else {
				cmd.print_help()?;
			}
			Ok(())
		}
	}
}
