use clap::builder::styling::{AnsiColor, Style, Styles};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;

use crate::config::{DEFAULT_TOP_N, NEGATIVE_RATIO, POSITIVE_RATIO};
use crate::core::AssetType;

fn parse_ratio(s: &str) -> Result<f64, String> {
	let val: f64 = s.parse().map_err(|_| format!("'{}' is not a valid number", s))?;
	if !(0.0..=1.0).contains(&val) {
		Err(format!("ratio must be between 0.0 and 1.0, got {}", val))
	} else {
		Ok(val)
	}
}

fn styles() -> Styles {
	Styles::styled()
		.header(Style::new().bold().fg_color(Some(AnsiColor::Blue.into())))
		.usage(Style::new().bold().fg_color(Some(AnsiColor::Blue.into())))
		.literal(Style::new().fg_color(Some(AnsiColor::Blue.into())))
		.placeholder(Style::new().fg_color(Some(AnsiColor::Yellow.into())))
		.valid(Style::new().fg_color(Some(AnsiColor::Blue.into())))
		.invalid(Style::new().fg_color(Some(AnsiColor::Red.into())))
}

#[derive(Parser, Debug)]
#[command(
	name = "unirec",
	author,
	version,
	about = "Recommend events, jobs and posts from a shared TF-IDF space",
	styles = styles(),
	disable_help_subcommand = true,
	after_help = format!(
		"{title}
  {bin} {run}   {run_args}               {run_desc}
  {bin} {run}   {run_json_args}  {run_json_desc}
  {bin} {rank}  {rank_args}  {rank_desc}
  {bin} {vocab} {vocab_args}               {vocab_desc}",
		title = "Examples:".bright_blue().bold(),
		bin = "unirec".bright_blue(),
		run = "run".yellow(),
		run_args = "-d data.json",
		run_desc = "Full pipeline, per-user summary".dimmed(),
		run_json_args = "-d data.json --json --seed 7",
		run_json_desc = "Reproducible JSON report".dimmed(),
		rank = "rank".yellow(),
		rank_args = "-d data.json -u u1 -t jobs",
		rank_desc = "Top jobs for one user".dimmed(),
		vocab = "vocab".yellow(),
		vocab_args = "-d data.json",
		vocab_desc = "Inspect the shared vocabulary".dimmed(),
	),
)]
pub struct Cli {
	/// Enable verbose debug output
	#[arg(short = 'v', long = "verbose", global = true)]
	pub verbose: bool,

	#[command(subcommand)]
	pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
	/// Rank every user, simulate feedback and adjust scores
	Run {
		/// Dataset JSON file
		#[arg(short = 'd', long = "data", value_name = "FILE")]
		dataset: PathBuf,

		/// Recommendations per user and asset type
		#[arg(short = 'n', long = "top", default_value_t = DEFAULT_TOP_N)]
		top_n: usize,

		/// Seed for feedback simulation (default: UNIREC_SEED or 42)
		#[arg(short = 's', long = "seed")]
		seed: Option<u64>,

		/// Probability of a simulated like
		#[arg(long = "positive", default_value_t = POSITIVE_RATIO, value_parser = parse_ratio)]
		positive_ratio: f64,

		/// Probability of a simulated dislike
		#[arg(long = "negative", default_value_t = NEGATIVE_RATIO, value_parser = parse_ratio)]
		negative_ratio: f64,

		/// Print the full report as JSON instead of a summary
		#[arg(long = "json")]
		json: bool,
	},

	/// Rank one asset type for one user
	Rank {
		/// Dataset JSON file
		#[arg(short = 'd', long = "data", value_name = "FILE")]
		dataset: PathBuf,

		/// User id
		#[arg(short = 'u', long = "user")]
		user: String,

		/// Asset type
		#[arg(short = 't', long = "type", value_enum, default_value = "events")]
		asset_type: AssetType,

		/// Number of results
		#[arg(short = 'n', long = "top", default_value_t = DEFAULT_TOP_N)]
		top_n: usize,

		/// Print recommendations as JSON
		#[arg(long = "json")]
		json: bool,
	},

	/// Show vocabulary statistics
	Vocab {
		/// Dataset JSON file
		#[arg(short = 'd', long = "data", value_name = "FILE")]
		dataset: PathBuf,

		/// Number of highest-IDF terms to list
		#[arg(short = 'n', long = "limit", default_value_t = 20)]
		limit: usize,
	},

	/// Show help for a subcommand
	Help {
		/// Subcommand name
		subcommand: Option<String>,
	},
}
