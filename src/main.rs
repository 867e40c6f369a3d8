use clap::Parser;
use colored::Colorize;

mod cli;
mod format;
mod project;

use crate::cli::Cli;
use crate::format::Mode;
use crate::project::Project;

/// Runs a whole batch, returning the exit code for the process.
fn run(args: &Cli) -> anyhow::Result<i32> {
	let root = match args.root {
		Some(ref root) => root.clone(),
		None => std::env::current_dir()?,
	};

	let proj = Project::open(&root)?;
	let files = proj.src_files();

	if files.is_empty() {
		println!("{}", "No files to format.".yellow());
		return Ok(0);
	}

	let mode = args.mode();
	let backend = format::try_locate(&args.clang_format)?;
	let summary = format::format_all(&backend, &files, mode, args.verbose)?;

	let secs = summary.elapsed.as_secs_f32();

	if summary.success() {
		let verb = match mode {
			Mode::Write => "Formatted",
			Mode::Check => "Checked",
		};

		println!("{}", format!("{verb} {} files in {secs}s.", summary.files).green());
	} else {
		let what = match mode {
			Mode::Write => "to format",
			Mode::Check => "the format check",
		};

		println!(
			"{}",
			format!("{} of {} files failed {what} in {secs}s.", summary.failed, summary.files).red()
		);
	}

	Ok(summary.exit_code)
}

fn main() {
	let args = Cli::parse();

	let code = match run(&args) {
		Ok(code) => code,
		Err(e) => {
			eprintln!("{} {e:#}", "error:".red());
			1
		}
	};

	std::process::exit(code);
}
