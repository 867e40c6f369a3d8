use clap::Parser;

/// Dead simple clang-format driver
#[derive(Parser)]
#[command(version, about, long_about = None)]
pub struct Cli {
	/// Path or name of the clang-format executable to run.
	#[arg(short = 'c', long = "clang-format", default_value = crate::format::ClangFormat::BIN)]
	pub clang_format: String,

	/// Only check formatting (clang-format --dry-run --Werror), leaving files untouched.
	#[arg(long)]
	pub check: bool,

	/// Print each clang-format command before running it.
	#[arg(short, long)]
	pub verbose: bool,

	/// Project root to scan. Defaults to the current directory.
	#[arg(short, long)]
	pub root: Option<std::path::PathBuf>,
}

impl Cli {
	pub fn mode(&self) -> crate::format::Mode {
		if self.check {
			crate::format::Mode::Check
		} else {
			crate::format::Mode::Write
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::format::Mode;

	#[test]
	fn defaults_to_write_mode_with_clang_format_on_path() {
		let cli = Cli::try_parse_from(["cfmt"]).unwrap();

		assert_eq!(cli.clang_format, "clang-format");
		assert_eq!(cli.mode(), Mode::Write);
		assert!(!cli.verbose);
		assert!(cli.root.is_none());
	}

	#[test]
	fn parses_short_and_long_flags() {
		let cli = Cli::try_parse_from(["cfmt", "-c", "/opt/llvm/bin/clang-format", "--check", "-v", "-r", "proj"])
			.unwrap();

		assert_eq!(cli.clang_format, "/opt/llvm/bin/clang-format");
		assert_eq!(cli.mode(), Mode::Check);
		assert!(cli.verbose);
		assert_eq!(cli.root.as_deref(), Some(std::path::Path::new("proj")));

		let cli = Cli::try_parse_from(["cfmt", "--clang-format", "clang-format-18", "--verbose"]).unwrap();
		assert_eq!(cli.clang_format, "clang-format-18");
		assert!(cli.verbose);
	}

	#[test]
	fn rejects_unknown_flags() {
		assert!(Cli::try_parse_from(["cfmt", "--write"]).is_err());
	}
}
