use colored::Colorize;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
	/// Rewrite files in place.
	Write,
	/// Dry run that fails when a file isn't formatted.
	Check,
}

impl Mode {
	pub fn args(self) -> &'static [&'static str] {
		match self {
			Mode::Write => &["-i"], // Format in place (edit files)
			Mode::Check => &["--dry-run", "--Werror"],
		}
	}
}

/// Outcome of formatting a single file.
#[derive(Debug, PartialEq, Eq)]
pub enum Invocation {
	Success,
	Failure { code: i32, stderr: String },
}

pub trait Format {
	/// Runs the formatter against one file.
	/// Errors only if the formatter couldn't be started at all.
	fn format(&self, file: &std::path::Path, mode: Mode) -> anyhow::Result<Invocation>;

	/// Command line that [Format::format] runs, for display.
	fn command_line(&self, file: &std::path::Path, mode: Mode) -> String;
}

pub struct ClangFormat {
	/// Name or path as the user gave it
	bin: String,
	/// Resolved executable
	path: std::path::PathBuf,
}

impl ClangFormat {
	pub const BIN: &'static str = "clang-format";
}

impl Format for ClangFormat {
	fn format(&self, file: &std::path::Path, mode: Mode) -> anyhow::Result<Invocation> {
		use anyhow::Context;

		let out = std::process::Command::new(&self.path)
			.args(mode.args())
			.arg(file)
			.output()
			.with_context(|| format!("Couldn't run clang-format executable: {}", self.bin))?;

		if out.status.success() {
			Ok(Invocation::Success)
		} else {
			Ok(Invocation::Failure {
				code: exit_code(&out.status),
				stderr: String::from_utf8_lossy(&out.stderr).into_owned(),
			})
		}
	}

	fn command_line(&self, file: &std::path::Path, mode: Mode) -> String {
		let mut parts = vec![self.bin.clone()];
		parts.extend(mode.args().iter().map(|a| a.to_string()));
		parts.push(file.display().to_string());
		parts.join(" ")
	}
}

/// Killed children have no code; report them the way shells do.
fn exit_code(status: &std::process::ExitStatus) -> i32 {
	if let Some(code) = status.code() {
		return code;
	}

	#[cfg(unix)]
	{
		use std::os::unix::process::ExitStatusExt;
		if let Some(signal) = status.signal() {
			return 128 + signal;
		}
	}

	1
}

/// Tries to find the clang-format executable, by name on PATH or by explicit path.
pub fn try_locate(bin: &str) -> anyhow::Result<ClangFormat> {
	match which::which(bin) {
		Ok(path) => Ok(ClangFormat {
			bin: bin.to_owned(),
			path,
		}),
		Err(_) => Err(anyhow::anyhow!("Couldn't find clang-format executable: {bin}")),
	}
}

/// Aggregate outcome of a batch.
#[derive(Debug)]
pub struct Summary {
	pub files: usize,
	pub failed: usize,
	/// 0 if every file succeeded, otherwise the code of the last failure.
	pub exit_code: i32,
	pub elapsed: std::time::Duration,
}

impl Summary {
	pub fn success(&self) -> bool {
		self.failed == 0
	}
}

/// Formats every file in order, one child process at a time.
/// A failing file doesn't stop the batch, but a formatter that can't start does.
pub fn format_all(
	backend: &dyn Format,
	files: &[std::path::PathBuf],
	mode: Mode,
	verbose: bool,
) -> anyhow::Result<Summary> {
	let now = std::time::Instant::now();

	let mut failed = 0;
	let mut exit_code = 0;

	for file in files {
		if verbose {
			println!("{}", backend.command_line(file, mode));
		}

		match backend.format(file, mode)? {
			Invocation::Success => (),
			Invocation::Failure { code, stderr } => {
				eprintln!("{} {} (exit {code})", file.display(), "failed".red());

				let stderr = stderr.trim_end();
				if !stderr.is_empty() {
					eprintln!("{stderr}");
				}

				failed += 1;
				exit_code = code;
			}
		}
	}

	Ok(Summary {
		files: files.len(),
		failed,
		exit_code,
		elapsed: now.elapsed(),
	})
}
