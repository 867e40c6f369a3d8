/// A C/C++ project whose sources get formatted.
/// This is any directory; only a fixed set of subfolders inside of it is scanned.
pub struct Project<'a> {
	path: &'a std::path::Path,
}

impl<'a> Project<'a> {
	/// Folder containing public headers
	const INCLUDE: &'static str = "include";

	/// Folder containing test files
	const TESTS: &'static str = "tests";

	/// Folder containing example programs
	const EXAMPLES: &'static str = "examples";

	const TARGETS: &'static [&'static str] = &[Self::INCLUDE, Self::TESTS, Self::EXAMPLES];

	/// Two source and two header extensions, compared case-insensitively.
	const EXTENSIONS: &'static [&'static str] = &["c", "cc", "h", "hpp"];

	pub fn open(path: &'a std::path::Path) -> anyhow::Result<Self> {
		if !path.is_dir() {
			anyhow::bail!(
				"Failed to open project {}: not a directory.",
				path.display()
			);
		}

		Ok(Project { path })
	}

	/*
		Paths
	*/

	/// Target folders that exist. Missing ones are skipped, not an error.
	pub fn target_dirs(&self) -> impl std::iter::Iterator<Item = std::path::PathBuf> + '_ {
		Self::TARGETS
			.iter()
			.map(|dir| self.path.join(dir))
			.filter(|dir| dir.is_dir())
	}

	/*
		File Iterators
	*/

	/// Every formattable file under the target folders, sorted by path.
	pub fn src_files(&self) -> Vec<std::path::PathBuf> {
		let mut files = self
			.target_dirs()
			.flat_map(walkdir::WalkDir::new)
			.flat_map(std::convert::identity) // Filter out walkdir failures
			.filter(|e| e.path().is_file())
			.filter(|e| is_source(e.path()))
			.map(|e| e.into_path())
			.collect::<Vec<_>>();

		files.sort();
		files.dedup();
		files
	}
}

fn is_source(path: &std::path::Path) -> bool {
	path.extension()
		.and_then(|ext| ext.to_str())
		.map(|ext| Project::EXTENSIONS.iter().any(|e| ext.eq_ignore_ascii_case(e)))
		.unwrap_or(false)
}
