use std::path::{Path, PathBuf};

/// Provides the directories a search is restricted to.
///
/// Implementations are polled on every search start so that roots added or
/// removed since the previous search are picked up.
pub trait WorkspaceRoots {
	fn list_roots(&self) -> Vec<PathBuf>;
}

impl<F> WorkspaceRoots for F
where
	F: Fn() -> Vec<PathBuf>,
{
	fn list_roots(&self) -> Vec<PathBuf> {
		self()
	}
}

/// Ordered set of root directories handed to the search tool.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchScope {
	roots: Vec<PathBuf>,
}

impl SearchScope {
	/// Build a scope, dropping duplicate roots while keeping the first
	/// occurrence's position.
	#[must_use]
	pub fn new(roots: impl IntoIterator<Item = PathBuf>) -> Self {
		let mut unique: Vec<PathBuf> = Vec::new();
		for root in roots {
			if !unique.contains(&root) {
				unique.push(root);
			}
		}
		Self { roots: unique }
	}

	/// Poll `provider` for the current roots.
	#[must_use]
	pub fn from_provider(provider: &dyn WorkspaceRoots) -> Self {
		Self::new(provider.list_roots())
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.roots.is_empty()
	}

	#[must_use]
	pub fn roots(&self) -> &[PathBuf] {
		&self.roots
	}

	#[must_use]
	pub fn into_roots(self) -> Vec<PathBuf> {
		self.roots
	}
}

/// Fixed list of directories, re-validated every time it is polled.
#[derive(Debug, Clone)]
pub struct DirectoryRoots {
	roots: Vec<PathBuf>,
}

impl DirectoryRoots {
	#[must_use]
	pub fn new(roots: Vec<PathBuf>) -> Self {
		Self { roots }
	}
}

impl WorkspaceRoots for DirectoryRoots {
	fn list_roots(&self) -> Vec<PathBuf> {
		self.roots
			.iter()
			.filter(|root| is_directory(root))
			.cloned()
			.collect()
	}
}

fn is_directory(path: &Path) -> bool {
	let exists = path.is_dir();
	if !exists {
		log::warn!("workspace root {} is no longer a directory", path.display());
	}
	exists
}
