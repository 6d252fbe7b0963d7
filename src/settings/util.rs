use std::env;
use std::path::{Path, PathBuf};

/// Determine a sensible default title for the UI given the first search root.
pub(super) fn default_title_for(root: &Path) -> String {
	if let Some(home_os) = env::var_os("HOME") {
		let home = PathBuf::from(home_os);
		if let Ok(rel) = root.strip_prefix(&home) {
			if rel.components().next().is_none() {
				return "~".to_string();
			}
			let sep = std::path::MAIN_SEPARATOR;
			return format!("~{}{}", sep, rel.display());
		}
	}
	root.display().to_string()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn paths_outside_home_are_shown_in_full() {
		let title = default_title_for(Path::new("/definitely/not/home"));
		assert_eq!(title, "/definitely/not/home");
	}
}
