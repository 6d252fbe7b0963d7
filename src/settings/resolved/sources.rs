use std::fmt;

#[derive(Debug, Clone)]
pub(crate) enum SettingSource {
	CliFlag(&'static str),
	Environment(&'static str),
	ConfigKey(&'static str),
	Default,
}

impl fmt::Display for SettingSource {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::CliFlag(flag) => write!(f, "CLI flag `{flag}`"),
			Self::Environment(var) => write!(f, "environment variable `{var}`"),
			Self::ConfigKey(key) => write!(f, "configuration key `{key}`"),
			Self::Default => write!(f, "built-in default"),
		}
	}
}

/// Where each validated setting came from, for error messages.
#[derive(Debug, Default, Clone)]
pub(crate) struct ConfigSources {
	pub(crate) min_query_length: Option<SettingSource>,
	pub(crate) max_output_kib: Option<SettingSource>,
	pub(crate) debounce_ms: Option<SettingSource>,
	pub(crate) roots: Option<SettingSource>,
}

impl ConfigSources {
	pub(crate) fn source_for_min_query_length(&self) -> SettingSource {
		self.min_query_length
			.clone()
			.unwrap_or(SettingSource::ConfigKey("search.min_query_length"))
	}

	pub(crate) fn source_for_max_output_kib(&self) -> SettingSource {
		self.max_output_kib
			.clone()
			.unwrap_or(SettingSource::ConfigKey("search.max_output_kib"))
	}

	pub(crate) fn source_for_debounce_ms(&self) -> SettingSource {
		self.debounce_ms
			.clone()
			.unwrap_or(SettingSource::ConfigKey("search.debounce_ms"))
	}

	/// Roots fall back to the working directory when nobody set them.
	pub(crate) fn source_for_roots(&self) -> SettingSource {
		self.roots.clone().unwrap_or(SettingSource::Default)
	}
}
