use super::ResolvedConfig;

pub(super) fn print_summary(config: &ResolvedConfig) {
	println!("Effective configuration:");
	for root in &config.roots {
		println!("  Root: {}", root.display());
	}
	println!("  Search tool: {}", config.tool.display());
	println!("  Minimum query length: {}", config.min_query_length);
	println!("  Output limit: {} KiB", config.max_output_kib);
	if config.debounce_ms == 0 {
		println!("  Debounce: off");
	} else {
		println!("  Debounce: {} ms", config.debounce_ms);
	}
	println!("  Peek entry: {}", bool_to_word(config.peek_entry));
	println!("  Prompt title: {}", config.title);
	if !config.initial_query.is_empty() {
		println!("  Initial query: {}", config.initial_query);
	}
}

fn bool_to_word(value: bool) -> &'static str {
	if value { "yes" } else { "no" }
}
