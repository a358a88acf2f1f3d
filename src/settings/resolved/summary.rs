use super::ResolvedConfig;

pub(super) fn print_summary(config: &ResolvedConfig) {
	println!("Effective configuration:");
	println!("  Collection: {}", config.data_path.display());
	println!("  Debounce: {} ms", config.viewer.debounce.as_millis());
	println!("  Copy reset: {} ms", config.viewer.copy_reset.as_millis());
	println!(
		"  Sidebar breakpoint: {} columns",
		config.viewer.layout.sidebar_breakpoint
	);
	println!(
		"  Back to top after: {} lines",
		config.viewer.layout.back_to_top_threshold
	);
	println!(
		"  UI theme: {}",
		config
			.theme
			.as_deref()
			.unwrap_or("(use the library default)")
	);
	println!("  Title: {}", config.labels.title);
	println!("  Filter label: {}", config.labels.filter_label);
	if !config.initial_query.is_empty() {
		println!("  Initial query: {}", config.initial_query);
	}
}

#[cfg(test)]
mod tests {
	use std::path::PathBuf;

	use snipview_core::ViewerConfig;
	use snipview_tui::UiLabels;

	use super::*;

	#[test]
	fn summary_prints_without_panic() {
		let config = ResolvedConfig {
			data_path: PathBuf::from("/tmp/snippets.json"),
			viewer: ViewerConfig::default(),
			initial_query: "foo".into(),
			theme: Some("dark".into()),
			labels: UiLabels::default(),
		};

		print_summary(&config);
	}
}
