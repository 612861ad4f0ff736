use leptos::*;
use vmd_common::UiConfig;

/// Make the host configuration available to the components below
pub fn provide_ui_config(config: UiConfig) {
    provide_context(config.normalized());
}

/// Current configuration, defaults when none was provided
pub fn use_ui_config() -> UiConfig {
    use_context::<UiConfig>().unwrap_or_default()
}
