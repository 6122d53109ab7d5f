//! Default TOML config template with inline documentation comments.

/// The file written on first run. Every value is commented out so the
/// built-in defaults stay in charge until the user opts in.
pub(crate) fn default_config_toml() -> &'static str {
    r##"# Chorus Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[layout]
# reserved_chrome_height = 160   # 0-2000, pixels kept for the prompt bar
# default_zoom = 1.0             # 0.25-5.0
# resize_debounce_ms = 150       # 0-5000
# max_panes = 6                  # 1-12

[window]
# title = "Chorus"
# width = 1600                   # 320-16384
# height = 1000                  # 240-16384
# start_fullscreen = false

[webview]
# user_agent = "Mozilla/5.0 ..."
# devtools = false
# clipboard = true
# autoplay = false

[providers]
# URLs opened at launch, left to right. Must be https.
# startup = ["https://chatgpt.com", "https://claude.ai"]

# Buttons offered by the prompt bar. Replaces the built-in list when set.
# [[providers.catalog]]
# name = "Claude"
# url = "https://claude.ai"

[logging]
# level = "info"                 # trace, debug, info, warn, error
"##
}
