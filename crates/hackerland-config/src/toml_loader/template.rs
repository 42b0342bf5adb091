//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# Hackerland Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[layout]
# gap = 10               # 0-100
# outer_padding = 20     # 0-200
# border_width = 2       # 0-20
# master_split = 0.5     # 0.1-0.9
# mode = "master-stack"  # master-stack, monocle, grid
# passthrough = false

[bar]
# enabled = true
# height = 42            # 0-200
# position = "top"       # top, bottom

[animation]
# interpolation = "spring"  # spring, exponential
# speed = 0.2            # (0, 1], exponential only
# spring_tension = 180.0 # > 0
# spring_friction = 14.0 # >= 0
# max_dt = 0.1           # (0, 1] seconds
# tick_ms = 8            # 1-100

[drag]
# modifier = "alt"       # alt, super, ctrl, shift
# min_width = 50.0
# min_height = 50.0

[workspaces]
# count = 5              # 1-10, read once at startup

[rules]
# unmanaged_names = ["hackerbar", "hackerland-bg"]
# floating_names = []

[ipc]
# enabled = true
# socket_path = "/tmp/hackerland.sock"
# format = "line"        # line, json

[logging]
# level = "info"         # trace, debug, info, warn, error
"##
    .to_string()
}
