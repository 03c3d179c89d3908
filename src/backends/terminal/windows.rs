//! `wmctrl -lx` listing helpers.

/// Window ids whose listing line contains `app_identity`.
///
/// `wmctrl -lx` prints one window per line with the id first, e.g.
/// `0x03a00003  0 gnome-terminal-server.Gnome-terminal  host  ~`.
pub fn matching_window_ids(listing: &str, app_identity: &str) -> Vec<String> {
    listing
        .lines()
        .filter(|line| line.contains(app_identity))
        .filter_map(|line| line.split_whitespace().next())
        .map(str::to_string)
        .collect()
}
