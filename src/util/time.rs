use chrono::{DateTime, Local};

/// Timestamp used in generated file names, e.g. `20261016_142530`.
pub fn file_stamp(now: DateTime<Local>) -> String {
    now.format("%Y%m%d_%H%M%S").to_string()
}

/// `<prefix>_<timestamp>.<extension>` for the current local time.
pub fn timestamped_file_name(prefix: &str, extension: &str) -> String {
    format!("{prefix}_{}.{extension}", file_stamp(Local::now()))
}
