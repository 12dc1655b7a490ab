/// Pick the tracing filter directive: `-v` flags win, then `LOG_LEVEL`,
/// then `RUST_LOG`, then `info`.
pub fn filter_directive(verbose: u8, log_level: Option<&str>, rust_log: Option<&str>) -> String {
    match verbose {
        0 => {}
        1 => return "debug".to_string(),
        _ => return "trace".to_string(),
    }

    fn non_blank(v: Option<&str>) -> Option<&str> {
        v.map(str::trim).filter(|v| !v.is_empty())
    }
    if let Some(level) = non_blank(log_level) {
        return match level.to_lowercase().as_str() {
            "warning" => "warn".to_string(),
            "critical" | "fatal" => "error".to_string(),
            other => other.to_string(),
        };
    }
    non_blank(rust_log)
        .map(str::to_string)
        .unwrap_or_else(|| "info".to_string())
}
