//! Value parsers for CLI argument validation.

use std::path::PathBuf;

/// Validates that the configuration file exists and looks like TOML.
pub fn validate_config_file_path(value: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(value);

    if !path.exists() {
        return Err(format!("Configuration file does not exist: {}", value));
    }
    if !path.is_file() {
        return Err(format!("Configuration path is not a file: {}", value));
    }
    if path.extension().and_then(|e| e.to_str()) != Some("toml") {
        return Err(format!("Configuration file must be a .toml file: {}", value));
    }

    Ok(path)
}

/// Validates a bind address: 'localhost', a hostname, or a dotted IPv4.
pub fn validate_host_address(value: &str) -> Result<String, String> {
    if value.is_empty() {
        return Err("Host address cannot be empty".to_string());
    }

    if value == "localhost" || value.parse::<std::net::IpAddr>().is_ok() {
        return Ok(value.to_string());
    }

    // Hostname: alphanumerics, hyphens, and dots only
    if value
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '.')
    {
        return Ok(value.to_string());
    }

    Err(format!("Invalid host address: {}", value))
}

/// Validates a TCP port (1-65535).
pub fn validate_port(value: &str) -> Result<u16, String> {
    let port: u16 = value
        .parse()
        .map_err(|_| format!("Port must be a number between 1 and 65535, got: {}", value))?;
    if port == 0 {
        return Err("Port 0 is not a valid listening port".to_string());
    }
    Ok(port)
}

/// Validates rollback step counts (1-100).
pub fn validate_rollback_steps(value: &str) -> Result<u32, String> {
    let steps: u32 = value
        .parse()
        .map_err(|_| format!("Rollback steps must be a number, got: {}", value))?;
    if steps == 0 || steps > 100 {
        return Err("Rollback steps must be between 1 and 100".to_string());
    }
    Ok(steps)
}
