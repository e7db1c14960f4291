use super::SettingsError;

/// `"a, b,"` yields `["a", "b"]`.
pub fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}

// unrecognised words are an error, not truthy
pub fn parse_flag(name: &'static str, value: &str) -> Result<bool, SettingsError> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "t" | "yes" | "y" | "on" => Ok(true),
        "" | "0" | "false" | "f" | "no" | "n" | "off" => Ok(false),
        _ => Err(SettingsError::invalid(
            name,
            value,
            "expected one of true/false, yes/no, on/off, 1/0",
        )),
    }
}

pub fn require<T>(name: &'static str, value: Option<T>) -> Result<T, SettingsError> {
    value.ok_or(SettingsError::MissingVariable(name))
}
