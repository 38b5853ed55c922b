/// Collapses blank or whitespace-only values to `None`.
pub fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|item| item.trim().to_string())
        .filter(|item| !item.is_empty())
}

pub fn parse_env_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|item| item.trim())
        .filter(|item| !item.is_empty())
        .map(ToString::to_string)
        .collect()
}

pub fn trim_trailing_slash(value: &str) -> String {
    value.trim().trim_end_matches('/').to_string()
}
