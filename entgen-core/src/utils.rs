//! Shared string utilities for identifier and literal handling.

/// Convert a string to PascalCase (e.g., "user_roles" -> "UserRoles")
pub fn to_pascal_case(s: &str) -> String {
    s.split('_')
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                None => String::new(),
                Some(c) => c.to_uppercase().chain(chars).collect(),
            }
        })
        .collect()
}

/// Convert a string to camelCase (e.g., "user_roles" -> "userRoles")
pub fn to_camel_case(s: &str) -> String {
    let pascal = to_pascal_case(s);
    let mut chars = pascal.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_lowercase().chain(chars).collect(),
    }
}

/// Convert a string to snake_case (e.g., "UserRoles" -> "user_roles")
pub fn to_snake_case(s: &str) -> String {
    let mut result = String::new();
    for (i, c) in s.chars().enumerate() {
        if c.is_uppercase() && i > 0 {
            result.push('_');
        }
        result.push(c.to_lowercase().next().unwrap());
    }
    result.replace('-', "_")
}

/// Strip a table prefix from a name, if present (e.g., "wp_users" -> "users")
pub fn remove_prefix(name: &str, prefix: &str) -> String {
    if prefix.is_empty() {
        return name.to_string();
    }
    name.strip_prefix(prefix).unwrap_or(name).to_string()
}

/// Wrap a value in single quotes for a PHP literal (e.g., "id" -> "'id'")
pub fn single_quote(s: &str) -> String {
    format!("'{}'", s)
}

/// Join values with a separator, single-quoting each (e.g., "'a', 'b'")
pub fn implode_and_quote(separator: &str, items: &[String]) -> String {
    items
        .iter()
        .map(|item| single_quote(item))
        .collect::<Vec<_>>()
        .join(separator)
}
