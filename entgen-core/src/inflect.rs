//! English inflection for table and relation names.
//!
//! Implements the standard English pluralization rules: irregular nouns,
//! uncountables, and suffix rewrites. Only the trailing word of an
//! identifier matters for generated names (e.g. "userRole" -> "userRoles"),
//! which suffix rules handle naturally.

const IRREGULAR: &[(&str, &str)] = &[
    ("person", "people"),
    ("child", "children"),
    ("man", "men"),
    ("woman", "women"),
    ("mouse", "mice"),
    ("goose", "geese"),
    ("foot", "feet"),
    ("tooth", "teeth"),
];

const UNCOUNTABLE: &[&str] = &[
    "data",
    "equipment",
    "information",
    "money",
    "news",
    "series",
    "sheep",
    "species",
];

fn is_uncountable(word: &str) -> bool {
    UNCOUNTABLE.contains(&word.to_lowercase().as_str())
}

/// Re-apply the leading capitalization of `original` to `replacement`.
fn match_case(original: &str, replacement: &str) -> String {
    match original.chars().next() {
        Some(c) if c.is_uppercase() => {
            let mut chars = replacement.chars();
            match chars.next() {
                None => String::new(),
                Some(r) => r.to_uppercase().chain(chars).collect(),
            }
        }
        _ => replacement.to_string(),
    }
}

fn ends_with_consonant_y(s: &str) -> bool {
    let mut chars = s.chars().rev();
    if chars.next() != Some('y') {
        return false;
    }
    match chars.next() {
        Some(c) => !matches!(c, 'a' | 'e' | 'i' | 'o' | 'u'),
        None => false,
    }
}

/// Pluralize an English noun (e.g., "role" -> "roles", "category" -> "categories")
pub fn pluralize(s: &str) -> String {
    if s.is_empty() || is_uncountable(s) {
        return s.to_string();
    }
    let lower = s.to_lowercase();
    for (singular, plural) in IRREGULAR {
        if lower == *singular {
            return match_case(s, plural);
        }
        if lower == *plural {
            return s.to_string();
        }
    }
    if ends_with_consonant_y(s) {
        return format!("{}ies", &s[..s.len() - 1]);
    }
    if lower.ends_with('s')
        || lower.ends_with('x')
        || lower.ends_with('z')
        || lower.ends_with("ch")
        || lower.ends_with("sh")
    {
        return format!("{}es", s);
    }
    if lower.ends_with("fe") {
        return format!("{}ves", &s[..s.len() - 2]);
    }
    if lower.ends_with('f') {
        return format!("{}ves", &s[..s.len() - 1]);
    }
    format!("{}s", s)
}

/// Singularize an English noun (e.g., "users" -> "user", "categories" -> "category")
pub fn singularize(s: &str) -> String {
    if s.is_empty() || is_uncountable(s) {
        return s.to_string();
    }
    let lower = s.to_lowercase();
    for (singular, plural) in IRREGULAR {
        if lower == *plural {
            return match_case(s, singular);
        }
        if lower == *singular {
            return s.to_string();
        }
    }
    if lower.ends_with("ies") && s.len() > 3 {
        return format!("{}y", &s[..s.len() - 3]);
    }
    if lower.ends_with("ves") {
        return format!("{}f", &s[..s.len() - 3]);
    }
    if ["ses", "xes", "zes", "ches", "shes"]
        .iter()
        .any(|suffix| lower.ends_with(suffix))
    {
        return s[..s.len() - 2].to_string();
    }
    if lower.ends_with('s') && !lower.ends_with("ss") {
        return s[..s.len() - 1].to_string();
    }
    s.to_string()
}
