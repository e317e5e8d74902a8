//! Naming rules for generated PHP models.

use entgen_core::{pluralize, remove_prefix, singularize, to_camel_case, to_pascal_case};

/// Target-language naming conventions.
///
/// Defines how table names become class and accessor names, and how
/// reserved identifiers are avoided.
#[derive(Debug, Clone, Copy)]
pub struct NamingConvention {
    /// Transform a table name to a class name (e.g. "user_roles" -> "UserRole")
    pub table_to_class: fn(&str) -> String,
    /// Transform a table name to an accessor method base name
    pub table_to_method: fn(&str) -> String,
    /// List of reserved words in the language (lowercase)
    pub reserved_words: &'static [&'static str],
    /// Rewrite a reserved word into a safe identifier
    pub escape_reserved: fn(&str) -> String,
}

impl NamingConvention {
    /// Check if a name is a reserved word (case-insensitive, PHP style).
    pub fn is_reserved(&self, name: &str) -> bool {
        self.reserved_words.contains(&name.to_lowercase().as_str())
    }

    /// Get a safe name, escaping if necessary.
    pub fn safe_name(&self, name: &str) -> String {
        if self.is_reserved(name) {
            (self.escape_reserved)(name)
        } else {
            name.to_string()
        }
    }
}

fn table_to_php_class(table: &str) -> String {
    to_pascal_case(&singularize(table))
}

fn escape_with_relation_suffix(name: &str) -> String {
    format!("{}_relation", name)
}

/// PHP naming conventions.
pub const PHP_NAMING: NamingConvention = NamingConvention {
    table_to_class: table_to_php_class,
    table_to_method: to_camel_case,
    reserved_words: &[
        "abstract",
        "and",
        "array",
        "as",
        "break",
        "case",
        "catch",
        "class",
        "clone",
        "const",
        "continue",
        "declare",
        "default",
        "do",
        "die",
        "echo",
        "else",
        "elseif",
        "empty",
        "enddeclare",
        "endfor",
        "endforeach",
        "endif",
        "endswitch",
        "endwhile",
        "eval",
        "exit",
        "extends",
        "final",
        "for",
        "foreach",
        "function",
        "global",
        "goto",
        "if",
        "implements",
        "include",
        "include_once",
        "interface",
        "isset",
        "instanceof",
        "list",
        "namespace",
        "new",
        "or",
        "print",
        "private",
        "protected",
        "public",
        "require",
        "require_once",
        "return",
        "static",
        "switch",
        "throw",
        "try",
        "unset",
        "use",
        "var",
        "while",
        "xor",
    ],
    escape_reserved: escape_with_relation_suffix,
};

/// Derive the model class name for a table: strip the prefix, singularize,
/// PascalCase (e.g. "wp_user_roles" with prefix "wp_" -> "UserRole").
pub fn class_name(table: &str, prefix: &str) -> String {
    (PHP_NAMING.table_to_class)(&remove_prefix(table, prefix))
}

/// Derive a relation accessor name for a table.
///
/// camelCase, singular for to-one relations and plural for to-many, with
/// reserved words suffixed so generated methods always parse.
pub fn method_name(table: &str, prefix: &str, plural: bool) -> String {
    let base = (PHP_NAMING.table_to_method)(&remove_prefix(table, prefix));
    let name = if plural {
        pluralize(&base)
    } else {
        singularize(&base)
    };
    PHP_NAMING.safe_name(&name)
}
