//! Mapping from raw MySQL column types to PHP types.
//!
//! A raw type descriptor looks like `int(10) unsigned`, `decimal(8,2)` or
//! `enum('a','b')`. Parsing never fails: unknown base types degrade to
//! [`PhpType::String`] so generation never aborts on an unfamiliar column.

/// PHP-facing type of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhpType {
    Int,
    Bool,
    Float,
    String,
}

impl PhpType {
    /// The type name as written in generated PHPDoc.
    pub fn as_str(&self) -> &'static str {
        match self {
            PhpType::Int => "int",
            PhpType::Bool => "bool",
            PhpType::Float => "float",
            PhpType::String => "string",
        }
    }
}

const INTEGER_TYPES: &[&str] = &["tinyint", "smallint", "mediumint", "int", "bigint"];

const STRING_TYPES: &[&str] = &[
    "char",
    "varchar",
    "binary",
    "varbinary",
    "tinyblob",
    "blob",
    "mediumblob",
    "longblob",
    "tinytext",
    "text",
    "mediumtext",
    "longtext",
    "date",
    "time",
    "datetime",
    "timestamp",
    "year",
    "geometry",
    "point",
    "linestring",
    "polygon",
    "geometrycollection",
    "multilinestring",
    "multipoint",
    "multipolygon",
];

/// A parsed raw column type descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnType {
    raw: String,
    base: String,
    size: Option<u32>,
    scale: Option<u32>,
    unsigned: bool,
}

impl ColumnType {
    /// Parse a raw descriptor like `int(10) unsigned` or `decimal(8,2)`.
    ///
    /// The base name is lowercased; a size that is not a plain integer
    /// (e.g. enum member lists) is ignored.
    pub fn parse(raw: &str) -> Self {
        let mut words = raw.split_whitespace();
        let head = words.next().unwrap_or("");
        let unsigned = words.next() == Some("unsigned");

        let (base, size, scale) = match head.split_once('(') {
            Some((base, rest)) => {
                let inner = rest.trim_end_matches(')');
                let (first, second) = match inner.split_once(',') {
                    Some((a, b)) => (a, Some(b)),
                    None => (inner, None),
                };
                (
                    base,
                    first.trim().parse::<u32>().ok(),
                    second.and_then(|s| s.trim().parse::<u32>().ok()),
                )
            }
            None => (head, None, None),
        };

        Self {
            raw: raw.to_string(),
            base: base.to_lowercase(),
            size,
            scale,
            unsigned,
        }
    }

    /// The full raw descriptor as reported by the schema source.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The lowercased base type name, e.g. "varchar".
    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn size(&self) -> Option<u32> {
        self.size
    }

    pub fn is_unsigned(&self) -> bool {
        self.unsigned
    }

    /// The PHP type this column maps to.
    ///
    /// A single-digit integer (`tinyint(1)` and friends) maps to `bool`,
    /// following the MySQL convention for boolean flags.
    pub fn php_type(&self) -> PhpType {
        if INTEGER_TYPES.contains(&self.base.as_str()) {
            if self.size == Some(1) {
                return PhpType::Bool;
            }
            return PhpType::Int;
        }
        match self.base.as_str() {
            "float" | "decimal" | "double" => PhpType::Float,
            "bit" => PhpType::Int,
            _ => PhpType::String,
        }
    }

    /// Human-readable size/precision description, when one applies.
    ///
    /// Boolean columns get no description; the raw descriptor shown next to
    /// the field already names the original type.
    pub fn description(&self) -> Option<String> {
        if INTEGER_TYPES.contains(&self.base.as_str()) {
            if self.size == Some(1) {
                return None;
            }
            return self.size.map(|size| format!("{} digits long", size));
        }
        match self.base.as_str() {
            "float" | "decimal" => {
                let size = self.size?;
                let mut description = format!("{} digits long", size);
                if let Some(scale) = self.scale {
                    description.push_str(&format!(" and {} decimal digits long", scale));
                }
                Some(description)
            }
            "double" => None,
            "bit" => Some("1|0".to_string()),
            "enum" | "set" => None,
            base if STRING_TYPES.contains(&base) => self.size.map(|size| {
                if size == 1 {
                    "1 character".to_string()
                } else {
                    format!("{} characters", size)
                }
            }),
            _ => None,
        }
    }

    /// Whether this column should be surfaced through the date accessor.
    pub fn is_date_like(&self) -> bool {
        self.base.contains("date") || self.base.contains("time") || self.base.contains("year")
    }
}
