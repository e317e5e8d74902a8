use entgen_core::ColumnType;
use serde::Deserialize;

/// Key indicator of a column, as reported by `DESCRIBE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(from = "String")]
pub enum KeyKind {
    /// Not part of any key
    #[default]
    None,
    /// Primary key member (`PRI`)
    Primary,
    /// Unique index member (`UNI`)
    Unique,
    /// Non-unique index member (`MUL`), typically a foreign key column
    Multiple,
}

impl KeyKind {
    /// Parse a MySQL `Key` indicator.
    pub fn from_mysql(value: &str) -> Self {
        match value {
            "PRI" => KeyKind::Primary,
            "UNI" => KeyKind::Unique,
            "MUL" => KeyKind::Multiple,
            _ => KeyKind::None,
        }
    }
}

impl From<String> for KeyKind {
    fn from(value: String) -> Self {
        Self::from_mysql(&value)
    }
}

/// One column as described by the schema source.
///
/// This is the fixed-shape record for a `DESCRIBE` row: name, raw native
/// type string, key indicator, extra flags, nullability and comment text.
/// Immutable once read from the source.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Column {
    pub name: String,
    #[serde(rename = "type")]
    pub raw_type: String,
    #[serde(default)]
    pub key: KeyKind,
    #[serde(default)]
    pub extra: String,
    #[serde(default = "default_nullable")]
    pub nullable: bool,
    #[serde(default)]
    pub comment: String,
}

fn default_nullable() -> bool {
    true
}

impl Column {
    pub fn is_primary(&self) -> bool {
        self.key == KeyKind::Primary
    }

    pub fn is_unique(&self) -> bool {
        self.key == KeyKind::Unique
    }

    pub fn is_auto_increment(&self) -> bool {
        self.extra.contains("auto_increment")
    }

    /// Parse the raw native type descriptor.
    pub fn column_type(&self) -> ColumnType {
        ColumnType::parse(&self.raw_type)
    }
}
