/// Alias schema: the static reference list of column names and the
/// caller-requested column selection.
///
/// Validation happens against this static list before any network call, so a
/// bad `--columns` argument fails without touching the API.
use thiserror::Error;

/// Every column an addy.io alias record exposes, in the upstream schema's
/// natural order. This is the default projection and the reference list that
/// `--columns` is validated against.
pub const SCHEMA_COLUMNS: &[&str] = &[
    "id",
    "user_id",
    "aliasable_id",
    "aliasable_type",
    "local_part",
    "extension",
    "domain",
    "email",
    "active",
    "description",
    "from_name",
    "emails_forwarded",
    "emails_blocked",
    "emails_replied",
    "emails_sent",
    "recipients",
    "last_forwarded",
    "last_blocked",
    "last_replied",
    "last_sent",
    "created_at",
    "updated_at",
    "deleted_at",
];

/// Errors from column validation and projection.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// A requested column is not part of the known alias schema.
    #[error("unknown column '{name}'")]
    UnknownColumn {
        /// The rejected column name.
        name: String,
    },

    /// A column was requested more than once.
    #[error("duplicate column '{name}'")]
    DuplicateColumn {
        /// The repeated column name.
        name: String,
    },

    /// `--columns` was given but named no columns.
    #[error("column list is empty")]
    EmptyColumnList,

    /// A fetched record lacks a requested column. Indicates a mismatch
    /// between the requested columns and the upstream schema version.
    #[error("record is missing column '{name}'")]
    MissingField {
        /// The absent column name.
        name: String,
    },
}

/// An ordered, validated selection of column names.
#[derive(Debug, Clone)]
pub struct ColumnSpec(Vec<String>);

impl ColumnSpec {
    /// All known columns in schema order.
    #[must_use]
    pub fn all() -> Self {
        Self(SCHEMA_COLUMNS.iter().map(|&c| c.to_owned()).collect())
    }

    /// Parse and validate a comma-separated column list.
    ///
    /// Names are trimmed of surrounding whitespace. Order is preserved.
    ///
    /// # Errors
    ///
    /// - `SchemaError::UnknownColumn` — a name is not in [`SCHEMA_COLUMNS`]
    /// - `SchemaError::DuplicateColumn` — a name appears twice
    /// - `SchemaError::EmptyColumnList` — no names at all
    pub fn parse(input: &str) -> Result<Self, SchemaError> {
        let mut columns: Vec<String> = Vec::new();
        for name in input.split(',').map(str::trim).filter(|s| !s.is_empty()) {
            if !SCHEMA_COLUMNS.contains(&name) {
                return Err(SchemaError::UnknownColumn {
                    name: name.to_owned(),
                });
            }
            if columns.iter().any(|c| c.as_str() == name) {
                return Err(SchemaError::DuplicateColumn {
                    name: name.to_owned(),
                });
            }
            columns.push(name.to_owned());
        }
        if columns.is_empty() {
            return Err(SchemaError::EmptyColumnList);
        }
        Ok(Self(columns))
    }

    /// The selected column names, in output order.
    #[must_use]
    pub fn columns(&self) -> &[String] {
        &self.0
    }
}
