//! Type mapping between schema type tokens and DDL column types.

use std::{fmt, str::FromStr};

use crate::error::UnknownType;

/// Abstract field type tokens understood by the schema format.
///
/// This is a dialect-independent vocabulary. Use a [`TypeMapper`] to convert
/// a token to a dialect-specific column type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeToken {
    Char,
    String,
    BigString,
    Text,
    Double,
    Timestamp,
    Long,
    Json,
    Boolean,
    Blob,
    Float,
    Int,
    BigInt,
    Date,
}

impl TypeToken {
    /// Every token in the vocabulary.
    pub const ALL: [TypeToken; 14] = [
        TypeToken::Char,
        TypeToken::String,
        TypeToken::BigString,
        TypeToken::Text,
        TypeToken::Double,
        TypeToken::Timestamp,
        TypeToken::Long,
        TypeToken::Json,
        TypeToken::Boolean,
        TypeToken::Blob,
        TypeToken::Float,
        TypeToken::Int,
        TypeToken::BigInt,
        TypeToken::Date,
    ];

    /// Get the token as written in schema documents
    pub fn as_str(&self) -> &'static str {
        match self {
            TypeToken::Char => "char",
            TypeToken::String => "string",
            TypeToken::BigString => "bigstring",
            TypeToken::Text => "text",
            TypeToken::Double => "double",
            TypeToken::Timestamp => "timestamp",
            TypeToken::Long => "long",
            TypeToken::Json => "JSON",
            TypeToken::Boolean => "boolean",
            TypeToken::Blob => "blob",
            TypeToken::Float => "float",
            TypeToken::Int => "int",
            TypeToken::BigInt => "bigint",
            TypeToken::Date => "date",
        }
    }

    /// SQL column type for this token, if SQL has one.
    pub fn sql_type(&self) -> Option<&'static str> {
        match self {
            TypeToken::Float => Some("float"),
            TypeToken::Double => Some("double"),
            // 31 bit with sign
            TypeToken::Int => Some("int"),
            // 63 bit with sign
            TypeToken::Long | TypeToken::BigInt => Some("bigint"),
            TypeToken::Date => Some("datetime(6)"),
            TypeToken::String => Some("varchar(16)"),
            TypeToken::BigString => Some("varchar(80)"),
            TypeToken::Text => Some("text"),
            TypeToken::Timestamp => Some("timestamp"),
            TypeToken::Json => Some("JSON"),
            TypeToken::Char | TypeToken::Boolean | TypeToken::Blob => None,
        }
    }

    /// CQL column type for this token, if CQL has one.
    pub fn cql_type(&self) -> Option<&'static str> {
        match self {
            TypeToken::Float => Some("float"),
            TypeToken::Int => Some("int"),
            TypeToken::Long | TypeToken::BigInt => Some("bigint"),
            TypeToken::String | TypeToken::Char => Some("ascii"),
            TypeToken::Boolean => Some("boolean"),
            TypeToken::Blob => Some("blob"),
            TypeToken::Double
            | TypeToken::BigString
            | TypeToken::Text
            | TypeToken::Timestamp
            | TypeToken::Json
            | TypeToken::Date => None,
        }
    }
}

impl fmt::Display for TypeToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TypeToken {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TypeToken::ALL
            .into_iter()
            .find(|token| token.as_str() == s)
            .ok_or_else(|| format!("unknown type token '{}'", s))
    }
}

/// Target DDL dialect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dialect {
    Sql,
    Cql,
}

impl Dialect {
    pub fn as_str(&self) -> &'static str {
        match self {
            Dialect::Sql => "sql",
            Dialect::Cql => "cql",
        }
    }

    /// The type mapper for this dialect
    pub fn mapper(&self) -> &'static dyn TypeMapper {
        match self {
            Dialect::Sql => &SqlTypeMapper,
            Dialect::Cql => &CqlTypeMapper,
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Dialect {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "sql" => Ok(Dialect::Sql),
            "cql" => Ok(Dialect::Cql),
            _ => Err(format!("invalid dialect '{}', expected 'sql' or 'cql'", s)),
        }
    }
}

/// Trait for mapping schema type tokens to dialect-specific DDL.
///
/// Implement this trait for each target dialect.
pub trait TypeMapper: Sync {
    /// The target dialect
    fn dialect(&self) -> Dialect;

    /// Map a type token to a column type string
    fn map_type(&self, token: &str) -> Result<&'static str, UnknownType>;

    /// Quote a column name
    fn quote_ident(&self, name: &str) -> String;

    /// Whether column definitions accept a `DEFAULT` clause
    fn supports_default(&self) -> bool;

    /// Whether `DROP COLUMN` statements repeat the column type
    fn drop_keeps_type(&self) -> bool {
        false
    }
}

/// SQL (MySQL flavoured) type mapper
pub struct SqlTypeMapper;

impl TypeMapper for SqlTypeMapper {
    fn dialect(&self) -> Dialect {
        Dialect::Sql
    }

    fn map_type(&self, token: &str) -> Result<&'static str, UnknownType> {
        to_sql_type(token)
    }

    fn quote_ident(&self, name: &str) -> String {
        format!("`{}`", name)
    }

    fn supports_default(&self) -> bool {
        true
    }

    fn drop_keeps_type(&self) -> bool {
        true
    }
}

/// Cassandra CQL type mapper
pub struct CqlTypeMapper;

impl TypeMapper for CqlTypeMapper {
    fn dialect(&self) -> Dialect {
        Dialect::Cql
    }

    fn map_type(&self, token: &str) -> Result<&'static str, UnknownType> {
        to_cql_type(token)
    }

    fn quote_ident(&self, name: &str) -> String {
        format!("\"{}\"", name)
    }

    fn supports_default(&self) -> bool {
        false
    }
}

/// Convert a type token to its SQL column type.
pub fn to_sql_type(token: &str) -> Result<&'static str, UnknownType> {
    token
        .parse::<TypeToken>()
        .ok()
        .and_then(|t| t.sql_type())
        .ok_or_else(|| UnknownType::new(token, "sql", &supported(TypeToken::sql_type)))
}

/// Convert a type token to its CQL column type.
pub fn to_cql_type(token: &str) -> Result<&'static str, UnknownType> {
    token
        .parse::<TypeToken>()
        .ok()
        .and_then(|t| t.cql_type())
        .ok_or_else(|| UnknownType::new(token, "cql", &supported(TypeToken::cql_type)))
}

fn supported(map: fn(&TypeToken) -> Option<&'static str>) -> Vec<&'static str> {
    TypeToken::ALL
        .iter()
        .filter(|t| map(t).is_some())
        .map(TypeToken::as_str)
        .collect()
}
