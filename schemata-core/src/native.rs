//! Native (Rust) types for schema fields.

use std::{collections::BTreeMap, fmt, str::FromStr};

use serde::{Deserialize, Serialize, Serializer};

use crate::error::UnknownType;

/// Runtime type a field value has when consumed from Rust.
///
/// Deserializes from its kind name (`text`, `float`, `integer`, `map`,
/// `boolean`, `bytes`) and serializes as the Rust type name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum NativeType {
    Text,
    Float,
    Integer,
    Map,
    Boolean,
    Bytes,
}

impl NativeType {
    /// Kind name used in configuration files
    pub fn kind(&self) -> &'static str {
        match self {
            NativeType::Text => "text",
            NativeType::Float => "float",
            NativeType::Integer => "integer",
            NativeType::Map => "map",
            NativeType::Boolean => "boolean",
            NativeType::Bytes => "bytes",
        }
    }

    /// The Rust type used to hold values of this type
    pub fn rust_type(&self) -> &'static str {
        match self {
            NativeType::Text => "String",
            NativeType::Float => "f64",
            NativeType::Integer => "i64",
            NativeType::Map => "serde_json::Map<String, serde_json::Value>",
            NativeType::Boolean => "bool",
            NativeType::Bytes => "Vec<u8>",
        }
    }
}

impl fmt::Display for NativeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.rust_type())
    }
}

impl FromStr for NativeType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(NativeType::Text),
            "float" => Ok(NativeType::Float),
            "integer" => Ok(NativeType::Integer),
            "map" => Ok(NativeType::Map),
            "boolean" => Ok(NativeType::Boolean),
            "bytes" => Ok(NativeType::Bytes),
            _ => Err(format!(
                "invalid native type '{}', expected one of: text, float, integer, map, boolean, bytes",
                s
            )),
        }
    }
}

impl TryFrom<String> for NativeType {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl Serialize for NativeType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.rust_type())
    }
}

/// Resolves type tokens to native types.
///
/// The built-in tokens always resolve. Any other token must be registered
/// explicitly; there is no open-ended fallback.
#[derive(Debug, Clone)]
pub struct NativeTypeRegistry {
    extra: BTreeMap<String, NativeType>,
}

impl NativeTypeRegistry {
    /// A registry with only the built-in tokens.
    pub fn empty() -> Self {
        Self {
            extra: BTreeMap::new(),
        }
    }

    /// Register an additional named type, replacing any previous entry.
    pub fn register(&mut self, name: impl Into<String>, native: NativeType) -> &mut Self {
        self.extra.insert(name.into(), native);
        self
    }

    /// Builder form of [`register`](Self::register).
    pub fn with(mut self, name: impl Into<String>, native: NativeType) -> Self {
        self.register(name, native);
        self
    }

    pub fn resolve(&self, token: &str) -> Result<NativeType, UnknownType> {
        if let Some(native) = builtin(token) {
            return Ok(native);
        }
        self.extra.get(token).copied().ok_or_else(|| {
            let mut supported: Vec<&str> = BUILTIN.to_vec();
            supported.extend(self.extra.keys().map(String::as_str));
            UnknownType::new(token, "native", &supported)
        })
    }
}

impl Default for NativeTypeRegistry {
    fn default() -> Self {
        Self::empty()
            .with("float", NativeType::Float)
            .with("int", NativeType::Integer)
    }
}

const BUILTIN: [&str; 10] = [
    "char",
    "string",
    "bigstring",
    "text",
    "double",
    "timestamp",
    "long",
    "JSON",
    "boolean",
    "blob",
];

fn builtin(token: &str) -> Option<NativeType> {
    match token {
        "char" | "string" | "bigstring" | "text" => Some(NativeType::Text),
        "double" | "timestamp" => Some(NativeType::Float),
        "long" => Some(NativeType::Integer),
        "JSON" => Some(NativeType::Map),
        "boolean" => Some(NativeType::Boolean),
        "blob" => Some(NativeType::Bytes),
        _ => None,
    }
}

/// Resolve a token against the default registry.
pub fn to_native_type(token: &str) -> Result<NativeType, UnknownType> {
    NativeTypeRegistry::default().resolve(token)
}
