use std::fmt::{self, Display};

use serde::Serialize;

/// A parsed annotation: `#[identity(attrs...)]`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Derive {
    pub identity: String,
    /// Empty when the annotation has no parenthesized section.
    pub attrs: Vec<NameValue>,
}

impl Derive {
    pub fn new(identity: impl Into<String>) -> Self {
        Derive {
            identity: identity.into(),
            attrs: vec![],
        }
    }

    pub fn with_attr(mut self, name: impl Into<String>, value: Value) -> Self {
        self.attrs.push(NameValue::new(name, value));
        self
    }

    /// First attribute called `name`. Names are not required to be unique.
    pub fn get(&self, name: &str) -> Option<&Value> {
        find_entry(&self.attrs, name)
    }
}

/// One `name = value` entry of an attribute list or map.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NameValue {
    pub name: String,
    pub value: Value,
}

impl NameValue {
    pub fn new(name: impl Into<String>, value: Value) -> Self {
        NameValue {
            name: name.into(),
            value,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Value {
    String(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
    StringList(Vec<String>),
    IntegerList(Vec<i64>),
    FloatList(Vec<f64>),
    BoolList(Vec<bool>),
    Map(Vec<NameValue>),
}

impl Value {
    pub fn kind_name(&self) -> &'static str {
        match self {
            Value::String(_) => "String",
            Value::Integer(_) => "Integer",
            Value::Float(_) => "Float",
            Value::Bool(_) => "Bool",
            Value::StringList(_) => "StringList",
            Value::IntegerList(_) => "IntegerList",
            Value::FloatList(_) => "FloatList",
            Value::BoolList(_) => "BoolList",
            Value::Map(_) => "Map",
        }
    }

    /// Looks up an entry of a `Map` value.
    pub fn get(&self, name: &str) -> Option<&Value> {
        match self {
            Value::Map(entries) => find_entry(entries, name),
            _ => None,
        }
    }
}

fn find_entry<'a>(entries: &'a [NameValue], name: &str) -> Option<&'a Value> {
    entries
        .iter()
        .find(|entry| entry.name == name)
        .map(|entry| &entry.value)
}

// Canonical text form. Parsing the output of these impls gives back an equal
// tree for anything the parser itself produced.

impl Display for Derive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#[{}", self.identity)?;
        if !self.attrs.is_empty() {
            write!(f, "(")?;
            write_separated(f, &self.attrs)?;
            write!(f, ")")?;
        }
        write!(f, "]")
    }
}

impl Display for NameValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.name, self.value)
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::String(value) => write!(f, "\"{}\"", value),
            Value::Integer(value) => write!(f, "{}", value),
            Value::Float(value) => write!(f, "{}", FloatText(*value)),
            Value::Bool(value) => write!(f, "{}", value),
            Value::StringList(values) => {
                let quoted: Vec<_> = values.iter().map(|value| format!("\"{}\"", value)).collect();
                write_list(f, &quoted)
            }
            Value::IntegerList(values) => write_list(f, values),
            Value::FloatList(values) => {
                let floats: Vec<_> = values.iter().copied().map(FloatText).collect();
                write_list(f, &floats)
            }
            Value::BoolList(values) => write_list(f, values),
            Value::Map(entries) => {
                write!(f, "{{")?;
                write_separated(f, entries)?;
                write!(f, "}}")
            }
        }
    }
}

/// Formats a float so it always lexes back as a float literal.
struct FloatText(f64);

impl Display for FloatText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = self.0.to_string();
        if text.contains('.') {
            write!(f, "{}", text)
        } else {
            write!(f, "{}.0", text)
        }
    }
}

fn write_list<T: Display>(f: &mut fmt::Formatter<'_>, items: &[T]) -> fmt::Result {
    write!(f, "[")?;
    write_separated(f, items)?;
    write!(f, "]")
}

fn write_separated<T: Display>(f: &mut fmt::Formatter<'_>, items: &[T]) -> fmt::Result {
    for (index, item) in items.iter().enumerate() {
        if index > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}", item)?;
    }
    Ok(())
}
