//! # Dynamic Records
//!
//! A [`Record`] wraps one JSON object returned by the API. Every top-level key
//! is reachable two ways:
//!
//! - **by key**: [`Record::get`] / [`Record::set`] use the key exactly as the
//!   document spells it (`"extraVars"`).
//! - **by accessor**: [`Record::attr`] / [`Record::set_attr`] use the
//!   accessor name derived from the key (`"extra_vars"`, see
//!   [`naming`](super::naming)).
//!
//! The two views always agree: adding a key through [`Record::set`] binds its
//! accessor on the spot.
//!
//! ## Wrapping
//!
//! Values are materialized into an owned [`Field`] tree when the record is
//! built. Nested objects become child records and arrays become lists whose
//! object elements become child records, unless the field's accessor name is
//! in the record's [`ExclusionSet`], in which case the value is kept exactly as
//! parsed. Children are built with the set [descended](ExclusionSet::descend)
//! one level.
//!
//! The caller's document is never aliased: a string is parsed fresh and a map
//! is cloned before wrapping.
//!
//! ```rust
//! use tower_client::framework::Record;
//!
//! let person = Record::parse(r#"{
//!     "firstName": "jeff",
//!     "address": {"street": "22 charlotte rd", "zipCode": "01013"}
//! }"#).unwrap();
//!
//! assert_eq!(person.attr("first_name").unwrap().as_str(), Some("jeff"));
//! let address = person.attr("address").unwrap().as_record().unwrap();
//! assert_eq!(address.attr("zip_code").unwrap().as_str(), Some("01013"));
//!
//! // The original document shape is always recoverable.
//! assert_eq!(person.to_value()["address"]["zipCode"], "01013");
//! ```

use super::error::{ClientError, Result};
use super::exclusion::{ExclusionSet, Schema};
use super::naming;
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};
use serde_json::{Map, Number, Value};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::{Arc, LazyLock};
use tracing::debug;

/// Kind reported by records that belong to no particular resource.
pub const RECORD_KIND: &str = "Record";

static NO_EXCLUSIONS: LazyLock<Arc<ExclusionSet>> =
    LazyLock::new(|| Arc::new(ExclusionSet::default()));

/// One wrapped value inside a [`Record`].
#[derive(Clone)]
pub enum Field {
    /// Scalars, and excluded fields kept as parsed.
    Value(Value),
    /// A nested object.
    Record(Record),
    /// An array; object elements are records, everything else is a `Value`.
    List(Vec<Field>),
}

impl Field {
    pub fn as_value(&self) -> Option<&Value> {
        match self {
            Field::Value(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_record(&self) -> Option<&Record> {
        match self {
            Field::Record(record) => Some(record),
            _ => None,
        }
    }

    pub fn as_record_mut(&mut self) -> Option<&mut Record> {
        match self {
            Field::Record(record) => Some(record),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Field]> {
        match self {
            Field::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        self.as_value().and_then(Value::as_str)
    }

    pub fn as_i64(&self) -> Option<i64> {
        self.as_value().and_then(Value::as_i64)
    }

    pub fn as_u64(&self) -> Option<u64> {
        self.as_value().and_then(Value::as_u64)
    }

    pub fn as_f64(&self) -> Option<f64> {
        self.as_value().and_then(Value::as_f64)
    }

    pub fn as_bool(&self) -> Option<bool> {
        self.as_value().and_then(Value::as_bool)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Field::Value(Value::Null))
    }

    /// Reads `key` from this field whether it was wrapped or kept raw.
    pub fn lookup(&self, key: &str) -> Option<Value> {
        match self {
            Field::Record(record) => record.get(key).map(Field::to_value),
            Field::Value(Value::Object(map)) => map.get(key).cloned(),
            _ => None,
        }
    }

    /// Renders the field back into plain JSON.
    pub fn to_value(&self) -> Value {
        match self {
            Field::Value(value) => value.clone(),
            Field::Record(record) => record.to_value(),
            Field::List(items) => Value::Array(items.iter().map(Field::to_value).collect()),
        }
    }

    fn inspect(&self) -> String {
        match self {
            Field::Value(value) => value.to_string(),
            Field::Record(record) => record.inspect(),
            Field::List(items) => {
                let inner: Vec<String> = items.iter().map(Field::inspect).collect();
                format!("[{}]", inner.join(", "))
            }
        }
    }

    fn eql(&self, other: &Field) -> bool {
        match (self, other) {
            (Field::Value(a), Field::Value(b)) => a == b,
            (Field::Record(a), Field::Record(b)) => a.eql(b),
            (Field::List(a), Field::List(b)) => {
                a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.eql(y))
            }
            _ => false,
        }
    }
}

impl PartialEq for Field {
    fn eq(&self, other: &Field) -> bool {
        match (self, other) {
            (Field::Value(a), Field::Value(b)) => loose_eq(a, b),
            (Field::Record(a), Field::Record(b)) => a == b,
            (Field::List(a), Field::List(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Debug for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.inspect())
    }
}

impl Serialize for Field {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Field::Value(value) => value.serialize(serializer),
            Field::Record(record) => record.serialize(serializer),
            Field::List(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
        }
    }
}

// Numbers compare by value so that `1` and `1.0` are equal.
fn loose_eq(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => numbers_eq(x, y),
        (Value::Array(x), Value::Array(y)) => {
            x.len() == y.len() && x.iter().zip(y).all(|(a, b)| loose_eq(a, b))
        }
        (Value::Object(x), Value::Object(y)) => {
            x.len() == y.len()
                && x
                    .iter()
                    .all(|(k, v)| y.get(k).is_some_and(|other| loose_eq(v, other)))
        }
        _ => a == b,
    }
}

// Integers compare exactly; f64 is only involved when one side is a float.
fn numbers_eq(x: &Number, y: &Number) -> bool {
    match (x.is_f64(), y.is_f64()) {
        (false, false) => x == y,
        (true, true) => x.as_f64() == y.as_f64(),
        (true, false) => float_matches_integer(x.as_f64(), y),
        (false, true) => float_matches_integer(y.as_f64(), x),
    }
}

fn float_matches_integer(float: Option<f64>, int: &Number) -> bool {
    const TWO_POW_63: f64 = 9_223_372_036_854_775_808.0;
    let Some(f) = float.filter(|f| f.fract() == 0.0) else {
        return false;
    };
    if let Some(u) = int.as_u64() {
        (0.0..2.0 * TWO_POW_63).contains(&f) && f as u64 == u
    } else if let Some(i) = int.as_i64() {
        (-TWO_POW_63..TWO_POW_63).contains(&f) && f as i64 == i
    } else {
        false
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// A JSON object exposed through per-key accessors.
#[derive(Clone)]
pub struct Record {
    kind: &'static str,
    exclusions: Arc<ExclusionSet>,
    child_exclusions: Arc<ExclusionSet>,
    /// Original key and wrapped value, in document order.
    slots: Vec<(String, Field)>,
    /// Key to position in `slots`.
    slot_index: HashMap<String, usize>,
    /// Accessor name and the key it reads, in binding order.
    accessors: Vec<(String, String)>,
    /// Accessor name to position in `accessors`.
    accessor_index: HashMap<String, usize>,
}

impl Record {
    /// An empty record with no exclusions.
    pub fn new() -> Self {
        Self::build(RECORD_KIND, Map::new(), NO_EXCLUSIONS.clone())
    }

    /// Parses a JSON object with no exclusions.
    pub fn parse(json: &str) -> Result<Self> {
        Self::parse_with(RECORD_KIND, json, NO_EXCLUSIONS.clone())
    }

    /// Parses a JSON object using the exclusions declared by `S`.
    pub fn parse_as<S: Schema>(json: &str) -> Result<Self> {
        let kind = std::any::type_name::<S>();
        let kind = kind.split('<').next().unwrap_or(kind);
        let kind = kind.rsplit("::").next().unwrap_or(RECORD_KIND);
        Self::parse_with(kind, json, S::exclusions())
    }

    pub fn parse_with(kind: &'static str, json: &str, exclusions: Arc<ExclusionSet>) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value_with(kind, value, exclusions)
    }

    /// Wraps a copy of `map` with no exclusions.
    pub fn from_map(map: &Map<String, Value>) -> Self {
        Self::build(RECORD_KIND, map.clone(), NO_EXCLUSIONS.clone())
    }

    pub fn from_map_with(kind: &'static str, map: &Map<String, Value>, exclusions: Arc<ExclusionSet>) -> Self {
        Self::build(kind, map.clone(), exclusions)
    }

    /// Takes ownership of an already parsed document, which must be an object.
    pub fn from_value_with(kind: &'static str, value: Value, exclusions: Arc<ExclusionSet>) -> Result<Self> {
        match value {
            Value::Object(map) => Ok(Self::build(kind, map, exclusions)),
            other => Err(ClientError::NotAnObject {
                kind: kind.to_string(),
                found: type_name(&other),
            }),
        }
    }

    fn build(kind: &'static str, map: Map<String, Value>, exclusions: Arc<ExclusionSet>) -> Self {
        let child_exclusions = if exclusions.is_empty() {
            exclusions.clone()
        } else {
            Arc::new(exclusions.descend())
        };
        let mut record = Self {
            kind,
            exclusions,
            child_exclusions,
            slots: Vec::with_capacity(map.len()),
            slot_index: HashMap::with_capacity(map.len()),
            accessors: Vec::with_capacity(map.len()),
            accessor_index: HashMap::with_capacity(map.len()),
        };
        for (key, value) in map {
            let accessor = naming::snake_case(&key);
            let field = record.wrap(&accessor, value);
            record.push_slot(key, field, accessor);
        }
        record
    }

    fn wrap(&self, accessor: &str, value: Value) -> Field {
        if self.exclusions.contains(accessor) {
            return Field::Value(value);
        }
        match value {
            Value::Object(map) => Field::Record(self.child(map)),
            Value::Array(items) => Field::List(
                items
                    .into_iter()
                    .map(|item| match item {
                        Value::Object(map) => Field::Record(self.child(map)),
                        other => Field::Value(other),
                    })
                    .collect(),
            ),
            other => Field::Value(other),
        }
    }

    fn child(&self, map: Map<String, Value>) -> Record {
        Self::build(RECORD_KIND, map, self.child_exclusions.clone())
    }

    // Appends a new key and binds its accessor.
    fn push_slot(&mut self, key: String, field: Field, accessor: String) {
        self.slot_index.insert(key.clone(), self.slots.len());
        self.slots.push((key.clone(), field));
        self.bind(accessor, key);
    }

    fn bind(&mut self, accessor: String, key: String) {
        let name = naming::disambiguate(accessor.clone(), |candidate| {
            naming::is_reserved(candidate) || self.accessor_index.contains_key(candidate)
        });
        if name != accessor {
            debug!(kind = self.kind, key = %key, accessor = %name, "Accessor renamed");
        }
        self.accessor_index.insert(name.clone(), self.accessors.len());
        self.accessors.push((name, key));
    }

    fn slot(&self, key: &str) -> Option<usize> {
        self.slot_index.get(key).copied()
    }

    // --- Indexed access ---

    /// Reads the value stored under the original `key`.
    pub fn get(&self, key: &str) -> Option<&Field> {
        self.slot(key).map(|i| &self.slots[i].1)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Field> {
        let i = self.slot(key)?;
        Some(&mut self.slots[i].1)
    }

    /// Stores `value` under the original `key`, wrapping it like a parsed value.
    ///
    /// A new key gets an accessor immediately; an existing key keeps the one
    /// it already has.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        let key = key.into();
        let accessor = naming::snake_case(&key);
        let field = self.wrap(&accessor, value.into());
        match self.slot(&key) {
            Some(i) => self.slots[i].1 = field,
            None => self.push_slot(key, field, accessor),
        }
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.slot(key).is_some()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.slots.iter().map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    // --- Accessor access ---

    /// Accessor names in binding order.
    pub fn accessors(&self) -> impl Iterator<Item = &str> {
        self.accessors.iter().map(|(name, _)| name.as_str())
    }

    /// The original key an accessor reads.
    pub fn key_for(&self, accessor: &str) -> Option<&str> {
        self.accessor_index
            .get(accessor)
            .map(|&i| self.accessors[i].1.as_str())
    }

    /// Reads a field through its accessor name.
    pub fn attr(&self, accessor: &str) -> Option<&Field> {
        self.key_for(accessor).and_then(|key| self.get(key))
    }

    /// Writes a field through its accessor name.
    pub fn set_attr(&mut self, accessor: &str, value: impl Into<Value>) -> Result<()> {
        let key = self
            .key_for(accessor)
            .map(str::to_string)
            .ok_or_else(|| ClientError::UnknownAttribute {
                kind: self.kind.to_string(),
                name: accessor.to_string(),
            })?;
        self.set(key, value);
        Ok(())
    }

    // --- Identity ---

    /// Name of the resource type this record was built for.
    pub fn kind(&self) -> &'static str {
        self.kind
    }

    /// The exclusions applied at this level.
    pub fn exclusions(&self) -> &ExclusionSet {
        &self.exclusions
    }

    /// Strict equality: same kind and exactly equal JSON, `1` differs from `1.0`.
    pub fn eql(&self, other: &Record) -> bool {
        self.kind == other.kind
            && self.slots.len() == other.slots.len()
            && self
                .slots
                .iter()
                .all(|(key, field)| other.get(key).is_some_and(|o| field.eql(o)))
    }

    // --- Serialization ---

    /// A detached copy of the document.
    pub fn to_map(&self) -> Map<String, Value> {
        self.slots
            .iter()
            .map(|(key, field)| (key.clone(), field.to_value()))
            .collect()
    }

    pub fn to_value(&self) -> Value {
        Value::Object(self.to_map())
    }

    pub fn to_json(&self) -> String {
        self.to_value().to_string()
    }

    /// Diagnostic rendering: every accessor with its current value.
    pub fn inspect(&self) -> String {
        let fields: Vec<String> = self
            .accessors
            .iter()
            .filter_map(|(name, key)| self.get(key).map(|field| format!("{}={}", name, field.inspect())))
            .collect();
        if fields.is_empty() {
            return format!("<{}>", self.kind);
        }
        format!("<{} {}>", self.kind, fields.join(", "))
    }
}

impl Default for Record {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for Record {
    fn eq(&self, other: &Record) -> bool {
        self.slots.len() == other.slots.len()
            && self
                .slots
                .iter()
                .all(|(key, field)| other.get(key).is_some_and(|o| field == o))
    }
}

impl FromStr for Record {
    type Err = ClientError;

    fn from_str(json: &str) -> Result<Self> {
        Self::parse(json)
    }
}

impl From<Record> for Value {
    fn from(record: Record) -> Value {
        record.to_value()
    }
}

impl fmt::Debug for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.inspect())
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_json())
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.slots.len()))?;
        for (key, field) in &self.slots {
            map.serialize_entry(key, field)?;
        }
        map.end()
    }
}
