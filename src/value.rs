// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use crate::number::Number;
use crate::types::Type;

use core::fmt;
use std::collections::{BTreeMap, BTreeSet};
use std::ops;
use std::rc::Rc;

use anyhow::{anyhow, Result};
use serde::de::{self, Deserializer, MapAccess, SeqAccess, Visitor};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};

// We cannot use serde_json::Value because Stanza distinguishes list, set and
// tuple collections (and map vs object) the way its type system does, and
// carries unknown-ness for values produced from unresolved expressions.
// BTree containers keep values ordered, which makes structural equality and
// set membership cheap.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum Value {
    Null,
    Bool(bool),
    Number(Number),
    String(Rc<str>),

    /// Homogeneous ordered collection.
    List(Rc<Vec<Value>>),
    /// Unordered collection without duplicates.
    Set(Rc<BTreeSet<Value>>),
    /// Heterogeneous ordered collection.
    Tuple(Rc<Vec<Value>>),

    /// Homogeneous string-keyed collection.
    Map(Rc<BTreeMap<Rc<str>, Value>>),
    /// Heterogeneous string-keyed collection.
    Object(Rc<BTreeMap<Rc<str>, Value>>),

    /// A value that could not be determined, e.g. the result of an
    /// expression that references a variable.
    Unknown,
}

impl Value {
    pub fn new_object() -> Value {
        Value::Object(Rc::new(BTreeMap::new()))
    }

    pub fn new_map() -> Value {
        Value::Map(Rc::new(BTreeMap::new()))
    }

    pub fn new_set() -> Value {
        Value::Set(Rc::new(BTreeSet::new()))
    }

    pub fn from_list(items: Vec<Value>) -> Value {
        Value::List(Rc::new(items))
    }

    pub fn from_tuple(items: Vec<Value>) -> Value {
        Value::Tuple(Rc::new(items))
    }

    /// Builds a set value; duplicate elements collapse, matching set
    /// construction semantics of the language.
    pub fn from_set(items: Vec<Value>) -> Value {
        Value::Set(Rc::new(items.into_iter().collect()))
    }

    pub fn from_map(fields: BTreeMap<Rc<str>, Value>) -> Value {
        Value::Map(Rc::new(fields))
    }

    pub fn from_object(fields: BTreeMap<Rc<str>, Value>) -> Value {
        Value::Object(Rc::new(fields))
    }

    pub fn from_json_str(json: &str) -> Result<Value> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json_str(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Value::Unknown)
    }

    /// True iff no part of the value is unknown. Only wholly known values
    /// participate in literal matching; a collection with a single unknown
    /// element is itself not wholly known.
    pub fn is_wholly_known(&self) -> bool {
        match self {
            Value::Unknown => false,
            Value::List(items) | Value::Tuple(items) => {
                items.iter().all(Value::is_wholly_known)
            }
            Value::Set(items) => items.iter().all(Value::is_wholly_known),
            Value::Map(fields) | Value::Object(fields) => {
                fields.values().all(Value::is_wholly_known)
            }
            _ => true,
        }
    }

    /// The structural type of this value. Element types of homogeneous
    /// collections are derived from the first element; empty collections
    /// report `any type` elements.
    pub fn ty(&self) -> Type {
        match self {
            Value::Null | Value::Unknown => Type::Any,
            Value::Bool(_) => Type::Bool,
            Value::Number(_) => Type::Number,
            Value::String(_) => Type::String,
            Value::List(items) => {
                Type::list(items.first().map_or(Type::Any, Value::ty))
            }
            Value::Set(items) => {
                Type::set(items.first().map_or(Type::Any, Value::ty))
            }
            Value::Tuple(items) => Type::tuple(items.iter().map(Value::ty).collect()),
            Value::Map(fields) => {
                Type::map(fields.values().next().map_or(Type::Any, Value::ty))
            }
            Value::Object(fields) => Type::object(
                fields
                    .iter()
                    .map(|(k, v)| (k.clone(), v.ty()))
                    .collect(),
            ),
        }
    }
}

impl Value {
    pub fn as_bool(&self) -> Result<&bool> {
        match self {
            Value::Bool(b) => Ok(b),
            _ => Err(anyhow!("not a bool")),
        }
    }

    pub fn as_number(&self) -> Result<&Number> {
        match self {
            Value::Number(n) => Ok(n),
            _ => Err(anyhow!("not a number")),
        }
    }

    pub fn as_string(&self) -> Result<&Rc<str>> {
        match self {
            Value::String(s) => Ok(s),
            _ => Err(anyhow!("not a string")),
        }
    }

    pub fn as_list(&self) -> Result<&Vec<Value>> {
        match self {
            Value::List(items) => Ok(items),
            _ => Err(anyhow!("not a list")),
        }
    }

    pub fn as_tuple(&self) -> Result<&Vec<Value>> {
        match self {
            Value::Tuple(items) => Ok(items),
            _ => Err(anyhow!("not a tuple")),
        }
    }

    pub fn as_set(&self) -> Result<&BTreeSet<Value>> {
        match self {
            Value::Set(items) => Ok(items),
            _ => Err(anyhow!("not a set")),
        }
    }

    pub fn as_map(&self) -> Result<&BTreeMap<Rc<str>, Value>> {
        match self {
            Value::Map(fields) => Ok(fields),
            _ => Err(anyhow!("not a map")),
        }
    }

    pub fn as_object(&self) -> Result<&BTreeMap<Rc<str>, Value>> {
        match self {
            Value::Object(fields) => Ok(fields),
            _ => Err(anyhow!("not an object")),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.into())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s.into())
    }
}

impl From<u64> for Value {
    fn from(n: u64) -> Self {
        Value::Number(Number::from(n))
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(Number::from(n))
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(Number::from(n))
    }
}

impl From<usize> for Value {
    fn from(n: usize) -> Self {
        Value::Number(Number::from(n))
    }
}

impl From<Number> for Value {
    fn from(n: Number) -> Self {
        Value::Number(n)
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Null => serializer.serialize_none(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Number(n) => n.serialize(serializer),
            Value::String(s) => serializer.serialize_str(s.as_ref()),
            Value::List(items) | Value::Tuple(items) => items.serialize(serializer),

            // display sets as arrays
            Value::Set(items) => items.serialize(serializer),

            Value::Map(fields) | Value::Object(fields) => {
                let mut map = serializer.serialize_map(Some(fields.len()))?;
                for (k, v) in fields.iter() {
                    map.serialize_entry(k.as_ref(), v)?;
                }
                map.end()
            }

            // display unknown as a special string
            Value::Unknown => serializer.serialize_str("<unknown>"),
        }
    }
}

struct ValueVisitor;

impl<'de> Visitor<'de> for ValueVisitor {
    type Value = Value;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("a value")
    }

    fn visit_unit<E>(self) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Value::Null)
    }

    fn visit_bool<E>(self, v: bool) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Value::Bool(v))
    }

    fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Value::from(v))
    }

    fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Value::from(v))
    }

    fn visit_f64<E>(self, v: f64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Value::from(v))
    }

    fn visit_str<E>(self, s: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Value::String(s.into()))
    }

    fn visit_string<E>(self, s: String) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Value::String(s.into()))
    }

    // JSON sequences are heterogeneous, so they read back as tuples;
    // JSON maps read back as objects.
    fn visit_seq<V>(self, mut visitor: V) -> Result<Self::Value, V::Error>
    where
        V: SeqAccess<'de>,
    {
        let mut items = vec![];
        while let Some(v) = visitor.next_element()? {
            items.push(v);
        }
        Ok(Value::from_tuple(items))
    }

    fn visit_map<V>(self, mut visitor: V) -> Result<Self::Value, V::Error>
    where
        V: MapAccess<'de>,
    {
        let mut fields: BTreeMap<Rc<str>, Value> = BTreeMap::new();
        while let Some((key, value)) = visitor.next_entry::<String, Value>()? {
            fields.insert(key.into(), value);
        }
        Ok(Value::from_object(fields))
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> Result<Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(ValueVisitor)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match serde_json::to_string(self) {
            Ok(s) => write!(f, "{s}"),
            Err(_e) => Err(std::fmt::Error),
        }
    }
}

impl ops::Index<usize> for Value {
    type Output = Value;

    fn index(&self, index: usize) -> &Self::Output {
        match self {
            Value::List(items) | Value::Tuple(items) if index < items.len() => &items[index],
            _ => &Value::Unknown,
        }
    }
}

impl ops::Index<&str> for Value {
    type Output = Value;

    fn index(&self, key: &str) -> &Self::Output {
        match self {
            Value::Map(fields) | Value::Object(fields) => match fields.get(key) {
                Some(v) => v,
                _ => &Value::Unknown,
            },
            _ => &Value::Unknown,
        }
    }
}
