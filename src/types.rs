// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use core::fmt;
use std::collections::BTreeMap;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

/// Structural type specifier for Stanza values.
///
/// The collection kinds are deliberately distinct: a `List` is never
/// interchangeable with a `Set` or `Tuple`, nor a `Map` with an `Object`,
/// even when their element shapes coincide. Constraint matching dispatches
/// on exactly this distinction.
///
/// Type specifiers serialize as tagged JSON so that schemas can be shipped
/// as data:
///
/// ```json
/// { "type": "list", "elem": { "type": "string" } }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Type {
    /// Matches any value; used where a schema leaves the shape open.
    Any,
    Bool,
    Number,
    String,
    /// Homogeneous ordered collection.
    List { elem: Box<Type> },
    /// Homogeneous unordered collection without duplicates.
    Set { elem: Box<Type> },
    /// Heterogeneous ordered collection with per-position types.
    Tuple { elems: Vec<Type> },
    /// Homogeneous string-keyed collection.
    Map { elem: Box<Type> },
    /// Heterogeneous string-keyed collection with per-attribute types.
    Object { attrs: BTreeMap<Rc<str>, Type> },
}

impl Type {
    pub fn list(elem: Type) -> Type {
        Type::List {
            elem: Box::new(elem),
        }
    }

    pub fn set(elem: Type) -> Type {
        Type::Set {
            elem: Box::new(elem),
        }
    }

    pub fn tuple(elems: Vec<Type>) -> Type {
        Type::Tuple { elems }
    }

    pub fn map(elem: Type) -> Type {
        Type::Map {
            elem: Box::new(elem),
        }
    }

    pub fn object(attrs: BTreeMap<Rc<str>, Type>) -> Type {
        Type::Object { attrs }
    }

    pub const fn is_list_type(&self) -> bool {
        matches!(self, Type::List { .. })
    }

    pub const fn is_set_type(&self) -> bool {
        matches!(self, Type::Set { .. })
    }

    pub const fn is_tuple_type(&self) -> bool {
        matches!(self, Type::Tuple { .. })
    }

    pub const fn is_map_type(&self) -> bool {
        matches!(self, Type::Map { .. })
    }

    pub const fn is_object_type(&self) -> bool {
        matches!(self, Type::Object { .. })
    }

    pub const fn is_primitive_type(&self) -> bool {
        matches!(self, Type::Bool | Type::Number | Type::String)
    }

    /// Short human-readable label used for UI hints.
    pub fn friendly_name(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Any => f.write_str("any type"),
            Type::Bool => f.write_str("bool"),
            Type::Number => f.write_str("number"),
            Type::String => f.write_str("string"),
            Type::List { elem } => write!(f, "list of {elem}"),
            Type::Set { elem } => write!(f, "set of {elem}"),
            Type::Tuple { .. } => f.write_str("tuple"),
            Type::Map { elem } => write!(f, "map of {elem}"),
            Type::Object { .. } => f.write_str("object"),
        }
    }
}
