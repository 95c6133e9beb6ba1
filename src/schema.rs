// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Schema vocabulary for Stanza bodies and attributes.
//!
//! A schema author declares, per attribute, an ordered set of acceptable
//! expression shapes ([`Constraint`]s) and, per block type, structural
//! limits ([`BlockSchema`]). Schemas are plain data: they can be built in
//! code or shipped as JSON and loaded with [`BodySchema::from_json_str`].

pub mod error;


use crate::types::Type;
use crate::value::Value;

use std::collections::BTreeMap;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use error::SchemaError;

/// Accepts one specific bare word, e.g. `true_up` in `mode = true_up`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordConstraint {
    pub keyword: Rc<str>,
    /// Label override for UI hints; `keyword` is used when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<Rc<str>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<Rc<str>>,
}

impl KeywordConstraint {
    pub fn new(keyword: impl Into<Rc<str>>) -> Self {
        Self {
            keyword: keyword.into(),
            name: None,
            description: None,
        }
    }

    pub fn friendly_name(&self) -> Rc<str> {
        match &self.name {
            Some(name) => name.clone(),
            None => "keyword".into(),
        }
    }
}

/// Accepts a braced construction with arbitrary keys whose values all
/// satisfy `elem`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapConstraint {
    #[serde(default)]
    pub elem: ConstraintSet,
    #[serde(default)]
    pub min_items: u64,
    /// 0 means unlimited.
    #[serde(default)]
    pub max_items: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<Rc<str>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<Rc<str>>,
}

impl MapConstraint {
    pub fn friendly_name(&self) -> Rc<str> {
        match &self.name {
            Some(name) => name.clone(),
            None => "map".into(),
        }
    }
}

/// Accepts a bracketed construction whose elements all satisfy `any_elem`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TupleConsConstraint {
    #[serde(default)]
    pub any_elem: ConstraintSet,
    #[serde(default)]
    pub min_items: u64,
    /// 0 means unlimited.
    #[serde(default)]
    pub max_items: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<Rc<str>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<Rc<str>>,
}

impl TupleConsConstraint {
    pub fn friendly_name(&self) -> Rc<str> {
        match &self.name {
            Some(name) => name.clone(),
            None => "tuple".into(),
        }
    }
}

/// Accepts a reference to an address elsewhere in the configuration.
/// Opaque to the matcher: no query inspects it, and unnamed references
/// contribute no friendly name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceConstraint {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<Rc<str>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<Rc<str>>,
}

/// One declared acceptable shape for an attribute expression.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Constraint {
    Keyword(KeywordConstraint),
    /// Any expression whose type structurally equals the given type.
    LiteralType(Type),
    /// Exactly the given constant value.
    LiteralValue(Value),
    Map(MapConstraint),
    TupleCons(TupleConsConstraint),
    Reference(ReferenceConstraint),
}

impl Constraint {
    /// Short human-readable label for UI hints, if this constraint has one.
    pub fn friendly_name(&self) -> Option<Rc<str>> {
        match self {
            Constraint::Keyword(kw) => Some(kw.friendly_name()),
            Constraint::LiteralType(ty) => Some(ty.friendly_name().into()),
            Constraint::LiteralValue(value) => Some(value.ty().friendly_name().into()),
            Constraint::Map(m) => Some(m.friendly_name()),
            Constraint::TupleCons(t) => Some(t.friendly_name()),
            Constraint::Reference(r) => r.name.clone(),
        }
    }
}

/// Ordered collection of constraints for one expression position.
///
/// Order is declaration order; duplicates are permitted. Every query over
/// the set is first-match-wins in this order. The query operations
/// themselves live in the `constraints` module.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConstraintSet(pub(crate) Vec<Constraint>);

impl ConstraintSet {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> core::slice::Iter<'_, Constraint> {
        self.0.iter()
    }
}

impl From<Vec<Constraint>> for ConstraintSet {
    fn from(constraints: Vec<Constraint>) -> Self {
        Self(constraints)
    }
}

impl FromIterator<Constraint> for ConstraintSet {
    fn from_iter<I: IntoIterator<Item = Constraint>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a ConstraintSet {
    type Item = &'a Constraint;
    type IntoIter = core::slice::Iter<'a, Constraint>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Schema for one attribute position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttributeSchema {
    #[serde(default)]
    pub constraints: ConstraintSet,
    #[serde(default)]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<Rc<str>>,
}

/// Structural limits for one block type within a body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BlockSchema {
    /// Maximum number of blocks of this type; 0 means unlimited.
    #[serde(default)]
    pub max_items: u64,
    /// Minimum number of blocks of this type; 0 means none required.
    #[serde(default)]
    pub min_items: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<Rc<str>>,
}

/// Schema for the contents of a body: its attributes and block types.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BodySchema {
    #[serde(default)]
    pub attributes: BTreeMap<Rc<str>, AttributeSchema>,
    #[serde(default)]
    pub blocks: BTreeMap<Rc<str>, BlockSchema>,
}

impl BodySchema {
    pub fn from_serde_json_value(value: serde_json::Value) -> Result<Self, SchemaError> {
        let schema: BodySchema = serde_json::from_value(value)?;
        for (name, block) in schema.blocks.iter() {
            if block.max_items != 0 && block.min_items > block.max_items {
                return Err(SchemaError::BlockLimits {
                    block_type: name.clone(),
                    min_items: block.min_items,
                    max_items: block.max_items,
                });
            }
        }
        Ok(schema)
    }

    pub fn from_json_str(s: &str) -> Result<Self, SchemaError> {
        Self::from_serde_json_value(serde_json::from_str(s)?)
    }
}

/// A schema node as handed to validators: either the schema of a body or
/// the schema of an attribute position. Validators decide for themselves
/// which kind they apply to.
#[derive(Debug, Clone, PartialEq)]
pub enum Schema {
    Body(Rc<BodySchema>),
    Attribute(Rc<AttributeSchema>),
}

impl Schema {
    pub fn as_body_schema(&self) -> Option<&BodySchema> {
        match self {
            Schema::Body(body) => Some(body),
            Schema::Attribute(_) => None,
        }
    }

    pub fn as_attribute_schema(&self) -> Option<&AttributeSchema> {
        match self {
            Schema::Attribute(attr) => Some(attr),
            Schema::Body(_) => None,
        }
    }
}
