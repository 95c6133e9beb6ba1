// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Query engine over [`ConstraintSet`].
//!
//! Every operation is pure, walks the set once in declaration order, and
//! reports absence as `None` — a constraint set that does not apply is an
//! expected outcome for callers, never an error. Literal-value queries are
//! conservative: any child that is not a wholly known, non-null constant
//! fails the whole match.

use crate::ast::Expr;
use crate::fold::fold_constant;
use crate::schema::{
    Constraint, ConstraintSet, KeywordConstraint, MapConstraint, TupleConsConstraint,
};
use crate::types::Type;
use crate::value::Value;

use std::collections::BTreeMap;
use std::rc::Rc;

impl ConstraintSet {
    /// Ordered, de-duplicated labels of the declared constraints, in order
    /// of first appearance. Constraints without a label are skipped.
    pub fn friendly_names(&self) -> Vec<Rc<str>> {
        let mut names: Vec<Rc<str>> = Vec::new();
        for constraint in self {
            if let Some(name) = constraint.friendly_name() {
                if !name.is_empty() && !names.contains(&name) {
                    names.push(name);
                }
            }
        }
        names
    }

    /// True iff the set is non-empty and every member is a keyword
    /// constraint. Completion treats such attributes as closed word lists.
    pub fn has_keywords_only(&self) -> bool {
        !self.is_empty()
            && self
                .iter()
                .all(|c| matches!(c, Constraint::Keyword(_)))
    }

    /// First keyword constraint, if any.
    pub fn keyword(&self) -> Option<&KeywordConstraint> {
        self.iter().find_map(|c| match c {
            Constraint::Keyword(kw) => Some(kw),
            _ => None,
        })
    }

    /// First map constraint, if any.
    pub fn map(&self) -> Option<&MapConstraint> {
        self.iter().find_map(|c| match c {
            Constraint::Map(m) => Some(m),
            _ => None,
        })
    }

    /// First tuple-construction constraint, if any.
    pub fn tuple_cons(&self) -> Option<&TupleConsConstraint> {
        self.iter().find_map(|c| match c {
            Constraint::TupleCons(t) => Some(t),
            _ => None,
        })
    }

    /// True iff some literal-type constraint's type structurally equals
    /// `ty`.
    pub fn has_literal_type_of(&self, ty: &Type) -> bool {
        self.iter()
            .any(|c| matches!(c, Constraint::LiteralType(t) if t == ty))
    }

    /// True iff some literal-value constraint's value structurally equals
    /// `value`.
    pub fn has_literal_value_of(&self, value: &Value) -> bool {
        self.literal_value_of(value).is_some()
    }

    /// First literal-value constraint whose value structurally equals
    /// `value`.
    pub fn literal_value_of(&self, value: &Value) -> Option<&Value> {
        self.iter().find_map(|c| match c {
            Constraint::LiteralValue(v) if v == value => Some(v),
            _ => None,
        })
    }

    /// First literal-type constraint whose type is a collection kind that a
    /// bracketed construction could satisfy: list, set or tuple.
    pub fn literal_type_of_tuple_expr(&self) -> Option<&Type> {
        self.iter().find_map(|c| match c {
            Constraint::LiteralType(ty)
                if ty.is_list_type() || ty.is_set_type() || ty.is_tuple_type() =>
            {
                Some(ty)
            }
            _ => None,
        })
    }

    /// First literal-type constraint whose type is a kind that a braced
    /// construction could satisfy: object or map.
    pub fn literal_type_of_object_cons_expr(&self) -> Option<&Type> {
        self.iter().find_map(|c| match c {
            Constraint::LiteralType(ty) if ty.is_object_type() || ty.is_map_type() => {
                Some(ty)
            }
            _ => None,
        })
    }

    /// Matches a tuple-construction expression against the declared
    /// literal values.
    ///
    /// Each child is folded with no context; if any child fails to fold,
    /// or folds to an unknown or null value, the whole match fails. The
    /// folded children are then compared against each literal-value
    /// constraint as the one container kind that constraint's declared
    /// value type selects.
    pub fn literal_value_of_tuple_expr(&self, expr: &Expr) -> Option<&Value> {
        let items = match expr {
            Expr::Tuple { items, .. } => items,
            _ => return None,
        };

        let mut folded = Vec::with_capacity(items.len());
        for item in items {
            let value = fold_constant(item)?;
            if !value.is_wholly_known() || value.is_null() {
                return None;
            }
            folded.push(value);
        }

        let as_list = Value::from_list(folded.clone());
        let as_set = Value::from_set(folded.clone());
        let as_tuple = Value::from_tuple(folded);

        self.iter().find_map(|c| match c {
            Constraint::LiteralValue(value) => {
                let ty = value.ty();
                if (ty.is_list_type() && *value == as_list)
                    || (ty.is_set_type() && *value == as_set)
                    || (ty.is_tuple_type() && *value == as_tuple)
                {
                    Some(value)
                } else {
                    None
                }
            }
            _ => None,
        })
    }

    /// Matches an object-construction expression against the declared
    /// literal values.
    ///
    /// Every item's key must fold to a wholly known string and every value
    /// to a wholly known, non-null value; otherwise the match fails. The
    /// resulting mapping is compared against each map- or object-typed
    /// literal-value constraint as the container kind its type selects.
    pub fn literal_value_of_object_cons_expr(&self, expr: &Expr) -> Option<&Value> {
        let items = match expr {
            Expr::Object { items, .. } => items,
            _ => return None,
        };

        let mut fields: BTreeMap<Rc<str>, Value> = BTreeMap::new();
        for item in items {
            let key = fold_constant(&item.key)?;
            if !key.is_wholly_known() {
                return None;
            }
            let key = match key {
                Value::String(s) => s,
                _ => return None,
            };

            let value = fold_constant(&item.value)?;
            if !value.is_wholly_known() || value.is_null() {
                return None;
            }

            fields.insert(key, value);
        }

        let as_map = Value::from_map(fields.clone());
        let as_object = Value::from_object(fields);

        self.iter().find_map(|c| match c {
            Constraint::LiteralValue(value) => {
                let ty = value.ty();
                if (ty.is_map_type() && *value == as_map)
                    || (ty.is_object_type() && *value == as_object)
                {
                    Some(value)
                } else {
                    None
                }
            }
            _ => None,
        })
    }
}
