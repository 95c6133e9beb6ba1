// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use crate::ast::Expr;
use crate::value::Value;

use std::collections::BTreeMap;
use std::rc::Rc;

/// Folds an expression to a constant value using no evaluation environment.
///
/// Anything that would need context to resolve (a variable, a function
/// call) yields `None`, as does any construction containing such a child.
/// Object keys must fold to strings. The result may still be `Null`;
/// callers that require non-null constants check for it themselves.
pub fn fold_constant(expr: &Expr) -> Option<Value> {
    match expr {
        Expr::String { value, .. }
        | Expr::Number { value, .. }
        | Expr::Bool { value, .. } => Some(value.clone()),

        Expr::Null { .. } => Some(Value::Null),

        Expr::Var { .. } | Expr::FuncCall { .. } => None,

        Expr::Tuple { items, .. } => items
            .iter()
            .map(|item| fold_constant(item))
            .collect::<Option<Vec<_>>>()
            .map(Value::from_tuple),

        Expr::Object { items, .. } => {
            let mut fields: BTreeMap<Rc<str>, Value> = BTreeMap::new();
            for item in items {
                let key = match fold_constant(&item.key)? {
                    Value::String(s) => s,
                    _ => return None,
                };
                let value = fold_constant(&item.value)?;
                fields.insert(key, value);
            }
            Some(Value::from_object(fields))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;

    #[test]
    fn literals_fold_to_their_values() {
        assert_eq!(fold_constant(&str_expr("a")), Some(Value::from("a")));
        assert_eq!(fold_constant(&int_expr(7)), Some(Value::from(7u64)));
        assert_eq!(fold_constant(&bool_expr(true)), Some(Value::from(true)));
        assert_eq!(fold_constant(&null_expr()), Some(Value::Null));
    }

    #[test]
    fn variables_and_calls_never_fold() {
        assert_eq!(fold_constant(&var_expr("count")), None);
        assert_eq!(fold_constant(&call_expr("max", vec![int_expr(1)])), None);
    }

    #[test]
    fn tuple_folds_only_when_every_child_does() {
        let constant = tuple_expr(vec![int_expr(1), int_expr(2)]);
        assert_eq!(
            fold_constant(&constant),
            Some(Value::from_tuple(vec![Value::from(1u64), Value::from(2u64)]))
        );

        let tainted = tuple_expr(vec![int_expr(1), var_expr("x")]);
        assert_eq!(fold_constant(&tainted), None);

        let nested = tuple_expr(vec![tuple_expr(vec![var_expr("x")])]);
        assert_eq!(fold_constant(&nested), None);
    }

    #[test]
    fn object_folds_require_string_keys() {
        let ok = object_expr(vec![(str_expr("a"), int_expr(1))]);
        let folded = fold_constant(&ok).unwrap();
        assert_eq!(folded["a"], Value::from(1u64));

        let bad_key = object_expr(vec![(int_expr(1), int_expr(2))]);
        assert_eq!(fold_constant(&bad_key), None);

        let bad_value = object_expr(vec![(str_expr("a"), var_expr("x"))]);
        assert_eq!(fold_constant(&bad_value), None);
    }
}
