// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Construction helpers for tests. The parser normally produces these
//! nodes; tests build them directly with synthetic single-line spans.

use crate::ast::{Attribute, Block, Body, Expr, ExprRef, ObjectItem, Ref};
use crate::source::{Source, Span};
use crate::value::Value;

use std::rc::Rc;

pub fn span(text: &str) -> Span {
    let source = Source::from_contents("test.stz".into(), text.into()).unwrap();
    Span {
        line: 1,
        col: 1,
        start: 0,
        end: text.len() as u32,
        source,
    }
}

pub fn str_expr(s: &str) -> ExprRef {
    Ref::new(Expr::String {
        span: span(&format!("{s:?}")),
        value: Value::from(s),
    })
}

pub fn int_expr(n: i64) -> ExprRef {
    Ref::new(Expr::Number {
        span: span(&n.to_string()),
        value: Value::from(n),
    })
}

pub fn bool_expr(b: bool) -> ExprRef {
    Ref::new(Expr::Bool {
        span: span(&b.to_string()),
        value: Value::from(b),
    })
}

pub fn null_expr() -> ExprRef {
    Ref::new(Expr::Null { span: span("null") })
}

pub fn var_expr(name: &str) -> ExprRef {
    Ref::new(Expr::Var { span: span(name) })
}

pub fn call_expr(name: &str, args: Vec<ExprRef>) -> ExprRef {
    Ref::new(Expr::FuncCall {
        span: span(&format!("{name}(...)")),
        name: name.into(),
        args,
    })
}

pub fn tuple_expr(items: Vec<ExprRef>) -> ExprRef {
    Ref::new(Expr::Tuple {
        span: span("[...]"),
        items,
    })
}

pub fn object_expr(items: Vec<(ExprRef, ExprRef)>) -> ExprRef {
    Ref::new(Expr::Object {
        span: span("{...}"),
        items: items
            .into_iter()
            .map(|(key, value)| ObjectItem {
                span: span("item"),
                key,
                value,
            })
            .collect(),
    })
}

pub fn attribute(name: &str, expr: ExprRef) -> Ref<Attribute> {
    Ref::new(Attribute {
        span: span(&format!("{name} = ...")),
        name: name.into(),
        expr,
    })
}

pub fn block(ty: &str) -> Ref<Block> {
    Ref::new(Block {
        span: span(&format!("{ty} {{}}")),
        ty: ty.into(),
        labels: vec![],
        body: Ref::new(empty_body()),
    })
}

pub fn empty_body() -> Body {
    Body {
        span: span("{}"),
        attributes: vec![],
        blocks: vec![],
    }
}

pub fn body_with_blocks(types: &[&str]) -> Body {
    Body {
        span: span("{...}"),
        attributes: vec![],
        blocks: types.iter().map(|ty| block(ty)).collect(),
    }
}

pub fn fields(entries: Vec<(&str, Value)>) -> std::collections::BTreeMap<Rc<str>, Value> {
    entries
        .into_iter()
        .map(|(k, v)| (Rc::from(k), v))
        .collect()
}
