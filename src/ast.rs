// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use crate::source::Span;
use crate::value::Value;

use core::{cmp, fmt, ops::Deref};
use std::rc::Rc;

/// Shared AST node handle. Equality and ordering are by node identity, not
/// by structure, so the same node reached through two paths compares equal
/// while two structurally identical nodes do not.
pub struct NodeRef<T> {
    r: Rc<T>,
}

impl<T> Clone for NodeRef<T> {
    fn clone(&self) -> Self {
        Self { r: self.r.clone() }
    }
}

impl<T: fmt::Debug> fmt::Debug for NodeRef<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.r.as_ref().fmt(f)
    }
}

impl<T> cmp::PartialEq for NodeRef<T> {
    fn eq(&self, other: &Self) -> bool {
        Rc::as_ptr(&self.r).eq(&Rc::as_ptr(&other.r))
    }
}

impl<T> cmp::Eq for NodeRef<T> {}

impl<T> cmp::Ord for NodeRef<T> {
    fn cmp(&self, other: &Self) -> cmp::Ordering {
        Rc::as_ptr(&self.r).cmp(&Rc::as_ptr(&other.r))
    }
}

impl<T> cmp::PartialOrd for NodeRef<T> {
    fn partial_cmp(&self, other: &Self) -> Option<cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Deref for NodeRef<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.r
    }
}

impl<T> AsRef<T> for NodeRef<T> {
    fn as_ref(&self) -> &T {
        self.deref()
    }
}

impl<T> NodeRef<T> {
    pub fn new(t: T) -> Self {
        Self { r: Rc::new(t) }
    }
}

pub type Ref<T> = NodeRef<T>;

/// One `key = value` item of an object construction expression.
#[derive(Debug)]
pub struct ObjectItem {
    pub span: Span,
    pub key: ExprRef,
    pub value: ExprRef,
}

/// The expression shapes the tooling core inspects. The parser produces
/// more shapes than these; everything the constraint matcher cannot fold
/// is represented conservatively (`Var`, `FuncCall`) so queries refuse it.
#[derive(Debug)]
pub enum Expr {
    String {
        span: Span,
        value: Value,
    },

    Number {
        span: Span,
        value: Value,
    },

    Bool {
        span: Span,
        value: Value,
    },

    Null {
        span: Span,
    },

    /// A reference to a variable; never constant.
    Var {
        span: Span,
    },

    /// A function invocation; never constant.
    FuncCall {
        span: Span,
        name: Rc<str>,
        args: Vec<ExprRef>,
    },

    /// Bracketed construction: `[e1, e2, ...]`.
    Tuple {
        span: Span,
        items: Vec<ExprRef>,
    },

    /// Braced construction: `{k1 = v1, ...}`.
    Object {
        span: Span,
        items: Vec<ObjectItem>,
    },
}

impl Expr {
    pub const fn span(&self) -> &Span {
        match *self {
            Self::String { ref span, .. }
            | Self::Number { ref span, .. }
            | Self::Bool { ref span, .. }
            | Self::Null { ref span, .. }
            | Self::Var { ref span, .. }
            | Self::FuncCall { ref span, .. }
            | Self::Tuple { ref span, .. }
            | Self::Object { ref span, .. } => span,
        }
    }
}

pub type ExprRef = Ref<Expr>;

/// An `name = expr` attribute within a body.
#[derive(Debug)]
pub struct Attribute {
    pub span: Span,
    pub name: Rc<str>,
    pub expr: ExprRef,
}

/// A named, possibly labeled, nested element: `type "label" { ... }`.
#[derive(Debug)]
pub struct Block {
    pub span: Span,
    pub ty: Rc<str>,
    pub labels: Vec<Rc<str>>,
    pub body: Ref<Body>,
}

/// The contents of a file or block: attributes and nested blocks in
/// declaration order.
#[derive(Debug)]
pub struct Body {
    pub span: Span,
    pub attributes: Vec<Ref<Attribute>>,
    pub blocks: Vec<Ref<Block>>,
}

/// Borrowed view of any AST node, used where a validator accepts "some
/// node" and decides for itself whether it applies.
#[derive(Debug, Clone, Copy)]
pub enum Node<'a> {
    Expr(&'a Expr),
    Attribute(&'a Attribute),
    Block(&'a Block),
    Body(&'a Body),
}

impl Node<'_> {
    pub const fn span(&self) -> &Span {
        match *self {
            Node::Expr(e) => e.span(),
            Node::Attribute(a) => &a.span,
            Node::Block(b) => &b.span,
            Node::Body(b) => &b.span,
        }
    }
}
