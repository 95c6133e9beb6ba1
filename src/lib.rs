// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

// Use README.md as crate documentation.
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/README.md"))]

mod ast;
mod constraints;
mod diagnostics;
mod fold;
mod number;
pub mod schema;
mod source;
mod types;
pub mod validator;
mod value;

pub use ast::{Attribute, Block, Body, Expr, ExprRef, Node, NodeRef, ObjectItem, Ref};
pub use diagnostics::{Diagnostic, Diagnostics, Severity};
pub use fold::fold_constant;
pub use number::Number;
pub use source::{Source, SourceStr, Span};
pub use types::Type;
pub use value::Value;

#[cfg(test)]
mod test_utils;
