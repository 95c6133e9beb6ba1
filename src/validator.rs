// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Structural validators for parsed bodies.
//!
//! Each validator receives an arbitrary node and an optional schema and
//! decides for itself whether the pair is its concern; anything else is a
//! silent no-op. A validator call always succeeds — findings are returned
//! as diagnostics and a confused validator simply returns none, so one
//! mismatched check can never abort a larger validation pass.

mod max_blocks;
mod min_blocks;
mod unexpected_block;

#[cfg(test)]
mod tests;

use crate::ast::Node;
use crate::diagnostics::Diagnostics;
use crate::schema::Schema;

pub use max_blocks::MaxBlocks;
pub use min_blocks::MinBlocks;
pub use unexpected_block::UnexpectedBlock;

pub trait Validator {
    fn visit(&self, node: &Node, schema: Option<&Schema>) -> Diagnostics;
}

/// The validators applied to every body by default.
pub fn default_validators() -> Vec<Box<dyn Validator>> {
    vec![
        Box::new(MaxBlocks),
        Box::new(MinBlocks),
        Box::new(UnexpectedBlock),
    ]
}

/// Runs each validator over the node and concatenates the findings in
/// validator order.
pub fn run(
    validators: &[Box<dyn Validator>],
    node: &Node,
    schema: Option<&Schema>,
) -> Diagnostics {
    let mut diags = Diagnostics::new();
    for validator in validators {
        diags.append(&mut validator.visit(node, schema));
    }
    diags
}
