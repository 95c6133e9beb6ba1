// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use crate::ast::Node;
use crate::diagnostics::{Diagnostic, Diagnostics, Severity};
use crate::schema::Schema;
use crate::validator::Validator;

use std::collections::BTreeMap;

/// Flags block types that occur more often than their schema allows.
///
/// One diagnostic is emitted per over-populated block type, not one per
/// excess block, and it points at the body's own range rather than the
/// individual blocks.
pub struct MaxBlocks;

impl Validator for MaxBlocks {
    fn visit(&self, node: &Node, schema: Option<&Schema>) -> Diagnostics {
        let mut diags = Diagnostics::new();

        let Node::Body(body) = node else {
            return diags;
        };
        let Some(body_schema) = schema.and_then(Schema::as_body_schema) else {
            return diags;
        };

        let mut found_blocks: BTreeMap<&str, u64> = BTreeMap::new();
        for block in &body.blocks {
            *found_blocks.entry(block.ty.as_ref()).or_insert(0) += 1;
        }

        for (name, block_schema) in body_schema.blocks.iter() {
            if block_schema.max_items != 0 {
                if let Some(&count) = found_blocks.get(name.as_ref()) {
                    if count > block_schema.max_items {
                        diags.push(Diagnostic {
                            severity: Severity::Error,
                            summary: format!("Too many blocks specified for {name:?}"),
                            detail: format!(
                                "Only {} block(s) are expected for {name:?}",
                                block_schema.max_items
                            ),
                            subject: Some(body.span.clone()),
                        });
                    }
                }
            }
        }

        diags
    }
}
