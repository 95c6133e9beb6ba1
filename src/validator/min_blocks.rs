// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use crate::ast::Node;
use crate::diagnostics::{Diagnostic, Diagnostics, Severity};
use crate::schema::Schema;
use crate::validator::Validator;

use std::collections::BTreeMap;

/// Flags block types that occur less often than their schema requires.
/// A required type that does not occur at all counts as zero occurrences.
pub struct MinBlocks;

impl Validator for MinBlocks {
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
            if block_schema.min_items != 0 {
                let count = found_blocks.get(name.as_ref()).copied().unwrap_or(0);
                if count < block_schema.min_items {
                    diags.push(Diagnostic {
                        severity: Severity::Error,
                        summary: format!("Too few blocks specified for {name:?}"),
                        detail: format!(
                            "At least {} block(s) are expected for {name:?}",
                            block_schema.min_items
                        ),
                        subject: Some(body.span.clone()),
                    });
                }
            }
        }

        diags
    }
}
