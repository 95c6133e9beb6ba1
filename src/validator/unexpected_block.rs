// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use crate::ast::Node;
use crate::diagnostics::{Diagnostic, Diagnostics, Severity};
use crate::schema::Schema;
use crate::validator::Validator;

/// Flags blocks whose type the body's schema does not declare. Unlike the
/// cardinality checks, the finding points at the offending block itself.
pub struct UnexpectedBlock;

impl Validator for UnexpectedBlock {
    fn visit(&self, node: &Node, schema: Option<&Schema>) -> Diagnostics {
        let mut diags = Diagnostics::new();

        let Node::Body(body) = node else {
            return diags;
        };
        let Some(body_schema) = schema.and_then(Schema::as_body_schema) else {
            return diags;
        };

        for block in &body.blocks {
            if !body_schema.blocks.contains_key(&block.ty) {
                diags.push(Diagnostic {
                    severity: Severity::Error,
                    summary: format!("Unexpected block {:?}", block.ty),
                    detail: format!("Blocks of type {:?} are not expected here", block.ty),
                    subject: Some(block.span.clone()),
                });
            }
        }

        diags
    }
}
