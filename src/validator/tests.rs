// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use crate::ast::Node;
use crate::diagnostics::Severity;
use crate::schema::{AttributeSchema, BlockSchema, BodySchema, ConstraintSet, Schema};
use crate::test_utils::*;
use crate::validator::*;

use std::collections::BTreeMap;
use std::rc::Rc;

fn body_schema(blocks: Vec<(&str, BlockSchema)>) -> Schema {
    Schema::Body(Rc::new(BodySchema {
        attributes: BTreeMap::new(),
        blocks: blocks
            .into_iter()
            .map(|(ty, schema)| (Rc::from(ty), schema))
            .collect(),
    }))
}

fn max_items(max: u64) -> BlockSchema {
    BlockSchema {
        max_items: max,
        ..Default::default()
    }
}

fn min_items(min: u64) -> BlockSchema {
    BlockSchema {
        min_items: min,
        ..Default::default()
    }
}

#[test]
fn max_blocks_flags_excess_once_per_type() {
    let body = body_with_blocks(&["rule", "rule", "rule"]);
    let schema = body_schema(vec![("rule", max_items(2))]);

    let diags = MaxBlocks.visit(&Node::Body(&body), Some(&schema));
    assert_eq!(diags.len(), 1);

    let diag = &diags[0];
    assert_eq!(diag.severity, Severity::Error);
    assert!(diag.summary.contains("\"rule\""));
    assert!(diag.detail.contains('2'));
    // The finding points at the whole body, not the excess block.
    assert_eq!(diag.subject.as_ref().unwrap().start, body.span.start);
    assert_eq!(diag.subject.as_ref().unwrap().end, body.span.end);
}

#[test]
fn max_blocks_within_limit_is_silent() {
    let body = body_with_blocks(&["rule", "rule"]);
    let schema = body_schema(vec![("rule", max_items(2))]);
    assert!(MaxBlocks.visit(&Node::Body(&body), Some(&schema)).is_empty());
}

#[test]
fn max_blocks_zero_means_unlimited() {
    let body = body_with_blocks(&["rule", "rule", "rule", "rule"]);
    let schema = body_schema(vec![("rule", max_items(0))]);
    assert!(MaxBlocks.visit(&Node::Body(&body), Some(&schema)).is_empty());
}

#[test]
fn max_blocks_ignores_absent_types() {
    let body = body_with_blocks(&[]);
    let schema = body_schema(vec![("rule", max_items(1))]);
    assert!(MaxBlocks.visit(&Node::Body(&body), Some(&schema)).is_empty());
}

#[test]
fn max_blocks_counts_each_type_separately() {
    let body = body_with_blocks(&["rule", "filter", "rule", "filter", "filter"]);
    let schema = body_schema(vec![("rule", max_items(2)), ("filter", max_items(2))]);

    let diags = MaxBlocks.visit(&Node::Body(&body), Some(&schema));
    assert_eq!(diags.len(), 1);
    assert!(diags[0].summary.contains("\"filter\""));
}

#[test]
fn validators_noop_on_mismatched_inputs() {
    let body = body_with_blocks(&["rule", "rule", "rule"]);
    let schema = body_schema(vec![("rule", max_items(1))]);
    let attr_schema = Schema::Attribute(Rc::new(AttributeSchema {
        constraints: ConstraintSet::new(),
        required: false,
        description: None,
    }));

    // Missing schema.
    assert!(MaxBlocks.visit(&Node::Body(&body), None).is_empty());
    // Schema present but not a body schema.
    assert!(MaxBlocks
        .visit(&Node::Body(&body), Some(&attr_schema))
        .is_empty());

    // Node is not a body.
    let expr = int_expr(1);
    assert!(MaxBlocks
        .visit(&Node::Expr(expr.as_ref()), Some(&schema))
        .is_empty());
    let block = block("rule");
    assert!(MinBlocks
        .visit(&Node::Block(block.as_ref()), Some(&schema))
        .is_empty());
    assert!(UnexpectedBlock
        .visit(&Node::Expr(expr.as_ref()), Some(&schema))
        .is_empty());
}

#[test]
fn min_blocks_flags_missing_and_under_populated_types() {
    let body = body_with_blocks(&["rule"]);
    let schema = body_schema(vec![("rule", min_items(2)), ("filter", min_items(1))]);

    let diags = MinBlocks.visit(&Node::Body(&body), Some(&schema));
    assert_eq!(diags.len(), 2);
    // BTreeMap iteration order: "filter" before "rule".
    assert!(diags[0].summary.contains("\"filter\""));
    assert!(diags[0].detail.contains('1'));
    assert!(diags[1].summary.contains("\"rule\""));
    assert!(diags[1].detail.contains('2'));
}

#[test]
fn min_blocks_satisfied_is_silent() {
    let body = body_with_blocks(&["rule", "rule"]);
    let schema = body_schema(vec![("rule", min_items(2))]);
    assert!(MinBlocks.visit(&Node::Body(&body), Some(&schema)).is_empty());
}

#[test]
fn unexpected_block_points_at_the_block() {
    let body = body_with_blocks(&["rule", "intruder"]);
    let schema = body_schema(vec![("rule", max_items(0))]);

    let diags = UnexpectedBlock.visit(&Node::Body(&body), Some(&schema));
    assert_eq!(diags.len(), 1);
    assert!(diags[0].summary.contains("\"intruder\""));

    let subject = diags[0].subject.as_ref().unwrap();
    let block_span = &body.blocks[1].span;
    assert_eq!(subject.start, block_span.start);
    assert_eq!(subject.end, block_span.end);
    assert_eq!(subject.source, block_span.source);
}

#[test]
fn run_concatenates_in_validator_order() {
    let body = body_with_blocks(&["rule", "rule", "intruder"]);
    let schema = body_schema(vec![("rule", BlockSchema {
        max_items: 1,
        min_items: 0,
        description: None,
    }), ("filter", min_items(1))]);

    let diags = run(&default_validators(), &Node::Body(&body), Some(&schema));
    assert_eq!(diags.len(), 3);
    assert!(diags[0].summary.contains("Too many"));
    assert!(diags[1].summary.contains("Too few"));
    assert!(diags[2].summary.contains("Unexpected"));
}

#[test]
fn diagnostic_message_renders_source_context() {
    let body = body_with_blocks(&["rule", "rule"]);
    let schema = body_schema(vec![("rule", max_items(1))]);

    let diags = MaxBlocks.visit(&Node::Body(&body), Some(&schema));
    let message = diags[0].message();
    assert!(message.contains("test.stz"));
    assert!(message.contains("Too many blocks"));
}
