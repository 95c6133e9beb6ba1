// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::rc::Rc;

use thiserror::Error;

/// Errors raised while loading a schema from JSON. Schema loading is the
/// one place this crate fails hard: a broken schema is an authoring bug,
/// not a property of the configuration being validated.
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("failed to parse schema: {0}")]
    Json(#[from] serde_json::Error),

    #[error(
        "block type {block_type:?}: min_items {min_items} exceeds max_items {max_items}"
    )]
    BlockLimits {
        block_type: Rc<str>,
        min_items: u64,
        max_items: u64,
    },
}
