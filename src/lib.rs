// SPDX-License-Identifier: MIT

//! stepgate-rs - conditional branching rules for workflow steps
//!
//! - [gate] - value model, condition evaluation, path lookup, redirection
//! - [support] - text and identity helpers used next to the evaluator

pub mod gate;
pub mod support;
