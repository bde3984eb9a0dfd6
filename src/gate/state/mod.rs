// SPDX-License-Identifier: MIT

//! Runtime step data for condition evaluation
//!
//! `StepStore` keeps the values each workflow step has produced and answers
//! resolver lookups against them.

mod store;

pub use store::StepStore;
