// SPDX-License-Identifier: MIT

//! Helpers used alongside the evaluator
//!
//! - [html] - HTML escaping for values shown in step forms
//! - [codec] - gzip + Base64 packing of large text payloads
//! - [actor] - lookup of the user performing the current step

pub mod actor;
pub mod codec;
pub mod html;
