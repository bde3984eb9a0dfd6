// SPDX-License-Identifier: MIT

pub mod condition;
pub mod error;
pub mod loader;
pub mod path;
pub mod redirect;
pub mod resolver;
pub mod state;
