// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Commit message acquisition and structural splitting.

mod parts;

pub use parts::{read_message, MessageParts};
