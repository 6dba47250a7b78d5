// Copyright 2025 the Slipsheet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Runnable demos for the slipsheet crates.
//!
//! See the `examples/` directory; run with
//! `cargo run -p slipsheet_examples --example drag_session`.
