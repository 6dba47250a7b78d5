// Copyright 2025 the Slipsheet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A complete drag session against a logging layout host.
//!
//! This example shows the full host contract:
//! - unanimated `layout_update` commands while a drag is in flight,
//! - one `animated_transition` per settle, tagged with a ticket,
//! - completion reporting back into the controller, including a straggling
//!   completion that arrives after a newer transition already settled.
//!
//! Run:
//! - `cargo run -p slipsheet_examples --example drag_session`

use kurbo::Vec2;
use slipsheet_controller::{
    LayoutHost, SheetConfig, SheetController, TransitionSpec, TransitionTicket,
};
use slipsheet_gesture::DragSample;

/// A host that logs every command and queues animation completions so the
/// demo can deliver them whenever it likes, including out of order.
#[derive(Default)]
struct LoggingHost {
    running: Vec<TransitionTicket>,
}

impl LayoutHost for LoggingHost {
    fn layout_update(&mut self, offset: f64) {
        println!("  host: layout_update(offset: {offset})");
    }

    fn animated_transition(&mut self, offset: f64, spec: &TransitionSpec, ticket: TransitionTicket) {
        println!(
            "  host: animated_transition(offset: {offset}, {}ms, {:?}, spring: {}) [{ticket:?}]",
            spec.duration_ms,
            spec.curve,
            spec.spring.is_some(),
        );
        self.running.push(ticket);
    }
}

fn main() {
    let config = SheetConfig {
        initially_expanded: false,
        ..SheetConfig::new(300.0, 40.0)
    };
    let mut sheet = SheetController::new(LoggingHost::default(), config)
        .expect("static demo geometry is valid");

    println!("start: {:?}", sheet.state());

    // Drag the sheet up from its collapsed position and fling it open.
    println!("drag up 200 units, release with an upward fling:");
    sheet.on_drag(DragSample::began());
    for ty in [-60.0, -130.0, -200.0] {
        sheet.on_drag(DragSample::changed(Vec2::new(0.0, ty), Vec2::new(0.0, -700.0)));
    }
    sheet.on_drag(DragSample::ended(Vec2::new(0.0, -200.0), Vec2::new(0.0, -1200.0)));

    let reveal = sheet.host_mut().running.pop().expect("a settle was issued");
    sheet.transition_completed(reveal);
    println!("settled: {:?}", sheet.state());

    // A hesitant downward drag that does not cross the commit threshold.
    println!("drag down 80 units, release slowly:");
    sheet.on_drag(DragSample::began());
    sheet.on_drag(DragSample::changed(Vec2::new(0.0, 80.0), Vec2::new(0.0, 300.0)));
    sheet.on_drag(DragSample::ended(Vec2::new(0.0, 80.0), Vec2::new(0.0, 100.0)));

    let snap_back = sheet.host_mut().running.pop().expect("a settle was issued");
    sheet.transition_completed(snap_back);
    println!("settled: {:?}", sheet.state());

    // Programmatic hide immediately overridden by a show; the hide's
    // completion arrives last and is ignored.
    println!("hide() then show(), completions out of order:");
    sheet.hide(true);
    sheet.show(true);
    let show = sheet.host_mut().running.pop().expect("show was issued");
    let hide = sheet.host_mut().running.pop().expect("hide was issued");
    sheet.transition_completed(show);
    sheet.transition_completed(hide); // stale, ignored
    println!("settled: {:?}", sheet.state());
}
