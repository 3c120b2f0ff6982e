// Copyright 2026 the Midground Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! JSON export of recorded scroll sessions.
//!
//! [`export`] writes a recorded event log as a single JSON document for
//! offline analysis, e.g. plotting applied positions against scroll
//! position. Scroll passes carry no host timestamps, so events are keyed by
//! pass index rather than time.

use std::io::{self, Write};

use serde_json::{Value, json};

use crate::recorder::RecordedEvent;

/// Writes `events` as a JSON document: `{"events": [...]}`.
pub fn export(events: &[RecordedEvent], writer: &mut impl Write) -> io::Result<()> {
    let values: Vec<Value> = events.iter().map(event_value).collect();
    let doc = json!({ "events": values });
    serde_json::to_writer_pretty(&mut *writer, &doc)?;
    writer.write_all(b"\n")
}

fn event_value(event: &RecordedEvent) -> Value {
    match event {
        RecordedEvent::LayerRegistered(e) => json!({
            "type": "layer_registered",
            "layer": e.layer_index,
            "kind": format!("{:?}", e.kind),
            "speed": e.speed,
            "matched": e.matched,
            "segments": e.segments,
        }),
        RecordedEvent::PassBegin(e) => json!({
            "type": "pass_begin",
            "pass": e.pass_index,
            "scroll_top": e.scroll_top,
        }),
        RecordedEvent::PassEnd(e) => json!({
            "type": "pass_end",
            "pass": e.pass_index,
            "segments": e.segments_visited,
        }),
        RecordedEvent::SegmentTarget(e) => json!({
            "type": "segment_target",
            "pass": e.pass_index,
            "layer": e.layer_index,
            "segment": e.segment_index,
            "left": e.left,
            "top": e.top,
        }),
    }
}
