// Copyright 2026 the Midground Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trace pipeline end to end: engine events through recorder and export.

use kurbo::Point;
use midground_core::engine::Engine;
use midground_core::layer::LayerKind;
use midground_core::offset::AlgorithmId;
use midground_debug::json;
use midground_debug::pretty::PrettyPrintSink;
use midground_debug::recorder::{RecordedEvent, RecorderSink};
use midground_page_harness::ScriptedPage;

fn label(event: &RecordedEvent) -> &'static str {
    match event {
        RecordedEvent::LayerRegistered(_) => "layer",
        RecordedEvent::PassBegin(_) => "pass_begin",
        RecordedEvent::PassEnd(_) => "pass_end",
        RecordedEvent::SegmentTarget(_) => "segment",
    }
}

#[test]
fn scroll_session_is_fully_traced() {
    let mut page = ScriptedPage::new(600.0);
    let body = page.body();
    let hills_a = page.add_element(body, Point::new(0.0, 400.0));
    let hills_b = page.add_element(body, Point::new(0.0, 900.0));
    let sky = page.add_element(body, Point::ZERO);
    page.style_background(sky, "url(\"sky.png\")", "0px");
    page.load_image("sky.png", 1500.0);
    page.bind_selector(".hills", [hills_a, hills_b]);
    page.bind_selector(".sky", [sky]);
    let (surface, driver) = page.split();

    let recorder = RecorderSink::new();
    let engine = Engine::new(surface);
    engine
        .set_trace_sink(Box::new(recorder.clone()))
        .add_layer(".hills", 0.5)
        .add_layer_with(".sky", -0.25, LayerKind::Background, AlgorithmId::STANDARD);

    driver.scroll_to(100.0);
    driver.scroll_to(350.0);

    let labels: Vec<&str> = recorder.events().iter().map(label).collect();
    assert_eq!(
        labels,
        [
            "layer",
            "layer",
            "pass_begin",
            "segment",
            "segment",
            "segment",
            "pass_end",
            "pass_begin",
            "segment",
            "segment",
            "segment",
            "pass_end",
        ]
    );

    // Pass indices are monotonic; registration events carry the counts.
    match recorder.events()[0] {
        RecordedEvent::LayerRegistered(e) => {
            assert_eq!(e.layer_index, 0);
            assert_eq!((e.matched, e.segments), (2, 2));
        }
        _ => panic!("first event is the first registration"),
    }
    match recorder.events()[7] {
        RecordedEvent::PassBegin(e) => {
            assert_eq!(e.pass_index, 1);
            assert_eq!(e.scroll_top, 350.0);
        }
        _ => panic!("eighth event opens the second pass"),
    }
}

#[test]
fn recorded_sessions_replay_and_export() {
    let mut page = ScriptedPage::new(600.0);
    let body = page.body();
    let item = page.add_element(body, Point::new(0.0, 500.0));
    page.bind_selector(".item", [item]);
    let (surface, driver) = page.split();

    let recorder = RecorderSink::new();
    let engine = Engine::new(surface);
    engine
        .set_trace_sink(Box::new(recorder.clone()))
        .add_layer(".item", 1.0);
    driver.scroll_to(60.0);

    // Replay into a pretty printer: one line per event.
    let mut pretty = PrettyPrintSink::with_writer(Vec::new());
    recorder.replay(&mut pretty);
    let out = String::from_utf8(pretty.into_writer()).unwrap();
    assert_eq!(out.lines().count(), recorder.len());
    assert!(out.starts_with("[layer]"));

    // Export parses back as JSON with the same event count.
    let mut exported = Vec::new();
    json::export(&recorder.events(), &mut exported).unwrap();
    let doc: serde_json::Value = serde_json::from_slice(&exported).unwrap();
    assert_eq!(
        doc["events"].as_array().unwrap().len(),
        recorder.len()
    );
}
