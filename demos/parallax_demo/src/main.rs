// Copyright 2026 the Midground Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Simulated scroll session that exercises the engine and the tracing and
//! diagnostics pipeline.
//!
//! Scripts a three-layer page (a fixed sky background, hills, and
//! foreground items), scrolls it through a ramp of positions, then replays
//! the recording through a
//! [`PrettyPrintSink`](midground_debug::pretty::PrettyPrintSink) and
//! exports a JSON session file.

use std::fs::File;
use std::io::BufWriter;

use kurbo::Point;
use midground_core::engine::Engine;
use midground_core::layer::LayerKind;
use midground_core::offset::AlgorithmId;
use midground_debug::json;
use midground_debug::pretty::PrettyPrintSink;
use midground_debug::recorder::RecorderSink;
use midground_page_harness::ScriptedPage;

const VIEWPORT_HEIGHT: f64 = 600.0;
const SCROLL_STEP: f64 = 120.0;
const STEPS: u32 = 10;

fn main() {
    // -- page --------------------------------------------------------------
    let mut page = ScriptedPage::new(VIEWPORT_HEIGHT);
    let body = page.body();

    let sky = page.add_element(body, Point::ZERO);
    page.style_background(sky, "url(\"sky.png\")", "0px");
    page.load_image("sky.png", 2000.0);

    let hills = [
        page.add_element(body, Point::new(0.0, 400.0)),
        page.add_element(body, Point::new(320.0, 700.0)),
    ];
    let items = [
        page.add_element(body, Point::new(40.0, 500.0)),
        page.add_element(body, Point::new(200.0, 950.0)),
        page.add_element(body, Point::new(520.0, 1400.0)),
    ];

    page.bind_selector(".sky", [sky]);
    page.bind_selector(".hills", hills);
    page.bind_selector(".item", items);

    let (surface, driver) = page.split();

    // -- engine + recorder -------------------------------------------------
    let recorder = RecorderSink::new();
    let engine = Engine::new(surface);
    engine
        .set_trace_sink(Box::new(recorder.clone()))
        .add_layer_with(".sky", -0.3, LayerKind::Background, AlgorithmId::STANDARD)
        .add_layer(".hills", 0.4)
        .add_layer(".item", 0.9);

    // -- simulated scroll ramp ---------------------------------------------
    for step in 0..=STEPS {
        driver.scroll_to(f64::from(step) * SCROLL_STEP);
    }

    println!(
        "scrolled to {} in {} notifications, {} writes applied",
        driver.scroll_top(),
        STEPS + 1,
        driver.writes().len(),
    );
    for (index, item) in items.iter().enumerate() {
        let offset = driver.element_offset(*item);
        println!("item {index}: left={} top={}", offset.x, offset.y);
    }

    // -- playback + export -------------------------------------------------
    let mut pretty = PrettyPrintSink::stderr();
    recorder.replay(&mut pretty);

    let path = "session.json";
    let file = File::create(path).expect("failed to create session.json");
    let mut writer = BufWriter::new(file);
    json::export(&recorder.events(), &mut writer).expect("failed to write session export");

    println!("Wrote {path} ({} events)", recorder.len());
}
