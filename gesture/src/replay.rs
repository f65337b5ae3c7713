//! Trace replay: recorded frames through an engine, events out as
//! s-expression lines.
//!
//! Every gesture change, click and volume knob change becomes one line.
//! Lines that cannot be decoded or parsed are logged and skipped.

use std::cell::RefCell;
use std::io::{BufRead, Write};
use std::rc::Rc;

use anyhow::Context;
use tracing::warn;

use crate::arbiter::{ClickRequest, GestureChange, GestureEvent};
use crate::config::GestureConfig;
use crate::consumer::VolumeKnob;
use crate::engine::GestureEngine;
use crate::listener::{Disposition, GestureListener};
use crate::sexp::{bool_str, escape_string, format_event};
use crate::trace::parse_trace_line;

/// Buffers event lines until the frame is done.
#[derive(Debug, Default)]
struct EventPrinter {
    pending: Vec<String>,
}

fn gesture_field(event: Option<GestureEvent>) -> String {
    match event {
        Some(e) => format!("\"{}\"", escape_string(e.as_str())),
        None => "nil".to_string(),
    }
}

impl GestureListener for EventPrinter {
    fn on_gesture(&mut self, change: &GestureChange) -> Disposition {
        self.pending.push(format_event(
            "gesture",
            &[
                ("gesture", gesture_field(change.current)),
                ("previous", gesture_field(change.previous)),
                ("t", format!("{:.1}", change.timestamp_ms)),
            ],
        ));
        Disposition::Ignored
    }

    fn on_click(&mut self, click: &ClickRequest) {
        self.pending.push(format_event(
            "click",
            &[
                ("x", format!("{:.3}", click.x)),
                ("y", format!("{:.3}", click.y)),
                ("t", format!("{:.1}", click.timestamp_ms)),
            ],
        ));
    }
}

/// Counters for one replay run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ReplaySummary {
    pub frames: usize,
    pub skipped: usize,
}

pub struct Replay {
    engine: GestureEngine,
    printer: Rc<RefCell<EventPrinter>>,
    knob: Rc<RefCell<VolumeKnob>>,
    /// Spacing for records without `:t`.
    frame_interval_ms: f64,
    clock_ms: f64,
    summary: ReplaySummary,
}

impl Replay {
    pub fn new(config: GestureConfig, frame_interval_ms: f64) -> Self {
        let mut engine = GestureEngine::new(config);
        let printer = Rc::new(RefCell::new(EventPrinter::default()));
        let knob = Rc::new(RefCell::new(VolumeKnob::default()));
        engine.subscribe(Box::new(printer.clone()));
        engine.subscribe(Box::new(knob.clone()));
        Self {
            engine,
            printer,
            knob,
            frame_interval_ms,
            clock_ms: 0.0,
            summary: ReplaySummary::default(),
        }
    }

    pub fn engine(&self) -> &GestureEngine {
        &self.engine
    }

    pub fn knob_value(&self) -> f32 {
        self.knob.borrow().value()
    }

    /// Replay every line of `reader`.  Only I/O failures abort.
    pub fn run<R: BufRead, W: Write>(&mut self, mut reader: R, out: &mut W) -> anyhow::Result<ReplaySummary> {
        let mut buf = Vec::new();
        let mut line_no = 0usize;
        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf).context("reading trace")? == 0 {
                break;
            }
            line_no += 1;
            let line = match std::str::from_utf8(&buf) {
                Ok(line) => line,
                Err(e) => {
                    warn!("Skipping trace line {}: {}", line_no, e);
                    self.summary.skipped += 1;
                    continue;
                }
            };
            self.feed_line(line, line_no, out)?;
        }
        Ok(self.summary)
    }

    fn feed_line<W: Write>(&mut self, line: &str, line_no: usize, out: &mut W) -> anyhow::Result<()> {
        let record = match parse_trace_line(line) {
            Ok(Some(record)) => record,
            Ok(None) => return Ok(()),
            Err(e) => {
                warn!("Skipping trace line {}: {:#}", line_no, e);
                self.summary.skipped += 1;
                return Ok(());
            }
        };

        let now_ms = record.t.unwrap_or(self.clock_ms + self.frame_interval_ms);
        self.clock_ms = now_ms;
        self.summary.frames += 1;

        let level = self.knob_value();
        self.engine.process_frame_at(record.frame.as_ref(), now_ms);

        for event in self.printer.borrow_mut().pending.drain(..) {
            writeln!(out, "{}", event)?;
        }
        let knob = self.knob.borrow();
        if knob.value() != level {
            let event = format_event(
                "knob",
                &[
                    ("value", format!("{:.1}", knob.value())),
                    ("muted", bool_str(knob.is_muted()).to_string()),
                    ("t", format!("{:.1}", now_ms)),
                ],
            );
            writeln!(out, "{}", event)?;
        }
        Ok(())
    }
}
