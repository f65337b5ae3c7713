//! Landmark trace records, one s-expression per line:
//!
//! ```text
//! ; comment
//! (:t 1016.5 :hand ((0.41 0.62 -0.01) (0.44 0.58 -0.02) ...))
//! (:t 1050.0 :hand nil)
//! ```
//!
//! `:hand` holds 21 `(x y z)` triples in landmark order, or nil when no
//! hand was detected.  `:t` is optional.

use anyhow::{bail, Context};
use lexpr::Value;

use crate::landmarks::{Landmark, LandmarkFrame, LANDMARK_COUNT};
use crate::sexp::{get_float, get_value, is_nil, list_items};

/// One recorded frame.
#[derive(Debug, Clone, PartialEq)]
pub struct TraceRecord {
    /// Capture time in ms, if recorded.
    pub t: Option<f64>,
    /// `None` when no hand was detected.
    pub frame: Option<LandmarkFrame>,
}

/// Parse one trace line.  Blank lines and `;` comments yield `Ok(None)`.
pub fn parse_trace_line(line: &str) -> anyhow::Result<Option<TraceRecord>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with(';') {
        return Ok(None);
    }

    let value = lexpr::from_str(line).context("malformed trace s-expression")?;
    let t = get_float(&value, "t");
    let frame = match get_value(&value, "hand") {
        None => bail!("trace record has no :hand"),
        Some(hand) if is_nil(hand) => None,
        Some(hand) => Some(parse_hand(hand).context("bad :hand landmarks")?),
    };
    Ok(Some(TraceRecord { t, frame }))
}

fn parse_hand(hand: &Value) -> anyhow::Result<LandmarkFrame> {
    let items = list_items(hand).context(":hand is not a list")?;
    if items.len() != LANDMARK_COUNT {
        bail!("expected {} landmarks, got {}", LANDMARK_COUNT, items.len());
    }
    let points = items
        .iter()
        .enumerate()
        .map(|(i, item)| parse_point(item).with_context(|| format!("landmark {}", i)))
        .collect::<anyhow::Result<Vec<_>>>()?;
    LandmarkFrame::from_slice(&points).context("landmark count mismatch")
}

fn parse_point(value: &Value) -> anyhow::Result<Landmark> {
    let coords = list_items(value).context("landmark is not a list")?;
    let [x, y, z] = coords.as_slice() else {
        bail!("expected (x y z), got {} values", coords.len());
    };
    Ok(Landmark::new(number(x)?, number(y)?, number(z)?))
}

fn number(value: &Value) -> anyhow::Result<f32> {
    value
        .as_f64()
        .map(|v| v as f32)
        .with_context(|| format!("not a number: {}", value))
}

/// Render a frame as a trace line.
pub fn format_trace_line(t: f64, frame: Option<&LandmarkFrame>) -> String {
    let hand = match frame {
        None => "nil".to_string(),
        Some(frame) => {
            let points: Vec<String> = frame
                .points()
                .iter()
                .map(|p| format!("({} {} {})", p.x, p.y, p.z))
                .collect();
            format!("({})", points.join(" "))
        }
    };
    format!("(:t {:.1} :hand {})", t, hand)
}
