//! Graphics-state bookkeeping expressed as content-stream operators.

use lopdf::content::Operation;
use lopdf::Object;
use pdfsmith_types::{Color, GraphicsState, LineDash};

pub(crate) fn stroke_color_op(color: &Color) -> Operation {
    let [r, g, b] = color.normalized();
    Operation::new("RG", vec![r.into(), g.into(), b.into()])
}

pub(crate) fn fill_color_op(color: &Color) -> Operation {
    let [r, g, b] = color.normalized();
    Operation::new("rg", vec![r.into(), g.into(), b.into()])
}

pub(crate) fn line_width_op(width: f32) -> Operation {
    Operation::new("w", vec![width.into()])
}

pub(crate) fn dash_op(dash: &LineDash) -> Operation {
    let pattern: Vec<Object> = dash.pattern.iter().map(|&len| len.into()).collect();
    Operation::new("d", vec![pattern.into(), dash.phase.into()])
}

/// The operators that turn `from` into `to`, one per differing component.
pub(crate) fn transition(from: &GraphicsState, to: &GraphicsState) -> Vec<Operation> {
    let mut ops = Vec::new();
    if from.stroke_color != to.stroke_color {
        ops.push(stroke_color_op(&to.stroke_color));
    }
    if from.fill_color != to.fill_color {
        ops.push(fill_color_op(&to.fill_color));
    }
    if from.line_width != to.line_width {
        ops.push(line_width_op(to.line_width));
    }
    if from.dash != to.dash {
        ops.push(dash_op(&to.dash));
    }
    ops
}
