//! Layout-transition planning for list reorders.
//!
//! First-Last-Invert-Play, detached from any renderer: capture the on-screen
//! rectangles before a mutation, capture them again after, and express each
//! moved element as the inverse transform that maps its new slot back onto
//! its old one. Playing that transform to identity animates the reorder.

use std::collections::HashMap;

const EPSILON: f64 = 1e-6;

/// Axis-aligned box in page coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }
}

/// Transform that visually moves an element from its new slot back to its
/// old one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InverseTransform {
    pub translate_x: f64,
    pub translate_y: f64,
    pub scale_x: f64,
    pub scale_y: f64,
}

impl InverseTransform {
    pub const IDENTITY: Self = Self {
        translate_x: 0.0,
        translate_y: 0.0,
        scale_x: 1.0,
        scale_y: 1.0,
    };

    pub fn is_identity(&self) -> bool {
        self.translate_x.abs() < EPSILON
            && self.translate_y.abs() < EPSILON
            && (self.scale_x - 1.0).abs() < EPSILON
            && (self.scale_y - 1.0).abs() < EPSILON
    }
}

/// Compute the transform that maps `last` back onto `first`. Degenerate
/// (zero-sized) rectangles keep a scale of 1.
pub fn invert(first: Rect, last: Rect) -> InverseTransform {
    InverseTransform {
        translate_x: first.x - last.x,
        translate_y: first.y - last.y,
        scale_x: if last.width.abs() < EPSILON {
            1.0
        } else {
            first.width / last.width
        },
        scale_y: if last.height.abs() < EPSILON {
            1.0
        } else {
            first.height / last.height
        },
    }
}

/// One element's planned move.
#[derive(Debug, Clone, PartialEq)]
pub struct PlannedMove {
    pub id: String,
    pub transform: InverseTransform,
}

/// Plan moves between two layout snapshots keyed by element id.
///
/// Only ids present in both snapshots can move; entering or leaving
/// elements have no start/end pair and are left to the renderer. Elements
/// that did not actually move are omitted. The plan is sorted by id so the
/// output is deterministic.
pub fn plan_moves(
    first: &HashMap<String, Rect>,
    last: &HashMap<String, Rect>,
) -> Vec<PlannedMove> {
    let mut moves: Vec<PlannedMove> = last
        .iter()
        .filter_map(|(id, last_rect)| {
            let first_rect = first.get(id)?;
            let transform = invert(*first_rect, *last_rect);
            if transform.is_identity() {
                None
            } else {
                Some(PlannedMove {
                    id: id.clone(),
                    transform,
                })
            }
        })
        .collect();
    moves.sort_by(|a, b| a.id.cmp(&b.id));
    moves
}
