//! Deterministic layout for the floating poster cards behind the hero.
//!
//! Every value is derived from a hash of (slot id, frame index, salt), so
//! a card keeps its size, offset and poster for a whole frame instead of
//! twitching on every re-render, and the same frame always looks the same.

use crate::catalog::CardSlot;

/// Milliseconds between one card's transition and the next slot's.
const STAGGER_STEP_MS: u64 = 150;

/// Size, offset and tint for one card at one animation frame.
#[derive(Debug, Clone, PartialEq)]
pub struct CardVariant {
    pub width: u32,
    pub height: u32,
    pub translate_x: f64,
    pub translate_y: f64,
    /// Background tint opacity used when the slot has no poster
    pub alpha: f64,
}

/// Deterministic hash in [0, 1) from slot id, frame index and salt.
fn hash01(id: &str, frame: u32, salt: u32) -> f64 {
    let key = format!("{}-{}-{}", id, frame, salt);
    let mut hash: u32 = 0;
    for byte in key.bytes() {
        hash = hash.wrapping_mul(31).wrapping_add(byte as u32);
    }
    let x = (hash as f64).sin() * 10_000.0;
    x - x.floor()
}

/// Compute a slot's variant for the given frame.
///
/// Width and height scale independently in [0.6, 1.4) of the slot's base
/// size, the position jitters within ±24px, and the tint alpha stays in
/// [0.08, 0.22).
pub fn card_variant(slot: &CardSlot, frame: u32) -> CardVariant {
    let width_scale = 0.6 + hash01(&slot.id, frame, 1) * 0.8;
    let height_scale = 0.6 + hash01(&slot.id, frame, 2) * 0.8;
    let jitter_x = (hash01(&slot.id, frame, 3) - 0.5) * 48.0;
    let jitter_y = (hash01(&slot.id, frame, 4) - 0.5) * 48.0;
    let alpha = 0.08 + hash01(&slot.id, frame, 5) * 0.14;

    CardVariant {
        width: (slot.width as f64 * width_scale).round() as u32,
        height: (slot.height as f64 * height_scale).round() as u32,
        translate_x: jitter_x,
        translate_y: jitter_y,
        alpha,
    }
}

/// Pick this frame's poster from the slot pool followed by the shared
/// pool. None when both pools are empty.
pub fn pick_image<'a>(slot: &'a CardSlot, shared: &'a [String], frame: u32) -> Option<&'a str> {
    let total = slot.images.len() + shared.len();
    if total == 0 {
        return None;
    }
    let index = ((hash01(&slot.id, frame, 99) * total as f64) as usize).min(total - 1);
    slot.images
        .iter()
        .chain(shared.iter())
        .nth(index)
        .map(|s| s.as_str())
}

/// Staggered transition delay for a slot: cards hide one by one in slot
/// order and return in reverse order.
pub fn transition_delay_ms(slot_index: usize, slot_count: usize, visible: bool) -> u64 {
    if visible {
        slot_count.saturating_sub(slot_index + 1) as u64 * STAGGER_STEP_MS
    } else {
        slot_index as u64 * STAGGER_STEP_MS
    }
}
