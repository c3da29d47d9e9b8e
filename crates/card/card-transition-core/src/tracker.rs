//! Gesture displacement to completion fraction.
//!
//! Fractions always grow towards the transition's target: dragging down grows
//! a collapse that started from the expanded card, dragging up grows an
//! expansion that started from the collapsed card.

/// Fraction contributed by a vertical drag of `translation_y` (relative to the
/// drag origin) for a card of `card_height`. `is_card_visible` is the
/// visibility the drag started from.
#[inline]
pub fn fraction_from_translation(
    translation_y: f32,
    card_height: f32,
    is_card_visible: bool,
) -> f32 {
    if card_height <= 0.0 || !translation_y.is_finite() {
        return 0.0;
    }
    let raw = translation_y / card_height;
    if is_card_visible {
        raw
    } else {
        -raw
    }
}

/// Live drag fraction re-based on the fraction the transition was interrupted at.
/// Not clamped: the animators clamp when the fraction is applied.
#[inline]
pub fn combined_fraction(live_fraction: f32, baseline: f32) -> f32 {
    live_fraction + baseline
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sign_follows_starting_visibility() {
        assert!(fraction_from_translation(120.0, 600.0, true) > 0.0);
        assert!(fraction_from_translation(120.0, 600.0, false) < 0.0);
        assert!(fraction_from_translation(-120.0, 600.0, false) > 0.0);
    }

    #[test]
    fn upward_half_drag_expands_halfway() {
        assert_eq!(fraction_from_translation(-300.0, 600.0, false), 0.5);
    }

    #[test]
    fn degenerate_inputs_contribute_nothing() {
        assert_eq!(fraction_from_translation(100.0, 0.0, true), 0.0);
        assert_eq!(fraction_from_translation(f32::INFINITY, 600.0, true), 0.0);
    }

    #[test]
    fn combined_is_unclamped() {
        assert_eq!(combined_fraction(0.75, 0.5), 1.25);
        assert_eq!(combined_fraction(-0.75, 0.25), -0.5);
    }
}
