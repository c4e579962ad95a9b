pub const BACKGROUND_RATE: f64 = -0.5;
const OVERLAY_BASE_RATE: f64 = -0.3;
const OVERLAY_RATE_STEP: f64 = -0.1;

/// Vertical shift of the hero background for a scroll offset.
pub fn background_offset(scroll_y: f64) -> f64 {
    scroll_y * BACKGROUND_RATE
}

/// Overlays further down the list drift faster.
pub fn overlay_rate(index: usize) -> f64 {
    (index as f64).mul_add(OVERLAY_RATE_STEP, OVERLAY_BASE_RATE)
}

pub fn overlay_offset(index: usize, scroll_y: f64) -> f64 {
    scroll_y * overlay_rate(index)
}

pub fn translate_y(offset: f64) -> String {
    format!("translate3d(0, {offset}px, 0)")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        let diff = (actual - expected).abs();
        assert!(
            diff < 1e-9,
            "expected {expected}, got {actual}, diff {diff}"
        );
    }

    #[test]
    fn background_moves_at_half_speed_upwards() {
        assert_close(background_offset(0.0), 0.0);
        assert_close(background_offset(200.0), -100.0);
    }

    #[test]
    fn overlay_rates_step_by_a_tenth() {
        assert_close(overlay_rate(0), -0.3);
        assert_close(overlay_rate(1), -0.4);
        assert_close(overlay_rate(2), -0.5);
        assert_close(overlay_offset(2, 100.0), -50.0);
    }

    #[test]
    fn transform_string() {
        assert_eq!(translate_y(-100.0), "translate3d(0, -100px, 0)");
        assert_eq!(translate_y(12.5), "translate3d(0, 12.5px, 0)");
    }
}
