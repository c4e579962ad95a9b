/// Scroll offset, in pixels, past which the navbar switches style.
pub const SCROLL_THRESHOLD: f64 = 50.0;

/// Height of the fixed navbar; scroll targets land this far below the top.
pub const NAVBAR_HEIGHT: f64 = 80.0;

pub const SCROLLED_CLASS: &str = "scrolled";

/// Strictly above the threshold counts as scrolled.
pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > SCROLL_THRESHOLD
}

/// Extracts the element id from an in-page link such as `#about`.
pub fn anchor_id(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Document offset to scroll to so the target sits just under the navbar.
pub fn scroll_top_for(target_offset_top: f64) -> f64 {
    target_offset_top - NAVBAR_HEIGHT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_is_exclusive() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(49.0));
        assert!(!is_scrolled(50.0));
        assert!(is_scrolled(51.0));
    }

    #[test]
    fn anchor_requires_hash_and_id() {
        assert_eq!(anchor_id("#skills"), Some("skills"));
        assert_eq!(anchor_id("#"), None);
        assert_eq!(anchor_id("skills"), None);
        assert_eq!(anchor_id(""), None);
    }

    #[test]
    fn target_lands_below_navbar() {
        assert!((scroll_top_for(1200.0) - 1120.0).abs() < f64::EPSILON);
        assert!((scroll_top_for(40.0) + 40.0).abs() < f64::EPSILON);
    }
}
