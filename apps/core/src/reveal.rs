//! Fade-and-rise entrance for timeline and tech items.

/// Fraction of an element that must be visible before it is revealed.
pub const THRESHOLD: f64 = 0.1;
/// Shrinks the viewport's bottom edge so items reveal slightly later.
pub const ROOT_MARGIN: &str = "0px 0px -50px 0px";

/// A set of elements that reveal with a staggered delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealGroup {
    pub selector: &'static str,
    pub step_ms: u32,
    pub duration_ms: u32,
    pub offset_px: u32,
}

pub const TIMELINE: RevealGroup = RevealGroup {
    selector: ".timeline-item",
    step_ms: 200,
    duration_ms: 600,
    offset_px: 30,
};

pub const TECH: RevealGroup = RevealGroup {
    selector: ".tech-item",
    step_ms: 100,
    duration_ms: 500,
    offset_px: 20,
};

pub const GROUPS: [RevealGroup; 2] = [TIMELINE, TECH];

/// Inline style values applied to a revealable element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealStyle {
    pub opacity: &'static str,
    pub transform: String,
    pub transition: Option<String>,
}

impl RevealGroup {
    pub fn delay_ms(&self, index: usize) -> u64 {
        u64::from(self.step_ms).saturating_mul(index as u64)
    }

    /// Starting style for the element at `index` within the group.
    pub fn hidden_style(&self, index: usize) -> RevealStyle {
        let duration = self.duration_ms;
        let delay = self.delay_ms(index);
        RevealStyle {
            opacity: "0",
            transform: format!("translateY({}px)", self.offset_px),
            transition: Some(format!(
                "opacity {duration}ms ease {delay}ms, transform {duration}ms ease {delay}ms"
            )),
        }
    }
}

/// Style for an element once it has been seen. The transition set by
/// `hidden_style` is left in place.
pub fn revealed_style() -> RevealStyle {
    RevealStyle {
        opacity: "1",
        transform: "translateY(0)".to_string(),
        transition: None,
    }
}

/// Style to apply for an intersection report. Leaving the viewport changes
/// nothing, so revealed items stay revealed.
pub fn on_intersection(is_intersecting: bool) -> Option<RevealStyle> {
    is_intersecting.then(revealed_style)
}
