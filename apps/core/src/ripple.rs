/// Keyframes the ripple animation expands and fades through.
pub const KEYFRAMES: &str = "
    @keyframes ripple {
        to {
            transform: scale(4);
            opacity: 0;
        }
    }
";

/// Viewport rectangle of the clicked button.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ButtonRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// A circle centered on the click point, positioned relative to the button.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ripple {
    pub size: f64,
    pub left: f64,
    pub top: f64,
}

impl Ripple {
    pub fn at(rect: ButtonRect, client_x: f64, client_y: f64) -> Self {
        let size = rect.width.max(rect.height);
        Self {
            size,
            left: client_x - rect.left - size / 2.0,
            top: client_y - rect.top - size / 2.0,
        }
    }

    pub fn css_text(&self, lifetime_ms: u32) -> String {
        format!(
            "position: absolute; border-radius: 50%; background: rgba(255, 255, 255, 0.3); \
             transform: scale(0); animation: ripple {lifetime_ms}ms linear; \
             left: {}px; top: {}px; width: {size}px; height: {size}px;",
            self.left,
            self.top,
            size = self.size,
        )
    }
}
