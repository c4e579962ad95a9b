pub const GLOW: &str = "0 0 20px rgba(0, 255, 198, 0.5)";
pub const NO_GLOW: &str = "none";

/// Box shadow for a social icon.
pub const fn box_shadow(hovered: bool) -> &'static str {
    if hovered {
        GLOW
    } else {
        NO_GLOW
    }
}
