//! Element ids and class names the page markup provides.

pub mod ids {
    pub const NAVBAR: &str = "navbar";
    pub const ANIMATED_TEXT: &str = "animatedText";
    pub const MOBILE_MENU_BUTTON: &str = "mobileMenuBtn";
    pub const CONTACT_FORM: &str = "contactForm";
    pub const TOAST: &str = "toast";
    pub const TOAST_TITLE: &str = "toastTitle";
    pub const TOAST_MESSAGE: &str = "toastMessage";
    pub const SKILLS_RADAR: &str = "skillsRadar";
}

pub mod selectors {
    pub const NAV_LINK: &str = ".nav-link";
    pub const NAV_LINKS: &str = ".nav-links";
    pub const SOCIAL_ICON: &str = ".social-icon";
    pub const TECH_LINES: &str = ".tech-lines";
    pub const CODE_ELEMENT: &str = ".code-element";
    pub const BUTTON: &str = "button";
}

pub mod classes {
    /// Toggled on the nav-links container by the mobile menu button.
    pub const MENU_ACTIVE: &str = "active";
    /// Added to `<body>` once the window has loaded.
    pub const LOADED: &str = "loaded";
}
