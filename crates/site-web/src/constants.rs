// Element ids and class hooks provided by the page markup. All of
// these are optional: a missing element disables its feature, nothing
// else.

pub const CANVAS_ID: &str = "three-canvas";
pub const LOADING_SCREEN_ID: &str = "loading-screen";
pub const THEME_TOGGLE_ID: &str = "theme-toggle";
pub const MOBILE_MENU_BUTTON_ID: &str = "mobile-menu-button";
pub const MOBILE_MENU_ID: &str = "mobile-menu";
pub const CONTACT_FORM_ID: &str = "contact-form";
pub const FORM_RESPONSE_ID: &str = "form-response";
pub const NAME_FIELD_ID: &str = "name";
pub const EMAIL_FIELD_ID: &str = "email";
pub const MESSAGE_FIELD_ID: &str = "message";
pub const MASCOT_ID: &str = "cute-mascot";
pub const MASCOT_BUBBLE_ID: &str = "mascot-bubble";
pub const CLICK_COUNT_ID: &str = "click-count";
pub const FUN_COUNTER_ID: &str = "fun-counter";

pub const REVEAL_SELECTOR: &str =
    ".animate-section, .info-card, .project-card, .timeline-item, .gallery-item";
pub const SKILL_BAR_SELECTOR: &str = ".skill-bar";
pub const SKILL_ITEM_SELECTOR: &str = ".skill-item";
pub const SECTION_SELECTOR: &str = "section";
pub const INTERACTIVE_SELECTOR: &str = ".interactive-btn";
pub const RIPPLE_SELECTOR: &str = ".interactive-btn, .project-card, .info-card";
pub const HOVER_RIPPLE_SELECTOR: &str = ".glass-card, .network-node, button, a";
pub const TECH_ICON_SELECTOR: &str = ".tech-icon-item";

pub const STORAGE_THEME_KEY: &str = "theme";

// Contact form labels and status lines.
pub const FORM_SUBMIT_LABEL: &str = "Send Message";
pub const FORM_SENDING_LABEL: &str = "Sending... ⏳";
pub const FORM_SUCCESS_MESSAGE: &str = "Message sent! Thank you! 🎉";
pub const FORM_ERROR_MESSAGE: &str = "Failed to send, please try again later 😢";

// Mail relay collaborator.
pub const RELAY_ENDPOINT: &str = "/api/send-mail";
pub const RELAY_TO_EMAIL: &str = "hilmimax109@gmail.com";

pub const MASCOT_MESSAGES: [&str; 10] = [
    "Hi! I'm the site mascot! 🤖",
    "Neat website, right? 😎",
    "Try finding the easter eggs! 🥚",
    "Click 10 times for a surprise! 🎁",
    "Thanks for stopping by! 🏆",
    "Don't forget to say hello! ❤️",
    "Networking is cool! 🌐",
    "Have fun exploring! 🎨",
    "Psst... try the konami code! 🎮",
    "Double-click a section for a burst! ✨",
];

pub const FLOATING_EMOJIS: [&str; 10] = ["💻", "🌐", "📡", "🔌", "💾", "🖥️", "⚡", "🚀", "✨", "⭐"];
pub const SPARKLE_GLYPHS: [&str; 4] = ["✨", "⭐", "💫", "🌟"];
pub const HEART_GLYPHS: [&str; 4] = ["❤️", "💜", "💖", "💕"];
pub const CONFETTI_GLYPHS: [&str; 4] = ["🎉", "🎊", "✨", "⭐"];

pub const SHAKE_SECRET_MESSAGE: &str = "📱 You found the shake feature! 📱";
pub const KONAMI_MESSAGE: &str = "🎮 Konami code! You unlocked the secret celebration! 🎮";
