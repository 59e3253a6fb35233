//! Inline style strings for injected widgets and the stylesheets the page
//! relies on but does not ship.

pub const BASE_STYLESHEET_ID: &str = "archive-enhance-styles";
pub const SPIN_STYLESHEET_ID: &str = "archive-enhance-spin";

pub const BASE_STYLESHEET: &str = r#"
.fade-in-element {
    opacity: 0;
    transform: translateY(20px);
    transition: opacity 0.6s ease, transform 0.6s ease;
}

.fade-in-visible {
    opacity: 1;
    transform: translateY(0);
}

.light-theme {
    background-color: #f5f5f5;
    color: #333;
}

.light-theme .archive-card,
.light-theme .card {
    background: white;
    border-color: #ddd;
    color: #333;
}

.light-theme .back-button,
.light-theme .card-link {
    color: #8b0000;
}

@media (max-width: 768px) {
    #font-size-controls {
        bottom: 20px;
        left: 20px;
        padding: 8px;
    }

    #back-to-top {
        bottom: 20px;
        right: 20px;
        width: 45px;
        height: 45px;
        font-size: 20px;
    }

    #theme-switcher {
        top: 15px;
        right: 15px;
    }
}
"#;

pub const SPIN_KEYFRAMES: &str = r#"
@keyframes spin {
    0% { transform: rotate(0deg); }
    100% { transform: rotate(360deg); }
}
"#;

pub mod filter {
    pub const ROW: &str = "text-align: center; margin: 20px 0;";
    pub const BUTTON: &str = "margin: 5px; padding: 8px 16px; color: #e0e0e0; border: 1px solid; \
                              border-radius: 4px; cursor: pointer; transition: all 0.3s;";
    pub const IDLE_BG: &str = "#2a2a4a";
    pub const HOVER_BG: &str = "#3a3a5a";
    pub const ACTIVE_BG: &str = "#8b0000";
    pub const IDLE_BORDER: &str = "#444";
}

pub mod back_to_top {
    pub const BUTTON: &str = "position: fixed; bottom: 30px; right: 30px; width: 50px; height: 50px; \
                              border-radius: 50%; color: white; border: none; font-size: 24px; \
                              cursor: pointer; z-index: 1000; \
                              transition: opacity 0.3s, transform 0.3s, background 0.3s; \
                              box-shadow: 0 4px 12px rgba(0, 0, 0, 0.3);";
    pub const IDLE_BG: &str = "rgba(139, 0, 0, 0.8)";
    pub const HOVER_BG: &str = "rgba(200, 0, 0, 0.9)";
}

pub mod toggler {
    pub const PANEL: &str = "position: sticky; top: 20px; background: rgba(18, 18, 32, 0.9); \
                             border-radius: 8px; padding: 15px; margin: 20px 0; z-index: 100; \
                             backdrop-filter: blur(5px); border: 1px solid #2a2a4a;";
    pub const TITLE: &str = "margin-top: 0; margin-bottom: 10px; color: #8ab4f8; font-size: 1.1em;";
    pub const LINK: &str = "display: block; width: 100%; text-align: left; margin: 5px 0; \
                            padding: 8px 12px; border: none; border-left: 3px solid; \
                            cursor: pointer; transition: all 0.3s; border-radius: 0 4px 4px 0;";
    pub const IDLE_COLOR: &str = "#aaa";
    pub const HOVER_COLOR: &str = "#fff";
    pub const ACTIVE_COLOR: &str = "#8ab4f8";
    pub const HOVER_BG: &str = "rgba(74, 108, 248, 0.1)";
}

pub mod theme {
    pub const WRAPPER: &str = "position: fixed; top: 20px; right: 20px; z-index: 1001;";
    pub const BUTTON: &str = "width: 50px; height: 50px; border-radius: 50%; \
                              background: rgba(30, 30, 50, 0.8); color: white; \
                              border: 1px solid #444; font-size: 20px; cursor: pointer; \
                              transition: all 0.3s; backdrop-filter: blur(5px);";
}

pub mod overlay {
    pub const BACKDROP: &str = "position: fixed; top: 0; left: 0; width: 100%; height: 100%; \
                                background: #0a0a14; z-index: 9999; display: flex; \
                                flex-direction: column; justify-content: center; \
                                align-items: center; transition: opacity 0.5s;";
    pub const SPINNER: &str = "width: 60px; height: 60px; border: 5px solid rgba(139, 0, 0, 0.3); \
                               border-top: 5px solid #8b0000; border-radius: 50%; \
                               animation: spin 1s linear infinite; margin-bottom: 20px;";
    pub const TEXT: &str = "color: #aaa; font-size: 14px;";
}

pub mod font_size {
    pub const PANEL: &str = "position: fixed; bottom: 30px; left: 30px; \
                             background: rgba(18, 18, 32, 0.8); border-radius: 8px; padding: 10px; \
                             z-index: 1000; display: flex; gap: 10px; border: 1px solid #2a2a4a; \
                             backdrop-filter: blur(5px);";
    pub const BUTTON: &str = "width: 40px; height: 40px; border-radius: 50%; color: white; \
                              border: none; cursor: pointer; font-size: 18px;";
    pub const IDLE_BG: &str = "rgba(42, 42, 68, 0.9)";
    pub const HOVER_BG: &str = "rgba(74, 108, 248, 0.9)";
}
