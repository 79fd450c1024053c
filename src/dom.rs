//! Thin wrappers over browser APIs that have no Yew equivalent.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{ScrollBehavior, ScrollToOptions};

use crate::config::MOBILE_BREAKPOINT_PX;

const MOBILE_AGENT_TOKENS: [&str; 8] = [
    "android",
    "webos",
    "iphone",
    "ipad",
    "ipod",
    "blackberry",
    "iemobile",
    "opera mini",
];

pub const MOBILE_BODY_CLASS: &str = "mobile-device";

/// Blocking `window.alert`.
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

/// Blocking `window.confirm`; false when no window is available.
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|window| window.confirm_with_message(message).ok())
        .unwrap_or(false)
}

pub fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

pub fn viewport_width() -> Option<f64> {
    web_sys::window()?.inner_width().ok()?.as_f64()
}

pub fn user_agent() -> Option<String> {
    web_sys::window()?.navigator().user_agent().ok()
}

pub fn is_mobile_user_agent(user_agent: &str) -> bool {
    let agent = user_agent.to_ascii_lowercase();
    MOBILE_AGENT_TOKENS.iter().any(|token| agent.contains(token))
}

pub fn is_narrow(width: f64) -> bool {
    width <= MOBILE_BREAKPOINT_PX
}

/// Toggles a class on `<body>`.
pub fn set_body_class(class: &str, enabled: bool) {
    let Some(body) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
    else {
        return;
    };
    let classes = body.class_list();
    let result = if enabled {
        classes.add_1(class)
    } else {
        classes.remove_1(class)
    };
    if let Err(e) = result {
        log::warn!("could not update body class {}: {:?}", class, e);
    }
}

/// Mobile when the user agent says so or the viewport is narrow.
pub fn detect_mobile() -> bool {
    let by_agent = user_agent().map_or(false, |agent| is_mobile_user_agent(&agent));
    let by_width = viewport_width().map_or(false, is_narrow);
    by_agent || by_width
}

/// A window `resize` listener, detached on drop.
pub struct ResizeListener {
    closure: Closure<dyn FnMut()>,
}

impl ResizeListener {
    pub fn attach(handler: impl FnMut() + 'static) -> Option<Self> {
        let window = web_sys::window()?;
        let closure = Closure::<dyn FnMut()>::new(handler);
        window
            .add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())
            .map_err(|e| log::warn!("could not listen for resize: {:?}", e))
            .ok()?;
        Some(Self { closure })
    }
}

impl Drop for ResizeListener {
    fn drop(&mut self) {
        if let Some(window) = web_sys::window() {
            let _ = window.remove_event_listener_with_callback(
                "resize",
                self.closure.as_ref().unchecked_ref(),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mobile_user_agents() {
        assert!(is_mobile_user_agent(
            "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X)"
        ));
        assert!(is_mobile_user_agent("Mozilla/5.0 (Linux; Android 14; Pixel 8)"));
        assert!(is_mobile_user_agent("Opera/9.80 (J2ME/MIDP; Opera Mini/9.80)"));
        assert!(!is_mobile_user_agent(
            "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 Chrome/129.0"
        ));
    }

    #[test]
    fn test_breakpoint_is_inclusive() {
        assert!(is_narrow(768.0));
        assert!(is_narrow(375.0));
        assert!(!is_narrow(769.0));
    }
}
