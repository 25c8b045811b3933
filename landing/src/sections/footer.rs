use leptos::prelude::*;

use crate::config::use_config;

const GLOW: &str = "rgba(231,77,255,0.77)";

/// Colour stops of the banner's moving rainbow border.
pub const RAINBOW: [&str; 7] = [GLOW, GLOW, "transparent", GLOW, "transparent", GLOW, "transparent"];

pub const COLOPHON: &str = "이 사이트는 100% Kiro의 Spec 모드로 완성되었습니다!";

pub fn rainbow_gradient() -> String {
    format!("linear-gradient(90deg, {})", RAINBOW.join(", "))
}

#[component]
pub fn Footer() -> impl IntoView {
    let max_width = use_config().layout.max_width.clone();

    view! {
        <footer class="footer" style=format!("max-width: {max_width}; margin: 0 auto;")>
            <div class="banner banner-rainbow">
                <div class="banner-rainbow-border" style=format!("background-image: {};", rainbow_gradient())></div>
                <p class="banner-text">{COLOPHON}</p>
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gradient_lists_every_stop_in_order() {
        let gradient = rainbow_gradient();
        assert!(gradient.starts_with("linear-gradient(90deg, rgba(231,77,255,0.77), rgba"));
        assert!(gradient.ends_with("transparent)"));
        assert_eq!(gradient.matches("transparent").count(), 3);
    }
}
