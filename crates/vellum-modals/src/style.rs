//! Scoped stylesheet and class names for the modal building blocks.
//!
//! Components only attach class names; everything visual is rendered here
//! from a [`ModalTheme`] and injected once by the provider.

use yew::{Classes, classes};

use crate::error::ModalError;
use crate::theme::ModalTheme;

/// Style-reset boundary around portal content.
pub const RESET: &str = "vellum-reset";
/// Fixed full-viewport backdrop.
pub const OVERLAY: &str = "vellum-modal-overlay";
/// Dialog surface inside the overlay.
pub const SURFACE: &str = "vellum-modal";
/// Header row.
pub const HEADER: &str = "vellum-modal-header";
/// Header title.
pub const TITLE: &str = "vellum-modal-title";
/// Close affordance.
pub const CLOSE: &str = "vellum-modal-close";
/// Body region.
pub const BODY: &str = "vellum-modal-body";
/// Modifier applied to a padded body.
pub const BODY_PADDED: &str = "vellum-modal-body--padded";
/// Action row.
pub const ACTIONS: &str = "vellum-modal-actions";

/// Classes for a body with or without padding.
#[must_use]
pub fn body_classes(padded: bool) -> Classes {
    classes!(BODY, padded.then_some(BODY_PADDED))
}

/// Render the scoped stylesheet for `theme`.
///
/// # Errors
///
/// Returns the theme validation error when the theme cannot be laid out.
pub fn stylesheet(theme: &ModalTheme) -> Result<String, ModalError> {
    theme.validate()?;
    let z_index = theme.overlay_z_index()?;

    let rules = [
        format!(
            ".{RESET}{{font-family:{font};line-height:1.35;color:{text};}}\
             .{RESET} *,.{RESET} *::before,.{RESET} *::after{{box-sizing:border-box;}}",
            font = theme.font_family,
            text = theme.icon_hover_color,
        ),
        format!(
            ".{OVERLAY}{{position:fixed;top:0;right:0;bottom:0;left:0;width:100vw;height:100vh;\
             background:{backdrop};overflow:auto;overscroll-behavior:contain;padding:0;z-index:{z_index};}}",
            backdrop = theme.backdrop,
        ),
        format!(
            ".{SURFACE}{{background:{surface};border-radius:{radius}px;margin:40px auto;\
             max-width:460px;overflow:hidden;}}",
            surface = theme.surface_color,
            radius = theme.radius_px,
        ),
        format!(
            ".{HEADER}{{height:{height}px;display:flex;align-items:center;justify-content:space-between;\
             padding:0 {pad};border-bottom:1px solid {border};margin:0;}}\
             .{TITLE}{{font-size:{title};font-weight:500;line-height:normal;margin:0;}}",
            height = theme.header_height_px,
            pad = theme.padding,
            border = theme.border_color,
            title = theme.title_font_size,
        ),
        format!(
            ".{CLOSE}{{display:flex;align-items:center;background:none;border:0;padding:0;\
             fill:{icon};cursor:pointer;transition:fill 85ms ease-out;}}\
             .{CLOSE} svg{{width:{icon_px}px;height:auto;}}\
             .{CLOSE}:hover{{fill:{icon_hover};}}",
            icon = theme.icon_color,
            icon_px = theme.close_icon_px,
            icon_hover = theme.icon_hover_color,
        ),
        format!(
            ".{BODY}{{padding:0;margin:0;overflow:hidden;display:flex;flex-direction:column;\
             min-height:{min}px;}}\
             .{BODY_PADDED}{{padding:{pad};}}\
             .{BODY}:last-child{{border-radius:0 0 {radius}px {radius}px;}}",
            min = theme.body_min_height_px,
            pad = theme.padding,
            radius = theme.radius_px,
        ),
        format!(
            ".{ACTIONS}{{display:flex;justify-content:flex-end;border-radius:0 0 {radius}px {radius}px;\
             padding:0 {pad} {pad} {pad};}}\
             .{ACTIONS}>*{{flex:0 1 auto;min-width:{min}px;margin:0 {small} 0 0;}}\
             .{ACTIONS}>*:last-child{{margin-right:0;}}",
            radius = theme.radius_px,
            pad = theme.padding,
            min = theme.action_min_width_px,
            small = theme.padding_small,
        ),
    ];
    Ok(rules.concat())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_padding_follows_flag() {
        assert!(body_classes(true).contains(BODY_PADDED));
        assert!(!body_classes(false).contains(BODY_PADDED));
        assert!(body_classes(false).contains(BODY));
    }

    #[test]
    fn overlay_rule_carries_stacking_and_backdrop() -> Result<(), ModalError> {
        let css = stylesheet(&ModalTheme::default())?;
        assert!(css.contains("z-index:2147000100"));
        assert!(css.contains("background:rgba(0, 0, 0, 0.5)"));
        assert!(css.contains("position:fixed"));
        assert!(css.contains("overflow:auto"));
        Ok(())
    }

    #[test]
    fn padded_modifier_uses_theme_padding() -> Result<(), ModalError> {
        let theme = ModalTheme {
            padding: "32px".to_string(),
            ..ModalTheme::default()
        };
        let css = stylesheet(&theme)?;
        assert!(css.contains(&format!(".{BODY_PADDED}{{padding:32px;}}")));
        assert!(css.contains("min-height:160px"));
        Ok(())
    }

    #[test]
    fn actions_spacing_skips_last_control() -> Result<(), ModalError> {
        let css = stylesheet(&ModalTheme::default())?;
        assert!(css.contains(".vellum-modal-actions>*{flex:0 1 auto;min-width:128px;margin:0 12px 0 0;}"));
        assert!(css.contains(".vellum-modal-actions>*:last-child{margin-right:0;}"));
        assert!(css.contains("justify-content:flex-end"));
        Ok(())
    }

    #[test]
    fn rule_breaking_values_yield_no_stylesheet() {
        let theme = ModalTheme {
            backdrop: "red;}body{display:none".to_string(),
            ..ModalTheme::default()
        };
        assert!(matches!(
            stylesheet(&theme),
            Err(ModalError::InvalidStyleValue { field: "backdrop", .. })
        ));
    }

    #[test]
    fn invalid_theme_yields_no_stylesheet() {
        let theme = ModalTheme {
            z_index_base: i64::from(i32::MAX),
            ..ModalTheme::default()
        };
        assert!(stylesheet(&theme).is_err());
    }
}
