//! Design tokens and the configurable theme consumed by the modal components.
//!
//! Every visual constant lives here rather than in the components: the
//! stacking base, backdrop, spacing and sizes are plain configuration that a
//! host application may override or load from JSON.

use serde::{Deserialize, Serialize};

use crate::error::ModalError;

/// Base stacking priority for editor chrome. Modal overlays sit at
/// `Z_INDEX + OVERLAY_OFFSET`.
pub const Z_INDEX: i64 = 2_147_000_000;

/// Offset added to the stacking base for the modal overlay.
pub const OVERLAY_OFFSET: i64 = 100;

/// A single color token with a stable name and hex value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorToken {
    /// Semantic identifier for the shade (e.g., "3").
    pub name: &'static str,
    /// Hex RGB value for the shade.
    pub hex: &'static str,
}

/// Collection of related tokens.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    /// Palette identifier.
    pub id: &'static str,
    /// Ordered list of shades from lightest to darkest.
    pub shades: &'static [ColorToken],
}

impl Palette {
    /// Look up a shade by name.
    #[must_use]
    pub fn shade(&self, name: &str) -> Option<&'static str> {
        self.shades
            .iter()
            .find(|token| token.name == name)
            .map(|token| token.hex)
    }
}

/// Neutral greys used for borders, icons and surfaces.
pub const GREY: Palette = Palette {
    id: "grey",
    shades: &[
        ColorToken {
            name: "0",
            hex: "#FFFFFF",
        },
        ColorToken {
            name: "1",
            hex: "#F6F6F9",
        },
        ColorToken {
            name: "2",
            hex: "#EDECF3",
        },
        ColorToken {
            name: "3",
            hex: "#E1DDEC",
        },
        ColorToken {
            name: "4",
            hex: "#B2ADBE",
        },
        ColorToken {
            name: "5",
            hex: "#918C9E",
        },
        ColorToken {
            name: "6",
            hex: "#716C7F",
        },
        ColorToken {
            name: "7",
            hex: "#565165",
        },
        ColorToken {
            name: "8",
            hex: "#433E52",
        },
        ColorToken {
            name: "9",
            hex: "#363145",
        },
        ColorToken {
            name: "10",
            hex: "#282828",
        },
    ],
};

fn grey(name: &str) -> String {
    GREY.shade(name).unwrap_or("#000000").to_string()
}

/// Visual configuration for the modal overlay and its building blocks.
///
/// Missing fields fall back to [`ModalTheme::default`], so a JSON document
/// only needs to name the values it overrides.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ModalTheme {
    /// Stacking base shared with the rest of the editor chrome.
    pub z_index_base: i64,
    /// Offset added to the base for the overlay layer.
    pub overlay_offset: i64,
    /// Backdrop fill behind the dialog surface.
    pub backdrop: String,
    /// Font stack applied inside the reset boundary.
    pub font_family: String,
    /// Font size of the header title.
    pub title_font_size: String,
    /// Regular padding.
    pub padding: String,
    /// Spacing between action controls.
    pub padding_small: String,
    /// Header divider color.
    pub border_color: String,
    /// Close icon fill.
    pub icon_color: String,
    /// Close icon fill while hovered.
    pub icon_hover_color: String,
    /// Dialog surface background.
    pub surface_color: String,
    /// Fixed header height in pixels.
    pub header_height_px: u32,
    /// Minimum body height in pixels.
    pub body_min_height_px: u32,
    /// Minimum width of each action control in pixels.
    pub action_min_width_px: u32,
    /// Corner radius of the dialog surface in pixels.
    pub radius_px: u32,
    /// Rendered width of the close icon in pixels.
    pub close_icon_px: u32,
}

impl Default for ModalTheme {
    fn default() -> Self {
        Self {
            z_index_base: Z_INDEX,
            overlay_offset: OVERLAY_OFFSET,
            backdrop: "rgba(0, 0, 0, 0.5)".to_string(),
            font_family: "'Inter', -apple-system, BlinkMacSystemFont, sans-serif".to_string(),
            title_font_size: "20px".to_string(),
            padding: "20px".to_string(),
            padding_small: "12px".to_string(),
            border_color: grey("3"),
            icon_color: grey("5"),
            icon_hover_color: grey("8"),
            surface_color: grey("0"),
            header_height_px: 56,
            body_min_height_px: 160,
            action_min_width_px: 128,
            radius_px: 5,
            close_icon_px: 24,
        }
    }
}

impl ModalTheme {
    /// Parse a theme document and validate it.
    ///
    /// # Errors
    ///
    /// Returns [`ModalError::InvalidTheme`] for malformed JSON or unknown
    /// fields, and any error reported by [`ModalTheme::validate`].
    pub fn from_json(raw: &str) -> Result<Self, ModalError> {
        let theme: Self =
            serde_json::from_str(raw).map_err(|source| ModalError::InvalidTheme { source })?;
        theme.validate()?;
        Ok(theme)
    }

    /// Check the values the layout depends on.
    ///
    /// # Errors
    ///
    /// Returns [`ModalError::StackingOutOfRange`] when the overlay priority does
    /// not fit a CSS integer, [`ModalError::InvalidStyleValue`] when a string
    /// value contains `{`, `}` or `;`, or [`ModalError::InvalidDimension`] when
    /// a size that must be positive is zero.
    pub fn validate(&self) -> Result<(), ModalError> {
        self.overlay_z_index()?;
        for (field, value) in [
            ("backdrop", &self.backdrop),
            ("font_family", &self.font_family),
            ("title_font_size", &self.title_font_size),
            ("padding", &self.padding),
            ("padding_small", &self.padding_small),
            ("border_color", &self.border_color),
            ("icon_color", &self.icon_color),
            ("icon_hover_color", &self.icon_hover_color),
            ("surface_color", &self.surface_color),
        ] {
            if value.contains(['{', '}', ';']) {
                return Err(ModalError::InvalidStyleValue {
                    field,
                    value: value.clone(),
                });
            }
        }
        for (field, value) in [
            ("header_height_px", self.header_height_px),
            ("close_icon_px", self.close_icon_px),
        ] {
            if value == 0 {
                return Err(ModalError::InvalidDimension {
                    field,
                    reason: "must be greater than zero",
                });
            }
        }
        Ok(())
    }

    /// Stacking priority of the overlay (`base + offset`).
    ///
    /// # Errors
    ///
    /// Returns [`ModalError::StackingOutOfRange`] when the sum overflows or
    /// falls outside the signed 32-bit range CSS accepts for `z-index`.
    pub fn overlay_z_index(&self) -> Result<i32, ModalError> {
        self.z_index_base
            .checked_add(self.overlay_offset)
            .and_then(|value| i32::try_from(value).ok())
            .ok_or(ModalError::StackingOutOfRange {
                base: self.z_index_base,
                offset: self.overlay_offset,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grey_palette_lookup() {
        assert_eq!(GREY.shades.len(), 11);
        assert_eq!(GREY.shade("3"), Some("#E1DDEC"));
        assert_eq!(GREY.shade("missing"), None);
    }

    #[test]
    fn default_overlay_sits_above_base() -> Result<(), ModalError> {
        let theme = ModalTheme::default();
        assert_eq!(theme.overlay_z_index()?, 2_147_000_100);
        theme.validate()
    }

    #[test]
    fn partial_json_keeps_defaults() -> Result<(), ModalError> {
        let theme = ModalTheme::from_json(r#"{ "backdrop": "rgba(10, 10, 10, 0.8)" }"#)?;
        assert_eq!(theme.backdrop, "rgba(10, 10, 10, 0.8)");
        assert_eq!(theme.z_index_base, Z_INDEX);
        assert_eq!(theme.header_height_px, 56);
        Ok(())
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let err = ModalTheme::from_json(r#"{ "zindex": 1 }"#);
        assert!(matches!(err, Err(ModalError::InvalidTheme { .. })));
    }

    #[test]
    fn stacking_outside_css_range_is_rejected() {
        let theme = ModalTheme {
            overlay_offset: 1_000_000,
            ..ModalTheme::default()
        };
        assert!(matches!(
            theme.validate(),
            Err(ModalError::StackingOutOfRange {
                base: Z_INDEX,
                offset: 1_000_000
            })
        ));

        let overflow = ModalTheme {
            z_index_base: i64::MAX,
            overlay_offset: 1,
            ..ModalTheme::default()
        };
        assert!(overflow.overlay_z_index().is_err());
    }

    #[test]
    fn values_that_close_a_rule_are_rejected() {
        for raw in [
            r#"{ "font_family": "serif;}.editor{display:none" }"#,
            r#"{ "icon_color": "red}" }"#,
            r#"{ "padding": "{20px" }"#,
        ] {
            assert!(matches!(
                ModalTheme::from_json(raw),
                Err(ModalError::InvalidStyleValue { .. })
            ));
        }
        let theme = ModalTheme {
            border_color: "rgb(1, 2, 3)".to_string(),
            ..ModalTheme::default()
        };
        assert!(theme.validate().is_ok());
    }

    #[test]
    fn zero_header_height_is_rejected() {
        let err = ModalTheme::from_json(r#"{ "header_height_px": 0 }"#);
        assert!(matches!(
            err,
            Err(ModalError::InvalidDimension {
                field: "header_height_px",
                ..
            })
        ));
    }
}
