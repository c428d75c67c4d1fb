//! Read-only view configuration.

use crate::color::Rgba;
use crate::error::{Error, Result};
use crate::style::Style;

/// Default horizontal scroll granularity in pixels per scroll unit.
pub const DEFAULT_GRANULARITY: f32 = 20.0;

/// Configuration consumed by the rendering core.
///
/// Settings persistence lives outside the engine; a host resolves its
/// settings into this struct and hands it to
/// [`DocumentView::new`](crate::DocumentView::new), which validates it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewOptions {
    /// Tab size in space characters; drives the shared tab-stop width.
    pub tab_size: u8,
    /// Suppress selection rendering while the view lacks input focus.
    pub hide_inactive_selection: bool,
    /// Suppress the caret while the view lacks input focus.
    pub hide_inactive_cursor: bool,
    /// Pixels per horizontal scroll unit (quantization granularity).
    pub granularity: f32,
    /// Background color the viewport is cleared to before each pass.
    pub background: Rgba,
    /// Style overlaid on element styles within the selection.
    pub selection_style: Style,
    /// Caret stroke color.
    pub caret_color: Rgba,
    /// Caret stroke width in pixels.
    pub caret_width: f32,
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self {
            tab_size: 4,
            hide_inactive_selection: true,
            hide_inactive_cursor: true,
            granularity: DEFAULT_GRANULARITY,
            background: Rgba::WHITE,
            selection_style: Style::bg(Rgba::from_rgb_u8(49, 106, 197)).with_fg(Rgba::WHITE),
            caret_color: Rgba::BLACK,
            caret_width: 2.0,
        }
    }
}

impl ViewOptions {
    /// Validate the configuration.
    ///
    /// Tab size must be at least 1; granularity and caret width must be
    /// positive finite numbers.
    pub fn validate(&self) -> Result<()> {
        if self.tab_size == 0 {
            return Err(Error::InvalidTabSize(self.tab_size));
        }
        if !self.granularity.is_finite() || self.granularity <= 0.0 {
            return Err(Error::InvalidGranularity(self.granularity));
        }
        if !self.caret_width.is_finite() || self.caret_width <= 0.0 {
            return Err(Error::InvalidCaretWidth(self.caret_width));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(ViewOptions::default().validate().is_ok());
    }

    #[test]
    fn test_zero_tab_size_rejected() {
        let options = ViewOptions {
            tab_size: 0,
            ..ViewOptions::default()
        };
        assert!(matches!(
            options.validate(),
            Err(Error::InvalidTabSize(0))
        ));
    }

    #[test]
    fn test_bad_granularity_rejected() {
        for granularity in [0.0, -2.0, f32::NAN, f32::INFINITY] {
            let options = ViewOptions {
                granularity,
                ..ViewOptions::default()
            };
            assert!(options.validate().is_err(), "granularity {granularity}");
        }
    }

    #[test]
    fn test_bad_caret_width_rejected() {
        let options = ViewOptions {
            caret_width: 0.0,
            ..ViewOptions::default()
        };
        assert!(matches!(
            options.validate(),
            Err(Error::InvalidCaretWidth(_))
        ));
    }
}
