//! Deserializable cell style configuration.
//!
//! Colors are hex strings (`"#rrggbb"`), padding is `[top, right, bottom, left]`
//! and alignment uses names such as `"middle-center"`. Every field is optional;
//! unset fields keep the value of the style the configuration is applied to.
//!
//! ```
//! use horizon_gridcell_style::{CellStyle, CellStyleConfig};
//! use horizon_gridcell_render::Color;
//!
//! let config: CellStyleConfig = toml::from_str(r##"
//! back_color = "#202020"
//! padding = [2, 4, 2, 4]
//! "##).unwrap();
//!
//! let style = config.apply_to(CellStyle::new()).unwrap();
//! assert_eq!(style.back_color, Color::from_rgb8(0x20, 0x20, 0x20));
//! ```

use horizon_gridcell_render::{Color, Edges};
use serde::{Deserialize, Serialize};

use crate::cell_style::CellStyle;
use crate::error::{Error, Result};
use crate::types::ContentAlignment;

/// Serialized form of a [`CellStyle`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CellStyleConfig {
    pub back_color: Option<String>,
    pub fore_color: Option<String>,
    pub selection_back_color: Option<String>,
    pub selection_fore_color: Option<String>,
    pub padding: Option<[i32; 4]>,
    pub alignment: Option<String>,
}

impl CellStyleConfig {
    /// Overlay the configured fields onto `style`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidColor`] for unparsable colors and
    /// [`Error::InvalidValue`] for negative padding or an unknown alignment.
    pub fn apply_to(&self, mut style: CellStyle) -> Result<CellStyle> {
        if let Some(color) = parse_color("back_color", self.back_color.as_deref())? {
            style.back_color = color;
        }
        if let Some(color) = parse_color("fore_color", self.fore_color.as_deref())? {
            style.fore_color = color;
        }
        if let Some(color) =
            parse_color("selection_back_color", self.selection_back_color.as_deref())?
        {
            style.selection_back_color = color;
        }
        if let Some(color) =
            parse_color("selection_fore_color", self.selection_fore_color.as_deref())?
        {
            style.selection_fore_color = color;
        }

        if let Some(padding) = self.padding {
            if padding.iter().any(|&v| v < 0) {
                return Err(Error::invalid_value(
                    "padding",
                    format!("negative padding {padding:?}"),
                ));
            }
            style.padding = Edges::from(padding);
        }

        if let Some(name) = &self.alignment {
            style.alignment = ContentAlignment::from_css(name).ok_or_else(|| {
                Error::invalid_value("alignment", format!("unknown alignment '{name}'"))
            })?;
        }

        tracing::trace!(back_color = ?style.back_color, padding = ?style.padding, "applied cell style config");
        Ok(style)
    }
}

fn parse_color(property: &str, value: Option<&str>) -> Result<Option<Color>> {
    match value {
        None => Ok(None),
        Some(hex) => Color::from_hex(hex)
            .map(Some)
            .ok_or_else(|| Error::invalid_color(property, hex)),
    }
}
