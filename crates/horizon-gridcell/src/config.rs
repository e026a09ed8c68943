//! Column configuration.
//!
//! A column can be described in TOML:
//!
//! ```toml
//! header = "Status"
//! image_layout = "zoom"
//!
//! [style]
//! back_color = "#f0f0f0"
//! padding = [2, 2, 2, 2]
//! ```
//!
//! Unset fields keep the column's defaults.

use serde::{Deserialize, Serialize};

use horizon_gridcell_style::{CellStyle, CellStyleConfig};

use crate::error::GridCellResult;
use crate::layout::ImageLayout;

/// Serialized form of an image column's settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColumnConfig {
    /// Header text.
    pub header: Option<String>,
    /// Layout name, see [`ImageLayout`]'s `FromStr`.
    pub image_layout: Option<String>,
    /// Default cell style overrides.
    pub style: CellStyleConfig,
}

impl ColumnConfig {
    /// Parse a configuration from TOML text.
    ///
    /// # Example
    ///
    /// ```
    /// use horizon_gridcell::config::ColumnConfig;
    /// use horizon_gridcell::layout::ImageLayout;
    ///
    /// let config = ColumnConfig::from_toml_str(r#"image_layout = "zoom""#).unwrap();
    /// assert_eq!(config.layout().unwrap(), Some(ImageLayout::Zoom));
    /// ```
    pub fn from_toml_str(text: &str) -> GridCellResult<Self> {
        Ok(toml::from_str(text)?)
    }

    /// The configured layout, if any.
    ///
    /// # Errors
    ///
    /// [`GridCellError::InvalidLayoutMode`](crate::GridCellError::InvalidLayoutMode)
    /// for unknown names.
    pub fn layout(&self) -> GridCellResult<Option<ImageLayout>> {
        self.image_layout.as_deref().map(str::parse).transpose()
    }

    /// Overlay the style overrides onto `style`.
    pub fn apply_style(&self, style: CellStyle) -> GridCellResult<CellStyle> {
        Ok(self.style.apply_to(style)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GridCellError;
    use horizon_gridcell_render::{Color, Edges};

    #[test]
    fn test_empty_config() {
        let config = ColumnConfig::from_toml_str("").unwrap();
        assert_eq!(config, ColumnConfig::default());
        assert_eq!(config.layout().unwrap(), None);
    }

    #[test]
    fn test_full_config() {
        let config = ColumnConfig::from_toml_str(
            r##"
            header = "Status"
            image_layout = "Normal"

            [style]
            back_color = "#f0f0f0"
            padding = [1, 2, 3, 4]
            "##,
        )
        .unwrap();

        assert_eq!(config.header.as_deref(), Some("Status"));
        assert_eq!(config.layout().unwrap(), Some(ImageLayout::Normal));

        let style = config.apply_style(CellStyle::new()).unwrap();
        assert_eq!(style.back_color, Color::from_rgb8(0xf0, 0xf0, 0xf0));
        assert_eq!(style.padding, Edges::new(1, 2, 3, 4));
    }

    #[test]
    fn test_unknown_layout() {
        let config = ColumnConfig::from_toml_str(r#"image_layout = "tile""#).unwrap();
        assert!(matches!(
            config.layout(),
            Err(GridCellError::InvalidLayoutMode { .. })
        ));
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            ColumnConfig::from_toml_str("colour = 1"),
            Err(GridCellError::Config(_))
        ));

        let config = ColumnConfig::from_toml_str("[style]\nback_color = \"blue-ish\"").unwrap();
        assert!(matches!(
            config.apply_style(CellStyle::new()),
            Err(GridCellError::Style(_))
        ));
    }
}
