//! Image columns.
//!
//! A column owns a cell template, the layout shared by its cells and the
//! default style the host applies to them. The kind of cell a column holds is
//! fixed when it is built; [`ColumnTemplate::set_cell_template`] rejects any
//! other kind.
//!
//! - [`ImageOptionColumn`]: editable, cells are [`ImageOptionCell`]s
//! - [`ImageEnumColumn`]: display only, cells are [`ImageEnumCell`]s and
//!   values come from an enumeration

use std::sync::Arc;

use horizon_gridcell_core::logging::targets;
use horizon_gridcell_render::fallback_image;
use horizon_gridcell_style::{CellStyle, ContentAlignment};

use crate::cell::{CellKind, GridCell, ImageCell, ImageEnumCell, ImageOptionCell};
use crate::config::ColumnConfig;
use crate::error::{GridCellError, GridCellResult};
use crate::layout::{ColumnLayout, ImageLayout};
use crate::option_set::{ImageEnum, OptionSet, ValueDomain};

/// Validation of the cell template a column clones its cells from.
pub trait ColumnTemplate {
    /// The only kind of cell this column accepts.
    fn required_kind(&self) -> CellKind;

    /// The current template.
    fn cell_template(&self) -> &dyn GridCell;

    /// Replace the template.
    ///
    /// # Errors
    ///
    /// [`GridCellError::InvalidCellTemplate`] if `template` is not of the
    /// required kind.
    fn set_cell_template(&mut self, template: Box<dyn GridCell>) -> GridCellResult<()>;
}

static_assertions::assert_obj_safe!(ColumnTemplate);

/// The default style of image columns: centered, with the fallback image
/// shown for unset values.
pub fn image_column_default_style() -> CellStyle {
    CellStyle::new()
        .with_alignment(ContentAlignment::MiddleCenter)
        .with_null_value(fallback_image())
}

#[derive(Debug, Clone)]
struct ImageColumnBase<C> {
    header: String,
    template: C,
    layout: ColumnLayout,
    default_style: CellStyle,
}

impl<C: ImageCell> ImageColumnBase<C> {
    fn new(mut template: C) -> Self {
        let layout = ColumnLayout::new(ImageLayout::Normal);
        template.attach_to_column(layout.clone());
        Self {
            header: String::new(),
            template,
            layout,
            default_style: image_column_default_style(),
        }
    }

    fn set_template(&mut self, template: Box<dyn GridCell>) -> GridCellResult<()> {
        let expected = self.template.kind();
        let found = template.kind();
        if found != expected {
            return Err(GridCellError::InvalidCellTemplate { expected, found });
        }

        let mut cell = template
            .into_any()
            .downcast::<C>()
            .map_err(|_| GridCellError::InvalidCellTemplate { expected, found })?;
        cell.attach_to_column(self.layout.clone());
        self.template = *cell;

        tracing::debug!(target: targets::COLUMN, kind = %expected, "cell template replaced");
        Ok(())
    }

    fn set_image_layout(&mut self, layout: ImageLayout) -> GridCellResult<()> {
        self.layout.set(column_layout(layout)?);
        tracing::debug!(target: targets::COLUMN, %layout, "column layout changed");
        Ok(())
    }

    fn set_option_set(&mut self, option_set: Arc<OptionSet>) {
        self.template.replace_option_set(option_set);
    }

    /// Validate every field first so a bad config leaves the column untouched.
    fn apply_config(&mut self, config: &ColumnConfig) -> GridCellResult<()> {
        let layout = config.layout()?.map(column_layout).transpose()?;
        let style = config.apply_style(self.default_style.clone())?;

        if let Some(header) = &config.header {
            self.header.clone_from(header);
        }
        if let Some(layout) = layout {
            self.layout.set(layout);
        }
        self.default_style = style;
        Ok(())
    }
}

/// Columns must hold a layout cells can fall back to and paint with.
fn column_layout(layout: ImageLayout) -> GridCellResult<ImageLayout> {
    if layout.is_placeable() {
        Ok(layout)
    } else {
        Err(GridCellError::InvalidLayoutMode {
            mode: layout.to_string(),
        })
    }
}

macro_rules! image_column_accessors {
    ($column:ty, $cell:ty) => {
        impl $column {
            /// Header text.
            pub fn header(&self) -> &str {
                &self.base.header
            }

            /// Set the header text.
            pub fn set_header(&mut self, header: impl Into<String>) {
                self.base.header = header.into();
            }

            /// Set the header text using builder pattern.
            pub fn with_header(mut self, header: impl Into<String>) -> Self {
                self.base.header = header.into();
                self
            }

            /// The options cells of this column map values through.
            pub fn option_set(&self) -> &Arc<OptionSet> {
                self.base.template.option_set()
            }

            /// Replace the options of the template. Cells created afterwards
            /// use the new set.
            pub fn set_option_set(&mut self, option_set: Arc<OptionSet>) {
                self.base.set_option_set(option_set);
            }

            /// The column's image layout.
            pub fn image_layout(&self) -> ImageLayout {
                self.base.layout.get()
            }

            /// Set the image layout used by cells whose own layout is
            /// [`ImageLayout::NotSet`]. Affects existing cells too.
            ///
            /// # Errors
            ///
            /// [`GridCellError::InvalidLayoutMode`] for [`ImageLayout::NotSet`]
            /// and [`ImageLayout::Stretch`].
            pub fn set_image_layout(&mut self, layout: ImageLayout) -> GridCellResult<()> {
                self.base.set_image_layout(layout)
            }

            /// The style the host applies to cells of this column.
            pub fn default_cell_style(&self) -> &CellStyle {
                &self.base.default_style
            }

            /// Replace the default cell style.
            pub fn set_default_cell_style(&mut self, style: CellStyle) {
                self.base.default_style = style;
            }

            /// The template, typed.
            pub fn template(&self) -> &$cell {
                &self.base.template
            }

            /// A new cell cloned from the template and bound to this column's
            /// layout.
            pub fn create_cell(&self) -> $cell {
                self.base.template.clone()
            }

            /// Apply header, layout and style settings.
            ///
            /// Nothing changes if any setting is invalid.
            pub fn apply_config(&mut self, config: &ColumnConfig) -> GridCellResult<()> {
                self.base.apply_config(config)
            }
        }

        impl ColumnTemplate for $column {
            fn required_kind(&self) -> CellKind {
                self.base.template.kind()
            }

            fn cell_template(&self) -> &dyn GridCell {
                &self.base.template
            }

            fn set_cell_template(&mut self, template: Box<dyn GridCell>) -> GridCellResult<()> {
                self.base.set_template(template)
            }
        }
    };
}

/// A column of image cells edited with an image picker.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use horizon_gridcell::prelude::*;
/// use horizon_gridcell_render::{Color, Image};
///
/// let options = OptionSet::new([(OptionKey(1), Image::solid(16, 16, Color::GREEN))]).unwrap();
/// let mut column = ImageOptionColumn::new(Arc::new(options)).with_header("State");
/// column.set_image_layout(ImageLayout::Zoom).unwrap();
///
/// let cell = column.create_cell();
/// assert_eq!(cell.resolved_layout(), ImageLayout::Zoom);
/// ```
#[derive(Debug, Clone)]
pub struct ImageOptionColumn {
    base: ImageColumnBase<ImageOptionCell>,
}

impl ImageOptionColumn {
    /// Create a column whose cells pick from `option_set`.
    pub fn new(option_set: Arc<OptionSet>) -> Self {
        Self {
            base: ImageColumnBase::new(ImageOptionCell::new(option_set)),
        }
    }

    /// Create a column listing every variant of `E`.
    pub fn for_enum<E: ImageEnum>() -> GridCellResult<Self> {
        Ok(Self::new(Arc::new(OptionSet::from_enum::<E>()?)))
    }

    /// Create a column and apply `config`.
    pub fn from_config(option_set: Arc<OptionSet>, config: &ColumnConfig) -> GridCellResult<Self> {
        let mut column = Self::new(option_set);
        column.apply_config(config)?;
        Ok(column)
    }
}

image_column_accessors!(ImageOptionColumn, ImageOptionCell);

/// A display-only column showing one image per enumeration value.
#[derive(Debug, Clone)]
pub struct ImageEnumColumn {
    base: ImageColumnBase<ImageEnumCell>,
    domain: ValueDomain,
}

impl ImageEnumColumn {
    /// Create a column for values of `domain` drawn from `option_set`.
    ///
    /// # Errors
    ///
    /// [`GridCellError::InvalidArgument`] if `domain` is not a non-empty
    /// enumeration.
    pub fn new(domain: ValueDomain, option_set: Arc<OptionSet>) -> GridCellResult<Self> {
        if !domain.is_closed_discrete() {
            return Err(GridCellError::invalid_argument(
                "value_domain",
                format!("value type must be an enumeration, got {domain}"),
            ));
        }

        if let ValueDomain::Enumerated { name, keys } = &domain {
            for key in keys.iter().filter(|key| !option_set.contains(**key)) {
                tracing::debug!(
                    target: targets::COLUMN,
                    domain = %name,
                    %key,
                    "enumeration value has no image"
                );
            }
        }

        Ok(Self {
            base: ImageColumnBase::new(ImageEnumCell::new(option_set)),
            domain,
        })
    }

    /// Create a column for every variant of `E`.
    pub fn for_enum<E: ImageEnum>() -> GridCellResult<Self> {
        Self::new(
            ValueDomain::of_enum::<E>(),
            Arc::new(OptionSet::from_enum::<E>()?),
        )
    }

    /// The type of values this column holds.
    pub fn value_domain(&self) -> &ValueDomain {
        &self.domain
    }
}

image_column_accessors!(ImageEnumColumn, ImageEnumCell);
