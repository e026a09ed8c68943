//! Grid cells.
//!
//! A cell is described by small capability traits rather than one large base
//! type:
//!
//! - [`GridCell`]: identity and the type information a host queries
//! - [`PaintableCell`]: static painting
//! - [`EditableCell`]: preparing the host's editing control when an edit starts
//!
//! Two image cells are provided. [`ImageOptionCell`] edits through an
//! [`ImagePickerEditingControl`](crate::editor::ImagePickerEditingControl);
//! [`ImageEnumCell`] is display only. [`TextCell`] is the grid's plain cell.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use horizon_gridcell_core::logging::targets;
use horizon_gridcell_render::{Image, Surface, fallback_image};
use horizon_gridcell_style::CellStyle;

use crate::editor::{EditingControl, ImagePickerEditingControl};
use crate::error::{GridCellError, GridCellResult};
use crate::host::GridHost;
use crate::layout::{ColumnLayout, ImageLayout};
use crate::option_set::{CellValue, OptionSet};
use crate::renderer::{CellPaintRequest, OptionCellRenderer};

/// The closed set of cell families.
///
/// Columns declare the kind they require and check templates against it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellKind {
    /// A plain text cell.
    Text,
    /// A display-only image cell driven by an enum.
    ImageEnum,
    /// An image cell edited through an image picker.
    ImageOption,
}

impl fmt::Display for CellKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Text => "text cell",
            Self::ImageEnum => "image enum cell",
            Self::ImageOption => "image option cell",
        })
    }
}

/// The editing control a host must create for a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EditorType {
    /// [`ImagePickerEditingControl`].
    ImagePicker,
    /// A plain text box owned by the host.
    TextBox,
}

/// What a cell's formatted value is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormattedValueType {
    Text,
    Image,
}

/// Identity and type information of a cell.
pub trait GridCell: Any + Send + Sync + fmt::Debug {
    /// The cell family.
    fn kind(&self) -> CellKind;

    /// The editing control this cell needs, or `None` if it is read-only.
    fn editor_type(&self) -> Option<EditorType>;

    /// What the cell's formatted value is.
    fn formatted_value_type(&self) -> FormattedValueType;

    /// Borrow as `Any` for downcasting.
    fn as_any(&self) -> &dyn Any;

    /// Convert into `Any` for downcasting by value.
    fn into_any(self: Box<Self>) -> Box<dyn Any>;
}

/// A cell that paints its static appearance.
pub trait PaintableCell: GridCell {
    /// Paint the cell.
    fn paint(
        &self,
        surface: &mut dyn Surface,
        host: &dyn GridHost,
        request: &CellPaintRequest<'_>,
    ) -> GridCellResult<()>;
}

/// A cell that hands its value to an editing control when editing starts.
pub trait EditableCell: GridCell {
    /// Prepare the host-owned `editor` for editing this cell.
    ///
    /// Binds the host and row, injects the cell's options and value, and
    /// leaves the editor ready for the first keystroke.
    fn initialize_editing_control(
        &self,
        host: Arc<dyn GridHost>,
        editor: &mut dyn EditingControl,
        row_index: usize,
        initial_value: &CellValue,
        style: &CellStyle,
    ) -> GridCellResult<()>;
}

/// State shared by the two image cell families.
#[derive(Debug, Clone)]
struct ImageCellBase {
    option_set: Arc<OptionSet>,
    image_layout: ImageLayout,
    column_layout: Option<ColumnLayout>,
}

impl ImageCellBase {
    fn new(option_set: Arc<OptionSet>) -> Self {
        Self {
            option_set,
            image_layout: ImageLayout::NotSet,
            column_layout: None,
        }
    }

    fn resolved_layout(&self) -> ImageLayout {
        if self.image_layout != ImageLayout::NotSet {
            return self.image_layout;
        }
        match self.column_layout.as_ref().map(ColumnLayout::get) {
            Some(layout) if layout != ImageLayout::NotSet => layout,
            _ => ImageLayout::Normal,
        }
    }

    fn formatted_value(&self, value: &CellValue, style: &CellStyle) -> Image {
        if value.is_unset()
            && let Some(null_value) = &style.null_value
        {
            return null_value.clone();
        }
        self.option_set.image_or_fallback(value)
    }

    fn paint(
        &self,
        surface: &mut dyn Surface,
        host: &dyn GridHost,
        request: &CellPaintRequest<'_>,
    ) -> GridCellResult<()> {
        OptionCellRenderer::new(self.resolved_layout()).paint(surface, host, request)
    }
}

/// Cells that image columns can hold.
pub(crate) trait ImageCell: GridCell + Clone {
    /// Resolve a `NotSet` layout through the owning column's layout.
    fn attach_to_column(&mut self, layout: ColumnLayout);

    fn replace_option_set(&mut self, option_set: Arc<OptionSet>);
}

macro_rules! image_cell_accessors {
    ($cell:ty) => {
        impl $cell {
            /// The options this cell maps values through.
            pub fn option_set(&self) -> &Arc<OptionSet> {
                &self.base.option_set
            }

            /// Replace the options.
            pub fn set_option_set(&mut self, option_set: Arc<OptionSet>) {
                self.base.option_set = option_set;
            }

            /// The cell's own layout; [`ImageLayout::NotSet`] defers to the column.
            pub fn image_layout(&self) -> ImageLayout {
                self.base.image_layout
            }

            /// Set the cell's own layout.
            ///
            /// # Errors
            ///
            /// [`GridCellError::InvalidLayoutMode`] for [`ImageLayout::Stretch`],
            /// which cells cannot paint.
            pub fn set_image_layout(&mut self, layout: ImageLayout) -> GridCellResult<()> {
                if layout != ImageLayout::NotSet && !layout.is_placeable() {
                    return Err(GridCellError::InvalidLayoutMode {
                        mode: layout.to_string(),
                    });
                }
                self.base.image_layout = layout;
                Ok(())
            }

            /// Set the cell's own layout using builder pattern.
            pub fn with_image_layout(mut self, layout: ImageLayout) -> GridCellResult<Self> {
                self.set_image_layout(layout)?;
                Ok(self)
            }

            /// The layout used for painting: the cell's own, else the owning
            /// column's, else [`ImageLayout::Normal`].
            pub fn resolved_layout(&self) -> ImageLayout {
                self.base.resolved_layout()
            }

            /// The image shown for `value`.
            ///
            /// Unset values show the style's null value when it has one. Every
            /// other value that does not resolve shows the fallback image.
            pub fn formatted_value(&self, value: &CellValue, style: &CellStyle) -> Image {
                self.base.formatted_value(value, style)
            }

            /// The value shown in a freshly inserted row.
            pub fn default_new_row_value(&self) -> Image {
                fallback_image()
            }
        }

        impl ImageCell for $cell {
            fn attach_to_column(&mut self, layout: ColumnLayout) {
                self.base.column_layout = Some(layout);
            }

            fn replace_option_set(&mut self, option_set: Arc<OptionSet>) {
                self.base.option_set = option_set;
            }
        }

        impl PaintableCell for $cell {
            fn paint(
                &self,
                surface: &mut dyn Surface,
                host: &dyn GridHost,
                request: &CellPaintRequest<'_>,
            ) -> GridCellResult<()> {
                self.base.paint(surface, host, request)
            }
        }
    };
}

/// An image cell whose value is chosen from an option set with a picker.
#[derive(Debug, Clone)]
pub struct ImageOptionCell {
    base: ImageCellBase,
}

impl ImageOptionCell {
    /// Create a cell showing images from `option_set`.
    pub fn new(option_set: Arc<OptionSet>) -> Self {
        Self {
            base: ImageCellBase::new(option_set),
        }
    }
}

image_cell_accessors!(ImageOptionCell);

impl GridCell for ImageOptionCell {
    fn kind(&self) -> CellKind {
        CellKind::ImageOption
    }

    fn editor_type(&self) -> Option<EditorType> {
        Some(EditorType::ImagePicker)
    }

    fn formatted_value_type(&self) -> FormattedValueType {
        FormattedValueType::Image
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }
}

impl EditableCell for ImageOptionCell {
    fn initialize_editing_control(
        &self,
        host: Arc<dyn GridHost>,
        editor: &mut dyn EditingControl,
        row_index: usize,
        initial_value: &CellValue,
        style: &CellStyle,
    ) -> GridCellResult<()> {
        let picker = editor
            .as_any_mut()
            .downcast_mut::<ImagePickerEditingControl>()
            .ok_or_else(|| {
                GridCellError::invalid_argument(
                    "editor",
                    "image option cells are edited with an image picker",
                )
            })?;

        picker.set_host(host)?;
        picker.set_row_index(row_index)?;
        picker.apply_cell_style(style);
        // An open list refuses option set changes.
        picker.set_dropped_down(false);
        let replaced = picker.set_option_set(Arc::clone(&self.base.option_set));
        debug_assert!(replaced, "closed picker accepts a new option set");
        picker.set_formatted_value(*initial_value);
        picker.set_dropped_down(true);

        tracing::debug!(
            target: targets::EDIT,
            row = row_index,
            value = ?initial_value,
            dropped_down = picker.is_dropped_down(),
            "initialized image picker"
        );
        Ok(())
    }
}

/// A display-only image cell for enum-valued columns.
#[derive(Debug, Clone)]
pub struct ImageEnumCell {
    base: ImageCellBase,
}

impl ImageEnumCell {
    /// Create a cell showing images from `option_set`.
    pub fn new(option_set: Arc<OptionSet>) -> Self {
        Self {
            base: ImageCellBase::new(option_set),
        }
    }
}

image_cell_accessors!(ImageEnumCell);

impl GridCell for ImageEnumCell {
    fn kind(&self) -> CellKind {
        CellKind::ImageEnum
    }

    fn editor_type(&self) -> Option<EditorType> {
        None
    }

    fn formatted_value_type(&self) -> FormattedValueType {
        FormattedValueType::Image
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }
}

/// The grid's plain text cell.
#[derive(Debug, Clone, Default)]
pub struct TextCell;

impl GridCell for TextCell {
    fn kind(&self) -> CellKind {
        CellKind::Text
    }

    fn editor_type(&self) -> Option<EditorType> {
        Some(EditorType::TextBox)
    }

    fn formatted_value_type(&self) -> FormattedValueType {
        FormattedValueType::Text
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::option_set::OptionKey;
    use crate::testing::RecordingHost;
    use horizon_gridcell_render::Color;

    fn options() -> Arc<OptionSet> {
        Arc::new(
            OptionSet::new([
                (OptionKey(1), Image::solid(10, 20, Color::RED)),
                (OptionKey(2), Image::solid(30, 10, Color::GREEN)),
            ])
            .unwrap(),
        )
    }

    #[test]
    fn test_cell_type_information() {
        let option = ImageOptionCell::new(options());
        assert_eq!(option.kind(), CellKind::ImageOption);
        assert_eq!(option.editor_type(), Some(EditorType::ImagePicker));
        assert_eq!(option.formatted_value_type(), FormattedValueType::Image);

        let display = ImageEnumCell::new(options());
        assert_eq!(display.editor_type(), None);
        assert_eq!(display.formatted_value_type(), FormattedValueType::Image);

        assert_eq!(TextCell.formatted_value_type(), FormattedValueType::Text);
    }

    #[test]
    fn test_default_new_row_value_is_fallback() {
        assert_eq!(
            ImageOptionCell::new(options()).default_new_row_value(),
            fallback_image()
        );
        assert_eq!(
            ImageEnumCell::new(options()).default_new_row_value(),
            fallback_image()
        );
    }

    #[test]
    fn test_formatted_value() {
        let set = options();
        let cell = ImageOptionCell::new(set.clone());
        let style = CellStyle::new();

        let expected = set.lookup(&CellValue::Key(OptionKey(2))).unwrap();
        assert_eq!(
            &cell.formatted_value(&CellValue::Key(OptionKey(2)), &style),
            expected
        );
        assert_eq!(
            cell.formatted_value(&CellValue::Key(OptionKey(42)), &style),
            fallback_image()
        );
        assert_eq!(cell.formatted_value(&CellValue::Unset, &style), fallback_image());
    }

    #[test]
    fn test_unset_uses_style_null_value() {
        let placeholder = Image::solid(4, 4, Color::GRAY);
        let style = CellStyle::new().with_null_value(placeholder.clone());
        let cell = ImageOptionCell::new(options());

        assert_eq!(cell.formatted_value(&CellValue::Unset, &style), placeholder);
        // Missing keys still show the fallback image.
        assert_eq!(
            cell.formatted_value(&CellValue::Key(OptionKey(9)), &style),
            fallback_image()
        );
    }

    #[test]
    fn test_layout_resolution() {
        let mut cell = ImageOptionCell::new(options());
        assert_eq!(cell.resolved_layout(), ImageLayout::Normal);

        let column = ColumnLayout::new(ImageLayout::Zoom);
        cell.attach_to_column(column.clone());
        assert_eq!(cell.resolved_layout(), ImageLayout::Zoom);

        column.set(ImageLayout::Normal);
        assert_eq!(cell.resolved_layout(), ImageLayout::Normal);

        cell.set_image_layout(ImageLayout::Zoom).unwrap();
        assert_eq!(cell.resolved_layout(), ImageLayout::Zoom);

        assert!(matches!(
            cell.set_image_layout(ImageLayout::Stretch),
            Err(GridCellError::InvalidLayoutMode { .. })
        ));
        assert_eq!(cell.image_layout(), ImageLayout::Zoom);

        cell.set_image_layout(ImageLayout::NotSet).unwrap();
        assert_eq!(cell.resolved_layout(), ImageLayout::Normal);
    }

    #[test]
    fn test_initialize_editing_control() {
        let cell = ImageOptionCell::new(options());
        let host = Arc::new(RecordingHost::new());
        let mut picker = ImagePickerEditingControl::new();

        cell.initialize_editing_control(
            host.clone(),
            &mut picker,
            7,
            &CellValue::Key(OptionKey(2)),
            &CellStyle::new().with_back_color(Color::LIGHT_GRAY),
        )
        .unwrap();

        assert_eq!(picker.formatted_value(), CellValue::Key(OptionKey(2)));
        assert!(picker.is_dropped_down());
        assert!(!picker.value_changed());
        assert_eq!(picker.row_index(), Some(7));
        assert_eq!(picker.back_color(), Color::LIGHT_GRAY);
        assert!(Arc::ptr_eq(picker.option_set(), cell.option_set()));
        // Pre-population never reports the cell as dirty.
        assert!(host.events().is_empty());
    }

    #[test]
    fn test_initialize_replaces_options_of_open_picker() {
        let stale =
            Arc::new(OptionSet::new([(OptionKey(1), Image::solid(4, 4, Color::BLUE))]).unwrap());
        let mut picker = ImagePickerEditingControl::new();
        assert!(picker.set_option_set(stale));
        picker.set_dropped_down(true);
        assert!(picker.is_dropped_down());

        let cell = ImageOptionCell::new(Arc::new(
            OptionSet::new([
                (OptionKey(5), Image::solid(8, 8, Color::RED)),
                (OptionKey(6), Image::solid(8, 8, Color::GREEN)),
            ])
            .unwrap(),
        ));
        cell.initialize_editing_control(
            Arc::new(RecordingHost::new()),
            &mut picker,
            0,
            &CellValue::Key(OptionKey(5)),
            &CellStyle::new(),
        )
        .unwrap();

        assert!(Arc::ptr_eq(picker.option_set(), cell.option_set()));
        assert_eq!(picker.formatted_value(), CellValue::Key(OptionKey(5)));
        assert!(picker.is_dropped_down());
    }

    #[test]
    fn test_initialize_with_missing_key_leaves_selection_unset() {
        let cell = ImageOptionCell::new(options());
        let mut picker = ImagePickerEditingControl::new();

        cell.initialize_editing_control(
            Arc::new(RecordingHost::new()),
            &mut picker,
            0,
            &CellValue::Key(OptionKey(99)),
            &CellStyle::new(),
        )
        .unwrap();

        assert_eq!(picker.formatted_value(), CellValue::Unset);
        assert!(picker.is_dropped_down());
    }

    #[test]
    fn test_paint_uses_resolved_layout() {
        use horizon_gridcell_render::{Rect, RecordingSurface};
        use horizon_gridcell_style::AdvancedBorderStyle;

        let set = options();
        let cell = ImageOptionCell::new(set.clone())
            .with_image_layout(ImageLayout::Zoom)
            .unwrap();
        let style = CellStyle::new();
        let value = CellValue::Key(OptionKey(2));
        let image = cell.formatted_value(&value, &style);

        let request =
            CellPaintRequest::new(Rect::new(0, 0, 40, 40), crate::host::CellAddress::new(0, 0), &style)
                .with_border_style(AdvancedBorderStyle::none())
                .with_value(value, Some(&image));

        let mut surface = RecordingSurface::new(Rect::new(0, 0, 100, 100));
        cell.paint(&mut surface, &RecordingHost::new(), &request).unwrap();

        let (id, dest, _) = surface.image_draws().next().unwrap();
        assert_eq!(id, image.id());
        assert_eq!(dest, Rect::new(0, 13, 40, 13));
    }
}
