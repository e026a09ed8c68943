//! Editing controls.
//!
//! The host grid owns one editing control per editor type and reuses it for
//! every edit session. A cell prepares the control in
//! [`EditableCell::initialize_editing_control`](crate::cell::EditableCell::initialize_editing_control);
//! the grid tears it down with [`EditingControl::release`] when the session
//! ends.
//!
//! [`ImagePickerEditingControl`] is a drop-down list of option images. Its
//! selection is always a key of the injected option set or unset.

use std::any::Any;
use std::sync::Arc;

use cursor_icon::CursorIcon;
use horizon_gridcell_core::Signal;
use horizon_gridcell_core::logging::targets;
use horizon_gridcell_render::{Color, Rect, ScopedBrush, Surface, fallback_image};
use horizon_gridcell_style::CellStyle;

use crate::error::{GridCellError, GridCellResult};
use crate::host::GridHost;
use crate::keys::{Key, KeyPress};
use crate::layout::place_top_centered;
use crate::option_set::{CellValue, OptionSet};

/// The stage of editing at which the host asks for a formatted value.
///
/// Hosts pass this through to error reporting; the picker returns the same
/// value for every context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataErrorContext {
    Formatting,
    Display,
    Parsing,
    Commit,
    CurrentCellChange,
    LeaveControl,
}

/// The contract between a host grid and the control it shows while a cell is
/// being edited.
pub trait EditingControl: Any + Send {
    /// The value currently shown by the control.
    fn formatted_value(&self) -> CellValue;

    /// Set the shown value programmatically. Does not mark the control dirty.
    fn set_formatted_value(&mut self, value: CellValue);

    /// The value to hand back to the grid at the given stage.
    fn get_formatted_value(&self, context: DataErrorContext) -> CellValue;

    /// Bind the control to its host for one edit session.
    ///
    /// # Errors
    ///
    /// [`GridCellError::InvalidEditTransition`] if already bound.
    fn set_host(&mut self, host: Arc<dyn GridHost>) -> GridCellResult<()>;

    /// Record the row being edited.
    ///
    /// # Errors
    ///
    /// [`GridCellError::InvalidEditTransition`] if the row was already set
    /// in this session.
    fn set_row_index(&mut self, row_index: usize) -> GridCellResult<()>;

    /// End the session: unbind the host and row, close the control.
    fn release(&mut self);

    /// The bound host.
    fn host(&self) -> Option<&Arc<dyn GridHost>>;

    /// The row being edited.
    fn row_index(&self) -> Option<usize>;

    /// Whether the user changed the value in this session.
    fn value_changed(&self) -> bool;

    /// Override the dirty flag.
    fn set_value_changed(&mut self, changed: bool);

    /// Whether the grid must re-layout the control when its value changes.
    fn reposition_on_value_change(&self) -> bool {
        false
    }

    /// The cursor shown over the editing panel.
    fn editing_panel_cursor(&self) -> CursorIcon {
        CursorIcon::Default
    }

    /// Take colors from the cell's style.
    fn apply_cell_style(&mut self, style: &CellStyle);

    /// Whether the control handles `key` itself instead of the grid.
    fn wants_input_key(&self, press: KeyPress, host_wants: bool) -> bool {
        press.key.is_navigation() || !host_wants
    }

    /// Prepare the control right before it is shown.
    fn prepare_for_edit(&mut self, _select_all: bool) {}

    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;
}

static_assertions::assert_obj_safe!(EditingControl);

/// Draw state of one list row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RowDrawState {
    /// The row is the highlighted one.
    pub selected: bool,
}

impl RowDrawState {
    /// Sets whether the row is selected.
    pub fn with_selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }
}

/// Rows shown at once in the drop-down list.
const DEFAULT_MAX_VISIBLE_ITEMS: usize = 8;

/// A drop-down picker listing the images of an option set.
///
/// # Signals
///
/// - `selected_value_changed(CellValue)`: the selection changed, either by
///   the user or programmatically
/// - `selection_committed(CellValue)`: the user picked a row and the grid was
///   asked to end the edit
pub struct ImagePickerEditingControl {
    option_set: Arc<OptionSet>,
    /// Index of the selected option.
    selected: Option<usize>,
    /// Index of the row under the keyboard cursor while the list is open.
    highlighted: Option<usize>,
    dropped_down: bool,
    value_changed: bool,
    host: Option<Arc<dyn GridHost>>,
    row_index: Option<usize>,
    back_color: Color,
    fore_color: Color,
    max_visible_items: usize,

    /// Emitted when the selection changes.
    pub selected_value_changed: Signal<CellValue>,
    /// Emitted after the user commits a selection.
    pub selection_committed: Signal<CellValue>,
}

static_assertions::assert_impl_all!(ImagePickerEditingControl: Send);

impl std::fmt::Debug for ImagePickerEditingControl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImagePickerEditingControl")
            .field("options", &self.option_set.len())
            .field("selected", &self.selected)
            .field("highlighted", &self.highlighted)
            .field("dropped_down", &self.dropped_down)
            .field("value_changed", &self.value_changed)
            .field("bound", &self.host.is_some())
            .field("row_index", &self.row_index)
            .finish()
    }
}

impl Default for ImagePickerEditingControl {
    fn default() -> Self {
        Self::new()
    }
}

impl ImagePickerEditingControl {
    /// Create a closed picker with no options.
    pub fn new() -> Self {
        Self {
            option_set: Arc::new(OptionSet::empty()),
            selected: None,
            highlighted: None,
            dropped_down: false,
            value_changed: false,
            host: None,
            row_index: None,
            back_color: Color::WINDOW,
            fore_color: Color::WINDOW_TEXT,
            max_visible_items: DEFAULT_MAX_VISIBLE_ITEMS,
            selected_value_changed: Signal::new(),
            selection_committed: Signal::new(),
        }
    }

    /// The options listed by the picker.
    pub fn option_set(&self) -> &Arc<OptionSet> {
        &self.option_set
    }

    /// Replace the listed options.
    ///
    /// Ignored while the list is open; returns whether the set was replaced.
    /// A selection whose key is missing from the new set becomes unset.
    pub fn set_option_set(&mut self, option_set: Arc<OptionSet>) -> bool {
        if self.dropped_down {
            tracing::debug!(target: targets::EDIT, "option set change ignored while dropped down");
            return false;
        }
        if Arc::ptr_eq(&self.option_set, &option_set) {
            return true;
        }

        let previous = self.selected_value();
        self.option_set = option_set;
        self.selected = previous.key().and_then(|key| self.option_set.position(key));
        self.highlighted = None;

        let current = self.selected_value();
        if current != previous {
            self.selected_value_changed.emit(current);
        }
        true
    }

    /// The selected option's key, or unset.
    pub fn selected_value(&self) -> CellValue {
        self.selected
            .and_then(|index| self.option_set.key_at(index))
            .into()
    }

    /// Select by value without marking the control dirty.
    ///
    /// Values not present in the option set clear the selection.
    pub fn set_selected_value(&mut self, value: CellValue) {
        let index = value.key().and_then(|key| self.option_set.position(key));
        if index == self.selected {
            return;
        }
        self.selected = index;
        tracing::trace!(target: targets::EDIT, ?value, ?index, "selection set");
        self.selected_value_changed.emit(self.selected_value());
    }

    /// Index of the selected option.
    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    /// Index of the highlighted row in the open list.
    pub fn highlighted_index(&self) -> Option<usize> {
        self.highlighted
    }

    /// Whether the list is open.
    pub fn is_dropped_down(&self) -> bool {
        self.dropped_down
    }

    /// Open or close the list.
    ///
    /// A picker without options never opens. Opening highlights the selected
    /// row, or the first row when nothing is selected.
    pub fn set_dropped_down(&mut self, dropped_down: bool) {
        if dropped_down == self.dropped_down {
            return;
        }
        if dropped_down {
            if self.option_set.is_empty() {
                tracing::debug!(target: targets::EDIT, "not opening picker without options");
                return;
            }
            self.highlighted = Some(self.selected.unwrap_or(0));
        } else {
            self.highlighted = None;
        }
        self.dropped_down = dropped_down;
        tracing::trace!(target: targets::EDIT, dropped_down, "picker list toggled");
    }

    /// Select the option at `index` as a user action.
    ///
    /// A change marks the control dirty and tells the host the current cell
    /// is dirty before `selected_value_changed` is emitted. Out of range
    /// indices are ignored.
    pub fn select_index(&mut self, index: usize) {
        if index >= self.option_set.len() {
            return;
        }
        if self.dropped_down {
            self.highlighted = Some(index);
        }
        if self.selected == Some(index) {
            return;
        }

        self.selected = Some(index);
        self.value_changed = true;
        if let Some(host) = &self.host {
            host.notify_current_cell_dirty(true);
        }
        tracing::trace!(target: targets::EDIT, index, "selection changed by user");
        self.selected_value_changed.emit(self.selected_value());
    }

    /// Commit the user's pick.
    ///
    /// Selects `index` (if any), closes the list and asks the host to end the
    /// edit. `selection_committed` is emitted after the host returns.
    pub fn commit_selection(&mut self, index: Option<usize>) {
        if let Some(index) = index {
            self.select_index(index);
        }
        self.set_dropped_down(false);

        if let Some(host) = self.host.clone() {
            let ended = host.end_edit();
            tracing::debug!(target: targets::EDIT, ended, "selection committed");
        }
        self.selection_committed.emit(self.selected_value());
    }

    /// Handle a key press. Returns `true` if the key was consumed.
    pub fn handle_key(&mut self, press: KeyPress) -> bool {
        let alt = press.modifiers.alt;
        match press.key {
            Key::F4 => {
                self.set_dropped_down(!self.dropped_down);
                true
            }
            Key::ArrowDown if alt => {
                self.set_dropped_down(true);
                true
            }
            Key::ArrowUp if alt => {
                self.set_dropped_down(false);
                true
            }
            Key::Space if !self.dropped_down => {
                self.set_dropped_down(true);
                true
            }
            Key::Escape if self.dropped_down => {
                self.set_dropped_down(false);
                true
            }
            Key::Enter if self.dropped_down => {
                self.commit_selection(self.highlighted);
                true
            }
            key if key.is_navigation() => {
                if let Some(index) = self.navigate(key) {
                    self.select_index(index);
                }
                true
            }
            _ => false,
        }
    }

    /// Target row of a navigation key.
    fn navigate(&self, key: Key) -> Option<usize> {
        let count = self.option_set.len();
        if count == 0 {
            return None;
        }
        let last = count - 1;
        let current = if self.dropped_down {
            self.highlighted.or(self.selected)
        } else {
            self.selected
        };
        let page = self.max_visible_items.max(1);

        let target = match (key, current) {
            (Key::Home, _) => 0,
            (Key::End, _) => last,
            (Key::ArrowUp | Key::ArrowLeft | Key::PageUp | Key::ArrowDown | Key::ArrowRight
                | Key::PageDown, None) => 0,
            (Key::ArrowUp | Key::ArrowLeft, Some(i)) => i.saturating_sub(1),
            (Key::ArrowDown | Key::ArrowRight, Some(i)) => (i + 1).min(last),
            (Key::PageUp, Some(i)) => i.saturating_sub(page - 1),
            (Key::PageDown, Some(i)) => (i + page - 1).min(last),
            _ => return None,
        };
        Some(target)
    }

    /// Maximum number of rows shown at once in the list.
    pub fn max_visible_items(&self) -> usize {
        self.max_visible_items
    }

    /// Set the maximum number of rows shown at once (at least one).
    pub fn set_max_visible_items(&mut self, count: usize) {
        self.max_visible_items = count.max(1);
    }

    /// Background color applied from the cell style.
    pub fn back_color(&self) -> Color {
        self.back_color
    }

    /// Foreground color applied from the cell style.
    pub fn fore_color(&self) -> Color {
        self.fore_color
    }

    /// Height of every list row: the tallest option image.
    pub fn item_height(&self) -> i32 {
        match self.option_set.max_image_height() {
            0 => fallback_image().size().height,
            height => height,
        }
    }

    /// Bounds of row `index` in a list whose top-left corner is `list.origin`.
    pub fn row_bounds(&self, list: Rect, index: usize) -> Rect {
        let height = self.item_height();
        let offset = i32::try_from(index).unwrap_or(i32::MAX).saturating_mul(height);
        Rect::new(list.left(), list.top().saturating_add(offset), list.width(), height)
    }

    /// Paint one row of the open list.
    ///
    /// `None` is the host's "no item" row and paints nothing. Rows whose
    /// image cannot be resolved show the fallback image.
    pub fn draw_row(
        &self,
        surface: &mut dyn Surface,
        index: Option<usize>,
        bounds: Rect,
        state: RowDrawState,
    ) {
        let Some(index) = index else {
            tracing::trace!(target: targets::PAINT, "skipping list row without index");
            return;
        };

        let back_color = if state.selected {
            Color::HIGHLIGHT
        } else {
            self.back_color
        };

        let mut brush = ScopedBrush::acquire(surface, back_color);
        let brush_id = brush.id();
        brush.surface().fill_rect(bounds, brush_id);

        let image = self.option_set.image_at_or_fallback(index);
        let dest = place_top_centered(bounds, image.size());
        brush.surface().draw_image(&image, dest);

        if state.selected {
            brush.surface().draw_focus_rect(bounds, back_color);
        }
    }

    /// Paint the visible rows of the open list into `list`.
    pub fn paint_list(&self, surface: &mut dyn Surface, list: Rect) {
        if !self.dropped_down {
            return;
        }
        let first = self
            .highlighted
            .map_or(0, |h| (h + 1).saturating_sub(self.max_visible_items));
        let visible = (first..self.option_set.len()).take(self.max_visible_items);

        for (row, index) in visible.enumerate() {
            let state = RowDrawState::default().with_selected(self.highlighted == Some(index));
            self.draw_row(surface, Some(index), self.row_bounds(list, row), state);
        }
    }

    fn not_while_bound(&self, action: &'static str) -> GridCellResult<()> {
        if self.host.is_some() {
            return Err(GridCellError::invalid_transition(action, "bound to a host"));
        }
        Ok(())
    }
}

impl EditingControl for ImagePickerEditingControl {
    fn formatted_value(&self) -> CellValue {
        self.selected_value()
    }

    fn set_formatted_value(&mut self, value: CellValue) {
        self.set_selected_value(value);
    }

    fn get_formatted_value(&self, context: DataErrorContext) -> CellValue {
        tracing::trace!(target: targets::EDIT, ?context, "formatted value requested");
        self.selected_value()
    }

    fn set_host(&mut self, host: Arc<dyn GridHost>) -> GridCellResult<()> {
        self.not_while_bound("bind host")?;
        self.host = Some(host);
        self.value_changed = false;
        Ok(())
    }

    fn set_row_index(&mut self, row_index: usize) -> GridCellResult<()> {
        if self.row_index.is_some() {
            return Err(GridCellError::invalid_transition(
                "set row index",
                "a row is already being edited",
            ));
        }
        self.row_index = Some(row_index);
        Ok(())
    }

    fn release(&mut self) {
        self.set_dropped_down(false);
        self.host = None;
        self.row_index = None;
        self.value_changed = false;
    }

    fn host(&self) -> Option<&Arc<dyn GridHost>> {
        self.host.as_ref()
    }

    fn row_index(&self) -> Option<usize> {
        self.row_index
    }

    fn value_changed(&self) -> bool {
        self.value_changed
    }

    fn set_value_changed(&mut self, changed: bool) {
        self.value_changed = changed;
    }

    fn apply_cell_style(&mut self, style: &CellStyle) {
        self.fore_color = style.fore_color;
        self.back_color = style.back_color;
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys::KeyboardModifiers;
    use crate::option_set::OptionKey;
    use crate::testing::{HostEvent, RecordingHost};
    use horizon_gridcell_render::{DrawCommand, Image, RecordingSurface};
    use parking_lot::Mutex;

    fn options() -> Arc<OptionSet> {
        Arc::new(
            OptionSet::new([
                (OptionKey(1), Image::solid(10, 20, Color::RED)),
                (OptionKey(2), Image::solid(16, 16, Color::GREEN)),
                (OptionKey(3), Image::solid(0, 0, Color::BLUE)),
                (OptionKey(4), Image::solid(8, 8, Color::GRAY)),
            ])
            .unwrap(),
        )
    }

    fn bound_picker() -> (ImagePickerEditingControl, Arc<RecordingHost>) {
        let host = Arc::new(RecordingHost::new());
        let mut picker = ImagePickerEditingControl::new();
        picker.set_option_set(options());
        picker.set_host(host.clone()).unwrap();
        picker.set_row_index(0).unwrap();
        (picker, host)
    }

    fn record(signal: &Signal<CellValue>) -> Arc<Mutex<Vec<CellValue>>> {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        signal.connect(move |value| sink.lock().push(*value));
        seen
    }

    #[test]
    fn test_programmatic_set_is_not_dirty() {
        let (mut picker, host) = bound_picker();
        let changes = record(&picker.selected_value_changed);

        picker.set_formatted_value(CellValue::Key(OptionKey(2)));

        assert_eq!(picker.formatted_value(), CellValue::Key(OptionKey(2)));
        assert!(!picker.value_changed());
        assert!(host.events().is_empty());
        assert_eq!(*changes.lock(), vec![CellValue::Key(OptionKey(2))]);

        // Same value again: no signal.
        picker.set_formatted_value(CellValue::Key(OptionKey(2)));
        assert_eq!(changes.lock().len(), 1);
    }

    #[test]
    fn test_unknown_value_clears_selection() {
        let (mut picker, _host) = bound_picker();
        picker.set_formatted_value(CellValue::Key(OptionKey(2)));
        picker.set_formatted_value(CellValue::Key(OptionKey(42)));
        assert_eq!(picker.formatted_value(), CellValue::Unset);
        assert_eq!(picker.selected_index(), None);
    }

    #[test]
    fn test_user_selection_marks_dirty() {
        let (mut picker, host) = bound_picker();
        picker.select_index(1);
        assert!(picker.value_changed());
        assert_eq!(host.events(), vec![HostEvent::Dirty(true)]);

        // Re-selecting the same row is not a change.
        picker.select_index(1);
        assert_eq!(host.events(), vec![HostEvent::Dirty(true)]);

        picker.select_index(99);
        assert_eq!(picker.selected_index(), Some(1));
    }

    #[test]
    fn test_commit_ends_edit_before_signal() {
        let (mut picker, host) = bound_picker();
        picker.set_dropped_down(true);

        let host_at_signal = Arc::new(Mutex::new(Vec::new()));
        let sink = host_at_signal.clone();
        let observed = host.clone();
        picker
            .selection_committed
            .connect(move |_| *sink.lock() = observed.events());

        picker.commit_selection(Some(3));

        assert_eq!(
            *host_at_signal.lock(),
            vec![HostEvent::Dirty(true), HostEvent::EndEdit]
        );
        assert!(!picker.is_dropped_down());
        assert_eq!(picker.formatted_value(), CellValue::Key(OptionKey(4)));
    }

    #[test]
    fn test_option_set_swap_ignored_while_open() {
        let (mut picker, _host) = bound_picker();
        picker.set_dropped_down(true);
        let replacement = Arc::new(OptionSet::empty());

        assert!(!picker.set_option_set(replacement.clone()));
        assert_eq!(picker.option_set().len(), 4);

        picker.set_dropped_down(false);
        assert!(picker.set_option_set(replacement));
        assert!(picker.option_set().is_empty());
    }

    #[test]
    fn test_option_set_swap_revalidates_selection() {
        let (mut picker, _host) = bound_picker();
        picker.set_formatted_value(CellValue::Key(OptionKey(4)));

        let reordered = Arc::new(
            OptionSet::new([
                (OptionKey(4), Image::solid(4, 4, Color::RED)),
                (OptionKey(1), Image::solid(4, 4, Color::RED)),
            ])
            .unwrap(),
        );
        picker.set_option_set(reordered);
        assert_eq!(picker.selected_index(), Some(0));
        assert_eq!(picker.formatted_value(), CellValue::Key(OptionKey(4)));

        picker.set_option_set(Arc::new(OptionSet::empty()));
        assert_eq!(picker.formatted_value(), CellValue::Unset);
    }

    #[test]
    fn test_empty_picker_does_not_open() {
        let mut picker = ImagePickerEditingControl::new();
        picker.set_dropped_down(true);
        assert!(!picker.is_dropped_down());
    }

    #[test]
    fn test_opening_highlights_selection() {
        let (mut picker, _host) = bound_picker();
        picker.set_dropped_down(true);
        assert_eq!(picker.highlighted_index(), Some(0));
        picker.set_dropped_down(false);

        picker.set_formatted_value(CellValue::Key(OptionKey(2)));
        picker.set_dropped_down(true);
        assert_eq!(picker.highlighted_index(), Some(1));
    }

    #[test]
    fn test_binding_once_per_session() {
        let (mut picker, _host) = bound_picker();
        let err = picker.set_host(Arc::new(RecordingHost::new())).unwrap_err();
        assert!(matches!(err, GridCellError::InvalidEditTransition { .. }));
        assert!(picker.set_row_index(3).is_err());

        picker.release();
        assert!(picker.host().is_none());
        assert_eq!(picker.row_index(), None);
        picker.set_host(Arc::new(RecordingHost::new())).unwrap();
        picker.set_row_index(3).unwrap();
    }

    #[test]
    fn test_binding_resets_dirty() {
        let (mut picker, _host) = bound_picker();
        picker.select_index(2);
        picker.release();
        picker.set_value_changed(true);
        picker.set_host(Arc::new(RecordingHost::new())).unwrap();
        assert!(!picker.value_changed());
    }

    #[test]
    fn test_wants_input_key() {
        let picker = ImagePickerEditingControl::new();
        for key in [Key::ArrowLeft, Key::ArrowUp, Key::PageDown, Key::End] {
            assert!(picker.wants_input_key(KeyPress::new(key), true));
            assert!(picker.wants_input_key(KeyPress::new(key), false));
        }
        assert!(!picker.wants_input_key(KeyPress::new(Key::Tab), true));
        assert!(picker.wants_input_key(KeyPress::new(Key::Tab), false));
        assert!(!picker.wants_input_key(KeyPress::new(Key::Enter), true));
    }

    #[test]
    fn test_fixed_capabilities() {
        let mut picker = ImagePickerEditingControl::new();
        assert!(!picker.reposition_on_value_change());
        assert_eq!(picker.editing_panel_cursor(), CursorIcon::Default);
        picker.prepare_for_edit(true);
        assert_eq!(
            picker.get_formatted_value(DataErrorContext::Commit),
            picker.formatted_value()
        );
    }

    #[test]
    fn test_apply_cell_style() {
        let mut picker = ImagePickerEditingControl::new();
        let style = CellStyle::new()
            .with_back_color(Color::DARK_GRAY)
            .with_fore_color(Color::WHITE);
        picker.apply_cell_style(&style);
        assert_eq!(picker.back_color(), Color::DARK_GRAY);
        assert_eq!(picker.fore_color(), Color::WHITE);
    }

    #[test]
    fn test_keyboard_navigation() {
        let (mut picker, host) = bound_picker();
        picker.set_max_visible_items(2);

        assert!(picker.handle_key(KeyPress::with_modifiers(
            Key::ArrowDown,
            KeyboardModifiers::ALT
        )));
        assert!(picker.is_dropped_down());

        assert!(picker.handle_key(Key::ArrowDown.into()));
        assert_eq!(picker.selected_index(), Some(1));
        assert_eq!(picker.highlighted_index(), Some(1));

        picker.handle_key(Key::End.into());
        assert_eq!(picker.selected_index(), Some(3));
        picker.handle_key(Key::PageUp.into());
        assert_eq!(picker.selected_index(), Some(2));
        picker.handle_key(Key::Home.into());
        assert_eq!(picker.selected_index(), Some(0));
        picker.handle_key(Key::ArrowUp.into());
        assert_eq!(picker.selected_index(), Some(0));

        assert!(picker.handle_key(Key::Escape.into()));
        assert!(!picker.is_dropped_down());
        assert!(!host.events().contains(&HostEvent::EndEdit));

        assert!(!picker.handle_key(Key::Character('x').into()));
    }

    #[test]
    fn test_enter_commits_highlighted_row() {
        let (mut picker, host) = bound_picker();
        picker.handle_key(Key::F4.into());
        picker.handle_key(Key::ArrowDown.into());
        assert!(picker.handle_key(Key::Enter.into()));

        assert_eq!(picker.formatted_value(), CellValue::Key(OptionKey(2)));
        assert_eq!(
            host.events(),
            vec![HostEvent::Dirty(true), HostEvent::EndEdit]
        );
    }

    #[test]
    fn test_item_height() {
        let (picker, _host) = bound_picker();
        assert_eq!(picker.item_height(), 20);
        assert_eq!(
            ImagePickerEditingControl::new().item_height(),
            fallback_image().size().height
        );
        assert_eq!(
            picker.row_bounds(Rect::new(5, 100, 50, 200), 2),
            Rect::new(5, 140, 50, 20)
        );
    }

    #[test]
    fn test_draw_row_centers_image_at_top() {
        let (picker, _host) = bound_picker();
        let mut surface = RecordingSurface::new(Rect::new(0, 0, 200, 200));
        let bounds = Rect::new(0, 20, 100, 20);

        picker.draw_row(&mut surface, Some(1), bounds, RowDrawState::default());

        let (_, dest, _) = surface.image_draws().next().unwrap();
        assert_eq!(dest, Rect::new(42, 20, 16, 16));
        assert!(
            !surface
                .commands()
                .iter()
                .any(|c| matches!(c, DrawCommand::FocusRect { .. }))
        );
        assert_eq!(surface.fills().next(), Some((bounds, Color::WINDOW)));
        assert_eq!(surface.live_brushes(), 0);
    }

    #[test]
    fn test_draw_row_falls_back_and_focuses_selected() {
        let (picker, _host) = bound_picker();
        let mut surface = RecordingSurface::new(Rect::new(0, 0, 200, 200));
        let bounds = Rect::new(0, 0, 100, 20);

        // Row 2 has an empty image.
        picker.draw_row(
            &mut surface,
            Some(2),
            bounds,
            RowDrawState::default().with_selected(true),
        );

        let fallback = fallback_image();
        let (id, _, _) = surface.image_draws().next().unwrap();
        assert_eq!(id, fallback.id());
        assert_eq!(surface.fills().next(), Some((bounds, Color::HIGHLIGHT)));
        assert!(matches!(
            surface.commands().last(),
            Some(DrawCommand::FocusRect { .. })
        ));
    }

    #[test]
    fn test_draw_row_without_index_paints_nothing() {
        let (picker, _host) = bound_picker();
        let mut surface = RecordingSurface::new(Rect::new(0, 0, 200, 200));
        picker.draw_row(
            &mut surface,
            None,
            Rect::new(0, 0, 10, 10),
            RowDrawState::default(),
        );
        assert!(surface.commands().is_empty());
    }

    #[test]
    fn test_paint_list() {
        let (mut picker, _host) = bound_picker();
        let mut surface = RecordingSurface::new(Rect::new(0, 0, 200, 200));
        picker.paint_list(&mut surface, Rect::new(0, 0, 100, 100));
        assert!(surface.commands().is_empty());

        picker.set_dropped_down(true);
        picker.paint_list(&mut surface, Rect::new(0, 0, 100, 100));
        assert_eq!(surface.image_draws().count(), 4);
    }
}
