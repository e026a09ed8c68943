//! Option sets: the ordered key-to-image mapping shared by cells and pickers.
//!
//! An [`OptionSet`] is built once by the column configuration and shared
//! read-only through an `Arc` by the column, every cell created from it and
//! the picker editor while it is open. Order is display order in the picker.
//!
//! Lookups report *why* no image was found through [`LookupFailure`]. Those
//! failures never leave this crate as errors: the `*_or_fallback` methods
//! substitute the process-wide fallback image and log the reason.
//!
//! # Example
//!
//! ```
//! use horizon_gridcell::prelude::*;
//! use horizon_gridcell_render::{Color, Image};
//!
//! let set = OptionSet::new([
//!     (OptionKey(1), Image::solid(16, 16, Color::GREEN)),
//!     (OptionKey(2), Image::solid(16, 16, Color::RED)),
//! ])
//! .unwrap();
//!
//! assert_eq!(set.position(OptionKey(2)), Some(1));
//! assert!(set.lookup(&CellValue::Key(OptionKey(3))).is_err());
//! ```

use std::fmt;

use horizon_gridcell_core::logging::targets;
use horizon_gridcell_render::{Image, fallback_image};

use crate::error::{GridCellError, GridCellResult};

/// A key identifying one option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OptionKey(pub i64);

impl From<i64> for OptionKey {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl fmt::Display for OptionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The raw value stored in an option cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CellValue {
    /// No option chosen.
    #[default]
    Unset,
    /// An option key. The key may or may not exist in the option set.
    Key(OptionKey),
}

impl CellValue {
    /// The key, if one is set.
    pub fn key(&self) -> Option<OptionKey> {
        match self {
            Self::Unset => None,
            Self::Key(key) => Some(*key),
        }
    }

    /// Check if no option is chosen.
    pub fn is_unset(&self) -> bool {
        matches!(self, Self::Unset)
    }
}

impl From<OptionKey> for CellValue {
    fn from(key: OptionKey) -> Self {
        Self::Key(key)
    }
}

impl From<Option<OptionKey>> for CellValue {
    fn from(key: Option<OptionKey>) -> Self {
        key.map_or(Self::Unset, Self::Key)
    }
}

/// Why a value or row index did not resolve to a drawable image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum LookupFailure {
    /// The value is unset.
    #[error("value is unset")]
    Unset,
    /// The key is not part of the option set.
    #[error("key {0} is not in the option set")]
    MissingKey(OptionKey),
    /// The row index is past the end of the option set.
    #[error("row {index} is out of range for {len} options")]
    IndexOutOfRange { index: usize, len: usize },
    /// The option exists but its image has no pixels.
    #[error("image for option at row {0} is empty")]
    EmptyImage(usize),
}

/// A Rust enum whose variants each map to an option key and an image.
///
/// # Example
///
/// ```
/// use horizon_gridcell::prelude::*;
/// use horizon_gridcell_render::{Color, Image};
///
/// #[derive(Clone, Copy)]
/// enum Status {
///     Ok,
///     Failed,
/// }
///
/// impl ImageEnum for Status {
///     fn variants() -> &'static [Self] {
///         &[Status::Ok, Status::Failed]
///     }
///
///     fn key(self) -> OptionKey {
///         OptionKey(self as i64)
///     }
///
///     fn image(self) -> Image {
///         match self {
///             Status::Ok => Image::solid(8, 8, Color::GREEN),
///             Status::Failed => Image::solid(8, 8, Color::RED),
///         }
///     }
/// }
///
/// let set = OptionSet::from_enum::<Status>().unwrap();
/// assert_eq!(set.len(), 2);
/// assert_eq!(ValueDomain::of_enum::<Status>().is_closed_discrete(), true);
/// ```
pub trait ImageEnum: Copy + 'static {
    /// All variants, in display order.
    fn variants() -> &'static [Self];

    /// The key stored in cells for this variant.
    fn key(self) -> OptionKey;

    /// The image shown for this variant.
    fn image(self) -> Image;

    /// A name for diagnostics.
    fn type_name() -> &'static str {
        std::any::type_name::<Self>()
    }
}

/// The type of values a column holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValueDomain {
    /// A closed set of discrete keys, such as the variants of an enum.
    Enumerated { name: String, keys: Vec<OptionKey> },
    /// Any integer.
    Integer,
    /// Any floating point number.
    Float,
    /// Free text.
    Text,
}

impl ValueDomain {
    /// The domain of an [`ImageEnum`] type.
    pub fn of_enum<E: ImageEnum>() -> Self {
        Self::Enumerated {
            name: E::type_name().to_string(),
            keys: E::variants().iter().map(|v| v.key()).collect(),
        }
    }

    /// Check if the domain is a non-empty closed set of discrete values.
    pub fn is_closed_discrete(&self) -> bool {
        matches!(self, Self::Enumerated { keys, .. } if !keys.is_empty())
    }
}

impl fmt::Display for ValueDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Enumerated { name, keys } => write!(f, "enum {name} ({} values)", keys.len()),
            Self::Integer => f.write_str("integer"),
            Self::Float => f.write_str("float"),
            Self::Text => f.write_str("text"),
        }
    }
}

/// An ordered, duplicate-free sequence of `(key, image)` options.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OptionSet {
    entries: Vec<(OptionKey, Image)>,
}

impl OptionSet {
    /// Build an option set from `(key, image)` pairs in display order.
    ///
    /// # Errors
    ///
    /// Returns [`GridCellError::InvalidArgument`] if a key appears twice.
    pub fn new(entries: impl IntoIterator<Item = (OptionKey, Image)>) -> GridCellResult<Self> {
        let mut set = Self::default();
        for (key, image) in entries {
            if set.contains(key) {
                return Err(GridCellError::invalid_argument(
                    "option_set",
                    format!("duplicate option key {key}"),
                ));
            }
            set.entries.push((key, image));
        }
        Ok(set)
    }

    /// An option set with no options.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build an option set from every variant of an [`ImageEnum`].
    pub fn from_enum<E: ImageEnum>() -> GridCellResult<Self> {
        Self::new(E::variants().iter().map(|&v| (v.key(), v.image())))
    }

    /// Number of options.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if there are no options.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(key, image)` pairs in display order.
    pub fn iter(&self) -> impl Iterator<Item = (OptionKey, &Image)> + '_ {
        self.entries.iter().map(|(key, image)| (*key, image))
    }

    /// Iterate over the keys in display order.
    pub fn keys(&self) -> impl Iterator<Item = OptionKey> + '_ {
        self.entries.iter().map(|(key, _)| *key)
    }

    /// Row index of a key.
    pub fn position(&self, key: OptionKey) -> Option<usize> {
        self.entries.iter().position(|(k, _)| *k == key)
    }

    /// Check if a key is part of the set.
    pub fn contains(&self, key: OptionKey) -> bool {
        self.position(key).is_some()
    }

    /// Key at a row index.
    pub fn key_at(&self, index: usize) -> Option<OptionKey> {
        self.entries.get(index).map(|(key, _)| *key)
    }

    /// Resolve a cell value to its image.
    pub fn lookup(&self, value: &CellValue) -> Result<&Image, LookupFailure> {
        let key = value.key().ok_or(LookupFailure::Unset)?;
        let index = self.position(key).ok_or(LookupFailure::MissingKey(key))?;
        self.image_at(index)
    }

    /// Resolve a row index to its image.
    pub fn image_at(&self, index: usize) -> Result<&Image, LookupFailure> {
        let (_, image) = self
            .entries
            .get(index)
            .ok_or(LookupFailure::IndexOutOfRange {
                index,
                len: self.len(),
            })?;
        if image.is_empty() {
            return Err(LookupFailure::EmptyImage(index));
        }
        Ok(image)
    }

    /// Resolve a cell value, substituting the fallback image on failure.
    pub fn image_or_fallback(&self, value: &CellValue) -> Image {
        self.lookup(value)
            .cloned()
            .unwrap_or_else(substitute_fallback)
    }

    /// Resolve a row index, substituting the fallback image on failure.
    pub fn image_at_or_fallback(&self, index: usize) -> Image {
        self.image_at(index)
            .cloned()
            .unwrap_or_else(substitute_fallback)
    }

    /// Height of the tallest option image, in pixels.
    pub fn max_image_height(&self) -> i32 {
        self.entries
            .iter()
            .map(|(_, image)| image.size().height)
            .max()
            .unwrap_or(0)
    }
}

fn substitute_fallback(reason: LookupFailure) -> Image {
    if reason == LookupFailure::Unset {
        tracing::trace!(target: targets::PAINT, "unset value, using fallback image");
    } else {
        tracing::debug!(target: targets::PAINT, %reason, "image lookup failed, using fallback image");
    }
    fallback_image()
}
