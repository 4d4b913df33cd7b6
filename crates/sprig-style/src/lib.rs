//! Style classification for design nodes.
//!
//! Continuous style values from the design document are mapped onto the
//! discrete vocabulary of a utility-class framework. Values that do not fit
//! the vocabulary are kept as inline style overrides.
//!
//! # Architecture
//!
//! 1. **Quantization**: nearest-match lookup of a value against a [`ScaleTable`]
//! 2. **Colors**: normalization to 8-bit channels and exact palette lookup
//! 3. **Classification**: per-node class list plus inline-style remainder
//!
//! # Example
//!
//! ```ignore
//! use sprig_style::StyleClassifier;
//!
//! let classification = StyleClassifier::default().classify(&node);
//! println!("{}", classification.class_name());
//! ```

mod classify;
mod color;
mod palette;
mod scale;
mod value;

pub use classify::{Classification, StyleClassifier, DEFAULT_SIZE_TOLERANCE};
pub use color::{color_to_css, color_to_rgb, palette_lookup, rgb_to_string, PaletteMatch, Rgba};
pub use palette::{palette, palette_name, PALETTE_ENTRIES};
pub use scale::{
    align_items_class, flex_align_keyword, flex_justify_keyword, justify_class, nearest_match,
    text_align_class, text_align_keyword, ScaleTable,
    BORDER_RADIUS_SCALE, BORDER_WIDTH_SCALE, FONT_SIZE_SCALE, FONT_WEIGHT_SCALE, OPACITY_SCALE,
    SPACING_SCALE,
};
pub use value::{StyleMap, StyleValue};
