//! Numeric scales and keyword tables of the utility-class vocabulary.

use sprig_core::{AxisAlign, TextAlign};

/// Return the member of `scale` closest to `value`.
///
/// Ties go to the lower candidate, independent of the order of `scale`.
/// Returns `None` only for an empty scale.
pub fn nearest_match(value: f64, scale: &[f64]) -> Option<f64> {
    scale.iter().copied().fold(None, |best, candidate| match best {
        None => Some(candidate),
        Some(current) => {
            let d_current = (value - current).abs();
            let d_candidate = (value - candidate).abs();
            if d_candidate < d_current || (d_candidate == d_current && candidate < current) {
                Some(candidate)
            } else {
                Some(current)
            }
        }
    })
}

/// An immutable numeric-key to token table.
#[derive(Debug, Clone, Copy)]
pub struct ScaleTable {
    entries: &'static [(f64, &'static str)],
}

impl ScaleTable {
    pub const fn new(entries: &'static [(f64, &'static str)]) -> Self {
        Self { entries }
    }

    /// Scale keys in table order.
    pub fn keys(&self) -> Vec<f64> {
        self.entries.iter().map(|(k, _)| *k).collect()
    }

    /// The nearest entry to `value`.
    pub fn nearest(&self, value: f64) -> Option<(f64, &'static str)> {
        let key = nearest_match(value, &self.keys())?;
        self.exact_entry(key)
    }

    /// Token of the nearest entry.
    pub fn token(&self, value: f64) -> Option<&'static str> {
        self.nearest(value).map(|(_, token)| token)
    }

    /// Token of the nearest entry if it lies strictly closer than `tolerance`.
    pub fn token_within(&self, value: f64, tolerance: f64) -> Option<&'static str> {
        self.nearest(value)
            .filter(|(key, _)| (value - key).abs() < tolerance)
            .map(|(_, token)| token)
    }

    /// Token for exactly `value`.
    pub fn exact(&self, value: f64) -> Option<&'static str> {
        self.exact_entry(value).map(|(_, token)| token)
    }

    fn exact_entry(&self, value: f64) -> Option<(f64, &'static str)> {
        self.entries.iter().copied().find(|(k, _)| *k == value)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Spacing scale in px, shared by sizes, gaps and padding.
pub static SPACING_SCALE: ScaleTable = ScaleTable::new(&[
    (0.0, "0"),
    (1.0, "px"),
    (2.0, "0.5"),
    (4.0, "1"),
    (6.0, "1.5"),
    (8.0, "2"),
    (10.0, "2.5"),
    (12.0, "3"),
    (14.0, "3.5"),
    (16.0, "4"),
    (20.0, "5"),
    (24.0, "6"),
    (28.0, "7"),
    (32.0, "8"),
    (36.0, "9"),
    (40.0, "10"),
    (44.0, "11"),
    (48.0, "12"),
    (56.0, "14"),
    (64.0, "16"),
    (80.0, "20"),
    (96.0, "24"),
    (112.0, "28"),
    (128.0, "32"),
    (144.0, "36"),
    (160.0, "40"),
    (176.0, "44"),
    (192.0, "48"),
    (208.0, "52"),
    (224.0, "56"),
    (240.0, "60"),
    (256.0, "64"),
    (288.0, "72"),
    (320.0, "80"),
    (384.0, "96"),
]);

pub static BORDER_RADIUS_SCALE: ScaleTable = ScaleTable::new(&[
    (0.0, "rounded-none"),
    (2.0, "rounded-sm"),
    (4.0, "rounded"),
    (6.0, "rounded-md"),
    (8.0, "rounded-lg"),
    (12.0, "rounded-xl"),
    (16.0, "rounded-2xl"),
    (24.0, "rounded-3xl"),
    (9999.0, "rounded-full"),
]);

pub static FONT_SIZE_SCALE: ScaleTable = ScaleTable::new(&[
    (12.0, "text-xs"),
    (14.0, "text-sm"),
    (16.0, "text-base"),
    (18.0, "text-lg"),
    (20.0, "text-xl"),
    (24.0, "text-2xl"),
    (30.0, "text-3xl"),
    (36.0, "text-4xl"),
    (48.0, "text-5xl"),
    (60.0, "text-6xl"),
    (72.0, "text-7xl"),
    (96.0, "text-8xl"),
    (128.0, "text-9xl"),
]);

/// Font weights, looked up by exact value only.
pub static FONT_WEIGHT_SCALE: ScaleTable = ScaleTable::new(&[
    (100.0, "font-thin"),
    (200.0, "font-extralight"),
    (300.0, "font-light"),
    (400.0, "font-normal"),
    (500.0, "font-medium"),
    (600.0, "font-semibold"),
    (700.0, "font-bold"),
    (800.0, "font-extrabold"),
    (900.0, "font-black"),
]);

/// Opacity in percent.
pub static OPACITY_SCALE: ScaleTable = ScaleTable::new(&[
    (0.0, "opacity-0"),
    (10.0, "opacity-10"),
    (20.0, "opacity-20"),
    (25.0, "opacity-25"),
    (30.0, "opacity-30"),
    (40.0, "opacity-40"),
    (50.0, "opacity-50"),
    (60.0, "opacity-60"),
    (70.0, "opacity-70"),
    (75.0, "opacity-75"),
    (80.0, "opacity-80"),
    (90.0, "opacity-90"),
    (95.0, "opacity-95"),
]);

pub static BORDER_WIDTH_SCALE: ScaleTable = ScaleTable::new(&[
    (0.0, "border-0"),
    (1.0, "border"),
    (2.0, "border-2"),
    (4.0, "border-4"),
    (8.0, "border-8"),
]);

/// Primary-axis alignment class.
pub fn justify_class(align: AxisAlign) -> Option<&'static str> {
    match align {
        AxisAlign::Min => Some("justify-start"),
        AxisAlign::Center => Some("justify-center"),
        AxisAlign::Max => Some("justify-end"),
        AxisAlign::SpaceBetween => Some("justify-between"),
        AxisAlign::SpaceAround => Some("justify-around"),
        AxisAlign::SpaceEvenly => Some("justify-evenly"),
        AxisAlign::Baseline | AxisAlign::Stretch | AxisAlign::Unknown => None,
    }
}

/// Counter-axis alignment class.
pub fn align_items_class(align: AxisAlign) -> Option<&'static str> {
    match align {
        AxisAlign::Min => Some("items-start"),
        AxisAlign::Center => Some("items-center"),
        AxisAlign::Max => Some("items-end"),
        AxisAlign::Baseline => Some("items-baseline"),
        AxisAlign::Stretch => Some("items-stretch"),
        AxisAlign::SpaceBetween
        | AxisAlign::SpaceAround
        | AxisAlign::SpaceEvenly
        | AxisAlign::Unknown => None,
    }
}

/// CSS `justify-content` keyword for a primary-axis alignment.
pub fn flex_justify_keyword(align: AxisAlign) -> &'static str {
    match align {
        AxisAlign::Min => "flex-start",
        AxisAlign::Center => "center",
        AxisAlign::Max => "flex-end",
        AxisAlign::SpaceBetween => "space-between",
        AxisAlign::SpaceAround => "space-around",
        AxisAlign::SpaceEvenly => "space-evenly",
        AxisAlign::Baseline | AxisAlign::Stretch | AxisAlign::Unknown => "flex-start",
    }
}

/// CSS `align-items` keyword for a counter-axis alignment.
pub fn flex_align_keyword(align: AxisAlign) -> &'static str {
    match align {
        AxisAlign::Min => "flex-start",
        AxisAlign::Center => "center",
        AxisAlign::Max => "flex-end",
        AxisAlign::Baseline => "baseline",
        AxisAlign::Stretch => "stretch",
        AxisAlign::SpaceBetween
        | AxisAlign::SpaceAround
        | AxisAlign::SpaceEvenly
        | AxisAlign::Unknown => "flex-start",
    }
}

/// CSS `text-align` keyword.
pub fn text_align_keyword(align: TextAlign) -> &'static str {
    match align {
        TextAlign::Left | TextAlign::Unknown => "left",
        TextAlign::Center => "center",
        TextAlign::Right => "right",
        TextAlign::Justified => "justify",
    }
}

pub fn text_align_class(align: TextAlign) -> Option<&'static str> {
    match align {
        TextAlign::Left => Some("text-left"),
        TextAlign::Center => Some("text-center"),
        TextAlign::Right => Some("text-right"),
        TextAlign::Justified => Some("text-justify"),
        TextAlign::Unknown => None,
    }
}
