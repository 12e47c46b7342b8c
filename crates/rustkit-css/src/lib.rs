//! # RustKit CSS
//!
//! Resolved style values for the RustKit table layout engine.
//!
//! ## Design Goals
//!
//! 1. **Computed values**: Hand layout already-cascaded values (`ComputedStyle`)
//! 2. **Table properties**: Border styles, border collapsing, spacing, pagination
//! 3. **Declarations**: Build a style from `property: value;` text for tests and tools
//!
//! Selector matching and the cascade are out of scope; callers pass the
//! declarations that apply to one box.

use thiserror::Error;
use tracing::debug;

/// Initial value of `border-*-width` (`medium`).
pub const BORDER_WIDTH_MEDIUM: f32 = 3.0;

/// Root font size used to resolve `rem`.
pub const ROOT_FONT_SIZE: f32 = 16.0;

/// Errors that can occur in CSS operations.
#[derive(Error, Debug, PartialEq)]
pub enum CssError {
    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Invalid value for '{property}': {value}")]
    InvalidValue { property: String, value: String },
}

impl CssError {
    fn invalid(property: &str, value: &str) -> Self {
        CssError::InvalidValue {
            property: property.to_string(),
            value: value.to_string(),
        }
    }
}

/// A CSS color value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const TRANSPARENT: Color = Color {
        r: 0,
        g: 0,
        b: 0,
        a: 0,
    };
    pub const BLACK: Color = Color {
        r: 0,
        g: 0,
        b: 0,
        a: 255,
    };
    pub const WHITE: Color = Color {
        r: 255,
        g: 255,
        b: 255,
        a: 255,
    };

    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Check if painting this color has no visible effect.
    pub fn is_transparent(&self) -> bool {
        self.a == 0
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

/// A CSS length value.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Length {
    /// Pixels.
    Px(f32),
    /// Em (relative to font size).
    Em(f32),
    /// Rem (relative to root font size).
    Rem(f32),
    /// Percentage.
    Percent(f32),
    /// Auto.
    Auto,
    /// Zero.
    #[default]
    Zero,
}

impl Length {
    /// Compute the absolute pixel value.
    pub fn to_px(&self, font_size: f32, root_font_size: f32, container_size: f32) -> f32 {
        match self {
            Length::Px(px) => *px,
            Length::Em(em) => em * font_size,
            Length::Rem(rem) => rem * root_font_size,
            Length::Percent(pct) => pct / 100.0 * container_size,
            Length::Auto => 0.0, // Context-dependent
            Length::Zero => 0.0,
        }
    }

    pub fn is_auto(&self) -> bool {
        matches!(self, Length::Auto)
    }

    pub fn is_percent(&self) -> bool {
        matches!(self, Length::Percent(_))
    }

    /// Check if the value resolves without a containing block.
    pub fn has_absolute_unit(&self) -> bool {
        matches!(
            self,
            Length::Px(_) | Length::Em(_) | Length::Rem(_) | Length::Zero
        )
    }
}

/// Display property values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Display {
    #[default]
    Block,
    Inline,
    Table,
    TableHeaderGroup,
    TableRowGroup,
    TableFooterGroup,
    TableRow,
    TableColumn,
    TableCell,
    None,
}

/// Border style values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BorderStyle {
    #[default]
    None,
    Hidden,
    Solid,
    Dashed,
    Dotted,
    Double,
    Groove,
    Ridge,
    Inset,
    Outset,
}

impl BorderStyle {
    /// Rank used when two collapsing borders of equal width meet.
    ///
    /// `hidden > double > solid > dashed > dotted > ridge > outset > groove > inset > none`
    pub fn precedence(self) -> u8 {
        match self {
            BorderStyle::Hidden => 9,
            BorderStyle::Double => 8,
            BorderStyle::Solid => 7,
            BorderStyle::Dashed => 6,
            BorderStyle::Dotted => 5,
            BorderStyle::Ridge => 4,
            BorderStyle::Outset => 3,
            BorderStyle::Groove => 2,
            BorderStyle::Inset => 1,
            BorderStyle::None => 0,
        }
    }

    pub fn is_none(self) -> bool {
        self == BorderStyle::None
    }

    pub fn is_hidden(self) -> bool {
        self == BorderStyle::Hidden
    }

    /// Check if a border with this style puts ink on the page.
    pub fn is_drawn(self) -> bool {
        !matches!(self, BorderStyle::None | BorderStyle::Hidden)
    }
}

/// Vertical alignment.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum VerticalAlign {
    #[default]
    Baseline,
    Sub,
    Super,
    Top,
    TextTop,
    Middle,
    Bottom,
    TextBottom,
    Length(f32),
}

/// Visibility property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Visible,
    Hidden,
    Collapse,
}

/// `empty-cells` property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmptyCells {
    #[default]
    Show,
    Hide,
}

/// `border-collapse` property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BorderCollapse {
    #[default]
    Separate,
    Collapse,
}

/// `table-layout` property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TableLayout {
    #[default]
    Auto,
    Fixed,
}

/// Overflow behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Overflow {
    #[default]
    Visible,
    Hidden,
    Scroll,
    Auto,
    Clip,
}

impl Overflow {
    /// Check if content is clipped.
    pub fn clips_content(self) -> bool {
        !matches!(self, Overflow::Visible)
    }
}

/// Computed style for an element.
#[derive(Debug, Clone, Default)]
pub struct ComputedStyle {
    // Box model
    pub display: Display,
    pub width: Length,
    pub height: Length,

    // Margin
    pub margin_top: Length,
    pub margin_right: Length,
    pub margin_bottom: Length,
    pub margin_left: Length,

    // Padding
    pub padding_top: Length,
    pub padding_right: Length,
    pub padding_bottom: Length,
    pub padding_left: Length,

    // Border
    pub border_top_width: Length,
    pub border_right_width: Length,
    pub border_bottom_width: Length,
    pub border_left_width: Length,
    pub border_top_style: BorderStyle,
    pub border_right_style: BorderStyle,
    pub border_bottom_style: BorderStyle,
    pub border_left_style: BorderStyle,
    pub border_top_color: Color,
    pub border_right_color: Color,
    pub border_bottom_color: Color,
    pub border_left_color: Color,

    // Colors
    pub color: Color,
    pub background_color: Color,

    // Typography
    pub font_size: Length,
    pub vertical_align: VerticalAlign,

    // Visual
    pub visibility: Visibility,
    pub overflow_x: Overflow,
    pub overflow_y: Overflow,

    // Tables
    pub border_collapse: BorderCollapse,
    pub border_spacing_h: Length,
    pub border_spacing_v: Length,
    pub empty_cells: EmptyCells,
    pub table_layout: TableLayout,
    /// `-fs-table-paginate: paginate`: repeat headers and clip rows per page.
    pub paginate_table: bool,
    pub colspan: u32,
    pub rowspan: u32,
}

impl ComputedStyle {
    /// Create default style.
    pub fn new() -> Self {
        Self {
            width: Length::Auto,
            height: Length::Auto,
            border_top_width: Length::Px(BORDER_WIDTH_MEDIUM),
            border_right_width: Length::Px(BORDER_WIDTH_MEDIUM),
            border_bottom_width: Length::Px(BORDER_WIDTH_MEDIUM),
            border_left_width: Length::Px(BORDER_WIDTH_MEDIUM),
            font_size: Length::Px(16.0),
            color: Color::BLACK,
            background_color: Color::TRANSPARENT,
            colspan: 1,
            rowspan: 1,
            ..Default::default()
        }
    }

    /// Build a style from a declaration block such as
    /// `"border: 2px solid black; padding: 4px"`.
    pub fn from_declarations(css: &str) -> Result<Self, CssError> {
        let mut style = Self::new();
        style.apply_declarations(css)?;
        Ok(style)
    }

    /// Apply every `property: value` pair of a declaration block.
    pub fn apply_declarations(&mut self, css: &str) -> Result<(), CssError> {
        for declaration in css.split(';') {
            let declaration = declaration.trim();
            if declaration.is_empty() {
                continue;
            }
            let (property, value) = declaration
                .split_once(':')
                .ok_or_else(|| CssError::ParseError(format!("missing ':' in '{}'", declaration)))?;
            self.apply_declaration(property.trim(), value.trim())?;
        }
        Ok(())
    }

    /// Apply a single declaration.
    pub fn apply_declaration(&mut self, property: &str, value: &str) -> Result<(), CssError> {
        let property = property.to_ascii_lowercase();
        let invalid = || CssError::invalid(&property, value);

        match property.as_str() {
            "display" => self.display = parse_display(value).ok_or_else(invalid)?,
            "width" => self.width = parse_length(value).ok_or_else(invalid)?,
            "height" => self.height = parse_length(value).ok_or_else(invalid)?,
            "margin" => {
                let [t, r, b, l] = parse_box_shorthand(value).ok_or_else(invalid)?;
                self.margin_top = t;
                self.margin_right = r;
                self.margin_bottom = b;
                self.margin_left = l;
            }
            "padding" => {
                let [t, r, b, l] = parse_box_shorthand(value).ok_or_else(invalid)?;
                self.padding_top = t;
                self.padding_right = r;
                self.padding_bottom = b;
                self.padding_left = l;
            }
            "padding-top" => self.padding_top = parse_length(value).ok_or_else(invalid)?,
            "padding-right" => self.padding_right = parse_length(value).ok_or_else(invalid)?,
            "padding-bottom" => self.padding_bottom = parse_length(value).ok_or_else(invalid)?,
            "padding-left" => self.padding_left = parse_length(value).ok_or_else(invalid)?,
            "border" => {
                let border = parse_border_shorthand(value).ok_or_else(invalid)?;
                for side in 0..4 {
                    self.set_border_side(side, border);
                }
            }
            "border-top" | "border-right" | "border-bottom" | "border-left" => {
                let border = parse_border_shorthand(value).ok_or_else(invalid)?;
                self.set_border_side(side_index(&property[7..]), border);
            }
            "border-top-width" => self.border_top_width = parse_border_width(value).ok_or_else(invalid)?,
            "border-right-width" => self.border_right_width = parse_border_width(value).ok_or_else(invalid)?,
            "border-bottom-width" => self.border_bottom_width = parse_border_width(value).ok_or_else(invalid)?,
            "border-left-width" => self.border_left_width = parse_border_width(value).ok_or_else(invalid)?,
            "border-top-style" => self.border_top_style = parse_border_style(value).ok_or_else(invalid)?,
            "border-right-style" => self.border_right_style = parse_border_style(value).ok_or_else(invalid)?,
            "border-bottom-style" => self.border_bottom_style = parse_border_style(value).ok_or_else(invalid)?,
            "border-left-style" => self.border_left_style = parse_border_style(value).ok_or_else(invalid)?,
            "border-top-color" => self.border_top_color = parse_color(value).ok_or_else(invalid)?,
            "border-right-color" => self.border_right_color = parse_color(value).ok_or_else(invalid)?,
            "border-bottom-color" => self.border_bottom_color = parse_color(value).ok_or_else(invalid)?,
            "border-left-color" => self.border_left_color = parse_color(value).ok_or_else(invalid)?,
            "border-style" => {
                let style = parse_border_style(value).ok_or_else(invalid)?;
                self.border_top_style = style;
                self.border_right_style = style;
                self.border_bottom_style = style;
                self.border_left_style = style;
            }
            "border-width" => {
                let width = parse_border_width(value).ok_or_else(invalid)?;
                self.border_top_width = width;
                self.border_right_width = width;
                self.border_bottom_width = width;
                self.border_left_width = width;
            }
            "border-color" => {
                let color = parse_color(value).ok_or_else(invalid)?;
                self.border_top_color = color;
                self.border_right_color = color;
                self.border_bottom_color = color;
                self.border_left_color = color;
            }
            "background-color" | "background" => {
                self.background_color = parse_color(value).ok_or_else(invalid)?
            }
            "color" => self.color = parse_color(value).ok_or_else(invalid)?,
            "font-size" => self.font_size = parse_length(value).ok_or_else(invalid)?,
            "vertical-align" => self.vertical_align = parse_vertical_align(value),
            "visibility" => {
                self.visibility = match value.to_ascii_lowercase().as_str() {
                    "visible" => Visibility::Visible,
                    "hidden" => Visibility::Hidden,
                    "collapse" => Visibility::Collapse,
                    _ => return Err(invalid()),
                }
            }
            "overflow" => {
                let overflow = parse_overflow(value).ok_or_else(invalid)?;
                self.overflow_x = overflow;
                self.overflow_y = overflow;
            }
            "border-collapse" => {
                self.border_collapse = match value.to_ascii_lowercase().as_str() {
                    "collapse" => BorderCollapse::Collapse,
                    "separate" => BorderCollapse::Separate,
                    _ => return Err(invalid()),
                }
            }
            "border-spacing" => {
                let mut parts = value.split_whitespace().map(parse_length);
                let h = parts.next().flatten().ok_or_else(invalid)?;
                let v = match parts.next() {
                    Some(v) => v.ok_or_else(invalid)?,
                    None => h,
                };
                self.border_spacing_h = h;
                self.border_spacing_v = v;
            }
            "empty-cells" => {
                self.empty_cells = match value.to_ascii_lowercase().as_str() {
                    "show" => EmptyCells::Show,
                    "hide" => EmptyCells::Hide,
                    _ => return Err(invalid()),
                }
            }
            "table-layout" => {
                self.table_layout = match value.to_ascii_lowercase().as_str() {
                    "auto" => TableLayout::Auto,
                    "fixed" => TableLayout::Fixed,
                    _ => return Err(invalid()),
                }
            }
            "-fs-table-paginate" => {
                self.paginate_table = match value.to_ascii_lowercase().as_str() {
                    "paginate" => true,
                    "auto" => false,
                    _ => return Err(invalid()),
                }
            }
            "colspan" => self.colspan = value.parse::<u32>().map_err(|_| invalid())?.max(1),
            "rowspan" => self.rowspan = value.parse::<u32>().map_err(|_| invalid())?.max(1),
            _ => {
                debug!(property = %property, "Ignoring unsupported property");
            }
        }

        Ok(())
    }

    fn set_border_side(&mut self, side: usize, border: BorderShorthand) {
        let (width, style, color) = match side {
            0 => (
                &mut self.border_top_width,
                &mut self.border_top_style,
                &mut self.border_top_color,
            ),
            1 => (
                &mut self.border_right_width,
                &mut self.border_right_style,
                &mut self.border_right_color,
            ),
            2 => (
                &mut self.border_bottom_width,
                &mut self.border_bottom_style,
                &mut self.border_bottom_color,
            ),
            _ => (
                &mut self.border_left_width,
                &mut self.border_left_style,
                &mut self.border_left_color,
            ),
        };
        // Shorthands reset omitted components to their initial values.
        *width = border.width.unwrap_or(Length::Px(BORDER_WIDTH_MEDIUM));
        *style = border.style.unwrap_or_default();
        *color = border.color.unwrap_or(self.color);
    }

    /// Border widths in `[top, right, bottom, left]` order.
    pub fn border_widths(&self) -> [Length; 4] {
        [
            self.border_top_width,
            self.border_right_width,
            self.border_bottom_width,
            self.border_left_width,
        ]
    }

    /// Border styles in `[top, right, bottom, left]` order.
    pub fn border_styles(&self) -> [BorderStyle; 4] {
        [
            self.border_top_style,
            self.border_right_style,
            self.border_bottom_style,
            self.border_left_style,
        ]
    }

    /// Border colors in `[top, right, bottom, left]` order.
    pub fn border_colors(&self) -> [Color; 4] {
        [
            self.border_top_color,
            self.border_right_color,
            self.border_bottom_color,
            self.border_left_color,
        ]
    }

    /// Padding in `[top, right, bottom, left]` order.
    pub fn padding(&self) -> [Length; 4] {
        [
            self.padding_top,
            self.padding_right,
            self.padding_bottom,
            self.padding_left,
        ]
    }

    /// Margins in `[top, right, bottom, left]` order.
    pub fn margin(&self) -> [Length; 4] {
        [
            self.margin_top,
            self.margin_right,
            self.margin_bottom,
            self.margin_left,
        ]
    }

    /// Font size in pixels.
    pub fn font_size_px(&self) -> f32 {
        match self.font_size {
            Length::Px(px) => px,
            Length::Em(em) | Length::Rem(em) => em * ROOT_FONT_SIZE,
            _ => ROOT_FONT_SIZE,
        }
    }

    /// Resolve a length of this element against a containing block size.
    pub fn resolve(&self, length: Length, container_size: f32) -> f32 {
        length.to_px(self.font_size_px(), ROOT_FONT_SIZE, container_size)
    }

    pub fn is_auto_height(&self) -> bool {
        self.height.is_auto()
    }

    pub fn has_absolute_height(&self) -> bool {
        self.height.has_absolute_unit()
    }

    pub fn is_collapse_borders(&self) -> bool {
        self.border_collapse == BorderCollapse::Collapse
    }

    pub fn is_paginate_table(&self) -> bool {
        self.paginate_table
    }

    pub fn is_table_layout_auto(&self) -> bool {
        self.table_layout == TableLayout::Auto
    }

    pub fn is_visible(&self) -> bool {
        self.visibility == Visibility::Visible
    }

    pub fn is_show_empty_cells(&self) -> bool {
        self.empty_cells == EmptyCells::Show
    }

    /// Check if overflowing content is clipped on either axis.
    pub fn clips_overflow(&self) -> bool {
        self.overflow_x.clips_content() || self.overflow_y.clips_content()
    }
}

/// Components of a `border` / `border-<side>` shorthand.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BorderShorthand {
    pub width: Option<Length>,
    pub style: Option<BorderStyle>,
    pub color: Option<Color>,
}

fn side_index(side: &str) -> usize {
    match side {
        "top" => 0,
        "right" => 1,
        "bottom" => 2,
        _ => 3,
    }
}

/// Parse a color value.
pub fn parse_color(value: &str) -> Option<Color> {
    let value = value.trim();

    // Named colors
    match value.to_lowercase().as_str() {
        "transparent" => return Some(Color::TRANSPARENT),
        "black" => return Some(Color::BLACK),
        "white" => return Some(Color::WHITE),
        "red" => return Some(Color::from_rgb(255, 0, 0)),
        "green" => return Some(Color::from_rgb(0, 128, 0)),
        "blue" => return Some(Color::from_rgb(0, 0, 255)),
        "yellow" => return Some(Color::from_rgb(255, 255, 0)),
        "gray" | "grey" => return Some(Color::from_rgb(128, 128, 128)),
        "silver" => return Some(Color::from_rgb(192, 192, 192)),
        "navy" => return Some(Color::from_rgb(0, 0, 128)),
        _ => {}
    }

    // Hex colors
    if let Some(hex) = value.strip_prefix('#') {
        // Byte-range slicing below needs one byte per digit.
        if !hex.is_ascii() {
            return None;
        }
        let (r, g, b, a) = match hex.len() {
            3 => {
                let r = u8::from_str_radix(&hex[0..1], 16).ok()? * 17;
                let g = u8::from_str_radix(&hex[1..2], 16).ok()? * 17;
                let b = u8::from_str_radix(&hex[2..3], 16).ok()? * 17;
                (r, g, b, 255)
            }
            6 => {
                let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
                let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
                let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
                (r, g, b, 255)
            }
            8 => {
                let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
                let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
                let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
                let a = u8::from_str_radix(&hex[6..8], 16).ok()?;
                (r, g, b, a)
            }
            _ => return None,
        };
        return Some(Color::new(r, g, b, a));
    }

    // rgb() / rgba()
    if value.starts_with("rgb") {
        // Simplified parsing
        let inner = value
            .trim_start_matches("rgba(")
            .trim_start_matches("rgb(")
            .trim_end_matches(')');
        let parts: Vec<&str> = inner.split(',').collect();
        if parts.len() >= 3 {
            let r = parts[0].trim().parse::<u8>().ok()?;
            let g = parts[1].trim().parse::<u8>().ok()?;
            let b = parts[2].trim().parse::<u8>().ok()?;
            let a = if parts.len() >= 4 {
                let alpha = parts[3].trim().parse::<f32>().ok()?;
                (alpha.clamp(0.0, 1.0) * 255.0).round() as u8
            } else {
                255
            };
            return Some(Color::new(r, g, b, a));
        }
    }

    None
}

/// Parse a length value.
pub fn parse_length(value: &str) -> Option<Length> {
    let value = value.trim();

    if value == "auto" {
        return Some(Length::Auto);
    }
    if value == "0" {
        return Some(Length::Zero);
    }

    if let Some(num) = value.strip_suffix("px") {
        return num.parse::<f32>().ok().map(Length::Px);
    }
    // `rem` before `em`: every rem value also ends in "em".
    if let Some(num) = value.strip_suffix("rem") {
        return num.parse::<f32>().ok().map(Length::Rem);
    }
    if let Some(num) = value.strip_suffix("em") {
        return num.parse::<f32>().ok().map(Length::Em);
    }
    if let Some(num) = value.strip_suffix('%') {
        return num.parse::<f32>().ok().map(Length::Percent);
    }

    // Try plain number (treated as px)
    if let Ok(num) = value.parse::<f32>() {
        return Some(Length::Px(num));
    }

    None
}

/// Parse a border width, including the `thin`/`medium`/`thick` keywords.
pub fn parse_border_width(value: &str) -> Option<Length> {
    match value.trim().to_lowercase().as_str() {
        "thin" => Some(Length::Px(1.0)),
        "medium" => Some(Length::Px(BORDER_WIDTH_MEDIUM)),
        "thick" => Some(Length::Px(5.0)),
        _ => match parse_length(value)? {
            Length::Auto | Length::Percent(_) => None,
            length => Some(length),
        },
    }
}

/// Parse a border style keyword.
pub fn parse_border_style(value: &str) -> Option<BorderStyle> {
    match value.trim().to_lowercase().as_str() {
        "none" => Some(BorderStyle::None),
        "hidden" => Some(BorderStyle::Hidden),
        "solid" => Some(BorderStyle::Solid),
        "dashed" => Some(BorderStyle::Dashed),
        "dotted" => Some(BorderStyle::Dotted),
        "double" => Some(BorderStyle::Double),
        "groove" => Some(BorderStyle::Groove),
        "ridge" => Some(BorderStyle::Ridge),
        "inset" => Some(BorderStyle::Inset),
        "outset" => Some(BorderStyle::Outset),
        _ => None,
    }
}

/// Parse a `border` shorthand: width, style and color in any order.
pub fn parse_border_shorthand(value: &str) -> Option<BorderShorthand> {
    let mut border = BorderShorthand::default();

    for token in value.split_whitespace() {
        if let Some(style) = parse_border_style(token) {
            if border.style.replace(style).is_some() {
                return None;
            }
        } else if let Some(width) = parse_border_width(token) {
            if border.width.replace(width).is_some() {
                return None;
            }
        } else if let Some(color) = parse_color(token) {
            if border.color.replace(color).is_some() {
                return None;
            }
        } else {
            return None;
        }
    }

    Some(border)
}

/// Parse a one-to-four value box shorthand (`margin`, `padding`).
pub fn parse_box_shorthand(value: &str) -> Option<[Length; 4]> {
    let values = value
        .split_whitespace()
        .map(parse_length)
        .collect::<Option<Vec<_>>>()?;

    match values.as_slice() {
        [all] => Some([*all; 4]),
        [v, h] => Some([*v, *h, *v, *h]),
        [t, h, b] => Some([*t, *h, *b, *h]),
        [t, r, b, l] => Some([*t, *r, *b, *l]),
        _ => None,
    }
}

/// Parse a `vertical-align` value. Unknown values fall back to `baseline`.
pub fn parse_vertical_align(value: &str) -> VerticalAlign {
    match value.trim().to_lowercase().as_str() {
        "sub" => VerticalAlign::Sub,
        "super" => VerticalAlign::Super,
        "top" => VerticalAlign::Top,
        "text-top" => VerticalAlign::TextTop,
        "middle" => VerticalAlign::Middle,
        "bottom" => VerticalAlign::Bottom,
        "text-bottom" => VerticalAlign::TextBottom,
        other => match parse_length(other) {
            Some(Length::Px(px)) => VerticalAlign::Length(px),
            _ => VerticalAlign::Baseline,
        },
    }
}

/// Parse an overflow keyword.
pub fn parse_overflow(value: &str) -> Option<Overflow> {
    match value.trim().to_lowercase().as_str() {
        "visible" => Some(Overflow::Visible),
        "hidden" => Some(Overflow::Hidden),
        "scroll" => Some(Overflow::Scroll),
        "auto" => Some(Overflow::Auto),
        "clip" => Some(Overflow::Clip),
        _ => None,
    }
}

/// Parse display value.
pub fn parse_display(value: &str) -> Option<Display> {
    match value.trim().to_lowercase().as_str() {
        "block" => Some(Display::Block),
        "inline" => Some(Display::Inline),
        "table" => Some(Display::Table),
        "table-header-group" => Some(Display::TableHeaderGroup),
        "table-row-group" => Some(Display::TableRowGroup),
        "table-footer-group" => Some(Display::TableFooterGroup),
        "table-row" => Some(Display::TableRow),
        "table-column" => Some(Display::TableColumn),
        "table-cell" => Some(Display::TableCell),
        "none" => Some(Display::None),
        _ => None,
    }
}
