// Copyright 2026 the Textflow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Resolved text styles.
//!
//! These are the CSS text properties consumed by the
//! [preprocessor](crate::preprocess). Cascade and shorthand expansion happen upstream; every
//! value here is already computed.

mod parse;

use alloc::string::String;

pub use parse::Lenient;

/// How white space inside text is handled, named for the CSS property.
///
/// See: <https://www.w3.org/TR/css-text-3/#white-space-property>
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[non_exhaustive]
pub enum WhiteSpace {
    /// Collapse spaces, fold line breaks, wrap.
    #[default]
    Normal,
    /// Collapse spaces, fold line breaks, never wrap.
    NoWrap,
    /// Preserve spaces and line breaks, never wrap.
    Pre,
    /// Preserve spaces and line breaks, wrap.
    PreWrap,
    /// Collapse spaces, preserve line breaks, wrap.
    PreLine,
    /// Like `PreWrap`, but preserved spaces always take up room.
    BreakSpaces,
}

impl WhiteSpace {
    /// Whether runs of spaces and tabs collapse to a single space.
    pub fn collapses_spaces(self) -> bool {
        matches!(self, Self::Normal | Self::NoWrap | Self::PreLine)
    }

    /// Whether hard line breaks in the source survive.
    pub fn preserves_line_breaks(self) -> bool {
        matches!(
            self,
            Self::Pre | Self::PreWrap | Self::PreLine | Self::BreakSpaces
        )
    }

    /// Whether soft wrap opportunities may be taken.
    pub fn allows_soft_wrap(self) -> bool {
        !matches!(self, Self::NoWrap | Self::Pre)
    }
}

/// Control over word breaking, named for the CSS property.
///
/// See: <https://www.w3.org/TR/css-text-3/#word-break-property>
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[non_exhaustive]
pub enum WordBreak {
    /// Customary rules.
    #[default]
    Normal,
    /// Breaking is allowed within "words".
    BreakAll,
    /// Breaking is forbidden within "words".
    KeepAll,
    /// Deprecated alias that behaves like `overflow-wrap: anywhere`.
    BreakWord,
}

/// Control over "emergency" line-breaking.
///
/// See: <https://www.w3.org/TR/css-text-3/#overflow-wrap-property>
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[non_exhaustive]
pub enum OverflowWrap {
    /// Only break at opportunities specified by word-breaking rules.
    #[default]
    Normal,
    /// Words may be broken at an arbitrary point if needed.
    Anywhere,
    /// Like `Anywhere`, but treated differently for min-content sizing in some engines.
    BreakWord,
}

/// Control over hyphenation.
///
/// See: <https://www.w3.org/TR/css-text-3/#hyphens-property>
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[non_exhaustive]
pub enum Hyphens {
    /// Soft hyphens are ignored.
    None,
    /// Only soft hyphens in the source are break opportunities.
    #[default]
    Manual,
    /// Treated as `Manual`; no hyphenation dictionary is consulted.
    Auto,
}

/// Strictness of line breaking rules.
///
/// See: <https://www.w3.org/TR/css-text-3/#line-break-property>
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[non_exhaustive]
pub enum LineBreak {
    /// Engine-chosen strictness.
    #[default]
    Auto,
    /// Least restrictive rules.
    Loose,
    /// Most common rules.
    Normal,
    /// Most restrictive rules.
    Strict,
    /// A soft wrap opportunity around every typographic character unit.
    Anywhere,
}

/// The `text-wrap` shorthand, covering both the mode and the style.
///
/// See: <https://www.w3.org/TR/css-text-4/#text-wrap>
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[non_exhaustive]
pub enum TextWrap {
    /// Greedy wrapping.
    #[default]
    Wrap,
    /// Do not wrap at soft-wrap opportunities.
    NoWrap,
    /// Narrow the wrap width so lines are of similar length.
    Balance,
    /// Avoid a very short last line.
    Pretty,
}

/// What happens to inline content that overflows its block.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[non_exhaustive]
pub enum TextOverflow {
    /// Overflowing content is clipped.
    #[default]
    Clip,
    /// Overflowing content is replaced by `…`.
    Ellipsis,
    /// Overflowing content is replaced by the given string.
    Custom(String),
}

/// The block's `overflow` value, as far as text truncation cares.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[non_exhaustive]
pub enum Overflow {
    /// Content is not clipped.
    #[default]
    Visible,
    /// Content is clipped, no scrolling.
    Hidden,
    /// Content is clipped, no scroll container.
    Clip,
    /// Content is clipped, always scrollable.
    Scroll,
    /// Content is clipped, scrollable when needed.
    Auto,
}

/// Horizontal alignment of lines.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[non_exhaustive]
pub enum TextAlign {
    /// Align to the start edge (left, as only left-to-right text is supported).
    #[default]
    Start,
    /// Align to the end edge.
    End,
    /// Align to the left edge.
    Left,
    /// Align to the right edge.
    Right,
    /// Center lines.
    Center,
    /// Stretch soft-wrapped lines to the container width.
    Justify,
}

/// Justification method.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[non_exhaustive]
pub enum TextJustify {
    /// Engine-chosen (inter-word).
    #[default]
    Auto,
    /// Distribute space between words.
    InterWord,
    /// Distribute space between characters.
    InterCharacter,
    /// Disable justification.
    None,
}

/// Case transformation applied before segmentation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[non_exhaustive]
pub enum TextTransform {
    /// No transformation.
    #[default]
    None,
    /// Upper-case every character.
    Uppercase,
    /// Lower-case every character.
    Lowercase,
    /// Upper-case the first letter of each word.
    Capitalize,
}

/// `-webkit-box-orient`, which gates `-webkit-line-clamp`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[non_exhaustive]
pub enum BoxOrient {
    /// Horizontal box.
    #[default]
    Horizontal,
    /// Vertical box.
    Vertical,
}

/// A CSS length as accepted by `tab-size` and `text-indent`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Length {
    /// Absolute pixels.
    Px(f32),
    /// Multiples of the font size.
    Em(f32),
    /// Percentage of the containing block's width.
    Percent(f32),
}

impl Length {
    /// Resolves to pixels.
    pub fn resolve(self, font_size: f32, container_width: f32) -> f32 {
        let px = match self {
            Self::Px(px) => px,
            Self::Em(em) => em * font_size,
            Self::Percent(pct) => {
                if container_width.is_finite() {
                    pct * container_width / 100.0
                } else {
                    0.0
                }
            }
        };
        if px.is_nan() { 0.0 } else { px }
    }
}

impl Default for Length {
    fn default() -> Self {
        Self::Px(0.0)
    }
}

/// The `tab-size` property.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TabSize {
    /// A multiple of the advance of the space character.
    Spaces(f32),
    /// A fixed length.
    Length(Length),
}

impl TabSize {
    /// The value used for unparseable lengths.
    pub const ZERO: Self = Self::Length(Length::Px(0.0));
}

impl Default for TabSize {
    fn default() -> Self {
        Self::Spaces(8.0)
    }
}

/// The `text-indent` property.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct TextIndent {
    /// The indent amount.
    pub length: Length,
    /// Invert which lines are indented.
    pub hanging: bool,
    /// Indent lines after forced breaks as well as the first line.
    pub each_line: bool,
}

impl TextIndent {
    /// Returns the horizontal offset of line `line_index`.
    ///
    /// `after_forced_break` reports whether the previous line ended with a forced break.
    pub fn line_indent(
        &self,
        line_index: usize,
        after_forced_break: bool,
        container_width: f32,
        font_size: f32,
    ) -> f32 {
        let starts_paragraph = line_index == 0 || (self.each_line && after_forced_break);
        if starts_paragraph != self.hanging {
            self.length.resolve(font_size, container_width)
        } else {
            0.0
        }
    }
}

/// `hyphenate-limit-chars`: minimum word length, and minimum characters before and after a
/// hyphenation point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HyphenateLimitChars {
    /// Words shorter than this are never hyphenated.
    pub word: usize,
    /// Minimum characters before the hyphen.
    pub before: usize,
    /// Minimum characters after the hyphen.
    pub after: usize,
}

impl Default for HyphenateLimitChars {
    fn default() -> Self {
        Self {
            word: 5,
            before: 2,
            after: 2,
        }
    }
}

/// The block-level `line-clamp` property.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LineClamp {
    /// Maximum number of lines.
    pub lines: usize,
    /// The `block-ellipsis` marker. `None` means the default `…`.
    pub marker: Option<String>,
}

/// Computed text style for one text node.
#[derive(Clone, Debug, PartialEq)]
pub struct TextStyle {
    /// Font size in pixels, used for `em` lengths and replaced content.
    pub font_size: f32,
    /// White space handling.
    pub white_space: WhiteSpace,
    /// Word breaking.
    pub word_break: WordBreak,
    /// Emergency wrapping.
    pub overflow_wrap: OverflowWrap,
    /// Soft hyphen handling.
    pub hyphens: Hyphens,
    /// Line breaking strictness.
    pub line_break: LineBreak,
    /// Wrap mode and strategy.
    pub text_wrap: TextWrap,
    /// Overflow marker.
    pub text_overflow: TextOverflow,
    /// The block's overflow.
    pub overflow: Overflow,
    /// Line alignment.
    pub text_align: TextAlign,
    /// Justification method.
    pub text_justify: TextJustify,
    /// Case transformation.
    pub text_transform: TextTransform,
    /// Tab stop spacing.
    pub tab_size: TabSize,
    /// First-line indentation.
    pub text_indent: TextIndent,
    /// Limits for soft hyphen breaks.
    pub hyphenate_limit_chars: HyphenateLimitChars,
    /// The character inserted when breaking at a soft hyphen.
    pub hyphenate_character: String,
    /// Block-level line clamp.
    pub line_clamp: Option<LineClamp>,
    /// `-webkit-line-clamp`.
    pub webkit_line_clamp: Option<usize>,
    /// `-webkit-box-orient`.
    pub box_orient: BoxOrient,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            font_size: 16.0,
            white_space: WhiteSpace::default(),
            word_break: WordBreak::default(),
            overflow_wrap: OverflowWrap::default(),
            hyphens: Hyphens::default(),
            line_break: LineBreak::default(),
            text_wrap: TextWrap::default(),
            text_overflow: TextOverflow::default(),
            overflow: Overflow::default(),
            text_align: TextAlign::default(),
            text_justify: TextJustify::default(),
            text_transform: TextTransform::default(),
            tab_size: TabSize::default(),
            text_indent: TextIndent::default(),
            hyphenate_limit_chars: HyphenateLimitChars::default(),
            hyphenate_character: "-".into(),
            line_clamp: None,
            webkit_line_clamp: None,
            box_orient: BoxOrient::default(),
        }
    }
}

impl TextStyle {
    /// Builds a style from `(property, value)` declarations.
    ///
    /// Unknown properties are ignored and unparseable values keep their defaults (or resolve
    /// to zero for lengths with unknown units).
    pub fn from_declarations<'a>(declarations: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let mut style = Self::default();
        for (property, value) in declarations {
            style.apply(property, value);
        }
        style
    }

    /// Applies a single declaration. Returns `false` if the property is not a text property.
    pub fn apply(&mut self, property: &str, value: &str) -> bool {
        match property.trim() {
            "font-size" => {
                let size = Length::lenient(value).resolve(self.font_size, f32::INFINITY);
                if size > 0.0 {
                    self.font_size = size;
                }
            }
            "white-space" => self.white_space = Lenient::lenient(value),
            "word-break" => self.word_break = Lenient::lenient(value),
            "overflow-wrap" | "word-wrap" => self.overflow_wrap = Lenient::lenient(value),
            "hyphens" => self.hyphens = Lenient::lenient(value),
            "line-break" => self.line_break = Lenient::lenient(value),
            "text-wrap" => self.text_wrap = Lenient::lenient(value),
            "text-overflow" => self.text_overflow = Lenient::lenient(value),
            "overflow" => self.overflow = Lenient::lenient(value),
            "text-align" => self.text_align = Lenient::lenient(value),
            "text-justify" => self.text_justify = Lenient::lenient(value),
            "text-transform" => self.text_transform = Lenient::lenient(value),
            "tab-size" => self.tab_size = Lenient::lenient(value),
            "text-indent" => self.text_indent = Lenient::lenient(value),
            "hyphenate-limit-chars" => self.hyphenate_limit_chars = Lenient::lenient(value),
            "hyphenate-character" => {
                self.hyphenate_character = parse::unquote(value)
                    .filter(|s| !s.is_empty())
                    .unwrap_or("-")
                    .into();
            }
            "line-clamp" => self.line_clamp = parse::line_clamp(value),
            "-webkit-line-clamp" => self.webkit_line_clamp = parse::clamp_count(value),
            "-webkit-box-orient" => self.box_orient = Lenient::lenient(value),
            _ => return false,
        }
        true
    }
}
