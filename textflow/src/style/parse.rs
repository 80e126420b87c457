// Copyright 2026 the Textflow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keyword and length parsing for text properties.

use core::str::FromStr;

use alloc::string::String;
use alloc::vec::Vec;

use super::{
    BoxOrient, HyphenateLimitChars, Hyphens, Length, LineBreak, LineClamp, Overflow,
    OverflowWrap, TabSize, TextAlign, TextIndent, TextJustify, TextOverflow, TextTransform,
    TextWrap, WhiteSpace, WordBreak,
};
use crate::error::{ParseError, ParseErrorKind};

/// Parsing that never fails.
///
/// Unknown values are logged at `debug` level and replaced by [`Lenient::fallback`], which is
/// the type's default unless the type documents otherwise.
pub trait Lenient: FromStr<Err = ParseError> + Default {
    /// Parses `value`, falling back instead of failing.
    fn lenient(value: &str) -> Self {
        match value.parse() {
            Ok(parsed) => parsed,
            Err(err) => {
                log::debug!("{err}, using fallback");
                Self::fallback(&err)
            }
        }
    }

    /// The value used when parsing fails with `err`.
    fn fallback(err: &ParseError) -> Self {
        let _ = err;
        Self::default()
    }
}

macro_rules! keywords {
    ($ty:ty, $property:literal, { $($keyword:literal => $value:expr),+ $(,)? }) => {
        impl FromStr for $ty {
            type Err = ParseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let s = s.trim();
                if s.is_empty() {
                    return Err(ParseError::empty($property));
                }
                $(
                    if s.eq_ignore_ascii_case($keyword) {
                        return Ok($value);
                    }
                )+
                Err(ParseError::unknown_keyword($property, s))
            }
        }

        impl Lenient for $ty {}
    };
}

keywords!(WhiteSpace, "white-space", {
    "normal" => Self::Normal,
    "nowrap" => Self::NoWrap,
    "pre" => Self::Pre,
    "pre-wrap" => Self::PreWrap,
    "pre-line" => Self::PreLine,
    "break-spaces" => Self::BreakSpaces,
});

keywords!(WordBreak, "word-break", {
    "normal" => Self::Normal,
    "break-all" => Self::BreakAll,
    "keep-all" => Self::KeepAll,
    "break-word" => Self::BreakWord,
});

keywords!(OverflowWrap, "overflow-wrap", {
    "normal" => Self::Normal,
    "anywhere" => Self::Anywhere,
    "break-word" => Self::BreakWord,
});

keywords!(Hyphens, "hyphens", {
    "none" => Self::None,
    "manual" => Self::Manual,
    "auto" => Self::Auto,
});

keywords!(LineBreak, "line-break", {
    "auto" => Self::Auto,
    "loose" => Self::Loose,
    "normal" => Self::Normal,
    "strict" => Self::Strict,
    "anywhere" => Self::Anywhere,
});

keywords!(TextWrap, "text-wrap", {
    "wrap" => Self::Wrap,
    "nowrap" => Self::NoWrap,
    "balance" => Self::Balance,
    "pretty" => Self::Pretty,
    "stable" => Self::Wrap,
    "auto" => Self::Wrap,
});

keywords!(Overflow, "overflow", {
    "visible" => Self::Visible,
    "hidden" => Self::Hidden,
    "clip" => Self::Clip,
    "scroll" => Self::Scroll,
    "auto" => Self::Auto,
});

keywords!(TextAlign, "text-align", {
    "start" => Self::Start,
    "end" => Self::End,
    "left" => Self::Left,
    "right" => Self::Right,
    "center" => Self::Center,
    "justify" => Self::Justify,
});

keywords!(TextJustify, "text-justify", {
    "auto" => Self::Auto,
    "inter-word" => Self::InterWord,
    "inter-character" => Self::InterCharacter,
    "distribute" => Self::InterCharacter,
    "none" => Self::None,
});

keywords!(TextTransform, "text-transform", {
    "none" => Self::None,
    "uppercase" => Self::Uppercase,
    "lowercase" => Self::Lowercase,
    "capitalize" => Self::Capitalize,
});

keywords!(BoxOrient, "-webkit-box-orient", {
    "horizontal" => Self::Horizontal,
    "vertical" => Self::Vertical,
    "inline-axis" => Self::Horizontal,
    "block-axis" => Self::Vertical,
});

impl FromStr for TextOverflow {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ParseError::empty("text-overflow"));
        }
        if s.eq_ignore_ascii_case("clip") {
            Ok(Self::Clip)
        } else if s.eq_ignore_ascii_case("ellipsis") {
            Ok(Self::Ellipsis)
        } else if let Some(marker) = unquote(s) {
            Ok(Self::Custom(marker.into()))
        } else {
            Err(ParseError::unknown_keyword("text-overflow", s))
        }
    }
}

impl Lenient for TextOverflow {}

impl FromStr for Length {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_length("length", s)
    }
}

impl Lenient for Length {}

fn parse_length(property: &'static str, s: &str) -> Result<Length, ParseError> {
    let s = s.trim();
    if s.is_empty() {
        return Err(ParseError::empty(property));
    }
    let unit_start = s
        .find(|c: char| c.is_ascii_alphabetic() || c == '%')
        .unwrap_or(s.len());
    let (number, unit) = s.split_at(unit_start);
    let value: f32 = number
        .parse()
        .map_err(|_| ParseError::invalid_number(property, s))?;
    if !value.is_finite() {
        return Err(ParseError::invalid_number(property, s));
    }
    match unit.to_ascii_lowercase().as_str() {
        "" if value == 0.0 => Ok(Length::Px(0.0)),
        "px" => Ok(Length::Px(value)),
        "em" => Ok(Length::Em(value)),
        "%" => Ok(Length::Percent(value)),
        "pt" => Ok(Length::Px(value * 4.0 / 3.0)),
        "pc" => Ok(Length::Px(value * 16.0)),
        "in" => Ok(Length::Px(value * 96.0)),
        "cm" => Ok(Length::Px(value * 96.0 / 2.54)),
        "mm" => Ok(Length::Px(value * 96.0 / 25.4)),
        _ => Err(ParseError::unknown_unit(property, s)),
    }
}

impl FromStr for TabSize {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ParseError::empty("tab-size"));
        }
        if let Ok(spaces) = s.parse::<f32>() {
            return if spaces.is_finite() && spaces >= 0.0 {
                Ok(Self::Spaces(spaces))
            } else {
                Err(ParseError::invalid_number("tab-size", s))
            };
        }
        match parse_length("tab-size", s)? {
            Length::Percent(_) => Err(ParseError::unknown_unit("tab-size", s)),
            length => Ok(Self::Length(length)),
        }
    }
}

impl Lenient for TabSize {
    /// Lengths with an unknown unit resolve to zero; anything else keeps the default.
    fn fallback(err: &ParseError) -> Self {
        if err.kind() == ParseErrorKind::UnknownUnit {
            Self::ZERO
        } else {
            Self::default()
        }
    }
}

impl FromStr for TextIndent {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut indent = Self::default();
        let mut length = None;
        for token in s.split_ascii_whitespace() {
            if token.eq_ignore_ascii_case("hanging") {
                indent.hanging = true;
            } else if token.eq_ignore_ascii_case("each-line") {
                indent.each_line = true;
            } else if length.is_none() {
                length = Some(parse_length("text-indent", token)?);
            } else {
                return Err(ParseError::unknown_keyword("text-indent", token));
            }
        }
        indent.length = length.ok_or_else(|| ParseError::empty("text-indent"))?;
        Ok(indent)
    }
}

impl Lenient for TextIndent {}

impl FromStr for HyphenateLimitChars {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let auto = Self::default();
        let values = s
            .split_ascii_whitespace()
            .map(|token| {
                if token.eq_ignore_ascii_case("auto") {
                    Ok(None)
                } else {
                    token
                        .parse::<usize>()
                        .map(Some)
                        .map_err(|_| ParseError::invalid_number("hyphenate-limit-chars", token))
                }
            })
            .collect::<Result<Vec<_>, _>>()?;
        match values.as_slice() {
            [] => Err(ParseError::empty("hyphenate-limit-chars")),
            [word] => Ok(Self {
                word: word.unwrap_or(auto.word),
                ..auto
            }),
            [word, before] => {
                let before = before.unwrap_or(auto.before);
                Ok(Self {
                    word: word.unwrap_or(auto.word),
                    before,
                    after: before,
                })
            }
            [word, before, after] => Ok(Self {
                word: word.unwrap_or(auto.word),
                before: before.unwrap_or(auto.before),
                after: after.unwrap_or(auto.after),
            }),
            _ => Err(ParseError::unknown_keyword("hyphenate-limit-chars", s.trim())),
        }
    }
}

impl Lenient for HyphenateLimitChars {}

impl FromStr for LineClamp {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let Some((count, rest)) = s
            .split_once(char::is_whitespace)
            .or(Some((s, "")))
            .filter(|(count, _)| !count.is_empty())
        else {
            return Err(ParseError::empty("line-clamp"));
        };
        let lines = count
            .parse::<usize>()
            .ok()
            .filter(|lines| *lines > 0)
            .ok_or_else(|| ParseError::invalid_number("line-clamp", count))?;
        let rest = rest.trim();
        let marker = if rest.is_empty() || rest.eq_ignore_ascii_case("auto") {
            None
        } else if rest.eq_ignore_ascii_case("none") {
            Some(String::new())
        } else if let Some(marker) = unquote(rest) {
            Some(marker.into())
        } else {
            return Err(ParseError::unknown_keyword("line-clamp", rest));
        };
        Ok(Self { lines, marker })
    }
}

/// Parses `line-clamp`, where `none` and unparseable values mean no clamp.
pub(crate) fn line_clamp(value: &str) -> Option<LineClamp> {
    if value.trim().eq_ignore_ascii_case("none") {
        return None;
    }
    value
        .parse()
        .inspect_err(|err| log::debug!("{err}, ignoring clamp"))
        .ok()
}

/// Parses `-webkit-line-clamp`, a positive integer or `none`.
pub(crate) fn clamp_count(value: &str) -> Option<usize> {
    value.trim().parse().ok().filter(|lines| *lines > 0)
}

/// Strips one level of matching single or double quotes.
pub(crate) fn unquote(value: &str) -> Option<&str> {
    let value = value.trim();
    ['"', '\'']
        .into_iter()
        .find_map(|quote| value.strip_prefix(quote)?.strip_suffix(quote))
}
