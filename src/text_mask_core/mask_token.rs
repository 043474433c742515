use std::fmt;
use std::fmt::{Debug, Display, Formatter};

/// Single-byte or double-byte variant of a character class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharWidth {
    /// Half-width, single byte.
    Narrow,
    /// Full-width, double byte.
    Wide,
}

/// Case conversion for input.
/// Switched by `<`, `>` and `|` in the mask.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CaseMode {
    #[default]
    None,
    Lower,
    Upper,
}

/// One char of the input mask.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum MaskKind {
    /// Fixed char.
    Literal,
    /// 0-9
    Digit,
    /// 0-9, space
    DigitOrSpace,
    /// 0-9, sign, space
    DigitSignOrSpace,
    /// letter
    Letter,
    /// letter, space
    LetterOrSpace,
    /// letter, digit
    Alphanumeric,
    /// letter, digit, space
    AlphanumericOrSpace,
    /// localized `.`
    DecimalPoint,
    /// localized `,`
    ThousandsSeparator,
    /// localized `:`
    TimeSeparator,
    /// localized `/`
    DateSeparator,
    /// localized `$`
    CurrencySymbol,
    /// full-width digit
    DbcsDigit,
    Hiragana,
    /// hiragana without the small kana
    BigHiragana,
    Katakana(CharWidth),
    /// katakana without the small kana
    BigKatakana(CharWidth),
    /// anything with display width 2
    AnyDbcs,
    /// anything with display width 1
    AnySbcs,
}

/// One token of the input mask.
#[derive(Clone, PartialEq, Eq)]
pub struct MaskToken {
    /// Char class
    pub kind: MaskKind,
    /// Display char for literal kinds.
    pub literal: char,
    /// Case conversion for input.
    pub case: CaseMode,
}

const SMALL_HIRAGANA: &str = "ぁぃぅぇぉっゃゅょゎゕゖ";
const SMALL_KATAKANA: &str = "ァィゥェォッャュョヮヵヶ";
const SMALL_KATAKANA_NARROW: &str = "ｧｨｩｪｫｬｭｮｯ";

/// prolonged sound mark, used with both kana.
const CHOON: char = 'ー';

/// distance hiragana -> katakana
const KANA_OFFSET: u32 = 0x60;
/// distance ascii -> full-width forms
const WIDE_OFFSET: u32 = 0xFEE0;

impl Display for MaskKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let s = match self {
            MaskKind::Literal => "\\",
            MaskKind::Digit => "0",
            MaskKind::DigitOrSpace => "9",
            MaskKind::DigitSignOrSpace => "#",
            MaskKind::Letter => "L",
            MaskKind::LetterOrSpace => "l",
            MaskKind::Alphanumeric => "A",
            MaskKind::AlphanumericOrSpace => "a",
            MaskKind::DecimalPoint => ".",
            MaskKind::ThousandsSeparator => ",",
            MaskKind::TimeSeparator => ":",
            MaskKind::DateSeparator => "/",
            MaskKind::CurrencySymbol => "$",
            MaskKind::DbcsDigit => "９",
            MaskKind::Hiragana => "Ｊ",
            MaskKind::BigHiragana => "Ｇ",
            MaskKind::Katakana(CharWidth::Wide) => "Ｋ",
            MaskKind::Katakana(CharWidth::Narrow) => "K",
            MaskKind::BigKatakana(CharWidth::Wide) => "Ｎ",
            MaskKind::BigKatakana(CharWidth::Narrow) => "N",
            MaskKind::AnyDbcs => "Ｚ",
            MaskKind::AnySbcs => "H",
        };
        write!(f, "{}", s)
    }
}

impl Debug for MaskKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl Debug for MaskToken {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.kind.is_literal() {
            write!(f, "{:?}{:?}", self.kind, self.literal)
        } else {
            match self.case {
                CaseMode::None => write!(f, "{:?}", self.kind),
                CaseMode::Lower => write!(f, "<{:?}", self.kind),
                CaseMode::Upper => write!(f, ">{:?}", self.kind),
            }
        }
    }
}

impl MaskKind {
    /// Mask char for this kind. None for `\` and `<`, `>`, `|`.
    pub fn from_mask_char(c: char) -> Option<MaskKind> {
        match c {
            '0' => Some(MaskKind::Digit),
            '9' => Some(MaskKind::DigitOrSpace),
            '#' => Some(MaskKind::DigitSignOrSpace),
            'L' => Some(MaskKind::Letter),
            'l' => Some(MaskKind::LetterOrSpace),
            'A' => Some(MaskKind::Alphanumeric),
            'a' => Some(MaskKind::AlphanumericOrSpace),
            '.' => Some(MaskKind::DecimalPoint),
            ',' => Some(MaskKind::ThousandsSeparator),
            ':' => Some(MaskKind::TimeSeparator),
            '/' => Some(MaskKind::DateSeparator),
            '$' => Some(MaskKind::CurrencySymbol),
            '９' => Some(MaskKind::DbcsDigit),
            'Ｊ' => Some(MaskKind::Hiragana),
            'Ｇ' => Some(MaskKind::BigHiragana),
            'Ｋ' => Some(MaskKind::Katakana(CharWidth::Wide)),
            'K' => Some(MaskKind::Katakana(CharWidth::Narrow)),
            'Ｎ' => Some(MaskKind::BigKatakana(CharWidth::Wide)),
            'N' => Some(MaskKind::BigKatakana(CharWidth::Narrow)),
            'Ｚ' => Some(MaskKind::AnyDbcs),
            'H' => Some(MaskKind::AnySbcs),
            _ => None,
        }
    }

    /// Fixed char, not editable.
    #[inline]
    pub fn is_literal(&self) -> bool {
        matches!(
            self,
            MaskKind::Literal
                | MaskKind::DecimalPoint
                | MaskKind::ThousandsSeparator
                | MaskKind::TimeSeparator
                | MaskKind::DateSeparator
                | MaskKind::CurrencySymbol
        )
    }

    /// Can be edited.
    #[inline]
    pub fn is_editable(&self) -> bool {
        !self.is_literal()
    }

    /// A localized separator.
    #[inline]
    pub fn is_localized(&self) -> bool {
        self.is_literal() && *self != MaskKind::Literal
    }

    /// Case conversion applies.
    #[inline]
    pub fn is_alphabetic(&self) -> bool {
        matches!(
            self,
            MaskKind::Letter
                | MaskKind::LetterOrSpace
                | MaskKind::Alphanumeric
                | MaskKind::AlphanumericOrSpace
                | MaskKind::AnySbcs
                | MaskKind::AnyDbcs
        )
    }

    /// Input is not required.
    #[inline]
    pub fn is_optional(&self) -> bool {
        matches!(
            self,
            MaskKind::DigitOrSpace
                | MaskKind::DigitSignOrSpace
                | MaskKind::LetterOrSpace
                | MaskKind::AlphanumericOrSpace
        )
    }

    /// Rewrite typed input to fit the class.
    /// Full-width digits for DBCS digits and conversion between
    /// hiragana and katakana.
    pub fn map_input(&self, c: char) -> char {
        match self {
            MaskKind::DbcsDigit if c.is_ascii_digit() => shift(c, WIDE_OFFSET, true),
            MaskKind::Hiragana | MaskKind::BigHiragana if is_wide_katakana(c) && c != CHOON => {
                shift(c, KANA_OFFSET, false)
            }
            MaskKind::Katakana(CharWidth::Wide) | MaskKind::BigKatakana(CharWidth::Wide)
                if is_hiragana(c) && c != CHOON =>
            {
                shift(c, KANA_OFFSET, true)
            }
            _ => c,
        }
    }

    /// Valid input for this class.
    pub fn is_valid(&self, c: char) -> bool {
        match self {
            MaskKind::Literal
            | MaskKind::DecimalPoint
            | MaskKind::ThousandsSeparator
            | MaskKind::TimeSeparator
            | MaskKind::DateSeparator
            | MaskKind::CurrencySymbol => false,
            MaskKind::Digit => c.is_ascii_digit(),
            MaskKind::DigitOrSpace => c.is_ascii_digit() || c == ' ',
            MaskKind::DigitSignOrSpace => c.is_ascii_digit() || matches!(c, '+' | '-' | ' '),
            MaskKind::Letter => c.is_alphabetic(),
            MaskKind::LetterOrSpace => c.is_alphabetic() || c == ' ',
            MaskKind::Alphanumeric => c.is_alphanumeric(),
            MaskKind::AlphanumericOrSpace => c.is_alphanumeric() || c == ' ',
            MaskKind::DbcsDigit => ('０'..='９').contains(&c),
            MaskKind::Hiragana => is_hiragana(c),
            MaskKind::BigHiragana => is_hiragana(c) && !SMALL_HIRAGANA.contains(c),
            MaskKind::Katakana(CharWidth::Wide) => is_wide_katakana(c),
            MaskKind::Katakana(CharWidth::Narrow) => is_narrow_katakana(c),
            MaskKind::BigKatakana(CharWidth::Wide) => {
                is_wide_katakana(c) && !SMALL_KATAKANA.contains(c)
            }
            MaskKind::BigKatakana(CharWidth::Narrow) => {
                is_narrow_katakana(c) && !SMALL_KATAKANA_NARROW.contains(c)
            }
            MaskKind::AnyDbcs => display_width(c) == 2,
            MaskKind::AnySbcs => !c.is_control() && display_width(c) == 1,
        }
    }
}

impl CaseMode {
    /// Convert the char.
    /// Conversions that don't result in exactly one char are ignored.
    pub fn convert(&self, c: char) -> char {
        match self {
            CaseMode::None => c,
            CaseMode::Lower => single_char(c.to_lowercase(), c),
            CaseMode::Upper => single_char(c.to_uppercase(), c),
        }
    }
}

impl MaskToken {
    /// Literal token.
    pub fn literal(kind: MaskKind, c: char) -> Self {
        debug_assert!(kind.is_literal());
        Self {
            kind,
            literal: c,
            case: CaseMode::None,
        }
    }

    /// Editable token.
    pub fn editable(kind: MaskKind, case: CaseMode) -> Self {
        debug_assert!(kind.is_editable());
        Self {
            kind,
            literal: '\0',
            case: if kind.is_alphabetic() {
                case
            } else {
                CaseMode::None
            },
        }
    }

    /// Can be edited.
    #[inline]
    pub fn is_editable(&self) -> bool {
        self.kind.is_editable()
    }

    /// Fixed char.
    #[inline]
    pub fn is_literal(&self) -> bool {
        self.kind.is_literal()
    }

    /// Map, validate and case-convert the input.
    /// None if the char is not valid here.
    pub fn accept(&self, c: char) -> Option<char> {
        let c = self.kind.map_input(c);
        if self.kind.is_valid(c) {
            Some(self.case.convert(c))
        } else {
            None
        }
    }
}

#[inline]
fn is_hiragana(c: char) -> bool {
    ('\u{3041}'..='\u{3096}').contains(&c) || c == CHOON
}

#[inline]
fn is_wide_katakana(c: char) -> bool {
    ('\u{30A1}'..='\u{30FA}').contains(&c) || c == CHOON
}

#[inline]
fn is_narrow_katakana(c: char) -> bool {
    ('\u{FF66}'..='\u{FF9F}').contains(&c)
}

fn display_width(c: char) -> u64 {
    let mut buf = [0u8; 4];
    unicode_display_width::width(c.encode_utf8(&mut buf))
}

fn single_char(mut it: impl Iterator<Item = char>, c: char) -> char {
    match (it.next(), it.next()) {
        (Some(cc), None) => cc,
        _ => c,
    }
}

fn shift(c: char, offset: u32, up: bool) -> char {
    let cc = if up {
        (c as u32).checked_add(offset)
    } else {
        (c as u32).checked_sub(offset)
    };
    cc.and_then(char::from_u32).unwrap_or(c)
}
