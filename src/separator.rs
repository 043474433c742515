//!
//! Localized separators used by the mask.
//!
//! The mask chars `.`, `,`, `:`, `/` and `$` are replaced with
//! the symbols from a [SeparatorTable] when the mask is compiled.
//!

use format_num_pattern::NumberSymbols;
use pure_rust_locales::{Locale, locale_match};

/// Culture dependent symbols for the mask.
///
/// Any missing entry falls back to the mask char itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeparatorTable {
    /// Replaces `.`
    pub decimal_sep: Option<char>,
    /// Replaces `,`
    pub group_sep: Option<char>,
    /// Replaces `:`
    pub time_sep: Option<char>,
    /// Replaces `/`
    pub date_sep: Option<char>,
    /// Replaces `$`. Only the first char is used,
    /// one mask char is always one slot.
    pub currency_sym: Option<Box<str>>,
}

impl Default for SeparatorTable {
    /// Invariant culture.
    fn default() -> Self {
        Self {
            decimal_sep: Some('.'),
            group_sep: Some(','),
            time_sep: Some(':'),
            date_sep: Some('/'),
            currency_sym: Some("$".into()),
        }
    }
}

impl SeparatorTable {
    /// Invariant culture.
    pub fn new() -> Self {
        Self::default()
    }

    /// No symbols at all.
    pub fn empty() -> Self {
        Self {
            decimal_sep: None,
            group_sep: None,
            time_sep: None,
            date_sep: None,
            currency_sym: None,
        }
    }

    /// Decimal and grouping separator from number symbols.
    /// Everything else is the invariant culture.
    pub fn from_symbols(sym: &NumberSymbols) -> Self {
        Self {
            decimal_sep: Some(sym.decimal_sep),
            group_sep: sym.decimal_grp,
            ..Self::default()
        }
    }

    /// Symbols for the given locale.
    pub fn from_locale(loc: Locale) -> Self {
        let sym = NumberSymbols::numeric(loc);
        let t_fmt = locale_match!(loc => LC_TIME::T_FMT);
        let d_fmt = locale_match!(loc => LC_TIME::D_FMT);
        let currency = locale_match!(loc => LC_MONETARY::CURRENCY_SYMBOL);

        Self {
            decimal_sep: Some(sym.decimal_sep),
            group_sep: sym.decimal_grp,
            time_sep: fmt_separator(t_fmt),
            date_sep: fmt_separator(d_fmt),
            currency_sym: if currency.is_empty() {
                None
            } else {
                Some(currency.into())
            },
        }
    }

    pub fn decimal_sep(mut self, c: char) -> Self {
        self.decimal_sep = Some(c);
        self
    }

    pub fn group_sep(mut self, c: char) -> Self {
        self.group_sep = Some(c);
        self
    }

    pub fn time_sep(mut self, c: char) -> Self {
        self.time_sep = Some(c);
        self
    }

    pub fn date_sep(mut self, c: char) -> Self {
        self.date_sep = Some(c);
        self
    }

    pub fn currency_sym(mut self, sym: impl AsRef<str>) -> Self {
        let sym = sym.as_ref();
        self.currency_sym = if sym.is_empty() {
            None
        } else {
            Some(sym.into())
        };
        self
    }

    /// Symbol for one of the separator mask chars.
    /// None if the char is no separator or the culture has no symbol.
    pub fn lookup(&self, mask_c: char) -> Option<char> {
        match mask_c {
            '.' => self.decimal_sep,
            ',' => self.group_sep,
            ':' => self.time_sep,
            '/' => self.date_sep,
            '$' => self.currency_sym.as_ref().and_then(|v| v.chars().next()),
            _ => None,
        }
    }
}

/// First char of a strftime pattern that is not part of a
/// conversion and not whitespace.
fn fmt_separator(fmt: &str) -> Option<char> {
    let mut it = fmt.chars();
    while let Some(c) = it.next() {
        if c == '%' {
            // flags and modifiers, then the conversion itself.
            for cc in it.by_ref() {
                if !matches!(cc, '-' | '_' | '0' | '^' | '#' | 'E' | 'O') {
                    break;
                }
            }
        } else if !c.is_whitespace() {
            return Some(c);
        }
    }
    None
}
