use crate::separator::SeparatorTable;
use crate::text_mask_core::mask_token::{CaseMode, MaskKind, MaskToken};
use log::debug;
use std::fmt::Write;

/// Parse the mask.
///
/// * `0`: digit
/// * `9`: digit or space
/// * `#`: digit, sign or space
/// * `L`: letter
/// * `l`: letter or space
/// * `A`: letter or digit
/// * `a`: letter, digit or space
/// * `.`, `,`, `:`, `/`, `$`: decimal, grouping, time and date separator and currency.
///   Localized with the separator table.
/// * `<`, `>`, `|`: lowercase, uppercase, no conversion for the following chars.
/// * `\`: escapes the next char.
/// * `９`: full-width digit
/// * `Ｊ`, `Ｇ`: hiragana, big hiragana
/// * `Ｋ`, `Ｎ`: full-width katakana, big katakana
/// * `K`, `N`: half-width katakana, big katakana
/// * `Ｚ`: any full-width char
/// * `H`: any half-width char
///
/// Everything else is a literal. An empty mask gives no tokens at all.
pub fn compile(mask: &str, sep: &SeparatorTable) -> Vec<MaskToken> {
    let mut out = Vec::new();
    let mut case = CaseMode::None;

    let mut it = mask.chars();
    while let Some(c) = it.next() {
        match c {
            '\\' => {
                let lit = it.next().unwrap_or('\\');
                out.push(MaskToken::literal(MaskKind::Literal, lit));
            }
            '<' => case = CaseMode::Lower,
            '>' => case = CaseMode::Upper,
            '|' => case = CaseMode::None,
            c => match MaskKind::from_mask_char(c) {
                Some(kind) if kind.is_localized() => {
                    let lit = match sep.lookup(c) {
                        Some(lit) => lit,
                        None => {
                            debug!("no symbol for {:?}, use mask char", c);
                            c
                        }
                    };
                    out.push(MaskToken::literal(kind, lit));
                }
                Some(kind) => out.push(MaskToken::editable(kind, case)),
                None => out.push(MaskToken::literal(MaskKind::Literal, c)),
            },
        }
    }

    debug!("compile {:?} -> {:?}", mask, out);
    out
}

/// Write the tokens as mask string.
///
/// Localized separators are written as their mask chars, which
/// makes this the inverse of [compile] for any separator table.
pub fn tokens_to_mask(tokens: &[MaskToken]) -> String {
    let mut buf = String::new();
    let mut case = CaseMode::None;
    for t in tokens {
        if t.kind == MaskKind::Literal {
            if is_mask_char(t.literal) {
                buf.push('\\');
            }
            buf.push(t.literal);
        } else if t.kind.is_localized() {
            _ = write!(buf, "{}", t.kind);
        } else {
            if t.kind.is_alphabetic() && t.case != case {
                buf.push(match t.case {
                    CaseMode::None => '|',
                    CaseMode::Lower => '<',
                    CaseMode::Upper => '>',
                });
                case = t.case;
            }
            _ = write!(buf, "{}", t.kind);
        }
    }
    buf
}

fn is_mask_char(c: char) -> bool {
    matches!(c, '\\' | '<' | '>' | '|') || MaskKind::from_mask_char(c).is_some()
}
