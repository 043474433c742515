use rat_mask::core::{MaskState, MaskedCore, RawValue, apply, compile};
use rat_mask::{Locale, SeparatorTable};

#[test]
fn test_relocalize() {
    let mut m = MaskedCore::new().with_mask("#,##0.00");
    assert_eq!(m.text(), "_,___.__");
    assert_eq!(m.set_text("1,234.56"), Ok(true));
    m.set_cursor(5);

    m.set_separators(SeparatorTable::new().decimal_sep(',').group_sep('.'));
    assert_eq!(m.text(), "1.234,56");
    assert_eq!(m.raw_value(), "123456");
    assert_eq!(m.cursor(), 5);
    assert_eq!(m.mask(), "#,##0.00");

    m.set_separators(SeparatorTable::default());
    assert_eq!(m.text(), "1,234.56");

    m.set_separators(SeparatorTable::empty());
    assert_eq!(m.text(), "1,234.56");
    assert!(m.mask_full());
}

#[test]
fn test_refresh_keeps_value() {
    let mut m = MaskedCore::new().with_mask("00:00 $");
    m.set_raw_value("1230");
    assert_eq!(m.text(), "12:30 $");

    m.set_separators(SeparatorTable::new().time_sep('.').currency_sym("€"));
    assert_eq!(m.text(), "12.30 €");
    m.refresh();
    assert_eq!(m.text(), "12.30 €");
    assert_eq!(m.raw_value(), "1230");
}

#[test]
fn test_rebase() {
    let sep = SeparatorTable::default();
    let tokens = compile("LLL", &sep);
    let state = apply(&tokens, &MaskState::new(&tokens), "abc", 0)
        .expect("fits")
        .state;

    let r = state.rebase(&compile("L0L", &sep));
    assert_eq!(r.display(), "a_c");

    let r = state.rebase(&compile("L-L", &sep));
    assert_eq!(r.display(), "a-c");

    // different length starts over
    let r = state.rebase(&compile("LLLL", &sep));
    assert_eq!(r.display(), "____");
    assert!(r.is_empty());
}

#[test]
fn test_locale() {
    let sep = SeparatorTable::from_locale(Locale::en_US);
    assert_eq!(sep.decimal_sep, Some('.'));
    assert_eq!(sep.date_sep, Some('/'));

    let sep = SeparatorTable::from_locale(Locale::de_DE);
    assert_eq!(sep.decimal_sep, Some(','));
    assert_eq!(sep.date_sep, Some('.'));

    let mut m = MaskedCore::new()
        .with_separators(SeparatorTable::from_locale(Locale::de_DE))
        .with_mask("00/00/0000");
    assert_eq!(m.text(), "__.__.____");
    m.set_raw_value("24122024");
    assert_eq!(m.text(), "24.12.2024");
}

#[test]
fn test_raw_value_modes() {
    let mut m = MaskedCore::new().with_mask("00-00");
    assert_eq!(m.set_text("1_-3_"), Ok(true));
    assert_eq!(m.raw_value_mode(), RawValue::Omit);
    assert_eq!(m.raw_value(), "13");
    assert_eq!(m.raw_value_with(RawValue::Prompt), "1_3_");

    m.set_raw_value_mode(RawValue::Prompt);
    assert_eq!(m.raw_value(), "1_3_");

    // round trip
    let mut m2 = MaskedCore::new()
        .with_mask("00-00")
        .with_raw_value_mode(RawValue::Prompt);
    assert!(m2.set_raw_value(m.raw_value()));
    assert_eq!(m2.text(), "1_-3_");
    assert_eq!(m2.raw_value(), m.raw_value());

    // omitted slots move the rest forward
    let mut m3 = MaskedCore::new().with_mask("00-00");
    assert!(m3.set_raw_value(m.raw_value_with(RawValue::Omit)));
    assert_eq!(m3.text(), "13-__");
}

#[test]
fn test_round_trip() {
    for (mask, raw) in [
        ("00/00/0000", "12252024"),
        ("(999) 000-0000", "5551234567"),
        (">LL-9999", "AB12 4"),
        ("#,##0.00", "-12345"),
        ("ＫＫ９", "カナ１"),
    ] {
        let mut m = MaskedCore::new().with_mask(mask);
        assert!(m.set_raw_value(raw), "{}", mask);
        assert_eq!(m.raw_value(), raw, "{}", mask);
        assert!(m.mask_full(), "{}", mask);

        let mut m2 = MaskedCore::new().with_mask(mask);
        assert_eq!(m2.set_text(m.text()), Ok(true));
        assert_eq!(m2.raw_value(), raw, "{}", mask);
    }
}

#[test]
fn test_dbcs() {
    let mut m = MaskedCore::new().with_mask("９９");
    m.insert_char('1');
    m.insert_char('２');
    assert_eq!(m.text(), "１２");

    let mut m = MaskedCore::new().with_mask("ＪＪ");
    assert!(m.insert_char('カ'));
    assert!(m.insert_char('な'));
    assert_eq!(m.text(), "かな");

    let mut m = MaskedCore::new().with_mask("ＫＫ");
    assert!(m.insert_char('か'));
    assert!(!m.insert_char('a'));
    assert_eq!(m.text(), "カ_");

    let mut m = MaskedCore::new().with_mask("ＧＮ");
    assert!(!m.insert_char('ぁ'));
    assert!(m.insert_char('あ'));
    assert!(!m.insert_char('ッ'));
    assert!(m.insert_char('ア'));
    assert_eq!(m.text(), "あア");

    let mut m = MaskedCore::new().with_mask("KN");
    assert!(m.insert_char('ｯ'));
    assert!(!m.insert_char('ｯ'));
    assert!(m.insert_char('ｱ'));
    assert_eq!(m.text(), "ｯｱ");

    let mut m = MaskedCore::new().with_mask(">ＺH");
    assert!(!m.insert_char('a'));
    assert!(m.insert_char('漢'));
    assert!(!m.insert_char('字'));
    assert!(m.insert_char('a'));
    assert_eq!(m.text(), "漢A");
}

#[test]
fn test_refresh_passthrough() {
    let mut m = MaskedCore::new();
    assert_eq!(m.apply("hello", 5), Ok(true));

    m.set_separators(SeparatorTable::new().decimal_sep(',').group_sep('.'));
    assert_eq!(m.text(), "hello");
    assert_eq!(m.raw_value(), "hello");
    assert_eq!(m.cursor(), 5);

    m.refresh();
    assert_eq!(m.text(), "hello");

    let state = m.state().clone();
    assert_eq!(state.rebase(&[]), state);
}
