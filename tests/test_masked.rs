use rat_mask::MaskError;
use rat_mask::core::{MaskedCore, RawValue};

#[test]
fn test_date() {
    let mut m = MaskedCore::new();
    m.set_mask("00/00/0000");
    assert_eq!(m.text(), "__/__/____");
    assert_eq!(m.cursor(), 0);

    m.insert_char('1');
    assert_eq!(m.cursor(), 1);
    m.insert_char('2');
    assert_eq!(m.cursor(), 3);
    for c in "252024".chars() {
        assert!(m.insert_char(c));
    }
    assert_eq!(m.text(), "12/25/2024");
    assert_eq!(m.raw_value(), "12252024");
    assert!(m.mask_full());
    assert_eq!(m.cursor(), 10);

    // nothing left
    assert!(!m.insert_char('1'));
    assert_eq!(m.text(), "12/25/2024");
}

#[test]
fn test_letters_upper() {
    let mut m = MaskedCore::new();
    m.set_mask(">LL-9999");
    assert_eq!(m.text(), "__-____");

    assert!(m.insert_char('a'));
    assert_eq!(m.text(), "A_-____");
    assert_eq!(m.cursor(), 1);

    // digit for a letter
    assert!(!m.insert_char('1'));
    assert_eq!(m.text(), "A_-____");
    assert_eq!(m.cursor(), 1);

    assert!(m.insert_char('b'));
    assert_eq!(m.text(), "AB-____");
    assert_eq!(m.cursor(), 3);
    assert!(m.insert_char('1'));
    assert_eq!(m.text(), "AB-1___");
    assert_eq!(m.cursor(), 4);
}

#[test]
fn test_letters() {
    let mut m = MaskedCore::new();
    m.set_mask("AA-9999");
    m.insert_char('a');
    m.insert_char('b');
    m.insert_char('1');
    assert_eq!(m.text(), "ab-1___");
    assert_eq!(m.raw_value(), "ab1");
    assert!(!m.mask_full());
}

#[test]
fn test_literal_step() {
    let mut m = MaskedCore::new().with_mask("AA-9999");
    m.insert_char('a');
    m.insert_char('b');

    // typing the literal steps over it.
    m.set_cursor(2);
    assert!(m.insert_char('-'));
    assert_eq!(m.cursor(), 3);
    assert_eq!(m.text(), "ab-____");

    // anything else goes to the next slot.
    m.set_cursor(2);
    assert!(m.insert_char('1'));
    assert_eq!(m.text(), "ab-1___");
    assert_eq!(m.cursor(), 4);

    // and is still validated there.
    m.set_cursor(2);
    assert!(!m.insert_char('x'));
    assert_eq!(m.text(), "ab-1___");
    assert_eq!(m.cursor(), 3);
}

#[test]
fn test_case() {
    let mut m = MaskedCore::new().with_mask(">L0");
    m.insert_char('a');
    m.insert_char('7');
    assert_eq!(m.text(), "A7");
    assert_eq!(m.raw_value(), "A7");
    assert!(m.mask_full());

    let mut m = MaskedCore::new().with_mask("<LLL");
    assert_eq!(m.set_text("ABC"), Ok(true));
    assert_eq!(m.text(), "abc");
}

#[test]
fn test_passthrough() {
    let mut m = MaskedCore::new();
    assert!(m.mask_full());
    assert!(m.is_empty());
    assert_eq!(m.mask_range(), None);

    assert_eq!(m.apply("anything", 3), Ok(true));
    assert_eq!(m.text(), "anything");
    assert_eq!(m.raw_value(), "anything");
    assert_eq!(m.cursor(), 3);
    assert!(m.mask_full());
    assert_eq!(m.mask_range(), Some(0..=7));

    m.set_cursor(8);
    assert!(m.insert_char('!'));
    assert_eq!(m.text(), "anything!");
    assert_eq!(m.cursor(), 9);
    assert!(m.remove_prev());
    assert_eq!(m.text(), "anything");
    assert_eq!(m.cursor(), 8);

    m.set_cursor(0);
    assert!(m.remove_next());
    assert_eq!(m.text(), "nything");
    assert_eq!(m.remove_range(0..3), Ok(true));
    assert_eq!(m.text(), "hing");

    assert!(m.set_raw_value("äöü"));
    assert_eq!(m.text(), "äöü");
    m.set_cursor(1);
    m.insert_char('x');
    assert_eq!(m.text(), "äxöü");
}

#[test]
fn test_remove_last() {
    let mut m = MaskedCore::new().with_mask("000");
    assert_eq!(m.set_text("123"), Ok(true));
    assert!(m.mask_full());

    m.set_cursor(3);
    assert!(m.remove_prev());
    assert_eq!(m.text(), "12_");
    assert_eq!(m.cursor(), 2);
    assert!(!m.mask_full());
    assert_eq!(m.raw_value(), "12");
    assert_eq!(m.raw_value_with(RawValue::Prompt), "12_");
}

#[test]
fn test_remove() {
    let mut m = MaskedCore::new().with_mask("00-00");
    assert_eq!(m.set_text("12-34"), Ok(true));
    assert_eq!(m.cursor(), 0);

    // skips the literal
    m.set_cursor(3);
    assert!(m.remove_prev());
    assert_eq!(m.text(), "1_-34");
    assert_eq!(m.cursor(), 1);

    m.set_cursor(2);
    assert!(m.remove_next());
    assert_eq!(m.text(), "1_-_4");
    assert_eq!(m.cursor(), 2);

    m.set_cursor(0);
    assert!(!m.remove_prev());
    m.set_cursor(5);
    assert!(!m.remove_next());

    assert_eq!(m.remove_range(0..5), Ok(true));
    assert_eq!(m.text(), "__-__");
    assert_eq!(m.cursor(), 0);
    assert!(m.is_empty());

    assert_eq!(m.remove_range(3..9), Err(MaskError::PositionOutOfBounds(9, 5)));
    assert_eq!(m.remove_range(2..2), Ok(false));
}

#[test]
fn test_clear() {
    let mut m = MaskedCore::new().with_mask("(000) 000");
    assert_eq!(m.cursor(), 1);
    assert_eq!(m.mask_range(), Some(1..=8));

    assert!(m.set_raw_value("123456"));
    assert_eq!(m.text(), "(123) 456");
    assert_eq!(m.cursor(), 1);
    assert!(!m.is_empty());

    m.set_cursor(7);
    m.clear();
    assert_eq!(m.text(), "(___) ___");
    assert_eq!(m.cursor(), 1);
    assert!(m.is_empty());
    assert_eq!(m.mask(), "(000) 000");
}

#[test]
fn test_raw_value_overflow() {
    let mut m = MaskedCore::new().with_mask("00");
    assert!(!m.set_raw_value("123"));
    assert_eq!(m.text(), "12");

    assert!(!m.set_raw_value("1x"));
    assert_eq!(m.text(), "1_");
}

#[test]
fn test_advance_cursor() {
    let mut m = MaskedCore::new().with_mask("(000) 000");
    m.set_cursor(0);
    assert!(m.advance_cursor('1'));
    assert_eq!(m.cursor(), 1);

    m.set_cursor(4);
    assert!(m.advance_cursor(' '));
    assert_eq!(m.cursor(), 5);

    m.set_cursor(4);
    assert!(m.advance_cursor('1'));
    assert_eq!(m.cursor(), 6);

    m.set_cursor(9);
    assert!(!m.advance_cursor('1'));
    assert_eq!(m.cursor(), 9);

    let mut m = MaskedCore::new().with_mask("0--");
    m.set_cursor(1);
    assert!(!m.advance_cursor('1'));
    assert_eq!(m.cursor(), 1);
}

#[test]
fn test_prompt() {
    let mut m = MaskedCore::new().with_prompt('*').with_mask("00-00");
    assert_eq!(m.text(), "**-**");
    m.insert_char('1');
    assert_eq!(m.text(), "1*-**");
    assert_eq!(m.raw_value_with(RawValue::Prompt), "1***");

    // typing the prompt into an empty slot does nothing.
    assert!(m.insert_char('*'));
    assert_eq!(m.text(), "1*-**");

    m.set_prompt(' ');
    assert_eq!(m.text(), "1 -  ");
    assert_eq!(m.prompt(), ' ');

    // the prompt survives a new mask
    m.set_mask("000");
    assert_eq!(m.text(), "   ");
}

#[test]
fn test_set_text() {
    let mut m = MaskedCore::new().with_mask("00-00");
    assert_eq!(m.set_text("12-x4"), Ok(false));
    assert_eq!(m.text(), "12-_4");

    assert_eq!(m.set_text("123"), Err(MaskError::LengthMismatch(5, 3)));
    assert_eq!(m.text(), "12-_4");

    assert_eq!(m.set_text("__-__"), Ok(true));
    assert!(m.is_empty());
}
