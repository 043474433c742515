use crate::separator::SeparatorTable;
use crate::text_mask_core::mask_compile::compile;
use crate::text_mask_core::mask_op::apply;
use crate::text_mask_core::mask_state::{MaskState, RawValue, Slot};
use crate::text_mask_core::mask_token::MaskToken;
use crate::{MaskError, upos_type};
use log::warn;
use std::cmp::min;
use std::ops::{Range, RangeInclusive};

pub(crate) mod mask_compile;
pub(crate) mod mask_op;
pub(crate) mod mask_state;
pub(crate) mod mask_token;

/// Masked editing core.
///
/// Holds the mask, the compiled tokens, the current value and
/// the cursor. One of these belongs to exactly one input widget.
///
/// The widget either calls [MaskedCore::apply] with the edited text,
/// or uses the keystroke functions [MaskedCore::insert_char],
/// [MaskedCore::remove_prev] and friends.
#[derive(Debug, Clone)]
pub struct MaskedCore {
    // mask as given
    mask: String,
    // culture
    sep: SeparatorTable,
    // compiled mask
    tokens: Vec<MaskToken>,
    // value
    state: MaskState,
    raw_mode: RawValue,
    cursor: upos_type,
}

impl Default for MaskedCore {
    fn default() -> Self {
        Self {
            mask: Default::default(),
            sep: Default::default(),
            tokens: Default::default(),
            state: Default::default(),
            raw_mode: Default::default(),
            cursor: 0,
        }
    }
}

impl MaskedCore {
    pub fn new() -> Self {
        Self::default()
    }

    /// With input mask.
    pub fn with_mask<S: AsRef<str>>(mut self, mask: S) -> Self {
        self.set_mask(mask);
        self
    }

    /// With localized separators.
    pub fn with_separators(mut self, sep: SeparatorTable) -> Self {
        self.set_separators(sep);
        self
    }

    /// With prompt char.
    pub fn with_prompt(mut self, prompt: char) -> Self {
        self.set_prompt(prompt);
        self
    }

    /// With handling of unfilled slots for [MaskedCore::raw_value].
    pub fn with_raw_value_mode(mut self, mode: RawValue) -> Self {
        self.raw_mode = mode;
        self
    }

    /// Changes the mask.
    /// Resets the value to a default.
    pub fn set_mask<S: AsRef<str>>(&mut self, mask: S) {
        self.mask = mask.as_ref().to_string();
        self.tokens = compile(&self.mask, &self.sep);
        self.state = MaskState::new(&self.tokens).with_prompt(self.state.prompt());
        self.set_default_cursor();
    }

    /// Mask as given.
    #[inline]
    pub fn mask(&self) -> &str {
        self.mask.as_str()
    }

    /// Compiled mask.
    #[inline]
    pub fn tokens(&self) -> &[MaskToken] {
        &self.tokens
    }

    /// Set the localized separators.
    /// The mask is recompiled and the value kept.
    pub fn set_separators(&mut self, sep: SeparatorTable) {
        self.sep = sep;
        self.refresh();
    }

    /// Localized separators.
    #[inline]
    pub fn separators(&self) -> &SeparatorTable {
        &self.sep
    }

    /// Prompt char for unfilled slots.
    #[inline]
    pub fn set_prompt(&mut self, prompt: char) {
        self.state.set_prompt(prompt);
    }

    /// Prompt char for unfilled slots.
    #[inline]
    pub fn prompt(&self) -> char {
        self.state.prompt()
    }

    /// Handling of unfilled slots for [MaskedCore::raw_value].
    #[inline]
    pub fn set_raw_value_mode(&mut self, mode: RawValue) {
        self.raw_mode = mode;
    }

    /// Handling of unfilled slots for [MaskedCore::raw_value].
    #[inline]
    pub fn raw_value_mode(&self) -> RawValue {
        self.raw_mode
    }

    /// Recompile the mask with the current separators.
    ///
    /// Literals are localized again, entered chars are kept if they
    /// are still valid.
    pub fn refresh(&mut self) {
        self.tokens = compile(&self.mask, &self.sep);
        self.state = self.state.rebase(&self.tokens);
        self.cursor = min(self.cursor, self.state.len());
    }
}

impl MaskedCore {
    /// Current value.
    #[inline]
    pub fn state(&self) -> &MaskState {
        &self.state
    }

    /// Displayed text with literals and prompt chars.
    #[inline]
    pub fn text(&self) -> String {
        self.state.display()
    }

    /// Length in chars.
    #[inline]
    pub fn len(&self) -> upos_type {
        self.state.len()
    }

    /// Nothing entered.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    /// Value without literals.
    /// Unfilled slots are handled according to [MaskedCore::raw_value_mode].
    #[inline]
    pub fn raw_value(&self) -> String {
        self.state.raw_value(self.raw_mode)
    }

    /// Value without literals.
    #[inline]
    pub fn raw_value_with(&self, mode: RawValue) -> String {
        self.state.raw_value(mode)
    }

    /// All editable slots are filled.
    #[inline]
    pub fn mask_full(&self) -> bool {
        self.state.mask_full()
    }

    /// First to last editable position.
    /// Use this to select everything but leading and trailing literals.
    #[inline]
    pub fn mask_range(&self) -> Option<RangeInclusive<upos_type>> {
        self.state.mask_range()
    }
}

impl MaskedCore {
    /// Cursor position.
    #[inline]
    pub fn cursor(&self) -> upos_type {
        self.cursor
    }

    /// Set the cursor position. Limited to the length of the text.
    pub fn set_cursor(&mut self, cursor: upos_type) -> bool {
        let old = self.cursor;
        self.cursor = min(cursor, self.state.len());
        old != self.cursor
    }

    /// Place the cursor at the first editable slot, 0 otherwise.
    pub fn set_default_cursor(&mut self) {
        self.cursor = self.state.next_editable(0).unwrap_or(0);
    }

    /// Start at the cursor position and skip all literals
    /// until the first editable slot or a literal equal to c.
    ///
    /// Returns false and leaves the cursor if there is no such position.
    pub fn advance_cursor(&mut self, c: char) -> bool {
        if self.state.is_passthrough() {
            return false;
        }

        let mut pos = self.cursor;
        loop {
            match self.state.slot(pos) {
                None => return false,
                Some(Slot::Literal(lit)) if lit == c => break,
                Some(Slot::Literal(_)) => pos += 1,
                Some(_) => break,
            }
        }
        self.cursor = pos;
        true
    }
}

impl MaskedCore {
    /// Reconcile the edited text with the mask.
    ///
    /// Returns false if some char has been rejected. The new cursor
    /// position is available as [MaskedCore::cursor].
    ///
    /// Fails if the text doesn't have one char per mask slot,
    /// the value stays unchanged in that case.
    pub fn apply(&mut self, proposed: &str, caret_hint: upos_type) -> Result<bool, MaskError> {
        let r = apply(&self.tokens, &self.state, proposed, caret_hint)?;
        self.state = r.state;
        self.cursor = r.caret;
        Ok(r.accepted)
    }

    /// Apply an edit we constructed ourselves.
    fn apply_edit(&mut self, proposed: String, caret_hint: upos_type) -> bool {
        match self.apply(&proposed, caret_hint) {
            Ok(accepted) => accepted,
            Err(e) => {
                warn!("edit failed {:?}", e);
                false
            }
        }
    }

    /// Reset the value, but not the mask.
    /// The cursor moves to the first editable slot.
    pub fn clear(&mut self) {
        self.state = self.state.cleared();
        self.set_default_cursor();
    }

    /// Set the complete displayed text.
    /// The text must have one char per mask slot.
    pub fn set_text<S: AsRef<str>>(&mut self, text: S) -> Result<bool, MaskError> {
        let accepted = self.apply(text.as_ref(), 0)?;
        self.set_default_cursor();
        Ok(accepted)
    }

    /// Set the value from the text without literals.
    ///
    /// The chars are typed in one by one starting with the first
    /// editable slot. A prompt char leaves its slot empty.
    ///
    /// Returns false if any char has been rejected.
    pub fn set_raw_value<S: AsRef<str>>(&mut self, raw: S) -> bool {
        if self.state.is_passthrough() {
            return self.apply_edit(raw.as_ref().to_string(), 0);
        }

        self.clear();
        let mut accepted = true;
        for c in raw.as_ref().chars() {
            if self.cursor >= self.state.len() {
                accepted = false;
                break;
            }
            accepted &= self.insert_char(c);
        }
        self.set_default_cursor();
        accepted
    }

    /// Overwrite the slot at the cursor with c.
    ///
    /// Typing the char of a literal steps over the literal.
    /// Typing anything else over a literal puts it into the next
    /// editable slot.
    ///
    /// Returns false if c has been rejected.
    pub fn insert_char(&mut self, c: char) -> bool {
        if self.state.is_passthrough() {
            let mut text = self.text();
            text.insert(byte_pos(&text, self.cursor), c);
            return self.apply_edit(text, self.cursor + 1);
        }

        let Some(slot) = self.state.slot(self.cursor) else {
            return false;
        };
        if slot == Slot::Literal(c) {
            self.cursor += 1;
            return true;
        }
        if self.state.next_editable(self.cursor).is_none() {
            return false;
        }

        let mut text: Vec<char> = self.text().chars().collect();
        text[self.cursor as usize] = c;
        let hint = self
            .state
            .next_editable(self.cursor + 1)
            .unwrap_or(self.state.len());
        self.apply_edit(text.into_iter().collect(), hint)
    }

    /// Clear the editable slot before the cursor.
    /// Literals are skipped.
    pub fn remove_prev(&mut self) -> bool {
        if self.state.is_passthrough() {
            if self.cursor == 0 {
                return false;
            }
            let mut text = self.text();
            text.remove(byte_pos(&text, self.cursor - 1));
            self.apply_edit(text, self.cursor - 1);
            return true;
        }

        let Some(pos) = self.state.prev_editable(self.cursor) else {
            return false;
        };
        self.clear_range(pos..pos + 1, pos);
        true
    }

    /// Clear the editable slot at or after the cursor.
    /// The cursor stays.
    pub fn remove_next(&mut self) -> bool {
        if self.state.is_passthrough() {
            if self.cursor >= self.state.len() {
                return false;
            }
            let mut text = self.text();
            text.remove(byte_pos(&text, self.cursor));
            self.apply_edit(text, self.cursor);
            return true;
        }

        let Some(pos) = self.state.next_editable(self.cursor) else {
            return false;
        };
        self.clear_range(pos..pos + 1, self.cursor);
        true
    }

    /// Clear all editable slots in the range.
    /// The cursor moves to the start of the range.
    pub fn remove_range(&mut self, range: Range<upos_type>) -> Result<bool, MaskError> {
        let len = self.state.len();
        if range.start > len {
            return Err(MaskError::PositionOutOfBounds(range.start, len));
        }
        if range.end > len {
            return Err(MaskError::PositionOutOfBounds(range.end, len));
        }
        if range.is_empty() {
            return Ok(false);
        }

        if self.state.is_passthrough() {
            let text = self.text();
            let start = byte_pos(&text, range.start);
            let end = byte_pos(&text, range.end);
            let mut buf = String::new();
            buf.push_str(&text[..start]);
            buf.push_str(&text[end..]);
            self.apply_edit(buf, range.start);
        } else {
            let start = range.start;
            self.clear_range(range, start);
        }
        Ok(true)
    }

    // write prompts into the range.
    fn clear_range(&mut self, range: Range<upos_type>, caret_hint: upos_type) {
        let prompt = self.state.prompt();
        let text = self
            .state
            .slots()
            .iter()
            .enumerate()
            .map(|(i, v)| {
                if range.contains(&(i as upos_type)) && v.is_editable() {
                    prompt
                } else {
                    v.display(prompt)
                }
            })
            .collect();
        self.apply_edit(text, caret_hint);
    }
}

/// Byte position of a char index. Clamped to the text length.
fn byte_pos(text: &str, pos: upos_type) -> usize {
    text.char_indices()
        .nth(pos as usize)
        .map(|(b, _)| b)
        .unwrap_or(text.len())
}
