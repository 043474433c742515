use crate::text_mask_core::mask_token::MaskToken;
use crate::upos_type;
use log::debug;
use std::ops::RangeInclusive;

/// Content of one position of the mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    /// Fixed char from the mask.
    Literal(char),
    /// Editable, nothing entered.
    Empty,
    /// Editable with input.
    Filled(char),
}

/// How to report unfilled slots in the raw value.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum RawValue {
    /// Unfilled slots are left out.
    #[default]
    Omit,
    /// Unfilled slots are reported as the prompt char.
    Prompt,
}

/// Current value of a masked input.
///
/// There is one slot for each token of the compiled mask.
/// Without a mask the state holds the plain text instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaskState {
    slots: Vec<Slot>,
    plain: String,
    prompt: char,
}

impl Default for MaskState {
    fn default() -> Self {
        Self {
            slots: Default::default(),
            plain: Default::default(),
            prompt: '_',
        }
    }
}

impl Slot {
    #[inline]
    pub fn is_editable(&self) -> bool {
        !matches!(self, Slot::Literal(_))
    }

    #[inline]
    pub fn is_filled(&self) -> bool {
        matches!(self, Slot::Filled(_))
    }

    /// Char shown for this slot.
    #[inline]
    pub fn display(&self, prompt: char) -> char {
        match self {
            Slot::Literal(c) | Slot::Filled(c) => *c,
            Slot::Empty => prompt,
        }
    }
}

impl MaskState {
    /// Empty state for the given mask.
    pub fn new(tokens: &[MaskToken]) -> Self {
        Self {
            slots: empty_slots(tokens),
            ..Default::default()
        }
    }

    /// Set the prompt char.
    pub fn with_prompt(mut self, prompt: char) -> Self {
        self.prompt = prompt;
        self
    }

    /// Prompt char for unfilled slots.
    #[inline]
    pub fn prompt(&self) -> char {
        self.prompt
    }

    /// Prompt char for unfilled slots.
    #[inline]
    pub fn set_prompt(&mut self, prompt: char) {
        self.prompt = prompt;
    }

    /// All slots.
    #[inline]
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// Slot at the position.
    #[inline]
    pub fn slot(&self, pos: upos_type) -> Option<Slot> {
        self.slots.get(pos as usize).copied()
    }

    /// No mask active, the text is used as is.
    #[inline]
    pub fn is_passthrough(&self) -> bool {
        self.slots.is_empty()
    }

    /// Display length in chars.
    pub fn len(&self) -> upos_type {
        if self.is_passthrough() {
            self.plain.chars().count() as upos_type
        } else {
            self.slots.len() as upos_type
        }
    }

    /// Nothing has been entered.
    pub fn is_empty(&self) -> bool {
        if self.is_passthrough() {
            self.plain.is_empty()
        } else {
            !self.slots.iter().any(|v| v.is_filled())
        }
    }

    /// Text with literals and prompt chars.
    pub fn display(&self) -> String {
        if self.is_passthrough() {
            self.plain.clone()
        } else {
            self.slots.iter().map(|v| v.display(self.prompt)).collect()
        }
    }

    /// Text without literals.
    pub fn raw_value(&self, mode: RawValue) -> String {
        if self.is_passthrough() {
            return self.plain.clone();
        }
        let mut buf = String::new();
        for slot in &self.slots {
            match (slot, mode) {
                (Slot::Literal(_), _) => {}
                (Slot::Filled(c), _) => buf.push(*c),
                (Slot::Empty, RawValue::Omit) => {}
                (Slot::Empty, RawValue::Prompt) => buf.push(self.prompt),
            }
        }
        buf
    }

    /// All editable slots are filled.
    pub fn mask_full(&self) -> bool {
        self.slots.iter().all(|v| !matches!(v, Slot::Empty))
    }

    /// First to last editable position.
    pub fn mask_range(&self) -> Option<RangeInclusive<upos_type>> {
        if self.is_passthrough() {
            let len = self.len();
            return if len > 0 { Some(0..=len - 1) } else { None };
        }
        let first = self.slots.iter().position(|v| v.is_editable())?;
        let last = self.slots.iter().rposition(|v| v.is_editable())?;
        Some(first as upos_type..=last as upos_type)
    }

    /// First editable position at or after pos.
    pub fn next_editable(&self, pos: upos_type) -> Option<upos_type> {
        self.slots
            .iter()
            .enumerate()
            .skip(pos as usize)
            .find(|(_, v)| v.is_editable())
            .map(|(i, _)| i as upos_type)
    }

    /// Last editable position before pos.
    pub fn prev_editable(&self, pos: upos_type) -> Option<upos_type> {
        let end = (pos as usize).min(self.slots.len());
        self.slots[..end]
            .iter()
            .rposition(|v| v.is_editable())
            .map(|i| i as upos_type)
    }

    /// Keep the content for a changed mask.
    ///
    /// Literals are taken from the tokens. Editable slots keep their
    /// char if it is still valid for the token, otherwise they are reset.
    /// If the number of slots differs the result is an empty state.
    /// Without a mask the plain text is kept.
    pub fn rebase(&self, tokens: &[MaskToken]) -> MaskState {
        if tokens.is_empty() && self.is_passthrough() {
            return self.clone();
        }
        if tokens.len() != self.slots.len() {
            return MaskState::new(tokens).with_prompt(self.prompt);
        }

        let slots = tokens
            .iter()
            .zip(self.slots.iter())
            .enumerate()
            .map(|(i, (t, s))| match (t.is_literal(), s) {
                (true, _) => Slot::Literal(t.literal),
                (false, Slot::Filled(c)) if t.kind.is_valid(*c) => Slot::Filled(*c),
                (false, Slot::Filled(c)) => {
                    debug!("rebase drops {:?} at {}, not valid for {:?}", c, i, t);
                    Slot::Empty
                }
                (false, _) => Slot::Empty,
            })
            .collect();

        MaskState {
            slots,
            plain: Default::default(),
            prompt: self.prompt,
        }
    }

    /// Reset all editable slots.
    pub fn cleared(&self) -> MaskState {
        MaskState {
            slots: self
                .slots
                .iter()
                .map(|v| match v {
                    Slot::Literal(c) => Slot::Literal(*c),
                    _ => Slot::Empty,
                })
                .collect(),
            plain: Default::default(),
            prompt: self.prompt,
        }
    }

    pub(crate) fn set_slot(&mut self, pos: usize, slot: Slot) {
        self.slots[pos] = slot;
    }

    pub(crate) fn set_plain(&mut self, text: &str) {
        self.plain.clear();
        self.plain.push_str(text);
    }
}

fn empty_slots(tokens: &[MaskToken]) -> Vec<Slot> {
    tokens
        .iter()
        .map(|t| {
            if t.is_literal() {
                Slot::Literal(t.literal)
            } else {
                Slot::Empty
            }
        })
        .collect()
}
