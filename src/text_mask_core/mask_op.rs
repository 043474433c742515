use crate::_private::NonExhaustive;
use crate::text_mask_core::mask_state::{MaskState, Slot};
use crate::text_mask_core::mask_token::MaskToken;
use crate::{MaskError, upos_type};
use log::{debug, warn};
use std::cmp::min;
use std::collections::VecDeque;

/// Result of [apply].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Applied {
    /// New state.
    pub state: MaskState,
    /// New caret position.
    pub caret: upos_type,
    /// No char has been rejected.
    pub accepted: bool,
    /// First position where a char has been rejected.
    pub rejected: Option<upos_type>,

    pub non_exhaustive: NonExhaustive,
}

/// Reconcile an edited text with the mask.
///
/// The host overwrites the displayed text with a keystroke, a deletion
/// or a paste and calls this with the result. The text must have exactly
/// one char per token.
///
/// * Literals always keep their char. A char typed over a literal
///   moves on to the next editable slot. If there is none left
///   the char is rejected at the position where it was typed.
/// * A changed editable slot is validated against its class and case
///   converted. Invalid input is rejected and the slot keeps its content.
/// * The prompt char deletes the slot.
///
/// The caret ends up at the first rejected slot, or at the next editable
/// slot after the last one written, or at the caret_hint if nothing
/// was written.
///
/// Without tokens the text is taken as is.
pub fn apply(
    tokens: &[MaskToken],
    prev: &MaskState,
    proposed: &str,
    caret_hint: upos_type,
) -> Result<Applied, MaskError> {
    if tokens.is_empty() {
        let mut state = MaskState::default().with_prompt(prev.prompt());
        state.set_plain(proposed);
        let caret = min(caret_hint, state.len());
        return Ok(Applied {
            state,
            caret,
            accepted: true,
            rejected: None,
            non_exhaustive: NonExhaustive,
        });
    }

    let len = tokens.len() as upos_type;
    if prev.slots().len() != tokens.len() {
        warn!(
            "state with {} slots for a mask with {}",
            prev.slots().len(),
            len
        );
        return Err(MaskError::StateMismatch(len, prev.slots().len() as upos_type));
    }
    let proposed_len = proposed.chars().count() as upos_type;
    if proposed_len != len {
        warn!("proposed text {:?} doesn't fit the mask", proposed);
        return Err(MaskError::LengthMismatch(len, proposed_len));
    }

    let prompt = prev.prompt();
    let mut state = prev.clone();
    // chars typed over literals, waiting for the next editable slot.
    // with the position where they were typed.
    let mut carry: VecDeque<(usize, char)> = VecDeque::new();
    let mut last_written = None;
    let mut rejected = None;

    for (i, (t, c)) in tokens.iter().zip(proposed.chars()).enumerate() {
        let old = prev.slots()[i];

        if t.is_literal() {
            state.set_slot(i, Slot::Literal(t.literal));
            if c != t.literal && c != prompt {
                carry.push_back((i, c));
            }
            continue;
        }

        let changed = c != old.display(prompt);
        let input = if let Some((_, cc)) = carry.pop_front() {
            if changed && c != prompt {
                carry.push_back((i, c));
            }
            Some(cc)
        } else if !changed {
            None
        } else if c == prompt {
            state.set_slot(i, Slot::Empty);
            None
        } else {
            Some(c)
        };

        if let Some(cc) = input {
            if let Some(cc) = t.accept(cc) {
                state.set_slot(i, Slot::Filled(cc));
                last_written = Some(i);
            } else {
                debug!("reject {:?} at {} for {:?}", cc, i, t);
                carry.clear();
                if rejected.is_none() {
                    rejected = Some(i as upos_type);
                }
            }
        }
    }

    if let Some((pos, _)) = carry.front() {
        debug!("no slot left for {:?}", carry);
        if rejected.is_none() {
            rejected = Some(*pos as upos_type);
        }
    }

    let caret = if let Some(rejected) = rejected {
        rejected
    } else if let Some(last) = last_written {
        state.next_editable(last as upos_type + 1).unwrap_or(len)
    } else {
        min(caret_hint, len)
    };

    Ok(Applied {
        state,
        caret,
        accepted: rejected.is_none(),
        rejected,
        non_exhaustive: NonExhaustive,
    })
}
