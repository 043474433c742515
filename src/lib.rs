#![doc = include_str!("../readme.md")]
#![allow(clippy::uninlined_format_args)]
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod separator;
mod text_mask_core;

pub use pure_rust_locales::Locale;
pub use separator::SeparatorTable;

pub mod core {
    //!
    //! Core structs for masked editing.
    //! The engine [MaskedCore] is what a text widget holds,
    //! the rest can be used directly for custom widgets.
    //!

    pub use crate::text_mask_core::MaskedCore;
    pub use crate::text_mask_core::mask_compile::{compile, tokens_to_mask};
    pub use crate::text_mask_core::mask_op::{Applied, apply};
    pub use crate::text_mask_core::mask_state::{MaskState, RawValue, Slot};
    pub use crate::text_mask_core::mask_token::{CaseMode, CharWidth, MaskKind, MaskToken};
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MaskError {
    /// The proposed text doesn't have one char per mask slot.
    ///
    /// Contains the slot count of the mask and the char count
    /// of the proposed text, in that order.
    LengthMismatch(upos_type, upos_type),
    /// The state was not created for this mask.
    ///
    /// Contains the slot count of the mask and the slot count
    /// of the state, in that order.
    StateMismatch(upos_type, upos_type),
    /// Indicates that the passed position was out of bounds.
    ///
    /// Contains the position and the length of the mask.
    PositionOutOfBounds(upos_type, upos_type),
}

impl Display for MaskError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl Error for MaskError {}

/// Slot/Cursor type.
#[allow(non_camel_case_types)]
pub type upos_type = u32;

mod _private {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct NonExhaustive;
}
