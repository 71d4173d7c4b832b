//! Pluggable payload behavior for the queue engine.
//!
//! ## Design
//!
//! The engine stores two payloads per node: an element and the priority
//! that orders it. Instead of funneling both through function pointers,
//! the behavior contract is expressed as two small traits the payload
//! types implement:
//!
//! - [`QueueElement`]: fallible deep copy + identity comparison
//! - [`QueuePriority`]: fallible deep copy + ordering comparison
//!
//! Releasing a payload is just `Drop`, so there is no free hook.
//!
//! ## Copy Fallibility
//!
//! `try_clone` exists so a payload can refuse to copy (for example when a
//! nested structure fails to duplicate). The engine treats any such refusal
//! as [`QueueError::OutOfMemory`] and leaves the queue untouched, with the
//! single documented exception of a mid-flight `change_priority`, which
//! rolls the removed node back into place.

use std::cmp::Ordering;

use thiserror::Error;

// ============================================================================
// Status vocabulary
// ============================================================================

/// Errors reported by fallible queue operations.
///
/// The remaining C-style status codes collapse at compile time: a required
/// argument cannot be absent behind a reference, and an absent queue cannot
/// be asked for its size, so there is no null-argument variant and no `-1`
/// size sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum QueueError {
    /// A payload deep copy was refused mid-operation.
    #[error("payload copy failed: out of memory")]
    OutOfMemory,

    /// No node matched the requested identity (and priority, for
    /// re-prioritization) during a removal or priority change.
    #[error("no element in the queue matches the given identity")]
    ElementNotFound,
}

// ============================================================================
// Behavior traits
// ============================================================================

/// Element payload behavior: deep copy and identity.
///
/// Identity is deliberately independent of priority. Two elements may be
/// "the same" (say, two snapshots of event #7) while sitting under
/// different priorities; lookups such as `contains` and `remove_element`
/// only consult `same_identity`.
///
/// The engine never inserts caller memory directly: every insertion and
/// every whole-queue copy goes through `try_clone`, so the caller keeps
/// independent ownership of whatever it passed in.
pub trait QueueElement: Sized {
    /// Produce an independent deep copy of this element.
    fn try_clone(&self) -> Result<Self, QueueError>;

    /// Whether `other` denotes the same logical element.
    fn same_identity(&self, other: &Self) -> bool;
}

/// Priority payload behavior: deep copy and ordering.
///
/// The comparison convention matches the chain layout: a priority that
/// compares [`Ordering::Greater`] outranks the other and sits closer to
/// the front of the queue.
pub trait QueuePriority: Sized {
    /// Produce an independent deep copy of this priority.
    fn try_clone(&self) -> Result<Self, QueueError>;

    /// Rank `self` against `other`. `Greater` means `self` is served first.
    fn compare(&self, other: &Self) -> Ordering;
}

// ============================================================================
// Blanket-free impls for plain value payloads
// ============================================================================

macro_rules! impl_value_payload {
    ($($ty:ty),* $(,)?) => {$(
        impl QueueElement for $ty {
            #[inline]
            fn try_clone(&self) -> Result<Self, QueueError> {
                Ok(*self)
            }

            #[inline]
            fn same_identity(&self, other: &Self) -> bool {
                self == other
            }
        }

        impl QueuePriority for $ty {
            #[inline]
            fn try_clone(&self) -> Result<Self, QueueError> {
                Ok(*self)
            }

            #[inline]
            fn compare(&self, other: &Self) -> Ordering {
                Ord::cmp(self, other)
            }
        }
    )*};
}

impl_value_payload!(i8, i16, i32, i64, i128, u8, u16, u32, u64, u128, usize, isize);

// ============================================================================
// Unit Tests
// ============================================================================
