//! Cause-chain traversal over `Error::source`.

use std::error::Error;

use tracing::warn;

use crate::error::{BaseError, ErrorKind};

/// Maximum number of errors visited before traversal stops.
pub const MAX_WALK_DEPTH: usize = 64;

/// Walks the chain starting at `err`, following `source()`.
///
/// Without a predicate, returns the deepest error reached (always `Some`).
/// With a predicate, returns the first error, `err` included, that satisfies
/// it, or `None`.
///
/// A `source()` that returns the error itself ends the chain, as does
/// reaching [`MAX_WALK_DEPTH`].
pub fn walk<'a>(
    err: &'a (dyn Error + 'static),
    predicate: Option<&dyn Fn(&(dyn Error + 'static)) -> bool>,
) -> Option<&'a (dyn Error + 'static)> {
    let mut current = err;
    let mut depth = 1;
    loop {
        if predicate.is_some_and(|pred| pred(current)) {
            return Some(current);
        }
        let next = match current.source() {
            Some(next) if !same_error(current, next) => next,
            _ => break,
        };
        if depth == MAX_WALK_DEPTH {
            warn!(max_depth = MAX_WALK_DEPTH, "error cause chain too deep, stopping walk");
            break;
        }
        current = next;
        depth += 1;
    }
    match predicate {
        Some(_) => None,
        None => Some(current),
    }
}

/// Same object and same concrete type. A newtype's source often shares its
/// address, so the address alone is not enough.
#[allow(ambiguous_wide_pointer_comparisons)]
fn same_error(a: &(dyn Error + 'static), b: &(dyn Error + 'static)) -> bool {
    std::ptr::eq(a, b)
}

/// True if `err` is a [`BaseError`] tagged with `kind`.
pub fn is_kind(err: &(dyn Error + 'static), kind: ErrorKind) -> bool {
    err.downcast_ref::<BaseError>()
        .is_some_and(|base| base.kind() == kind)
}
