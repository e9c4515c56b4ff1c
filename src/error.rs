// Copyright 2016 Amanieu d'Antras
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! Errors returned by indexed list operations.

use thiserror::Error;

/// Error returned when an indexed operation cannot be applied to a list.
///
/// The list is never modified when one of these is returned.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
pub enum ListError {
    /// The index is past the end of the list.
    #[error("index {index} out of range for list of length {len}")]
    OutOfRange {
        /// The index that was requested.
        index: usize,
        /// The length of the list at the time of the call.
        len: usize,
    },

    /// An element was requested from a list with no elements.
    #[error("cannot delete index {index} from an empty list")]
    EmptyStructure {
        /// The index that was requested.
        index: usize,
    },
}

impl ListError {
    /// Returns the index that caused the error.
    #[inline]
    pub fn index(&self) -> usize {
        match *self {
            ListError::OutOfRange { index, .. } | ListError::EmptyStructure { index } => index,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ListError;
    use std::string::ToString;

    #[test]
    fn test_display() {
        let e = ListError::OutOfRange { index: 7, len: 3 };
        assert_eq!(e.to_string(), "index 7 out of range for list of length 3");
        assert_eq!(e.index(), 7);

        let e = ListError::EmptyStructure { index: 0 };
        assert_eq!(e.to_string(), "cannot delete index 0 from an empty list");
        assert_eq!(e.index(), 0);
    }
}
