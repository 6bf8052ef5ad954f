//! Component access errors

use std::fmt::Display;

/// All the possible failures we might encounter
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VectorError {
    /// (IndexOutOfRange) A component index was not 0, 1, or 2
    IndexOutOfRange(usize),
}

impl Display for VectorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VectorError::IndexOutOfRange(index) => {
                write!(f, "(IndexOutOfRange) index is out of range: {}", index)
            },
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn display_names_the_offending_index() {
        let message = VectorError::IndexOutOfRange(7).to_string();
        assert!(message.contains('7'));
    }
}
