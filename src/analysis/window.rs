use crate::analysis::DeriveError;
use crate::domain::{SymbolHistory, Window};

/// Returns the last `size` closing values of `history`, oldest first.
///
/// A history shorter than `size` is rejected rather than read from a negative
/// offset.
pub fn extract_window(history: &SymbolHistory, size: usize) -> Result<Window, DeriveError> {
    if size == 0 {
        return Err(DeriveError::EmptyInput("window size"));
    }
    let available = history.len();
    if available < size {
        return Err(DeriveError::InsufficientData {
            required: size,
            available,
        });
    }

    let values: Vec<f64> = history.closes().skip(available - size).collect();
    debug_assert_eq!(values.len(), size);
    Ok(Window::new(values))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn takes_most_recent_suffix_in_order() {
        let history = SymbolHistory::from_closes("A", &[1.0, 2.0, 3.0, 4.0, 5.0]);
        let window = extract_window(&history, 3).unwrap();
        assert_eq!(window.values(), &[3.0, 4.0, 5.0]);
    }

    #[test]
    fn exact_length_history_is_whole_window() {
        let history = SymbolHistory::from_closes("B", &[10.0, 20.0, 30.0]);
        let window = extract_window(&history, 3).unwrap();
        assert_eq!(window.values(), &[10.0, 20.0, 30.0]);
    }

    #[test]
    fn short_history_is_insufficient() {
        let history = SymbolHistory::from_closes("A", &[1.0, 2.0]);
        assert_eq!(
            extract_window(&history, 3),
            Err(DeriveError::InsufficientData {
                required: 3,
                available: 2
            })
        );
    }

    #[test]
    fn zero_size_is_empty_input() {
        let history = SymbolHistory::from_closes("A", &[1.0]);
        assert!(matches!(
            extract_window(&history, 0),
            Err(DeriveError::EmptyInput(_))
        ));
    }
}
