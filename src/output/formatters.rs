//! Formatting utilities for terminal output

use crate::core::FeedbackRow;

/// Format a feedback row as bracketed cells
///
/// Each cell renders as ` [ X ] `, so a full row looks like
/// ` [ * ]  [ * ]  [ T ] `.
#[must_use]
pub fn bracketed_row(row: &FeedbackRow) -> String {
    row.marks()
        .iter()
        .map(|mark| format!(" [ {} ] ", mark.glyph()))
        .collect()
}

/// Format the average completion time, or `N/A` when unavailable
#[must_use]
pub fn format_average(average_secs: Option<u64>) -> String {
    average_secs.map_or_else(|| "N/A".to_string(), |secs| secs.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    #[test]
    fn bracketed_row_renders_each_cell() {
        let target = Word::new("cat").unwrap();
        let guess = Word::new("dot").unwrap();
        let row = FeedbackRow::score(&target, &guess);

        assert_eq!(bracketed_row(&row), " [ * ]  [ * ]  [ T ] ");
    }

    #[test]
    fn bracketed_row_mixed_marks() {
        let target = Word::new("cat").unwrap();
        let guess = Word::new("tag").unwrap();
        let row = FeedbackRow::score(&target, &guess);

        assert_eq!(bracketed_row(&row), " [ t ]  [ A ]  [ * ] ");
    }

    #[test]
    fn format_average_with_value() {
        assert_eq!(format_average(Some(13)), "13");
        assert_eq!(format_average(Some(0)), "0");
    }

    #[test]
    fn format_average_unavailable() {
        assert_eq!(format_average(None), "N/A");
    }
}
