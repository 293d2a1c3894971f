//! Fixed-column text tables.

/// Column starts of the lunar-phase table: new moon, synodic month length,
/// difference from the mean month, anomaly, notes.
pub const LUNAR_PHASES_LAYOUT: &[usize] = &[0, 24, 42, 58, 69];

/// Column starts of the solstice/equinox table: year, March equinox, June
/// solstice, September equinox, December solstice.
pub const SOLSTICES_LAYOUT: &[usize] = &[1, 11, 29, 47, 65];

/// Splits `line` into trimmed fields, one per column start in `layout`.
///
/// Offsets are counted in characters. Each field ends where the next begins,
/// the last one at the end of the line. Splitting stops at the first offset
/// lying at or beyond the end of the line, so short rows yield fewer fields.
///
/// # Example
///
/// ```
/// use plethonian::table::split_columns;
///
/// let row = split_columns("ab  cd   e", &[0, 4, 9, 20]);
/// assert_eq!(vec!["ab", "cd", "e"], row);
/// ```
pub fn split_columns<'a>(line: &'a str, layout: &[usize]) -> Vec<&'a str> {
    // Byte offset of every character boundary, including the end of the line.
    let bounds: Vec<usize> = line
        .char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(line.len()))
        .collect();
    let len = bounds.len() - 1;

    let mut fields = Vec::with_capacity(layout.len());
    for (i, &start) in layout.iter().enumerate() {
        if start >= len {
            break;
        }
        let end = layout.get(i + 1).map_or(len, |&next| next.min(len));
        fields.push(line[bounds[start]..bounds[end.max(start)]].trim());
    }
    fields
}

/// Splits every non-blank line of `text`, pairing each row with its 1-based
/// line number.
pub fn split_table<'a>(text: &'a str, layout: &[usize]) -> Vec<(usize, Vec<&'a str>)> {
    (1usize..)
        .zip(text.lines())
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(line_num, line)| (line_num, split_columns(line, layout)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lunar_row() {
        let line = "2001 Jan 24  13:07      29d 19h 14m       +06h 30m        177.2°     longest";
        assert_eq!(
            vec![
                "2001 Jan 24  13:07",
                "29d 19h 14m",
                "+06h 30m",
                "177.2°",
                "longest"
            ],
            split_columns(line, LUNAR_PHASES_LAYOUT)
        );
    }

    #[test]
    fn lunar_row_without_notes() {
        let line = "2001 Feb 23  08:21      29d 17h 00m       +04h 16m        203.0°";
        assert_eq!(4, split_columns(line, LUNAR_PHASES_LAYOUT).len());
    }

    #[test]
    fn solstice_row() {
        let line = " 2001      Mar 20  13:31     Jun 21  07:38     Sep 22  23:05     Dec 21  19:22";
        assert_eq!(
            vec![
                "2001",
                "Mar 20  13:31",
                "Jun 21  07:38",
                "Sep 22  23:05",
                "Dec 21  19:22"
            ],
            split_columns(line, SOLSTICES_LAYOUT)
        );
    }

    #[test]
    fn ragged_rows() {
        for (std, line) in [
            (vec![], ""),
            (vec!["ab"], "ab"),
            (vec!["abcd", ""], "abcd "),
            (vec!["abcd", "ef"], "abcd    ef"),
        ] {
            assert_eq!(std, split_columns(line, &[0, 4, 12]));
        }
        // first offset beyond a short line
        assert!(split_columns("x", &[1, 11]).is_empty());
    }

    #[test]
    fn table_skips_blank_lines() {
        let rows = split_table("a b\n\n  \nc d\n", &[0, 2]);
        assert_eq!(vec![(1, vec!["a", "b"]), (4, vec!["c", "d"])], rows);
    }
}
