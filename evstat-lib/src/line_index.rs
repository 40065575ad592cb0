//! Physical line numbers for records read by the `csv` crate.
//!
//! A `csv::Position` taken before a read points at the end of the previous record,
//! ahead of any blank lines the reader then skips, so its line is not the line the
//! next record is on. [`LineIndex`] resolves a byte offset to the line where the
//! following record's content actually starts.

/// Byte offsets of every newline in a delimited file.
#[derive(Debug, Clone)]
pub struct LineIndex<'a> {
    text: &'a [u8],
    newlines: Vec<usize>,
}

impl<'a> LineIndex<'a> {
    #[must_use]
    pub fn new(text: &'a [u8]) -> Self {
        let newlines = text
            .iter()
            .enumerate()
            .filter_map(|(offset, &byte)| (byte == b'\n').then_some(offset))
            .collect();

        Self { text, newlines }
    }

    /// The 1-based line on which the record read from `byte` onward begins.
    ///
    /// Line terminators at `byte` are skipped first, the same way the csv reader
    /// skips blank lines between records.
    #[must_use]
    pub fn record_line(&self, byte: u64) -> usize {
        let start = usize::try_from(byte).map_or(self.text.len(), |start| start.min(self.text.len()));
        let skipped = self.text[start..].iter().take_while(|&&b| matches!(b, b'\n' | b'\r')).count();
        1 + self.newlines.partition_point(|&newline| newline < start + skipped)
    }
}
