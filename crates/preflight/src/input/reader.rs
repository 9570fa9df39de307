//! Streaming reader for delimited catalog exports.

use std::collections::VecDeque;
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use csv::StringRecord;

use tracing::debug;

use super::source::SourceMetadata;
use crate::error::{PreflightError, Result};

/// Reader configuration.
#[derive(Debug, Clone)]
pub struct ReaderConfig {
    /// Field delimiter.
    pub delimiter: u8,
    /// Quote character.
    pub quote: u8,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            delimiter: b';',
            quote: b'"',
        }
    }
}

/// One data row with its cells trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRow {
    /// 1-based position among data rows (header excluded).
    pub index: usize,
    /// Cells in input order. May be shorter or longer than the header.
    pub cells: Vec<String>,
}

impl RawRow {
    /// Cell at a column, or `""` when the row is too short.
    pub fn cell(&self, column: usize) -> &str {
        self.cells.get(column).map(String::as_str).unwrap_or("")
    }
}

/// Remembers the last byte pulled from the wrapped source.
struct Tail<R> {
    inner: R,
    last: Option<u8>,
}

impl<R: Read> Read for Tail<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.inner.read(buf)?;
        if n > 0 {
            self.last = Some(buf[n - 1]);
        }
        Ok(n)
    }
}

/// Reads the header row eagerly, then yields data rows one at a time.
///
/// Blank lines after the header are data rows with no cells. The csv parser
/// drops them silently, so they are recovered from the line breaks each read
/// consumes beyond those inside quoted fields and the record terminator.
pub struct CatalogReader<R: Read> {
    headers: Vec<String>,
    records: csv::StringRecordsIntoIter<Tail<R>>,
    /// Parser line number after the last read.
    line: u64,
    /// Record read one ahead, with the line breaks consumed reading it.
    held: Option<(StringRecord, u64)>,
    ready: VecDeque<Vec<String>>,
    exhausted: bool,
    rows_read: usize,
}

impl CatalogReader<File> {
    /// Open a catalog file.
    pub fn open(path: impl AsRef<Path>, config: &ReaderConfig) -> Result<(Self, SourceMetadata)> {
        let path = path.as_ref();

        let file = File::open(path).map_err(|e| PreflightError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        let size_bytes = file
            .metadata()
            .map_err(|e| PreflightError::Io {
                path: path.to_path_buf(),
                source: e,
            })?
            .len();

        let reader = Self::from_reader(file, config)?;
        let source = SourceMetadata::new(
            path.to_path_buf(),
            size_bytes,
            config.delimiter,
            reader.headers.len(),
        );
        debug!(
            "Opened {} ({} bytes, {} columns, format {})",
            source.file, source.size_bytes, source.column_count, source.format
        );

        Ok((reader, source))
    }
}

impl<R: Read> CatalogReader<R> {
    /// Wrap any byte source. Fails if there is no header row.
    pub fn from_reader(rdr: R, config: &ReaderConfig) -> Result<Self> {
        // Only `\n` ends a record, so a `\r\n` blank line surfaces as a lone
        // `\r` cell that trims to empty.
        let mut records = csv::ReaderBuilder::new()
            .delimiter(config.delimiter)
            .quote(config.quote)
            .terminator(csv::Terminator::Any(b'\n'))
            .has_headers(false)
            .flexible(true)
            .from_reader(Tail {
                inner: rdr,
                last: None,
            })
            .into_records();

        let header_record = match records.next() {
            Some(record) => record?,
            None => return Err(PreflightError::EmptyData("file has no rows".to_string())),
        };

        let headers: Vec<String> = header_record
            .iter()
            .enumerate()
            .map(|(i, h)| {
                let h = if i == 0 { h.trim_start_matches('\u{feff}') } else { h };
                h.trim().to_string()
            })
            .collect();

        let line = records.reader().position().line();
        Ok(Self {
            headers,
            records,
            line,
            held: None,
            ready: VecDeque::new(),
            exhausted: false,
            rows_read: 0,
        })
    }

    /// Trimmed header labels.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Number of data rows yielded so far.
    pub fn rows_read(&self) -> usize {
        self.rows_read
    }

    /// Next csv record plus the line breaks consumed while reading it.
    fn pull(&mut self) -> Result<(Option<StringRecord>, u64)> {
        let before = self.line;
        let record = self.records.next().transpose()?;
        self.line = self.records.reader().position().line();
        Ok((record, self.line - before))
    }

    fn push_blank_rows(&mut self, count: u64) {
        for _ in 0..count {
            self.ready.push_back(Vec::new());
        }
    }

    /// Queue the next record and the blank lines in front of it.
    ///
    /// Reads one record ahead: only the last record may lack a terminating
    /// newline, and that is known once the source is drained.
    fn fill(&mut self) -> Result<()> {
        let (record, breaks) = match self.held.take() {
            Some(held) => held,
            None => match self.pull()? {
                (Some(record), breaks) => (record, breaks),
                (None, trailing) => {
                    self.push_blank_rows(trailing);
                    self.exhausted = true;
                    return Ok(());
                }
            },
        };

        let (next, next_breaks) = self.pull()?;
        let terminated =
            next.is_some() || self.records.reader().get_ref().last == Some(b'\n');
        let quoted_breaks: u64 = record.iter().map(|c| c.matches('\n').count() as u64).sum();

        self.push_blank_rows(breaks.saturating_sub(quoted_breaks + u64::from(terminated)));
        self.ready
            .push_back(record.iter().map(|c| c.trim().to_string()).collect());

        match next {
            Some(next) => self.held = Some((next, next_breaks)),
            None => {
                self.push_blank_rows(next_breaks);
                self.exhausted = true;
            }
        }
        Ok(())
    }
}

impl<R: Read> Iterator for CatalogReader<R> {
    type Item = Result<RawRow>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(cells) = self.ready.pop_front() {
                self.rows_read += 1;
                return Some(Ok(RawRow {
                    index: self.rows_read,
                    cells,
                }));
            }
            if self.exhausted {
                return None;
            }
            if let Err(e) = self.fill() {
                self.exhausted = true;
                return Some(Err(e));
            }
        }
    }
}
