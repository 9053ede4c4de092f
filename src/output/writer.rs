//! File-backed article writer
//!
//! Writes the output file described by the CLI contract: a header block
//! recording the search term, seed URL, and depth, followed by one block per
//! matched article. Body text is wrapped at [`MAX_LINE_WIDTH`] columns,
//! breaking at the nearest space before the limit.

use crate::config::CrawlConfig;
use crate::output::traits::{ArticleRecord, ArticleSink, OutputError, OutputResult};
use std::fs::File;
use std::io::{BufWriter, Write};

/// Maximum output line width for article body text
pub const MAX_LINE_WIDTH: usize = 80;

/// Appends matched articles to the output file and echoes their headlines
///
/// The file is created (truncated) once at the start of the run and stays
/// open for the run's lifetime; dropping the writer closes it. Every append
/// flushes, so whatever was written before a later fatal error remains on
/// disk.
pub struct ArticleWriter {
    writer: BufWriter<File>,
}

impl ArticleWriter {
    /// Opens the output file and writes the header block
    ///
    /// # Arguments
    ///
    /// * `config` - the run configuration; supplies the path and the header
    ///   fields (search term, seed URL, depth)
    ///
    /// # Returns
    ///
    /// * `Ok(ArticleWriter)` - file created and header written
    /// * `Err(OutputError)` - the path is unwritable
    pub fn create(config: &CrawlConfig) -> OutputResult<Self> {
        let file = File::create(&config.output_path).map_err(|source| OutputError::Open {
            path: config.output_path.display().to_string(),
            source,
        })?;
        let mut writer = BufWriter::new(file);

        writeln!(writer, "Search Term: {}", config.search_string)?;
        writeln!(writer, "URL: {}", config.seed_url)?;
        writeln!(writer, "Search Depth: {}", config.max_depth)?;
        writeln!(writer)?;
        writer.flush()?;

        Ok(Self { writer })
    }
}

impl ArticleSink for ArticleWriter {
    fn append(&mut self, record: &ArticleRecord) -> OutputResult<()> {
        // The console gets the headline; the file gets the full block.
        println!("Found article: {}", record.headline);

        writeln!(self.writer, "{}", record.headline)?;
        writeln!(self.writer, "{}", record.url)?;
        writeln!(self.writer)?;
        for line in wrap_lines(&record.body_text, MAX_LINE_WIDTH) {
            writeln!(self.writer, "{}", line)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;

        Ok(())
    }
}

/// Splits text into lines at most `width` characters wide
///
/// Breaks at the nearest space before the limit; a single run of `width` or
/// more non-space characters is hard-broken at the limit. Operates on chars,
/// so multi-byte text never splits inside a code point.
pub fn wrap_lines(text: &str, width: usize) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    let mut lines = Vec::new();
    let mut start = 0;

    while start < chars.len() {
        if start + width >= chars.len() {
            lines.push(chars[start..].iter().collect());
            break;
        }

        // Walk back from the limit to the last space on the line.
        let mut end = start + width;
        while end > start && chars[end] != ' ' {
            end -= 1;
        }

        if end == start {
            // No space on the line: hard break and keep the split character.
            let end = start + width;
            lines.push(chars[start..end].iter().collect());
            start = end;
        } else {
            lines.push(chars[start..end].iter().collect());
            start = end + 1;
        }
    }

    lines
}
