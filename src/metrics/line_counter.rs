//! Physical line counting for a single file.
//!
//! Content is decoded permissively: invalid UTF-8 sequences are dropped
//! instead of failing the read. Line terminators follow universal-newline
//! rules, so `\n`, `\r\n` and a lone `\r` each end exactly one line. A final
//! line without a terminator is still a line if any text survives decoding.
//!
//! Files are streamed one `\n`-terminated segment at a time.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Result of counting one file.
#[derive(Debug)]
pub enum FileOutcome {
    /// The file was read and has this many lines.
    Counted(usize),
    /// The file could not be read and contributes nothing.
    Skipped(io::Error),
}

impl FileOutcome {
    /// Line count, or `None` when the file was skipped.
    pub fn lines(&self) -> Option<usize> {
        match self {
            Self::Counted(lines) => Some(*lines),
            Self::Skipped(_) => None,
        }
    }

    pub fn is_counted(&self) -> bool {
        matches!(self, Self::Counted(_))
    }
}

/// Read `path` and count its lines.
pub fn count_file(path: &Path) -> FileOutcome {
    let counted = File::open(path).and_then(|file| count_reader(BufReader::new(file)));
    match counted {
        Ok(lines) => FileOutcome::Counted(lines),
        Err(err) => {
            log::debug!("Skipping unreadable file {}: {}", path.display(), err);
            FileOutcome::Skipped(err)
        }
    }
}

/// Count lines from a buffered reader without holding more than one
/// segment in memory.
pub fn count_reader<R: BufRead>(mut reader: R) -> io::Result<usize> {
    let mut lines = 0;
    let mut segment = Vec::new();

    // Every segment but the last ends in `\n`, so a `\r\n` pair never
    // straddles two segments
    loop {
        segment.clear();
        if reader.read_until(b'\n', &mut segment)? == 0 {
            break;
        }
        lines += count_lines(&segment);
    }

    Ok(lines)
}

/// Count lines in raw content (pure function).
pub fn count_lines(bytes: &[u8]) -> usize {
    let mut lines = 0;
    let mut tail_start = 0;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'\n' => {
                lines += 1;
                tail_start = i + 1;
            }
            b'\r' => {
                lines += 1;
                if bytes.get(i + 1) == Some(&b'\n') {
                    i += 1;
                }
                tail_start = i + 1;
            }
            _ => {}
        }
        i += 1;
    }

    // Trailing partial line, unless it is nothing but undecodable bytes
    if has_text(&bytes[tail_start..]) {
        lines += 1;
    }

    lines
}

fn has_text(bytes: &[u8]) -> bool {
    bytes.utf8_chunks().any(|chunk| !chunk.valid().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::fs;
    use std::io::{Cursor, Read};
    use tempfile::TempDir;

    #[test]
    fn empty_content_has_no_lines() {
        assert_eq!(count_lines(b""), 0);
    }

    #[test]
    fn terminated_lines_are_counted() {
        assert_eq!(count_lines(b"a\nb\nc\n"), 3);
        assert_eq!(count_lines(b"\n"), 1);
        assert_eq!(count_lines(b"\n\n\n"), 3);
    }

    #[test]
    fn partial_last_line_is_counted() {
        assert_eq!(count_lines(b"a\nb\nc"), 3);
        assert_eq!(count_lines(b"x"), 1);
    }

    #[test]
    fn universal_newlines() {
        assert_eq!(count_lines(b"a\r\nb\r\n"), 2);
        assert_eq!(count_lines(b"a\rb\rc"), 3);
        assert_eq!(count_lines(b"a\r\n\rb"), 3);
        assert_eq!(count_lines(b"\r"), 1);
    }

    #[test]
    fn undecodable_bytes_are_dropped() {
        // A terminated line of garbage is still a line
        assert_eq!(count_lines(b"\xff\xfe\n"), 1);
        // A trailing fragment of garbage is not
        assert_eq!(count_lines(b"a\n\xff"), 1);
        assert_eq!(count_lines(b"a\r\xff\xfe"), 1);
        assert_eq!(count_lines(b"\xff"), 0);
        // Garbage next to text keeps the text
        assert_eq!(count_lines(b"a\n\xffb"), 2);
        assert_eq!(count_lines("caf\u{e9}".as_bytes()), 1);
    }

    #[test]
    fn reader_counts_across_segments() {
        let content = "x = 1\r\ny = 2\rz = 3\n\nlast".repeat(1000);
        let lines = count_reader(Cursor::new(content.as_bytes())).unwrap();
        assert_eq!(lines, count_lines(content.as_bytes()));
        // Four terminators per repetition plus the final partial line
        assert_eq!(lines, 4 * 1000 + 1);
    }

    #[test]
    fn reader_matches_whole_buffer_with_small_capacity() {
        let content = b"alpha\r\nbeta\rgamma\n\xff\ndelta\r";
        let reader = BufReader::with_capacity(2, Cursor::new(&content[..]));
        assert_eq!(count_reader(reader).unwrap(), count_lines(content));
        assert_eq!(count_lines(content), 5);
    }

    struct FailingReader;

    impl Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::other("disk went away"))
        }
    }

    #[test]
    fn reader_errors_propagate() {
        assert!(count_reader(BufReader::new(FailingReader)).is_err());
    }

    #[test]
    fn count_file_reads_from_disk() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("mod.py");
        fs::write(&path, "import os\n\nprint(os.getcwd())").unwrap();

        let outcome = count_file(&path);
        assert!(outcome.is_counted());
        assert_eq!(outcome.lines(), Some(3));
    }

    #[test]
    fn invalid_utf8_is_decoded_permissively() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("latin1.py");
        fs::write(&path, b"caf\xe9 = 1\n# \xff\xfe\n\xff").unwrap();

        assert_eq!(count_file(&path).lines(), Some(2));
    }

    #[test]
    fn file_of_only_invalid_bytes_has_no_lines() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("garbage.py");
        fs::write(&path, b"\xff\xfe\xfd").unwrap();

        assert_eq!(count_file(&path).lines(), Some(0));
    }

    #[test]
    fn missing_file_is_skipped() {
        let dir = TempDir::new().unwrap();
        let outcome = count_file(&dir.path().join("gone.py"));
        assert!(!outcome.is_counted());
        assert_eq!(outcome.lines(), None);
    }

    #[test]
    fn directory_is_skipped() {
        let dir = TempDir::new().unwrap();
        let outcome = count_file(dir.path());
        assert!(matches!(outcome, FileOutcome::Skipped(_)));
    }

    proptest! {
        #[test]
        fn joined_lines_count_matches(lines in prop::collection::vec("[^\r\n]*", 0..20), trailing in any::<bool>()) {
            let mut content = lines.join("\n");
            if trailing && !lines.is_empty() {
                content.push('\n');
            }
            // Without a trailing newline an empty last segment adds nothing
            let expected = match lines.last() {
                None => 0,
                Some(last) if last.is_empty() && !trailing => lines.len() - 1,
                Some(_) => lines.len(),
            };
            prop_assert_eq!(count_lines(content.as_bytes()), expected);
            prop_assert_eq!(count_reader(content.as_bytes()).unwrap(), expected);
        }
    }
}
