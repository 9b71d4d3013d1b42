use crate::error::{QuoteError, Result};
use rand::Rng;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use tracing::debug;

/// Ordered, in-memory collection of quotes, one per line of the quote file.
///
/// Duplicates and blank lines are kept as-is.
#[derive(Debug, Clone, Default)]
pub struct QuoteStore {
    quotes: Vec<String>,
}

impl QuoteStore {
    pub fn new() -> Self {
        Self { quotes: Vec::new() }
    }

    /// Reads every line of `path` and appends it to the store.
    ///
    /// Fails with `NotFound` when the file does not exist, `Empty` when it has no
    /// lines, and `Io` for anything else. On failure the store is left untouched.
    pub fn load(&mut self, path: &Path) -> Result<usize> {
        let file = File::open(path).map_err(|source| match source.kind() {
            io::ErrorKind::NotFound => QuoteError::NotFound {
                path: path.to_path_buf(),
            },
            _ => QuoteError::Io {
                path: path.to_path_buf(),
                source,
            },
        })?;

        let count = self.load_from_reader(BufReader::new(file), path)?;
        debug!("Loaded {} quotes from {}", count, path.display());
        Ok(count)
    }

    /// Same as [`QuoteStore::load`] for an already opened reader. `origin` only
    /// labels errors.
    pub fn load_from_reader<R: BufRead>(&mut self, mut reader: R, origin: &Path) -> Result<usize> {
        let mut lines = Vec::new();
        let mut buf = Vec::new();

        loop {
            buf.clear();
            let read = reader
                .read_until(b'\n', &mut buf)
                .map_err(|source| QuoteError::Io {
                    path: origin.to_path_buf(),
                    source,
                })?;
            if read == 0 {
                break;
            }
            lines.push(decode_line(&buf));
        }

        if lines.is_empty() {
            return Err(QuoteError::Empty {
                path: origin.to_path_buf(),
            });
        }

        let count = lines.len();
        self.quotes.extend(lines);
        Ok(count)
    }

    /// Uniform random index in `0..len`, or `None` for an empty store.
    pub fn pick_random(&self) -> Option<usize> {
        self.pick_random_with(&mut rand::rng())
    }

    pub fn pick_random_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<usize> {
        if self.quotes.is_empty() {
            return None;
        }
        Some(rng.random_range(0..self.quotes.len()))
    }

    pub fn random_quote(&self) -> Option<&str> {
        self.pick_random().and_then(|index| self.get(index))
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.quotes.get(index).map(String::as_str)
    }

    pub fn quotes(&self) -> &[String] {
        &self.quotes
    }

    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }

    pub fn clear(&mut self) {
        self.quotes.clear();
    }
}

fn decode_line(raw: &[u8]) -> String {
    let line = raw.strip_suffix(b"\n").unwrap_or(raw);
    let line = line.strip_suffix(b"\r").unwrap_or(line);
    String::from_utf8_lossy(line).into_owned()
}
