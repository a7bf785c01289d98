// Licensed under the MIT license.

//! Feeding words from text into a filter.
//!
//! Text is split on whitespace, and each token has its trailing
//! non-alphanumeric characters removed, so that `"filter,"` and `"filter"`
//! are the same word. Tokens left empty are skipped.
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::mem;
use std::path::Path;

use tracing::{debug, trace};

use crate::bloom::BloomFilter;
use crate::error::Result;

/// An iterator over the words of a reader.
///
/// Words are cut straight out of the reader's buffer, so memory use is bounded
/// by the longest word rather than the longest line.
#[derive(Debug)]
pub struct Words<R> {
    reader: R,
    token: Vec<u8>,
    done: bool,
}

impl<R: BufRead> Words<R> {
    /// Iterate over the words of `reader`.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            token: Vec::new(),
            done: false,
        }
    }

    /// Take the current token, trimmed. Returns `None` if nothing is left of it.
    fn finish(&mut self) -> Option<Vec<u8>> {
        let mut word = mem::take(&mut self.token);
        let len = trim(&word).len();

        word.truncate(len);
        if word.is_empty() {
            None
        } else {
            Some(word)
        }
    }
}

impl<R: BufRead> Iterator for Words<R> {
    type Item = io::Result<Vec<u8>>;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.done {
            let buf = match self.reader.fill_buf() {
                Ok(buf) => buf,
                Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
                Err(err) => {
                    self.done = true;
                    return Some(Err(err));
                }
            };
            if buf.is_empty() {
                self.done = true;
                return self.finish().map(Ok);
            }

            match buf.iter().position(|b| is_space(*b)) {
                Some(i) => {
                    self.token.extend_from_slice(&buf[..i]);
                    self.reader.consume(i + 1);

                    if let Some(word) = self.finish() {
                        return Some(Ok(word));
                    }
                }
                None => {
                    let n = buf.len();

                    self.token.extend_from_slice(buf);
                    self.reader.consume(n);
                }
            }
        }
        None
    }
}

/// Strip trailing bytes that aren't ASCII letters or digits.
pub fn trim(token: &[u8]) -> &[u8] {
    let end = token
        .iter()
        .rposition(u8::is_ascii_alphanumeric)
        .map_or(0, |i| i + 1);

    &token[..end]
}

/// Insert every word of `reader` into the filter. Returns the number of words inserted.
pub fn insert_words<R: BufRead>(filter: &mut BloomFilter, reader: R) -> Result<usize> {
    let mut count = 0;

    for word in Words::new(reader) {
        let word = word?;

        trace!(word = %String::from_utf8_lossy(&word), "Inserting word");
        filter.insert(&word);
        count += 1;
    }
    Ok(count)
}

/// Insert every word of the file at `path` into the filter.
pub fn insert_words_from_file<P: AsRef<Path>>(
    filter: &mut BloomFilter,
    path: P,
) -> Result<usize> {
    let path = path.as_ref();
    let file = File::open(path)?;

    debug!(path = %path.display(), "Loading words");
    let count = insert_words(filter, BufReader::new(file))?;
    debug!(path = %path.display(), words = count, "Loaded words");

    Ok(count)
}

/// ASCII whitespace, vertical tab included.
fn is_space(b: u8) -> bool {
    b.is_ascii_whitespace() || b == 0x0b
}
