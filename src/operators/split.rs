use std::ops::Range;

/// Separators used when none are given: space, tab, vertical tab, form feed
/// and carriage return.
pub const DEFAULT_SEPARATORS: &str = " \t\x0b\x0c\r";

/// The characters that delimit fields.
///
/// ASCII-only sets are matched byte by byte through a lookup table. Sets
/// containing other characters are matched per decoded character; bytes
/// that are not valid UTF-8 are never separators.
#[derive(Debug, Clone)]
pub enum SeparatorSet {
    Bytes(Box<[bool; 256]>),
    Chars(Vec<char>),
}

impl SeparatorSet {
    /// Build a set from a string of literal separator characters.
    /// An empty string selects [`DEFAULT_SEPARATORS`].
    pub fn new(chars: &str) -> Self {
        let chars = if chars.is_empty() {
            DEFAULT_SEPARATORS
        } else {
            chars
        };

        if chars.is_ascii() {
            let mut table = Box::new([false; 256]);
            for b in chars.bytes() {
                table[b as usize] = true;
            }
            SeparatorSet::Bytes(table)
        } else {
            let mut set: Vec<char> = chars.chars().collect();
            set.sort_unstable();
            set.dedup();
            SeparatorSet::Chars(set)
        }
    }

    fn contains_char(&self, c: char) -> bool {
        match self {
            SeparatorSet::Bytes(table) => c.is_ascii() && table[c as usize],
            SeparatorSet::Chars(set) => set.binary_search(&c).is_ok(),
        }
    }
}

impl Default for SeparatorSet {
    fn default() -> Self {
        Self::new(DEFAULT_SEPARATORS)
    }
}

/// Splits lines into fields.
///
/// The tokenizer holds no per-line state. Callers own the span buffer and
/// hand it in for every line, so its allocation is reused while its contents
/// are replaced.
#[derive(Debug, Clone, Default)]
pub struct Tokenizer {
    separators: SeparatorSet,
}

impl Tokenizer {
    pub fn new(separators: SeparatorSet) -> Self {
        Self { separators }
    }

    /// Split `line` into fields, recording their byte spans in `spans`.
    ///
    /// Any previous contents of `spans` are discarded. Runs of separators
    /// collapse into one boundary, so no span is empty.
    pub fn split<'a>(&self, line: &'a [u8], spans: &'a mut Vec<Range<usize>>) -> Fields<'a> {
        spans.clear();
        match &self.separators {
            SeparatorSet::Bytes(table) => split_bytes(line, table, spans),
            SeparatorSet::Chars(_) => self.split_chars(line, spans),
        }
        Fields {
            line,
            spans: spans.as_slice(),
        }
    }

    fn split_chars(&self, line: &[u8], spans: &mut Vec<Range<usize>>) {
        let mut start = None;
        let mut offset = 0;

        for chunk in line.utf8_chunks() {
            for (i, c) in chunk.valid().char_indices() {
                let at = offset + i;
                if self.separators.contains_char(c) {
                    if let Some(s) = start.take() {
                        spans.push(s..at);
                    }
                } else if start.is_none() {
                    start = Some(at);
                }
            }
            offset += chunk.valid().len();

            if !chunk.invalid().is_empty() && start.is_none() {
                start = Some(offset);
            }
            offset += chunk.invalid().len();
        }

        if let Some(s) = start {
            spans.push(s..line.len());
        }
    }
}

fn split_bytes(line: &[u8], table: &[bool; 256], spans: &mut Vec<Range<usize>>) {
    let mut start = None;

    for (i, &b) in line.iter().enumerate() {
        if table[b as usize] {
            if let Some(s) = start.take() {
                spans.push(s..i);
            }
        } else if start.is_none() {
            start = Some(i);
        }
    }

    if let Some(s) = start {
        spans.push(s..line.len());
    }
}

/// The fields of one line: borrowed bytes plus the spans that cut them.
#[derive(Debug, Clone, Copy)]
pub struct Fields<'a> {
    line: &'a [u8],
    spans: &'a [Range<usize>],
}

impl<'a> Fields<'a> {
    /// Number of fields on the line.
    pub fn len(&self) -> usize {
        self.spans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// The field at 0-based position `i`.
    pub fn get(&self, i: usize) -> Option<&'a [u8]> {
        self.spans.get(i).map(|span| self.field(span))
    }

    /// The bytes of the field covered by `span`.
    pub fn field(&self, span: &Range<usize>) -> &'a [u8] {
        &self.line[span.clone()]
    }

    pub fn as_spans(&self) -> &'a [Range<usize>] {
        self.spans
    }

    pub fn iter(self) -> impl Iterator<Item = &'a [u8]> {
        self.spans.iter().map(move |span| self.field(span))
    }
}
