use std::io::{self, Write};

use serde::Serialize;
use serde::ser::{SerializeSeq, Serializer};

/// Delimiter placed between output fields when none is given.
pub const DEFAULT_JOIN: &str = " ";

/// How one line's selected fields become one output line.
pub trait Format {
    /// Write the fields followed by a newline. An empty selection still
    /// produces a line.
    fn write_record(
        &self,
        out: &mut dyn Write,
        fields: &mut dyn Iterator<Item = &[u8]>,
    ) -> io::Result<()>;
}

/// Fields joined by a delimiter.
#[derive(Debug, Clone)]
pub struct Joined {
    delimiter: Vec<u8>,
}

impl Joined {
    pub fn new(delimiter: impl Into<Vec<u8>>) -> Self {
        Self {
            delimiter: delimiter.into(),
        }
    }
}

impl Default for Joined {
    fn default() -> Self {
        Self::new(DEFAULT_JOIN)
    }
}

impl Format for Joined {
    fn write_record(
        &self,
        out: &mut dyn Write,
        fields: &mut dyn Iterator<Item = &[u8]>,
    ) -> io::Result<()> {
        let mut first = true;
        for field in fields {
            if !first {
                out.write_all(&self.delimiter)?;
            }
            first = false;
            out.write_all(field)?;
        }
        out.write_all(b"\n")
    }
}

/// Fields as a compact JSON array of strings, one array per line.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonArray;

impl Format for JsonArray {
    fn write_record(
        &self,
        out: &mut dyn Write,
        fields: &mut dyn Iterator<Item = &[u8]>,
    ) -> io::Result<()> {
        let record = Record(fields.collect());
        serde_json::to_writer(&mut *out, &record)?;
        out.write_all(b"\n")
    }
}

/// Field bytes serialized as strings; invalid UTF-8 is replaced.
struct Record<'a>(Vec<&'a [u8]>);

impl Serialize for Record<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.0.len()))?;
        for field in &self.0 {
            seq.serialize_element(&String::from_utf8_lossy(field))?;
        }
        seq.end()
    }
}
