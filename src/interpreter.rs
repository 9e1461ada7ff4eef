//! The per-line loop.
//!
//! Each line is read, split, picked and written before the next one is
//! read. The only state carried between lines is the scratch buffers,
//! which every line overwrites.

use std::io::{BufRead, Write};
use std::ops::{AddAssign, Range};

use crate::ast::Rule;
use crate::error::{Error, Result};
use crate::input::{Input, LineReader};
use crate::operators::{Format, Joined, Select, SeparatorSet, Tokenizer};

/// Run configuration.
pub struct Config {
    pub separators: SeparatorSet,
    pub format: Box<dyn Format>,
    /// Flush after every output line.
    pub flush: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            separators: SeparatorSet::default(),
            format: Box::new(Joined::default()),
            flush: true,
        }
    }
}

/// Counters for one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stats {
    pub lines: usize,
    pub fields: usize,
}

impl AddAssign for Stats {
    fn add_assign(&mut self, other: Stats) {
        self.lines += other.lines;
        self.fields += other.fields;
    }
}

/// Execution context: the rules, the output format and the buffers reused
/// across lines.
pub struct Context {
    tokenizer: Tokenizer,
    select: Select,
    format: Box<dyn Format>,
    flush: bool,
    line: Vec<u8>,
    spans: Vec<Range<usize>>,
}

impl Context {
    pub fn new(config: Config, rules: Vec<Rule>) -> Self {
        Self {
            tokenizer: Tokenizer::new(config.separators),
            select: Select::new(rules),
            format: config.format,
            flush: config.flush,
            line: Vec::with_capacity(1024),
            spans: Vec::with_capacity(64),
        }
    }

    /// Process every input in order as one stream.
    pub fn run<W: Write>(&mut self, inputs: &[Input], out: &mut W) -> Result<Stats> {
        let mut stats = Stats::default();
        for input in inputs {
            let mut reader = LineReader::new(input.open()?, input.name());
            stats += self.process(&mut reader, out)?;
        }
        tracing::debug!(lines = stats.lines, fields = stats.fields, "run complete");
        Ok(stats)
    }

    /// Process one reader until end of input.
    pub fn process<R: BufRead, W: Write>(
        &mut self,
        reader: &mut LineReader<R>,
        out: &mut W,
    ) -> Result<Stats> {
        let mut stats = Stats::default();

        while reader.read_line(&mut self.line)? {
            let fields = self.tokenizer.split(&self.line, &mut self.spans);
            tracing::trace!(
                line = reader.line_number(),
                fields = fields.len(),
                "split line"
            );

            let mut picked = 0;
            let mut selected = self.select.apply(fields).inspect(|_| picked += 1);
            self.format
                .write_record(out, &mut selected)
                .map_err(Error::write)?;
            if self.flush {
                out.flush().map_err(Error::write)?;
            }

            stats.lines += 1;
            stats.fields += picked;
        }

        out.flush().map_err(Error::write)?;
        Ok(stats)
    }
}

/// Run `rules` over `inputs` with `config`, writing to `out`.
pub fn run<W: Write>(config: Config, rules: Vec<Rule>, inputs: &[Input], out: &mut W) -> Result<Stats> {
    Context::new(config, rules).run(inputs, out)
}
