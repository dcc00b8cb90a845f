//! `ultradns.tf`: provider block followed by one resource block per record set.

use std::io::{self, Write};

use super::ResourceRecord;
use crate::identifier::RESOURCE_TYPE;

/// Streaming writer of the resource configuration.
///
/// The provider block is written on construction; each [`write_record`](Self::write_record)
/// appends one block. Nothing is buffered beyond what `W` buffers itself.
pub struct ConfigDocument<W: Write> {
    out: W,
    blocks: usize,
}

impl<W: Write> ConfigDocument<W> {
    /// Start the document with the provider block pointing at `base_url`.
    pub fn new(mut out: W, base_url: &str) -> io::Result<Self> {
        writeln!(out, "provider \"ultradns\" {{")?;
        writeln!(out, "\tusername = \"${{var.ultradns_username}}\"")?;
        writeln!(out, "\tpassword = \"${{var.ultradns_password}}\"")?;
        writeln!(
            out,
            "\tbaseurl  = \"{}/\"",
            escape(base_url.trim_end_matches('/'))
        )?;
        writeln!(out, "}}")?;
        Ok(Self { out, blocks: 0 })
    }

    pub fn write_record(&mut self, record: &ResourceRecord<'_>) -> io::Result<()> {
        let rdata = record
            .rdata
            .iter()
            .map(|v| format!("\"{}\"", escape(v)))
            .collect::<Vec<_>>()
            .join(", ");

        writeln!(
            self.out,
            "resource \"{RESOURCE_TYPE}\" \"{}\" {{",
            escape(record.identifier.as_str())
        )?;
        writeln!(self.out, "\tzone = \"{}\"", escape(record.zone))?;
        writeln!(self.out, "\tname = \"{}\"", escape(record.name))?;
        writeln!(self.out, "\trdata = [{rdata}]")?;
        writeln!(self.out, "\ttype = \"{}\"", escape(record.rtype))?;
        writeln!(self.out, "\tttl = {}", record.ttl)?;
        writeln!(self.out, "}}")?;

        self.blocks += 1;
        Ok(())
    }

    /// Resource blocks written so far.
    pub fn blocks(&self) -> usize {
        self.blocks
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Quote a value for use inside an HCL string literal.
///
/// Backslashes and double quotes are escaped, line breaks become `\n`/`\r`
/// and `${` is doubled so record data is never read as an interpolation.
pub fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '$' if chars.peek() == Some(&'{') => out.push_str("$$"),
            _ => out.push(c),
        }
    }
    out
}
