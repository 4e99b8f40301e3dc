//!plain text vertex files
//!
//!the first line is `Vertex amount: N`, followed by N lines of space separated
//!fixed point decimals in record field order, `x y r g b` or `x y z r g b`.
//!values are written with [`PRECISION`] decimals so reading a file back gives
//!the written values to within half a unit in the last place
use crate::types::Record;
use crate::{Error, Result};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;
pub const HEADER: &str = "Vertex amount:";
///decimal digits after the point
pub const PRECISION: usize = 4;
pub fn write_records<R: Record, W: Write>(out: &mut W, records: &[R]) -> Result<()> {
    writeln!(out, "{HEADER} {}", records.len())?;
    for record in records {
        let mut fields = record.fields().iter();
        if let Some(first) = fields.next() {
            write!(out, "{first:.PRECISION$}")?;
        }
        for v in fields {
            write!(out, " {v:.PRECISION$}")?;
        }
        writeln!(out)?;
    }
    Ok(())
}
///reads exactly as many records as the header declares
pub fn read_records<R: Record, B: BufRead>(input: B) -> Result<Vec<R>> {
    let mut lines = input.lines();
    let count = match lines.next().transpose()? {
        Some(header) => parse_header(&header)?,
        None => return Err(Error::parse(1, "missing header")),
    };
    let mut records = Vec::with_capacity(count.min(4096));
    let mut fields = Vec::with_capacity(R::FIELDS);
    for i in 0..count {
        let line = i + 2;
        let Some(text) = lines.next().transpose()? else {
            return Err(Error::parse(
                line,
                format!("expected {count} records, file ends after {i}"),
            ));
        };
        fields.clear();
        for word in text.split_whitespace() {
            let v = word
                .parse::<f32>()
                .map_err(|e| Error::parse(line, format!("bad value {word:?}: {e}")))?;
            fields.push(v);
        }
        if fields.len() != R::FIELDS {
            return Err(Error::parse(
                line,
                format!("expected {} values, found {}", R::FIELDS, fields.len()),
            ));
        }
        records.push(R::from_fields(&fields));
    }
    let extra = lines
        .map_while(|l| l.ok())
        .filter(|l| !l.trim().is_empty())
        .count();
    if extra != 0 {
        log::warn!("ignoring {extra} lines after the {count} declared records");
    }
    Ok(records)
}
fn parse_header(header: &str) -> Result<usize> {
    let Some(n) = header.trim().strip_prefix(HEADER) else {
        return Err(Error::parse(1, format!("expected {HEADER:?} header")));
    };
    n.trim()
        .parse()
        .map_err(|e| Error::parse(1, format!("bad record count {:?}: {e}", n.trim())))
}
pub fn save<R: Record>(path: &Path, records: &[R]) -> Result<()> {
    let mut out = BufWriter::new(File::create(path)?);
    write_records(&mut out, records)?;
    out.flush()?;
    log::debug!("wrote {} records to {}", records.len(), path.display());
    Ok(())
}
pub fn load<R: Record>(path: &Path) -> Result<Vec<R>> {
    let records = read_records(BufReader::new(File::open(path)?))?;
    log::debug!("read {} records from {}", records.len(), path.display());
    Ok(records)
}
