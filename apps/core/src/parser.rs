use crate::model::{joined_terms, VmRecord};

/// A cursor-advancing scanner over inventory text. Each well-formed entry has
/// the shape `"<name>" {<id>}`; anything between entries is ignored. The
/// iterator is lazy and restartable: building a new one over the same text
/// yields the same sequence, and scanning never mutates the input.
pub struct Entries<'a> {
    raw: &'a str,
    cursor: usize,
}

pub fn entries(raw: &str) -> Entries<'_> {
    Entries { raw, cursor: 0 }
}

impl<'a> Iterator for Entries<'a> {
    type Item = VmRecord;

    fn next(&mut self) -> Option<VmRecord> {
        while self.cursor < self.raw.len() {
            let rest = &self.raw[self.cursor..];
            let quote_start = match rest.find('"') {
                Some(offset) => self.cursor + offset,
                None => return None,
            };

            match entry_at(self.raw, quote_start) {
                Some((record, end)) => {
                    self.cursor = end;
                    return Some(record);
                }
                None => {
                    // Malformed fragment: resume at the next candidate quote,
                    // the way a pattern engine would retry from the following
                    // start position.
                    self.cursor = quote_start + 1;
                }
            }
        }

        None
    }
}

/// Tries to read one `"<name>" {<id>}` entry whose opening quote sits at
/// `quote_start`. Returns the record and the byte offset just past the
/// closing brace. Names never contain quotes and entries never span lines.
fn entry_at(raw: &str, quote_start: usize) -> Option<(VmRecord, usize)> {
    let after_quote = &raw[quote_start + 1..];
    let name_len = after_quote.find(|c| c == '"' || c == '\n')?;
    if after_quote[name_len..].starts_with('\n') {
        return None;
    }
    let name = &after_quote[..name_len];

    let after_name = &after_quote[name_len + 1..];
    let brace_open = after_name.find(|c: char| !c.is_whitespace())?;
    if !after_name[brace_open..].starts_with('{') || after_name[..brace_open].contains('\n') {
        return None;
    }
    let brace_close = after_name[brace_open..].find('}')? + brace_open;
    if after_name[brace_open..brace_close].contains('\n') {
        return None;
    }
    let id = &after_name[brace_open..=brace_close];

    let end = quote_start + 1 + name_len + 1 + brace_close + 1;
    Some((VmRecord::new(id, name), end))
}

/// Scans `raw` for entries whose name contains the full joined-terms string,
/// case-insensitively. Zero terms (or all-empty terms) match every entry.
/// Entries keep their order of appearance; malformed fragments yield nothing.
pub fn parse(raw: &str, terms: &[String]) -> Vec<VmRecord> {
    let needle = joined_terms(terms);

    entries(raw)
        .filter(|record| needle.is_empty() || record.name.to_lowercase().contains(&needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{entries, parse};

    #[test]
    fn entry_consumed_once_per_scan() {
        let raw = "\"Win10\" {abc-123}";
        let mut scan = entries(raw);

        assert_eq!(scan.next().map(|r| r.id), Some("{abc-123}".to_string()));
        assert_eq!(scan.next(), None);
    }

    #[test]
    fn quote_without_brace_pair_is_skipped() {
        let raw = "\"Broken\" no-brace\n\"Ok\" {id-1}\n";
        let records = parse(raw, &[]);

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "Ok");
    }

    #[test]
    fn entry_must_not_span_lines() {
        let raw = "\"Dangling\n{id-1}\n";
        assert!(parse(raw, &[]).is_empty());
    }
}
