//! The subcommands, operating on arbitrary readers and writers.
use std::io::{self, BufRead, Write};

use ordsets::{OrderedMap, SeenSet};

/// Copies each distinct line of `input` to `out`, keeping the first occurrence.
///
/// Returns the number of lines written.
pub fn dedup(input: impl BufRead, mut out: impl Write) -> io::Result<usize> {
    let mut seen = SeenSet::<String>::new();
    let mut total = 0;
    for line in input.lines() {
        let line = line?;
        total += 1;
        if !seen.has(line.as_str()) {
            writeln!(out, "{line}")?;
            seen.set_seen(line);
        }
    }
    log::debug!("{total} lines, {} distinct", seen.len());
    Ok(seen.len())
}

/// Marks every line of `input` as seen.
pub fn load_known(input: impl BufRead) -> io::Result<SeenSet<String>> {
    let mut known = SeenSet::new();
    for line in input.lines() {
        known.set_seen(line?);
    }
    log::debug!("loaded {} known lines", known.len());
    Ok(known)
}

/// Writes the distinct lines of `input` that are (`seen == true`) or are not (`seen == false`)
/// contained in `known`.
///
/// Returns the number of lines written.
pub fn filter(
    known: &SeenSet<String>,
    input: impl BufRead,
    mut out: impl Write,
    seen: bool,
) -> io::Result<usize> {
    let lines = input.lines().collect::<io::Result<Vec<_>>>()?;
    let selected = if seen {
        known.filter_seen(lines)
    } else {
        known.filter_not_seen(lines)
    };
    for line in selected.iter() {
        writeln!(out, "{line}")?;
    }
    Ok(selected.len())
}

/// Writes `word<TAB>count` for every whitespace separated word of `input`, in ascending order.
///
/// Returns the number of lines written.
pub fn count(input: impl BufRead, mut out: impl Write) -> io::Result<usize> {
    let mut counts: OrderedMap<String, usize> = OrderedMap::new();
    for line in input.lines() {
        for word in line?.split_whitespace() {
            match counts.get_mut(word) {
                Some(count) => *count += 1,
                None => {
                    counts.add(word.to_owned(), 1);
                }
            }
        }
    }
    for (word, count) in counts.iter() {
        writeln!(out, "{word}\t{count}")?;
    }
    log::debug!("{} distinct words", counts.len());
    Ok(counts.len())
}
