//! Delimiter auto-detection from a leading sample of the input.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::ConvertResult;

/// Candidate delimiters, in tie-break priority order.
const CANDIDATES: [u8; 4] = [b',', b';', b'\t', b'|'];

/// Bytes sampled from the head of the file.
const SAMPLE_LEN: usize = 64 * 1024;

/// Lines examined for per-line consistency.
const SAMPLE_LINES: usize = 10;

/// Sniff the delimiter from the head of a delimited-text file.
/// Falls back to comma when the sample is empty or ambiguous.
pub fn sniff_delimiter<P: AsRef<Path>>(path: P) -> ConvertResult<u8> {
    let mut file = File::open(path)?;
    let mut sample = vec![0u8; SAMPLE_LEN];
    let n = file.read(&mut sample)?;
    sample.truncate(n);
    Ok(detect_delimiter(&sample))
}

/// Pick the delimiter whose quote-aware count is consistent across the
/// sampled lines. A candidate seen the same nonzero number of times on
/// every line wins; otherwise the highest total count wins.
pub fn detect_delimiter(sample: &[u8]) -> u8 {
    let lines: Vec<&[u8]> = sample
        .split(|&b| b == b'\n')
        .map(|line| line.strip_suffix(b"\r").unwrap_or(line))
        .filter(|line| !line.is_empty())
        .take(SAMPLE_LINES)
        .collect();

    if lines.is_empty() {
        return b',';
    }

    let mut best: Option<(u8, usize, bool)> = None; // (delim, total, consistent)

    for &candidate in &CANDIDATES {
        let counts: Vec<usize> = lines
            .iter()
            .map(|line| count_unquoted(line, candidate))
            .collect();

        let total: usize = counts.iter().sum();
        if total == 0 {
            continue;
        }
        let consistent = counts.iter().all(|&c| c == counts[0]) && counts[0] > 0;

        let better = match best {
            None => true,
            Some((_, best_total, best_consistent)) => {
                (consistent && !best_consistent)
                    || (consistent == best_consistent && total > best_total)
            }
        };
        if better {
            best = Some((candidate, total, consistent));
        }
    }

    best.map(|(d, _, _)| d).unwrap_or(b',')
}

/// Count occurrences of `delim` outside double-quoted sections.
fn count_unquoted(line: &[u8], delim: u8) -> usize {
    let mut in_quotes = false;
    let mut count = 0;
    for &b in line {
        if b == b'"' {
            in_quotes = !in_quotes;
        } else if b == delim && !in_quotes {
            count += 1;
        }
    }
    count
}
