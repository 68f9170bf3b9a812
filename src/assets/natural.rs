use std::cmp::Ordering;

/// Compare two names so embedded digit runs order by numeric value (`2` < `10`).
///
/// Digit runs are compared ignoring leading zeros; on a tie the run with fewer leading zeros sorts
/// first, so the order stays total and stable. Everything else compares by code point.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let a = a.as_bytes();
    let b = b.as_bytes();
    let (mut i, mut j) = (0usize, 0usize);

    while i < a.len() && j < b.len() {
        if a[i].is_ascii_digit() && b[j].is_ascii_digit() {
            let (a_run, next_i) = digit_run(a, i);
            let (b_run, next_j) = digit_run(b, j);
            let ord = cmp_digit_runs(a_run, b_run);
            if ord != Ordering::Equal {
                return ord;
            }
            i = next_i;
            j = next_j;
            continue;
        }

        match a[i].cmp(&b[j]) {
            Ordering::Equal => {
                i += 1;
                j += 1;
            }
            ord => return ord,
        }
    }

    (a.len() - i).cmp(&(b.len() - j))
}

fn digit_run(s: &[u8], start: usize) -> (&[u8], usize) {
    let end = s[start..]
        .iter()
        .position(|c| !c.is_ascii_digit())
        .map_or(s.len(), |off| start + off);
    (&s[start..end], end)
}

fn cmp_digit_runs(a: &[u8], b: &[u8]) -> Ordering {
    let a_trim = trim_leading_zeros(a);
    let b_trim = trim_leading_zeros(b);
    a_trim
        .len()
        .cmp(&b_trim.len())
        .then_with(|| a_trim.cmp(b_trim))
        .then_with(|| a.len().cmp(&b.len()))
}

fn trim_leading_zeros(run: &[u8]) -> &[u8] {
    let first = run.iter().position(|&c| c != b'0').unwrap_or(run.len());
    &run[first..]
}

#[cfg(test)]
#[path = "../../tests/unit/assets/natural.rs"]
mod tests;
