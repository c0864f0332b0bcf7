//! arXiv identifier helpers: input cleanup and uniform random sampling.

use std::collections::BTreeMap;

use rand::Rng;

/// Month (`yymm`) to submission count. Loaded from the published statistics
/// table and injected by the caller; the sampler keeps no state of its own.
pub type SubmissionTable = BTreeMap<String, u64>;

/// Identifier scheme change: from 1501 on, the per-month number is 5 digits.
const FIVE_DIGIT_EPOCH: u32 = 1501;

/// Normalize user input into a bare arXiv identifier.
///
/// Accepts a bare ID, an `arXiv:`-prefixed ID (any case), or an
/// `https://arxiv.org/abs/...` / `.../pdf/...` URL, of which the last path
/// segment is taken.
///
/// ```rust
/// use texgleaner::arxiv::clean_arxiv_id;
///
/// assert_eq!(clean_arxiv_id(" arXiv:2312.08472 "), "2312.08472");
/// assert_eq!(clean_arxiv_id("https://arxiv.org/abs/2312.08472"), "2312.08472");
/// ```
pub fn clean_arxiv_id(input: &str) -> String {
    let mut id = input.trim();

    if let Some(prefix) = id.get(..6) {
        if prefix.eq_ignore_ascii_case("arxiv:") {
            id = id[6..].trim();
        }
    }

    if id.starts_with("https://arxiv.org/") {
        id = id.rsplit('/').next().unwrap_or(id);
    }

    id.to_string()
}

/// Draw one identifier uniformly over all submissions in `table`.
///
/// Every submission across every month is equally likely: a random index in
/// `1..=total` is mapped back to its month by a cumulative-sum walk, and the
/// offset within that month becomes the per-month number. Months before
/// `1501` format the number with four digits, later months with five.
///
/// Returns `None` for an empty (or all-zero) table.
pub fn random_arxiv_id<R: Rng + ?Sized>(table: &SubmissionTable, rng: &mut R) -> Option<String> {
    let total: u64 = table.values().sum();
    if total == 0 {
        return None;
    }
    let pick = rng.random_range(1..=total);

    let mut cumulative = 0u64;
    for (yymm, count) in table {
        cumulative += count;
        if pick <= cumulative {
            let number = pick - (cumulative - count);
            return Some(format_arxiv_id(yymm, number));
        }
    }
    None
}

fn format_arxiv_id(yymm: &str, number: u64) -> String {
    let four_digit = yymm
        .parse::<u32>()
        .map(|m| m < FIVE_DIGIT_EPOCH)
        .unwrap_or(false);
    if four_digit {
        format!("{yymm}.{number:04}")
    } else {
        format!("{yymm}.{number:05}")
    }
}
