//! Boundary crossing query over a scanned boundary list

/// The pair of boundaries straddled by a tainted span.
///
/// `lower` is the last boundary at or before the span's start offset;
/// `upper` is the first boundary strictly inside the span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Crossing {
    /// Last boundary at or before the span start.
    pub lower: usize,
    /// First boundary strictly inside the span.
    pub upper: usize,
}

/// Checks whether the half-open span `[index, index + input_len)` straddles
/// a boundary from `boundaries`.
///
/// `boundaries` must be the non-decreasing output of a scan. A span that
/// sits wholly inside one token, or whose end coincides with the next
/// boundary, does not cross.
pub fn find_crossing(boundaries: &[usize], index: usize, input_len: usize) -> Option<Crossing> {
    let mut last = 0;
    for &b in boundaries {
        if b > index {
            if b < index + input_len {
                return Some(Crossing { lower: last, upper: b });
            }
            // The next boundary already lies at or beyond the span's end.
            return None;
        }
        last = b;
    }
    None
}
