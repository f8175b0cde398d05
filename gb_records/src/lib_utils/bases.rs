// bases of one feature, strand aware

use bio::alphabets::dna;
use super::record::{Span, Strand};

/// Bases under `span`, reverse complemented on the reverse strand. Bounds
/// falling outside the sequence are clamped.
pub fn extract_span(sequence: &[u8], span: &Span) -> Vec<u8> {
    let clamp = |position: i64| position.clamp(0, sequence.len() as i64) as usize;
    let (start, end) = (clamp(span.start), clamp(span.end));
    if start >= end {
        return Vec::new();
    }
    let slice = &sequence[start..end];
    match span.strand {
        Strand::Reverse => dna::revcomp(slice),
        Strand::Forward | Strand::Mixed => slice.to_vec(),
    }
}
