//! Mounted-sequence construction for a reel.

use rand::seq::SliceRandom;
use rand::Rng;

/// Minimum mounted-sequence length before the landing zone.
pub const MIN_SEQUENCE_LEN: usize = 60;

/// Shown when a reel is asked to spin with no candidate values.
pub const PLACEHOLDER: &str = "—";

/// Build the looping sequence a reel spins through.
///
/// A shuffled permutation of `values` is repeated until the sequence
/// reaches [`MIN_SEQUENCE_LEN`], then two copies of `final_value` are
/// appended. The trailing pair is the landing zone: it guarantees a
/// stop point on the final value exists near the end of the loop even
/// under worst-case timing, and that the stop lands on a stable run
/// rather than a single frame. `final_value` does not need to be a
/// member of `values`.
pub fn build_sequence<R: Rng + ?Sized>(
    rng: &mut R,
    values: &[String],
    final_value: &str,
) -> Vec<String> {
    let base: Vec<String> = if values.is_empty() {
        vec![PLACEHOLDER.to_string()]
    } else {
        let mut shuffled = values.to_vec();
        shuffled.shuffle(rng);
        shuffled
    };

    let mut sequence = Vec::with_capacity(MIN_SEQUENCE_LEN + base.len() + 2);
    while sequence.len() < MIN_SEQUENCE_LEN {
        sequence.extend(base.iter().cloned());
    }
    sequence.push(final_value.to_string());
    sequence.push(final_value.to_string());
    sequence
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn values(names: &[&str]) -> Vec<String> {
        names.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_minimum_length_and_landing_zone() {
        let mut rng = StdRng::seed_from_u64(1);
        let seq = build_sequence(&mut rng, &values(&["A", "B", "C"]), "B");
        assert!(seq.len() >= MIN_SEQUENCE_LEN + 2);
        let n = seq.len();
        assert_eq!(seq[n - 1], "B");
        assert_eq!(seq[n - 2], "B");
    }

    #[test]
    fn test_sequence_is_repeated_permutation() {
        let mut rng = StdRng::seed_from_u64(1);
        let base = values(&["A", "B", "C", "D"]);
        let seq = build_sequence(&mut rng, &base, "X");
        // body is whole repetitions of one 4-element permutation
        let body = &seq[..seq.len() - 2];
        assert_eq!(body.len() % base.len(), 0);
        let first = &body[..base.len()];
        let mut sorted = first.to_vec();
        sorted.sort();
        assert_eq!(sorted, base);
        for chunk in body.chunks(base.len()) {
            assert_eq!(chunk, first);
        }
    }

    #[test]
    fn test_final_value_need_not_be_candidate() {
        let mut rng = StdRng::seed_from_u64(1);
        let seq = build_sequence(&mut rng, &values(&["A"]), "Z");
        assert_eq!(seq.last().map(String::as_str), Some("Z"));
        assert!(seq[..seq.len() - 2].iter().all(|v| v == "A"));
    }

    #[test]
    fn test_empty_candidates_use_placeholder() {
        let mut rng = StdRng::seed_from_u64(1);
        let seq = build_sequence(&mut rng, &[], "W");
        assert!(seq[..seq.len() - 2].iter().all(|v| v == PLACEHOLDER));
        assert_eq!(seq.len(), MIN_SEQUENCE_LEN + 2);
    }
}
