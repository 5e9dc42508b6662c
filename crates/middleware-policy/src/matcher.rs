/// Check whether `target` matches a dotted method pattern.
///
/// Both sides are split on `.` and compared position by position:
///
/// * A pattern segment of `*` matches whatever is (or is not) at that
///   position in the target.
/// * Any other pattern segment matches only an equal target segment.
/// * Positions past the end of the pattern never match.
///
/// A target with no `.` separator at all is unmatchable, even by `*.*` —
/// only namespaced `Namespace.method` identifiers participate in policy
/// filtering.
pub fn matches(pattern: &str, target: &str) -> bool {
    if !target.contains('.') {
        return false;
    }

    let pattern_segments: Vec<&str> = pattern.split('.').collect();
    let target_segments: Vec<&str> = target.split('.').collect();

    // Compare up to the longer of the two splits so that a length mismatch
    // on either side is visible as a missing segment.
    let positions = pattern_segments.len().max(target_segments.len());
    (0..positions).all(
        |i| match (pattern_segments.get(i), target_segments.get(i)) {
            (Some(&"*"), _) => true,
            (Some(p), Some(t)) => p == t,
            _ => false,
        },
    )
}
