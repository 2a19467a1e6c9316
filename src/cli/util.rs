use crate::base;
use crate::cli;

/// If `fullmatch` is false, ensures all patterns start with and end with `*`,
/// except for empty patterns which are left alone. If `fullmatch` is true,
/// does not modify patterns.
pub fn preprocess_patterns<'a>(
    patterns: &'a [String],
    fullmatch: bool,
) -> std::borrow::Cow<'a, [String]> {
    if fullmatch {
        return patterns.into();
    }
    patterns
        .iter()
        .map(|s| {
            let mut s2 = s.clone();
            if s2.is_empty() {
                return s2;
            }
            if !s2.starts_with('*') {
                s2.insert(0, '*');
            }
            if !s2.ends_with('*') {
                s2.push('*');
            }
            s2
        })
        .collect::<Vec<_>>()
        .into()
}

/// Returns a new aggregator such that each accident:
/// - Has an authority matching any wildcard pattern in `authorities`
/// - Has an authority not matching any wildcard pattern in `not_authorities`
pub fn filter_agg<T, U>(
    agg: &base::Aggregator,
    authorities: &[T],
    not_authorities: &[U],
) -> base::Aggregator
where
    T: AsRef<str>,
    U: AsRef<str>,
{
    let incl = authorities
        .iter()
        .map(|s| wildmatch::WildMatch::new(s.as_ref()))
        .collect::<Vec<_>>();
    let excl = not_authorities
        .iter()
        .map(|s| wildmatch::WildMatch::new(s.as_ref()))
        .collect::<Vec<_>>();
    agg.filter(|a| {
        incl.iter().any(|p| p.matches(a.district_authority()))
            && !excl.iter().any(|p| p.matches(a.district_authority()))
    })
}

/// Applies `opts` to `agg`.
pub fn filter_by_opts(
    agg: &base::Aggregator,
    opts: &cli::sharedopts::AuthoritiesOpts,
) -> base::Aggregator {
    let authorities = preprocess_patterns(&opts.authorities, opts.fullmatch);
    let not_authorities = preprocess_patterns(&opts.not_authorities, opts.fullmatch);
    let filtered = filter_agg(agg, &authorities, &not_authorities);
    log::debug!("{} of {} accidents pass authority filters", filtered.len(), agg.len());
    filtered
}
