//! Search filtering over the option list.

/// Options matching `query`, in their original order.
///
/// A blank (whitespace-only) query, or `searchable == false`, yields every
/// option. Otherwise an option matches when its lowercase form contains the
/// lowercase query. The query itself is not trimmed.
pub fn filter_options<'a>(options: &'a [String], query: &str, searchable: bool) -> Vec<&'a str> {
    if !searchable || query.trim().is_empty() {
        return options.iter().map(String::as_str).collect();
    }
    let needle = query.to_lowercase();
    options
        .iter()
        .filter(|option| option.to_lowercase().contains(&needle))
        .map(String::as_str)
        .collect()
}
