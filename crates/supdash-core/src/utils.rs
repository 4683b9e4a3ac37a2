//! String helpers shared by routing, search and navigation.

/// Convert a display title into a route segment.
///
/// Lowercases the title and collapses each run of whitespace into a single
/// `-`. Leading and trailing whitespace is dropped.
///
/// # Examples
/// ```
/// use supdash_core::utils::slugify;
///
/// assert_eq!(slugify("Full-Time Agents"), "full-time-agents");
/// assert_eq!(slugify("Tier  1"), "tier-1");
/// ```
pub fn slugify(title: &str) -> String {
    title
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}

/// Turn a route segment back into a readable label.
///
/// Hyphens become spaces and the first letter of every word is uppercased.
/// The rest of each word is left as is, so `tier-1` reads `Tier 1`.
///
/// # Examples
/// ```
/// use supdash_core::utils::title_case;
///
/// assert_eq!(title_case("beta-agents"), "Beta Agents");
/// ```
pub fn title_case(segment: &str) -> String {
    segment
        .replace('-', " ")
        .split(' ')
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

/// camelCase a title: the first word lowercased, later words capitalized.
///
/// # Examples
/// ```
/// use supdash_core::utils::camel_case;
///
/// assert_eq!(camel_case("Teams"), "teams");
/// assert_eq!(camel_case("Tier One Ops"), "tierOneOps");
/// ```
pub fn camel_case(title: &str) -> String {
    let mut out = String::with_capacity(title.len());
    for (idx, word) in title.split_whitespace().enumerate() {
        if idx == 0 {
            out.push_str(&word.to_lowercase());
        } else {
            out.push_str(&capitalize(&word.to_lowercase()));
        }
    }
    out
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}
