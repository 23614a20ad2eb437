use reqwest::Url;

/// Final path segment of an OpenAlex id, e.g. `A5023888391` for
/// `https://openalex.org/A5023888391`. Bare ids are returned unchanged.
pub(crate) fn short_id(id: &str) -> &str {
    let id = id.trim().trim_end_matches('/');
    id.rsplit('/').next().unwrap_or(id)
}

/// Whether two OpenAlex ids name the same entity.
pub(crate) fn same_id(a: &str, b: &str) -> bool {
    let (a, b) = (short_id(a), short_id(b));
    !a.is_empty() && a.eq_ignore_ascii_case(b)
}

/// `{base}/authors/{short id}`
pub(crate) fn author_url(base_url: &str, id: &str) -> String {
    format!(
        "{}/authors/{}",
        base_url.trim_end_matches('/'),
        short_id(id)
    )
}

/// Turns a works listing URL into the matching author listing URL by
/// swapping the `works` path segment for `authors`, keeping the query.
pub(crate) fn profile_url_from_works(works_url: &str) -> String {
    let Ok(mut url) = Url::parse(works_url) else {
        return works_url.replacen("works", "authors", 1);
    };
    let segments = url
        .path_segments()
        .map(|segments| segments.map(str::to_owned).collect::<Vec<_>>())
        .unwrap_or_default();
    if let Some(pos) = segments.iter().rposition(|segment| segment == "works")
        && let Ok(mut path) = url.path_segments_mut()
    {
        path.clear();
        for (i, segment) in segments.iter().enumerate() {
            path.push(if i == pos { "authors" } else { segment });
        }
    }
    url.to_string()
}
