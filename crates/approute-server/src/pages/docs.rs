use approute::{html, PageResult, Params, Segment};

pub fn segment() -> Segment {
    Segment::new().page(page)
}

/// One slug segment names a feature, two name a feature and a concept.
/// Anything else is the docs home page.
fn page(params: &Params) -> PageResult {
    let slug = params.many("slug").unwrap_or_default();

    Ok(match slug {
        [feature] => html! { h1 { "Viewing Docs for feature " (feature) } },
        [feature, concept] => html! {
            h1 { "Viewing Docs for feature " (feature) " and concept " (concept) }
        },
        _ => html! { h1 { "Docs Home Page" } },
    })
}
