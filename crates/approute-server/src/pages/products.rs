use approute::{html, Markup, Metadata, PageResult, Params, Segment};

pub fn segment() -> Segment {
    Segment::new()
        .layout(layout)
        .generate_page_metadata(metadata)
        .page(page)
}

fn layout(children: Markup) -> Markup {
    html! {
        div {
            h1 { "Featured Products" }
            (children)
        }
    }
}

async fn metadata(params: Params) -> Metadata {
    let id = params.one("productID").unwrap_or_default();
    Metadata::new()
        .title(format!("Product {id}"))
        .description(format!("This is the product {id}"))
}

fn page(params: &Params) -> PageResult {
    let id = params.one("productID").unwrap_or_default();
    Ok(html! { h1 { "Details about Product " (id) } })
}
