use approute::{html, Markup, Metadata, Segment};

/// Site chrome and the title template every page fills
pub fn segment() -> Segment {
    Segment::new()
        .metadata(
            Metadata::new()
                .title_template("Next.js Tutorial", "%s | Bug Finderr")
                .description("Home page"),
        )
        .layout(layout)
}

fn layout(children: Markup) -> Markup {
    html! {
        header class="py-10" {
            p class="bg-gray-200" { "Header" }
        }
        (children)
        footer class="py-10" {
            p class="bg-gray-200" { "Footer" }
        }
    }
}
