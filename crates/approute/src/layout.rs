// File: src/layout.rs
// Purpose: Wraps page content in the layouts of its ancestors

use maud::Markup;
use std::sync::Arc;

/// A layout receives the rendered content of everything below it
pub type LayoutFn = Arc<dyn Fn(Markup) -> Markup + Send + Sync>;

/// Composes layouts around a page
///
/// `layouts` is ordered outermost first; the last layout wraps the page
/// directly and the first one produces the final markup.
///
/// ```
/// use approute::{compose_layouts, html, LayoutFn, Markup};
/// use std::sync::Arc;
///
/// let outer: LayoutFn = Arc::new(|children: Markup| html! { main { (children) } });
/// let inner: LayoutFn = Arc::new(|children: Markup| html! { section { (children) } });
///
/// let markup = compose_layouts([&outer, &inner], html! { p { "hi" } });
/// assert_eq!(markup.into_string(), "<main><section><p>hi</p></section></main>");
/// ```
pub fn compose_layouts<'a, I>(layouts: I, page: Markup) -> Markup
where
    I: IntoIterator<Item = &'a LayoutFn>,
    I::IntoIter: DoubleEndedIterator,
{
    layouts
        .into_iter()
        .rev()
        .fold(page, |children, layout| layout(children))
}
