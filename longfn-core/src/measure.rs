//! Function size measurement
//!
//! The size of a function is the non-empty line count of its canonical
//! re-serialization, not its raw span in the original file. Rendering the
//! parsed tree back to text normalizes formatting-only differences (blank
//! lines, comments, line breaks) so the count reflects logical structure.

use syn::ItemFn;

/// Render a single function back to canonical source text
pub fn render_function(item_fn: &ItemFn) -> String {
    let file = syn::File {
        shebang: None,
        attrs: Vec::new(),
        items: vec![syn::Item::Fn(item_fn.clone())],
    };
    prettyplease::unparse(&file)
}

/// Count the non-empty lines of the trimmed rendering
pub fn count_source_lines(rendered: &str) -> usize {
    rendered
        .trim()
        .lines()
        .filter(|line| !line.trim().is_empty())
        .count()
}
