use std::borrow::Cow;

pub const ELLIPSIS: &str = "...";

/// Shortens `text` so it fits in `max_width`, marking the cut with `"..."`.
///
/// Text that already fits is returned as-is. Otherwise characters are taken
/// from the front while the prefix plus the ellipsis still fits. When not
/// even the ellipsis fits, the result is the bare ellipsis.
pub fn truncate_to_width<F>(text: &str, max_width: f32, measure: F) -> Cow<'_, str>
where
    F: Fn(&str) -> f32,
{
    if measure(text) <= max_width {
        return Cow::Borrowed(text);
    }

    let ellipsis_width = measure(ELLIPSIS);
    let mut partial = String::with_capacity(text.len());
    for c in text.chars() {
        partial.push(c);
        if measure(&partial) + ellipsis_width > max_width {
            partial.pop();
            break;
        }
    }
    partial.push_str(ELLIPSIS);
    Cow::Owned(partial)
}
