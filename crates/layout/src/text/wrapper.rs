/// Greedy line breaking.
///
/// The text is first split on `'\n'`; every segment starts a new line and an
/// empty segment yields an empty line. Within a segment words are separated
/// by single spaces and packed onto the current line while
/// `measure(line + " " + word) <= max_width`. The first word that does not
/// fit starts the next line, even if it is wider than `max_width` on its own.
///
/// Words are rejoined with exactly one space, so a segment that fits is
/// returned unchanged (including runs of spaces).
pub fn wrap_paragraph<F>(text: &str, max_width: f32, measure: F) -> Vec<String>
where
    F: Fn(&str) -> f32,
{
    let mut lines = Vec::new();
    for segment in text.split('\n') {
        wrap_segment(segment, max_width, &measure, &mut lines);
    }
    lines
}

fn wrap_segment<F>(segment: &str, max_width: f32, measure: &F, lines: &mut Vec<String>)
where
    F: Fn(&str) -> f32,
{
    let mut words = segment.split(' ');
    // `split` always yields at least one item, possibly empty.
    let mut line = words.next().unwrap_or_default().to_string();
    let mut candidate = String::with_capacity(segment.len());

    for word in words {
        candidate.clear();
        candidate.push_str(&line);
        candidate.push(' ');
        candidate.push_str(word);

        if line.is_empty() || measure(&candidate) <= max_width {
            std::mem::swap(&mut line, &mut candidate);
        } else {
            if measure(word) > max_width {
                log::trace!("word wider than the line ({} > {}), placing it alone", measure(word), max_width);
            }
            lines.push(std::mem::replace(&mut line, word.to_string()));
        }
    }
    lines.push(line);
}
