const CONTINUATION: &str = "\\\n ";

/// Wraps tokens into lines of at most `width` columns.
///
/// Every line but the last ends with a backslash and every line but the first
/// starts with a space. A token wider than a line gets a line of its own.
pub fn wrap<'a>(width: usize, tokens: impl IntoIterator<Item = &'a str>) -> String {
    let mut output = String::new();
    let mut space = width;
    let mut empty = true;
    let mut tokens = tokens.into_iter().peekable();

    while let Some(token) = tokens.next() {
        let length = token.chars().count();

        if !empty && space < length + 2 {
            output.push_str(CONTINUATION);
            space = width.saturating_sub(1);
        }

        output.push_str(token);
        empty = false;

        if tokens.peek().is_some() {
            output.push(' ');
            space = space.saturating_sub(length + 1);
        } else {
            output.push('\n');
        }
    }

    output
}
