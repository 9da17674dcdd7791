//! HTML page bodies for the line board
//!
//! Fragments returned by the `/send` endpoint.

/// Page confirming that `line` was added to the board.
///
/// The line is echoed verbatim, exactly as it arrived in the query string.
pub fn added_page(line: &str) -> String {
    format!(
        "<h1>Added line [<a href=\"/show\" target=\"_blank\">see all</a>]:<br/><pre>{}</pre>",
        line
    )
}

/// Page asking the visitor to supply a line.
pub fn prompt_page() -> &'static str {
    "<h1>Please, enter your line as /send?&lt;my_line&gt;."
}
