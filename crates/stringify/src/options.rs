use crate::Replacer;

/// Options controlling the output of [stringify_with_options](crate::stringify_with_options)
#[derive(Default)]
pub struct StringifyOptions {
    /// A replacer that filters or transforms entries as they're encoded (default: `None`)
    pub replacer: Option<Replacer>,

    /// The width in characters to use when inserting indents
    ///
    /// The default of `0` produces compact output with no extra whitespace. Any other width
    /// places container members on their own lines, indented by `indent_width` characters per
    /// nesting level, with a space following each key's colon.
    pub indent_width: u8,
}
