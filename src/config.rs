use confique::Config as DeriveConfig;

#[derive(Debug, DeriveConfig)]
pub struct Config {
    /// Number of spaces per indentation level in pretty-printed output.
    #[config(default = 2, env = "JSONADE_INDENT_WIDTH")]
    pub indent_width: usize,
}
