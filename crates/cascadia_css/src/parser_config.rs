/// ParserConfig holds the configuration for one parse
#[derive(Debug, Clone, Default)]
pub struct ParserConfig {
    /// When true, comment tokens become comment nodes; when false they are
    /// dropped everywhere, including inside declaration and rule bodies
    pub comments: bool,
    /// When true, every produced node carries the source span of its token
    pub position: bool,
    /// Optional source filename or url, used as instrumentation context only
    pub source: Option<String>,
}
