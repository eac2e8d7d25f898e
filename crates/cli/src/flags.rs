use archnotes_core::NATIVE_EOL;
use clap::ValueEnum;

#[derive(Copy, Clone, ValueEnum)]
pub(crate) enum EolFlag {
    Lf,
    Crlf,
    Native,
}

impl EolFlag {
    pub(crate) const fn as_str(self) -> &'static str {
        match self {
            EolFlag::Lf => "\n",
            EolFlag::Crlf => "\r\n",
            EolFlag::Native => NATIVE_EOL,
        }
    }
}

#[derive(Copy, Clone, ValueEnum)]
pub(crate) enum OutputFormat {
    /// Rendered architecture document
    Markdown,
    /// Ordered notes as a JSON array
    Json,
}
