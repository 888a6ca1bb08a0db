use std::path::PathBuf;

use arrayfile_codec::Layout;

/// The file that is used when neither `--path` nor `ARRAYFILE_PATH` is specified.
pub const DEFAULT_PATH: &str = "test.txt";

/// Environment variable that overrides [`DEFAULT_PATH`].
pub const PATH_VAR: &str = "ARRAYFILE_PATH";

/// Environment variable that selects the layout when `--layout` is not specified.
pub const LAYOUT_VAR: &str = "ARRAYFILE_LAYOUT";

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, clap::ValueEnum)]
pub enum LayoutArg {
    /// The length field starts at the beginning of the file
    Compact,
    /// The length field is preceded by four unused bytes
    Padded,
}

impl From<LayoutArg> for Layout {
    fn from(value: LayoutArg) -> Self {
        match value {
            LayoutArg::Compact => Layout::COMPACT,
            LayoutArg::Padded => Layout::PADDED,
        }
    }
}

/// Options that select the array file to operate on.
#[derive(clap::Args, Debug, Default)]
pub struct FileArgs {
    /// Path of the array file [default: $ARRAYFILE_PATH or test.txt]
    #[clap(long, global = true)]
    path: Option<PathBuf>,

    /// Layout of the array file [default: $ARRAYFILE_LAYOUT or compact]
    #[clap(long, value_enum, global = true)]
    layout: Option<LayoutArg>,
}

/// The resolved location and layout of an array file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileConfig {
    pub path: PathBuf,
    pub layout: Layout,
}

impl FileArgs {
    /// Resolves the options against the process environment.
    pub fn resolve(self) -> FileConfig {
        self.resolve_with(|name| std::env::var(name).ok())
    }

    /// Resolves the options, looking up unspecified values with `var`.
    pub fn resolve_with(self, var: impl Fn(&str) -> Option<String>) -> FileConfig {
        let path = self
            .path
            .or_else(|| var(PATH_VAR).map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_PATH));

        let layout = self
            .layout
            .or_else(|| {
                var(LAYOUT_VAR).map(|value| match value.as_str() {
                    "padded" => LayoutArg::Padded,
                    "compact" => LayoutArg::Compact,
                    _ => {
                        log::warn!("unknown {LAYOUT_VAR} '{value}', using the compact layout");
                        LayoutArg::Compact
                    }
                })
            })
            .unwrap_or(LayoutArg::Compact);

        FileConfig {
            path,
            layout: layout.into(),
        }
    }
}
