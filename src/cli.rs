use std::path::PathBuf;

use clap::{Args, Parser};

#[derive(Parser, Debug)]
#[command(version)]
pub struct Cli {
    #[command(flatten)]
    pub options: GlobalOptions,

    #[command(flatten)]
    pub inline: InlineOptions,
}

#[derive(Args, Debug)]
pub struct GlobalOptions {
    #[command(flatten)]
    pub verbose: clap_verbosity_flag::Verbosity<clap_verbosity_flag::InfoLevel>,
}

#[derive(Args, Debug)]
pub struct InlineOptions {
    /// The directory containing the `js`, `fonts`, and `images` subdirectories
    /// to inline. Missing subdirectories are treated as empty.
    #[arg(
        short,
        long,
        value_name = "DIR",
        env = "INLINE_ASSETS_INPUT_DIR",
        default_value = "app/src/main/assets/inline"
    )]
    pub input_dir: PathBuf,

    /// The directory to write `inlined_assets.json` into.
    /// Created (including parents) if it does not exist.
    #[arg(
        short,
        long,
        value_name = "DIR",
        env = "INLINE_ASSETS_OUTPUT_DIR",
        default_value = "app/src/main/assets/inline_out"
    )]
    pub output_dir: PathBuf,
}
