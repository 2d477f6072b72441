use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Concatenate a directory's text files into a single summary.",
    long_about = "codedump walks a directory tree, keeps the files that look like text and \nsurvive the .dumpignore rules at the root, and concatenates their contents \ninto one summary. The summary lands on the system clipboard unless -o \nredirects it to a file.",
    after_help = "EXAMPLES:\n  codedump .\n  codedump path/to/project -o summary.txt\n  codedump src -q"
)]
pub struct Cli {
    #[arg(value_name = "ROOT", help = "Directory to scan.")]
    pub root: PathBuf,

    #[arg(
        short = 'o',
        long,
        value_name = "FILE",
        help = "Write the summary to FILE instead of the clipboard.",
        help_heading = "Output Control"
    )]
    pub output: Option<PathBuf>,

    #[arg(short, long, action = clap::ArgAction::Count, help = "Increase message verbosity (-v, -vv).")]
    pub verbose: u8,

    #[arg(
        short,
        long,
        help = "Silence informational messages and warnings."
    )]
    pub quiet: bool,
}
