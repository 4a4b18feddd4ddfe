use clap::{Parser, Subcommand, ValueEnum};
use dg_huffman::StorageLayout;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub action: RootCommands,
}

#[derive(Debug, Subcommand)]
pub enum RootCommands {
    #[command(about = "Checks huffman_key/huffman_value directives against a storage layout", long_about = None)]
    Check {
        #[arg(short, long, default_value = "")]
        key: String,
        #[arg(short, long, default_value = "")]
        value: String,
        #[arg(short, long, default_value = "row")]
        layout: StorageLayout,
    },
    #[command(about = "Prints the frequency table a directive resolves to", long_about = None)]
    Dump {
        directive: String,
        #[arg(short, long)]
        output: Option<TableOutput>,
    },
    #[command(about = "Opens and closes the codecs described by a JSON table config", long_about = None)]
    Open {
        config: String,
        #[arg(short, long, default_value = "row")]
        layout: StorageLayout,
    },
}

#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum TableOutput {
    #[default]
    Text,
    Json,
}
