use std::io::Error;

fn main() -> Result<(), Error> {
    dg_huffman_cli::run_cli()
}
