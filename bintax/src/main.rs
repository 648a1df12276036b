use bintaxlib::{convert::convert, error::Result};
use clap::Parser;
use std::fs::File;
use std::io::BufReader;

#[derive(Parser, Debug)]
#[command(name = "bintax", version, about = "Выгрузка Binance -> нормализованный леджер (CSV)")]
struct Cli {
    /// Входной файл (выгрузка транзакций Binance)
    #[arg(short = 'i', long = "input")]
    input: String,

    /// Выходной файл (леджер)
    #[arg(short = 'o', long = "output")]
    output: String,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let reader = BufReader::new(File::open(&cli.input)?);
    let writer = File::create(&cli.output)?;

    convert(reader, writer)
}
