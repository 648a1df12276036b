use bintaxlib::convert::convert;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Пример: выгрузка Binance из stdin -> леджер в stdout
    convert(std::io::BufReader::new(std::io::stdin()), std::io::stdout())?;
    Ok(())
}
