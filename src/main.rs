use clap::Parser;

mod options {
    use std::path::PathBuf;

    #[derive(Debug, clap::Parser)]
    #[command(
        name = "billionaires",
        about = "Merge yearly billionaire CSV exports into one JSON file"
    )]
    pub struct Args {
        /// The directory containing the `billionaires_<year>.csv` files.
        #[clap(long, short = 'i', default_value = "public")]
        pub input_dir: PathBuf,
        /// The JSON file to write, `<input-dir>/data/billionaires.json` by default.
        ///
        /// Missing parent directories will be created.
        #[clap(long, short = 'o')]
        pub output: Option<PathBuf>,
        /// The first year to look for a CSV file.
        #[clap(long, default_value = "1997")]
        pub first_year: u16,
        /// The last year to look for a CSV file, inclusive.
        #[clap(long, default_value = "2024")]
        pub last_year: u16,
        /// Also write residence, citizenship and gender of each person.
        #[clap(long)]
        pub with_profile: bool,
    }
}

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();
    let options::Args {
        input_dir,
        output,
        first_year,
        last_year,
        with_profile,
    } = options::Args::parse();

    let outcome = billionaires::merge(billionaires::merge::Options {
        input_dir,
        output,
        years: first_year..=last_year,
        with_profile,
    })?;
    println!(
        "Wrote {} records to {}",
        outcome.records,
        outcome.output.display()
    );
    Ok(())
}
