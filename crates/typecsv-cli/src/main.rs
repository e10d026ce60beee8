use std::fs::File;
use std::io::{BufWriter, Read, Write, stdin, stdout};
use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::{Parser, ValueEnum};
use log::debug;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum SeparatorArg {
    Comma,
    Semicolon,
    Colon,
    Tab,
    Space,
}

impl From<SeparatorArg> for typecsv::Separator {
    fn from(arg: SeparatorArg) -> Self {
        match arg {
            SeparatorArg::Comma => typecsv::Separator::Comma,
            SeparatorArg::Semicolon => typecsv::Separator::Semicolon,
            SeparatorArg::Colon => typecsv::Separator::Colon,
            SeparatorArg::Tab => typecsv::Separator::Tab,
            SeparatorArg::Space => typecsv::Separator::Space,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum DelimiterArg {
    Double,
    Single,
}

impl From<DelimiterArg> for typecsv::Delimiter {
    fn from(arg: DelimiterArg) -> Self {
        match arg {
            DelimiterArg::Double => typecsv::Delimiter::Double,
            DelimiterArg::Single => typecsv::Delimiter::Single,
        }
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "typecsv-cli",
    about = "Read CSV records as typed JSON, or re-encode them as fully quoted CSV",
    version
)]
struct Args {
    /// Field separator of the input
    #[arg(long, value_enum, default_value_t = SeparatorArg::Comma)]
    separator: SeparatorArg,

    /// Quote character of the input
    #[arg(long, value_enum, default_value_t = DelimiterArg::Double)]
    delimiter: DelimiterArg,

    /// Re-emit records as CSV instead of JSON lines
    #[arg(long, conflicts_with_all = ["count", "lines"])]
    recode: bool,

    /// Output separator for --recode (defaults to the input separator)
    #[arg(long, value_enum, requires = "recode")]
    out_separator: Option<SeparatorArg>,

    /// Output quote character for --recode (defaults to the input delimiter)
    #[arg(long, value_enum, requires = "recode")]
    out_delimiter: Option<DelimiterArg>,

    /// Print the number of records instead of the records
    #[arg(long, conflicts_with = "lines")]
    count: bool,

    /// Print the number of physical lines (newlines + 1)
    #[arg(long)]
    lines: bool,

    /// Fail on the first record that ends early on a malformed field
    #[arg(long, default_value_t = false)]
    strict: bool,

    /// Debug logging (RUST_LOG overrides)
    #[arg(short, long, default_value_t = false)]
    verbose: bool,

    /// Input file (defaults to stdin)
    input: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let input: Box<dyn Read> = match &args.input {
        Some(path) => Box::new(File::open(path)?),
        None => Box::new(stdin()),
    };

    if args.lines {
        println!("{}", typecsv::count_lines(input)?);
        return Ok(());
    }

    let options = typecsv::Options::new(args.delimiter.into(), args.separator.into());
    let mut reader = typecsv::Reader::with_options(input, options);
    let mut out = BufWriter::new(stdout().lock());

    if args.count {
        while reader.read_record()?.is_some() {
            check_truncated(&reader, args.strict)?;
        }
        writeln!(out, "{}", reader.count())?;
        out.flush()?;
        return Ok(());
    }

    if args.recode {
        let out_options = typecsv::Options::new(
            args.out_delimiter.map_or(options.delimiter, Into::into),
            args.out_separator.map_or(options.separator, Into::into),
        );
        let mut writer = typecsv::Writer::with_options(out, out_options);
        writer.set_terminator("\n");
        while let Some(record) = reader.read_record()? {
            check_truncated(&reader, args.strict)?;
            writer.write_record(record)?;
        }
        writer.close()?;
    } else {
        while let Some(record) = reader.read_record()? {
            check_truncated(&reader, args.strict)?;
            serde_json::to_writer(&mut out, &record)?;
            out.write_all(b"\n")?;
        }
        out.flush()?;
    }

    debug!("{} records", reader.count());
    Ok(())
}

fn check_truncated<R: Read>(reader: &typecsv::Reader<R>, strict: bool) -> Result<()> {
    if strict && reader.last_record_truncated() {
        bail!("record {} is malformed", reader.count());
    }
    Ok(())
}
