use clap::Parser;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use std::time::Instant;

use khmer_phonetic::batch::convert_entries;
use khmer_phonetic::dictionary::load_entries;
use khmer_phonetic::record::{LineEnding, OutputFormat, RecordWriter};
use khmer_phonetic::{Transliterator, UnknownSymbolPolicy};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the pronunciation dictionary
    #[arg(short, long, default_value = "cmudict.dict")]
    dict: String,

    /// Output file
    #[arg(short, long, default_value = "result.tsv")]
    output: String,

    /// Output record format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Tsv)]
    format: OutputFormat,

    /// Row terminator
    #[arg(long, value_enum, default_value_t = LineEnding::Crlf)]
    line_ending: LineEnding,

    /// Limit number of entries to process
    #[arg(short, long)]
    limit: Option<usize>,

    /// Reject entries containing unknown phoneme symbols instead of dropping the symbols
    #[arg(long)]
    strict: bool,

    /// Convert a single space-separated phoneme sequence and print it
    #[arg(short, long)]
    phonemes: Option<String>,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let policy = if args.strict {
        UnknownSymbolPolicy::Reject
    } else {
        UnknownSymbolPolicy::Skip
    };
    let transliterator = Transliterator::with_policy(policy);

    if let Some(ref sequence) = args.phonemes {
        let tokens: Vec<&str> = sequence.split_whitespace().collect();
        println!("{}", transliterator.transliterate(&tokens)?);
        return Ok(());
    }

    println!("Reading dictionary: {}", args.dict);
    let start_load = Instant::now();
    let mut entries = load_entries(Path::new(&args.dict))?;
    println!(
        "Loaded {} entries in {:.2}s",
        entries.len(),
        start_load.elapsed().as_secs_f32()
    );

    if let Some(limit) = args.limit {
        if limit < entries.len() {
            entries.truncate(limit);
        }
    }

    println!("Processing {} entries...", entries.len());
    let start_process = Instant::now();
    let (records, stats) = convert_entries(&transliterator, &entries);

    let output_file = File::create(&args.output)?;
    let mut writer = RecordWriter::new(
        BufWriter::with_capacity(262144, output_file),
        args.format,
        args.line_ending,
    );
    writer.write_all(&records)?;
    writer.finish()?;

    let duration = start_process.elapsed();
    println!("Done. Saved {} records to {}", stats.converted, args.output);
    if stats.rejected > 0 {
        println!("Rejected: {}", stats.rejected);
    }
    println!("Time taken: {:.2}s", duration.as_secs_f32());
    println!(
        "Speed: {:.2} entries/sec",
        entries.len() as f32 / duration.as_secs_f32()
    );

    Ok(())
}
