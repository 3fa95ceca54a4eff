//! Report the compression ratio achieved on a demo series.
//!
//! Encodes two hours of per-minute readings, reads them back to verify
//! the round-trip, and prints the encoded footprint against raw
//! 12-byte-per-sample storage.

use clap::Parser;
use deltaxor::Series;

const BASE_TS: u64 = 1_440_583_200;

const DEMO_VALUES: [f64; 120] = [
    761.0, 727.0, 765.0, 706.0, 700.0, 679.0, 757.0, 708.0, 739.0, 707.0,
    699.0, 740.0, 729.0, 766.0, 730.0, 715.0, 705.0, 693.0, 765.0, 724.0,
    799.0, 761.0, 737.0, 766.0, 756.0, 719.0, 722.0, 801.0, 747.0, 731.0,
    742.0, 744.0, 791.0, 750.0, 759.0, 809.0, 751.0, 705.0, 770.0, 792.0,
    727.0, 762.0, 772.0, 721.0, 748.0, 753.0, 744.0, 716.0, 776.0, 659.0,
    789.0, 766.0, 758.0, 690.0, 795.0, 770.0, 758.0, 723.0, 767.0, 765.0,
    693.0, 706.0, 681.0, 727.0, 724.0, 780.0, 678.0, 696.0, 758.0, 740.0,
    735.0, 700.0, 742.0, 747.0, 752.0, 734.0, 743.0, 732.0, 746.0, 770.0,
    780.0, 710.0, 731.0, 712.0, 712.0, 741.0, 770.0, 770.0, 754.0, 718.0,
    670.0, 775.0, 749.0, 795.0, 756.0, 741.0, 787.0, 721.0, 745.0, 782.0,
    765.0, 780.0, 811.0, 790.0, 836.0, 743.0, 858.0, 739.0, 762.0, 770.0,
    752.0, 763.0, 795.0, 792.0, 746.0, 786.0, 785.0, 774.0, 786.0, 718.0,
];

#[derive(Parser)]
#[command(name = "dxr-ratio")]
#[command(about = "Encode a demo series and report its compression ratio")]
struct Args {
    /// Print every decoded sample
    #[arg(short, long)]
    verbose: bool,

    /// Repeat the demo series this many times back to back
    #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u64).range(1..))]
    repeat: u64,
}

fn main() {
    let args = Args::parse();

    let mut series = Series::new();
    let mut count = 0u64;
    for r in 0..args.repeat {
        for (i, &value) in DEMO_VALUES.iter().enumerate() {
            let ts = BASE_TS + (r * DEMO_VALUES.len() as u64 + i as u64) * 60;
            series.append(ts, value);
            count += 1;
        }
    }

    let mut mismatches = 0u64;
    for r in 0..args.repeat {
        for (i, &value) in DEMO_VALUES.iter().enumerate() {
            let ts = BASE_TS + (r * DEMO_VALUES.len() as u64 + i as u64) * 60;
            match series.read() {
                Ok(sample) => {
                    if args.verbose {
                        println!("ts={}, value={}", sample.ts, sample.value);
                    }
                    if sample.ts != ts || sample.value.to_bits() != value.to_bits() {
                        eprintln!(
                            "mismatch at {}: got ({}, {}), want ({}, {})",
                            r * DEMO_VALUES.len() as u64 + i as u64,
                            sample.ts,
                            sample.value,
                            ts,
                            value
                        );
                        mismatches += 1;
                    }
                }
                Err(err) => {
                    eprintln!("read failed: {err}");
                    std::process::exit(1);
                }
            }
        }
    }

    let raw_bits = count * 12 * 8;
    println!("samples:      {count}");
    println!("encoded bits: {}", series.num_bits());
    println!("encoded size: {} bytes", series.num_bytes());
    println!(
        "bits/sample:  {:.2}",
        series.num_bits() as f64 / count as f64
    );
    println!(
        "ratio:        {:.4}",
        series.num_bits() as f64 / raw_bits as f64
    );

    if mismatches > 0 {
        eprintln!("{mismatches} samples did not round-trip");
        std::process::exit(1);
    }
}
