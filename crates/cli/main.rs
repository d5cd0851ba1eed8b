use report::{Category, ResultsFrame};

use clap::Parser;
use env_logger::Env;
use polars::prelude::*;
use std::{error::Error, fs::File};

use log::info;

#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
struct Args {
    #[arg(
        long = "source",
        default_value = "results.csv",
        help = "benchmark results csv, e.g. --source results.csv"
    )]
    source: String,

    #[arg(
        long = "detail",
        help = "keep detail csv file with the derived ms column, e.g. --detail detail.csv"
    )]
    detail: Option<String>,
}

/// 把载入的结果表（含 Time (ms) 列）落盘
fn write_detail(filename: &str, df: &DataFrame) -> Result<(), Box<dyn Error>> {
    let mut file = File::create(filename)?;
    let mut m_df = df.clone();
    CsvWriter::new(&mut file).finish(&mut m_df)?;
    info!("detail csv file written: {}", filename);
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    info!("source csv file: {}", args.source);
    let df = report::load_results(&args.source).expect("load results csv failed");

    if let Some(detail) = &args.detail {
        write_detail(detail, &df).expect("detail csv output failed");
    }

    let frame = ResultsFrame::new(&df);
    for category in Category::ALL {
        let summary = frame.summary(category).expect("summary failed");
        println!("{}", category.header());
        println!("{}", summary);
    }
}
