use polars::prelude::*;

fn main() {
    let path = "results.csv";
    let q = LazyCsvReader::new(path)
        .with_has_header(true)
        .finish()
        .unwrap()
        .with_column((col("Time (s)") * lit(1000.0)).alias("Time (ms)"))
        .filter(col("Operation").str().starts_with(lit("Build")))
        .select(vec![col("Query"), col("Time (ms)")])
        .group_by(vec![col("Query")])
        .agg([col("Time (ms)").sum()]);

    let df = q.collect().unwrap();

    println!("{}", df)
}
