use polars::prelude::*;

use log::debug;

/// The four benchmarked phases we report on. Everything else in the
/// results file is left out of the summaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Build,
    Probe,
    Agg,
    Finalize,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Build,
        Category::Probe,
        Category::Agg,
        Category::Finalize,
    ];

    pub fn header(&self) -> &'static str {
        match self {
            Category::Build => "Build:",
            Category::Probe => "Probe:",
            Category::Agg => "Agg:",
            Category::Finalize => "Final:",
        }
    }

    // Build sub-phases share the prefix (BuildHash, BuildIndex, ...),
    // so Build alone is a prefix match. The other labels are exact.
    fn predicate(&self) -> Expr {
        match self {
            Category::Build => col("Operation").str().starts_with(lit("Build")),
            Category::Probe => col("Operation").eq(lit("Probe")),
            Category::Agg => col("Operation").eq(lit("Agg")),
            Category::Finalize => col("Operation").eq(lit("Finalize")),
        }
    }
}

fn time_ms_expr() -> Expr {
    (col("Time (s)") * lit(1000.0)).alias("Time (ms)")
}

/// 给已经在内存中的结果表补上 Time (ms) 列
pub fn with_time_ms(df: DataFrame) -> PolarsResult<DataFrame> {
    df.lazy().with_column(time_ms_expr()).collect()
}

pub fn load_results(path: &str) -> PolarsResult<DataFrame> {
    let csv = LazyCsvReader::new(path).with_has_header(true).finish()?;
    let df = csv.with_column(time_ms_expr()).collect()?;
    debug!("loaded {} rows from {}", df.height(), path);
    Ok(df)
}

pub struct ResultsFrame<'a> {
    df: &'a DataFrame,
}

impl<'a> ResultsFrame<'a> {
    pub fn new(df: &'a DataFrame) -> Self {
        ResultsFrame { df }
    }

    /// Per-query Time (ms) total for one category, sorted by query.
    pub fn summary(&self, category: Category) -> PolarsResult<DataFrame> {
        self.df
            .clone()
            .lazy()
            .filter(category.predicate())
            .select(vec![col("Query"), col("Time (ms)")])
            .group_by(["Query"])
            .agg([col("Time (ms)").sum()])
            .sort(["Query"], SortMultipleOptions::default())
            .collect()
    }
}
