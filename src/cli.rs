use structopt::StructOpt;

use unisim::Metric;

#[derive(Debug, StructOpt)]
#[structopt(name = "unisim", about = "Unified fuzzy similarity of two strings")]
#[structopt(rename_all = "kebab-case")]
pub struct Cli {
    /// Compare this string...
    pub source: String,
    /// ...to this string
    pub target: String,
    #[structopt(long, short, conflicts_with = "breakdown")]
    /// Score with a single metric: levenshtein, jaro-winkler, cosine, jaccard, simhash or minhash
    pub metric: Option<Metric>,
    #[structopt(long, short)]
    /// Print every metric score followed by the unified score
    pub breakdown: bool,
    #[structopt(long, help = "Explicit number of threads")]
    pub threads: Option<usize>,
}
