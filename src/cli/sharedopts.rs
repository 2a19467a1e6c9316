pub const FULLMATCH_HELP: &str = "Match authority patterns against the whole name";
pub const FULLMATCH_HELP_LONG: &str = "Match authority patterns against the whole name

By default, patterns without leading or trailing '*' are widened to match anywhere in the name, so 'west' matches 'Westminster' and 'Northwest'. Matching is case-sensitive.";

#[derive(clap::Args)]
pub struct AuthoritiesOpts {
    /// Wildcard patterns to match district authorities of interest
    ///
    /// Use commas to separate multiple patterns. An accident is included if
    /// its authority matches any pattern.
    #[arg(
        short,
        long,
        value_name = "PATTERNS",
        value_delimiter = ',',
        default_value = "*"
    )]
    pub authorities: Vec<String>,

    /// Wildcard patterns to match district authorities to exclude
    ///
    /// Use commas to separate multiple patterns. An accident is excluded if
    /// its authority matches any pattern. Takes precedence over
    /// '--authorities'.
    #[arg(short = 'x', long, value_name = "PATTERNS", value_delimiter = ',')]
    pub not_authorities: Vec<String>,

    #[arg(long, help = FULLMATCH_HELP, long_help = FULLMATCH_HELP_LONG)]
    pub fullmatch: bool,
}
