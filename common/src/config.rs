pub struct Config {
    /// Suppresses the banner printed before a command runs.
    pub no_banner: bool,
    /// Quiet level. 1 hides informational logs, 2 also hides the room tree.
    pub quiet: u8,
    /// Number of decimals used when printing surfaces and prices.
    pub precision: usize,
}
