#[derive(Debug, Clone, Copy, Default)]
pub struct Config {
    /// Skips the banner printed when the shell starts.
    pub no_banner: bool,
    /// Quiet level.
    ///
    /// `1` hides headers and decorations, `2` also hides success lines.
    /// Errors are always printed.
    pub quiet: u8,
    /// Disables ANSI colours in every terminal line.
    pub no_color: bool,
}
