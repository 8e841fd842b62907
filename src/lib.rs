pub mod canonicalizer;
pub mod config;

pub use canonicalizer::FormatError;
pub use canonicalizer::canonicalize;
pub use config::Config;
pub use config::ConfigBuilder;
pub use config::LineEnding;

#[cfg(debug_assertions)]
fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn detect_line_ending(input: &str) -> &str {
    // Check for first occurrence of \r\n or \n
    let rn_pos = input.find("\r\n");
    let n_pos = input.find('\n');

    if let (Some(rn), Some(n)) = (rn_pos, n_pos) {
        if rn < n {
            return "\r\n";
        }
    } else if rn_pos.is_some() {
        return "\r\n";
    }

    "\n"
}

/// Formats a Rust source string, falling back to the input on failure.
///
/// Valid source is replaced by its canonical form. Source that does not
/// parse is returned verbatim so the caller's text is never lost; the
/// failure is reported through the `log` facade instead.
///
/// # Examples
///
/// ```no_run
/// use ferrofmt::format;
///
/// let formatted = format("fn main(){}", None);
/// assert_eq!(formatted, "fn main() {}\n");
///
/// let broken = format("fn broken(", None);
/// assert_eq!(broken, "fn broken(");
/// ```
///
/// # Arguments
///
/// * `input` - The Rust source text to format
/// * `config` - Optional configuration (defaults to default config)
pub fn format(input: &str, config: Option<Config>) -> String {
    #[cfg(debug_assertions)]
    {
        init_logger();
    }

    let config = config.unwrap_or_default();

    match canonicalizer::canonicalize(input, &config) {
        Ok(out) => out,
        Err(err) => {
            log::error!("returning source unchanged: {err}");
            input.to_string()
        }
    }
}

pub fn format_with_defaults(input: &str) -> String {
    format(input, None)
}

/// Parses a Rust source string into its syntax tree.
///
/// Line endings are normalized first. Exposed for debugging and for hosts
/// that want the parsed file without printing it back.
///
/// # Arguments
///
/// * `input` - The Rust source text to parse
pub fn parse(input: &str) -> Result<syn::File, FormatError> {
    let normalized_input = input.replace("\r\n", "\n");
    syn::parse_file(&normalized_input).map_err(FormatError::from)
}
