//! Format output dispatch helpers

/// Dispatch output by format; the json branch returns `Result`, the others `()`.
///
/// ```rust,ignore
/// output_by_format_result!(ctx.format,
///     json => json::output_route(&result),
///     human => { human::output_route(&result); },
///     records => { records::output_route(&result); }
/// )
/// ```
#[macro_export]
macro_rules! output_by_format_result {
    ($format:expr, json => $json:expr, human => $human:block, records => $records:block) => {
        match $format {
            $crate::cli::OutputFormat::Json => $json,
            $crate::cli::OutputFormat::Human => {
                $human;
                Ok(())
            }
            $crate::cli::OutputFormat::Records => {
                $records;
                Ok(())
            }
        }
    };
}
