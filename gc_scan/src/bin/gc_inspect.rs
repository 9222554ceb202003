// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Print the grapheme clusters of some text, one per line, with their byte offset, byte
//! length, display width, and code points.
//!
//! ```text
//! $ gc_inspect $'e\u0301🇯🇵'
//!      0   3  1  U+0065 U+0301  "é"
//!      3   8  2  U+1F1EF U+1F1F5  "🇯🇵"
//! ```
//!
//! For more information on how to use CLAP, here are some resources:
//! 1. [Tutorial](https://developerlife.com/2023/09/17/tuify-clap/)
//! 2. [Video](https://youtu.be/lzMYDA6St0s)

use std::io::Read;

use clap::{Args, Parser};
use gc_scan::{AmbiguousWidth, ByteIndex, CommonResult, GraphemeCluster, GraphemeScanner,
              WidthConfig,
              log::{DisplayPreference, try_initialize_logging_global},
              ok};
use miette::IntoDiagnostic;

/// More info: <https://docs.rs/clap/latest/clap/_derive/_tutorial/chapter_2/index.html>
#[derive(Debug, Parser)]
#[command(bin_name = "gc_inspect")]
#[command(about = "🔬 Show the grapheme clusters of some text, and how wide they are")]
#[command(version)]
#[command(next_line_help = true)]
#[command(arg_required_else_help(false))]
pub struct CLIArg {
    #[arg(
        name = "text",
        help = "Text to inspect. Read from stdin when it is not provided."
    )]
    pub text: Option<String>,

    #[command(flatten)]
    pub global_options: GlobalOption,
}

#[derive(Debug, Args)]
pub struct GlobalOption {
    #[arg(
        long,
        short = 'r',
        help = "Walk the clusters from the end of the text to the start."
    )]
    pub reverse: bool,

    #[arg(
        long,
        short = 'w',
        help = "Treat East Asian Ambiguous characters as 2 columns wide. Also set by \
                `GC_SCAN_EAST_ASIAN_WIDTH=wide`."
    )]
    pub ambiguous_wide: bool,

    #[arg(
        long,
        short = 'l',
        help = "Log scanner activity to stderr for debugging."
    )]
    pub enable_logging: bool,
}

fn main() -> CommonResult<()> {
    let cli_arg = CLIArg::parse();

    let should_log = cli_arg.global_options.enable_logging;

    should_log.then(|| {
        try_initialize_logging_global((
            tracing_core::LevelFilter::TRACE,
            DisplayPreference::Stderr,
        ))
        .ok();
        // % is Display, ? is Debug.
        tracing::debug!(message = "Start logging...", cli_arg = ?cli_arg);
    });

    let text = match cli_arg.text {
        Some(text) => text,
        None => {
            let mut acc = String::new();
            std::io::stdin().read_to_string(&mut acc).into_diagnostic()?;
            acc
        }
    };

    let config = if cli_arg.global_options.ambiguous_wide {
        WidthConfig::from(AmbiguousWidth::Wide)
    } else {
        WidthConfig::from_env()
    };
    let scanner = GraphemeScanner::new(config);

    tracing::debug!(
        message = "🔬 Inspecting",
        byte_len = text.len(),
        ambiguous_width = %config.ambiguous_width,
        reverse = cli_arg.global_options.reverse
    );

    if cli_arg.global_options.reverse {
        for (offset, cluster) in scanner.clusters_rev(text.as_str()) {
            println!("{}", format_cluster_line(offset, &cluster));
        }
    } else {
        for (offset, cluster) in scanner.clusters(text.as_str()) {
            println!("{}", format_cluster_line(offset, &cluster));
        }
    }

    should_log.then(|| {
        tracing::debug!(message = "Stop logging...");
    });

    ok!()
}

/// `offset len width  code points  "escaped text"`.
fn format_cluster_line(offset: ByteIndex, cluster: &GraphemeCluster) -> String {
    let code_points = cluster
        .chars()
        .map(|it| format!("U+{:04X}", u32::from(it)))
        .collect::<Vec<_>>()
        .join(" ");
    let escaped = cluster.to_string().escape_debug().to_string();
    format!(
        "{offset:>6} {len:>3} {width:>2}  {code_points}  \"{escaped}\"",
        offset = offset.as_usize(),
        len = cluster.byte_len.as_usize(),
        width = cluster.width.as_usize(),
    )
}

#[cfg(test)]
mod tests {
    use gc_scan::{assert_eq2, byte_index, decode_at, decode_in_str};

    use super::*;

    #[test]
    fn test_format_cluster_line() {
        let it = format_cluster_line(byte_index(0), &decode_in_str("e\u{301}"));
        assert_eq2!(it, "     0   3  1  U+0065 U+0301  \"e\u{301}\"");

        let it = format_cluster_line(byte_index(1), &decode_at("x\r\n", byte_index(1)));
        assert_eq2!(it, "     1   2  0  U+000D U+000A  \"\\r\\n\"");
    }

    #[test]
    fn test_cli_parse() {
        let it = CLIArg::parse_from(["gc_inspect", "--reverse", "-w", "abc"]);
        assert_eq2!(it.text.as_deref(), Some("abc"));
        assert!(it.global_options.reverse);
        assert!(it.global_options.ambiguous_wide);
        assert!(!it.global_options.enable_logging);
    }
}
