//! Line layout normalisation for assembled quote blocks.

/// Spread a single-line quote block over several lines.
///
/// A trimmed block without newlines gets one after the first `]`, which
/// closes the opening wrapper, and one before the last `[/`, which opens
/// the closing wrapper. Blocks that already span lines are only trimmed.
#[must_use]
pub fn coerce_multi_line(quote: &str) -> String {
    let trimmed = quote.trim();
    if trimmed.contains('\n') {
        return trimmed.to_string();
    }
    let mut out = trimmed.replacen(']', "]\n", 1);
    if let Some(idx) = out.rfind("[/") {
        out.insert(idx, '\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("[quote=a]hello[/quote]", "[quote=a]\nhello\n[/quote]")]
    #[case("  [quote]x[/quote]\n", "[quote]\nx\n[/quote]")]
    #[case(
        "[quote=a]hello [b]bold[/b][/quote]",
        "[quote=a]\nhello [b]bold[/b]\n[/quote]"
    )]
    #[case("[quote=a][/quote]", "[quote=a]\n\n[/quote]")]
    fn splits_single_line_blocks(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(coerce_multi_line(input), expected);
    }

    #[rstest]
    #[case("[quote=a]\nhello\n[/quote]")]
    #[case("[quote=a]hello\nworld[/quote]")]
    #[case("no markup at all")]
    fn leaves_other_text_alone(#[case] input: &str) {
        assert_eq!(coerce_multi_line(input), input);
    }
}
