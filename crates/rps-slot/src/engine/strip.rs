/// Ordered symbol sequence of one reel, stored doubled so that scrolling
/// and any stop plus its visible rows never run off the end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReelStrip {
    /// Configured strip followed by itself.
    symbols: Vec<String>,
}

impl ReelStrip {
    pub fn new(codes: &[String]) -> Self {
        let mut symbols = Vec::with_capacity(codes.len() * 2);
        symbols.extend_from_slice(codes);
        symbols.extend_from_slice(codes);
        Self { symbols }
    }

    /// Length of the configured (un-doubled) strip. Stops live in [0, len).
    pub fn len(&self) -> usize {
        self.symbols.len() / 2
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Symbol at `index`, wrapping around the strip.
    pub fn symbol_at(&self, index: usize) -> &str {
        &self.symbols[index % self.len()]
    }

    /// The `rows` symbols visible with `stop` as the top row.
    pub fn window(&self, stop: usize, rows: usize) -> &[String] {
        let start = stop % self.len();
        &self.symbols[start..start + rows]
    }

    /// Full doubled sequence, one entry per scrolling symbol instance.
    pub fn doubled(&self) -> &[String] {
        &self.symbols
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codes(s: &str) -> Vec<String> {
        s.chars().map(|c| c.to_string()).collect()
    }

    #[test]
    fn doubles_the_strip() {
        let strip = ReelStrip::new(&codes("RPS"));
        assert_eq!(strip.len(), 3);
        assert_eq!(strip.doubled().len(), 6);
        assert_eq!(strip.doubled()[3], "R");
    }

    #[test]
    fn window_wraps_through_the_copy() {
        let strip = ReelStrip::new(&codes("RPSS"));
        assert_eq!(strip.window(3, 3), &codes("SRP")[..]);
        assert_eq!(strip.symbol_at(9), "P");
    }
}
