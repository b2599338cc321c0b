//! Navigator commands
//!
//! One line of user input maps to exactly one `Command`. Parsing never
//! fails: anything that is not a keyword is treated as an index choice and
//! validated later against the current child list.

/// An index typed by the user, before bounds checking
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    /// Parsed as an integer (may still be out of range)
    Number(i64),
    /// Not an integer at all
    Malformed,
}

impl Choice {
    pub fn parse(input: &str) -> Self {
        input
            .trim()
            .parse::<i64>()
            .map(Choice::Number)
            .unwrap_or(Choice::Malformed)
    }

    /// Zero-based position if the choice falls inside `1..=len`
    pub fn position(self, len: usize) -> Option<usize> {
        match self {
            Choice::Number(n) if n >= 1 && (n as u64) <= len as u64 => Some(n as usize - 1),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// `q` - end the session
    Quit,
    /// `u` - move to the parent category
    Up,
    /// `s` - search the current category
    SearchCurrent,
    /// `s <n>` - search the n-th child
    SearchChild(Choice),
    /// `<n>` - drill into the n-th child (or search it when it is a leaf)
    Select(Choice),
}

impl Command {
    /// Parse one input line. Keywords are case-insensitive.
    pub fn parse(line: &str) -> Self {
        let input = line.trim();

        if input.eq_ignore_ascii_case("q") {
            return Command::Quit;
        }
        if input.eq_ignore_ascii_case("u") {
            return Command::Up;
        }
        if input.eq_ignore_ascii_case("s") {
            return Command::SearchCurrent;
        }

        let mut chars = input.chars();
        if let (Some(first), Some(second)) = (chars.next(), chars.next()) {
            if first.eq_ignore_ascii_case(&'s') && second.is_whitespace() {
                return Command::SearchChild(Choice::parse(&input[1..]));
            }
        }

        Command::Select(Choice::parse(input))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_keywords_case_insensitive() {
        assert_eq!(Command::parse("q"), Command::Quit);
        assert_eq!(Command::parse("Q"), Command::Quit);
        assert_eq!(Command::parse(" u "), Command::Up);
        assert_eq!(Command::parse("U"), Command::Up);
        assert_eq!(Command::parse("s"), Command::SearchCurrent);
        assert_eq!(Command::parse("S\n"), Command::SearchCurrent);
    }

    #[test]
    fn parse_search_child() {
        assert_eq!(
            Command::parse("s 3"),
            Command::SearchChild(Choice::Number(3))
        );
        assert_eq!(
            Command::parse("S   12"),
            Command::SearchChild(Choice::Number(12))
        );
        assert_eq!(
            Command::parse("s abc"),
            Command::SearchChild(Choice::Malformed)
        );
    }

    #[test]
    fn parse_select() {
        assert_eq!(Command::parse("4"), Command::Select(Choice::Number(4)));
        assert_eq!(Command::parse("  7  "), Command::Select(Choice::Number(7)));
        assert_eq!(Command::parse("-1"), Command::Select(Choice::Number(-1)));
    }

    #[test]
    fn parse_garbage_is_malformed_select() {
        assert_eq!(Command::parse("abc"), Command::Select(Choice::Malformed));
        assert_eq!(Command::parse(""), Command::Select(Choice::Malformed));
        assert_eq!(Command::parse("s3"), Command::Select(Choice::Malformed));
        assert_eq!(Command::parse("quit"), Command::Select(Choice::Malformed));
        assert_eq!(
            Command::parse("99999999999999999999999"),
            Command::Select(Choice::Malformed)
        );
    }

    #[test]
    fn position_checks_bounds() {
        assert_eq!(Choice::Number(1).position(5), Some(0));
        assert_eq!(Choice::Number(5).position(5), Some(4));
        assert_eq!(Choice::Number(0).position(5), None);
        assert_eq!(Choice::Number(6).position(5), None);
        assert_eq!(Choice::Number(-3).position(5), None);
        assert_eq!(Choice::Number(1).position(0), None);
        assert_eq!(Choice::Malformed.position(5), None);
    }
}
