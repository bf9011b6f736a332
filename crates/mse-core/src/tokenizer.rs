//! Quote-aware tokenizer for a single line of delimited text

use crate::config::ParserConfig;

/// Scanner state while walking a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Unquoted,
    Quoted {
        /// A literal `"` has already been kept in this quoted span
        seen_literal_quote: bool,
    },
}

/// What the scanner does with the current character
enum Step {
    Append,
    Skip,
    EndField,
    Stop,
}

/// Split one line into fields.
///
/// An empty line yields no fields at all. Otherwise a line with N separators
/// outside quotes yields N+1 fields, the last one possibly empty. An unquoted
/// line feed ends the scan; an unterminated quote is not an error and the
/// partial field is returned as the last field.
pub fn tokenize(line: &str, config: &ParserConfig) -> Vec<String> {
    let mut fields = Vec::new();
    if line.is_empty() {
        return fields;
    }

    let mut state = State::Unquoted;
    let mut current = String::new();

    for ch in line.chars() {
        let (next, step) = advance(state, ch, config);
        state = next;

        match step {
            Step::Append => current.push(ch),
            Step::Skip => {}
            Step::EndField => fields.push(std::mem::take(&mut current)),
            Step::Stop => break,
        }
    }

    fields.push(current);
    fields
}

/// Split one line using the default separator and quote
pub fn tokenize_default(line: &str) -> Vec<String> {
    tokenize(line, &ParserConfig::default())
}

fn advance(state: State, ch: char, config: &ParserConfig) -> (State, Step) {
    match state {
        State::Unquoted => {
            if ch == config.quote {
                (
                    State::Quoted {
                        seen_literal_quote: false,
                    },
                    Step::Skip,
                )
            } else if ch == config.separator {
                (state, Step::EndField)
            } else if ch == '\r' {
                (state, Step::Skip)
            } else if ch == '\n' {
                (state, Step::Stop)
            } else {
                (state, Step::Append)
            }
        }
        State::Quoted { seen_literal_quote } => {
            if ch == config.quote {
                (State::Unquoted, Step::Skip)
            } else if ch == '"' {
                // Only the first literal quote in a span survives
                let step = if seen_literal_quote {
                    Step::Skip
                } else {
                    Step::Append
                };
                (
                    State::Quoted {
                        seen_literal_quote: true,
                    },
                    step,
                )
            } else {
                (state, Step::Append)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_plain_line_matches_split() {
        for line in ["a,b,c", "a,b,", ",,", "single", "Hero,,Dragons,Character"] {
            let expected: Vec<String> = line.split(',').map(String::from).collect();
            assert_eq!(tokenize_default(line), expected, "line {:?}", line);
        }
    }

    #[test]
    fn test_trailing_empty_field_kept() {
        assert_eq!(tokenize_default("a,b,"), fields(&["a", "b", ""]));
    }

    #[test]
    fn test_quoted_field_with_separator() {
        let result = tokenize_default("a,bb,\"This sentence has a, comma.\",dddd");
        assert_eq!(result.len(), 4);
        assert_eq!(
            result,
            fields(&["a", "bb", "This sentence has a, comma.", "dddd"])
        );
    }

    #[test]
    fn test_empty_line_has_no_fields() {
        assert!(tokenize_default("").is_empty());
    }

    #[test]
    fn test_unterminated_quote_keeps_partial_field() {
        assert_eq!(
            tokenize_default("a,\"open field, still open"),
            fields(&["a", "open field, still open"])
        );
    }

    #[test]
    fn test_carriage_return_dropped_outside_quotes() {
        assert_eq!(tokenize_default("a,b\r\n"), fields(&["a", "b"]));
        assert_eq!(tokenize_default("a\r,b"), fields(&["a", "b"]));
    }

    #[test]
    fn test_line_feed_stops_scan() {
        assert_eq!(tokenize_default("a,b\nc,d"), fields(&["a", "b"]));
        assert_eq!(tokenize_default("\n"), fields(&[""]));
    }

    #[test]
    fn test_line_feed_inside_quotes_is_kept() {
        assert_eq!(tokenize_default("\"a\nb\",c"), fields(&["a\nb", "c"]));
    }

    #[test]
    fn test_carriage_return_kept_inside_quotes() {
        assert_eq!(tokenize_default("\"a\r\nb\",c"), fields(&["a\r\nb", "c"]));
    }

    #[test]
    fn test_doubled_default_quote_closes_and_reopens() {
        // `""` toggles quoting twice, so nothing is appended
        assert_eq!(tokenize_default("\"say \"\"hi\"\"\""), fields(&["say hi"]));
    }

    #[test]
    fn test_literal_quotes_under_custom_quote() {
        let config = ParserConfig::new(None, Some('\''));
        assert_eq!(
            tokenize("'say \"hi\" \"there\"',x", &config),
            fields(&["say \"hi there", "x"])
        );
    }

    #[test]
    fn test_literal_quote_flag_resets_per_span() {
        let config = ParserConfig::new(None, Some('\''));
        assert_eq!(
            tokenize("'\"\"',' \"\"'", &config),
            fields(&["\"", " \""])
        );
    }

    #[test]
    fn test_custom_separator() {
        let config = ParserConfig::new(Some(';'), None);
        assert_eq!(
            tokenize("a;\"b;c\";d,e", &config),
            fields(&["a", "b;c", "d,e"])
        );
    }

    #[test]
    fn test_quotes_mid_field_join_text() {
        assert_eq!(tokenize_default("ab\"c,d\"e,f"), fields(&["abc,de", "f"]));
    }
}
