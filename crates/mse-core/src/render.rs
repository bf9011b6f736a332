//! Rendering of card records as MSE set file blocks

use crate::card::CardRecord;
use crate::config::ParserConfig;
use crate::error::Result;
use crate::text::{attributes, format_rules, remap_resources};
use crate::tokenizer::tokenize;
use chrono::NaiveDateTime;
use std::fmt::Write;

/// Timestamp layout used by MSE (`yyyy-MM-dd hh:mm:ss`, 12-hour clock)
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %I:%M:%S";

/// Values shared by every card rendered in one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderContext {
    /// Already formatted creation/modification time
    pub timestamp: String,
    pub copyright: String,
}

impl RenderContext {
    /// Create a context for a run started at `now`
    pub fn new(now: NaiveDateTime, copyright: impl Into<String>) -> Self {
        Self {
            timestamp: now.format(TIMESTAMP_FORMAT).to_string(),
            copyright: copyright.into(),
        }
    }
}

/// Tokenize one sheet line and render it as a card block.
///
/// Fails with a malformed-record error when the line has fewer than twelve
/// fields; nothing is rendered in that case.
pub fn transform_record(
    line: &str,
    line_number: usize,
    parser: &ParserConfig,
    context: &RenderContext,
) -> Result<String> {
    let card = CardRecord::from_fields(tokenize(line, parser), line_number)?;
    Ok(render_card(&card, context))
}

/// Render a card as an MSE `card:` block
pub fn render_card(card: &CardRecord, context: &RenderContext) -> String {
    let mut block = String::from("card:\n");

    push_line(&mut block, "has styling", "false");
    push_line(&mut block, "notes", "");
    push_line(&mut block, "time created", &context.timestamp);
    push_line(&mut block, "time modified", &context.timestamp);
    if let Some(attrs) = attributes(&card.card_type, &card.faction) {
        push_line(&mut block, "attributes", &attrs);
    }
    push_line(&mut block, "title", &card.title);
    push_line(&mut block, "scene", "");
    push_optional(&mut block, "fighting", &card.fighting);
    push_optional(&mut block, "power", &card.power);
    push_optional(&mut block, "body", &card.body);
    push_line(&mut block, "image", "");
    push_line(&mut block, "subtitle", &card.subtitle);
    push_line(&mut block, "rules", &format_rules(&card.text));
    push_line(&mut block, "tag", "");
    if !card.cost.is_empty() {
        push_line(&mut block, "cost", &remap_resources(&card.cost));
    }
    push_line(&mut block, "copyright", &context.copyright);
    push_optional(&mut block, "artist", &card.artist);
    if !card.provides.is_empty() {
        push_line(&mut block, "resources", &remap_resources(&card.provides));
    }

    block
}

fn push_line(block: &mut String, key: &str, value: &str) {
    if value.is_empty() {
        let _ = writeln!(block, "\t{}:", key);
    } else {
        let _ = writeln!(block, "\t{}: {}", key, value);
    }
}

fn push_optional(block: &mut String, key: &str, value: &str) {
    if !value.is_empty() {
        push_line(block, key, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn context() -> RenderContext {
        let now = NaiveDate::from_ymd_opt(2016, 7, 28)
            .unwrap()
            .and_hms_opt(15, 8, 54)
            .unwrap();
        RenderContext::new(now, "playtest round 1")
    }

    #[test]
    fn test_timestamp_uses_twelve_hour_clock() {
        assert_eq!(context().timestamp, "2016-07-28 03:08:54");
    }

    #[test]
    fn test_render_full_card() {
        let line = "Shaolin Temple,Sacred Ground,Hand,Feng Shui Site,a2,af,,,2,\
                    \"Guts. All <Fire> cards, and <Netherworld> too.\",footer2,cgreene";
        let block = transform_record(line, 2, &ParserConfig::default(), &context()).unwrap();

        let expected = "card:\n\
            \thas styling: false\n\
            \tnotes:\n\
            \ttime created: 2016-07-28 03:08:54\n\
            \ttime modified: 2016-07-28 03:08:54\n\
            \tattributes: fss, guiding hand\n\
            \ttitle: Shaolin Temple\n\
            \tscene:\n\
            \tbody: 2\n\
            \timage:\n\
            \tsubtitle: Sacred Ground\n\
            \trules: <b>Guts</b>. All <i>Fire</i> cards, and <Netherworld> too.\n\
            \ttag:\n\
            \tcost: W2\n\
            \tcopyright: playtest round 1\n\
            \tartist: footer2\n\
            \tresources: WF\n";
        assert_eq!(block, expected);
    }

    #[test]
    fn test_render_sparse_card() {
        let card = CardRecord {
            title: "All the Power".to_string(),
            fighting: "D".to_string(),
            ..Default::default()
        };
        let block = render_card(&card, &context());

        let expected = "card:\n\
            \thas styling: false\n\
            \tnotes:\n\
            \ttime created: 2016-07-28 03:08:54\n\
            \ttime modified: 2016-07-28 03:08:54\n\
            \ttitle: All the Power\n\
            \tscene:\n\
            \tfighting: D\n\
            \timage:\n\
            \tsubtitle:\n\
            \trules:\n\
            \ttag:\n\
            \tcopyright: playtest round 1\n";
        assert_eq!(block, expected);
    }

    #[test]
    fn test_empty_copyright_still_emitted() {
        let now = NaiveDate::from_ymd_opt(2020, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let block = render_card(&CardRecord::default(), &RenderContext::new(now, ""));
        assert!(block.contains("\tcopyright:\n"));
        assert!(block.contains("\ttime created: 2020-01-01 12:00:00\n"));
    }

    #[test]
    fn test_short_record_renders_nothing() {
        let err = transform_record(
            "Title,Sub,Hand,Character,1,,2,,,Rules",
            5,
            &ParserConfig::default(),
            &context(),
        )
        .unwrap_err();

        assert!(matches!(
            err,
            Error::MalformedRecord {
                line: 5,
                field_count: 10,
                ..
            }
        ));
    }
}
