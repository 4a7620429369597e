use crate::{api::ChatbotHealth, state::chatbot::chatbot_available};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TextSpan {
    Plain(String),
    Bold(String),
}

/// Splits message text into lines, each a run of plain and `**bold**` spans.
/// An unmatched `**` is kept as literal text.
pub fn parse_rich_text(text: &str) -> Vec<Vec<TextSpan>> {
    text.split('\n').map(parse_line).collect()
}

fn parse_line(line: &str) -> Vec<TextSpan> {
    let mut spans = Vec::new();
    let mut rest = line;
    while let Some(open) = rest.find("**") {
        let after_open = &rest[open + 2..];
        let Some(close) = after_open.find("**") else {
            break;
        };
        if open > 0 {
            spans.push(TextSpan::Plain(rest[..open].to_string()));
        }
        spans.push(TextSpan::Bold(after_open[..close].to_string()));
        rest = &after_open[close + 2..];
    }
    if !rest.is_empty() {
        spans.push(TextSpan::Plain(rest.to_string()));
    }
    spans
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AssistantStatus {
    Checking,
    Available,
    Unavailable,
}

pub fn assistant_status(enabled: bool, health: Option<&ChatbotHealth>) -> AssistantStatus {
    match (enabled, health) {
        (false, _) => AssistantStatus::Unavailable,
        (true, None) => AssistantStatus::Checking,
        (true, Some(_)) if chatbot_available(enabled, health) => AssistantStatus::Available,
        (true, Some(_)) => AssistantStatus::Unavailable,
    }
}

pub fn can_send(input: &str, is_sending: bool, status: AssistantStatus) -> bool {
    !input.trim().is_empty() && !is_sending && status == AssistantStatus::Available
}

/// Enter sends; Shift+Enter does not.
pub fn is_send_key(key: &str, shift: bool) -> bool {
    key == "Enter" && !shift
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;
    use crate::api::HealthComponents;

    fn health(status: &str) -> ChatbotHealth {
        ChatbotHealth {
            status: status.into(),
            timestamp: "2025-01-01T00:00:00Z".into(),
            components: HealthComponents {
                mongodb: "connected".into(),
                embeddings: "working".into(),
                llm: "working".into(),
            },
        }
    }

    #[wasm_bindgen_test]
    fn bold_segments_are_split_per_line() {
        let lines = parse_rich_text("Hello **world**!\nSecond **a** and **b**");
        assert_eq!(
            lines[0],
            vec![
                TextSpan::Plain("Hello ".into()),
                TextSpan::Bold("world".into()),
                TextSpan::Plain("!".into()),
            ]
        );
        assert_eq!(lines[1].len(), 4);
        assert_eq!(lines[1][3], TextSpan::Bold("b".into()));
    }

    #[wasm_bindgen_test]
    fn unmatched_markers_stay_literal() {
        assert_eq!(
            parse_rich_text("price **unclosed"),
            vec![vec![TextSpan::Plain("price **unclosed".into())]]
        );
        assert_eq!(parse_rich_text(""), vec![Vec::<TextSpan>::new()]);
    }

    #[wasm_bindgen_test]
    fn status_follows_flag_and_health() {
        assert_eq!(assistant_status(false, Some(&health("healthy"))), AssistantStatus::Unavailable);
        assert_eq!(assistant_status(true, None), AssistantStatus::Checking);
        assert_eq!(assistant_status(true, Some(&health("healthy"))), AssistantStatus::Available);
        assert_eq!(assistant_status(true, Some(&health("degraded"))), AssistantStatus::Unavailable);
    }

    #[wasm_bindgen_test]
    fn sending_requires_text_idle_and_available() {
        assert!(can_send("hi", false, AssistantStatus::Available));
        assert!(!can_send("   ", false, AssistantStatus::Available));
        assert!(!can_send("hi", true, AssistantStatus::Available));
        assert!(!can_send("hi", false, AssistantStatus::Checking));
    }

    #[wasm_bindgen_test]
    fn shift_enter_does_not_send() {
        assert!(is_send_key("Enter", false));
        assert!(!is_send_key("Enter", true));
        assert!(!is_send_key("a", false));
    }
}
