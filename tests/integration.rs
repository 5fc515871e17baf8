//! End-to-end tests over realistic transcript fixtures.

use zoomchat::prelude::*;

/// A small meeting chat exercising every category.
fn sample_transcript() -> String {
    [
        "09:00:01 From 박세훈 to Everyone:",
        "\t좋은 아침이예요!",
        "09:00:03 From 김또깡 to Everyone:",
        "\t주피터돌리다가 크롬이 구역질해요",
        "09:00:05 From 아라이 to Everyone:",
        "\t예압",
        "09:00:10 From 오우상 to Everyone:",
        "\tReacted to \"좋은 아침이예요!\" with 🙌",
        "09:00:12 From 김또깡 to Everyone:",
        "\tReplying to \"예압\"",
        "\t",
        "\t반갑습니다",
        "09:00:20 From 오우상 to Everyone:",
        "\tRemoved a 🙌 reaction from \"좋은 아침이예요!\"",
    ]
    .join("\n")
}

#[test]
fn record_count_matches_header_count_and_ids_are_dense() {
    let result = ZoomChatParser::new()
        .parse_str(&sample_transcript())
        .unwrap();
    assert_eq!(result.len(), 6);
    for (index, record) in result.records.iter().enumerate() {
        assert_eq!(record.id, index);
    }
}

#[test]
fn header_fields_copied_verbatim() {
    let result = ZoomChatParser::new()
        .parse_str(&sample_transcript())
        .unwrap();
    let record = &result.records[0];
    assert_eq!(record.timestamp, "09:00:01");
    assert_eq!(record.sender, "박세훈");
    assert_eq!(record.receiver, "Everyone:");
}

#[test]
fn every_record_is_classified() {
    let result = ZoomChatParser::new()
        .parse_str(&sample_transcript())
        .unwrap();
    let expected = [
        Category::PlainText,
        Category::PlainText,
        Category::PlainText,
        Category::Reaction,
        Category::Reply,
        Category::Removal,
    ];
    for (record, category) in result.records.iter().zip(expected) {
        assert_eq!(record.category, category);
    }
}

#[test]
fn reaction_links_back_to_quoted_message() {
    let result = ZoomChatParser::new()
        .parse_str(&sample_transcript())
        .unwrap();
    assert_eq!(result.records[3].text, "🙌");
    assert_eq!(result.records[0].reaction_ids, vec![3]);
    assert!(result.stats.missing_reaction_ids.is_empty());
}

#[test]
fn reply_links_back_and_collects_free_text() {
    let result = ZoomChatParser::new()
        .parse_str(&sample_transcript())
        .unwrap();
    assert_eq!(result.records[4].text, "반갑습니다");
    assert_eq!(result.records[2].reply_ids, vec![4]);
    assert!(result.stats.missing_reply_ids.is_empty());
}

#[test]
fn removal_marks_itself_and_targets_the_parent() {
    let result = ZoomChatParser::new()
        .parse_str(&sample_transcript())
        .unwrap();
    let removal = &result.records[5];
    assert_eq!(removal.text, "🙌");
    assert!(removal.removed);
    assert!(result.stats.missing_removal_ids.is_empty());
    // The removal cancels the remover's own link on the parent; the earlier
    // reaction by a different record stays.
    assert_eq!(result.records[0].reaction_ids, vec![3]);
}

#[test]
fn references_outside_the_lookback_window_become_statistics() {
    let parser = ZoomChatParser::with_config(ParserConfig::new().with_lookback(1));
    let result = parser.parse_str(&sample_transcript()).unwrap();
    // With a window of one record, only the reply (quoting the message two
    // back) and the reaction/removal (quoting the first message) miss.
    assert_eq!(result.stats.missing_reaction_ids, vec![3]);
    assert_eq!(result.stats.missing_reply_ids, vec![4]);
    assert_eq!(result.stats.missing_removal_ids, vec![5]);
    assert!(!result.records[5].removed);
}

#[test]
fn first_two_records_never_resolve() {
    let input = "09:00:01 From Alice to Everyone:\n\thello\n\
                 09:00:02 From Bob to Everyone:\n\tReacted to \"hello\" with 👍";
    let result = ZoomChatParser::new().parse_str(input).unwrap();
    assert_eq!(result.records[1].text, "👍");
    assert_eq!(result.stats.missing_reaction_ids, vec![1]);
    assert!(result.records[0].reaction_ids.is_empty());
}

#[test]
fn malformed_reaction_line_degrades_to_missing_parent() {
    let input = "09:00:01 From Alice to Everyone:\n\thello\n\
                 09:00:02 From Bob to Everyone:\n\thi\n\
                 09:00:03 From Eve to Everyone:\n\tReacted to something unquoted";
    let result = ZoomChatParser::new().parse_str(input).unwrap();
    assert_eq!(result.records[2].category, Category::Reaction);
    assert!(result.records[2].text.is_empty());
    assert_eq!(result.stats.missing_reaction_ids, vec![2]);
}

#[test]
fn parsing_twice_is_idempotent() {
    let transcript = sample_transcript();
    let parser = ZoomChatParser::new();
    let first = parser.parse_str(&transcript).unwrap();
    let second = parser.parse_str(&transcript).unwrap();
    assert_eq!(first, second);
}

#[test]
fn result_survives_serde_round_trip() {
    let result = ZoomChatParser::new()
        .parse_str(&sample_transcript())
        .unwrap();
    let json = serde_json::to_string(&result).unwrap();
    let parsed: ParseResult = serde_json::from_str(&json).unwrap();
    assert_eq!(result, parsed);
}

#[test]
fn parse_path_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("meeting_saved_chat.txt");
    std::fs::write(&path, sample_transcript()).unwrap();

    let result = ZoomChatParser::new().parse(&path).unwrap();
    assert_eq!(result.len(), 6);
}

#[test]
fn missing_path_reports_no_input() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nonexistent.txt");

    let err = ZoomChatParser::new().parse(&path).unwrap_err();
    assert!(err.is_no_input());
    assert!(err.to_string().contains("nonexistent.txt"));
}

#[test]
fn reader_api_accepts_any_bufread() {
    let transcript = sample_transcript();
    let cursor = std::io::Cursor::new(transcript.into_bytes());
    let result = ZoomChatParser::new().parse_reader(cursor).unwrap();
    assert_eq!(result.len(), 6);
}

#[test]
fn malformed_header_policies_are_deterministic() {
    let input = "garbage\n09:00:01 From Alice to Everyone:\n\thello";

    let skipped = ZoomChatParser::new().parse_str(input).unwrap();
    assert_eq!(skipped.len(), 1);

    let strict = ZoomChatParser::with_config(
        ParserConfig::new().with_malformed_headers(MalformedHeaderPolicy::Error),
    );
    let err = strict.parse_str(input).unwrap_err();
    assert!(err.is_malformed_header());
    assert!(err.to_string().contains("line 1"));
}

#[test]
fn long_wrapped_reaction_accumulates_until_marker() {
    // The quoted snippet wraps onto a second content line before the
    // `" with ` marker appears; the quote keeps the target's own line break.
    let input = "09:00:01 From Alice to Everyone:\n\
                 \tthis is a very long\n\
                 \tmessage that zoom will quote\n\
                 09:00:02 From Bob to Everyone:\n\thi\n\
                 09:00:03 From Eve to Everyone:\n\
                 \tReacted to \"this is a very long\n\
                 \tmessage that zoom\" with 😀";
    let result = ZoomChatParser::new().parse_str(input).unwrap();
    let reaction = &result.records[2];
    assert_eq!(reaction.category, Category::Reaction);
    assert_eq!(reaction.text, "😀");
    // The wrapped snippet carries a tab, so only the part before it is used
    // for resolution.
    assert_eq!(result.records[0].reaction_ids, vec![2]);
}

#[test]
fn snippet_quoting_a_multiline_message_is_cut_at_its_tab() {
    let input = "09:00:01 From Alice to Everyone:\n\
                 \tfirst line\n\
                 \tsecond line\n\
                 09:00:02 From Bob to Everyone:\n\thi\n\
                 09:00:03 From Eve to Everyone:\n\
                 \tReacted to \"first line \tsecond li...\" with 👍";
    let result = ZoomChatParser::new().parse_str(input).unwrap();
    assert_eq!(result.records[0].reaction_ids, vec![2]);
}
