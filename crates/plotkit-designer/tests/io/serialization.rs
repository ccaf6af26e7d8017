use plotkit_core::{AppState, DecodeError, Element, ElementId, LayoutId, SavedLayout};
use plotkit_designer::serialization::{
    decode_share_token, decode_state, encode_share_token, encode_state, set_share_token,
    share_link, share_token_from_url, STATE_QUERY_PARAM,
};
use proptest::prelude::*;
use url::Url;

fn sample_state() -> AppState {
    let mut shed = Element::new(ElementId(1718000000000), "Szopa / shed & co", 2.5, 4.0);
    shed.x = 12.25;
    shed.y = 0.1;
    let mut state = AppState::new();
    state.land_width = 42.0;
    state.elements.push(shed.clone());
    state.saved_layouts.push(SavedLayout {
        id: LayoutId::from("1718000000001"),
        name: "Działka".to_string(),
        land_width: 42.0,
        land_height: 100.0,
        elements: vec![shed],
    });
    state.current_layout_id = Some(LayoutId::from("1718000000001"));
    state
}

#[test]
fn test_blob_round_trip() {
    let state = sample_state();
    let blob = encode_state(&state).expect("encode failed");
    assert_eq!(decode_state(&blob).expect("decode failed"), state);
}

#[test]
fn test_share_token_round_trip() {
    let state = sample_state();
    let token = encode_share_token(&state).expect("encode failed");

    assert!(token
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
    assert_eq!(decode_share_token(&token).expect("decode failed"), state);
}

#[test]
fn test_share_token_accepts_padding() {
    let token = encode_share_token(&AppState::new()).expect("encode failed");
    let padded = format!("{}{}", token, "=".repeat((4 - token.len() % 4) % 4));
    assert_eq!(decode_share_token(&padded).expect("decode failed"), AppState::new());
}

#[test]
fn test_decodes_web_tool_links() {
    let json = r#"{"landWidth":30,"landHeight":20,"elements":[],"newElementWidth":10,"newElementHeight":10,"savedLayouts":[],"currentLayoutId":null}"#;

    let raw = decode_share_token(json).expect("raw json");
    assert_eq!(raw.land_width, 30.0);

    let encoded = urlencoding::encode(json).into_owned();
    let once_more = decode_share_token(&encoded).expect("percent-encoded json");
    assert_eq!(once_more, raw);
}

#[test]
fn test_malformed_inputs() {
    assert!(matches!(decode_state(""), Err(DecodeError::Empty)));
    assert!(matches!(decode_state("{\"landWidth\":"), Err(DecodeError::Json(_))));
    assert!(matches!(decode_share_token("  "), Err(DecodeError::Empty)));
    assert!(matches!(
        decode_share_token("not*base64!"),
        Err(DecodeError::InvalidToken { .. })
    ));
    // Valid base64, not JSON.
    assert!(decode_share_token("aGVsbG8").is_err());
}

#[test]
fn test_url_helpers() {
    let mut location = Url::parse("https://plots.example/app?lang=pl").expect("url");
    assert!(share_token_from_url(&location, STATE_QUERY_PARAM).is_none());

    set_share_token(&mut location, STATE_QUERY_PARAM, "abc");
    set_share_token(&mut location, STATE_QUERY_PARAM, "def");
    assert_eq!(location.as_str(), "https://plots.example/app?lang=pl&state=def");
    assert_eq!(
        share_token_from_url(&location, STATE_QUERY_PARAM).as_deref(),
        Some("def")
    );

    let link = share_link(&location, STATE_QUERY_PARAM, "xyz");
    assert_eq!(link.as_str(), "https://plots.example/app?state=xyz");
}

#[test]
fn test_token_survives_url_embedding() {
    let state = sample_state();
    let token = encode_share_token(&state).expect("encode failed");
    let mut location = Url::parse("https://plots.example/").expect("url");
    set_share_token(&mut location, STATE_QUERY_PARAM, &token);

    let reparsed = Url::parse(location.as_str()).expect("url");
    let extracted = share_token_from_url(&reparsed, STATE_QUERY_PARAM).expect("param");
    assert_eq!(decode_share_token(&extracted).expect("decode"), state);
}

fn arb_element() -> impl Strategy<Value = Element> {
    (
        any::<u64>(),
        ".{0,12}",
        -1e6f64..1e6,
        -1e6f64..1e6,
        -1e6f64..1e6,
        -1e6f64..1e6,
    )
        .prop_map(|(id, name, width, height, x, y)| Element {
            id: ElementId(id),
            name,
            width,
            height,
            x,
            y,
        })
}

fn arb_state() -> impl Strategy<Value = AppState> {
    (
        -1e6f64..1e6,
        -1e6f64..1e6,
        proptest::collection::vec(arb_element(), 0..6),
        proptest::collection::vec(
            (
                "[a-z0-9]{1,8}",
                ".{0,8}",
                proptest::collection::vec(arb_element(), 0..3),
            ),
            0..3,
        ),
        any::<bool>(),
    )
        .prop_map(|(land_width, land_height, elements, layouts, select)| {
            let saved_layouts: Vec<SavedLayout> = layouts
                .into_iter()
                .map(|(id, name, elements)| SavedLayout {
                    id: LayoutId(id),
                    name,
                    land_width,
                    land_height,
                    elements,
                })
                .collect();
            let current_layout_id = if select {
                saved_layouts.first().map(|l| l.id.clone())
            } else {
                None
            };
            AppState {
                land_width,
                land_height,
                elements,
                new_element_width: 10.0,
                new_element_height: 10.0,
                saved_layouts,
                current_layout_id,
            }
        })
}

proptest! {
    #[test]
    fn prop_blob_round_trip(state in arb_state()) {
        let blob = encode_state(&state).unwrap();
        prop_assert_eq!(decode_state(&blob).unwrap(), state);
    }

    #[test]
    fn prop_share_token_round_trip(state in arb_state()) {
        let token = encode_share_token(&state).unwrap();
        prop_assert_eq!(decode_share_token(&token).unwrap(), state);
    }
}
