//! End-to-end: raw extraction JSON in, aligned pairs out.

use hanviet_core::align::{AlignParams, align_document};
use hanviet_core::model::{ingest, spans_from_json};
use hanviet_core::script::{Script, ScriptClassifier};

#[test]
fn test_json_to_pairs() {
    // bboxes arrive in every upstream shape: flat list, stringified tuple,
    // and a 4-point polygon
    let json = r#"[
        {"text": "四", "bbox": [125.9, 85.78, 197.89, 133.78], "page_num": 1},
        {"text": " Tứ ", "bbox": "(141.97, 134.32, 161.11, 148.36)", "page_num": 1},
        {"text": "天", "bbox": [[300.0, 85.0], [340.0, 85.0], [340.0, 130.0], [300.0, 130.0]], "page_num": 1},
        {"text": "Thiên", "bbox": [305.0, 134.0, 335.0, 148.0], "page_num": 1},
        {"text": "12", "bbox": [500.0, 700.0, 520.0, 710.0], "page_num": 1}
    ]"#;

    let classifier = ScriptClassifier::default();
    let spans = ingest(spans_from_json(json).unwrap(), &classifier);
    assert_eq!(spans.len(), 5);
    assert_eq!(spans[1].text, "Tứ");
    assert_eq!(spans[4].lang, Script::Other);

    let pairs = align_document(&AlignParams::default(), &spans);
    assert_eq!(pairs.len(), 2);
    assert_eq!(pairs[0].text_cn, "四");
    assert_eq!(pairs[0].text_vi, "Tứ");
    assert_eq!(pairs[1].text_cn, "天");
    assert_eq!(pairs[1].text_vi, "Thiên");
}

#[test]
fn test_malformed_bbox_drops_span_not_page() {
    let json = r#"[
        {"text": "四", "bbox": [100.0, 100.0, 120.0, 120.0], "page_num": 1},
        {"text": "Tứ", "bbox": [100.0, 125.0, 120.0, 135.0], "page_num": 1},
        {"text": "học", "bbox": "garbage", "page_num": 1}
    ]"#;

    let classifier = ScriptClassifier::default();
    let spans = ingest(spans_from_json(json).unwrap(), &classifier);
    assert_eq!(spans.len(), 2);

    let pairs = align_document(&AlignParams::default(), &spans);
    assert_eq!(pairs.len(), 1);
    assert_eq!(pairs[0].text_vi, "Tứ");
}

#[test]
fn test_pairs_serialize_round_trip() {
    let json = r#"[
        {"text": "四", "bbox": [100.0, 100.0, 120.0, 120.0], "page_num": 3},
        {"text": "Tứ", "bbox": [100.0, 125.0, 120.0, 135.0], "page_num": 3}
    ]"#;

    let classifier = ScriptClassifier::default();
    let spans = ingest(spans_from_json(json).unwrap(), &classifier);
    let pairs = align_document(&AlignParams::default(), &spans);

    let encoded = serde_json::to_string(&pairs).unwrap();
    let decoded: Vec<hanviet_core::model::AlignedPair> = serde_json::from_str(&encoded).unwrap();
    assert_eq!(pairs, decoded);
    assert!(encoded.contains("\"page_num\":3"));
    assert!(encoded.contains("\"text_cn\":\"四\""));
}
