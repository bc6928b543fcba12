use super::*;
use serde_json::json;

#[test]
fn parses_hex_forms() {
    assert_eq!(Color::parse_hex("#e5e7eb").unwrap(), Color::GRAY_200);
    assert_eq!(Color::parse_hex("FFF").unwrap(), Color::WHITE);
    assert_eq!(
        Color::parse_hex("#0000ff80").unwrap(),
        Color::rgba(0, 0, 255, 0x80)
    );
    assert!(Color::parse_hex("#12345").is_err());
    assert!(Color::parse_hex("#gg0000").is_err());
}

#[test]
fn hex_output_drops_alpha_only_when_opaque() {
    assert_eq!(Color::GRAY_800.to_hex(), "#1f2937");
    assert_eq!(Color::rgba(1, 2, 3, 4).to_hex(), "#01020304");
    assert_eq!(Color::rgba(1, 2, 3, 4).to_hex_rgb(), "#010203");
}

#[test]
fn deserializes_string_and_array() {
    let c: Color = serde_json::from_value(json!("#ff0000")).unwrap();
    assert_eq!(c, Color::rgb(255, 0, 0));

    let c: Color = serde_json::from_value(json!([10, 20, 30])).unwrap();
    assert_eq!(c, Color::rgb(10, 20, 30));

    assert!(serde_json::from_value::<Color>(json!([1, 2])).is_err());
    assert_eq!(serde_json::to_value(Color::WHITE).unwrap(), json!("#ffffff"));
}
