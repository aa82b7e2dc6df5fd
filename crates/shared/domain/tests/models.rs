use folio_domain::input::InputKind;
use folio_domain::reveal::{RevealRegion, VisibilityFlags};

#[test]
fn input_kinds_map_to_html_controls() {
    assert_eq!(InputKind::Text.html_type(), Some("text"));
    assert_eq!(InputKind::Phone.html_type(), Some("tel"));
    assert_eq!(InputKind::Textarea.html_type(), None);
    assert!(InputKind::Textarea.is_multiline());
    assert_eq!(InputKind::Textarea.to_string(), "textarea");
}

#[test]
fn only_phone_fields_force_validity_on_focus() {
    let forcing: Vec<_> = [
        InputKind::Text,
        InputKind::Email,
        InputKind::Password,
        InputKind::Number,
        InputKind::Phone,
        InputKind::Textarea,
    ]
    .into_iter()
    .filter(|kind| kind.forces_valid_on_focus())
    .collect();

    assert_eq!(forcing, vec![InputKind::Phone]);
}

#[test]
fn visibility_flags_track_regions_independently() {
    let mut flags = VisibilityFlags::default();
    assert!(!flags.image_visible());
    assert!(!flags.welcome_visible());

    flags.insert(RevealRegion::Welcome.into());
    assert!(flags.is_visible(RevealRegion::Welcome));
    assert!(!flags.is_visible(RevealRegion::Image));
}
