use email_input::*;

fn mounted(options: &[&str]) -> EmailInput {
    let source = FixedOptions::new(options.iter().copied());
    let mut input = EmailInput::new();
    tokio_test::block_on(input.load_options(&source)).unwrap();
    input
}

#[test]
fn test_view_empty_widget() {
    let input = EmailInput::new();
    let view = input.view();

    assert_eq!(view.label, "Recipients");
    assert!(view.tags.is_empty());
    assert_eq!(view.text, "");
    assert_eq!(view.placeholder.as_deref(), Some("Enter recipients..."));
    assert!(view.dropdown.is_none());
}

#[test]
fn test_view_tags_carry_validity_and_remove_index() {
    let mut input = EmailInput::new();
    input.commit("a@b.com");
    input.commit("not-an-email");

    let view = input.view();

    assert_eq!(view.tags.len(), 2);
    assert_eq!(view.tags[0].value, "a@b.com");
    assert!(view.tags[0].valid);
    assert_eq!(view.tags[0].remove_index, 0);
    assert_eq!(view.tags[1].value, "not-an-email");
    assert!(!view.tags[1].valid);
    assert_eq!(view.tags[1].remove_index, 1);
}

#[test]
fn test_view_placeholder_gone_once_tagged() {
    let mut input = EmailInput::new();
    input.commit("a@b.com");

    assert!(input.view().placeholder.is_none());
}

#[test]
fn test_view_dropdown_present_only_with_candidates() {
    let mut input = mounted(&["a@b.com", "ab@b.com"]);

    assert!(input.view().dropdown.is_none());

    input.set_text("a");
    let dropdown = input.view().dropdown.unwrap();
    assert_eq!(dropdown.items, ["a@b.com", "ab@b.com"]);

    input.set_text("zzz");
    assert!(input.view().dropdown.is_none());
}

#[test]
fn test_view_text_mirrors_input() {
    let mut input = EmailInput::new();
    input.set_text("partial");

    assert_eq!(input.view().text, "partial");
}

#[test]
fn test_view_serializes() {
    let mut input = mounted(&["a@b.com"]);
    input.commit("not-an-email");
    input.set_text("a");

    let json = serde_json::to_value(input.view()).unwrap();

    assert_eq!(json["label"], "Recipients");
    assert_eq!(json["tags"][0]["valid"], false);
    assert_eq!(json["dropdown"]["items"][0], "a@b.com");
    assert_eq!(json["placeholder"], serde_json::Value::Null);
}
