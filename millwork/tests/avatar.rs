use millwork::avatar::{Avatar, AvatarCount, AvatarGroup, AvatarSize};
use millwork::factory::Passthrough;
use webdom::render_html;

#[test]
fn test_avatar_renders_initials_and_title() {
    let html = render_html(&Avatar::new().name("Jane Doe").build());
    insta::assert_snapshot!(
        html,
        @r#"<span class="mlw-avatar" title="Jane Doe"><div class="mlw-avatar__icon"></div><div class="mlw-avatar__text"><div class="mlw-avatar__text-inner">JD</div></div></span>"#
    );
}

#[test]
fn test_avatar_without_name_has_no_title() {
    let html = render_html(&Avatar::new().build());
    assert!(!html.contains("title="));
    assert!(html.contains("mlw-avatar__text-inner"));
}

#[test]
fn test_avatar_size_variant() {
    let element = Avatar::new().size(AvatarSize::Small).build();
    assert!(element.classes.tokens().contains(&"mlw-avatar--small"));
}

#[test]
fn test_avatar_boolean_modifiers() {
    let element = Avatar::new().square(true).interactive(true).build();
    let tokens = element.classes.tokens();
    assert!(tokens.contains(&"mlw-avatar--square"));
    assert!(tokens.contains(&"mlw-avatar--interactive"));
    assert!(tokens.contains(&"mlw-ripple-surface"));
    assert!(!tokens.contains(&"mlw-avatar--has-image"));
}

#[test]
fn test_non_interactive_avatar_has_no_ripple_surface() {
    let element = Avatar::new().build();
    assert!(!element.classes.tokens().contains(&"mlw-ripple-surface"));
}

#[test]
fn test_avatar_image_covers_by_default() {
    let html = render_html(&Avatar::new().src("me.png").build());
    assert!(html.contains("mlw-avatar--has-image"));
    assert!(html.contains("background-image: url(me.png)"));
    assert!(html.contains("background-size: cover"));
}

#[test]
fn test_avatar_image_contain() {
    let html = render_html(&Avatar::new().src("me.png").contain(true).build());
    assert!(html.contains("background-size: contain"));
}

#[test]
fn test_avatar_without_image_has_no_inline_style() {
    let html = render_html(&Avatar::new().name("Jane Doe").build());
    assert!(!html.contains("style="));
}

#[test]
fn test_count_renders_value() {
    let html = render_html(&AvatarCount::new(7).build());
    assert!(html.contains(">7<"));
    assert!(html.contains("mlw-avatar--count"));
    assert!(!html.contains("mlw-avatar--smaller-text"));
}

#[test]
fn test_count_three_digits_gets_smaller_text() {
    let element = AvatarCount::new(100).build();
    assert!(element.classes.tokens().contains(&"mlw-avatar--smaller-text"));
}

#[test]
fn test_count_overflow_modifier() {
    let element = AvatarCount::new(9).overflow(true).build();
    assert!(element
        .classes
        .tokens()
        .contains(&"mlw-avatar--count-overflow"));
}

#[test]
fn test_group_holds_children() {
    let group = AvatarGroup::new()
        .dense(true)
        .child(Avatar::new().name("Jane Doe").build())
        .child(AvatarCount::new(3).overflow(true).build())
        .build();

    assert!(group.classes.tokens().contains(&"mlw-avatar-group--dense"));
    let html = render_html(&group);
    assert!(html.contains("JD"));
    assert!(html.contains(">3<"));
}

#[test]
fn test_passthrough_props_are_forwarded() {
    let element = Avatar::new()
        .name("Jane Doe")
        .passthrough(Passthrough::new().id("lead").class("team-avatar"))
        .build();

    assert_eq!(element.id.as_deref(), Some("lead"));
    // Caller classes come after the component's own.
    let tokens = element.classes.tokens();
    assert_eq!(tokens.first(), Some(&"mlw-avatar"));
    assert_eq!(tokens.last(), Some(&"team-avatar"));
}
