use webdom::ClassList;

#[test]
fn test_base_only() {
    let classes = ClassList::new().base("x");
    assert_eq!(classes.to_string(), "x");
}

#[test]
fn test_toggle_true_appends_token() {
    let classes = ClassList::new().base("x").toggle("x--flag", true);
    assert_eq!(classes.to_string(), "x x--flag");
}

#[test]
fn test_toggle_false_contributes_nothing() {
    let classes = ClassList::new().base("x").toggle("x--flag", false);
    assert_eq!(classes.to_string(), "x");
}

#[test]
fn test_order_is_insertion_order() {
    let classes = ClassList::new()
        .base("root")
        .toggle("root--b", true)
        .toggle("root--a", true)
        .base("trailing");
    assert_eq!(classes.to_string(), "root root--b root--a trailing");
}

#[test]
fn test_identical_inputs_compose_identically() {
    let compose = || {
        ClassList::new()
            .base("root")
            .toggle("root--dense", true)
            .variant("root--size-", Some("small"))
    };
    assert_eq!(compose().to_string(), compose().to_string());
}

#[test]
fn test_variant_interpolates_value() {
    let classes = ClassList::new()
        .base("list")
        .variant("list--aspect-", Some("16x9"));
    assert_eq!(classes.to_string(), "list list--aspect-16x9");
}

#[test]
fn test_variant_absent_value_contributes_nothing() {
    let classes = ClassList::new()
        .base("list")
        .variant::<&str>("list--aspect-", None);
    assert_eq!(classes.to_string(), "list");
}

#[test]
fn test_equality_gated_token() {
    #[derive(PartialEq)]
    enum Align {
        Start,
        End,
    }
    let align = Align::End;
    let classes = ClassList::new()
        .base("cell")
        .toggle("cell--align-start", align == Align::Start)
        .toggle("cell--align-end", align == Align::End);
    assert_eq!(classes.to_string(), "cell cell--align-end");
}

#[test]
fn test_append_keeps_caller_classes_last() {
    let component = ClassList::new().base("root").toggle("root--flag", true);
    let caller = ClassList::new().base("custom");
    assert_eq!(component.append(caller).to_string(), "root root--flag custom");
}

#[test]
fn test_tokens_filters_inactive_entries() {
    let classes = ClassList::new()
        .base("a")
        .toggle("b", false)
        .toggle("c", true);
    assert_eq!(classes.tokens(), vec!["a", "c"]);
}

#[test]
fn test_empty_list() {
    let classes = ClassList::new();
    assert!(classes.is_empty());
    assert_eq!(classes.to_string(), "");
}

#[test]
fn test_all_gates_closed_is_empty() {
    let classes = ClassList::new().toggle("a", false).toggle("b", false);
    assert!(classes.is_empty());
}

#[test]
fn test_duplicates_are_preserved() {
    let classes = ClassList::new().base("x").base("x");
    assert_eq!(classes.to_string(), "x x");
}
