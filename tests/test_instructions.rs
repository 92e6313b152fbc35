use recipe_browser::{parse, ParsedInstructions};

#[test]
fn test_step_prefixed_instructions() {
    let parsed = parse("Step 1. Mix flour\nStep 2. Bake\nServes 4");
    assert_eq!(parsed.steps, vec!["Mix flour", "Bake"]);
    assert!(parsed.notes.is_empty());
}

#[test]
fn test_notes_after_marker() {
    let parsed = parse("1. Chop onions\nNotes\nBest served warm\nStore in fridge");
    assert_eq!(parsed.steps, vec!["Chop onions"]);
    assert_eq!(parsed.notes, vec!["Best served warm", "Store in fridge"]);
}

#[test]
fn test_typical_mealdb_paragraphs() {
    let text = "Preheat the oven to 200C.\r\n\r\nMix the butter and sugar until fluffy. Add the eggs one at a time.\r\n\r\nBake for 25 mins.";
    let parsed = parse(text);

    assert_eq!(parsed.steps.len(), 3);
    assert_eq!(
        parsed.steps[1],
        "Mix the butter and sugar until fluffy. Add the eggs one at a time."
    );
}

#[test]
fn test_nothing_after_notes_is_a_step() {
    let parsed = parse("- Whisk\nNOTES\nStep 9. Not a step\n* Nor this\nServes 10");
    assert_eq!(parsed.steps, vec!["Whisk"]);
    assert_eq!(parsed.notes, vec!["Step 9. Not a step", "* Nor this"]);
}

#[test]
fn test_serves_only() {
    let parsed = parse("SERVES 4");
    assert_eq!(parsed, ParsedInstructions::default());
}

#[test]
fn test_same_input_same_output() {
    let text = "1) Soak beans\n2) Drain\nNotes\nUse dried beans";
    let first = parse(text);
    let second = parse(text);
    assert_eq!(first, second);
}

#[test]
fn test_numbered_serves_line_dropped() {
    let parsed = parse("1. Serves 4\n2. Bake");
    assert_eq!(parsed.steps, vec!["Bake"]);
}
