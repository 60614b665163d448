use vspeak_core::tn::{TNEngine, TNMode};

fn main() {
    vspeak_core::init_logging();

    let engine = TNEngine::new(TNMode::Auto);

    let test_cases = vec![
        ("It's $50.", "It's Fifty dollars."),
        ("Part 1", "Part One"),
        ("Tim has 2 apples in 2023.", "Tim has Two apples in 2023."),
        ("Pay $12345 now", "Pay 12345 dollars now"),
        ("我有3个苹果", "我有3个苹果"),
    ];

    println!("Testing TN rules:");
    println!("{}", "=".repeat(60));

    for (input, expected) in test_cases {
        let result = engine.process(input);
        let status = if result.text == expected { "✓" } else { "✗" };
        println!("{} Input:    {}", status, input);
        println!("  Expected: {}", expected);
        println!("  Got:      {}", result.text);
        for change in &result.changes {
            println!("    [{}] {} → {}", change.rule, change.original_text, change.normalized_text);
        }
        println!();
    }
}
