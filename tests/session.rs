use passgen::Session;
use passgen::cli::{Prompter, SessionError};
use passgen::terminal::Style;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn run(script: &str, seed: u64) -> (Result<(), SessionError>, String) {
    let prompter = Prompter::new(script.as_bytes(), Vec::new(), Style::Plain);
    let mut session = Session::new(prompter, StdRng::seed_from_u64(seed));
    let result = session.run();
    let out = String::from_utf8(session.into_output()).unwrap();
    (result, out)
}

fn passwords(out: &str) -> Vec<(String, String)> {
    out.lines()
        .filter_map(|line| line.strip_prefix("Password "))
        .filter_map(|rest| rest.split_once(": "))
        .map(|(n, pass)| (n.to_string(), pass.to_string()))
        .collect()
}

#[test]
fn single_mixed_case_password_then_goodbye() {
    let (result, out) = run("8\n\ny\ny\nn\nn\nn\n", 1);
    assert!(result.is_ok());

    assert!(out.starts_with("Welcome to the Password Generator!\n"));
    assert!(out.contains("\nGenerated passwords:\n"));
    assert!(out.ends_with("Goodbye!\n"));

    let found = passwords(&out);
    assert_eq!(found.len(), 1);
    let (n, pass) = &found[0];
    assert_eq!(n, "1");
    assert_eq!(pass.len(), 8);
    assert!(pass.chars().all(|c| c.is_ascii_alphabetic()));
    assert!(pass.chars().any(|c| c.is_ascii_lowercase()));
    assert!(pass.chars().any(|c| c.is_ascii_uppercase()));

    let goodbye = out.find("Goodbye!").unwrap();
    let line = out.find("Password 1: ").unwrap();
    assert!(line < goodbye);
}

#[test]
fn passwords_are_numbered_in_order() {
    let (result, out) = run("10\n3\nn\nn\ny\ny\nno\n", 2);
    assert!(result.is_ok());

    let found = passwords(&out);
    let numbers: Vec<_> = found.iter().map(|(n, _)| n.as_str()).collect();
    assert_eq!(numbers, ["1", "2", "3"]);
    for (_, pass) in &found {
        assert_eq!(pass.len(), 10);
        assert!(pass.chars().any(|c| c.is_ascii_digit()));
        assert!(pass.chars().any(|c| c.is_ascii_punctuation()));
        assert!(!pass.chars().any(|c| c.is_ascii_alphabetic()));
    }
}

#[test]
fn second_round_collects_fresh_settings() {
    let script = "6\n\ny\nn\nn\nn\ny\n12\n2\nn\ny\nn\nn\nn\n";
    let (result, out) = run(script, 3);
    assert!(result.is_ok());

    assert_eq!(out.matches("Welcome to the Password Generator!").count(), 1);
    assert_eq!(out.matches("Generated passwords:").count(), 2);
    assert_eq!(out.matches("Goodbye!").count(), 1);

    let found = passwords(&out);
    assert_eq!(found.len(), 3);
    assert_eq!(found[0].0, "1");
    assert_eq!(found[0].1.len(), 6);
    assert!(found[0].1.chars().all(|c| c.is_ascii_lowercase()));
    for (_, pass) in &found[1..] {
        assert_eq!(pass.len(), 12);
        assert!(pass.chars().all(|c| c.is_ascii_uppercase()));
    }
}

#[test]
fn invalid_answers_are_reprompted_without_losing_progress() {
    let script = "abc\n3\n4\n0\n\nmaybe\ny\ny\ny\ny\nn\n";
    let (result, out) = run(script, 4);
    assert!(result.is_ok());

    assert!(out.contains("Please enter a valid number for the length.\n"));
    assert!(out.contains("Password length must be at least 4.\n"));
    assert!(out.contains("Please enter 1 or greater for the number of passwords.\n"));
    assert!(out.contains("Please enter 'y' or 'n'.\n"));

    let found = passwords(&out);
    assert_eq!(found.len(), 1);
    let pass = &found[0].1;
    assert_eq!(pass.len(), 4);
    assert_eq!(pass.chars().filter(|c| c.is_ascii_lowercase()).count(), 1);
    assert_eq!(pass.chars().filter(|c| c.is_ascii_uppercase()).count(), 1);
    assert_eq!(pass.chars().filter(|c| c.is_ascii_digit()).count(), 1);
    assert_eq!(pass.chars().filter(|c| c.is_ascii_punctuation()).count(), 1);
}

#[test]
fn declining_every_class_restarts_collection() {
    let script = "8\n\nn\nn\nn\nn\n5\n\nn\nn\ny\nn\nn\n";
    let (result, out) = run(script, 5);
    assert!(result.is_ok());

    assert!(out.contains("You must choose at least one character type.\n"));
    assert_eq!(out.matches("How long should the password be?").count(), 2);

    let found = passwords(&out);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].1.len(), 5);
    assert!(found[0].1.chars().all(|c| c.is_ascii_digit()));
}

#[test]
fn closed_input_is_reported() {
    let (result, out) = run("8\n1\ny\n", 6);
    assert!(matches!(result, Err(SessionError::InputClosed)));
    assert!(passwords(&out).is_empty());
    assert!(!out.contains("Goodbye!"));
}
