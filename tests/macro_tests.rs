use safe_prompt::{Prompt, ScanOutcome, prompt_with};

fn session(input: &[u8]) -> Prompt<&[u8], Vec<u8>> {
    Prompt::new(input, Vec::new())
}

#[test]
#[allow(clippy::float_cmp)]
fn test_height_and_weight() {
    let mut prompt = session(b"1.80 72.5\n");
    let mut height = 0.0f32;
    let mut weight = 0.0f32;

    let outcome = prompt_with!(
        prompt,
        "Enter height followed by weight: ",
        "%f%f",
        &mut height,
        &mut weight
    )
    .unwrap();

    assert_eq!(outcome, ScanOutcome::Converted(2));
    assert_eq!(height, 1.80);
    assert_eq!(weight, 72.5);
}

#[test]
fn test_string_takes_buffer_and_capacity() {
    let mut prompt = session(b"teal 31\n");
    let mut color = Vec::new();
    let mut age = 0i32;

    let outcome = prompt_with!(&mut prompt, "", "%s %d", &mut color, 10, &mut age).unwrap();

    assert_eq!(outcome, ScanOutcome::Converted(2));
    assert_eq!(color, b"teal");
    assert_eq!(age, 31);
}

#[test]
fn test_message_expression_is_printed() {
    let mut prompt = session(b"7\n");
    let mut lucky = 0u8;
    let label = String::from("Lucky digit: ");

    prompt_with!(prompt, &label, "%c", &mut lucky).unwrap();

    assert_eq!(lucky, b'7');
    assert_eq!(prompt.writer().as_slice(), b"Lucky digit: ");
}

#[test]
fn test_format_without_specifiers() {
    let mut prompt = session(b"ignored\n");
    let outcome = prompt_with!(prompt, "Press enter", "").unwrap();
    assert_eq!(outcome, ScanOutcome::Converted(0));
}
